//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod redirect_repository;

pub use redirect_repository::{RedirectRepository, RepositoryError, RepositoryResult};

#[cfg(test)]
pub use redirect_repository::MockRedirectRepository;
