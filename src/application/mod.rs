//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::redirect_service::RedirectService`] - Redirect validation, storage and lookup

pub mod services;
