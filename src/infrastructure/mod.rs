//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Storage backends (in-memory, MongoDB, Redis)
//! - [`serialization`] - Wire encodings (JSON, MessagePack)

pub mod persistence;
pub mod serialization;
