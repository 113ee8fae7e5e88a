//! Domain layer containing the redirect entity and the contracts around it.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait implemented by every backend
//! - [`serializer`] - Wire codec trait implemented by every encoding
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Concrete backends live in [`crate::infrastructure::persistence`]
//! and concrete encodings in [`crate::infrastructure::serialization`].

pub mod entities;
pub mod repositories;
pub mod serializer;
