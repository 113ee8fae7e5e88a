//! # Redirect Service
//!
//! Maps short codes to destination URLs over HTTP, with interchangeable
//! storage backends and wire encodings.
//!
//! ## Architecture
//!
//! Requests flow Transport → Service → Repository, with the serializer used
//! by the transport only:
//!
//! - **Domain Layer** ([`domain`]) - The [`Redirect`](domain::entities::Redirect) entity, repository and serializer traits
//! - **Application Layer** ([`application`]) - Validation and error classification
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB, Redis and in-memory backends; JSON and MessagePack codecs
//! - **API Layer** ([`api`]) - Axum handlers, routes and middleware
//!
//! ## Endpoints
//!
//! - `POST /` - store a redirect; `Content-Type: application/x-msgpack` selects
//!   MessagePack, anything else JSON
//! - `GET /{code}` - 301 redirect to the stored URL
//!
//! ## Quick Start
//!
//! ```bash
//! export URL_DB="redis"
//! export REDIS_URL="redis://localhost:6379"
//! cargo run
//!
//! curl -i -X POST localhost:8000/ -d '{"code":"abc","url":"https://example.com"}'
//! curl -i localhost:8000/abc
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RedirectService;
    pub use crate::domain::entities::Redirect;
    pub use crate::domain::repositories::{RedirectRepository, RepositoryError};
    pub use crate::domain::serializer::{RedirectSerializer, SerializerError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::serialization::{
        JSON_CONTENT_TYPE, JsonSerializer, MSGPACK_CONTENT_TYPE, MsgPackSerializer,
        serializer_for,
    };
    pub use crate::state::AppState;
}
