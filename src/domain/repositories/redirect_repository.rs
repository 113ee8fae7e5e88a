//! Repository trait for redirect storage.

use crate::domain::entities::Redirect;
use async_trait::async_trait;
use std::time::Duration;

/// Errors reported by redirect storage backends.
///
/// Every backend maps its native "missing record" signal to
/// [`RepositoryError::NotFound`] so the service can classify lookups without
/// inspecting backend-specific errors.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("redirect '{code}' not found")]
    NotFound { code: String },

    #[error("redirect '{code}' already exists")]
    Duplicate { code: String },

    #[error("{operation} timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    #[error("{operation} failed: {message}")]
    Backend {
        operation: &'static str,
        message: String,
    },

    #[error("stored redirect '{code}' is unreadable: {message}")]
    Corrupt { code: String, message: String },
}

impl RepositoryError {
    pub fn backend(operation: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Backend {
            operation,
            message: err.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage interface for redirects.
///
/// Implementations must be safe for concurrent use by many in-flight requests
/// and must bound each call with their configured timeout.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryRedirectRepository`] - process-local map
/// - [`crate::infrastructure::persistence::MongoRedirectRepository`] - MongoDB documents
/// - [`crate::infrastructure::persistence::RedisRedirectRepository`] - Redis keys
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectRepository: Send + Sync {
    /// Finds the redirect stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no redirect has this code.
    /// Returns [`RepositoryError::Timeout`] or [`RepositoryError::Backend`] on
    /// storage failures.
    async fn find(&self, code: &str) -> RepositoryResult<Redirect>;

    /// Inserts a new redirect.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Duplicate`] if the code is already taken.
    /// Returns [`RepositoryError::Timeout`] or [`RepositoryError::Backend`] on
    /// storage failures.
    async fn store(&self, redirect: &Redirect) -> RepositoryResult<()>;

    /// Name of the backend, used in logs.
    fn backend_name(&self) -> &'static str;
}
