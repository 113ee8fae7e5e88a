//! Redirect repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryRedirectRepository`] - process-local map for tests and development
//! - [`MongoRedirectRepository`] - MongoDB document store
//! - [`RedisRedirectRepository`] - Redis key-value store
//!
//! Network backends bound every call with [`bounded`], so a stalled server
//! surfaces as [`RepositoryError::Timeout`] instead of blocking the request.

pub mod memory_redirect_repository;
pub mod mongo_redirect_repository;
pub mod redis_redirect_repository;

pub use memory_redirect_repository::InMemoryRedirectRepository;
pub use mongo_redirect_repository::MongoRedirectRepository;
pub use redis_redirect_repository::RedisRedirectRepository;

use crate::domain::repositories::{RepositoryError, RepositoryResult};
use std::future::Future;
use std::time::Duration;

/// Runs a single storage operation under its own deadline.
pub(crate) async fn bounded<T, F>(
    operation: &'static str,
    timeout: Duration,
    future: F,
) -> RepositoryResult<T>
where
    F: Future<Output = RepositoryResult<T>>,
{
    tokio::time::timeout(timeout, future)
        .await
        .map_err(|_| RepositoryError::Timeout { operation, timeout })?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bounded_passes_result_through() {
        let result = bounded("test.op", Duration::from_secs(1), async { Ok(42) }).await;

        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_bounded_times_out() {
        let result: RepositoryResult<()> = bounded("test.op", Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        assert!(matches!(
            result,
            Err(RepositoryError::Timeout {
                operation: "test.op",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_bounded_keeps_inner_error() {
        let result: RepositoryResult<()> = bounded("test.op", Duration::from_secs(1), async {
            Err(RepositoryError::NotFound {
                code: "abc".to_string(),
            })
        })
        .await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }
}
