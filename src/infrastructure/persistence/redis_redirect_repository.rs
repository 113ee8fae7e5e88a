//! Redis implementation of the redirect repository.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};

use super::bounded;
use crate::domain::entities::Redirect;
use crate::domain::repositories::{RedirectRepository, RepositoryError, RepositoryResult};

/// Key-value redirect storage.
///
/// Each redirect is stored as a JSON document under `redirect:{code}`.
/// Uses `ConnectionManager` so one multiplexed connection is shared by all
/// in-flight requests and re-established transparently after failures.
pub struct RedisRedirectRepository {
    client: ConnectionManager,
    timeout: Duration,
    key_prefix: String,
}

impl RedisRedirectRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `timeout` - upper bound for connecting and for every later operation
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Backend`] if the URL is invalid or the
    /// connection cannot be established, and [`RepositoryError::Timeout`] if
    /// connecting takes longer than `timeout`.
    pub async fn connect(redis_url: &str, timeout: Duration) -> RepositoryResult<Self> {
        info!("Connecting to Redis");

        let client =
            Client::open(redis_url).map_err(|e| RepositoryError::backend("redis.open", e))?;

        let manager = bounded("redis.connect", timeout, async {
            let mut manager = ConnectionManager::new(client)
                .await
                .map_err(|e| RepositoryError::backend("redis.connect", e))?;
            manager
                .ping::<()>()
                .await
                .map_err(|e| RepositoryError::backend("redis.ping", e))?;
            Ok::<_, RepositoryError>(manager)
        })
        .await?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            timeout,
            key_prefix: "redirect:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, code: &str) -> String {
        format!("{}{}", self.key_prefix, code)
    }
}

#[async_trait]
impl RedirectRepository for RedisRedirectRepository {
    async fn find(&self, code: &str) -> RepositoryResult<Redirect> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        let raw = bounded("redis.find", self.timeout, async {
            conn.get::<_, Option<String>>(&key)
                .await
                .map_err(|e| RepositoryError::backend("redis.find", e))
        })
        .await?;

        let Some(raw) = raw else {
            debug!(code, "redis miss");
            return Err(RepositoryError::NotFound {
                code: code.to_string(),
            });
        };

        decode_value(code, &raw)
    }

    async fn store(&self, redirect: &Redirect) -> RepositoryResult<()> {
        let key = self.build_key(&redirect.code);
        let value = encode_value(redirect)?;
        let mut conn = self.client.clone();

        let inserted = bounded("redis.store", self.timeout, async {
            conn.set_nx::<_, _, bool>(&key, value)
                .await
                .map_err(|e| RepositoryError::backend("redis.store", e))
        })
        .await?;

        if !inserted {
            return Err(RepositoryError::Duplicate {
                code: redirect.code.clone(),
            });
        }

        debug!(code = %redirect.code, "stored redirect in redis");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

fn encode_value(redirect: &Redirect) -> RepositoryResult<String> {
    serde_json::to_string(redirect).map_err(|e| RepositoryError::backend("redis.encode", e))
}

fn decode_value(code: &str, raw: &str) -> RepositoryResult<Redirect> {
    serde_json::from_str(raw).map_err(|e| RepositoryError::Corrupt {
        code: code.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_value_round_trip() {
        let redirect = Redirect::new("abc", "https://example.com", Utc::now());

        let raw = encode_value(&redirect).unwrap();
        let decoded = decode_value("abc", &raw).unwrap();

        assert_eq!(decoded, redirect);
    }

    #[test]
    fn test_decode_corrupt_value() {
        let result = decode_value("abc", "not json");

        assert!(matches!(result, Err(RepositoryError::Corrupt { code, .. }) if code == "abc"));
    }

    #[tokio::test]
    async fn test_connect_invalid_url() {
        let result =
            RedisRedirectRepository::connect("not-a-redis-url", Duration::from_secs(1)).await;

        assert!(matches!(result, Err(RepositoryError::Backend { .. })));
    }
}
