//! In-memory implementation of the redirect repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Redirect;
use crate::domain::repositories::{RedirectRepository, RepositoryError, RepositoryResult};

/// Process-local redirect storage.
///
/// Used by tests and local development. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryRedirectRepository {
    redirects: RwLock<HashMap<String, Redirect>>,
}

impl InMemoryRedirectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored redirects.
    pub async fn len(&self) -> usize {
        self.redirects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.redirects.read().await.is_empty()
    }
}

#[async_trait]
impl RedirectRepository for InMemoryRedirectRepository {
    async fn find(&self, code: &str) -> RepositoryResult<Redirect> {
        self.redirects
            .read()
            .await
            .get(code)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                code: code.to_string(),
            })
    }

    async fn store(&self, redirect: &Redirect) -> RepositoryResult<()> {
        let mut redirects = self.redirects.write().await;

        match redirects.entry(redirect.code.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicate {
                code: redirect.code.clone(),
            }),
            Entry::Vacant(slot) => {
                debug!(code = %redirect.code, "stored redirect in memory");
                slot.insert(redirect.clone());
                Ok(())
            }
        }
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
