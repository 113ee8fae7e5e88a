//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::RedirectService;
use crate::domain::repositories::RedirectRepository;

/// Application state shared across requests.
///
/// Cloning is cheap; all clones share the same service and backend connection.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService<dyn RedirectRepository>>,
}

impl AppState {
    pub fn new(repository: Arc<dyn RedirectRepository>) -> Self {
        Self {
            redirect_service: Arc::new(RedirectService::new(repository)),
        }
    }
}
