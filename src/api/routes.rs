//! Redirect route configuration.

use crate::api::handlers::{redirect_handler, store_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes served by the redirect service.
///
/// # Endpoints
///
/// - `POST /`        - Store a redirect (JSON or MessagePack body)
/// - `GET  /{code}`  - Resolve a code with a 301 redirect
pub fn redirect_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(store_handler))
        .route("/{code}", get(redirect_handler))
}
