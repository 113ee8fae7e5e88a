//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`       - Store a redirect
//! - `GET  /{code}` - Resolve a redirect
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned and echoed
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics become 500 responses
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{recover, request_id, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = with_middleware(api::routes::redirect_routes().with_state(state));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Wraps a router in the request-scoped middleware stack.
///
/// Outermost first: request id assignment, tracing, request id propagation,
/// panic recovery. Panics therefore surface as 500 responses that still carry
/// the request id and are logged inside the request span.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(recover::layer())
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};
    use axum::routing::get;
    use axum_test::TestServer;

    async fn boom() -> &'static str {
        panic!("handler exploded")
    }

    fn panicking_server() -> TestServer {
        let router = Router::new()
            .route("/boom", get(boom))
            .route("/ok", get(|| async { "ok" }));
        TestServer::new(with_middleware(router)).unwrap()
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let server = panicking_server();

        let response = server.get("/boom").await;

        assert_eq!(response.status_code(), 500);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"]["code"], "internal_error");
        assert!(
            response
                .headers()
                .contains_key(request_id::REQUEST_ID_HEADER)
        );
    }

    #[tokio::test]
    async fn test_request_id_generated_when_absent() {
        let server = panicking_server();

        let response = server.get("/ok").await;

        response.assert_status_ok();
        let id = response
            .headers()
            .get(request_id::REQUEST_ID_HEADER)
            .expect("x-request-id header");
        assert!(!id.to_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_request_id_echoed_from_client() {
        let server = panicking_server();

        let response = server
            .get("/ok")
            .add_header(
                HeaderName::from_static(request_id::REQUEST_ID_HEADER),
                HeaderValue::from_static("client-chosen-id"),
            )
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.headers().get(request_id::REQUEST_ID_HEADER).unwrap(),
            "client-chosen-id"
        );
    }
}
