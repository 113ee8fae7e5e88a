#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use redirect_service::api::routes::redirect_routes;
use redirect_service::domain::repositories::RedirectRepository;
use redirect_service::infrastructure::persistence::InMemoryRedirectRepository;
use redirect_service::state::AppState;
use std::sync::Arc;

pub fn create_test_state() -> (AppState, Arc<InMemoryRedirectRepository>) {
    let repository = Arc::new(InMemoryRedirectRepository::new());
    let state = AppState::new(repository.clone());

    (state, repository)
}

pub fn create_test_app(state: AppState) -> Router {
    redirect_routes().with_state(state)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryRedirectRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(create_test_app(state)).unwrap();

    (server, repository)
}

/// Exercises the repository contract shared by every backend.
///
/// `unique` keeps codes from colliding with data left by earlier runs.
pub async fn assert_repository_contract(repo: &dyn RedirectRepository, unique: &str) {
    use chrono::Utc;
    use redirect_service::domain::entities::Redirect;
    use redirect_service::domain::repositories::RepositoryError;

    let code = format!("contract-{unique}");
    let missing = format!("missing-{unique}");

    let result = repo.find(&missing).await;
    assert!(matches!(result, Err(RepositoryError::NotFound { .. })));

    let redirect = Redirect::new(code.clone(), "https://example.com/contract", Utc::now());
    repo.store(&redirect).await.unwrap();

    let found = repo.find(&code).await.unwrap();
    assert_eq!(found.code, redirect.code);
    assert_eq!(found.url, redirect.url);
    assert_eq!(
        found.created_at.timestamp_millis(),
        redirect.created_at.timestamp_millis()
    );

    let duplicate = Redirect::new(code.clone(), "https://example.com/other", Utc::now());
    let result = repo.store(&duplicate).await;
    assert!(matches!(result, Err(RepositoryError::Duplicate { .. })));

    assert_eq!(repo.find(&code).await.unwrap().url, "https://example.com/contract");
}
