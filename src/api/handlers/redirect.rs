//! Handler for short code resolution.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its stored URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - **301 Moved Permanently** with `Location` set to the stored URL
/// - **404 Not Found** if the code was never stored
/// - **500 Internal Server Error** on storage failure
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let redirect = state.redirect_service.find(&code).await?;

    debug!(code = %redirect.code, url = %redirect.url, "resolved redirect");

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, redirect.url)],
    ))
}
