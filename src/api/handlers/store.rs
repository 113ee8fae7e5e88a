//! Handler for redirect creation.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::infrastructure::serialization::serializer_for;
use crate::state::AppState;

/// Stores a redirect submitted in the request body.
///
/// # Endpoint
///
/// `POST /`
///
/// # Encoding
///
/// The `Content-Type` header selects the codec for both the request and the
/// response: `application/x-msgpack` selects MessagePack, anything else
/// (including no header) selects JSON.
///
/// # Request Body
///
/// ```json
/// { "code": "abc", "url": "https://example.com" }
/// ```
///
/// # Response
///
/// **201 Created** with the stored redirect, including its `created_at`:
///
/// ```json
/// { "code": "abc", "url": "https://example.com", "created_at": "2026-10-18T12:00:00Z" }
/// ```
///
/// # Errors
///
/// - **400 Bad Request** if the code or URL is invalid
/// - **409 Conflict** if the code is already taken
/// - **500 Internal Server Error** if the body cannot be decoded, the response
///   cannot be encoded, or storage fails
pub async fn store_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let serializer = serializer_for(content_type);

    let redirect = serializer.decode(&body)?;
    let stored = state.redirect_service.store(redirect).await?;
    let encoded = serializer.encode(&stored)?;

    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, serializer.content_type())],
        encoded,
    ))
}
