//! JSON encoding of redirects.

use crate::domain::entities::Redirect;
use crate::domain::serializer::{RedirectSerializer, SerializerError};

/// Media type of JSON payloads.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Structured-text serializer: an object with `code`, `url` and `created_at`.
///
/// This is the default encoding for requests without a recognized binary
/// content type.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializer;

impl RedirectSerializer for JsonSerializer {
    fn decode(&self, input: &[u8]) -> Result<Redirect, SerializerError> {
        serde_json::from_slice(input).map_err(|e| SerializerError::Decode(e.to_string()))
    }

    fn encode(&self, redirect: &Redirect) -> Result<Vec<u8>, SerializerError> {
        serde_json::to_vec(redirect).map_err(|e| SerializerError::Encode(e.to_string()))
    }

    fn content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }
}
