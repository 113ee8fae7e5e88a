//! Wire codec trait for redirect payloads.

use crate::domain::entities::Redirect;

/// Errors raised while converting between bytes and [`Redirect`].
#[derive(Debug, thiserror::Error)]
pub enum SerializerError {
    #[error("failed to decode redirect: {0}")]
    Decode(String),

    #[error("failed to encode redirect: {0}")]
    Encode(String),
}

/// Bidirectional conversion between a request/response body and a [`Redirect`].
///
/// For every valid redirect `r`, `decode(&encode(&r)?)? == r`.
pub trait RedirectSerializer: Send + Sync {
    fn decode(&self, input: &[u8]) -> Result<Redirect, SerializerError>;

    fn encode(&self, redirect: &Redirect) -> Result<Vec<u8>, SerializerError>;

    /// Media type written to the `Content-Type` of encoded responses.
    fn content_type(&self) -> &'static str;
}
