//! Wire encodings for redirect payloads.
//!
//! Provides two [`RedirectSerializer`] implementations:
//! - [`JsonSerializer`] - structured text, the default
//! - [`MsgPackSerializer`] - compact binary, selected by `application/x-msgpack`

mod json;
mod msgpack;

pub use json::{JSON_CONTENT_TYPE, JsonSerializer};
pub use msgpack::{MSGPACK_CONTENT_TYPE, MsgPackSerializer};

use crate::domain::serializer::RedirectSerializer;

/// Selects the serializer for a declared content type.
///
/// Only an exact match on [`MSGPACK_CONTENT_TYPE`] selects MessagePack; any
/// other value, including a missing header, falls back to JSON.
pub fn serializer_for(content_type: Option<&str>) -> &'static dyn RedirectSerializer {
    match content_type {
        Some(MSGPACK_CONTENT_TYPE) => &MsgPackSerializer,
        _ => &JsonSerializer,
    }
}
