//! MessagePack encoding of redirects.

use crate::domain::entities::Redirect;
use crate::domain::serializer::{RedirectSerializer, SerializerError};

/// Media type that selects the MessagePack encoding.
pub const MSGPACK_CONTENT_TYPE: &str = "application/x-msgpack";

/// Compact-binary serializer.
///
/// Redirects are packed as a map keyed by field name, so payloads produced by
/// other MessagePack implementations decode as long as they use the same keys.
#[derive(Debug, Default, Clone, Copy)]
pub struct MsgPackSerializer;

impl RedirectSerializer for MsgPackSerializer {
    fn decode(&self, input: &[u8]) -> Result<Redirect, SerializerError> {
        rmp_serde::from_slice(input).map_err(|e| SerializerError::Decode(e.to_string()))
    }

    fn encode(&self, redirect: &Redirect) -> Result<Vec<u8>, SerializerError> {
        rmp_serde::to_vec_named(redirect).map_err(|e| SerializerError::Encode(e.to_string()))
    }

    fn content_type(&self) -> &'static str {
        MSGPACK_CONTENT_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde::Serialize;

    #[test]
    fn test_msgpack_round_trip() {
        let redirect = Redirect::new("x-1_Y", "http://example.org/a/b", Utc::now());

        let bytes = MsgPackSerializer.encode(&redirect).unwrap();
        let decoded = MsgPackSerializer.decode(&bytes).unwrap();

        assert_eq!(decoded, redirect);
    }

    #[test]
    fn test_msgpack_is_not_json() {
        let redirect = Redirect::new("abc", "https://example.com", Utc::now());

        let bytes = MsgPackSerializer.encode(&redirect).unwrap();

        assert!(serde_json::from_slice::<serde_json::Value>(&bytes).is_err());
    }

    #[test]
    fn test_msgpack_decode_without_timestamp() {
        #[derive(Serialize)]
        struct Partial<'a> {
            code: &'a str,
            url: &'a str,
        }

        let bytes = rmp_serde::to_vec_named(&Partial {
            code: "abc",
            url: "https://example.com",
        })
        .unwrap();

        let decoded = MsgPackSerializer.decode(&bytes).unwrap();
        assert_eq!(decoded.code, "abc");
        assert_eq!(decoded.url, "https://example.com");
    }

    #[test]
    fn test_msgpack_decode_garbage() {
        let result = MsgPackSerializer.decode(&[0xc1, 0x00, 0xff]);

        assert!(matches!(result, Err(SerializerError::Decode(_))));
    }
}
