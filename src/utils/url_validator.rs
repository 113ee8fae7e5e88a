//! Destination URL validation.
//!
//! URLs are stored exactly as submitted; this module only decides whether a
//! submitted URL is acceptable as a redirect target.

use url::Url;

/// Reasons a destination URL is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:`, `file:`, etc.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input,
/// [`UrlValidationError::InvalidFormat`] for unparsable or relative URLs,
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes, and
/// [`UrlValidationError::MissingHost`] when no host is present.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // The raw string becomes a Location header, which cannot carry whitespace or control characters
    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlValidationError::InvalidFormat(
            "URL contains whitespace or control characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_https() {
        assert!(validate_url("https://example.com").is_ok());
    }

    #[test]
    fn test_validate_with_path_query_and_port() {
        assert!(validate_url("http://example.com:8080/a/b?c=d#frag").is_ok());
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
        assert_eq!(validate_url("   "), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_validate_relative() {
        assert!(matches!(
            validate_url("example.com/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_rejects_javascript() {
        assert_eq!(
            validate_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_validate_rejects_ftp() {
        assert_eq!(
            validate_url("ftp://example.com/file"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_validate_rejects_control_characters() {
        assert!(matches!(
            validate_url("https://exa\nmple.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_rejects_surrounding_whitespace() {
        for url in [
            "  https://example.com/a  ",
            " https://example.com",
            "https://example.com ",
            "https://example.com/a b",
        ] {
            assert!(
                matches!(validate_url(url), Err(UrlValidationError::InvalidFormat(_))),
                "{url:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_missing_host() {
        assert!(validate_url("http://").is_err());
    }
}
