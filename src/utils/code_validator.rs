//! Short code validation.
//!
//! Codes are supplied by clients and become the path segment of `GET /{code}`,
//! so they are restricted to URL-safe characters.

use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

use crate::error::AppError;

/// Longest accepted code.
pub const MAX_CODE_LENGTH: usize = 64;

/// Compiled regex for code validation.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("code regex is valid"));

/// Validates a client-supplied short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() {
        return Err(AppError::bad_request(
            "Code must not be empty",
            json!({ "field": "code" }),
        ));
    }

    if code.len() > MAX_CODE_LENGTH {
        return Err(AppError::bad_request(
            format!("Code must be at most {MAX_CODE_LENGTH} characters"),
            json!({ "provided_length": code.len() }),
        ));
    }

    if !CODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Code can only contain letters, digits, hyphens and underscores",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_codes() {
        let longest = "a".repeat(MAX_CODE_LENGTH);
        for code in ["abc", "x", "My-Code_2024", longest.as_str()] {
            assert!(validate_code(code).is_ok(), "{code} should be valid");
        }
    }

    #[test]
    fn test_empty_code() {
        assert!(matches!(validate_code(""), Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_code_too_long() {
        let code = "a".repeat(MAX_CODE_LENGTH + 1);
        assert!(matches!(validate_code(&code), Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_code_invalid_characters() {
        for code in ["a/b", "a b", "ab?", "päth", "a.b"] {
            assert!(
                matches!(validate_code(code), Err(AppError::Validation { .. })),
                "{code} should be rejected"
            );
        }
    }
}
