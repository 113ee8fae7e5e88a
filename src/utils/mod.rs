//! Input validation helpers used by the service layer.
//!
//! - [`code_validator`] - Short code validation
//! - [`url_validator`] - Destination URL validation

pub mod code_validator;
pub mod url_validator;
