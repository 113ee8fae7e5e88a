//! HTTP middleware for request processing.
//!
//! - [`request_id`] - Assign and echo `x-request-id`
//! - [`tracing`] - Request spans and response logging
//! - [`recover`] - Convert handler panics into 500 responses

pub mod recover;
pub mod request_id;
pub mod tracing;
