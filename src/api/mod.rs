//! HTTP transport layer.
//!
//! Translates HTTP requests into [`crate::application::services::RedirectService`]
//! calls and service results into responses.
//!
//! # Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
