//! Redirect lookup and creation service.

use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::Redirect;
use crate::domain::repositories::{RedirectRepository, RepositoryError};
use crate::error::AppError;
use crate::utils::code_validator::validate_code;
use crate::utils::url_validator::validate_url;

/// Business-logic facade over a [`RedirectRepository`].
///
/// Validates input before it reaches storage and translates repository errors
/// into [`AppError`] kinds the transport layer maps to status codes.
///
/// `R` may be unsized, so the same service type serves a concrete backend in
/// tests and `dyn RedirectRepository` selected at startup.
pub struct RedirectService<R: RedirectRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: RedirectRepository + ?Sized> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves a code to its stored redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no redirect has this code.
    /// Returns [`AppError::Internal`] on any storage failure.
    pub async fn find(&self, code: &str) -> Result<Redirect, AppError> {
        self.repository
            .find(code)
            .await
            .map_err(|e| self.classify("find", e))
    }

    /// Validates, timestamps and stores a redirect.
    ///
    /// `created_at` is always set to the current time; any value supplied by
    /// the client is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the code or URL is invalid; storage
    /// is not touched in that case.
    /// Returns [`AppError::Conflict`] if the code is already taken.
    /// Returns [`AppError::Internal`] on any storage failure.
    pub async fn store(&self, redirect: Redirect) -> Result<Redirect, AppError> {
        validate_code(&redirect.code)?;
        validate_url(&redirect.url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        let redirect = redirect.created(Utc::now());

        self.repository
            .store(&redirect)
            .await
            .map_err(|e| self.classify("store", e))?;

        info!(
            code = %redirect.code,
            backend = self.repository.backend_name(),
            "redirect stored"
        );

        Ok(redirect)
    }

    fn classify(&self, operation: &str, err: RepositoryError) -> AppError {
        match err {
            RepositoryError::NotFound { code } => {
                AppError::not_found("Redirect not found", json!({ "code": code }))
            }
            RepositoryError::Duplicate { code } => AppError::conflict(
                "A redirect with this code already exists",
                json!({ "code": code }),
            ),
            other => {
                warn!(
                    operation,
                    backend = self.repository.backend_name(),
                    error = %other,
                    "storage failure"
                );
                AppError::internal("Storage failure", json!({ "operation": operation }))
            }
        }
    }
}
