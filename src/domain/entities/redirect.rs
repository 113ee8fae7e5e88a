//! Redirect entity mapping a short code to its destination URL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored redirect record.
///
/// The `code` is supplied by the client and is the exact-match lookup key.
/// Records are immutable once stored; `created_at` is stamped by
/// [`crate::application::services::RedirectService::store`].
///
/// When a payload omits `created_at`, decoding fills it with the current time
/// so clients may submit just `code` and `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub code: String,
    pub url: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Redirect {
    /// Creates a new Redirect instance.
    pub fn new(code: impl Into<String>, url: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            code: code.into(),
            url: url.into(),
            created_at,
        }
    }

    /// Returns a copy of this redirect with `created_at` replaced.
    pub fn created(self, created_at: DateTime<Utc>) -> Self {
        Self { created_at, ..self }
    }
}
