//! MongoDB implementation of the redirect repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::{self, doc};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, IndexModel};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::bounded;
use crate::domain::entities::Redirect;
use crate::domain::repositories::{RedirectRepository, RepositoryError, RepositoryResult};

/// Collection holding one document per redirect.
const COLLECTION: &str = "redirects";

/// Server error code for unique index violations.
const DUPLICATE_KEY: i32 = 11000;

/// Stored shape of a redirect.
///
/// `created_at` is kept as a native BSON date, which has millisecond precision.
#[derive(Debug, Serialize, Deserialize)]
struct RedirectDocument {
    code: String,
    url: String,
    created_at: bson::DateTime,
}

impl From<&Redirect> for RedirectDocument {
    fn from(redirect: &Redirect) -> Self {
        Self {
            code: redirect.code.clone(),
            url: redirect.url.clone(),
            created_at: bson::DateTime::from_millis(redirect.created_at.timestamp_millis()),
        }
    }
}

impl TryFrom<RedirectDocument> for Redirect {
    type Error = RepositoryError;

    fn try_from(document: RedirectDocument) -> Result<Self, Self::Error> {
        let millis = document.created_at.timestamp_millis();
        let created_at = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
            RepositoryError::Corrupt {
                code: document.code.clone(),
                message: format!("created_at out of range: {millis}"),
            }
        })?;

        Ok(Redirect::new(document.code, document.url, created_at))
    }
}

/// Document-store redirect storage.
///
/// The connection is established eagerly in [`MongoRedirectRepository::connect`];
/// the `mongodb::Client` is internally pooled and shared by all requests.
pub struct MongoRedirectRepository {
    collection: Collection<RedirectDocument>,
    timeout: Duration,
}

impl MongoRedirectRepository {
    /// Connects to MongoDB, pings the server and ensures a unique index on `code`.
    ///
    /// # Arguments
    ///
    /// - `mongo_url` - connection string (e.g., `"mongodb://localhost:27017"`)
    /// - `database` - database holding the `redirects` collection
    /// - `timeout` - upper bound for connecting and for every later operation
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Backend`] if the connection string is invalid
    /// or the server rejects the handshake, and [`RepositoryError::Timeout`] if
    /// the server cannot be reached within `timeout`.
    pub async fn connect(
        mongo_url: &str,
        database: &str,
        timeout: Duration,
    ) -> RepositoryResult<Self> {
        info!(database, "Connecting to MongoDB");

        let mut options = ClientOptions::parse(mongo_url)
            .await
            .map_err(|e| RepositoryError::backend("mongo.parse", e))?;
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client =
            Client::with_options(options).map_err(|e| RepositoryError::backend("mongo.client", e))?;
        let db = client.database(database);

        bounded("mongo.connect", timeout, async {
            db.run_command(doc! { "ping": 1 })
                .await
                .map_err(|e| RepositoryError::backend("mongo.ping", e))
        })
        .await?;

        let collection = db.collection::<RedirectDocument>(COLLECTION);

        let index = IndexModel::builder()
            .keys(doc! { "code": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        bounded("mongo.create_index", timeout, async {
            collection
                .create_index(index)
                .await
                .map_err(|e| RepositoryError::backend("mongo.create_index", e))
        })
        .await?;

        info!("Connected to MongoDB");

        Ok(Self {
            collection,
            timeout,
        })
    }
}

#[async_trait]
impl RedirectRepository for MongoRedirectRepository {
    async fn find(&self, code: &str) -> RepositoryResult<Redirect> {
        let document = bounded("mongo.find", self.timeout, async {
            self.collection
                .find_one(doc! { "code": code })
                .await
                .map_err(|e| RepositoryError::backend("mongo.find", e))
        })
        .await?;

        match document {
            Some(document) => Redirect::try_from(document),
            None => {
                debug!(code, "mongo miss");
                Err(RepositoryError::NotFound {
                    code: code.to_string(),
                })
            }
        }
    }

    async fn store(&self, redirect: &Redirect) -> RepositoryResult<()> {
        let document = RedirectDocument::from(redirect);

        bounded("mongo.store", self.timeout, async {
            self.collection
                .insert_one(&document)
                .await
                .map_err(|e| {
                    if is_duplicate_key(&e) {
                        RepositoryError::Duplicate {
                            code: redirect.code.clone(),
                        }
                    } else {
                        RepositoryError::backend("mongo.store", e)
                    }
                })
        })
        .await?;

        debug!(code = %redirect.code, "stored redirect in mongo");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mongo"
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_round_trip_at_millisecond_precision() {
        let created_at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let redirect = Redirect::new("abc", "https://example.com", created_at);

        let document = RedirectDocument::from(&redirect);
        let restored = Redirect::try_from(document).unwrap();

        assert_eq!(restored, redirect);
    }

    #[test]
    fn test_document_field_names() {
        let redirect = Redirect::new("abc", "https://example.com", Utc::now());

        let document = bson::to_document(&RedirectDocument::from(&redirect)).unwrap();

        assert_eq!(document.get_str("code").unwrap(), "abc");
        assert_eq!(document.get_str("url").unwrap(), "https://example.com");
        assert!(document.get_datetime("created_at").is_ok());
    }

    #[tokio::test]
    async fn test_connect_invalid_url() {
        let result =
            MongoRedirectRepository::connect("not-a-mongo-url", "redirects", Duration::from_secs(1))
                .await;

        assert!(matches!(result, Err(RepositoryError::Backend { .. })));
    }
}
