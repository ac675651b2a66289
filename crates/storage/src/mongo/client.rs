//! MongoDB implementation of [`IndexCatalog`]

use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client, Database,
};
use tracing::debug;
use wearvirtually_core::config::StorageConfig;

use super::classify::classify;
use crate::error::{IndexErrorKind, Operation, Result, StorageError};
use crate::IndexCatalog;

/// Index catalog backed by a live MongoDB database
pub(crate) struct MongoIndexCatalog {
    database: Database,
}

impl MongoIndexCatalog {
    /// Build a client from configuration and bind it to the target database
    ///
    /// No network round trip happens here; the driver connects lazily on the
    /// first operation, bounded by the configured timeouts.
    pub(crate) async fn connect(config: &StorageConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(config.uri.as_str())
            .await
            .map_err(|e| {
                StorageError::InvalidConfig(format!(
                    "Failed to parse connection string {}: {e}",
                    config.redacted_uri()
                ))
            })?;

        options.app_name = Some(config.app_name.clone());
        options.connect_timeout = Some(config.connect_timeout());
        options.server_selection_timeout = Some(config.server_selection_timeout());

        let database_name = resolve_database_name(
            config.database.as_deref(),
            options.default_database.as_deref(),
        )?;

        let client = Client::with_options(options)
            .map_err(|e| StorageError::ConnectionFailed(format!("Failed to create client: {e}")))?;

        debug!(
            uri = %config.redacted_uri(),
            database = %database_name,
            "Created MongoDB client"
        );

        Ok(Self {
            database: client.database(&database_name),
        })
    }

    fn driver_error(
        operation: Operation,
        collection: &str,
        index: Option<&str>,
        err: &mongodb::error::Error,
    ) -> StorageError {
        StorageError::operation(operation, collection, index, classify(err), err.to_string())
    }
}

/// Pick the database to operate on
///
/// An explicitly configured name wins over the one embedded in the URI.
pub(crate) fn resolve_database_name(
    configured: Option<&str>,
    from_uri: Option<&str>,
) -> Result<String> {
    configured
        .or(from_uri)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            StorageError::InvalidConfig(
                "No database selected: add one to the connection string \
                 (mongodb://host/<database>) or set MONGODB_DATABASE"
                    .to_string(),
            )
        })
}

#[async_trait]
impl IndexCatalog for MongoIndexCatalog {
    fn database_name(&self) -> &str {
        self.database.name()
    }

    async fn health_check(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| Self::driver_error(Operation::Ping, self.database.name(), None, &e))?;

        Ok(())
    }

    async fn list_index_names(&self, collection: &str) -> Result<Vec<String>> {
        let coll = self.database.collection::<Document>(collection);

        match coll.list_index_names().await {
            Ok(names) => Ok(names),
            Err(e) if classify(&e) == IndexErrorKind::NotFound => {
                debug!(collection, "Collection does not exist, treating as having no indexes");
                Ok(Vec::new())
            }
            Err(e) => Err(Self::driver_error(
                Operation::ListIndexes,
                collection,
                None,
                &e,
            )),
        }
    }

    async fn drop_index(&self, collection: &str, index: &str) -> Result<()> {
        self.database
            .collection::<Document>(collection)
            .drop_index(index)
            .await
            .map_err(|e| Self::driver_error(Operation::DropIndex, collection, Some(index), &e))
    }
}
