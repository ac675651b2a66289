use crate::{error::StorageError, mock::MockIndexCatalog, mongo::MongoIndexCatalog, IndexCatalog};
use std::sync::Arc;
use wearvirtually_core::config::StorageConfig;

/// Creates an index catalog based on configuration.
///
/// Returns a trait object that hides the backend so maintenance routines can
/// run against MongoDB or the in-memory mock interchangeably.
///
/// # Arguments
/// * `config` - Storage configuration specifying provider type and connection details
///
/// # Errors
/// Returns an error if the provider is unknown or the connection string
/// cannot be turned into a client
///
/// # Example
/// ```ignore
/// let config = StorageConfig {
///     uri: "mongodb://localhost:27017/wear_virtually".to_string(),
///     ..Default::default()
/// };
///
/// let catalog = create_index_catalog(&config).await?;
/// catalog.health_check().await?;
/// ```
pub async fn create_index_catalog(
    config: &StorageConfig,
) -> Result<Arc<dyn IndexCatalog>, StorageError> {
    match config.provider.as_str() {
        "mongodb" => {
            let catalog = MongoIndexCatalog::connect(config).await?;
            Ok(Arc::new(catalog) as Arc<dyn IndexCatalog>)
        }
        "mock" => Ok(Arc::new(MockIndexCatalog::new()) as Arc<dyn IndexCatalog>),
        other => Err(StorageError::InvalidConfig(format!(
            "Unknown storage provider '{other}'"
        ))),
    }
}
