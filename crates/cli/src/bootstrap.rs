//! Connection bootstrap for the CLI
//!
//! Environment loading and configuration happen once at the entry point; the
//! resulting [`Config`] is passed explicitly into the catalog factory.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use wearvirtually_core::config::{Config, StorageConfig};
use wearvirtually_storage::{create_index_catalog, IndexCatalog};

/// Load variables from an env file into the process environment
///
/// Variables already set in the environment are kept. Returns `false` when
/// the file does not exist.
pub fn load_env_file(path: &Path) -> Result<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!(path = %path.display(), "Loaded environment file");
            Ok(true)
        }
        Err(e) if e.not_found() => {
            debug!(path = %path.display(), "No environment file found");
            Ok(false)
        }
        Err(e) => Err(e).context(format!(
            "Failed to load environment file {}",
            path.display()
        )),
    }
}

/// Load and validate configuration
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Create the index catalog and confirm the server answers
pub async fn connect_catalog(config: &StorageConfig) -> Result<Arc<dyn IndexCatalog>> {
    info!(
        "Connecting to {} ({})",
        config.redacted_uri(),
        config.provider
    );

    let catalog = create_index_catalog(config)
        .await
        .context("Failed to create database client")?;

    catalog.health_check().await.with_context(|| {
        format!(
            "Failed to connect to database '{}'",
            catalog.database_name()
        )
    })?;

    info!("Connected to database '{}'", catalog.database_name());
    Ok(catalog)
}
