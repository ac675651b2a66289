//! Configuration module for the index maintenance tools
//!
//! Configuration is an explicit struct built once at the process entry point
//! and passed into the storage factory. It can be loaded from a TOML file
//! and/or environment variables.

mod defaults;
mod loading;
mod storage;

#[cfg(test)]
mod tests;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::{DEFAULT_ENV_FILE, MONGODB_DATABASE_ENV, MONGODB_URI_ENV};
pub use loading::EnvMap;

use defaults::*;

/// Returns the path to the global configuration file
///
/// The global config is stored at `~/.wearvirtually/config.toml`.
pub fn global_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| Error::config("Unable to determine home directory".to_string()))?;
    Ok(home_dir.join(".wearvirtually").join("config.toml"))
}

/// Main configuration structure for the maintenance tools
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Document store connection settings
///
/// # Providers
/// - `mongodb` (default): a live MongoDB deployment reached through `uri`
/// - `mock`: in-memory index catalog for testing
#[derive(Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Provider type: "mongodb" (default), "mock"
    #[serde(default = "default_storage_provider")]
    pub provider: String,

    /// Connection string (usually supplied through MONGODB_URI)
    #[serde(default)]
    pub uri: String,

    /// Database name; falls back to the default database in the URI
    #[serde(default)]
    pub database: Option<String>,

    /// Application name reported to the server
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Timeout for establishing a connection to a server
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Timeout for selecting a server before an operation fails
    #[serde(default = "default_server_selection_timeout_ms")]
    pub server_selection_timeout_ms: u64,
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("provider", &self.provider)
            .field("uri", &self.redacted_uri())
            .field("database", &self.database)
            .field("app_name", &self.app_name)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field(
                "server_selection_timeout_ms",
                &self.server_selection_timeout_ms,
            )
            .finish()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_storage_provider(),
            uri: String::new(),
            database: None,
            app_name: default_app_name(),
            connect_timeout_ms: default_connect_timeout_ms(),
            server_selection_timeout_ms: default_server_selection_timeout_ms(),
        }
    }
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        let storage = &self.storage;

        let valid_providers = ["mongodb", "mock"];
        if !valid_providers.contains(&storage.provider.as_str()) {
            return Err(Error::config(format!(
                "Invalid storage provider '{}'. Must be one of: {:?}",
                storage.provider, valid_providers
            )));
        }

        if storage.provider == "mongodb" {
            if storage.uri.trim().is_empty() {
                return Err(Error::config(format!(
                    "storage.uri must be set (or export {MONGODB_URI_ENV})"
                )));
            }
            if !storage.uri.starts_with("mongodb://") && !storage.uri.starts_with("mongodb+srv://")
            {
                return Err(Error::config(format!(
                    "Invalid connection string '{}'. Must start with mongodb:// or mongodb+srv://",
                    storage.redacted_uri()
                )));
            }
        }

        if let Some(database) = &storage.database {
            if database.trim().is_empty() {
                return Err(Error::config(
                    "storage.database must not be empty when set".to_string(),
                ));
            }
        }

        if storage.connect_timeout_ms == 0 {
            return Err(Error::config(
                "storage.connect_timeout_ms must be greater than 0".to_string(),
            ));
        }

        if storage.server_selection_timeout_ms == 0 {
            return Err(Error::config(
                "storage.server_selection_timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
