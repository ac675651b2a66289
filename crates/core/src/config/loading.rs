//! Configuration loading from files and environment variables

use crate::error::{Error, Result};
use config::{Config as ConfigLib, ConfigBuilder as LibConfigBuilder, Environment, File, Map};
use std::path::Path;
use tracing::debug;

use super::defaults::*;
use super::{global_config_path, Config};

/// Environment snapshot used in place of the process environment
pub type EnvMap = Map<String, String>;

/// Helper to set a config default with consistent error mapping
fn set_config_default<T: Into<config::Value>>(
    builder: LibConfigBuilder<config::builder::DefaultState>,
    key: &str,
    value: T,
) -> Result<LibConfigBuilder<config::builder::DefaultState>> {
    builder
        .set_default(key, value)
        .map_err(|e| Error::config(format!("Failed to set {key} default: {e}")))
}

impl Config {
    /// Loads configuration from a TOML file with environment variable overrides
    ///
    /// Environment variables are prefixed with `WV_` and use double underscores
    /// for nested values, e.g. `WV_STORAGE__DATABASE=wear_virtually`.
    /// `MONGODB_URI` and `MONGODB_DATABASE` override everything else.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_file_with_env(path, None)
    }

    /// Same as [`Config::from_file`], reading overrides from `env` instead of
    /// the process environment when it is provided
    pub fn from_file_with_env(path: &Path, env: Option<&EnvMap>) -> Result<Self> {
        let builder = ConfigLib::builder();

        let builder = set_config_default(builder, "storage.provider", default_storage_provider())?;
        let builder = set_config_default(builder, "storage.app_name", default_app_name())?;
        let builder = set_config_default(
            builder,
            "storage.connect_timeout_ms",
            default_connect_timeout_ms() as i64,
        )?;
        let mut builder = set_config_default(
            builder,
            "storage.server_selection_timeout_ms",
            default_server_selection_timeout_ms() as i64,
        )?;

        if path.exists() {
            builder = builder.add_source(File::from(path));
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env.cloned()),
        );

        let lookup = |key: &str| match env {
            Some(map) => map.get(key).cloned(),
            None => std::env::var(key).ok(),
        };

        if let Some(uri) = lookup(MONGODB_URI_ENV) {
            builder = builder
                .set_override("storage.uri", uri)
                .map_err(|e| Error::config(format!("Failed to set {MONGODB_URI_ENV}: {e}")))?;
        }
        if let Some(database) = lookup(MONGODB_DATABASE_ENV) {
            builder = builder
                .set_override("storage.database", database)
                .map_err(|e| {
                    Error::config(format!("Failed to set {MONGODB_DATABASE_ENV}: {e}"))
                })?;
        }

        let config = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| Error::config(format!("Failed to deserialize config: {e}")))
    }

    /// Creates a config from a TOML string (useful for testing)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from a single file
    ///
    /// Precedence (lowest to highest):
    /// 1. Hardcoded defaults
    /// 2. Config file (~/.wearvirtually/config.toml or custom --config path)
    /// 3. Environment variables (WV_*)
    /// 4. MONGODB_URI / MONGODB_DATABASE
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => global_config_path()?,
        };
        Self::from_file(&path)
    }
}
