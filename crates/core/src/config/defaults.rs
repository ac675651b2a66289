//! Default values and functions for configuration

/// Environment variable holding the connection string
pub const MONGODB_URI_ENV: &str = "MONGODB_URI";

/// Environment variable overriding the database name
pub const MONGODB_DATABASE_ENV: &str = "MONGODB_DATABASE";

/// Environment file loaded by the binaries when no `--env-file` is given
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Prefix for structured environment overrides (`WV_STORAGE__DATABASE`)
pub(crate) const ENV_PREFIX: &str = "WV";

pub(crate) const DEFAULT_STORAGE_PROVIDER: &str = "mongodb";
pub(crate) const DEFAULT_APP_NAME: &str = "wv-indexes";

pub(crate) fn default_storage_provider() -> String {
    DEFAULT_STORAGE_PROVIDER.to_string()
}

pub(crate) fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

pub(crate) fn default_connect_timeout_ms() -> u64 {
    10_000
}

pub(crate) fn default_server_selection_timeout_ms() -> u64 {
    10_000
}
