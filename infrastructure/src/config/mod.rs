//! Configuration file loading for mul-roster
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MUL_ROSTER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./roster.toml` or `./.roster.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/mul-roster/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{
    DEFAULT_CATALOG_URL, DEFAULT_EXPORT_FILE, DEFAULT_SHARE_URL, DEFAULT_TIMEOUT_SECONDS,
    FileCatalogConfig, FileConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
    FileShareConfig, FileStoreConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX, PROJECT_CONFIG_FILES};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
