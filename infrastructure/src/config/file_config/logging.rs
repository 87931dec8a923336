//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Filter directive used when no `-v` flag is given (e.g. `"info"`)
    pub level: Option<String>,
    /// Also write logs to this file
    pub file: Option<PathBuf>,
}
