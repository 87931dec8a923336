//! Share link and export configuration from TOML (`[share]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_SHARE_URL: &str = "http://localhost:3000/validate/result";
pub const DEFAULT_EXPORT_FILE: &str = "list.json";

/// Raw share configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileShareConfig {
    /// Page that validates a shared roster
    pub base_url: String,
    /// File written by `roster export` when no path is given
    pub export_file: String,
}

impl Default for FileShareConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SHARE_URL.to_string(),
            export_file: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}
