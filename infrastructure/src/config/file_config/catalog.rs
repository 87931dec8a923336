//! Catalog service configuration from TOML (`[catalog]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_CATALOG_URL: &str = "http://masterunitlist.info";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Base URL of the Master Unit List service
    pub base_url: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
    /// User-Agent header sent with every lookup
    pub user_agent: String,
}

impl FileCatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: format!("mul-roster/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
