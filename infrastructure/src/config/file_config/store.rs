//! Roster storage configuration from TOML (`[store]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw store configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Directory holding saved rosters
    pub dir: Option<PathBuf>,
}

impl FileStoreConfig {
    /// The configured directory, or `$XDG_DATA_HOME/mul-roster/rosters`
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("mul-roster").join("rosters")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let config = FileStoreConfig {
            dir: Some(PathBuf::from("/tmp/rosters")),
        };
        assert_eq!(config.resolved_dir(), Some(PathBuf::from("/tmp/rosters")));
    }
}
