//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod catalog;
mod logging;
mod output;
mod share;
mod store;

pub use catalog::{DEFAULT_CATALOG_URL, DEFAULT_TIMEOUT_SECONDS, FileCatalogConfig};
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use share::{DEFAULT_EXPORT_FILE, DEFAULT_SHARE_URL, FileShareConfig};
pub use store::FileStoreConfig;

use super::validation::{ConfigIssue, ConfigIssueCode};
use reqwest::Url;
use roster_domain::{CheckLimits, PopulationCodes, roster::selected::MAX_SKILL};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Catalog service settings
    pub catalog: FileCatalogConfig,
    /// Faction codes of the extinct and unique populations
    pub populations: PopulationCodes,
    /// Limits for the list-level checks
    pub checks: CheckLimits,
    /// Roster storage settings
    pub store: FileStoreConfig,
    /// Share link and export settings
    pub share: FileShareConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("catalog.base_url", &self.catalog.base_url),
            ("share.base_url", &self.share.base_url),
        ] {
            if Url::parse(value).is_err() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidUrl {
                        field: field.to_string(),
                        value: value.clone(),
                    },
                    format!("{}: '{}' is not a valid URL", field, value),
                ));
            }
        }

        if self.catalog.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "catalog.timeout_seconds cannot be 0",
            ));
        }

        for (field, value) in [
            ("populations.extinct", &self.populations.extinct),
            ("populations.unique", &self.populations.unique),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyPopulationCode {
                        field: field.to_string(),
                    },
                    format!("{} cannot be empty", field),
                ));
            }
        }

        if self.populations.extinct == self.populations.unique {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::SamePopulationCodes,
                format!(
                    "populations.extinct and populations.unique are both '{}'; every unique unit will be reported extinct",
                    self.populations.extinct
                ),
            ));
        }

        if self.checks.min_units > self.checks.max_units {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidListSize {
                    min: self.checks.min_units,
                    max: self.checks.max_units,
                },
                format!(
                    "checks.min_units ({}) is greater than checks.max_units ({})",
                    self.checks.min_units, self.checks.max_units
                ),
            ));
        }

        if self.checks.max_skill > MAX_SKILL {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::SkillOutOfRange {
                    max_skill: self.checks.max_skill,
                },
                format!(
                    "checks.max_skill ({}) is above the highest selectable skill ({})",
                    self.checks.max_skill, MAX_SKILL
                ),
            ));
        }

        issues
    }
}
