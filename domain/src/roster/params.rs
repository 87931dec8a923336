//! Validation run parameters
//!
//! Parameters arrive from the invocation context (a share URL or CLI flags)
//! and are read once per run.

use super::query::{UnitQuery, parse_roster};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Query parameter carrying the encoded roster
pub const LIST_PARAMETER: &str = "list";
/// Query parameter carrying the era code
pub const ERA_PARAMETER: &str = "era";
/// Query parameter carrying the specific faction code
pub const SPECIFIC_PARAMETER: &str = "specific";
/// Query parameter carrying the optional general faction code
pub const GENERAL_PARAMETER: &str = "general";

/// Raw parameters for one validation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterParams {
    pub era: Option<String>,
    pub specific_faction: Option<String>,
    pub general_faction: Option<String>,
    pub encoded_list: Option<String>,
}

impl RosterParams {
    pub fn new(era: impl Into<String>, specific_faction: impl Into<String>) -> Self {
        Self {
            era: Some(era.into()),
            specific_faction: Some(specific_faction.into()),
            general_faction: None,
            encoded_list: None,
        }
    }

    pub fn with_general_faction(mut self, general: impl Into<String>) -> Self {
        self.general_faction = Some(general.into());
        self
    }

    pub fn with_list(mut self, encoded: impl Into<String>) -> Self {
        self.encoded_list = Some(encoded.into());
        self
    }

    /// Build parameters from `key=value` pairs (already URL-decoded).
    ///
    /// Unknown keys are ignored; for repeated keys the first value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                LIST_PARAMETER => &mut params.encoded_list,
                ERA_PARAMETER => &mut params.era,
                SPECIFIC_PARAMETER => &mut params.specific_faction,
                GENERAL_PARAMETER => &mut params.general_faction,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    /// Check presence of era, specific faction, and at least one entry.
    pub fn validate(&self) -> Result<ValidatedParams, DomainError> {
        let era = non_blank(&self.era).ok_or(DomainError::MissingEra)?;
        let specific = non_blank(&self.specific_faction).ok_or(DomainError::MissingFaction)?;
        let queries = parse_roster(self.encoded_list.as_deref());
        if queries.is_empty() {
            return Err(DomainError::EmptyRoster);
        }

        Ok(ValidatedParams {
            era,
            specific_faction: specific,
            general_faction: non_blank(&self.general_faction),
            queries,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parameters that passed [`RosterParams::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedParams {
    pub era: String,
    pub specific_faction: String,
    pub general_faction: Option<String>,
    pub queries: Vec<UnitQuery>,
}
