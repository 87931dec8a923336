//! Per-entry verdicts
//!
//! A [`JudgementResult`] is produced once per roster entry and never changed
//! afterwards. It is what gets displayed and what list-level checks read.

use crate::catalog::{CatalogMatch, CatalogUnit};
use crate::roster::query::UnitQuery;
use serde::{Serialize, Serializer};

/// Name carried by the sentinel result of an unusable run
pub const INVALID_ENTRY_NAME: &str = "invalid";

/// Reason attached to an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// Era, faction or list missing; applies to the whole run
    InvalidParameters,
    /// Not in the catalog under the requested era/factions
    NotAvailable,
    /// Several catalog units share the name; informational only
    Ambiguous,
    /// Listed in the extinct population for the era
    Extinct,
    /// The catalog lookup failed
    Lookup(String),
}

impl EntryError {
    /// Whether the entry is still considered found despite this annotation
    pub fn is_informational(&self) -> bool {
        matches!(self, EntryError::Ambiguous)
    }
}

impl std::fmt::Display for EntryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryError::InvalidParameters => write!(f, "Invalid parameters for validation"),
            EntryError::NotAvailable => write!(f, "Not Available"),
            EntryError::Ambiguous => write!(f, "Ambiguous"),
            EntryError::Extinct => write!(f, "Unit is Extinct in the given era"),
            EntryError::Lookup(message) => write!(f, "{}", message),
        }
    }
}

impl Serialize for EntryError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Annotation on a valid entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryTag {
    /// Listed in the unique population for the era
    Unique,
}

impl std::fmt::Display for EntryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryTag::Unique => write!(f, "unique"),
        }
    }
}

/// Final verdict for one roster entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JudgementResult {
    pub skill: String,
    pub name: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<EntryError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<EntryTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<CatalogUnit>,
}

impl JudgementResult {
    /// The single result returned when the run parameters are unusable
    pub fn invalid_parameters() -> Self {
        Self {
            skill: String::new(),
            name: INVALID_ENTRY_NAME.to_string(),
            found: false,
            error: Some(EntryError::InvalidParameters),
            tag: None,
            unit: None,
        }
    }

    /// Carry a catalog match over unchanged, spread onto the query fields
    pub fn from_match(catalog_match: CatalogMatch) -> Self {
        let found = catalog_match.found();
        let error = catalog_match.error();
        let query = catalog_match.query.clone();
        Self {
            skill: query.skill,
            name: query.name,
            found,
            error,
            tag: None,
            unit: catalog_match.into_unit(),
        }
    }

    /// An entry that passed every eligibility stage
    pub fn valid(query: &UnitQuery, unit: CatalogUnit, tag: Option<EntryTag>) -> Self {
        Self {
            skill: query.skill.clone(),
            name: query.name.clone(),
            found: true,
            error: None,
            tag,
            unit: Some(unit),
        }
    }

    /// An entry that resolved but is extinct in the requested era
    pub fn extinct(query: &UnitQuery, unit: CatalogUnit) -> Self {
        Self {
            skill: query.skill.clone(),
            name: query.name.clone(),
            found: false,
            error: Some(EntryError::Extinct),
            tag: None,
            unit: Some(unit),
        }
    }

    pub fn is_unique(&self) -> bool {
        self.tag == Some(EntryTag::Unique)
    }

    /// Found with no error other than an informational annotation
    pub fn is_valid(&self) -> bool {
        self.found && self.error.as_ref().is_none_or(EntryError::is_informational)
    }

    /// Short status text: `Valid`, `Valid (unique)`, or the reason
    pub fn status(&self) -> String {
        match (&self.error, self.found, self.tag) {
            (Some(error), _, _) => error.to_string(),
            (None, true, Some(tag)) => format!("Valid ({})", tag),
            (None, true, None) => "Valid".to_string(),
            (None, false, _) => EntryError::NotAvailable.to_string(),
        }
    }
}
