//! Roster list encoding
//!
//! A roster travels as a compact string of `skill:name` entries joined by `;`,
//! e.g. `4:Atlas AS7-D;3:Locust LCT-1V`. Parsing never fails: malformed
//! entries degrade into queries the catalog will not match.

use serde::{Deserialize, Serialize};

/// Separator between roster entries
pub const ENTRY_SEPARATOR: char = ';';

/// Separator between the skill rating and the unit name of one entry
pub const SKILL_SEPARATOR: char = ':';

/// One requested roster line (Value Object)
///
/// The skill rating is kept as the raw string from the encoded list; it is
/// checked later by the list-level skill check, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitQuery {
    pub skill: String,
    pub name: String,
}

impl UnitQuery {
    pub fn new(skill: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            name: name.into(),
        }
    }

    /// Whether the entry carries a usable unit name
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Normalized name used for catalog comparisons (trimmed, lowercase)
    pub fn match_key(&self) -> String {
        normalize_name(&self.name)
    }
}

impl std::fmt::Display for UnitQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.skill, SKILL_SEPARATOR, self.name)
    }
}

/// Normalize a unit name for case-insensitive, whitespace-trimmed comparison
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Decode an encoded roster into ordered queries.
///
/// - `None` or an empty string yields no queries.
/// - Blank entries (e.g. a trailing `;`) are skipped.
/// - An entry without `:` keeps its text as the skill and gets an empty name.
///
/// # Example
///
/// ```
/// use roster_domain::roster::query::parse_roster;
///
/// let queries = parse_roster(Some("4:Atlas AS7-D;3:Locust LCT-1V"));
/// assert_eq!(queries.len(), 2);
/// assert_eq!(queries[0].name, "Atlas AS7-D");
/// assert_eq!(queries[1].skill, "3");
/// ```
pub fn parse_roster(encoded: Option<&str>) -> Vec<UnitQuery> {
    let Some(encoded) = encoded else {
        return Vec::new();
    };

    encoded
        .split(ENTRY_SEPARATOR)
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| match entry.split_once(SKILL_SEPARATOR) {
            Some((skill, name)) => UnitQuery::new(skill.trim(), name.trim()),
            None => UnitQuery::new(entry.trim(), ""),
        })
        .collect()
}

/// Encode queries back into the compact roster form
pub fn encode_roster(queries: &[UnitQuery]) -> String {
    queries
        .iter()
        .map(|q| q.to_string())
        .collect::<Vec<_>>()
        .join(&ENTRY_SEPARATOR.to_string())
}
