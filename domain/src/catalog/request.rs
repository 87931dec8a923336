//! Catalog search request

use serde::{Deserialize, Serialize};

/// One unit search against the catalog.
///
/// Maps onto the catalog's `Name`, `AvailableEras` and (repeated) `Factions`
/// query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRequest {
    pub name: String,
    pub era: String,
    pub factions: Vec<String>,
}

impl CatalogRequest {
    pub fn new(name: impl Into<String>, era: impl Into<String>, faction: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            era: era.into(),
            factions: vec![faction.into()],
        }
    }

    /// Add a second faction code (the general faction) when present
    pub fn with_optional_faction(mut self, faction: Option<&str>) -> Self {
        if let Some(faction) = faction {
            self.factions.push(faction.to_string());
        }
        self
    }
}

impl std::fmt::Display for CatalogRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' (era {}, factions {})",
            self.name,
            self.era,
            self.factions.join("+")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_faction_appended() {
        let req = CatalogRequest::new("Atlas AS7-D", "3025", "14").with_optional_faction(Some("2"));
        assert_eq!(req.factions, vec!["14".to_string(), "2".to_string()]);
        let req = CatalogRequest::new("Atlas AS7-D", "3025", "14").with_optional_faction(None);
        assert_eq!(req.factions.len(), 1);
    }

    #[test]
    fn test_display() {
        let req = CatalogRequest::new("Atlas AS7-D", "3025", "3");
        assert_eq!(req.to_string(), "'Atlas AS7-D' (era 3025, factions 3)");
    }
}
