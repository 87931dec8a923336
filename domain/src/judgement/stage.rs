//! Eligibility state machine
//!
//! Each roster entry moves through
//! `Primary → ExtinctCheck → UniqueCheck → Settled`, one catalog lookup per
//! pending stage:
//!
//! ```text
//!   Primary ──error──────────────────────────────▶ Settled (primary match as-is)
//!      │ found
//!      ▼
//!   ExtinctCheck ──found─────────────────────────▶ Settled (Extinct)
//!      │ not found
//!      ▼
//!   UniqueCheck ──found / not found──────────────▶ Settled (valid, maybe tagged unique)
//! ```
//!
//! The unique lookup is never issued once an entry is extinct, and no
//! secondary lookup is issued when the primary resolution already failed.

use super::result::{EntryTag, JudgementResult};
use crate::catalog::{CatalogMatch, CatalogUnit, MatchOutcome};
use crate::roster::query::UnitQuery;
use serde::{Deserialize, Serialize};

/// Catalog faction codes of the special populations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationCodes {
    pub extinct: String,
    pub unique: String,
}

impl Default for PopulationCodes {
    fn default() -> Self {
        Self {
            extinct: "3".to_string(),
            unique: "4".to_string(),
        }
    }
}

/// Faction scope of the lookup a stage needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupScope {
    /// The factions the roster was requested for
    Requested,
    /// The extinct population
    Extinct,
    /// The unique population
    Unique,
}

/// Where an entry currently is in its judgement
#[derive(Debug, Clone, PartialEq)]
pub enum JudgementStage {
    Primary,
    ExtinctCheck { unit: CatalogUnit },
    UniqueCheck { unit: CatalogUnit },
    Settled(JudgementResult),
}

impl JudgementStage {
    /// The lookup needed to advance, or `None` once settled
    pub fn pending_lookup(&self) -> Option<LookupScope> {
        match self {
            JudgementStage::Primary => Some(LookupScope::Requested),
            JudgementStage::ExtinctCheck { .. } => Some(LookupScope::Extinct),
            JudgementStage::UniqueCheck { .. } => Some(LookupScope::Unique),
            JudgementStage::Settled(_) => None,
        }
    }

    /// Feed the result of [`Self::pending_lookup`] and move to the next stage
    pub fn advance(self, query: &UnitQuery, lookup: CatalogMatch) -> Self {
        match self {
            JudgementStage::Primary => {
                if lookup.error().is_some() {
                    return JudgementStage::Settled(JudgementResult::from_match(lookup));
                }
                match lookup.into_unit() {
                    Some(unit) => JudgementStage::ExtinctCheck { unit },
                    None => JudgementStage::Settled(JudgementResult::from_match(
                        CatalogMatch::new(query.clone(), MatchOutcome::NotAvailable),
                    )),
                }
            }
            JudgementStage::ExtinctCheck { unit } => {
                if lookup.found() {
                    JudgementStage::Settled(JudgementResult::extinct(query, unit))
                } else {
                    JudgementStage::UniqueCheck { unit }
                }
            }
            JudgementStage::UniqueCheck { unit } => {
                let tag = lookup.found().then_some(EntryTag::Unique);
                JudgementStage::Settled(JudgementResult::valid(query, unit, tag))
            }
            settled @ JudgementStage::Settled(_) => settled,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, JudgementStage::Settled(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            JudgementStage::Primary => "primary",
            JudgementStage::ExtinctCheck { .. } => "extinct-check",
            JudgementStage::UniqueCheck { .. } => "unique-check",
            JudgementStage::Settled(_) => "settled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judgement::result::EntryError;

    fn query() -> UnitQuery {
        UnitQuery::new("4", "Atlas AS7-D")
    }

    fn found(id: u64) -> CatalogMatch {
        CatalogMatch::new(query(), MatchOutcome::Found(CatalogUnit::new("Atlas AS7-D").with_id(id)))
    }

    fn missing() -> CatalogMatch {
        CatalogMatch::new(query(), MatchOutcome::NotAvailable)
    }

    fn settle(stage: JudgementStage) -> JudgementResult {
        match stage {
            JudgementStage::Settled(result) => result,
            other => panic!("expected settled, got {}", other.name()),
        }
    }

    #[test]
    fn test_primary_error_settles_immediately() {
        let stage = JudgementStage::Primary.advance(&query(), missing());
        assert!(stage.is_settled());
        assert_eq!(stage.pending_lookup(), None);
        let result = settle(stage);
        assert!(!result.found);
        assert_eq!(result.error, Some(EntryError::NotAvailable));
    }

    #[test]
    fn test_primary_ambiguous_settles_found() {
        let ambiguous = CatalogMatch::new(
            query(),
            MatchOutcome::Ambiguous {
                first: CatalogUnit::new("Atlas AS7-D").with_id(1),
                candidates: 2,
            },
        );
        let result = settle(JudgementStage::Primary.advance(&query(), ambiguous));
        assert!(result.found);
        assert_eq!(result.error, Some(EntryError::Ambiguous));
    }

    #[test]
    fn test_extinct_overrides_primary_success() {
        let stage = JudgementStage::Primary.advance(&query(), found(1));
        assert_eq!(stage.pending_lookup(), Some(LookupScope::Extinct));
        let result = settle(stage.advance(&query(), found(99)));
        assert!(!result.found);
        assert_eq!(result.error, Some(EntryError::Extinct));
        // the primary unit is carried, not the extinct-population record
        assert_eq!(result.unit.and_then(|u| u.id), Some(1));
    }

    #[test]
    fn test_unique_tags_valid_entry() {
        let stage = JudgementStage::Primary
            .advance(&query(), found(1))
            .advance(&query(), missing());
        assert_eq!(stage.pending_lookup(), Some(LookupScope::Unique));
        let result = settle(stage.advance(&query(), found(2)));
        assert!(result.found);
        assert_eq!(result.tag, Some(EntryTag::Unique));
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_plain_valid_entry() {
        let result = settle(
            JudgementStage::Primary
                .advance(&query(), found(1))
                .advance(&query(), missing())
                .advance(&query(), missing()),
        );
        assert!(result.is_valid());
        assert_eq!(result.tag, None);
    }

    #[test]
    fn test_failed_extinct_lookup_falls_through_to_unique() {
        let stage = JudgementStage::Primary
            .advance(&query(), found(1))
            .advance(&query(), CatalogMatch::failed(query(), "timeout"));
        assert_eq!(stage.pending_lookup(), Some(LookupScope::Unique));
    }

    #[test]
    fn test_default_population_codes() {
        let codes = PopulationCodes::default();
        assert_eq!(codes.extinct, "3");
        assert_eq!(codes.unique, "4");
    }
}
