//! Catalog match classification
//!
//! The catalog search is fuzzy, so the candidates it returns are narrowed to
//! exact (trimmed, case-insensitive) name matches before deciding the outcome.

use super::unit::CatalogUnit;
use crate::judgement::result::EntryError;
use crate::roster::query::{UnitQuery, normalize_name};

/// Outcome of resolving one query against the catalog
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// Exactly one exact-name candidate
    Found(CatalogUnit),
    /// Several exact-name candidates; the first in provider order is kept
    Ambiguous { first: CatalogUnit, candidates: usize },
    /// No exact-name candidate under the requested constraints
    NotAvailable,
    /// The lookup itself failed (network, HTTP status, or body parsing)
    Failed(String),
}

/// A query together with its catalog outcome
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogMatch {
    pub query: UnitQuery,
    pub outcome: MatchOutcome,
}

impl CatalogMatch {
    pub fn new(query: UnitQuery, outcome: MatchOutcome) -> Self {
        Self { query, outcome }
    }

    /// Classify provider candidates for a query.
    ///
    /// Provider order is authoritative: with several matches the first one
    /// is kept and nothing is re-sorted.
    pub fn classify(query: UnitQuery, candidates: Vec<CatalogUnit>) -> Self {
        let key = query.match_key();
        let mut matches = candidates
            .into_iter()
            .filter(|unit| normalize_name(&unit.name) == key);

        let first = matches.next();
        let outcome = match (first, matches.count()) {
            (None, _) => MatchOutcome::NotAvailable,
            (Some(unit), 0) => MatchOutcome::Found(unit),
            (Some(first), rest) => MatchOutcome::Ambiguous {
                first,
                candidates: rest + 1,
            },
        };
        Self::new(query, outcome)
    }

    pub fn failed(query: UnitQuery, message: impl Into<String>) -> Self {
        Self::new(query, MatchOutcome::Failed(message.into()))
    }

    /// Whether the catalog produced a unit (ambiguous matches count as found)
    pub fn found(&self) -> bool {
        matches!(
            self.outcome,
            MatchOutcome::Found(_) | MatchOutcome::Ambiguous { .. }
        )
    }

    /// Error annotation, if any. Ambiguity is an error annotation even
    /// though the match is still considered found.
    pub fn error(&self) -> Option<EntryError> {
        match &self.outcome {
            MatchOutcome::Found(_) => None,
            MatchOutcome::Ambiguous { .. } => Some(EntryError::Ambiguous),
            MatchOutcome::NotAvailable => Some(EntryError::NotAvailable),
            MatchOutcome::Failed(message) => Some(EntryError::Lookup(message.clone())),
        }
    }

    /// The matched unit (first candidate when ambiguous)
    pub fn unit(&self) -> Option<&CatalogUnit> {
        match &self.outcome {
            MatchOutcome::Found(unit) | MatchOutcome::Ambiguous { first: unit, .. } => Some(unit),
            MatchOutcome::NotAvailable | MatchOutcome::Failed(_) => None,
        }
    }

    pub fn into_unit(self) -> Option<CatalogUnit> {
        match self.outcome {
            MatchOutcome::Found(unit) | MatchOutcome::Ambiguous { first: unit, .. } => Some(unit),
            MatchOutcome::NotAvailable | MatchOutcome::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atlas() -> UnitQuery {
        UnitQuery::new("4", "Atlas AS7-D")
    }

    #[test]
    fn test_zero_candidates_not_available() {
        let m = CatalogMatch::classify(atlas(), vec![]);
        assert!(!m.found());
        assert_eq!(m.error(), Some(EntryError::NotAvailable));
        assert!(m.unit().is_none());
    }

    #[test]
    fn test_fuzzy_candidates_filtered_out() {
        let m = CatalogMatch::classify(
            atlas(),
            vec![CatalogUnit::new("Atlas AS7-D2"), CatalogUnit::new("Atlas II AS7-D-H")],
        );
        assert_eq!(m.outcome, MatchOutcome::NotAvailable);
    }

    #[test]
    fn test_single_match_trimmed_case_insensitive() {
        let m = CatalogMatch::classify(
            atlas(),
            vec![
                CatalogUnit::new("Atlas AS7-K"),
                CatalogUnit::new("  atlas as7-d ").with_id(140),
            ],
        );
        assert!(m.found());
        assert_eq!(m.error(), None);
        assert_eq!(m.unit().and_then(|u| u.id), Some(140));
    }

    #[test]
    fn test_multiple_matches_keep_first_in_provider_order() {
        let m = CatalogMatch::classify(
            atlas(),
            vec![
                CatalogUnit::new("Atlas AS7-D").with_id(2),
                CatalogUnit::new("Atlas AS7-D").with_id(1),
                CatalogUnit::new("ATLAS AS7-D").with_id(3),
            ],
        );
        assert!(m.found());
        assert_eq!(m.error(), Some(EntryError::Ambiguous));
        assert_eq!(m.unit().and_then(|u| u.id), Some(2));
        assert!(matches!(m.outcome, MatchOutcome::Ambiguous { candidates: 3, .. }));
    }

    #[test]
    fn test_failed_lookup_not_found_with_message() {
        let m = CatalogMatch::failed(atlas(), "connection refused");
        assert!(!m.found());
        assert_eq!(
            m.error(),
            Some(EntryError::Lookup("connection refused".to_string()))
        );
    }
}
