//! Standard list-level checks

use super::registry::{CheckOutcome, CheckRegistry};
use crate::judgement::JudgementResult;
use crate::roster::query::normalize_name;
use serde::{Deserialize, Serialize};

pub const UNIT_AVAILABILITY: &str = "Unit Availability";
pub const DUPLICATE_UNITS: &str = "Duplicate Units";
pub const SKILL_RATINGS: &str = "Skill Ratings";
pub const LIST_SIZE: &str = "List Size";
pub const UNIQUE_UNITS: &str = "Unique Units";

/// Composition limits for the standard checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckLimits {
    pub min_units: usize,
    pub max_units: usize,
    pub max_skill: u8,
    pub max_unique: usize,
}

impl Default for CheckLimits {
    fn default() -> Self {
        Self {
            min_units: 1,
            max_units: 16,
            max_skill: 7,
            max_unique: 1,
        }
    }
}

impl CheckRegistry {
    /// The standard checks, in display order
    pub fn standard(limits: CheckLimits) -> Self {
        Self::new()
            .register(UNIT_AVAILABILITY, unit_availability)
            .register(DUPLICATE_UNITS, duplicate_units)
            .register(SKILL_RATINGS, move |results| {
                skill_ratings(results, limits.max_skill)
            })
            .register(LIST_SIZE, move |results| {
                list_size(results, limits.min_units, limits.max_units)
            })
            .register(UNIQUE_UNITS, move |results| {
                unique_units(results, limits.max_unique)
            })
    }
}

/// Every entry resolved without a disqualifying error
pub fn unit_availability(results: &[JudgementResult]) -> CheckOutcome {
    let failing: Vec<String> = results
        .iter()
        .filter(|r| !r.is_valid())
        .map(|r| format!("{} ({})", r.name, r.status()))
        .collect();

    if failing.is_empty() {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail(format!(
            "{} of {} units failed: {}",
            failing.len(),
            results.len(),
            failing.join(", ")
        ))
    }
}

/// No unit appears twice (names compared trimmed, case-insensitive)
pub fn duplicate_units(results: &[JudgementResult]) -> CheckOutcome {
    // first-seen order so the message is stable
    let mut counts: Vec<(String, &str, usize)> = Vec::new();
    for result in results {
        let key = normalize_name(&result.name);
        if key.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(k, _, _)| *k == key) {
            Some((_, _, count)) => *count += 1,
            None => counts.push((key, result.name.trim(), 1)),
        }
    }

    let duplicates: Vec<String> = counts
        .into_iter()
        .filter(|(_, _, count)| *count > 1)
        .map(|(_, name, count)| format!("{} (x{})", name, count))
        .collect();

    if duplicates.is_empty() {
        CheckOutcome::pass()
    } else {
        let label = if duplicates.len() == 1 {
            "Duplicate unit"
        } else {
            "Duplicate units"
        };
        CheckOutcome::fail(format!("{}: {}", label, duplicates.join(", ")))
    }
}

/// Every skill rating is an integer within `0..=max_skill`
pub fn skill_ratings(results: &[JudgementResult], max_skill: u8) -> CheckOutcome {
    let invalid: Vec<String> = results
        .iter()
        .filter(|r| {
            r.skill
                .trim()
                .parse::<u8>()
                .map_or(true, |skill| skill > max_skill)
        })
        .map(|r| format!("{} ('{}')", r.name, r.skill))
        .collect();

    if invalid.is_empty() {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail(format!(
            "Skill must be 0-{}: {}",
            max_skill,
            invalid.join(", ")
        ))
    }
}

/// Entry count within `min..=max`
pub fn list_size(results: &[JudgementResult], min: usize, max: usize) -> CheckOutcome {
    let count = results.len();
    if count < min {
        CheckOutcome::fail(format!("List has {} units, minimum is {}", count, min))
    } else if count > max {
        CheckOutcome::fail(format!("List has {} units, maximum is {}", count, max))
    } else {
        CheckOutcome::pass()
    }
}

/// At most `max` entries tagged unique
pub fn unique_units(results: &[JudgementResult], max: usize) -> CheckOutcome {
    let unique: Vec<&str> = results
        .iter()
        .filter(|r| r.is_unique())
        .map(|r| r.name.as_str())
        .collect();

    if unique.len() > max {
        CheckOutcome::fail(format!(
            "{} unique units, at most {} allowed: {}",
            unique.len(),
            max,
            unique.join(", ")
        ))
    } else {
        CheckOutcome::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogUnit;
    use crate::judgement::EntryTag;
    use crate::roster::query::UnitQuery;

    fn valid(skill: &str, name: &str) -> JudgementResult {
        JudgementResult::valid(&UnitQuery::new(skill, name), CatalogUnit::new(name), None)
    }

    fn unique(name: &str) -> JudgementResult {
        JudgementResult::valid(
            &UnitQuery::new("4", name),
            CatalogUnit::new(name),
            Some(EntryTag::Unique),
        )
    }

    #[test]
    fn test_duplicate_check_names_the_duplicate() {
        let results = vec![
            valid("4", "Atlas AS7-D"),
            valid("3", "Locust LCT-1V"),
            valid("2", "Atlas AS7-D"),
        ];
        let outcome = duplicate_units(&results);
        assert!(!outcome.valid);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Duplicate unit: Atlas AS7-D (x2)")
        );
    }

    #[test]
    fn test_duplicate_check_is_case_insensitive() {
        let results = vec![valid("4", "Atlas AS7-D"), valid("4", " atlas as7-d")];
        assert!(!duplicate_units(&results).valid);
    }

    #[test]
    fn test_duplicate_check_passes_distinct() {
        let results = vec![valid("4", "Atlas AS7-D"), valid("4", "Locust LCT-1V")];
        assert_eq!(duplicate_units(&results), CheckOutcome::pass());
    }

    #[test]
    fn test_unit_availability_lists_failures() {
        let q = UnitQuery::new("4", "Atlas AS7-D");
        let results = vec![
            JudgementResult::extinct(&q, CatalogUnit::new("Atlas AS7-D")),
            valid("3", "Locust LCT-1V"),
        ];
        let outcome = unit_availability(&results);
        assert!(!outcome.valid);
        assert_eq!(
            outcome.message.as_deref(),
            Some("1 of 2 units failed: Atlas AS7-D (Unit is Extinct in the given era)")
        );
        assert!(unit_availability(&results[1..]).valid);
    }

    #[test]
    fn test_skill_ratings() {
        assert!(skill_ratings(&[valid("0", "A"), valid("7", "B")], 7).valid);
        let outcome = skill_ratings(&[valid("8", "A"), valid("x", "B"), valid("4", "C")], 7);
        assert!(!outcome.valid);
        assert_eq!(outcome.message.as_deref(), Some("Skill must be 0-7: A ('8'), B ('x')"));
    }

    #[test]
    fn test_list_size() {
        assert!(!list_size(&[], 1, 16).valid);
        assert!(list_size(&[valid("4", "A")], 1, 16).valid);
        assert!(!list_size(&[valid("4", "A"), valid("4", "B")], 1, 1).valid);
    }

    #[test]
    fn test_unique_units_limit() {
        assert!(unique_units(&[unique("Yen-Lo-Wang")], 1).valid);
        let outcome = unique_units(&[unique("Yen-Lo-Wang"), unique("Bombardier")], 1);
        assert!(!outcome.valid);
    }

    #[test]
    fn test_standard_registry_order() {
        let registry = CheckRegistry::standard(CheckLimits::default());
        assert_eq!(
            registry.names(),
            vec![UNIT_AVAILABILITY, DUPLICATE_UNITS, SKILL_RATINGS, LIST_SIZE, UNIQUE_UNITS]
        );
        let reports = registry.evaluate(&[valid("4", "Atlas AS7-D"), valid("3", "Locust LCT-1V")]);
        assert!(reports.iter().all(|r| r.outcome.valid));
    }
}
