//! Selected units and skill-adjusted point values

use crate::catalog::CatalogUnit;
use crate::roster::query::UnitQuery;
use serde::{Deserialize, Serialize};

/// Skill rating a freshly added unit starts with
pub const DEFAULT_SKILL: u8 = 4;

/// Highest selectable skill rating (0 is best)
pub const MAX_SKILL: u8 = 7;

/// A catalog unit placed on a roster at a given skill.
///
/// Stored flat: the catalog fields sit next to `ordinal` and `skill`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedUnit {
    pub ordinal: usize,
    pub skill: u8,
    #[serde(flatten)]
    pub unit: CatalogUnit,
}

impl SelectedUnit {
    pub fn new(ordinal: usize, unit: CatalogUnit) -> Self {
        Self {
            ordinal,
            skill: DEFAULT_SKILL,
            unit,
        }
    }

    pub fn with_skill(mut self, skill: u8) -> Self {
        self.skill = skill;
        self
    }

    pub fn name(&self) -> &str {
        &self.unit.name
    }

    /// Base point value (skill 4), zero when the catalog has none
    pub fn base_point_value(&self) -> u32 {
        self.unit.point_value.unwrap_or(0)
    }

    /// Point value at this unit's skill rating
    pub fn point_value(&self) -> u32 {
        adjusted_point_value(self.base_point_value(), self.skill)
    }

    pub fn to_query(&self) -> UnitQuery {
        UnitQuery::new(self.skill.to_string(), self.unit.name.clone())
    }
}

/// Adjust a skill-4 point value to another skill rating.
///
/// Each level better than 4 adds `1 + (pv - 3) / 5` (at least 1); each level
/// worse than 4 subtracts `1 + (pv - 5) / 10`. The result never drops below 1
/// for a unit that has a point value.
///
/// ```
/// use roster_domain::roster::selected::adjusted_point_value;
///
/// assert_eq!(adjusted_point_value(52, 4), 52);
/// assert_eq!(adjusted_point_value(52, 3), 62);
/// assert_eq!(adjusted_point_value(52, 5), 47);
/// ```
pub fn adjusted_point_value(base: u32, skill: u8) -> u32 {
    if base == 0 {
        return 0;
    }
    let skill = u32::from(skill);
    let pivot = u32::from(DEFAULT_SKILL);

    if skill < pivot {
        let step = 1 + base.saturating_sub(3) / 5;
        base + (pivot - skill) * step
    } else {
        let step = 1 + base.saturating_sub(5) / 10;
        base.saturating_sub((skill - pivot) * step).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improved_skill_steps() {
        // 0-7 PV: +1 per level
        assert_eq!(adjusted_point_value(7, 3), 8);
        // 8-12 PV: +2 per level
        assert_eq!(adjusted_point_value(8, 3), 10);
        assert_eq!(adjusted_point_value(12, 2), 16);
        // 13-17 PV: +3 per level
        assert_eq!(adjusted_point_value(13, 0), 25);
    }

    #[test]
    fn test_reduced_skill_steps() {
        // 0-14 PV: -1 per level
        assert_eq!(adjusted_point_value(14, 5), 13);
        // 15-24 PV: -2 per level
        assert_eq!(adjusted_point_value(15, 6), 11);
        assert_eq!(adjusted_point_value(24, 5), 22);
    }

    #[test]
    fn test_reduced_skill_never_below_one() {
        assert_eq!(adjusted_point_value(2, 7), 1);
        assert_eq!(adjusted_point_value(0, 7), 0);
    }

    #[test]
    fn test_selected_unit_round_trips_flat() {
        let unit = CatalogUnit::new("Atlas AS7-D")
            .with_id(140)
            .with_point_value(52)
            .with_stat("BFMove", "6\"");
        let selected = SelectedUnit::new(0, unit).with_skill(3);
        let json = serde_json::to_value(&selected).unwrap();
        assert_eq!(json["ordinal"], 0);
        assert_eq!(json["skill"], 3);
        assert_eq!(json["Name"], "Atlas AS7-D");
        assert_eq!(json["BFMove"], "6\"");

        let back: SelectedUnit = serde_json::from_value(json).unwrap();
        assert_eq!(back, selected);
        assert_eq!(back.point_value(), 62);
    }

    #[test]
    fn test_to_query() {
        let selected = SelectedUnit::new(2, CatalogUnit::new("Locust LCT-1V")).with_skill(3);
        assert_eq!(selected.to_query(), UnitQuery::new("3", "Locust LCT-1V"));
    }
}
