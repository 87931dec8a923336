//! Third-party list export
//!
//! Converts a roster into the list document accepted by Jeff's Alpha Strike
//! tools. Writing the document somewhere is an infrastructure concern.

use super::entities::Roster;
use super::selected::SelectedUnit;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FORMATION_BONUS: &str = "None";
pub const DEFAULT_GROUP_LABEL: &str = "Star";

/// Damage values at short/medium/long range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDamage {
    pub short: String,
    pub medium: String,
    pub long: String,
}

/// One list member in export form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMember {
    #[serde(rename = "mulID")]
    pub mul_id: Option<u64>,
    pub name: String,
    pub current_skill: u8,
    pub base_points: u32,
    pub current_points: u32,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub size: String,
    #[serde(rename = "move")]
    pub movement: String,
    pub armor: String,
    pub structure: String,
    pub damage: ExportDamage,
    pub abilities: String,
    pub role: String,
}

impl From<&SelectedUnit> for ExportMember {
    fn from(selected: &SelectedUnit) -> Self {
        let unit = &selected.unit;
        Self {
            mul_id: unit.id,
            name: unit.name.clone(),
            current_skill: selected.skill,
            base_points: selected.base_point_value(),
            current_points: selected.point_value(),
            unit_type: unit.stat_text("BFType"),
            size: unit.stat_text("BFSize"),
            movement: unit.stat_text("BFMove"),
            armor: unit.stat_text("BFArmor"),
            structure: unit.stat_text("BFStructure"),
            damage: ExportDamage {
                short: unit.stat_text("BFDamageShort"),
                medium: unit.stat_text("BFDamageMedium"),
                long: unit.stat_text("BFDamageLong"),
            },
            abilities: unit.stat_text("BFAbilities"),
            role: unit.role_name().to_string(),
        }
    }
}

/// The exported list document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub name: String,
    pub members: Vec<ExportMember>,
    pub last_updated: String,
    pub formation_bonus: String,
    pub group_label: String,
}

impl ExportDocument {
    /// Build the document; `last_updated` is an RFC 3339 timestamp
    pub fn from_roster(roster: &Roster, last_updated: impl Into<String>) -> Self {
        Self {
            name: roster.name().to_string(),
            members: roster.units().iter().map(ExportMember::from).collect(),
            last_updated: last_updated.into(),
            formation_bonus: DEFAULT_FORMATION_BONUS.to_string(),
            group_label: DEFAULT_GROUP_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogUnit;

    #[test]
    fn test_export_document_shape() {
        let mut roster = Roster::new("Lance");
        roster.add(
            CatalogUnit::new("Atlas AS7-D")
                .with_id(140)
                .with_point_value(52)
                .with_role("Juggernaut")
                .with_stat("BFType", "BM")
                .with_stat("BFSize", 4)
                .with_stat("BFMove", "6\"")
                .with_stat("BFDamageShort", 5)
                .with_stat("BFDamageMedium", 5)
                .with_stat("BFDamageLong", 2),
        );
        roster.set_skill(0, 3).unwrap();

        let doc = ExportDocument::from_roster(&roster, "2026-01-01T00:00:00.000Z");
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["name"], "Lance");
        assert_eq!(json["formationBonus"], "None");
        assert_eq!(json["groupLabel"], "Star");
        assert_eq!(json["lastUpdated"], "2026-01-01T00:00:00.000Z");

        let member = &json["members"][0];
        assert_eq!(member["mulID"], 140);
        assert_eq!(member["currentSkill"], 3);
        assert_eq!(member["basePoints"], 52);
        assert_eq!(member["currentPoints"], 62);
        assert_eq!(member["type"], "BM");
        assert_eq!(member["size"], "4");
        assert_eq!(member["move"], "6\"");
        assert_eq!(member["damage"]["long"], "2");
        assert_eq!(member["role"], "Juggernaut");
    }
}
