//! Editable roster (Entity)

use super::query::{UnitQuery, encode_roster};
use super::selected::{MAX_SKILL, SelectedUnit};
use crate::catalog::CatalogUnit;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Name of the working roster that is saved on every change
pub const AUTOSAVE_NAME: &str = "autosave";

/// A named, ordered list of selected units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    name: String,
    units: Vec<SelectedUnit>,
}

impl Roster {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Vec::new(),
        }
    }

    /// Build from stored units; ordinals are compacted to `0..len`
    pub fn with_units(name: impl Into<String>, units: Vec<SelectedUnit>) -> Self {
        let mut roster = Self {
            name: name.into(),
            units,
        };
        roster.compact_ordinals();
        roster
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn units(&self) -> &[SelectedUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Append a unit at the default skill; returns its ordinal
    pub fn add(&mut self, unit: CatalogUnit) -> usize {
        let ordinal = self
            .units
            .iter()
            .map(|u| u.ordinal + 1)
            .max()
            .unwrap_or(0);
        self.units.push(SelectedUnit::new(ordinal, unit));
        ordinal
    }

    pub fn remove(&mut self, ordinal: usize) -> Result<SelectedUnit, DomainError> {
        let index = self.index_of(ordinal)?;
        Ok(self.units.remove(index))
    }

    pub fn set_skill(&mut self, ordinal: usize, skill: u8) -> Result<(), DomainError> {
        if skill > MAX_SKILL {
            return Err(DomainError::InvalidSkill(skill.to_string()));
        }
        let index = self.index_of(ordinal)?;
        self.units[index].skill = skill;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.units.clear();
    }

    /// Sum of skill-adjusted point values
    pub fn total_point_value(&self) -> u32 {
        self.units.iter().map(SelectedUnit::point_value).sum()
    }

    /// Renumber ordinals to match list positions
    pub fn compact_ordinals(&mut self) {
        for (index, unit) in self.units.iter_mut().enumerate() {
            unit.ordinal = index;
        }
    }

    pub fn to_queries(&self) -> Vec<UnitQuery> {
        self.units.iter().map(SelectedUnit::to_query).collect()
    }

    /// The compact `skill:name;...` form used by validation and share links
    pub fn encoded(&self) -> String {
        encode_roster(&self.to_queries())
    }

    fn index_of(&self, ordinal: usize) -> Result<usize, DomainError> {
        self.units
            .iter()
            .position(|u| u.ordinal == ordinal)
            .ok_or(DomainError::UnknownOrdinal(ordinal))
    }
}
