//! Roster entries, parameters and the editable roster
//!
//! - [`query`]: the `skill:name;...` list encoding
//! - [`params`]: validation run parameters
//! - [`selected`] / [`entities`]: units on a roster and skill-adjusted point values
//! - [`export`]: third-party list document

pub mod entities;
pub mod export;
pub mod params;
pub mod query;
pub mod selected;

pub use entities::{AUTOSAVE_NAME, Roster};
pub use export::{ExportDocument, ExportMember};
pub use params::{RosterParams, ValidatedParams};
pub use query::{UnitQuery, encode_roster, parse_roster};
pub use selected::{DEFAULT_SKILL, MAX_SKILL, SelectedUnit, adjusted_point_value};
