//! Domain layer for mul-roster
//!
//! This crate contains the roster model, catalog match rules, the eligibility
//! state machine and list-level checks. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Judgement
//!
//! Every roster entry is resolved against the catalog and then judged:
//!
//! - **Primary**: found / ambiguous / not available / lookup failed
//! - **Extinct check**: listed in the extinct population → invalid
//! - **Unique check**: listed in the unique population → valid, tagged `unique`
//!
//! ## Aggregate checks
//!
//! List-wide rules (duplicates, skill ratings, list size, ...) evaluated over
//! the complete set of per-entry results.

pub mod catalog;
pub mod checks;
pub mod core;
pub mod judgement;
pub mod roster;

// Re-export commonly used types
pub use catalog::{CatalogMatch, CatalogRequest, CatalogSearchResponse, CatalogUnit, MatchOutcome};
pub use checks::{AggregateCheck, CheckLimits, CheckOutcome, CheckRegistry, CheckReport};
pub use core::error::DomainError;
pub use judgement::{
    EntryError, EntryTag, INVALID_ENTRY_NAME, JudgementResult, JudgementStage, LookupScope,
    PopulationCodes,
};
pub use roster::{
    AUTOSAVE_NAME, ExportDocument, Roster, RosterParams, SelectedUnit, UnitQuery,
    ValidatedParams, parse_roster,
};
