//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod build_roster;
pub mod judge_unit;
pub mod manage_rosters;
pub mod resolve_unit;
pub mod run_validation;
pub mod validation_session;
