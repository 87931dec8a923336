//! Application layer for mul-roster
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use ports::{
    catalog_gateway::{CatalogError, CatalogGateway},
    progress::{NoProgress, ValidationProgress},
    roster_store::{RosterStore, StoreError},
};
pub use use_cases::build_roster::{AddUnitHandler, RosterBuilder, SelectionBus, SelectionError};
pub use use_cases::judge_unit::EligibilityJudge;
pub use use_cases::manage_rosters::{RosterError, RosterLibrary, SaveOutcome};
pub use use_cases::resolve_unit::CatalogClient;
pub use use_cases::run_validation::RunValidationUseCase;
pub use use_cases::validation_session::{RunTicket, ValidationSession};
