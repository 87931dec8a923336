//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing era for validation")]
    MissingEra,

    #[error("Missing faction for validation")]
    MissingFaction,

    #[error("Roster list is empty")]
    EmptyRoster,

    #[error("Invalid skill rating: {0}")]
    InvalidSkill(String),

    #[error("No unit at position {0}")]
    UnknownOrdinal(usize),
}

impl DomainError {
    /// Check if this error means the validation parameters were unusable
    pub fn is_invalid_parameters(&self) -> bool {
        matches!(
            self,
            DomainError::MissingEra | DomainError::MissingFaction | DomainError::EmptyRoster
        )
    }
}
