//! Roster store port
//!
//! Key-value persistence for named rosters. The validation pipeline never
//! touches storage; only the roster builder and library do.

use roster_domain::SelectedUnit;
use thiserror::Error;

/// Errors that can occur in a roster store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored roster is unreadable: {0}")]
    Corrupt(String),

    #[error("Invalid roster name: '{0}'")]
    InvalidName(String),
}

/// Named roster storage
pub trait RosterStore: Send + Sync {
    /// Units stored under `name`, or `None` if nothing is stored
    fn get(&self, name: &str) -> Result<Option<Vec<SelectedUnit>>, StoreError>;

    /// Store units under `name`, replacing any previous content
    fn put(&self, name: &str, units: &[SelectedUnit]) -> Result<(), StoreError>;

    /// Stored roster names in the order they were first saved
    fn list(&self) -> Result<Vec<String>, StoreError>;

    /// Remove `name`; returns whether anything was removed
    fn delete(&self, name: &str) -> Result<bool, StoreError>;
}
