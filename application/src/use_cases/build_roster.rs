//! Build Roster use case
//!
//! The [`RosterBuilder`] owns the working roster and autosaves it on every
//! change. Whatever finds units (a search, a CLI command) hands them over
//! through a [`SelectionBus`], on which the builder registers itself once.

use super::manage_rosters::{RosterError, RosterLibrary, SaveOutcome};
use crate::ports::roster_store::RosterStore;
use roster_domain::{AUTOSAVE_NAME, CatalogUnit, Roster, SelectedUnit};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use thiserror::Error;
use tracing::{debug, info};

/// Receives units selected for the roster
pub trait AddUnitHandler: Send + Sync {
    /// Add a unit at the default skill; returns its ordinal
    fn add_unit(&self, unit: CatalogUnit) -> Result<usize, RosterError>;
}

/// Errors from the selection bus
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("No roster builder is registered")]
    NotRegistered,

    #[error("A roster builder is already registered")]
    AlreadyRegistered,

    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Single-slot registration point for the add-unit handler
#[derive(Default)]
pub struct SelectionBus {
    handler: OnceLock<Arc<dyn AddUnitHandler>>,
}

impl SelectionBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the handler. Only the first registration is accepted.
    pub fn register(&self, handler: Arc<dyn AddUnitHandler>) -> Result<(), SelectionError> {
        self.handler
            .set(handler)
            .map_err(|_| SelectionError::AlreadyRegistered)
    }

    pub fn is_registered(&self) -> bool {
        self.handler.get().is_some()
    }

    /// Hand a selected unit to the registered handler
    pub fn add(&self, unit: CatalogUnit) -> Result<usize, SelectionError> {
        let handler = self.handler.get().ok_or(SelectionError::NotRegistered)?;
        Ok(handler.add_unit(unit)?)
    }
}

/// Editable working roster with autosave
pub struct RosterBuilder<S: RosterStore + ?Sized> {
    library: RosterLibrary<S>,
    roster: Mutex<Roster>,
}

impl<S: RosterStore + ?Sized + 'static> RosterBuilder<S> {
    /// Open the builder on the autosaved working roster
    pub fn open(library: RosterLibrary<S>) -> Result<Self, RosterError> {
        let roster = library.load_working(AUTOSAVE_NAME)?;
        debug!("Opened working roster ({} units)", roster.len());
        Ok(Self {
            library,
            roster: Mutex::new(roster),
        })
    }

    /// Register this builder as the bus's add-unit handler
    pub fn mount(self: &Arc<Self>, bus: &SelectionBus) -> Result<(), SelectionError> {
        bus.register(Arc::clone(self) as Arc<dyn AddUnitHandler>)
    }

    /// The library behind the working roster
    pub fn library(&self) -> &RosterLibrary<S> {
        &self.library
    }

    pub fn snapshot(&self) -> Roster {
        self.lock().clone()
    }

    pub fn remove(&self, ordinal: usize) -> Result<SelectedUnit, RosterError> {
        self.edit(|roster| Ok(roster.remove(ordinal)?))
    }

    pub fn set_skill(&self, ordinal: usize, skill: u8) -> Result<(), RosterError> {
        self.edit(|roster| Ok(roster.set_skill(ordinal, skill)?))
    }

    pub fn clear(&self) -> Result<(), RosterError> {
        self.edit(|roster| {
            roster.clear();
            Ok(())
        })
    }

    /// Save the working roster under `name`.
    ///
    /// The working roster takes the new name only once the save succeeds.
    pub fn save_as(&self, name: &str) -> Result<SaveOutcome, RosterError> {
        let mut roster = self.lock();
        let mut renamed = roster.clone();
        renamed.rename(name.trim());
        let outcome = self.library.save(&renamed)?;
        *roster = renamed;
        Ok(outcome)
    }

    /// Replace the working roster with a stored one.
    ///
    /// Loading an empty roster leaves the working roster untouched.
    pub fn load(&self, name: &str) -> Result<Roster, RosterError> {
        let loaded = self.library.load(name)?;
        if loaded.is_empty() {
            info!("Roster '{}' is empty, keeping the working roster", name);
            return Ok(self.snapshot());
        }
        self.edit(|roster| {
            *roster = loaded.clone();
            Ok(())
        })?;
        Ok(loaded)
    }

    /// Apply `change` to a copy and keep it only if the autosave succeeds
    fn edit<T>(
        &self,
        change: impl FnOnce(&mut Roster) -> Result<T, RosterError>,
    ) -> Result<T, RosterError> {
        let mut roster = self.lock();
        let mut draft = roster.clone();
        let value = change(&mut draft)?;
        self.library.autosave(&draft)?;
        *roster = draft;
        Ok(value)
    }

    fn lock(&self) -> MutexGuard<'_, Roster> {
        self.roster.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: RosterStore + ?Sized + 'static> AddUnitHandler for RosterBuilder<S> {
    fn add_unit(&self, unit: CatalogUnit) -> Result<usize, RosterError> {
        let name = unit.name.clone();
        let ordinal = self.edit(|roster| Ok(roster.add(unit)))?;
        info!("Added {} to the roster at position {}", name, ordinal);
        Ok(ordinal)
    }
}
