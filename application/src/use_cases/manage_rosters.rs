//! Manage Rosters use case
//!
//! Save, load, list and delete named rosters through a [`RosterStore`].

use crate::ports::roster_store::{RosterStore, StoreError};
use roster_domain::{AUTOSAVE_NAME, DomainError, Roster};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while managing rosters
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("No roster named '{0}'")]
    NotFound(String),

    #[error("Roster name cannot be empty")]
    EmptyName,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// What a save did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The roster was written with this many units
    Saved(usize),
    /// The roster was empty, so any stored copy was removed
    Removed,
}

/// Named roster persistence
pub struct RosterLibrary<S: RosterStore + ?Sized> {
    store: Arc<S>,
}

impl<S: RosterStore + ?Sized> Clone for RosterLibrary<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: RosterStore + ?Sized> RosterLibrary<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Save under the roster's own name. Saving an empty roster removes it.
    pub fn save(&self, roster: &Roster) -> Result<SaveOutcome, RosterError> {
        let name = Self::checked_name(roster.name())?;
        if roster.is_empty() {
            let removed = self.store.delete(name)?;
            debug!("Saved empty roster '{}' (removed: {})", name, removed);
            return Ok(SaveOutcome::Removed);
        }

        self.store.put(name, roster.units())?;
        info!("Saved roster '{}' ({} units)", name, roster.len());
        Ok(SaveOutcome::Saved(roster.len()))
    }

    /// Load a stored roster; ordinals are compacted on load
    pub fn load(&self, name: &str) -> Result<Roster, RosterError> {
        let name = Self::checked_name(name)?;
        let units = self
            .store
            .get(name)?
            .ok_or_else(|| RosterError::NotFound(name.to_string()))?;
        info!("Loaded roster '{}' ({} units)", name, units.len());
        Ok(Roster::with_units(name, units))
    }

    /// Names of saved rosters (the working autosave copy is not listed)
    pub fn names(&self) -> Result<Vec<String>, RosterError> {
        Ok(self
            .store
            .list()?
            .into_iter()
            .filter(|name| name != AUTOSAVE_NAME)
            .collect())
    }

    pub fn delete(&self, name: &str) -> Result<bool, RosterError> {
        let name = Self::checked_name(name)?;
        Ok(self.store.delete(name)?)
    }

    /// Write the working copy, empty or not
    pub fn autosave(&self, roster: &Roster) -> Result<(), RosterError> {
        self.store.put(AUTOSAVE_NAME, roster.units())?;
        debug!("Autosaved {} units", roster.len());
        Ok(())
    }

    /// The working copy keeps its units but takes the given display name
    pub fn load_working(&self, name: &str) -> Result<Roster, RosterError> {
        let units = self.store.get(AUTOSAVE_NAME)?.unwrap_or_default();
        Ok(Roster::with_units(name, units))
    }

    fn checked_name(name: &str) -> Result<&str, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            Err(RosterError::EmptyName)
        } else {
            Ok(name)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use roster_domain::{CatalogUnit, SelectedUnit};
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// Store that keeps rosters in memory, in insertion order
    #[derive(Default)]
    pub(crate) struct MemoryStore {
        order: Mutex<Vec<String>>,
        rosters: Mutex<BTreeMap<String, Vec<SelectedUnit>>>,
    }

    impl RosterStore for MemoryStore {
        fn get(&self, name: &str) -> Result<Option<Vec<SelectedUnit>>, StoreError> {
            Ok(self.rosters.lock().unwrap().get(name).cloned())
        }

        fn put(&self, name: &str, units: &[SelectedUnit]) -> Result<(), StoreError> {
            let mut order = self.order.lock().unwrap();
            if !order.iter().any(|n| n == name) {
                order.push(name.to_string());
            }
            self.rosters
                .lock()
                .unwrap()
                .insert(name.to_string(), units.to_vec());
            Ok(())
        }

        fn list(&self) -> Result<Vec<String>, StoreError> {
            Ok(self.order.lock().unwrap().clone())
        }

        fn delete(&self, name: &str) -> Result<bool, StoreError> {
            self.order.lock().unwrap().retain(|n| n != name);
            Ok(self.rosters.lock().unwrap().remove(name).is_some())
        }
    }

    fn lance() -> Roster {
        let mut roster = Roster::new("Lance");
        roster.add(CatalogUnit::new("Atlas AS7-D").with_point_value(52));
        roster.add(CatalogUnit::new("Locust LCT-1V").with_point_value(18));
        roster
    }

    #[test]
    fn test_save_and_load() {
        let library = RosterLibrary::new(Arc::new(MemoryStore::default()));
        assert_eq!(library.save(&lance()).unwrap(), SaveOutcome::Saved(2));

        let loaded = library.load("Lance").unwrap();
        assert_eq!(loaded.name(), "Lance");
        assert_eq!(loaded.encoded(), "4:Atlas AS7-D;4:Locust LCT-1V");
        assert_eq!(library.names().unwrap(), vec!["Lance".to_string()]);
    }

    #[test]
    fn test_saving_empty_roster_removes_it() {
        let library = RosterLibrary::new(Arc::new(MemoryStore::default()));
        library.save(&lance()).unwrap();

        let mut emptied = lance();
        emptied.clear();
        assert_eq!(library.save(&emptied).unwrap(), SaveOutcome::Removed);
        assert!(library.names().unwrap().is_empty());
        assert!(matches!(library.load("Lance"), Err(RosterError::NotFound(_))));
    }

    #[test]
    fn test_autosave_is_not_listed() {
        let library = RosterLibrary::new(Arc::new(MemoryStore::default()));
        library.autosave(&lance()).unwrap();
        assert!(library.names().unwrap().is_empty());
        assert_eq!(library.load_working("autosave").unwrap().len(), 2);
    }

    #[test]
    fn test_blank_name_rejected() {
        let library = RosterLibrary::new(Arc::new(MemoryStore::default()));
        let mut roster = lance();
        roster.rename("  ");
        assert!(matches!(library.save(&roster), Err(RosterError::EmptyName)));
    }

    #[test]
    fn test_load_compacts_ordinals() {
        let store = Arc::new(MemoryStore::default());
        store
            .put(
                "Gaps",
                &[
                    SelectedUnit::new(3, CatalogUnit::new("Atlas AS7-D")),
                    SelectedUnit::new(7, CatalogUnit::new("Locust LCT-1V")),
                ],
            )
            .unwrap();
        let roster = RosterLibrary::new(store).load("Gaps").unwrap();
        let ordinals: Vec<_> = roster.units().iter().map(|u| u.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1]);
    }
}
