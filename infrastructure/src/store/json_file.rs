//! JSON file roster store
//!
//! Layout of the store directory:
//!
//! ```text
//! <dir>/index.json          ordered list of saved roster names
//! <dir>/list_<name>.json    units of one roster
//! ```
//!
//! The working `autosave` roster has a list file but is never indexed.

use roster_application::{RosterStore, StoreError};
use roster_domain::{AUTOSAVE_NAME, SelectedUnit};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const INDEX_FILE: &str = "index.json";
pub const LIST_FILE_PREFIX: &str = "list_";

/// Roster store writing one JSON file per roster
#[derive(Debug, Clone)]
pub struct JsonFileRosterStore {
    dir: PathBuf,
}

impl JsonFileRosterStore {
    /// Open a store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn list_path(&self, name: &str) -> Result<PathBuf, StoreError> {
        let valid = !name.is_empty()
            && !name.contains(['/', '\\'])
            && name != "."
            && name != ".."
            && !name.chars().any(char::is_control);
        if !valid {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(self
            .dir
            .join(format!("{}{}.json", LIST_FILE_PREFIX, name)))
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))
    }

    fn write_json<T: serde::Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn index(&self) -> Result<Vec<String>, StoreError> {
        Ok(Self::read_json(&self.dir.join(INDEX_FILE))?.unwrap_or_default())
    }

    fn write_index(&self, names: &[String]) -> Result<(), StoreError> {
        self.write_json(&self.dir.join(INDEX_FILE), names)
    }
}

impl RosterStore for JsonFileRosterStore {
    fn get(&self, name: &str) -> Result<Option<Vec<SelectedUnit>>, StoreError> {
        Self::read_json(&self.list_path(name)?)
    }

    fn put(&self, name: &str, units: &[SelectedUnit]) -> Result<(), StoreError> {
        let path = self.list_path(name)?;
        self.write_json(&path, units)?;
        debug!("Wrote {} ({} units)", path.display(), units.len());

        if name != AUTOSAVE_NAME {
            let mut index = self.index()?;
            if !index.iter().any(|n| n == name) {
                index.push(name.to_string());
                self.write_index(&index)?;
            }
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        self.index()
    }

    fn delete(&self, name: &str) -> Result<bool, StoreError> {
        let path = self.list_path(name)?;
        let removed_file = match fs::remove_file(&path) {
            Ok(()) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => return Err(e.into()),
        };

        let mut index = self.index()?;
        let before = index.len();
        index.retain(|n| n != name);
        let removed_entry = index.len() != before;
        if removed_entry {
            self.write_index(&index)?;
        }

        Ok(removed_file || removed_entry)
    }
}
