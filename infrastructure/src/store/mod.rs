//! Roster storage adapters

mod json_file;

pub use json_file::{INDEX_FILE, JsonFileRosterStore, LIST_FILE_PREFIX};
