//! Third-party list export
//!
//! Writes the [`ExportDocument`] of a roster as pretty-printed JSON.

use chrono::{DateTime, SecondsFormat, Utc};
use roster_domain::{ExportDocument, Roster};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode export document: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Build the export document stamped with `now`
pub fn export_document(roster: &Roster, now: DateTime<Utc>) -> ExportDocument {
    ExportDocument::from_roster(roster, now.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Write the export document for `roster` to `path`
pub fn write_export(roster: &Roster, path: &Path) -> Result<ExportDocument, ExportError> {
    let document = export_document(roster, Utc::now());
    let json = serde_json::to_string_pretty(&document)?;
    fs::write(path, json).map_err(|source| ExportError::Write {
        path: path.display().to_string(),
        source,
    })?;
    info!(
        "Exported '{}' ({} units) to {}",
        roster.name(),
        document.members.len(),
        path.display()
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use roster_domain::CatalogUnit;
    use tempfile::TempDir;

    #[test]
    fn test_timestamp_format() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap();
        let document = export_document(&Roster::new("Empty"), now);
        assert_eq!(document.last_updated, "2026-03-01T12:30:00.000Z");
        assert!(document.members.is_empty());
    }

    #[test]
    fn test_write_export() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.json");
        let mut roster = Roster::new("Lance");
        roster.add(CatalogUnit::new("Atlas AS7-D").with_id(140).with_point_value(52));

        write_export(&roster, &path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["name"], "Lance");
        assert_eq!(written["members"][0]["mulID"], 140);
        assert_eq!(written["members"][0]["currentPoints"], 52);
        assert_eq!(written["groupLabel"], "Star");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("list.json");
        let result = write_export(&Roster::new("Lance"), &path);
        assert!(matches!(result, Err(ExportError::Write { .. })));
    }
}
