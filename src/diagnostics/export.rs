// SPDX-License-Identifier: MPL-2.0
//! JSON report format and file export for diagnostic events.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::events::DiagnosticEvent;

/// Errors that can occur during diagnostic report export.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error during file operations.
    Io(io::Error),
    /// JSON serialization error.
    Serialization(serde_json::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialization(err) => write!(f, "serialization error: {err}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

/// Exported diagnostics document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub app_version: String,
    pub collection_started_at: DateTime<Utc>,
    pub exported_at: DateTime<Utc>,
    pub event_count: usize,
    pub events: Vec<DiagnosticEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(collection_started_at: DateTime<Utc>, events: Vec<DiagnosticEvent>) -> Self {
        Self {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at,
            exported_at: Utc::now(),
            event_count: events.len(),
            events,
        }
    }
}

/// Writes content to a file atomically.
///
/// Uses a temporary file with `.tmp` extension, then renames to the final path.
///
/// # Errors
///
/// Returns an error if writing or renaming fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, UserAction};
    use tempfile::tempdir;

    #[test]
    fn report_counts_events() {
        let events = vec![DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action: UserAction::ClosePreview,
            details: None,
        })];
        let report = DiagnosticReport::new(Utc::now(), events);

        assert_eq!(report.event_count, 1);
        assert_eq!(report.app_version, env!("CARGO_PKG_VERSION"));
        assert!(report.exported_at >= report.collection_started_at);
    }

    #[test]
    fn write_atomic_replaces_existing_file() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("report.json");
        fs::write(&path, "old").expect("seed file");

        write_atomic(&path, "{}").expect("write should succeed");

        assert_eq!(fs::read_to_string(&path).expect("read back"), "{}");
        assert!(!dir.path().join("report.json.tmp").exists());
    }

    #[test]
    fn write_atomic_into_missing_directory_fails() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("missing").join("report.json");
        assert!(write_atomic(&path, "{}").is_err());
    }
}
