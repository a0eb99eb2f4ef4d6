// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Events are tagged enums serialized with `serde` so an exported report can
//! be read back or filtered with any JSON tool.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User interactions worth correlating with failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Copy an avatar URL to the clipboard.
    CopyUrl {
        /// Catalog index of the copied record.
        index: usize,
    },

    /// Download an avatar to disk.
    DownloadImage {
        /// Catalog index of the downloaded record.
        index: usize,
    },

    /// Open the preview overlay.
    OpenPreview {
        /// Catalog index of the previewed record.
        index: usize,
    },

    /// Close the preview overlay.
    ClosePreview,
}

/// Categories of non-fatal warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// `settings.toml` could not be read or parsed.
    ConfigurationIssue,
    /// A tile or hero image failed to load.
    ImageUnavailable,
    Other,
}

/// Categories of failed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Writing to the system clipboard failed.
    ClipboardWrite,
    /// Fetching image bytes for a download failed.
    ImageFetch,
    /// Writing a downloaded image to disk failed.
    FileSave,
    /// The avatar catalog could not be loaded.
    Catalog,
    Other,
}

/// A categorized warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A categorized error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// Payload of a diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        #[serde(flatten)]
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    Warning {
        event: WarningEvent,
    },
    Error {
        event: ErrorEvent,
    },
}

/// A single timestamped diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current wall-clock time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Utc::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, kind }
    }
}
