// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Components hold a [`DiagnosticsHandle`] and send events through a bounded
//! channel; the app shell owns the [`DiagnosticsCollector`] and drains the
//! channel into the ring buffer on each tick.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::export::{write_atomic, DiagnosticReport, ExportError};
use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction,
    WarningEvent,
};

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block: events are dropped when the channel
/// is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    /// Logs an action with free-form context, such as a file name.
    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.send(DiagnosticEventKind::UserAction { action, details });
    }

    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }

    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEventKind::Error { event });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central store of diagnostic events.
///
/// The buffer is bounded; the oldest events are evicted first.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: DateTime<Utc>,
}

/// Channel capacity between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every event waiting in the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Logs an action directly to the buffer, bypassing the channel.
    pub fn log_action(&mut self, action: UserAction) {
        self.buffer
            .push(DiagnosticEvent::new(DiagnosticEventKind::UserAction {
                action,
                details: None,
            }));
    }

    /// Logs a warning directly to the buffer, bypassing the channel.
    pub fn log_warning(&mut self, event: WarningEvent) {
        self.buffer
            .push(DiagnosticEvent::new(DiagnosticEventKind::Warning { event }));
    }

    /// Logs an error directly to the buffer, bypassing the channel.
    pub fn log_error(&mut self, event: ErrorEvent) {
        self.buffer
            .push(DiagnosticEvent::new(DiagnosticEventKind::Error { event }));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Serializes the buffered events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    /// Writes the JSON report to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if file operations fail.
    /// Returns `ExportError::Serialization` if JSON serialization fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let path = path.as_ref();
        let json = self.export_json()?;
        write_atomic(path, &json)?;
        Ok(path.to_path_buf())
    }

    fn build_report(&self) -> DiagnosticReport {
        DiagnosticReport::new(
            self.collection_started_at,
            self.buffer.iter().cloned().collect(),
        )
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
