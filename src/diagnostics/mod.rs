// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! This module captures user actions and non-fatal failures (clipboard
//! writes, image fetches, file saves) in a memory-bounded circular buffer and
//! can export them as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a tagged payload
//! - [`DiagnosticsHandle`]: Cloneable, non-blocking sender used by components
//! - [`DiagnosticsCollector`]: Owner of the buffer, drained on each tick

mod buffer;
mod collector;
mod events;
mod export;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
pub use export::{DiagnosticReport, ExportError};
