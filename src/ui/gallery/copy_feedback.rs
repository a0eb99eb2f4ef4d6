// SPDX-License-Identifier: MPL-2.0
//! Copy-confirmation state.
//!
//! Holds the single tile index whose copy button shows the "copied" styling.
//! A new confirmation replaces the previous one, which also cancels its
//! pending clear.

use crate::config::COPY_FEEDBACK_DURATION;
use std::time::{Duration, Instant};

/// The most recent successful copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyConfirmation {
    pub index: usize,
    pub copied_at: Instant,
}

/// Tracks which tile, if any, is showing copy confirmation.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    current: Option<CopyConfirmation>,
    duration: Duration,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::with_duration(COPY_FEEDBACK_DURATION)
    }
}

impl CopyFeedback {
    #[must_use]
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Marks `index` as confirmed starting at `now`.
    pub fn confirm(&mut self, index: usize, now: Instant) {
        self.current = Some(CopyConfirmation {
            index,
            copied_at: now,
        });
    }

    /// Clears the confirmation once its display time has elapsed.
    ///
    /// Returns `true` if the confirmation was cleared by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.current {
            Some(confirmation)
                if now.saturating_duration_since(confirmation.copied_at) >= self.duration =>
            {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn confirmed_index(&self) -> Option<usize> {
        self.current.map(|c| c.index)
    }

    #[must_use]
    pub fn is_confirmed(&self, index: usize) -> bool {
        self.confirmed_index() == Some(index)
    }

    /// Returns whether a clear is still pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }
}
