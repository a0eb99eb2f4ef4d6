// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Feedback**: Copy confirmation and long-press timings
//! - **Grid**: Tile sizing and lazy loading batch sizes
//! - **Network**: Image size cap
//! - **Diagnostics**: Event buffer capacity

use std::time::Duration;

// ==========================================================================
// Feedback Timings
// ==========================================================================

/// How long a tile keeps its "copied" styling after a successful copy.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// How long a tile must be held before the preview opens (long-press mode).
pub const LONG_PRESS_THRESHOLD: Duration = Duration::from_millis(300);

/// Interval of the periodic tick driving timers and toast auto-dismiss.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default tile edge length in logical pixels.
pub const DEFAULT_TILE_SIZE: f32 = 180.0;

/// Minimum tile edge length.
pub const MIN_TILE_SIZE: f32 = 120.0;

/// Maximum tile edge length.
pub const MAX_TILE_SIZE: f32 = 320.0;

/// Number of records whose images are requested at startup when lazy
/// loading is enabled.
pub const DEFAULT_INITIAL_BATCH: usize = 24;

/// Number of records requested ahead of the last visible tile, so the next
/// rows are usually loaded before they scroll into view.
pub const LAZY_BATCH_SIZE: usize = 12;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Largest image body accepted from the network (8 MiB).
pub const MAX_IMAGE_BYTES: u64 = 8 * 1024 * 1024;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of events kept in the diagnostics ring buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TILE_SIZE < DEFAULT_TILE_SIZE);
    assert!(DEFAULT_TILE_SIZE < MAX_TILE_SIZE);
    assert!(LAZY_BATCH_SIZE > 0);
    assert!(DEFAULT_INITIAL_BATCH > 0);
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_feedback_lasts_two_seconds() {
        assert_eq!(COPY_FEEDBACK_DURATION, Duration::from_secs(2));
    }

    #[test]
    fn long_press_threshold_is_300ms() {
        assert_eq!(LONG_PRESS_THRESHOLD.as_millis(), 300);
    }

    #[test]
    fn tick_is_finer_than_long_press() {
        assert!(TICK_INTERVAL < LONG_PRESS_THRESHOLD);
    }
}
