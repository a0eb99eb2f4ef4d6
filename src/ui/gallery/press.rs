// SPDX-License-Identifier: MPL-2.0
//! Press-and-hold gesture state for the long-press open trigger.

use crate::config::LONG_PRESS_THRESHOLD;
use std::time::{Duration, Instant};

/// Manages a single in-flight press on a tile.
#[derive(Debug, Clone)]
pub struct PressState {
    active: Option<(usize, Instant)>,
    threshold: Duration,
}

impl Default for PressState {
    fn default() -> Self {
        Self::with_threshold(LONG_PRESS_THRESHOLD)
    }
}

impl PressState {
    #[must_use]
    pub fn with_threshold(threshold: Duration) -> Self {
        Self {
            active: None,
            threshold,
        }
    }

    /// Starts timing a press on `index`, replacing any previous press.
    pub fn begin(&mut self, index: usize, now: Instant) {
        self.active = Some((index, now));
    }

    /// Ends the press on `index` when the pointer goes up or leaves.
    ///
    /// A press already held past the threshold still fires, even if no tick
    /// polled it yet. Presses on other tiles are left alone.
    pub fn release(&mut self, index: usize, now: Instant) -> Option<usize> {
        if self.pressed_index() != Some(index) {
            return None;
        }
        let fired = self.poll(now);
        self.active = None;
        fired
    }

    /// Cancels whatever press is in flight.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Fires the press once it has been held long enough.
    ///
    /// Returns the pressed index at most once per press.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        let (index, started_at) = self.active?;
        if now.saturating_duration_since(started_at) >= self.threshold {
            self.active = None;
            Some(index)
        } else {
            None
        }
    }

    #[must_use]
    pub fn pressed_index(&self) -> Option<usize> {
        self.active.map(|(index, _)| index)
    }

    #[must_use]
    pub fn is_pressing(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_fires_at_threshold_once() {
        let start = Instant::now();
        let mut press = PressState::default();
        press.begin(2, start);

        assert_eq!(press.poll(start + Duration::from_millis(299)), None);
        assert_eq!(press.poll(start + Duration::from_millis(300)), Some(2));
        assert_eq!(press.poll(start + Duration::from_millis(400)), None);
        assert!(!press.is_pressing());
    }

    #[test]
    fn release_after_threshold_fires_without_tick() {
        let start = Instant::now();
        let mut press = PressState::default();
        press.begin(3, start);

        assert_eq!(press.poll(start + Duration::from_millis(250)), None);
        assert_eq!(press.release(3, start + Duration::from_millis(340)), Some(3));
        assert!(!press.is_pressing());
    }

    #[test]
    fn release_before_threshold_cancels() {
        let start = Instant::now();
        let mut press = PressState::default();
        press.begin(0, start);

        assert_eq!(press.release(0, start + Duration::from_millis(299)), None);
        assert_eq!(press.poll(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn release_on_other_tile_keeps_press() {
        let start = Instant::now();
        let mut press = PressState::default();
        press.begin(1, start);

        assert_eq!(press.release(2, start + Duration::from_millis(500)), None);
        assert_eq!(press.pressed_index(), Some(1));
    }
}
