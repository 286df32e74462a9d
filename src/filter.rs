//! Filter input debouncing and the add-affordance state machine
//!
//! Keystrokes arrive much faster than the grid should re-filter, so raw
//! input is coalesced with a trailing-edge debounce: every change supersedes
//! the pending one, and only the latest value is applied once the input has
//! been stable for the whole window. Time is passed in explicitly, which
//! keeps the controller deterministic under test; the event loop feeds it
//! real `Instant`s from its tick.

use std::time::{Duration, Instant};

/// Default debounce window, matching the original screen's 250 ms throttle.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Trailing-edge debounce over the raw filter text
#[derive(Debug)]
pub struct FilterController {
    window: Duration,
    pending: Option<(String, Instant)>,
}

impl FilterController {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record a raw input change. Supersedes any pending value.
    pub fn note_input(&mut self, raw: &str, now: Instant) {
        self.pending = Some((raw.to_string(), now));
    }

    /// Apply the pending input if it has been stable for the full window.
    ///
    /// Returns the value to apply, at most once per recorded input.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let matured = matches!(&self.pending, Some((_, at)) if now.duration_since(*at) >= self.window);
        if !matured {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    /// Whether an input is waiting for its window to elapse.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for FilterController {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

/// Visibility of the "add activity" affordance
///
/// Visible exactly while the applied filter is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddAffordance {
    #[default]
    Hidden,
    Visible,
}

impl AddAffordance {
    /// Apply the filter state; returns true when the visibility flipped.
    pub fn apply(&mut self, filter_active: bool) -> bool {
        let next = if filter_active {
            AddAffordance::Visible
        } else {
            AddAffordance::Hidden
        };
        let changed = *self != next;
        *self = next;
        changed
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, AddAffordance::Visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_before_window_returns_nothing() {
        let t0 = Instant::now();
        let mut filter = FilterController::new(Duration::from_millis(250));

        filter.note_input("c", t0);
        assert_eq!(filter.poll(t0 + Duration::from_millis(100)), None);
        assert!(filter.has_pending());
    }

    #[test]
    fn test_poll_after_window_applies_once() {
        let t0 = Instant::now();
        let mut filter = FilterController::new(Duration::from_millis(250));

        filter.note_input("co", t0);
        assert_eq!(
            filter.poll(t0 + Duration::from_millis(250)),
            Some("co".to_string())
        );
        // Applied exactly once.
        assert_eq!(filter.poll(t0 + Duration::from_millis(500)), None);
        assert!(!filter.has_pending());
    }

    #[test]
    fn test_newer_input_supersedes_pending() {
        let t0 = Instant::now();
        let mut filter = FilterController::new(Duration::from_millis(250));

        filter.note_input("c", t0);
        filter.note_input("co", t0 + Duration::from_millis(100));
        filter.note_input("com", t0 + Duration::from_millis(400));

        // The last keystroke restarted the window.
        assert_eq!(filter.poll(t0 + Duration::from_millis(500)), None);
        assert_eq!(
            filter.poll(t0 + Duration::from_millis(650)),
            Some("com".to_string())
        );
    }

    #[test]
    fn test_affordance_transitions() {
        let mut affordance = AddAffordance::default();
        assert!(!affordance.is_visible());

        assert!(affordance.apply(true));
        assert!(affordance.is_visible());

        // Same state again: no flip.
        assert!(!affordance.apply(true));

        assert!(affordance.apply(false));
        assert!(!affordance.is_visible());
    }
}
