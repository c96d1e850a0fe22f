//! # Usage Tracking
//!
//! Counts how often an element was grabbed, and how often by keyboard.
//! The counts drive hint/cue visibility; see [`crate::cue`].
//!
//! ## Invariants
//!
//! - `keyboard_grabs <= total_grabs` at every observable moment.
//! - Counters only grow during a session; [`UsageTracker::reset`] is the
//!   only way back to zero.

use crate::event::ListenerId;
use crate::interaction::InputModality;
use crate::property::Property;
use serde::{Deserialize, Serialize};

/// Snapshot of the grab counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UsageCounters {
    /// Grabs from any modality.
    pub total_grabs: u32,
    /// Grabs from the keyboard / assistive path.
    pub keyboard_grabs: u32,
}

impl UsageCounters {
    /// Zeroed counters.
    pub const ZERO: Self = Self {
        total_grabs: 0,
        keyboard_grabs: 0,
    };

    /// Counters after one more grab of the given modality.
    #[must_use]
    pub const fn with_grab(self, modality: InputModality) -> Self {
        let keyboard = matches!(modality, InputModality::Alternative);
        Self {
            total_grabs: self.total_grabs.saturating_add(1),
            keyboard_grabs: if keyboard {
                self.keyboard_grabs.saturating_add(1)
            } else {
                self.keyboard_grabs
            },
        }
    }
}

/// Owns the usage counters and the drag-cue override for one interactive
/// element.
///
/// Shared (via `Arc`) between the state machine that increments it and
/// anything deriving cue visibility from it.
#[derive(Debug)]
pub struct UsageTracker {
    counters: Property<UsageCounters>,
    drag_cue_override: Property<bool>,
}

impl UsageTracker {
    /// Creates a tracker with zeroed counters and the override set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counters: Property::new(UsageCounters::ZERO),
            drag_cue_override: Property::new(true),
        }
    }

    /// Records one grab. Keyboard modality counts toward both counters
    /// in a single update.
    pub fn record_grab(&self, modality: InputModality) {
        self.counters.update(|c| c.with_grab(modality));
    }

    /// Current counter snapshot.
    #[must_use]
    pub fn counters(&self) -> UsageCounters {
        self.counters.value()
    }

    /// Grabs from any modality.
    #[must_use]
    pub fn number_of_grabs(&self) -> u32 {
        self.counters.value().total_grabs
    }

    /// Grabs from the keyboard path.
    #[must_use]
    pub fn number_of_keyboard_grabs(&self) -> u32 {
        self.counters.value().keyboard_grabs
    }

    /// Host override for the drag cue.
    #[must_use]
    pub fn drag_cue_override(&self) -> bool {
        self.drag_cue_override.value()
    }

    /// Forces the drag cue off (or back on).
    pub fn set_drag_cue_override(&self, show: bool) {
        self.drag_cue_override.set(show);
    }

    /// Observes counter changes as `(new, old)`.
    pub fn on_counters_changed<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&UsageCounters, &UsageCounters) + Send + Sync + 'static,
    {
        self.counters.lazy_link(listener)
    }

    /// Observes override changes as `(new, old)`.
    pub fn on_override_changed<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&bool, &bool) + Send + Sync + 'static,
    {
        self.drag_cue_override.lazy_link(listener)
    }

    /// Detaches a counter or override listener.
    pub fn unlink(&self, id: ListenerId) -> bool {
        self.counters.unlink(id) || self.drag_cue_override.unlink(id)
    }

    /// Zeroes both counters and restores the override to `true`.
    pub fn reset(&self) {
        self.counters.set(UsageCounters::ZERO);
        self.drag_cue_override.set(true);
    }

    /// Detaches every listener.
    pub fn dispose(&self) {
        self.counters.dispose();
        self.drag_cue_override.dispose();
    }
}

impl Default for UsageTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_record_grab_by_modality() {
        let tracker = UsageTracker::new();
        tracker.record_grab(InputModality::Pointer);
        tracker.record_grab(InputModality::Alternative);
        tracker.record_grab(InputModality::Alternative);

        assert_eq!(
            tracker.counters(),
            UsageCounters {
                total_grabs: 3,
                keyboard_grabs: 2
            }
        );
    }

    #[test]
    fn test_reset() {
        let tracker = UsageTracker::new();
        tracker.record_grab(InputModality::Alternative);
        tracker.set_drag_cue_override(false);

        tracker.reset();

        assert_eq!(tracker.counters(), UsageCounters::ZERO);
        assert!(tracker.drag_cue_override());
    }

    #[test]
    fn test_observers_never_see_keyboard_above_total() {
        let tracker = UsageTracker::new();
        let violations = Arc::new(Mutex::new(0));
        let v = Arc::clone(&violations);
        tracker.on_counters_changed(move |c, _| {
            if c.keyboard_grabs > c.total_grabs {
                *v.lock() += 1;
            }
        });

        for _ in 0..5 {
            tracker.record_grab(InputModality::Alternative);
        }
        assert_eq!(*violations.lock(), 0);
    }
}
