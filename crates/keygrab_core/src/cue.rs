//! Cue visibility.
//!
//! Whether first-time-user hints are shown is derived from the usage
//! counters and the host's drag-cue override on every read. Nothing here
//! caches a result.

use crate::event::ListenerId;
use crate::usage::{UsageCounters, UsageTracker};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Thresholds for hiding cues once the user has learned the interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CueVisibilityPolicy {
    /// The grab cue hides once this many keyboard grabs have happened.
    pub keyboard_grabs_before_hiding_grab_cue: u32,
    /// The drag cue shows while total grabs are at most this many.
    pub drag_cue_grab_limit: u32,
}

impl Default for CueVisibilityPolicy {
    fn default() -> Self {
        Self {
            keyboard_grabs_before_hiding_grab_cue: 1,
            drag_cue_grab_limit: 1,
        }
    }
}

impl CueVisibilityPolicy {
    /// Grab cue: shown to an enabled element until the keyboard grab
    /// threshold is reached.
    #[must_use]
    pub const fn should_show_grab_cue(&self, counters: UsageCounters, enabled: bool) -> bool {
        enabled && counters.keyboard_grabs < self.keyboard_grabs_before_hiding_grab_cue
    }

    /// Drag cue: shown while the override is set and total grabs are
    /// within the limit.
    #[must_use]
    pub const fn should_show_drag_cue(&self, counters: UsageCounters, show_override: bool) -> bool {
        show_override && counters.total_grabs <= self.drag_cue_grab_limit
    }

    /// Grab cue against a live tracker.
    #[must_use]
    pub fn grab_cue_for(&self, tracker: &UsageTracker, enabled: bool) -> bool {
        self.should_show_grab_cue(tracker.counters(), enabled)
    }

    /// Drag cue against a live tracker.
    #[must_use]
    pub fn drag_cue_for(&self, tracker: &UsageTracker) -> bool {
        self.should_show_drag_cue(tracker.counters(), tracker.drag_cue_override())
    }

    /// Calls `listener` with the recomputed drag cue after every counter or
    /// override change.
    ///
    /// Returns both subscriptions; detach them with [`UsageTracker::unlink`].
    pub fn watch_drag_cue<F>(self, tracker: &Arc<UsageTracker>, listener: F) -> [ListenerId; 2]
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let listener = Arc::new(listener);

        let counters_id = {
            let weak = Arc::downgrade(tracker);
            let listener = Arc::clone(&listener);
            tracker.on_counters_changed(move |counters, _old| {
                if let Some(tracker) = weak.upgrade() {
                    listener(self.should_show_drag_cue(*counters, tracker.drag_cue_override()));
                }
            })
        };

        let override_id = {
            let weak = Arc::downgrade(tracker);
            tracker.on_override_changed(move |show, _old| {
                if let Some(tracker) = weak.upgrade() {
                    listener(self.should_show_drag_cue(tracker.counters(), *show));
                }
            })
        };

        [counters_id, override_id]
    }
}
