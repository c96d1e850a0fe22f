//! # Grab/Release State Machine
//!
//! Tracks whether an interactive element is idle or grabbed, and tells
//! observers *how* each transition happened.
//!
//! ## States
//!
//! - **Idle**: initial. Keys select among items.
//! - **Grabbed**: keys sort the selected item.
//!
//! ```text
//!            grab / keyboard_grab
//!   ┌──────┐ ───────────────────> ┌─────────┐
//!   │ Idle │                      │ Grabbed │ ──┐ grab (idempotent)
//!   └──────┘ <─────────────────── └─────────┘ <─┘
//!        ^       release / reset       │
//!        └──────── reset ──────────────┘
//! ```
//!
//! There is no terminal state; the cycle lasts as long as the element.
//!
//! ## Guards
//!
//! The state machine does not check `enabled`: the input-dispatch layer
//! must check it before calling `grab`/`release`. Releasing while idle is a
//! contract violation and asserts in debug builds.

use crate::error::{InteractionError, InteractionResult};
use crate::event::{Emitter, ListenerId};
use crate::property::Property;
use crate::usage::UsageTracker;
use std::sync::Arc;

/// Interaction state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// Not grabbed.
    #[default]
    Idle,
    /// Grabbed; keys move the selected item.
    Grabbed,
}

impl InteractionState {
    /// Returns true in the `Grabbed` state.
    #[inline]
    #[must_use]
    pub const fn is_grabbed(self) -> bool {
        matches!(self, Self::Grabbed)
    }
}

/// The class of input that caused a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputModality {
    /// Mouse or touch.
    Pointer,
    /// Keyboard or assistive technology.
    Alternative,
    /// Cancel/interrupt issued by code (focus loss, reset, disable).
    Programmatic,
}

/// Grab/release state machine for one interactive element.
pub struct GrabDragModel {
    state: Property<InteractionState>,
    enabled: Property<bool>,
    usage: Arc<UsageTracker>,
    grabbed: Arc<Emitter<InputModality>>,
    released: Arc<Emitter<InputModality>>,
    reset: Arc<Emitter<()>>,
}

impl GrabDragModel {
    /// Creates an idle, enabled model with its own usage tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::with_usage_tracker(Arc::new(UsageTracker::new()))
    }

    /// Creates an idle, enabled model counting into a shared tracker.
    #[must_use]
    pub fn with_usage_tracker(usage: Arc<UsageTracker>) -> Self {
        Self {
            state: Property::new(InteractionState::Idle),
            enabled: Property::new(true),
            usage,
            grabbed: Arc::new(Emitter::new()),
            released: Arc::new(Emitter::new()),
            reset: Arc::new(Emitter::new()),
        }
    }

    // ===== Queries =====

    /// Current state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state.value()
    }

    /// Returns true while grabbed.
    #[must_use]
    pub fn is_grabbed(&self) -> bool {
        self.state().is_grabbed()
    }

    /// Whether input should reach this model.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.value()
    }

    /// The usage tracker this model counts into.
    #[must_use]
    pub fn usage(&self) -> &Arc<UsageTracker> {
        &self.usage
    }

    // ===== Transitions =====

    /// Keyboard entry point for a grab.
    ///
    /// The keyboard grab is counted before the transition, so intent is
    /// recorded even when already grabbed.
    pub fn keyboard_grab<F: FnOnce()>(&self, before_emit: F) {
        self.grab(before_emit, InputModality::Alternative);
    }

    /// Grabs. Valid from any state; grabbing while grabbed keeps the state
    /// but still counts and emits.
    ///
    /// `before_emit` runs after the state change and before observers of
    /// the grabbed event are notified.
    pub fn grab<F: FnOnce()>(&self, before_emit: F, modality: InputModality) {
        self.usage.record_grab(modality);

        if !self.state.set(InteractionState::Grabbed) {
            tracing::trace!(?modality, "grab while already grabbed");
        }
        tracing::debug!(?modality, grabs = self.usage.number_of_grabs(), "grabbed");

        before_emit();
        self.grabbed.emit(&modality);
    }

    /// Releases.
    ///
    /// # Panics
    ///
    /// In debug builds, if called while idle. Optimized builds log and
    /// do nothing.
    pub fn release(&self, modality: InputModality) {
        let idle = !self.is_grabbed();
        debug_assert!(!idle, "release called while the interaction is idle");
        if idle {
            tracing::error!(?modality, "release called while the interaction is idle");
            return;
        }
        self.transition_to_idle(modality);
    }

    /// Releases, reporting a release-while-idle as an error instead of
    /// asserting.
    ///
    /// # Errors
    ///
    /// [`InteractionError::ReleaseWhileIdle`] if not grabbed.
    pub fn try_release(&self, modality: InputModality) -> InteractionResult<()> {
        if !self.is_grabbed() {
            return Err(InteractionError::ReleaseWhileIdle);
        }
        self.transition_to_idle(modality);
        Ok(())
    }

    /// Programmatic release if grabbed. Returns true if a release happened.
    pub fn interrupt(&self) -> bool {
        if self.is_grabbed() {
            self.transition_to_idle(InputModality::Programmatic);
            true
        } else {
            false
        }
    }

    /// Zeroes the usage counters and forces the idle state, even while
    /// grabbed. Emits only the reset event.
    pub fn reset(&self) {
        self.usage.reset();
        self.state.set(InteractionState::Idle);
        tracing::debug!("interaction reset");
        self.reset.emit(&());
    }

    fn transition_to_idle(&self, modality: InputModality) {
        self.state.set(InteractionState::Idle);
        tracing::debug!(?modality, "released");
        self.released.emit(&modality);
    }

    // ===== Enabled =====

    /// Enables or disables input. The dispatch layer reads this flag.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    // ===== Observation =====

    /// Grabbed event, carrying the modality.
    #[must_use]
    pub fn grabbed_emitter(&self) -> &Arc<Emitter<InputModality>> {
        &self.grabbed
    }

    /// Released event, carrying the modality.
    #[must_use]
    pub fn released_emitter(&self) -> &Arc<Emitter<InputModality>> {
        &self.released
    }

    /// Reset event, no payload.
    #[must_use]
    pub fn reset_emitter(&self) -> &Arc<Emitter<()>> {
        &self.reset
    }

    /// Observes state changes as `(new, old)`.
    pub fn on_state_changed<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&InteractionState, &InteractionState) + Send + Sync + 'static,
    {
        self.state.lazy_link(listener)
    }

    /// Observes enabled changes as `(new, old)`.
    pub fn on_enabled_changed<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&bool, &bool) + Send + Sync + 'static,
    {
        self.enabled.lazy_link(listener)
    }

    /// Detaches every listener, including those on the usage tracker.
    pub fn dispose(&self) {
        self.grabbed.dispose();
        self.released.dispose();
        self.reset.dispose();
        self.state.dispose();
        self.enabled.dispose();
        self.usage.dispose();
    }
}

impl Default for GrabDragModel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GrabDragModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrabDragModel")
            .field("state", &self.state())
            .field("enabled", &self.is_enabled())
            .field("usage", &self.usage.counters())
            .finish_non_exhaustive()
    }
}
