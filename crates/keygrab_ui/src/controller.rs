//! # Group Sort Interaction
//!
//! Keyboard selection and sorting of one item among its peers.
//!
//! The same keys do different things depending on the grab state:
//!
//! ```text
//!  key fire ──> enabled? ──> Enter/Space ──> toggle grab
//!                   │        Escape ──────> release
//!                   │        digit ───────> absolute value (grabbed only)
//!                   │        sorting key ─> DeltaResolver
//!                   │                           │
//!                   │             ┌─────────────┴─────────────┐
//!                   │           Idle                       Grabbed
//!                   │   clamp_delta, pick next item   clamp(value + delta)
//!                   │   set selection                 sort_item → on_sort
//!                   │   mark keyboard-selected        mark keyboard-sorted
//! ```
//!
//! Within one fire the order is fixed: resolve, compute, mutate the host
//! model, notify, update flags. Repeat fires whose grab state no longer
//! matches the state at the initial press are dropped.

use crate::config::InteractionConfig;
use crate::delta::{is_sorting_chord, DeltaResolver};
use crate::input::{Key, KeyChord};
use crate::range::SortingRange;
use crate::repeat::{FireKind, KeyFire, KeyRepeater};
use keygrab_core::{
    CueVisibilityPolicy, GrabDragModel, InputModality, InteractionState, ListenerId, Property,
};
use parking_lot::{Mutex, MutexGuard};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Host callbacks for a group of sortable items.
///
/// The controller never owns items; it reads and writes them only
/// through this trait.
pub trait SortableGroup: Send + 'static {
    /// Item handle. Cheap to clone.
    type Item: Clone + PartialEq + Send + Sync + std::fmt::Debug + 'static;

    /// Current value of `item`.
    fn item_value(&self, item: &Self::Item) -> f64;

    /// Writes a new value for `item`. The value is already within range.
    fn sort_item(&mut self, item: &Self::Item, new_value: f64);

    /// The item to select after moving `delta` away from `current`.
    ///
    /// `delta` never points outside the sorting range.
    fn next_selected_item(&self, delta: f64, current: &Self::Item) -> Self::Item;

    /// A reasonable default selection, if any item is eligible.
    fn item_to_select(&self) -> Option<Self::Item>;

    /// Absolute value for a number key while grabbed. `None` means the
    /// digit has no meaning.
    fn map_number_key(&self, _digit: u8) -> Option<f64> {
        None
    }

    /// Runs after `sort_item`, with the value before the sort.
    fn on_sort(&mut self, _item: &Self::Item, _old_value: f64) {}

    /// Runs on a keyboard grab, after the state changes and before grab
    /// observers are notified.
    fn on_grab(&mut self, _item: &Self::Item) {}
}

/// What a key fire did.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome<T> {
    /// Nothing: disabled, unrecognized key, stale repeat, or no target.
    Ignored,
    /// The selection moved to `item`.
    Selected {
        /// Newly selected item.
        item: T,
    },
    /// `item` was sorted from `old_value` to `new_value`.
    Sorted {
        /// Sorted item.
        item: T,
        /// Value before.
        old_value: f64,
        /// Value after, within range.
        new_value: f64,
    },
    /// A keyboard grab started.
    Grabbed,
    /// A keyboard release happened.
    Released,
}

impl<T> DispatchOutcome<T> {
    /// Returns true for [`DispatchOutcome::Ignored`].
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

/// Returns the replacement selection when `selected` no longer fits `range`.
///
/// `None` means "keep the current selection".
fn stale_selection_replacement<G: SortableGroup>(
    group: &G,
    selected: Option<&G::Item>,
    range: &SortingRange,
) -> Option<Option<G::Item>> {
    let item = selected?;
    let value = group.item_value(item);
    if range.contains(value) {
        return None;
    }
    let replacement = group.item_to_select();
    tracing::debug!(
        ?item,
        value,
        min = range.min(),
        max = range.max(),
        ?replacement,
        "selection outside sorting range, reselecting"
    );
    Some(replacement)
}

/// Keyboard selection and sorting for one group of items.
pub struct SortInteractionController<G: SortableGroup> {
    model: Arc<GrabDragModel>,
    group: Arc<Mutex<G>>,
    selected: Arc<Property<Option<G::Item>>>,
    range: Arc<Property<SortingRange>>,
    range_listener: Option<ListenerId>,
    reselect_pending: Arc<AtomicBool>,
    resolver: DeltaResolver,
    cues: CueVisibilityPolicy,
    repeater: KeyRepeater,
    focused: Property<bool>,
    has_keyboard_selected: Property<bool>,
    has_keyboard_sorted: Property<bool>,
    press_state: Option<InteractionState>,
    disposed: bool,
}

impl<G: SortableGroup> SortInteractionController<G> {
    /// Creates a controller with its own state machine.
    #[must_use]
    pub fn new(group: G, range: Arc<Property<SortingRange>>, config: &InteractionConfig) -> Self {
        Self::with_model(group, range, config, Arc::new(GrabDragModel::new()))
    }

    /// Creates a controller sharing `model`, e.g. with a pointer drag
    /// listener that grabs the same element.
    #[must_use]
    pub fn with_model(
        group: G,
        range: Arc<Property<SortingRange>>,
        config: &InteractionConfig,
        model: Arc<GrabDragModel>,
    ) -> Self {
        let group = Arc::new(Mutex::new(group));
        let selected = Arc::new(Property::new(None));
        let reselect_pending = Arc::new(AtomicBool::new(false));

        let range_listener = {
            let group = Arc::downgrade(&group);
            let selected = Arc::clone(&selected);
            let pending = Arc::clone(&reselect_pending);
            range.lazy_link(move |new_range: &SortingRange, _old: &SortingRange| {
                let Some(group) = group.upgrade() else {
                    return;
                };
                // A locked group means a dispatch or a `group()` guard is
                // live; the next read or dispatch reconciles.
                let replacement = match group.try_lock() {
                    Some(group) => {
                        stale_selection_replacement(&*group, selected.value().as_ref(), new_range)
                    }
                    None => {
                        pending.store(true, Ordering::Release);
                        return;
                    }
                };
                if let Some(replacement) = replacement {
                    selected.set(replacement);
                }
            })
        };

        Self {
            model,
            group,
            selected,
            range,
            range_listener: Some(range_listener),
            reselect_pending,
            resolver: DeltaResolver::new(config.steps),
            cues: config.cues,
            repeater: KeyRepeater::new(config.repeat),
            focused: Property::new(false),
            has_keyboard_selected: Property::new(false),
            has_keyboard_sorted: Property::new(false),
            press_state: None,
            disposed: false,
        }
    }

    // ===== Queries =====

    /// The grab/release state machine.
    #[must_use]
    pub fn model(&self) -> &Arc<GrabDragModel> {
        &self.model
    }

    /// Current grab state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.model.state()
    }

    /// Locks the host group for inspection.
    pub fn group(&self) -> MutexGuard<'_, G> {
        self.group.lock()
    }

    /// The current selection.
    #[must_use]
    pub fn selected_item(&self) -> Option<G::Item> {
        self.flush_pending_reselect();
        self.selected.value()
    }

    /// Observable selection.
    #[must_use]
    pub fn selection(&self) -> &Arc<Property<Option<G::Item>>> {
        &self.selected
    }

    /// The live sorting range.
    #[must_use]
    pub fn sorting_range(&self) -> SortingRange {
        self.range.value()
    }

    /// Whether the element has keyboard focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused.value()
    }

    /// True once an item was selected with the keyboard.
    #[must_use]
    pub fn has_keyboard_selected_item(&self) -> bool {
        self.has_keyboard_selected.value()
    }

    /// True once an item was sorted with the keyboard.
    #[must_use]
    pub fn has_keyboard_sorted_item(&self) -> bool {
        self.has_keyboard_sorted.value()
    }

    /// Observes the keyboard-selected flag.
    pub fn on_keyboard_selected_changed<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&bool, &bool) + Send + Sync + 'static,
    {
        self.has_keyboard_selected.lazy_link(listener)
    }

    /// Observes the keyboard-sorted flag.
    pub fn on_keyboard_sorted_changed<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&bool, &bool) + Send + Sync + 'static,
    {
        self.has_keyboard_sorted.lazy_link(listener)
    }

    // ===== Cues =====

    /// Grab hint: focused, enabled, idle, something selected, and the
    /// user has not learned the keyboard grab yet.
    #[must_use]
    pub fn grab_cue_visible(&self) -> bool {
        self.flush_pending_reselect();
        let enabled = self.model.is_enabled();
        self.is_focused()
            && !self.model.is_grabbed()
            && self.selected.value().is_some()
            && self.cues.grab_cue_for(self.model.usage(), enabled)
    }

    /// Drag hint while grabbed.
    #[must_use]
    pub fn drag_cue_visible(&self) -> bool {
        self.model.is_grabbed() && self.should_show_drag_cue()
    }

    /// Sort hint: grabbed and nothing sorted by keyboard yet.
    #[must_use]
    pub fn sort_cue_visible(&self) -> bool {
        self.model.is_grabbed() && !self.has_keyboard_sorted_item()
    }

    /// Drag-cue policy against the live usage counters and override.
    #[must_use]
    pub fn should_show_drag_cue(&self) -> bool {
        self.cues.drag_cue_for(self.model.usage())
    }

    /// Observes the drag-cue policy, recomputed on every counter or
    /// override change. Detached on dispose.
    pub fn on_drag_cue_changed<F>(&self, listener: F) -> [ListenerId; 2]
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.cues.watch_drag_cue(self.model.usage(), listener)
    }

    // ===== Host key events =====

    /// Physical key press at host time `now`.
    pub fn key_down(&mut self, chord: KeyChord, now: Duration) -> DispatchOutcome<G::Item> {
        if self.disposed {
            return DispatchOutcome::Ignored;
        }
        let repeats = Self::fires_on_hold(&chord);
        match self.repeater.press(chord, now, repeats) {
            Some(fire) => self.fire(fire),
            None => DispatchOutcome::Ignored,
        }
    }

    /// Physical key release.
    pub fn key_up(&mut self, key: Key) {
        self.repeater.release(key);
    }

    /// Delivers every hold-repeat due at `now`.
    pub fn tick(&mut self, now: Duration) -> Vec<DispatchOutcome<G::Item>> {
        if self.disposed {
            return Vec::new();
        }
        self.repeater
            .tick(now)
            .into_iter()
            .map(|fire| self.fire(fire))
            .collect()
    }

    /// Whether holding `chord` keeps firing.
    #[must_use]
    pub fn fires_on_hold(chord: &KeyChord) -> bool {
        is_sorting_chord(chord) || chord.digit().is_some()
    }

    // ===== Dispatch =====

    /// Handles one discrete fire of `chord` as an initial press.
    pub fn fire_chord(&mut self, chord: KeyChord) -> DispatchOutcome<G::Item> {
        self.fire(KeyFire {
            chord,
            kind: FireKind::Initial,
        })
    }

    /// Handles one discrete key fire.
    pub fn fire(&mut self, fire: KeyFire) -> DispatchOutcome<G::Item> {
        if self.disposed || !self.model.is_enabled() {
            return DispatchOutcome::Ignored;
        }
        self.flush_pending_reselect();

        let state = self.model.state();
        match fire.kind {
            FireKind::Initial => self.press_state = Some(state),
            FireKind::Repeat => {
                if self.press_state != Some(state) {
                    tracing::trace!(chord = %fire.chord, ?state, "dropping stale repeat");
                    return DispatchOutcome::Ignored;
                }
            }
        }

        let chord = fire.chord;
        let outcome = match chord.key {
            Key::Enter | Key::Space if chord.modifiers.is_empty() => self.toggle_grab(state),
            Key::Escape if chord.modifiers.is_empty() => self.escape(state),
            _ => {
                if let Some(digit) = chord.digit() {
                    self.apply_number_key(state, digit)
                } else {
                    match state {
                        InteractionState::Idle => self.select_by_key(&chord),
                        InteractionState::Grabbed => self.sort_by_key(&chord),
                    }
                }
            }
        };

        self.flush_pending_reselect();
        outcome
    }

    fn toggle_grab(&mut self, state: InteractionState) -> DispatchOutcome<G::Item> {
        match state {
            InteractionState::Idle => {
                let Some(item) = self.selected.value() else {
                    return DispatchOutcome::Ignored;
                };
                let group = &self.group;
                self.model.keyboard_grab(|| group.lock().on_grab(&item));
                DispatchOutcome::Grabbed
            }
            InteractionState::Grabbed => {
                self.model.release(InputModality::Alternative);
                DispatchOutcome::Released
            }
        }
    }

    fn escape(&mut self, state: InteractionState) -> DispatchOutcome<G::Item> {
        if state.is_grabbed() {
            self.model.release(InputModality::Alternative);
            DispatchOutcome::Released
        } else {
            DispatchOutcome::Ignored
        }
    }

    fn select_by_key(&mut self, chord: &KeyChord) -> DispatchOutcome<G::Item> {
        let range = self.range.value();
        let Some(delta) = self.resolver.resolve(chord, &range) else {
            return DispatchOutcome::Ignored;
        };

        let next = {
            let group = self.group.lock();
            match self.selected.value() {
                Some(current) => {
                    let value = group.item_value(&current);
                    let delta = range.clamp_delta(value, delta);
                    Some(group.next_selected_item(delta, &current))
                }
                None => group.item_to_select(),
            }
        };

        let Some(item) = next else {
            return DispatchOutcome::Ignored;
        };
        self.selected.set(Some(item.clone()));
        self.has_keyboard_selected.set(true);
        tracing::trace!(?item, "selected by keyboard");
        DispatchOutcome::Selected { item }
    }

    fn sort_by_key(&mut self, chord: &KeyChord) -> DispatchOutcome<G::Item> {
        let range = self.range.value();
        let Some(delta) = self.resolver.resolve(chord, &range) else {
            return DispatchOutcome::Ignored;
        };
        self.sort_selected(move |old| range.clamp(old + delta))
    }

    fn apply_number_key(&mut self, state: InteractionState, digit: u8) -> DispatchOutcome<G::Item> {
        if !state.is_grabbed() {
            return DispatchOutcome::Ignored;
        }
        let Some(value) = self.group.lock().map_number_key(digit) else {
            return DispatchOutcome::Ignored;
        };
        if !value.is_finite() {
            tracing::warn!(digit, value, "number key mapped to a non-finite value");
            return DispatchOutcome::Ignored;
        }
        let range = self.range.value();
        self.sort_selected(move |_| range.clamp(value))
    }

    fn sort_selected<F>(&mut self, new_value_for: F) -> DispatchOutcome<G::Item>
    where
        F: FnOnce(f64) -> f64,
    {
        let Some(item) = self.selected.value() else {
            return DispatchOutcome::Ignored;
        };

        let (old_value, new_value) = {
            let mut group = self.group.lock();
            let old_value = group.item_value(&item);
            let new_value = new_value_for(old_value);
            group.sort_item(&item, new_value);
            group.on_sort(&item, old_value);
            (old_value, new_value)
        };

        self.has_keyboard_sorted.set(true);
        tracing::debug!(?item, old_value, new_value, "sorted by keyboard");
        DispatchOutcome::Sorted {
            item,
            old_value,
            new_value,
        }
    }

    /// Applies a reselection deferred while the group was locked. Stays
    /// pending if the group is still locked, e.g. by a live `group()` guard.
    fn flush_pending_reselect(&self) {
        if !self.reselect_pending.load(Ordering::Acquire) {
            return;
        }
        let replacement = {
            let Some(group) = self.group.try_lock() else {
                return;
            };
            self.reselect_pending.store(false, Ordering::Release);
            let range = self.range.value();
            stale_selection_replacement(&*group, self.selected.value().as_ref(), &range)
        };
        if let Some(replacement) = replacement {
            self.selected.set(replacement);
        }
    }

    // ===== Focus, interrupt, reset =====

    /// Sets the selection from outside, e.g. after a pointer pick.
    pub fn set_selected_item(&self, item: Option<G::Item>) {
        self.selected.set(item);
    }

    /// Keyboard focus arrived. Selects a default item if none is selected.
    pub fn focus(&mut self) {
        self.focused.set(true);
        self.flush_pending_reselect();
        if self.selected.value().is_none() {
            let item = self.group.lock().item_to_select();
            if item.is_some() {
                self.selected.set(item);
            }
        }
    }

    /// Keyboard focus left. Cancels held keys and releases if grabbed.
    pub fn blur(&mut self) {
        self.focused.set(false);
        self.interrupt();
    }

    /// Cancels held keys and forces a programmatic release if grabbed.
    ///
    /// Returns true if a release happened.
    pub fn interrupt(&mut self) -> bool {
        self.repeater.clear();
        self.press_state = None;
        self.model.interrupt()
    }

    /// Enables or disables keyboard input. Disabling interrupts a grab.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.model.set_enabled(enabled);
        if !enabled {
            self.interrupt();
        }
    }

    /// Returns the interaction to its initial condition: usage counters
    /// and keyboard flags cleared, idle state. The selection is kept.
    pub fn reset(&mut self) {
        self.repeater.clear();
        self.press_state = None;
        self.model.reset();
        self.has_keyboard_selected.set(false);
        self.has_keyboard_sorted.set(false);
    }

    /// Detaches every listener this controller installed, including the
    /// range subscription, and disposes the state machine and its usage
    /// tracker. Further key events are ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(id) = self.range_listener.take() {
            self.range.unlink(id);
        }
        self.repeater.clear();
        self.press_state = None;
        self.model.dispose();
        self.selected.dispose();
        self.focused.dispose();
        self.has_keyboard_selected.dispose();
        self.has_keyboard_sorted.dispose();
        self.disposed = true;
        tracing::debug!("sort interaction disposed");
    }

    /// Returns true after [`dispose`](Self::dispose).
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl<G: SortableGroup> Drop for SortInteractionController<G> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<G: SortableGroup> std::fmt::Debug for SortInteractionController<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortInteractionController")
            .field("state", &self.model.state())
            .field("selected", &self.selected.value())
            .field("range", &self.range.value())
            .field("focused", &self.is_focused())
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Items are indices into `values`; neighbours are adjacent indices.
    #[derive(Debug, Default)]
    struct Row {
        values: Vec<f64>,
        sorts: Vec<(usize, f64)>,
        on_sorts: Vec<(usize, f64)>,
        grabs: usize,
    }

    impl SortableGroup for Row {
        type Item = usize;

        fn item_value(&self, item: &usize) -> f64 {
            self.values[*item]
        }

        fn sort_item(&mut self, item: &usize, new_value: f64) {
            self.values[*item] = new_value;
            self.sorts.push((*item, new_value));
        }

        fn next_selected_item(&self, delta: f64, current: &usize) -> usize {
            if delta > 0.0 {
                (*current + 1).min(self.values.len() - 1)
            } else if delta < 0.0 {
                current.saturating_sub(1)
            } else {
                *current
            }
        }

        fn item_to_select(&self) -> Option<usize> {
            (!self.values.is_empty()).then_some(0)
        }

        fn on_sort(&mut self, item: &usize, old_value: f64) {
            self.on_sorts.push((*item, old_value));
        }

        fn on_grab(&mut self, _item: &usize) {
            self.grabs += 1;
        }
    }

    fn controller(values: Vec<f64>) -> SortInteractionController<Row> {
        let range = Arc::new(Property::new(SortingRange::new(0.0, 100.0).unwrap()));
        SortInteractionController::new(
            Row {
                values,
                ..Row::default()
            },
            range,
            &InteractionConfig::default(),
        )
    }

    #[test]
    fn test_focus_selects_default() {
        let mut c = controller(vec![10.0, 20.0]);
        assert_eq!(c.selected_item(), None);
        c.focus();
        assert_eq!(c.selected_item(), Some(0));
        assert!(c.is_focused());
        assert!(c.grab_cue_visible());
    }

    #[test]
    fn test_enter_toggles_grab() {
        let mut c = controller(vec![10.0]);
        c.focus();

        assert_eq!(c.fire_chord(KeyChord::new(Key::Enter)), DispatchOutcome::Grabbed);
        assert_eq!(c.state(), InteractionState::Grabbed);
        assert_eq!(c.group().grabs, 1);
        assert_eq!(c.model().usage().number_of_keyboard_grabs(), 1);

        assert_eq!(c.fire_chord(KeyChord::new(Key::Space)), DispatchOutcome::Released);
        assert_eq!(c.state(), InteractionState::Idle);
    }

    #[test]
    fn test_grab_without_selection_is_ignored() {
        let mut c = controller(vec![]);
        assert!(c.fire_chord(KeyChord::new(Key::Enter)).is_ignored());
        assert_eq!(c.model().usage().number_of_grabs(), 0);
    }

    #[test]
    fn test_escape_releases_only_when_grabbed() {
        let mut c = controller(vec![10.0]);
        c.focus();
        assert!(c.fire_chord(KeyChord::new(Key::Escape)).is_ignored());
        c.fire_chord(KeyChord::new(Key::Enter));
        assert_eq!(c.fire_chord(KeyChord::new(Key::Escape)), DispatchOutcome::Released);
    }

    #[test]
    fn test_sort_order_mutate_then_on_sort() {
        let mut c = controller(vec![95.0]);
        c.focus();
        c.fire_chord(KeyChord::new(Key::Enter));

        let outcome = c.fire_chord(KeyChord::new(Key::PageUp));
        assert_eq!(
            outcome,
            DispatchOutcome::Sorted {
                item: 0,
                old_value: 95.0,
                new_value: 100.0
            }
        );
        let group = c.group();
        assert_eq!(group.sorts, vec![(0, 100.0)]);
        assert_eq!(group.on_sorts, vec![(0, 95.0)]);
        drop(group);
        assert!(c.has_keyboard_sorted_item());
        assert!(!c.sort_cue_visible());
    }

    #[test]
    fn test_disabled_ignores_keys_and_interrupts() {
        let mut c = controller(vec![50.0]);
        c.focus();
        c.fire_chord(KeyChord::new(Key::Enter));

        c.set_enabled(false);
        assert_eq!(c.state(), InteractionState::Idle);
        assert!(c.fire_chord(KeyChord::new(Key::Right)).is_ignored());
        assert!(c.group().sorts.is_empty());
    }

    #[test]
    fn test_select_moves_and_flags() {
        let mut c = controller(vec![10.0, 20.0, 30.0]);
        c.focus();
        assert!(!c.has_keyboard_selected_item());

        assert_eq!(
            c.fire_chord(KeyChord::new(Key::Right)),
            DispatchOutcome::Selected { item: 1 }
        );
        assert_eq!(c.selected_item(), Some(1));
        assert!(c.has_keyboard_selected_item());
        assert!(c.group().sorts.is_empty());
    }

    #[test]
    fn test_digit_only_while_grabbed() {
        let mut c = controller(vec![10.0]);
        c.focus();
        // Row has no number key mapping.
        assert!(c.fire_chord(KeyChord::new(Key::Num7)).is_ignored());
        c.fire_chord(KeyChord::new(Key::Enter));
        assert!(c.fire_chord(KeyChord::new(Key::Num7)).is_ignored());
        assert!(c.group().sorts.is_empty());
    }

    #[test]
    fn test_unrecognized_key_is_ignored() {
        let mut c = controller(vec![50.0]);
        c.focus();
        assert!(c.fire_chord(KeyChord::new(Key::X)).is_ignored());
        c.fire_chord(KeyChord::new(Key::Enter));
        assert!(c.fire_chord(KeyChord::new(Key::Tab)).is_ignored());
        assert!(c.group().sorts.is_empty());
    }

    #[test]
    fn test_dispose_unlinks_range() {
        let range = Arc::new(Property::new(SortingRange::new(0.0, 100.0).unwrap()));
        let mut c = SortInteractionController::new(
            Row::default(),
            Arc::clone(&range),
            &InteractionConfig::default(),
        );
        assert_eq!(range.listener_count(), 1);

        c.dispose();
        assert_eq!(range.listener_count(), 0);
        assert!(c.is_disposed());
        assert!(c.fire_chord(KeyChord::new(Key::Enter)).is_ignored());
    }

    #[test]
    fn test_drop_unlinks_range() {
        let range = Arc::new(Property::new(SortingRange::new(0.0, 100.0).unwrap()));
        {
            let _c = SortInteractionController::new(
                Row::default(),
                Arc::clone(&range),
                &InteractionConfig::default(),
            );
            assert_eq!(range.listener_count(), 1);
        }
        assert_eq!(range.listener_count(), 0);
    }
}
