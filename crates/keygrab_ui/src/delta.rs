//! # Key → Delta Resolution
//!
//! Maps a sorting chord to a signed, **unclamped** delta:
//!
//! | Chord                               | Delta          |
//! |-------------------------------------|----------------|
//! | `home` / `end`                      | ∓ range length |
//! | `pageDown` / `pageUp`               | ∓ page step    |
//! | `arrowLeft`, `a`, `arrowDown`, `s`  | − unit step    |
//! | `arrowRight`, `d`, `arrowUp`, `w`   | + unit step    |
//! | `shift+` any of the above arrows    | ∓ shift step   |
//!
//! Anything else resolves to `None`. Callers clamp: saturate
//! `value + delta` when sorting, or shrink the delta with
//! [`SortingRange::clamp_delta`] when selecting.

use crate::input::{Key, KeyChord, Modifiers};
use crate::range::{SortingRange, StepConfiguration};

/// Keys that move toward `min`.
pub const DECREASE_KEYS: [Key; 4] = [Key::Left, Key::A, Key::Down, Key::S];

/// Keys that move toward `max`.
pub const INCREASE_KEYS: [Key; 4] = [Key::Right, Key::D, Key::Up, Key::W];

/// Resolves `chord` to a delta for `range` and `steps`.
#[must_use]
pub fn resolve_delta(chord: &KeyChord, range: &SortingRange, steps: &StepConfiguration) -> Option<f64> {
    let shift = match chord.modifiers {
        Modifiers::NONE => false,
        Modifiers::SHIFT => true,
        _ => return None,
    };

    let delta = match chord.key {
        Key::Home if !shift => -range.length(),
        Key::End if !shift => range.length(),
        Key::PageDown if !shift => -steps.page_step_for(range),
        Key::PageUp if !shift => steps.page_step_for(range),
        key if DECREASE_KEYS.contains(&key) => -step(shift, steps),
        key if INCREASE_KEYS.contains(&key) => step(shift, steps),
        _ => return None,
    };
    Some(delta)
}

/// Returns true if `chord` is one of the sorting chords in the table above.
#[must_use]
pub fn is_sorting_chord(chord: &KeyChord) -> bool {
    let arrow = DECREASE_KEYS.contains(&chord.key) || INCREASE_KEYS.contains(&chord.key);
    match chord.modifiers {
        Modifiers::NONE => {
            arrow || matches!(chord.key, Key::Home | Key::End | Key::PageUp | Key::PageDown)
        }
        Modifiers::SHIFT => arrow,
        _ => false,
    }
}

fn step(shift: bool, steps: &StepConfiguration) -> f64 {
    if shift {
        steps.shift_step
    } else {
        steps.unit_step
    }
}

/// Stateless resolver bound to one step configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeltaResolver {
    steps: StepConfiguration,
}

impl DeltaResolver {
    /// Creates a resolver for `steps`.
    #[must_use]
    pub const fn new(steps: StepConfiguration) -> Self {
        Self { steps }
    }

    /// The step sizes in use.
    #[must_use]
    pub const fn steps(&self) -> &StepConfiguration {
        &self.steps
    }

    /// Delta for `chord` against `range`, or `None` if it is not a
    /// sorting chord.
    #[must_use]
    pub fn resolve(&self, chord: &KeyChord, range: &SortingRange) -> Option<f64> {
        resolve_delta(chord, range, &self.steps)
    }

    /// Same as [`resolve`](Self::resolve) for a chord written as text.
    /// Unparseable text is unrecognized.
    #[must_use]
    pub fn resolve_str(&self, chord: &str, range: &SortingRange) -> Option<f64> {
        chord.parse::<KeyChord>().ok().and_then(|c| self.resolve(&c, range))
    }

    /// Every chord that resolves to a delta.
    #[must_use]
    pub fn sorting_chords() -> Vec<KeyChord> {
        let mut chords = vec![
            KeyChord::new(Key::Home),
            KeyChord::new(Key::End),
            KeyChord::new(Key::PageUp),
            KeyChord::new(Key::PageDown),
        ];
        for key in DECREASE_KEYS.into_iter().chain(INCREASE_KEYS) {
            chords.push(KeyChord::new(key));
            chords.push(KeyChord::shifted(key));
        }
        chords
    }
}
