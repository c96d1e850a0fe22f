//! Fire-on-press / fire-on-hold key tracking.
//!
//! The host owns the clock. It reports key presses and releases, then calls
//! [`KeyRepeater::tick`] each frame with the current time; held repeating
//! keys produce `Repeat` fires after an initial delay, then at a fixed
//! interval. Only the most recently pressed key repeats.

use crate::input::{Key, KeyChord};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Why a key fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FireKind {
    /// First fire on the physical press.
    Initial,
    /// Fire produced by holding the key.
    Repeat,
}

/// One discrete key fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyFire {
    /// The chord that fired.
    pub chord: KeyChord,
    /// Press or hold.
    pub kind: FireKind,
}

/// Key-repeat timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepeatTiming {
    /// Delay from the press to the first repeat.
    pub initial_delay_ms: u64,
    /// Delay between repeats. Must be at least 1.
    pub interval_ms: u64,
}

impl Default for RepeatTiming {
    fn default() -> Self {
        Self {
            initial_delay_ms: 500,
            interval_ms: 33,
        }
    }
}

impl RepeatTiming {
    /// Initial delay as a duration.
    #[must_use]
    pub const fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    /// Interval as a duration, never zero.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    chord: KeyChord,
    next_fire: Duration,
}

/// Most repeat fires one tick may deliver. A longer backlog (host paused,
/// debugger attached) is dropped and the schedule restarts from `now`.
pub const MAX_CATCH_UP_FIRES: usize = 3;

/// Tracks the held key and decides when it fires.
#[derive(Debug, Clone, Default)]
pub struct KeyRepeater {
    timing: RepeatTiming,
    held: Option<HeldKey>,
}

impl KeyRepeater {
    /// Creates a repeater with the given timing.
    #[must_use]
    pub const fn new(timing: RepeatTiming) -> Self {
        Self { timing, held: None }
    }

    /// The timing in use.
    #[must_use]
    pub const fn timing(&self) -> &RepeatTiming {
        &self.timing
    }

    /// Records a press at `now`.
    ///
    /// Returns the initial fire, or `None` if this chord is already held
    /// (platform auto-repeat key-down events). A chord with
    /// `repeats == false` fires once and stops any other key repeating.
    pub fn press(&mut self, chord: KeyChord, now: Duration, repeats: bool) -> Option<KeyFire> {
        if self.held.is_some_and(|held| held.chord == chord) {
            return None;
        }

        self.held = repeats.then(|| HeldKey {
            chord,
            next_fire: now + self.timing.initial_delay(),
        });

        Some(KeyFire {
            chord,
            kind: FireKind::Initial,
        })
    }

    /// Records a release. Stops repeating if `key` is the held key.
    pub fn release(&mut self, key: Key) {
        if self.held.is_some_and(|held| held.chord.key == key) {
            self.held = None;
        }
    }

    /// Returns the repeat fires due at `now`, at most
    /// [`MAX_CATCH_UP_FIRES`].
    pub fn tick(&mut self, now: Duration) -> Vec<KeyFire> {
        let interval = self.timing.interval();
        let mut fires = Vec::new();

        if let Some(held) = self.held.as_mut() {
            while now >= held.next_fire {
                if fires.len() == MAX_CATCH_UP_FIRES {
                    tracing::trace!(chord = %held.chord, "dropping repeat backlog");
                    held.next_fire = now + interval;
                    break;
                }
                fires.push(KeyFire {
                    chord: held.chord,
                    kind: FireKind::Repeat,
                });
                held.next_fire += interval;
            }
        }
        fires
    }

    /// The chord currently repeating, if any.
    #[must_use]
    pub fn held_chord(&self) -> Option<KeyChord> {
        self.held.map(|held| held.chord)
    }

    /// Stops tracking every key.
    pub fn clear(&mut self) {
        self.held = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn repeater() -> KeyRepeater {
        KeyRepeater::new(RepeatTiming {
            initial_delay_ms: 500,
            interval_ms: 100,
        })
    }

    #[test]
    fn test_initial_then_repeat() {
        let mut r = repeater();
        let chord = KeyChord::new(Key::Right);

        let first = r.press(chord, ms(0), true).unwrap();
        assert_eq!(first.kind, FireKind::Initial);

        assert!(r.tick(ms(499)).is_empty());
        assert_eq!(r.tick(ms(500)).len(), 1);
        assert!(r.tick(ms(599)).is_empty());
        assert_eq!(r.tick(ms(600))[0].kind, FireKind::Repeat);
    }

    #[test]
    fn test_catch_up_after_stall() {
        let mut r = repeater();
        r.press(KeyChord::new(Key::Up), ms(0), true);
        // Due at 500, 600 and 700.
        assert_eq!(r.tick(ms(750)).len(), 3);
        assert!(r.tick(ms(799)).is_empty());
        assert_eq!(r.tick(ms(800)).len(), 1);
    }

    #[test]
    fn test_long_stall_is_bounded() {
        let mut r = repeater();
        r.press(KeyChord::new(Key::Right), ms(0), true);

        assert_eq!(r.tick(Duration::from_secs(3600)).len(), MAX_CATCH_UP_FIRES);
        // Schedule restarts from the stalled tick.
        let resumed = Duration::from_secs(3600);
        assert!(r.tick(resumed + ms(99)).is_empty());
        assert_eq!(r.tick(resumed + ms(100)).len(), 1);
    }

    #[test]
    fn test_release_stops_repeat() {
        let mut r = repeater();
        r.press(KeyChord::shifted(Key::Left), ms(0), true);
        r.release(Key::Left);
        assert!(r.tick(ms(1000)).is_empty());
        assert_eq!(r.held_chord(), None);
    }

    #[test]
    fn test_platform_autorepeat_keydown_ignored() {
        let mut r = repeater();
        let chord = KeyChord::new(Key::PageUp);
        assert!(r.press(chord, ms(0), true).is_some());
        assert!(r.press(chord, ms(40), true).is_none());
    }

    #[test]
    fn test_non_repeating_key_fires_once() {
        let mut r = repeater();
        r.press(KeyChord::new(Key::Right), ms(0), true);
        let fire = r.press(KeyChord::new(Key::Enter), ms(10), false).unwrap();
        assert_eq!(fire.chord, KeyChord::new(Key::Enter));
        assert!(r.tick(ms(2000)).is_empty());
    }

    #[test]
    fn test_zero_interval_does_not_spin() {
        let mut r = KeyRepeater::new(RepeatTiming {
            initial_delay_ms: 0,
            interval_ms: 0,
        });
        r.press(KeyChord::new(Key::D), ms(0), true);
        assert_eq!(r.tick(ms(2)).len(), 3);
        assert_eq!(r.tick(ms(3)).len(), 1);
    }
}
