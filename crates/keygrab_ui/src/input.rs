//! Keyboard input model.
//!
//! Keys, modifier state, and chords such as `shift+arrowLeft`. Chords are
//! written and parsed in the same `modifier+...+key` form hosts use to
//! describe key bindings.

#![allow(missing_docs)]

use keygrab_core::{InteractionError, InteractionResult};
use std::fmt;
use std::str::FromStr;

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key.
    Escape,
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Space bar.
    Space,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Alphabetic keys.
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    /// More alphabetic keys.
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    /// Number keys.
    Num0, Num1, Num2, Num3, Num4, Num5, Num6, Num7, Num8, Num9,
}

const LETTERS: [Key; 26] = [
    Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
    Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
    Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
];

const DIGITS: [Key; 10] = [
    Key::Num0, Key::Num1, Key::Num2, Key::Num3, Key::Num4,
    Key::Num5, Key::Num6, Key::Num7, Key::Num8, Key::Num9,
];

impl Key {
    /// Canonical binding name, e.g. `arrowLeft`, `pageUp`, `a`, `7`.
    #[must_use]
    pub fn name(self) -> &'static str {
        const LETTER_NAMES: [&str; 26] = [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
            "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
        ];
        const DIGIT_NAMES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

        match self {
            Self::Escape => "escape",
            Self::Enter => "enter",
            Self::Tab => "tab",
            Self::Space => "space",
            Self::Up => "arrowUp",
            Self::Down => "arrowDown",
            Self::Left => "arrowLeft",
            Self::Right => "arrowRight",
            Self::Home => "home",
            Self::End => "end",
            Self::PageUp => "pageUp",
            Self::PageDown => "pageDown",
            other => {
                if let Some(d) = other.digit() {
                    DIGIT_NAMES[usize::from(d)]
                } else {
                    let index = LETTERS.iter().position(|k| *k == other).unwrap_or(0);
                    LETTER_NAMES[index]
                }
            }
        }
    }

    /// Looks a key up by binding name. Case-insensitive.
    ///
    /// # Errors
    ///
    /// [`InteractionError::UnknownKey`] if no key has that name.
    pub fn from_name(name: &str) -> InteractionResult<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let key = match lower.as_str() {
            "escape" | "esc" => Self::Escape,
            "enter" | "return" => Self::Enter,
            "tab" => Self::Tab,
            "space" => Self::Space,
            "arrowup" | "up" => Self::Up,
            "arrowdown" | "down" => Self::Down,
            "arrowleft" | "left" => Self::Left,
            "arrowright" | "right" => Self::Right,
            "home" => Self::Home,
            "end" => Self::End,
            "pageup" => Self::PageUp,
            "pagedown" => Self::PageDown,
            single if single.len() == 1 => {
                let c = single.as_bytes()[0];
                match c {
                    b'a'..=b'z' => LETTERS[usize::from(c - b'a')],
                    b'0'..=b'9' => DIGITS[usize::from(c - b'0')],
                    _ => return Err(InteractionError::UnknownKey(name.to_string())),
                }
            }
            _ => return Err(InteractionError::UnknownKey(name.to_string())),
        };
        Ok(key)
    }

    /// The digit for number keys.
    #[must_use]
    pub fn digit(self) -> Option<u8> {
        DIGITS
            .iter()
            .position(|k| *k == self)
            .and_then(|d| u8::try_from(d).ok())
    }

    /// The number key for a digit 0-9.
    #[must_use]
    pub fn from_digit(digit: u8) -> Option<Self> {
        DIGITS.get(usize::from(digit)).copied()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Control key is held.
    pub ctrl: bool,
    /// Alt key is held.
    pub alt: bool,
    /// Super/Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Returns true if no modifier is held.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.shift || self.ctrl || self.alt || self.meta)
    }
}

/// A key plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Modifiers held.
    pub modifiers: Modifiers,
    /// The key.
    pub key: Key,
}

impl KeyChord {
    /// A key without modifiers.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            modifiers: Modifiers::NONE,
            key,
        }
    }

    /// A key with shift held.
    #[must_use]
    pub const fn shifted(key: Key) -> Self {
        Self {
            modifiers: Modifiers::SHIFT,
            key,
        }
    }

    /// A key with the given modifiers.
    #[must_use]
    pub const fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { modifiers, key }
    }

    /// Returns the digit for an unmodified number key.
    #[must_use]
    pub fn digit(&self) -> Option<u8> {
        if self.modifiers.is_empty() {
            self.key.digit()
        } else {
            None
        }
    }
}

impl From<Key> for KeyChord {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

impl FromStr for KeyChord {
    type Err = InteractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = s.split('+').collect();
        let key_name = parts.pop().unwrap_or_default();
        let key = Key::from_name(key_name)?;

        let mut modifiers = Modifiers::NONE;
        for part in parts {
            match part.trim().to_ascii_lowercase().as_str() {
                "shift" => modifiers.shift = true,
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" | "option" => modifiers.alt = true,
                "meta" | "cmd" | "super" => modifiers.meta = true,
                _ => return Err(InteractionError::UnknownKey(s.to_string())),
            }
        }
        Ok(Self { modifiers, key })
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.alt {
            f.write_str("alt+")?;
        }
        if self.modifiers.meta {
            f.write_str("meta+")?;
        }
        if self.modifiers.shift {
            f.write_str("shift+")?;
        }
        f.write_str(self.key.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_shifted() {
        assert_eq!("pageUp".parse::<KeyChord>(), Ok(KeyChord::new(Key::PageUp)));
        assert_eq!(
            "shift+arrowLeft".parse::<KeyChord>(),
            Ok(KeyChord::shifted(Key::Left))
        );
        assert_eq!("Shift+D".parse::<KeyChord>(), Ok(KeyChord::shifted(Key::D)));
        assert_eq!("7".parse::<KeyChord>(), Ok(KeyChord::new(Key::Num7)));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "hyper+a".parse::<KeyChord>(),
            Err(InteractionError::UnknownKey(_))
        ));
        assert!(matches!(
            "f13".parse::<KeyChord>(),
            Err(InteractionError::UnknownKey(_))
        ));
        assert!("".parse::<KeyChord>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(KeyChord::shifted(Key::Right).to_string(), "shift+arrowRight");
        assert_eq!(KeyChord::new(Key::W).to_string(), "w");
        let chord = KeyChord::with_modifiers(
            Key::Home,
            Modifiers {
                ctrl: true,
                ..Modifiers::NONE
            },
        );
        assert_eq!(chord.to_string(), "ctrl+home");
    }

    #[test]
    fn test_digits() {
        for d in 0..10 {
            let key = Key::from_digit(d).unwrap();
            assert_eq!(key.digit(), Some(d));
            assert_eq!(key.name(), d.to_string());
        }
        assert_eq!(Key::from_digit(10), None);
        assert_eq!(KeyChord::shifted(Key::Num3).digit(), None);
    }

    #[test]
    fn test_letter_names() {
        assert_eq!(Key::A.name(), "a");
        assert_eq!(Key::Z.name(), "z");
        assert_eq!(Key::from_name("s"), Ok(Key::S));
    }
}
