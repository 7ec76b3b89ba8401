//! Keyboard input events.

use std::fmt;

use crate::keys::{Key, Modifier};

/// A single key press decoded from terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    key: Key,
    literal: char,
    modifiers: Modifier,
}

impl KeyEvent {
    pub(crate) fn new(key: Key, literal: char, modifiers: Modifier) -> Self {
        Self {
            key,
            literal,
            modifiers,
        }
    }

    /// The key pressed.
    ///
    /// When this is [`Key::Rune`] the identity is carried by [`literal`].
    ///
    /// [`literal`]: KeyEvent::literal
    pub fn key(&self) -> Key {
        self.key
    }

    /// The character corresponding to the key press.
    ///
    /// Only meaningful when [`key`](KeyEvent::key) is [`Key::Rune`]. For
    /// other keys it holds a placeholder that callers should not interpret.
    pub fn literal(&self) -> char {
        self.literal
    }

    /// The modifier flags.
    pub fn modifiers(&self) -> Modifier {
        self.modifiers
    }

    /// Check if shift was held.
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifier::SHIFT)
    }

    /// Check if ctrl was held.
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifier::CTRL)
    }

    /// Check if alt was held.
    pub fn alt(&self) -> bool {
        self.modifiers.contains(Modifier::ALT)
    }

    /// Check if meta was held.
    pub fn meta(&self) -> bool {
        self.modifiers.contains(Modifier::META)
    }

    /// Check if this event is the given rune.
    pub fn is_rune(&self, c: char) -> bool {
        self.key == Key::Rune && self.literal == c
    }

    /// Render a human-friendly description such as `Shift+Left` or `q`.
    ///
    /// Named keys carry at most one modifier prefix, chosen in the order
    /// Alt, Ctrl, Shift, Meta. Runes render as their character.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key.name() {
            Some(name) => match self.modifiers.label() {
                Some(label) => write!(f, "{}+{}", label, name),
                None => f.write_str(name),
            },
            None => write!(f, "{}", self.literal),
        }
    }
}
