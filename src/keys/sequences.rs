//! Escape sequence table.
//!
//! Maps the exact bytes a terminal sends for a key press to the key. Lookup
//! is whole-chunk only: a prefix of an entry is not a match.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{Key, Modifier};

/// What a sequence in the table stands for.
///
/// Shifted and alt arrows are kept apart from [`Key`] so that they never
/// reach a caller; [`SequenceKey::resolve`] folds them into an arrow plus a
/// modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SequenceKey {
    Plain(Key),
    ShiftLeft,
    ShiftRight,
    AltLeft,
    AltRight,
}

impl SequenceKey {
    /// The key and modifiers this table entry reports.
    pub(crate) fn resolve(self) -> (Key, Modifier) {
        match self {
            SequenceKey::Plain(key) => (key, Modifier::NONE),
            SequenceKey::ShiftLeft => (Key::Left, Modifier::SHIFT),
            SequenceKey::ShiftRight => (Key::Right, Modifier::SHIFT),
            SequenceKey::AltLeft => (Key::Left, Modifier::ALT),
            SequenceKey::AltRight => (Key::Right, Modifier::ALT),
        }
    }
}

/// Every supported sequence.
pub(crate) const SEQUENCES: &[(&[u8], SequenceKey)] = &[
    (b"\x1b[A", SequenceKey::Plain(Key::Up)),
    (b"\x1b[B", SequenceKey::Plain(Key::Down)),
    (b"\x1b[C", SequenceKey::Plain(Key::Right)),
    (b"\x1b[D", SequenceKey::Plain(Key::Left)),
    (b"\x1b[2~", SequenceKey::Plain(Key::Insert)),
    (b"\x1b[3~", SequenceKey::Plain(Key::Delete)),
    (b"\x7f", SequenceKey::Plain(Key::BACKSPACE)),
    (b"\x1b[Z", SequenceKey::Plain(Key::Backtab)),
    (b"\x1bOH", SequenceKey::Plain(Key::Home)),
    (b"\x1bOF", SequenceKey::Plain(Key::End)),
    (b"\x1b[5~", SequenceKey::Plain(Key::PgUp)),
    (b"\x1b[6~", SequenceKey::Plain(Key::PgDn)),
    (b"\x1bOP", SequenceKey::Plain(Key::F1)),
    (b"\x1bOQ", SequenceKey::Plain(Key::F2)),
    (b"\x1bOR", SequenceKey::Plain(Key::F3)),
    (b"\x1bOS", SequenceKey::Plain(Key::F4)),
    (b"\x1b[15~", SequenceKey::Plain(Key::F5)),
    (b"\x1b[17~", SequenceKey::Plain(Key::F6)),
    (b"\x1b[18~", SequenceKey::Plain(Key::F7)),
    (b"\x1b[19~", SequenceKey::Plain(Key::F8)),
    (b"\x1b[20~", SequenceKey::Plain(Key::F9)),
    (b"\x1b[21~", SequenceKey::Plain(Key::F10)),
    (b"\x1b[23~", SequenceKey::Plain(Key::F11)),
    (b"\x1b[24~", SequenceKey::Plain(Key::F12)),
    (b"\x1b[1;2P", SequenceKey::Plain(Key::F13)),
    (b"\x1b[1;2Q", SequenceKey::Plain(Key::F14)),
    (b"\x1b[1;2R", SequenceKey::Plain(Key::F15)),
    (b"\x1b[1;2S", SequenceKey::Plain(Key::F16)),
    (b"\x1b[15;2~", SequenceKey::Plain(Key::F17)),
    (b"\x1b[17;2~", SequenceKey::Plain(Key::F18)),
    (b"\x1b[18;2~", SequenceKey::Plain(Key::F19)),
    (b"\x1b[19;2~", SequenceKey::Plain(Key::F20)),
    (b"\x1b[1;2D", SequenceKey::ShiftLeft),
    (b"\x1b[1;2C", SequenceKey::ShiftRight),
    (b"\x1bb", SequenceKey::AltLeft),
    (b"\x1bf", SequenceKey::AltRight),
];

static TABLE: LazyLock<HashMap<&'static [u8], SequenceKey>> =
    LazyLock::new(|| SEQUENCES.iter().copied().collect());

/// Look up a whole chunk of input.
pub(crate) fn lookup(bytes: &[u8]) -> Option<SequenceKey> {
    TABLE.get(bytes).copied()
}
