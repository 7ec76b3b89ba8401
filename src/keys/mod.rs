//! Key identities and modifier flags.
//!
//! A [`Key`] is a closed enumeration: the 32 C0 control codes, the named
//! keys a terminal reports through escape sequences, and [`Key::Rune`] for
//! everything identified by its literal character.

mod names;
pub(crate) mod sequences;

use bitflags::bitflags;

/// The key pressed.
///
/// The first 32 variants share their discriminant with the C0 control code
/// they stand for, so `Key::Esc as u8 == 0x1B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Key {
    Nul = 0x00,
    Soh,
    Stx,
    Etx,
    Eot,
    Enq,
    Ack,
    Bel,
    Bs,
    Tab,
    Lf,
    Vt,
    Ff,
    Cr,
    So,
    Si,
    Dle,
    Dc1,
    Dc2,
    Dc3,
    Dc4,
    Nak,
    Syn,
    Etb,
    Can,
    Em,
    Sub,
    Esc,
    Fs,
    Gs,
    Rs,
    Us = 0x1F,

    /// The literal character carries the identity.
    Rune,
    Up,
    Down,
    Right,
    Left,
    Insert,
    Backtab,
    Delete,
    Home,
    End,
    PgUp,
    PgDn,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
}

impl Key {
    /// Alias for [`Key::Bs`].
    pub const BACKSPACE: Key = Key::Bs;
    /// Alias for [`Key::Tab`].
    pub const TAB: Key = Key::Tab;
    /// Alias for [`Key::Esc`].
    pub const ESCAPE: Key = Key::Esc;
    /// Alias for [`Key::Cr`].
    pub const ENTER: Key = Key::Cr;

    /// Every C0 control key, indexed by its code.
    const CONTROL: [Key; 32] = [
        Key::Nul,
        Key::Soh,
        Key::Stx,
        Key::Etx,
        Key::Eot,
        Key::Enq,
        Key::Ack,
        Key::Bel,
        Key::Bs,
        Key::Tab,
        Key::Lf,
        Key::Vt,
        Key::Ff,
        Key::Cr,
        Key::So,
        Key::Si,
        Key::Dle,
        Key::Dc1,
        Key::Dc2,
        Key::Dc3,
        Key::Dc4,
        Key::Nak,
        Key::Syn,
        Key::Etb,
        Key::Can,
        Key::Em,
        Key::Sub,
        Key::Esc,
        Key::Fs,
        Key::Gs,
        Key::Rs,
        Key::Us,
    ];

    /// Get the control key for a C0 code (`0x00..=0x1F`).
    ///
    /// Returns `None` for any byte outside the C0 range.
    pub fn from_control(code: u8) -> Option<Key> {
        Self::CONTROL.get(usize::from(code)).copied()
    }

    /// Check if this key is one of the C0 control codes.
    pub fn is_control(&self) -> bool {
        (*self as u8) <= Key::Us as u8
    }
}

bitflags! {
    /// Modifier keys held with a key press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifier: u8 {
        const NONE  = 0;
        const META  = 1 << 0;
        const CTRL  = 1 << 1;
        const ALT   = 1 << 2;
        const SHIFT = 1 << 3;
    }
}

impl Modifier {
    /// Label of the highest-priority modifier present.
    ///
    /// Priority is Alt, Ctrl, Shift, Meta. Only one label is ever returned.
    pub fn label(&self) -> Option<&'static str> {
        if self.contains(Modifier::ALT) {
            Some("Alt")
        } else if self.contains(Modifier::CTRL) {
            Some("Ctrl")
        } else if self.contains(Modifier::SHIFT) {
            Some("Shift")
        } else if self.contains(Modifier::META) {
            Some("Meta")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_control_matches_discriminant() {
        for code in 0u8..=0x1F {
            let key = Key::from_control(code).unwrap();
            assert_eq!(key as u8, code);
            assert!(key.is_control());
        }
    }

    #[test]
    fn test_from_control_rejects_non_c0() {
        assert_eq!(Key::from_control(0x20), None);
        assert_eq!(Key::from_control(0x7F), None);
        assert_eq!(Key::from_control(0xFF), None);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Key::BACKSPACE, Key::Bs);
        assert_eq!(Key::TAB as u8, 0x09);
        assert_eq!(Key::ESCAPE as u8, 0x1B);
        assert_eq!(Key::ENTER as u8, 0x0D);
    }

    #[test]
    fn test_named_keys_are_not_control() {
        assert!(!Key::Rune.is_control());
        assert!(!Key::Up.is_control());
        assert!(!Key::F20.is_control());
    }

    #[test]
    fn test_modifier_none_is_zero() {
        assert_eq!(Modifier::NONE.bits(), 0);
        assert_eq!(Modifier::default(), Modifier::NONE);
        assert!(Modifier::NONE.is_empty());
    }

    #[test]
    fn test_modifier_combines() {
        let mods = Modifier::SHIFT | Modifier::CTRL;
        assert!(mods.contains(Modifier::SHIFT));
        assert!(mods.contains(Modifier::CTRL));
        assert!(!mods.contains(Modifier::ALT));
    }

    #[test]
    fn test_modifier_label_priority() {
        assert_eq!(Modifier::NONE.label(), None);
        assert_eq!(Modifier::META.label(), Some("Meta"));
        assert_eq!((Modifier::META | Modifier::SHIFT).label(), Some("Shift"));
        assert_eq!((Modifier::SHIFT | Modifier::CTRL).label(), Some("Ctrl"));
        assert_eq!(Modifier::all().label(), Some("Alt"));
    }
}
