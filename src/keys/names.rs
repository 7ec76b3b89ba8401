//! Human-friendly key names.

use super::Key;

impl Key {
    /// Get the display name for this key.
    ///
    /// Returns `None` for [`Key::Rune`], whose identity is its literal
    /// character.
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            Key::Nul => "NUL",
            Key::Soh => "SOH",
            Key::Stx => "STX",
            Key::Etx => "ETX",
            Key::Eot => "EOT",
            Key::Enq => "ENQ",
            Key::Ack => "ACK",
            Key::Bel => "BEL",
            Key::Bs => "Backspace",
            Key::Tab => "Tab",
            Key::Lf => "LF",
            Key::Vt => "VT",
            Key::Ff => "FF",
            Key::Cr => "CR",
            Key::So => "SO",
            Key::Si => "SI",
            Key::Dle => "DLE",
            Key::Dc1 => "DC1",
            Key::Dc2 => "DC2",
            Key::Dc3 => "DC3",
            Key::Dc4 => "DC4",
            Key::Nak => "NAK",
            Key::Syn => "SYN",
            Key::Etb => "ETB",
            Key::Can => "CAN",
            Key::Em => "EM",
            Key::Sub => "SUB",
            Key::Esc => "Escape",
            Key::Fs => "FS",
            Key::Gs => "GS",
            Key::Rs => "RS",
            Key::Us => "US",
            Key::Rune => return None,
            Key::Up => "Up",
            Key::Down => "Down",
            Key::Right => "Right",
            Key::Left => "Left",
            Key::Insert => "Insert",
            Key::Backtab => "Backtab",
            Key::Delete => "Delete",
            Key::Home => "Home",
            Key::End => "End",
            Key::PgUp => "PgUp",
            Key::PgDn => "PgDn",
            Key::F1 => "F1",
            Key::F2 => "F2",
            Key::F3 => "F3",
            Key::F4 => "F4",
            Key::F5 => "F5",
            Key::F6 => "F6",
            Key::F7 => "F7",
            Key::F8 => "F8",
            Key::F9 => "F9",
            Key::F10 => "F10",
            Key::F11 => "F11",
            Key::F12 => "F12",
            Key::F13 => "F13",
            Key::F14 => "F14",
            Key::F15 => "F15",
            Key::F16 => "F16",
            Key::F17 => "F17",
            Key::F18 => "F18",
            Key::F19 => "F19",
            Key::F20 => "F20",
        };
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rune_has_no_name() {
        assert_eq!(Key::Rune.name(), None);
    }

    #[test]
    fn test_control_names() {
        assert_eq!(Key::Nul.name(), Some("NUL"));
        assert_eq!(Key::BACKSPACE.name(), Some("Backspace"));
        assert_eq!(Key::TAB.name(), Some("Tab"));
        assert_eq!(Key::ESCAPE.name(), Some("Escape"));
        assert_eq!(Key::ENTER.name(), Some("CR"));
    }

    #[test]
    fn test_every_control_key_is_named() {
        for code in 0u8..=0x1F {
            let key = Key::from_control(code).unwrap();
            assert!(key.name().is_some(), "{:?} has no name", key);
        }
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(Key::Up.name(), Some("Up"));
        assert_eq!(Key::PgDn.name(), Some("PgDn"));
        assert_eq!(Key::F5.name(), Some("F5"));
        assert_eq!(Key::F20.name(), Some("F20"));
    }
}
