use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::pointer::PointerTarget;

/// Physical key signals a keyboard can be bound to.
///
/// This enum provides a platform-agnostic representation of keys.
/// Hosts should map their platform-specific key events to these codes;
/// devices that only report numeric scan codes can use [`KeyCode::Raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key. Hosts should report letters in lower case; key
    /// bindings also accept upper case for a lower-case letter key.
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Backspace,
    Tab,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    Insert,
    /// Function key (F1-F24).
    F(u8),
    /// An opaque device code, e.g. a remote control scan code.
    Raw(u32),
}

const NAMED: [(&str, KeyCode); 14] = [
    ("Up", KeyCode::Up),
    ("Down", KeyCode::Down),
    ("Left", KeyCode::Left),
    ("Right", KeyCode::Right),
    ("Enter", KeyCode::Enter),
    ("Esc", KeyCode::Esc),
    ("Backspace", KeyCode::Backspace),
    ("Tab", KeyCode::Tab),
    ("Home", KeyCode::Home),
    ("End", KeyCode::End),
    ("PageUp", KeyCode::PageUp),
    ("PageDown", KeyCode::PageDown),
    ("Delete", KeyCode::Delete),
    ("Insert", KeyCode::Insert),
];

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(' ') => f.write_str("Space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::F(n) => write!(f, "F{n}"),
            KeyCode::Raw(code) => write!(f, "raw:{code}"),
            named => {
                let name = NAMED
                    .iter()
                    .find(|(_, code)| code == named)
                    .map(|(name, _)| *name)
                    .unwrap_or("?");
                f.write_str(name)
            }
        }
    }
}

/// Parses the textual key names used in configuration files.
///
/// A single character is a [`KeyCode::Char`]; `"Space"`, `"Up"`, `"Enter"`,
/// `"F5"` and friends name special keys (case-insensitive); `"raw:49"` is a
/// [`KeyCode::Raw`].
impl FromStr for KeyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(KeyCode::Char(c));
        }
        if s.eq_ignore_ascii_case("space") {
            return Ok(KeyCode::Char(' '));
        }
        if let Some((_, code)) = NAMED.iter().find(|(name, _)| name.eq_ignore_ascii_case(s)) {
            return Ok(*code);
        }
        if let Some(raw) = s
            .get(..4)
            .filter(|prefix| prefix.eq_ignore_ascii_case("raw:"))
            .and_then(|_| s.get(4..))
        {
            return raw
                .trim()
                .parse()
                .map(KeyCode::Raw)
                .map_err(|_| Error::InvalidKeyName(s.to_string()));
        }
        if let Some(n) = s.strip_prefix(['F', 'f'])
            && let Ok(n) = n.parse::<u8>()
            && (1..=24).contains(&n)
        {
            return Ok(KeyCode::F(n));
        }
        Err(Error::InvalidKeyName(s.to_string()))
    }
}

/// Input accepted by [`Keyboard::dispatch`](crate::Keyboard::dispatch).
///
/// Key presses and pointer presses go through the same entry point so that
/// both end up as direction events on one state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A physical key press, resolved through the active key binding.
    Key(KeyCode),
    /// A pointer press on the rendered grid, resolved through the touch mode.
    Pointer(PointerTarget),
}

impl From<KeyCode> for InputEvent {
    fn from(code: KeyCode) -> Self {
        InputEvent::Key(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_characters_case_sensitively() {
        assert_eq!("q".parse::<KeyCode>().unwrap(), KeyCode::Char('q'));
        assert_eq!("Q".parse::<KeyCode>().unwrap(), KeyCode::Char('Q'));
        assert_eq!("7".parse::<KeyCode>().unwrap(), KeyCode::Char('7'));
    }

    #[test]
    fn parses_named_keys() {
        assert_eq!("Up".parse::<KeyCode>().unwrap(), KeyCode::Up);
        assert_eq!("enter".parse::<KeyCode>().unwrap(), KeyCode::Enter);
        assert_eq!("PAGEDOWN".parse::<KeyCode>().unwrap(), KeyCode::PageDown);
        assert_eq!("space".parse::<KeyCode>().unwrap(), KeyCode::Char(' '));
        assert_eq!("F12".parse::<KeyCode>().unwrap(), KeyCode::F(12));
        assert_eq!("raw:104".parse::<KeyCode>().unwrap(), KeyCode::Raw(104));
        assert_eq!("RAW:49".parse::<KeyCode>().unwrap(), KeyCode::Raw(49));
        assert_eq!("Raw: 7".parse::<KeyCode>().unwrap(), KeyCode::Raw(7));
    }

    #[test]
    fn rejects_unknown_names() {
        for bad in ["", "Upp", "F0", "F99", "raw:x", "RAW:", "ra"] {
            assert!(
                matches!(bad.parse::<KeyCode>(), Err(Error::InvalidKeyName(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn display_round_trips() {
        for code in [
            KeyCode::Char('w'),
            KeyCode::Char(' '),
            KeyCode::Left,
            KeyCode::Enter,
            KeyCode::F(3),
            KeyCode::Raw(49),
        ] {
            assert_eq!(code.to_string().parse::<KeyCode>().unwrap(), code);
        }
    }
}
