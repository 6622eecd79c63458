//! Key bindings: which physical key stands for which grid direction.

use crate::error::{Error, Result};
use crate::grid::Direction;
use crate::key::KeyCode;

/// One physical key and the label shown for it in hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub code: KeyCode,
    pub label: String,
}

impl Binding {
    pub fn new(code: KeyCode, label: impl Into<String>) -> Self {
        Self {
            code,
            label: label.into(),
        }
    }
}

impl From<KeyCode> for Binding {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            label: code.to_string(),
        }
    }
}

/// Built-in key binding presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// `7 8 9 / 4 5 6 / 1 2 3`, laid out like a numeric keypad.
    #[default]
    Numpad,
    /// `q w e / a s d / z x c` on the left hand of a letter keyboard.
    Qwerty,
    /// Arrows and Enter, with `1 2 3 4` on the corners.
    Direction,
}

impl Preset {
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "numpad" => Ok(Preset::Numpad),
            "qwerty" => Ok(Preset::Qwerty),
            "direction" => Ok(Preset::Direction),
            _ => Err(Error::UnknownPreset(name.to_string())),
        }
    }
}

/// A 3×3 table mapping physical keys to directions.
///
/// The table shape guarantees one binding per direction; construction
/// rejects a key bound to two directions, so [`KeyBinding::resolve`] always
/// yields at most one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    rows: [[Binding; 3]; 3],
}

impl Default for KeyBinding {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl KeyBinding {
    pub fn new(rows: [[Binding; 3]; 3]) -> Result<Self> {
        let binding = Self { rows };
        for (i, first) in Direction::ALL.into_iter().enumerate() {
            let code = binding.get(first).code;
            if let Some(second) = Direction::ALL[i + 1..]
                .iter()
                .copied()
                .find(|d| binding.get(*d).code == code)
            {
                return Err(Error::DuplicateBinding {
                    code,
                    first,
                    second,
                });
            }
        }
        Ok(binding)
    }

    /// Builds a binding from rows of any length, as read from configuration.
    pub fn from_rows(rows: Vec<Vec<Binding>>) -> Result<Self> {
        let lens: Vec<String> = rows.iter().map(|r| r.len().to_string()).collect();
        let shape_error = || Error::BindingShape {
            found: format!("[{}]", lens.join(", ")),
        };

        let rows: Vec<[Binding; 3]> = rows
            .into_iter()
            .map(<[Binding; 3]>::try_from)
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| shape_error())?;
        let rows: [[Binding; 3]; 3] = rows.try_into().map_err(|_| shape_error())?;
        Self::new(rows)
    }

    pub fn preset(preset: Preset) -> Self {
        use KeyCode::*;
        let rows = match preset {
            Preset::Numpad => [
                [
                    Binding::new(Char('7'), "Num 7"),
                    Binding::new(Char('8'), "Num 8"),
                    Binding::new(Char('9'), "Num 9"),
                ],
                [
                    Binding::new(Char('4'), "Num 4"),
                    Binding::new(Char('5'), "Num 5"),
                    Binding::new(Char('6'), "Num 6"),
                ],
                [
                    Binding::new(Char('1'), "Num 1"),
                    Binding::new(Char('2'), "Num 2"),
                    Binding::new(Char('3'), "Num 3"),
                ],
            ],
            Preset::Qwerty => [
                [
                    Binding::new(Char('q'), "Q"),
                    Binding::new(Char('w'), "W"),
                    Binding::new(Char('e'), "E"),
                ],
                [
                    Binding::new(Char('a'), "A"),
                    Binding::new(Char('s'), "S"),
                    Binding::new(Char('d'), "D"),
                ],
                [
                    Binding::new(Char('z'), "Z"),
                    Binding::new(Char('x'), "X"),
                    Binding::new(Char('c'), "C"),
                ],
            ],
            Preset::Direction => [
                [
                    Binding::new(Char('1'), "1"),
                    Binding::new(Up, "Up"),
                    Binding::new(Char('2'), "2"),
                ],
                [
                    Binding::new(Left, "Left"),
                    Binding::new(Enter, "Enter"),
                    Binding::new(Right, "Right"),
                ],
                [
                    Binding::new(Char('3'), "3"),
                    Binding::new(Down, "Down"),
                    Binding::new(Char('4'), "4"),
                ],
            ],
        };
        Self { rows }
    }

    pub fn numpad() -> Self {
        Self::preset(Preset::Numpad)
    }

    pub fn qwerty() -> Self {
        Self::preset(Preset::Qwerty)
    }

    pub fn direction() -> Self {
        Self::preset(Preset::Direction)
    }

    pub fn get(&self, dir: Direction) -> &Binding {
        let cell = dir.cell();
        &self.rows[cell.row][cell.col]
    }

    /// The direction bound to `code`, or `None` for an unbound key.
    ///
    /// An exact match wins. Otherwise an upper-case letter resolves like its
    /// lower-case key, so Shift and CapsLock do not unbind letter keys.
    pub fn resolve(&self, code: KeyCode) -> Option<Direction> {
        self.find(code).or_else(|| match code {
            KeyCode::Char(c) if c.is_uppercase() => {
                let mut lower = c.to_lowercase();
                match (lower.next(), lower.next()) {
                    (Some(l), None) => self.find(KeyCode::Char(l)),
                    _ => None,
                }
            }
            _ => None,
        })
    }

    fn find(&self, code: KeyCode) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| self.get(*dir).code == code)
    }

    pub fn label(&self, dir: Direction) -> &str {
        &self.get(dir).label
    }
}
