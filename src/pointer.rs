//! Pointer (mouse or touch) input on the rendered grid.
//!
//! Pointer presses never mutate state directly: they are translated into
//! the direction events a key press would have produced, and those run
//! through the same engine.

use serde::Deserialize;

use crate::grid::Direction;
use crate::types::Mode;

/// How pointer presses on the rendered grid are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchMode {
    /// Pointer input is ignored.
    Disabled,
    /// A press on a character inside a top-level block types it directly.
    Character,
    /// A press on a top-level block opens it, like the matching key would.
    #[default]
    Block,
}

/// Where a pointer press landed on the grid.
///
/// `cell` is the grid cell under the pointer; `sub` is which ninth of that
/// cell was hit, used to pick a character inside a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerTarget {
    pub cell: Direction,
    pub sub: Direction,
}

impl PointerTarget {
    pub fn new(cell: Direction, sub: Direction) -> Self {
        Self { cell, sub }
    }

    /// A press on the middle of `cell`.
    pub fn cell(cell: Direction) -> Self {
        Self {
            cell,
            sub: Direction::Center,
        }
    }
}

impl TouchMode {
    /// The direction events equivalent to a pointer press in `mode`.
    pub fn directions(self, target: PointerTarget, mode: Mode) -> Vec<Direction> {
        match (self, mode) {
            (TouchMode::Disabled, _) => vec![],
            (_, Mode::BlockSelected { .. }) => vec![target.cell],
            (TouchMode::Block, Mode::TopLevel) => vec![target.cell],
            (TouchMode::Character, Mode::TopLevel) => match target.cell.block_slot() {
                Some(_) => vec![target.cell, target.sub],
                None => vec![target.cell],
            },
        }
    }

    pub fn enabled(self) -> bool {
        self != TouchMode::Disabled
    }
}
