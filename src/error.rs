use std::path::PathBuf;

use thiserror::Error;

use crate::grid::Direction;
use crate::key::KeyCode;
use crate::symbols::Family;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a keyboard.
///
/// Everything here is a construction-time failure: once a [`Keyboard`]
/// exists, handling input cannot fail.
///
/// [`Keyboard`]: crate::Keyboard
#[derive(Debug, Error)]
pub enum Error {
    // Symbol tables
    #[error("{family} symbol table must have 4 blocks, found {found}")]
    BlockCount { family: Family, found: usize },

    #[error("{family} block {block} must have 3 rows, found {found}")]
    RowCount {
        family: Family,
        block: usize,
        found: usize,
    },

    #[error("{family} block {block} row {row} must have 3 cells, found {found}")]
    CellCount {
        family: Family,
        block: usize,
        row: usize,
        found: usize,
    },

    #[error("{family} block {block} cell ({row}, {col}) must be a single character, found {value:?}")]
    InvalidSymbol {
        family: Family,
        block: usize,
        row: usize,
        col: usize,
        value: String,
    },

    // Key bindings
    #[error("key binding must have 3 rows of 3 keys, found {found}")]
    BindingShape { found: String },

    #[error("key {code} is bound to both {first} and {second}")]
    DuplicateBinding {
        code: KeyCode,
        first: Direction,
        second: Direction,
    },

    #[error("unknown key binding preset {0:?} (expected numpad, qwerty or direction)")]
    UnknownPreset(String),

    #[error("invalid key name {0:?}")]
    InvalidKeyName(String),

    // Configuration
    #[error("invalid color {value:?} for style.{field}")]
    InvalidColor { field: &'static str, value: String },

    #[error("failed to read configuration {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}
