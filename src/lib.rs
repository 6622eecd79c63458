pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod key;
pub mod keyboard;
pub mod keymap;
pub mod pointer;
pub mod symbols;
pub mod traits;
pub mod types;

#[cfg(feature = "tui")]
pub mod tui;

pub use crate::config::KeyboardConfig;
pub use crate::engine::{Engine, EngineBuilder, EngineSnapshot};
pub use crate::error::{Error, Result};
pub use crate::grid::{BlockSlot, Cell, Direction};
pub use crate::key::{InputEvent, KeyCode};
pub use crate::keyboard::{Keyboard, KeyboardBuilder};
pub use crate::keymap::{Binding, KeyBinding, Preset};
pub use crate::pointer::{PointerTarget, TouchMode};
pub use crate::symbols::{Family, SymbolBlock, SymbolSet};
pub use crate::traits::{Renderer, View};
pub use crate::types::{CaseMode, Changes, Mode};
