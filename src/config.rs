//! Keyboard configuration, loadable from TOML.
//!
//! Every field has a default, so an empty file is a valid configuration:
//!
//! ```toml
//! keymap = "qwerty"
//! initial_text = "hello"
//! touch_mode = "character"
//!
//! [style]
//! hint_bg = "#868686"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::key::KeyCode;
use crate::keymap::{Binding, KeyBinding, Preset};
use crate::pointer::TouchMode;
use crate::symbols::SymbolSet;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyboardConfig {
    pub keymap: KeymapConfig,
    pub initial_text: String,
    pub enable_hints: bool,
    pub touch_mode: TouchMode,
    /// Show the typed text above the grid with a blinking cursor.
    pub mirror_input: bool,
    pub style: StyleConfig,
    pub symbols: Option<SymbolsConfig>,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            keymap: KeymapConfig::default(),
            initial_text: String::new(),
            enable_hints: true,
            touch_mode: TouchMode::default(),
            mirror_input: false,
            style: StyleConfig::default(),
            symbols: None,
        }
    }
}

/// Either a preset name or a custom 3×3 table of keys.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum KeymapConfig {
    Preset(String),
    Custom(Vec<Vec<BindingConfig>>),
}

impl Default for KeymapConfig {
    fn default() -> Self {
        KeymapConfig::Preset("numpad".to_string())
    }
}

/// One custom key: a bare key name, or a key with its hint label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BindingConfig {
    Key(String),
    Labeled { key: String, label: String },
}

impl BindingConfig {
    fn to_binding(&self) -> Result<Binding> {
        match self {
            BindingConfig::Key(key) => Ok(Binding::from(key.parse::<KeyCode>()?)),
            BindingConfig::Labeled { key, label } => {
                Ok(Binding::new(key.parse::<KeyCode>()?, label.clone()))
            }
        }
    }
}

/// Colors for the terminal renderer, as color names or `#rrggbb`.
///
/// Unset fields fall back to the renderer's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub block_fg: Option<String>,
    pub block_bg: Option<String>,
    pub border: Option<String>,
    pub hint_fg: Option<String>,
    pub hint_bg: Option<String>,
}

/// Replacement symbol tables: 4 blocks of 3 rows of 3 characters each.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymbolsConfig {
    pub main: Vec<Vec<Vec<String>>>,
    pub alt: Vec<Vec<Vec<String>>>,
}

impl KeyboardConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded keyboard configuration");
        Ok(config)
    }

    /// The configured key binding, validated.
    pub fn key_binding(&self) -> Result<KeyBinding> {
        match &self.keymap {
            KeymapConfig::Preset(name) => Ok(KeyBinding::preset(Preset::from_name(name)?)),
            KeymapConfig::Custom(rows) => {
                let rows = rows
                    .iter()
                    .map(|row| row.iter().map(BindingConfig::to_binding).collect())
                    .collect::<Result<Vec<Vec<Binding>>>>()?;
                KeyBinding::from_rows(rows)
            }
        }
    }

    /// The configured symbol tables, validated. Built-in tables when unset.
    pub fn symbol_set(&self) -> Result<SymbolSet> {
        match &self.symbols {
            Some(symbols) => SymbolSet::from_tables(symbols.main.clone(), symbols.alt.clone()),
            None => Ok(SymbolSet::builtin()),
        }
    }
}
