use std::sync::Arc;

use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

use crate::grid::{BlockSlot, Direction};
use crate::symbols::{Family, SymbolBlock, SymbolSet};
use crate::types::{CaseMode, Changes, Mode};

/// The selection state machine.
///
/// Owns the accumulated text and the mode flags. Every mutation goes
/// through [`Engine::handle`]; the engine never touches presentation and
/// never invokes callbacks itself.
#[derive(Debug, Clone)]
pub struct Engine {
    text: String,
    case: CaseMode,
    family: Family,
    mode: Mode,
    symbols: Arc<SymbolSet>,
}

/// A read-only view of the engine state, handed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct EngineSnapshot<'a> {
    pub text: &'a str,
    pub case: CaseMode,
    pub family: Family,
    pub mode: Mode,
    /// The open block while in [`Mode::BlockSelected`].
    pub active_block: Option<&'a SymbolBlock>,
    pub symbols: &'a SymbolSet,
}

impl<'a> EngineSnapshot<'a> {
    /// The block shown on the top-level grid for `slot`, in the current family.
    pub fn block(&self, slot: BlockSlot) -> &'a SymbolBlock {
        self.symbols.block(self.family, slot)
    }
}

#[derive(Default)]
pub struct EngineBuilder {
    text: String,
    symbols: Option<Arc<SymbolSet>>,
}

impl EngineBuilder {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn symbols(mut self, symbols: impl Into<Arc<SymbolSet>>) -> Self {
        self.symbols = Some(symbols.into());
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            text: self.text,
            case: CaseMode::default(),
            family: Family::default(),
            mode: Mode::TopLevel,
            symbols: self.symbols.unwrap_or_default(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::default().build()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        EngineBuilder::default().text(text).build()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn case(&self) -> CaseMode {
        self.case
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    /// The open block, if a block is selected.
    pub fn active_block(&self) -> Option<&SymbolBlock> {
        match self.mode {
            Mode::TopLevel => None,
            Mode::BlockSelected { family, slot } => Some(self.symbols.block(family, slot)),
        }
    }

    pub fn snapshot(&self) -> EngineSnapshot<'_> {
        EngineSnapshot {
            text: &self.text,
            case: self.case,
            family: self.family,
            mode: self.mode,
            active_block: self.active_block(),
            symbols: &self.symbols,
        }
    }

    /// Applies one direction event and reports what changed.
    pub fn handle(&mut self, dir: Direction) -> Changes {
        match self.mode {
            Mode::BlockSelected { family, slot } => {
                let symbols = Arc::clone(&self.symbols);
                let symbol = symbols.block(family, slot).get(dir);
                self.append(symbol);
                self.mode = Mode::TopLevel;
                trace!(%dir, %family, ?slot, "selected symbol, back to top level");
                Changes::TEXT | Changes::MODE
            }
            Mode::TopLevel => self.handle_top_level(dir),
        }
    }

    fn handle_top_level(&mut self, dir: Direction) -> Changes {
        match dir {
            Direction::UpperLeft => {
                if self.erase_last() {
                    Changes::TEXT
                } else {
                    Changes::empty()
                }
            }
            Direction::Up => self.open_block(BlockSlot::Up),
            Direction::UpperRight => {
                self.text.push(' ');
                Changes::TEXT
            }
            Direction::Left => self.open_block(BlockSlot::Left),
            Direction::Center => Changes::SUBMIT,
            Direction::Right => self.open_block(BlockSlot::Right),
            Direction::BottomLeft => {
                self.case = self.case.toggled();
                trace!(case = ?self.case, "toggled case");
                Changes::CASE
            }
            Direction::Bottom => self.open_block(BlockSlot::Bottom),
            Direction::BottomRight => {
                self.family = self.family.toggled();
                trace!(family = %self.family, "toggled symbol family");
                Changes::FAMILY
            }
        }
    }

    fn open_block(&mut self, slot: BlockSlot) -> Changes {
        self.mode = Mode::BlockSelected {
            family: self.family,
            slot,
        };
        trace!(family = %self.family, ?slot, "opened block");
        Changes::MODE
    }

    fn append(&mut self, symbol: &str) {
        self.text.push_str(&self.case.apply(symbol));
    }

    /// Removes the last user-perceived character. Returns false on empty text.
    fn erase_last(&mut self) -> bool {
        match self.text.grapheme_indices(true).next_back() {
            Some((idx, _)) => {
                self.text.truncate(idx);
                true
            }
            None => false,
        }
    }
}
