//! Host-facing keyboard: key binding, engine and callbacks in one place.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::KeyboardConfig;
use crate::engine::{Engine, EngineSnapshot};
use crate::error::Result;
use crate::grid::Direction;
use crate::key::{InputEvent, KeyCode};
use crate::keymap::KeyBinding;
use crate::pointer::{PointerTarget, TouchMode};
use crate::symbols::SymbolSet;
use crate::traits::{Renderer, View};
use crate::types::Changes;

type Callback = Box<dyn FnMut(&str)>;

/// A 3×3 on-screen keyboard instance.
///
/// Each instance owns its own state; dropping it is the teardown.
pub struct Keyboard {
    engine: Engine,
    bindings: KeyBinding,
    touch_mode: TouchMode,
    hints: bool,
    mirror_input: bool,
    on_done: Option<Callback>,
    on_update: Vec<Callback>,
}

impl fmt::Debug for Keyboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyboard")
            .field("engine", &self.engine)
            .field("bindings", &self.bindings)
            .field("touch_mode", &self.touch_mode)
            .field("hints", &self.hints)
            .field("mirror_input", &self.mirror_input)
            .field("update_callbacks", &self.on_update.len())
            .finish_non_exhaustive()
    }
}

pub struct KeyboardBuilder {
    bindings: KeyBinding,
    text: String,
    symbols: Arc<SymbolSet>,
    touch_mode: TouchMode,
    hints: bool,
    mirror_input: bool,
    on_done: Option<Callback>,
    on_update: Vec<Callback>,
}

impl fmt::Debug for KeyboardBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardBuilder")
            .field("bindings", &self.bindings)
            .field("text", &self.text)
            .field("touch_mode", &self.touch_mode)
            .field("hints", &self.hints)
            .field("mirror_input", &self.mirror_input)
            .finish_non_exhaustive()
    }
}

impl Default for KeyboardBuilder {
    fn default() -> Self {
        Self {
            bindings: KeyBinding::default(),
            text: String::new(),
            symbols: Arc::new(SymbolSet::builtin()),
            touch_mode: TouchMode::default(),
            hints: true,
            mirror_input: false,
            on_done: None,
            on_update: Vec::new(),
        }
    }
}

impl KeyboardBuilder {
    /// Starts from a loaded configuration. Callbacks still have to be added.
    pub fn from_config(config: &KeyboardConfig) -> Result<Self> {
        Ok(Self {
            bindings: config.key_binding()?,
            text: config.initial_text.clone(),
            symbols: Arc::new(config.symbol_set()?),
            touch_mode: config.touch_mode,
            hints: config.enable_hints,
            mirror_input: config.mirror_input,
            ..Self::default()
        })
    }

    pub fn bindings(mut self, bindings: KeyBinding) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn initial_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn symbols(mut self, symbols: impl Into<Arc<SymbolSet>>) -> Self {
        self.symbols = symbols.into();
        self
    }

    pub fn touch_mode(mut self, touch_mode: TouchMode) -> Self {
        self.touch_mode = touch_mode;
        self
    }

    pub fn hints(mut self, enabled: bool) -> Self {
        self.hints = enabled;
        self
    }

    pub fn mirror_input(mut self, enabled: bool) -> Self {
        self.mirror_input = enabled;
        self
    }

    /// Called with the text when the user submits (Center at the top level).
    pub fn on_done(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_done = Some(Box::new(f));
        self
    }

    /// Called with the text after every event that changed it. May be
    /// registered several times; callbacks run in registration order.
    pub fn on_update(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_update.push(Box::new(f));
        self
    }

    pub fn build(self) -> Keyboard {
        debug!(
            touch_mode = ?self.touch_mode,
            hints = self.hints,
            initial_len = self.text.len(),
            "keyboard created"
        );
        Keyboard {
            engine: Engine::builder()
                .text(self.text)
                .symbols(self.symbols)
                .build(),
            bindings: self.bindings,
            touch_mode: self.touch_mode,
            hints: self.hints,
            mirror_input: self.mirror_input,
            on_done: self.on_done,
            on_update: self.on_update,
        }
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        KeyboardBuilder::default().build()
    }
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> KeyboardBuilder {
        KeyboardBuilder::default()
    }

    pub fn text(&self) -> &str {
        self.engine.text()
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn bindings(&self) -> &KeyBinding {
        &self.bindings
    }

    pub fn touch_mode(&self) -> TouchMode {
        self.touch_mode
    }

    pub fn snapshot(&self) -> EngineSnapshot<'_> {
        self.engine.snapshot()
    }

    pub fn view(&self) -> View<'_> {
        View {
            snapshot: self.engine.snapshot(),
            bindings: &self.bindings,
            hints: self.hints,
            touch_mode: self.touch_mode,
            mirror_input: self.mirror_input,
        }
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> std::result::Result<(), R::Error> {
        renderer.render(&self.view())
    }

    /// Single entry point for key and pointer input.
    ///
    /// Returns `None` when the input was not recognized (unbound key, or a
    /// pointer press that the touch mode ignores); nothing changes then.
    pub fn dispatch(&mut self, input: InputEvent) -> Option<Changes> {
        match input {
            InputEvent::Key(code) => self.handle_key(code),
            InputEvent::Pointer(target) => self.handle_pointer(target),
        }
    }

    /// Resolves `code` through the key binding and handles the direction.
    pub fn handle_key(&mut self, code: KeyCode) -> Option<Changes> {
        match self.bindings.resolve(code) {
            Some(dir) => Some(self.handle(dir)),
            None => {
                trace!(%code, "ignoring unbound key");
                None
            }
        }
    }

    pub fn handle_pointer(&mut self, target: PointerTarget) -> Option<Changes> {
        let dirs = self.touch_mode.directions(target, self.engine.mode());
        if dirs.is_empty() {
            trace!(?target, "ignoring pointer press");
            return None;
        }
        Some(
            dirs.into_iter()
                .fold(Changes::empty(), |acc, dir| acc | self.handle(dir)),
        )
    }

    /// Feeds one direction to the engine, then notifies callbacks.
    ///
    /// The engine state is final before any callback runs.
    pub fn handle(&mut self, dir: Direction) -> Changes {
        let changes = self.engine.handle(dir);
        debug!(%dir, ?changes, "handled direction");

        if changes.submitted() {
            debug!(len = self.engine.text().len(), "submitting text");
            if let Some(on_done) = self.on_done.as_mut() {
                on_done(self.engine.text());
            }
        }
        if changes.text_changed() {
            for cb in &mut self.on_update {
                cb(self.engine.text());
            }
        }
        changes
    }
}
