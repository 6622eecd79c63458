use crate::engine::EngineSnapshot;
use crate::keymap::KeyBinding;
use crate::pointer::TouchMode;

/// Everything a renderer needs to draw the keyboard once.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub snapshot: EngineSnapshot<'a>,
    pub bindings: &'a KeyBinding,
    /// Draw the bound key's label under each cell.
    pub hints: bool,
    pub touch_mode: TouchMode,
    /// Draw the current text above the grid.
    pub mirror_input: bool,
}

/// A presentation layer for the keyboard.
///
/// Renderers only read state. Input they collect (pointer presses, key
/// presses) goes back through [`Keyboard::dispatch`](crate::Keyboard::dispatch).
pub trait Renderer {
    type Error;

    fn render(&mut self, view: &View<'_>) -> Result<(), Self::Error>;
}
