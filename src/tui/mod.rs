//! Terminal rendering adapter built on ratatui and crossterm.

mod cursor;
pub mod input;
mod layout;
mod theme;
mod widget;

use std::io;

use ratatui::{
    Terminal,
    backend::Backend,
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
};

use crate::pointer::PointerTarget;
use crate::traits::{Renderer, View};

pub use cursor::CursorBlink;
pub use layout::KeyboardLayout;
pub use theme::Theme;
pub use widget::{KeyboardWidget, MirrorLine, TOO_SMALL, action_label};

/// Splits a frame into the optional mirror line and the keyboard grid.
pub fn split_area(area: Rect, mirror_input: bool) -> (Option<Rect>, Rect) {
    if !mirror_input {
        return (None, area);
    }
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Length(MirrorLine::HEIGHT), Constraint::Min(0)].as_ref())
        .split(area);
    (Some(chunks[0]), chunks[1])
}

/// Draws the keyboard on a whole terminal and remembers the layout of the
/// last frame for pointer hit-testing.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    theme: Theme,
    cursor: CursorBlink,
    layout: Option<KeyboardLayout>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, theme: Theme, cursor: CursorBlink) -> Self {
        Self {
            terminal,
            theme,
            cursor,
            layout: None,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn cursor_mut(&mut self) -> &mut CursorBlink {
        &mut self.cursor
    }

    /// Layout of the last drawn frame, if the grid fit the terminal.
    pub fn layout(&self) -> Option<&KeyboardLayout> {
        self.layout.as_ref()
    }

    pub fn pointer_target(&self, column: u16, row: u16) -> Option<PointerTarget> {
        self.layout?.hit(column, row)
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    type Error = io::Error;

    fn render(&mut self, view: &View<'_>) -> io::Result<()> {
        let theme = &self.theme;
        let cursor_visible = self.cursor.visible();
        let mut drawn = None;

        self.terminal.draw(|frame| {
            let (mirror, grid) = split_area(frame.size(), view.mirror_input);
            if let Some(mirror) = mirror {
                frame.render_widget(
                    MirrorLine::new(view.snapshot.text, cursor_visible, theme),
                    mirror,
                );
            }
            frame.render_widget(KeyboardWidget::new(*view, theme), grid);
            let layout = KeyboardLayout::new(grid, view.hints);
            drawn = layout.fits_content().then_some(layout);
        })?;

        self.layout = drawn;
        Ok(())
    }
}
