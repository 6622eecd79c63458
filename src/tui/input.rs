//! crossterm events to keyboard input.

use crossterm::event::{
    Event, KeyCode as CKeyCode, KeyEventKind, MouseButton, MouseEventKind,
};

use crate::key::{InputEvent, KeyCode};
use crate::tui::layout::KeyboardLayout;

/// Maps a crossterm key code to a keyboard key code.
///
/// Keys with no counterpart (media keys, bare modifiers, ...) map to `None`.
pub fn key_code(code: CKeyCode) -> Option<KeyCode> {
    let code = match code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Home => KeyCode::Home,
        CKeyCode::End => KeyCode::End,
        CKeyCode::PageUp => KeyCode::PageUp,
        CKeyCode::PageDown => KeyCode::PageDown,
        CKeyCode::Delete => KeyCode::Delete,
        CKeyCode::Insert => KeyCode::Insert,
        CKeyCode::F(n) => KeyCode::F(n),
        _ => return None,
    };
    Some(code)
}

/// Converts a terminal event into keyboard input.
///
/// Key presses (not releases or repeats) become [`InputEvent::Key`]; left
/// button presses on a drawn cell become [`InputEvent::Pointer`]. Pointer
/// input needs the layout of the last frame.
pub fn input_event(event: &Event, layout: Option<&KeyboardLayout>) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_code(key.code).map(InputEvent::Key)
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => layout?
            .hit(mouse.column, mouse.row)
            .map(InputEvent::Pointer),
        _ => None,
    }
}
