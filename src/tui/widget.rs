use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::engine::EngineSnapshot;
use crate::grid::Direction;
use crate::symbols::{Family, SymbolBlock};
use crate::traits::View;
use crate::tui::layout::{KeyboardLayout, inner, sub_cell};
use crate::tui::theme::Theme;
use crate::types::{CaseMode, Mode};

/// Label of a top-level action cell. Block cells have no label.
pub fn action_label(dir: Direction, snapshot: &EngineSnapshot<'_>) -> &'static [&'static str] {
    match dir {
        Direction::UpperLeft => &["Erase"],
        Direction::UpperRight => &["Space"],
        Direction::Center => &["Done"],
        Direction::BottomLeft => match snapshot.case {
            CaseMode::Lower => &["Upper", "case"],
            CaseMode::Upper => &["Lower", "case"],
        },
        Direction::BottomRight => match snapshot.family {
            Family::Main => &["Symbols"],
            Family::Alt => &["Letters"],
        },
        Direction::Up | Direction::Left | Direction::Right | Direction::Bottom => &[],
    }
}

/// Shown instead of the grid when the cells cannot hold a block preview.
pub const TOO_SMALL: &str = "Too small";

/// The 3×3 keyboard grid.
///
/// At the top level it shows action labels and a preview of each block;
/// with a block open it shows that block's characters one per cell.
pub struct KeyboardWidget<'a> {
    view: View<'a>,
    theme: &'a Theme,
}

impl<'a> KeyboardWidget<'a> {
    pub fn new(view: View<'a>, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Widget for KeyboardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = KeyboardLayout::new(area, self.view.hints);
        if !layout.fits_content() {
            centered(&[TOO_SMALL], area, buf, self.theme.block);
            return;
        }
        let snapshot = &self.view.snapshot;

        for dir in Direction::ALL {
            let cell = layout.cell(dir);
            if cell.width == 0 || cell.height == 0 {
                continue;
            }
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(self.theme.border)
                .style(self.theme.block)
                .render(cell, buf);
            let inner = inner(cell);

            match (snapshot.mode, snapshot.active_block) {
                (Mode::BlockSelected { .. }, Some(block)) => {
                    let symbol = snapshot.case.apply(block.get(dir));
                    centered(&[symbol.as_ref()], inner, buf, self.theme.selection);
                }
                _ => match dir.block_slot() {
                    Some(slot) => preview(snapshot.block(slot), snapshot.case, inner, buf),
                    None => centered(action_label(dir, snapshot), inner, buf, self.theme.block),
                },
            }

            if let Some(hint) = layout.hint(dir) {
                Paragraph::new(self.view.bindings.label(dir))
                    .alignment(Alignment::Center)
                    .style(self.theme.hint)
                    .render(hint, buf);
            }
        }
    }
}

/// Draws all nine characters of a block, each centered in its ninth of
/// `area` so pointer hit-testing lands on the character drawn there.
fn preview(block: &SymbolBlock, case: CaseMode, area: Rect, buf: &mut Buffer) {
    for dir in Direction::ALL {
        let sub = sub_cell(area, dir);
        if sub.width == 0 || sub.height == 0 {
            continue;
        }
        let symbol = case.apply(block.get(dir));
        let row = Rect::new(sub.x, sub.y + (sub.height - 1) / 2, sub.width, 1);
        Paragraph::new(symbol.as_ref())
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}

fn centered(lines: &[&str], area: Rect, buf: &mut Buffer, style: ratatui::style::Style) {
    let height = (lines.len() as u16).min(area.height);
    if height == 0 || area.width == 0 {
        return;
    }
    let rect = Rect::new(area.x, area.y + (area.height - height) / 2, area.width, height);
    let lines: Vec<Line> = lines.iter().map(|l| Line::from(*l)).collect();
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(style)
        .render(rect, buf);
}

/// The typed text, drawn above the grid when input mirroring is on.
pub struct MirrorLine<'a> {
    text: &'a str,
    cursor_visible: bool,
    theme: &'a Theme,
}

impl<'a> MirrorLine<'a> {
    pub const HEIGHT: u16 = 3;

    pub fn new(text: &'a str, cursor_visible: bool, theme: &'a Theme) -> Self {
        Self {
            text,
            cursor_visible,
            theme,
        }
    }
}

impl Widget for MirrorLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut line = self.text.to_string();
        if self.cursor_visible && !self.text.is_empty() {
            line.push('|');
        }
        Paragraph::new(line)
            .style(self.theme.block)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border)
                    .title("Text"),
            )
            .render(area, buf);
    }
}
