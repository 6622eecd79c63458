use ratatui::layout::Rect;

use crate::grid::{Cell, Direction};
use crate::pointer::PointerTarget;

/// Where each of the nine cells is drawn inside a terminal area.
///
/// The widget draws from this layout and pointer presses are hit-tested
/// against it, so what the user clicks is always what was drawn there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardLayout {
    cells: [[Rect; 3]; 3],
    hints: bool,
}

impl KeyboardLayout {
    /// Smallest cell that fits a border around three lines of `a b c`.
    pub const MIN_CELL_WIDTH: u16 = 7;
    pub const MIN_CELL_HEIGHT: u16 = 5;

    pub fn new(area: Rect, hints: bool) -> Self {
        let hint_rows = if hints { 1 } else { 0 };
        let cell_w = area.width / 3;
        let cell_h = area.height.saturating_sub(3 * hint_rows) / 3;

        let mut cells = [[Rect::default(); 3]; 3];
        for (row, line) in cells.iter_mut().enumerate() {
            for (col, rect) in line.iter_mut().enumerate() {
                *rect = Rect::new(
                    area.x + col as u16 * cell_w,
                    area.y + row as u16 * (cell_h + hint_rows),
                    cell_w,
                    cell_h,
                );
            }
        }
        Self { cells, hints }
    }

    pub fn cell(&self, dir: Direction) -> Rect {
        let Cell { row, col } = dir.cell();
        self.cells[row][col]
    }

    /// The one-line strip under a cell where its key label goes.
    pub fn hint(&self, dir: Direction) -> Option<Rect> {
        if !self.hints {
            return None;
        }
        let cell = self.cell(dir);
        Some(Rect::new(cell.x, cell.y + cell.height, cell.width, 1))
    }

    /// Whether every cell is large enough for a bordered block preview.
    pub fn fits_content(&self) -> bool {
        let cell = self.cells[0][0];
        cell.width >= Self::MIN_CELL_WIDTH && cell.height >= Self::MIN_CELL_HEIGHT
    }

    /// The pointer target at a terminal position, if it falls on a cell.
    ///
    /// Hint strips and leftover margins are not targets.
    pub fn hit(&self, column: u16, row: u16) -> Option<PointerTarget> {
        let cell = Direction::ALL
            .into_iter()
            .find(|dir| contains(self.cell(*dir), column, row))?;
        let inner = inner(self.cell(cell));
        let (column, row) = clamp_into(inner, column, row);
        let sub = Direction::ALL
            .into_iter()
            .find(|dir| contains(sub_cell(inner, *dir), column, row))
            .unwrap_or(Direction::Center);
        Some(PointerTarget::new(cell, sub))
    }
}

/// The area inside a cell's border.
pub(crate) fn inner(cell: Rect) -> Rect {
    if cell.width < 2 || cell.height < 2 {
        return Rect::new(cell.x, cell.y, 0, 0);
    }
    Rect::new(cell.x + 1, cell.y + 1, cell.width - 2, cell.height - 2)
}

/// One ninth of `area`; leftover columns and rows go to the later ninths.
pub(crate) fn sub_cell(area: Rect, dir: Direction) -> Rect {
    let Cell { row, col } = dir.cell();
    let (x0, x1) = third(area.width, col);
    let (y0, y1) = third(area.height, row);
    Rect::new(area.x + x0, area.y + y0, x1 - x0, y1 - y0)
}

fn third(len: u16, i: usize) -> (u16, u16) {
    let len = u32::from(len);
    let start = len * i as u32 / 3;
    let end = len * (i as u32 + 1) / 3;
    (start as u16, end as u16)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn clamp_into(rect: Rect, column: u16, row: u16) -> (u16, u16) {
    let max_x = rect.x + rect.width.saturating_sub(1);
    let max_y = rect.y + rect.height.saturating_sub(1);
    (column.clamp(rect.x, max_x), row.clamp(rect.y, max_y))
}
