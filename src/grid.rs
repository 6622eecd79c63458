/// One of the nine positions of the 3×3 grid.
///
/// Directions are the only input the selection engine understands. At the
/// top level the corners and the center carry actions and the four edge
/// midpoints open a symbol block; inside an open block every direction
/// selects one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpperLeft,
    Up,
    UpperRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

/// A `(row, col)` address inside the 3×3 grid, both in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Which of the four blocks of a symbol family an edge direction opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockSlot {
    Up,
    Left,
    Right,
    Bottom,
}

impl BlockSlot {
    pub const ALL: [BlockSlot; 4] = [
        BlockSlot::Up,
        BlockSlot::Left,
        BlockSlot::Right,
        BlockSlot::Bottom,
    ];

    /// Index of this block inside a family.
    pub const fn index(self) -> usize {
        match self {
            BlockSlot::Up => 0,
            BlockSlot::Left => 1,
            BlockSlot::Right => 2,
            BlockSlot::Bottom => 3,
        }
    }

    /// The top-level direction that opens this block.
    pub const fn direction(self) -> Direction {
        match self {
            BlockSlot::Up => Direction::Up,
            BlockSlot::Left => Direction::Left,
            BlockSlot::Right => Direction::Right,
            BlockSlot::Bottom => Direction::Bottom,
        }
    }
}

impl Direction {
    /// All nine directions in row-major order.
    pub const ALL: [Direction; 9] = [
        Direction::UpperLeft,
        Direction::Up,
        Direction::UpperRight,
        Direction::Left,
        Direction::Center,
        Direction::Right,
        Direction::BottomLeft,
        Direction::Bottom,
        Direction::BottomRight,
    ];

    pub const fn cell(self) -> Cell {
        match self {
            Direction::UpperLeft => Cell::new(0, 0),
            Direction::Up => Cell::new(0, 1),
            Direction::UpperRight => Cell::new(0, 2),
            Direction::Left => Cell::new(1, 0),
            Direction::Center => Cell::new(1, 1),
            Direction::Right => Cell::new(1, 2),
            Direction::BottomLeft => Cell::new(2, 0),
            Direction::Bottom => Cell::new(2, 1),
            Direction::BottomRight => Cell::new(2, 2),
        }
    }

    /// Inverse of [`Direction::cell`]. Out-of-grid cells have no direction.
    pub const fn from_cell(cell: Cell) -> Option<Direction> {
        if cell.row > 2 || cell.col > 2 {
            return None;
        }
        Some(Direction::ALL[cell.row * 3 + cell.col])
    }

    /// The block opened by this direction at the top level, if any.
    pub const fn block_slot(self) -> Option<BlockSlot> {
        match self {
            Direction::Up => Some(BlockSlot::Up),
            Direction::Left => Some(BlockSlot::Left),
            Direction::Right => Some(BlockSlot::Right),
            Direction::Bottom => Some(BlockSlot::Bottom),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::UpperLeft => "upper-left",
            Direction::Up => "up",
            Direction::UpperRight => "upper-right",
            Direction::Left => "left",
            Direction::Center => "center",
            Direction::Right => "right",
            Direction::BottomLeft => "bottom-left",
            Direction::Bottom => "bottom",
            Direction::BottomRight => "bottom-right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
