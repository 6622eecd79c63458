//! Static symbol tables and their validated runtime form.

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Error, Result};
use crate::grid::{BlockSlot, Direction};

type Table = [[[&'static str; 3]; 3]; 4];

/// Digits and lowercase letters.
pub const MAIN_TABLE: Table = [
    [["1", "2", "3"], ["4", "5", "6"], ["7", "8", "9"]],
    [["0", "a", "b"], ["c", "d", "e"], ["f", "g", "h"]],
    [["i", "j", "k"], ["l", "m", "n"], ["o", "p", "q"]],
    [["r", "s", "t"], ["u", "v", "w"], ["x", "y", "z"]],
];

/// Punctuation and a handful of accented letters.
pub const ALT_TABLE: Table = [
    [["!", "@", "#"], ["$", "%", "^"], ["&", "*", "~"]],
    [["`", "ù", "é"], ["è", "=", "à"], [";", "ë", "ç"]],
    [["|", "\\", ","], ["<", ".", ">"], ["/", "?", ":"]],
    [["[", "\"", "]"], ["(", "'", ")"], ["-", "_", "+"]],
];

const fn table_has_no_empty_cell(table: &Table) -> bool {
    let mut b = 0;
    while b < 4 {
        let mut r = 0;
        while r < 3 {
            let mut c = 0;
            while c < 3 {
                if table[b][r][c].is_empty() {
                    return false;
                }
                c += 1;
            }
            r += 1;
        }
        b += 1;
    }
    true
}

const _: () = assert!(table_has_no_empty_cell(&MAIN_TABLE));
const _: () = assert!(table_has_no_empty_cell(&ALT_TABLE));

/// The two symbol families selectable from the top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Family {
    #[default]
    Main,
    Alt,
}

impl Family {
    pub fn toggled(self) -> Family {
        match self {
            Family::Main => Family::Alt,
            Family::Alt => Family::Main,
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Family::Main => f.write_str("main"),
            Family::Alt => f.write_str("alt"),
        }
    }
}

/// An immutable 3×3 grid of single characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolBlock {
    cells: [[String; 3]; 3],
}

impl SymbolBlock {
    fn from_static(rows: &[[&'static str; 3]; 3]) -> Self {
        Self {
            cells: (*rows).map(|row| row.map(String::from)),
        }
    }

    /// The character at `dir` inside this block.
    pub fn get(&self, dir: Direction) -> &str {
        let cell = dir.cell();
        &self.cells[cell.row][cell.col]
    }

}

/// Both symbol families, four blocks each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    main: [SymbolBlock; 4],
    alt: [SymbolBlock; 4],
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SymbolSet {
    /// The built-in alphanumeric and punctuation tables.
    pub fn builtin() -> Self {
        Self {
            main: MAIN_TABLE.each_ref().map(SymbolBlock::from_static),
            alt: ALT_TABLE.each_ref().map(SymbolBlock::from_static),
        }
    }

    /// Builds a symbol set from caller-supplied tables.
    ///
    /// Each family must hold exactly 4 blocks of 3 rows of 3 cells, and
    /// every cell must be exactly one user-perceived character that stays
    /// separate from whatever is typed before or after it.
    pub fn from_tables(main: Vec<Vec<Vec<String>>>, alt: Vec<Vec<Vec<String>>>) -> Result<Self> {
        Ok(Self {
            main: family_from_table(Family::Main, main)?,
            alt: family_from_table(Family::Alt, alt)?,
        })
    }

    pub fn family(&self, family: Family) -> &[SymbolBlock; 4] {
        match family {
            Family::Main => &self.main,
            Family::Alt => &self.alt,
        }
    }

    pub fn block(&self, family: Family, slot: BlockSlot) -> &SymbolBlock {
        &self.family(family)[slot.index()]
    }
}

fn family_from_table(family: Family, table: Vec<Vec<Vec<String>>>) -> Result<[SymbolBlock; 4]> {
    let found = table.len();
    let blocks: [Vec<Vec<String>>; 4] = table
        .try_into()
        .map_err(|_| Error::BlockCount { family, found })?;

    let mut out = Vec::with_capacity(4);
    for (block, rows) in blocks.into_iter().enumerate() {
        out.push(block_from_rows(family, block, rows)?);
    }
    out.try_into()
        .map_err(|_| Error::BlockCount { family, found })
}

fn block_from_rows(family: Family, block: usize, rows: Vec<Vec<String>>) -> Result<SymbolBlock> {
    let found = rows.len();
    let rows: [Vec<String>; 3] = rows.try_into().map_err(|_| Error::RowCount {
        family,
        block,
        found,
    })?;

    let mut cells: [[String; 3]; 3] = Default::default();
    for (row, line) in rows.into_iter().enumerate() {
        let found = line.len();
        let line: [String; 3] = line.try_into().map_err(|_| Error::CellCount {
            family,
            block,
            row,
            found,
        })?;
        for (col, value) in line.into_iter().enumerate() {
            if !stands_alone(&value) {
                return Err(Error::InvalidSymbol {
                    family,
                    block,
                    row,
                    col,
                    value,
                });
            }
            cells[row][col] = value;
        }
    }
    Ok(SymbolBlock { cells })
}

/// Whether `value` is one grapheme that never fuses with a neighbour.
///
/// Combining marks, joiners and prepend characters would merge into the
/// previous or next character, and regional indicators or Hangul jamo
/// merge with copies of their own kind.
fn stands_alone(value: &str) -> bool {
    let count = |s: String| s.graphemes(true).count();
    value.graphemes(true).count() == 1
        && count(format!("x{value}")) == 2
        && count(format!("{value}x")) == 2
        && count(format!("{value}{value}")) == 2
}
