use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

use crate::grid::BlockSlot;
use crate::symbols::Family;

/// Letter case applied to appended characters.
///
/// Case is a sticky toggle: it stays in effect for every following
/// character until toggled again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    #[default]
    Lower,
    Upper,
}

impl CaseMode {
    pub fn toggled(self) -> CaseMode {
        match self {
            CaseMode::Lower => CaseMode::Upper,
            CaseMode::Upper => CaseMode::Lower,
        }
    }

    /// Applies this case to a table symbol. Non-letters come back unchanged,
    /// and so do letters whose upper case is more than one character
    /// (`ß` would become `SS`).
    pub fn apply(self, symbol: &str) -> Cow<'_, str> {
        match self {
            CaseMode::Upper if symbol.chars().any(char::is_lowercase) => {
                let upper = symbol.to_uppercase();
                if upper.graphemes(true).count() == 1 {
                    Cow::Owned(upper)
                } else {
                    Cow::Borrowed(symbol)
                }
            }
            _ => Cow::Borrowed(symbol),
        }
    }
}

/// The current mode of the selection engine.
///
/// The same nine directions mean different things depending on the mode:
/// actions and block entry at the top level, literal characters once a
/// block is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The top-level grid: corners and center are actions, edges open blocks.
    #[default]
    TopLevel,
    /// A symbol block is open and the next direction picks one of its cells.
    ///
    /// The family is recorded when the block is opened, so the selection
    /// does not depend on the family flag afterwards.
    BlockSelected { family: Family, slot: BlockSlot },
}

impl Mode {
    pub fn is_top_level(self) -> bool {
        matches!(self, Mode::TopLevel)
    }
}

bitflags::bitflags! {
    /// What a single direction event changed.
    ///
    /// An empty set means the event had no visible effect, e.g. erasing
    /// from empty text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Changes: u8 {
        /// The text was appended to or shortened.
        const TEXT   = 0b0_0001;
        /// The case mode was toggled.
        const CASE   = 0b0_0010;
        /// The symbol family was toggled.
        const FAMILY = 0b0_0100;
        /// A block was opened or closed.
        const MODE   = 0b0_1000;
        /// The user asked to submit the current text.
        const SUBMIT = 0b1_0000;
    }
}

impl Changes {
    pub fn text_changed(self) -> bool {
        self.contains(Changes::TEXT)
    }

    pub fn submitted(self) -> bool {
        self.contains(Changes::SUBMIT)
    }

    /// Whether a renderer needs to redraw the grid.
    pub fn needs_redraw(self) -> bool {
        !self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_case_only_touches_letters() {
        assert_eq!(CaseMode::Upper.apply("a"), "A");
        assert_eq!(CaseMode::Upper.apply("é"), "É");
        assert_eq!(CaseMode::Upper.apply("1"), "1");
        assert_eq!(CaseMode::Upper.apply("%"), "%");
        assert!(matches!(CaseMode::Upper.apply("7"), Cow::Borrowed(_)));
        assert_eq!(CaseMode::Lower.apply("a"), "a");
    }

    #[test]
    fn upper_case_never_expands_a_symbol() {
        assert_eq!(CaseMode::Upper.apply("ß"), "ß");
        assert_eq!(CaseMode::Upper.apply("ŉ"), "ŉ");
        assert_eq!(CaseMode::Upper.apply("ﬁ"), "ﬁ");
        assert_eq!(CaseMode::Upper.apply("ç"), "Ç");
    }

    #[test]
    fn toggles_are_involutions() {
        assert_eq!(CaseMode::Lower.toggled().toggled(), CaseMode::Lower);
        assert_eq!(Family::Alt.toggled().toggled(), Family::Alt);
    }
}
