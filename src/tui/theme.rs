use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::config::StyleConfig;
use crate::error::{Error, Result};

/// Colors used by the terminal widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub block: Style,
    pub border: Style,
    pub hint: Style,
    /// Characters of an open block.
    pub selection: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_colors(
            Color::Black,
            Color::White,
            Color::Black,
            Color::White,
            Color::Rgb(0x86, 0x86, 0x86),
        )
    }
}

impl Theme {
    fn from_colors(block_fg: Color, block_bg: Color, border: Color, hint_fg: Color, hint_bg: Color) -> Self {
        let block = Style::default().fg(block_fg).bg(block_bg);
        Self {
            block,
            border: Style::default().fg(border).bg(block_bg),
            hint: Style::default().fg(hint_fg).bg(hint_bg),
            selection: block.add_modifier(Modifier::BOLD),
        }
    }

    /// Builds a theme from configured color names, keeping defaults for
    /// unset fields.
    pub fn from_config(style: &StyleConfig) -> Result<Self> {
        Ok(Self::from_colors(
            parse_color("block_fg", style.block_fg.as_deref(), Color::Black)?,
            parse_color("block_bg", style.block_bg.as_deref(), Color::White)?,
            parse_color("border", style.border.as_deref(), Color::Black)?,
            parse_color("hint_fg", style.hint_fg.as_deref(), Color::White)?,
            parse_color("hint_bg", style.hint_bg.as_deref(), Color::Rgb(0x86, 0x86, 0x86))?,
        ))
    }
}

fn parse_color(field: &'static str, value: Option<&str>, default: Color) -> Result<Color> {
    match value {
        None => Ok(default),
        Some(value) => Color::from_str(value).map_err(|_| Error::InvalidColor {
            field,
            value: value.to_string(),
        }),
    }
}
