//! The 16-color console palette and its escape codes.
//!
//! Color names are the bracket vocabulary used by the markup renderer
//! (`[red]`, `[bg=darkblue]`) and the values stored in the config theme.

use serde::{Deserialize, Serialize};

/// One of the 16 standard console colors.
///
/// The `Dark*` variants map to the standard SGR codes (30-37 / 40-47),
/// the plain names to the bright ones (90-97 / 100-107).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    Gray,
    DarkGray,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Every color, in palette order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::DarkRed,
        Color::DarkGreen,
        Color::DarkYellow,
        Color::DarkBlue,
        Color::DarkMagenta,
        Color::DarkCyan,
        Color::Gray,
        Color::DarkGray,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Lowercase name as used in markup and config files.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::DarkRed => "darkred",
            Color::DarkGreen => "darkgreen",
            Color::DarkYellow => "darkyellow",
            Color::DarkBlue => "darkblue",
            Color::DarkMagenta => "darkmagenta",
            Color::DarkCyan => "darkcyan",
            Color::Gray => "gray",
            Color::DarkGray => "darkgray",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// Look up a color by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Color> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Foreground SGR sequence.
    pub fn fg_code(self) -> &'static str {
        match self {
            Color::Black => "\x1b[30m",
            Color::DarkRed => "\x1b[31m",
            Color::DarkGreen => "\x1b[32m",
            Color::DarkYellow => "\x1b[33m",
            Color::DarkBlue => "\x1b[34m",
            Color::DarkMagenta => "\x1b[35m",
            Color::DarkCyan => "\x1b[36m",
            Color::Gray => "\x1b[37m",
            Color::DarkGray => "\x1b[90m",
            Color::Red => "\x1b[91m",
            Color::Green => "\x1b[92m",
            Color::Yellow => "\x1b[93m",
            Color::Blue => "\x1b[94m",
            Color::Magenta => "\x1b[95m",
            Color::Cyan => "\x1b[96m",
            Color::White => "\x1b[97m",
        }
    }

    /// Background SGR sequence.
    pub fn bg_code(self) -> &'static str {
        match self {
            Color::Black => "\x1b[40m",
            Color::DarkRed => "\x1b[41m",
            Color::DarkGreen => "\x1b[42m",
            Color::DarkYellow => "\x1b[43m",
            Color::DarkBlue => "\x1b[44m",
            Color::DarkMagenta => "\x1b[45m",
            Color::DarkCyan => "\x1b[46m",
            Color::Gray => "\x1b[47m",
            Color::DarkGray => "\x1b[100m",
            Color::Red => "\x1b[101m",
            Color::Green => "\x1b[102m",
            Color::Yellow => "\x1b[103m",
            Color::Blue => "\x1b[104m",
            Color::Magenta => "\x1b[105m",
            Color::Cyan => "\x1b[106m",
            Color::White => "\x1b[107m",
        }
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        use crossterm::style::Color as Ct;
        match color {
            Color::Black => Ct::Black,
            Color::DarkRed => Ct::DarkRed,
            Color::DarkGreen => Ct::DarkGreen,
            Color::DarkYellow => Ct::DarkYellow,
            Color::DarkBlue => Ct::DarkBlue,
            Color::DarkMagenta => Ct::DarkMagenta,
            Color::DarkCyan => Ct::DarkCyan,
            Color::Gray => Ct::Grey,
            Color::DarkGray => Ct::DarkGrey,
            Color::Red => Ct::Red,
            Color::Green => Ct::Green,
            Color::Yellow => Ct::Yellow,
            Color::Blue => Ct::Blue,
            Color::Magenta => Ct::Magenta,
            Color::Cyan => Ct::Cyan,
            Color::White => Ct::White,
        }
    }
}

/// SGR reset.
pub const RESET: &str = "\x1b[0m";
/// SGR bold.
pub const BOLD: &str = "\x1b[1m";
/// SGR underline.
pub const UNDERLINE: &str = "\x1b[4m";
