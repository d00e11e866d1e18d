//! Theme colors for status lines and prompts.

use serde::{Deserialize, Serialize};

use crate::style::Color;

/// Colors used by the themed writers (`Console::info` and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            info: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            accent: Color::Magenta,
        }
    }
}

impl Theme {
    /// Muted variant using the standard (non-bright) colors.
    pub fn classic() -> Self {
        Self {
            info: Color::DarkCyan,
            success: Color::DarkGreen,
            warning: Color::DarkYellow,
            error: Color::DarkRed,
            accent: Color::DarkMagenta,
        }
    }
}
