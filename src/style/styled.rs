//! Immutable style descriptors.
//!
//! A [`Style`] is a plain value: every builder method returns a new value,
//! so styles can be kept in constants and shared freely.
//!
//! ```
//! use liveterm::style::{Color, Style};
//!
//! let warn = Style::new().fg(Color::Yellow).bold();
//! assert_eq!(warn.paint("careful"), "\x1b[93m\x1b[1mcareful\x1b[0m");
//! ```

use super::color::{Color, BOLD, RESET, UNDERLINE};

/// Foreground, background and text attributes.
///
/// This is also the effective style frame computed by the markup renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub underline: bool,
}

impl Style {
    /// The terminal's default style.
    pub const fn new() -> Self {
        Self {
            foreground: None,
            background: None,
            bold: false,
            underline: false,
        }
    }

    pub const fn fg(self, color: Color) -> Self {
        Self {
            foreground: Some(color),
            ..self
        }
    }

    pub const fn bg(self, color: Color) -> Self {
        Self {
            background: Some(color),
            ..self
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn underline(self) -> Self {
        Self {
            underline: true,
            ..self
        }
    }

    /// True when no attribute is set.
    pub fn is_plain(&self) -> bool {
        *self == Self::new()
    }

    /// Append the SGR codes for every active attribute, without a reset.
    pub fn push_codes(&self, buf: &mut String) {
        if let Some(fg) = self.foreground {
            buf.push_str(fg.fg_code());
        }
        if let Some(bg) = self.background {
            buf.push_str(bg.bg_code());
        }
        if self.bold {
            buf.push_str(BOLD);
        }
        if self.underline {
            buf.push_str(UNDERLINE);
        }
    }

    /// Reset followed by the full style, so the result does not depend on
    /// whatever attributes the terminal currently has.
    pub fn to_ansi(&self) -> String {
        let mut buf = String::from(RESET);
        self.push_codes(&mut buf);
        buf
    }

    /// Wrap `text` in this style, ending with a reset.
    pub fn paint(&self, text: &str) -> String {
        let mut buf = String::with_capacity(text.len() + 16);
        self.push_codes(&mut buf);
        buf.push_str(text);
        buf.push_str(RESET);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_return_new_values() {
        let base = Style::new().fg(Color::Red);
        let bold = base.bold();
        assert!(!base.bold);
        assert!(bold.bold);
        assert_eq!(bold.foreground, Some(Color::Red));
    }

    #[test]
    fn plain_style_paints_text_with_reset_only() {
        assert!(Style::new().is_plain());
        assert_eq!(Style::new().paint("x"), "x\x1b[0m");
    }

    #[test]
    fn to_ansi_starts_with_reset() {
        let style = Style::new().fg(Color::Green).bg(Color::DarkBlue).underline();
        assert_eq!(style.to_ansi(), "\x1b[0m\x1b[92m\x1b[44m\x1b[4m");
    }

    #[test]
    fn paint_orders_fg_bg_bold_underline() {
        let style = Style::new()
            .underline()
            .bold()
            .bg(Color::Black)
            .fg(Color::White);
        assert_eq!(style.paint("hi"), "\x1b[97m\x1b[40m\x1b[1m\x1b[4mhi\x1b[0m");
    }
}
