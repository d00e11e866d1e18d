//! The process's real terminal, driven through crossterm.

use std::io::{self, Write};

use crossterm::{cursor, queue, style, terminal};

use super::Terminal;
use crate::style::Color;

/// Standard output as a [`Terminal`].
pub struct StdoutTerminal {
    out: io::Stdout,
    cursor_visible: bool,
}

impl StdoutTerminal {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            cursor_visible: true,
        }
    }
}

impl Default for StdoutTerminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(tarpaulin_include))]
impl Terminal for StdoutTerminal {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn move_to(&mut self, col: u16, row: u16) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(col, row))
    }

    fn position(&mut self) -> io::Result<(u16, u16)> {
        // Pending output may move the cursor; the query must see it.
        self.out.flush()?;
        cursor::position()
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        match terminal::size() {
            Ok(size) => Ok(size),
            Err(err) => terminal_size::terminal_size()
                .map(|(terminal_size::Width(w), terminal_size::Height(h))| (w, h))
                .ok_or(err),
        }
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            queue!(self.out, cursor::Show)?;
        } else {
            queue!(self.out, cursor::Hide)?;
        }
        self.cursor_visible = visible;
        Ok(())
    }

    fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn set_colors(&mut self, fg: Option<Color>, bg: Option<Color>) -> io::Result<()> {
        if let Some(fg) = fg {
            queue!(self.out, style::SetForegroundColor(fg.into()))?;
        }
        if let Some(bg) = bg {
            queue!(self.out, style::SetBackgroundColor(bg.into()))?;
        }
        Ok(())
    }

    fn reset_colors(&mut self) -> io::Result<()> {
        queue!(self.out, style::ResetColor)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
