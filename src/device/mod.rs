//! Terminal devices.
//!
//! Everything that draws goes through the [`Terminal`] trait and everything
//! that reads keys goes through [`KeySource`]. The real implementations use
//! crossterm; [`MemoryTerminal`] and [`ScriptedKeys`] stand in for them in
//! tests.

mod keys;
mod memory;
mod stdout;

use std::io;

use crate::style::Color;

pub use keys::{CrosstermKeys, Key, KeySource, ScriptedKeys};
pub use memory::MemoryTerminal;
pub use stdout::StdoutTerminal;

/// An output device with a cursor.
///
/// Rows and columns are 0-indexed. Implementations buffer freely; callers
/// flush at the end of each frame.
pub trait Terminal: Send {
    /// Write literal text at the cursor.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Move the cursor to `(col, row)`.
    fn move_to(&mut self, col: u16, row: u16) -> io::Result<()>;

    /// Current cursor position as `(col, row)`.
    fn position(&mut self) -> io::Result<(u16, u16)>;

    /// Window size as `(cols, rows)`.
    fn size(&self) -> io::Result<(u16, u16)>;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Visibility as last set through this device (terminals cannot be
    /// queried for it).
    fn cursor_visible(&self) -> bool;

    /// Set colors through the platform color API, without escape codes in
    /// the text stream. Used when ANSI output is unavailable.
    fn set_colors(&mut self, fg: Option<Color>, bg: Option<Color>) -> io::Result<()>;

    fn reset_colors(&mut self) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}
