//! An in-memory terminal for tests and headless rendering.
//!
//! Written bytes go through a `vte` parser into a character grid, so a test
//! can ask what a row actually shows after a sequence of frames, not just
//! which bytes were sent.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use vte::{Params, Parser, Perform};

use super::Terminal;
use crate::style::Color;

/// A screen grid with a cursor. Cloning shares the same screen, so a test
/// can keep a handle after moving one into a [`Console`](crate::Console).
#[derive(Clone)]
pub struct MemoryTerminal {
    inner: Arc<Mutex<Screen>>,
}

struct Screen {
    parser: Parser,
    grid: Grid,
    transcript: String,
    color_calls: Vec<(Option<Color>, Option<Color>)>,
    fail_moves: bool,
}

/// The vte performer: cells, cursor and visibility.
struct Grid {
    cols: u16,
    rows: u16,
    cells: Vec<Vec<char>>,
    col: u16,
    row: u16,
    cursor_visible: bool,
    autowrap: bool,
    printed: String,
}

impl Grid {
    fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![vec![' '; cols as usize]; rows as usize],
            col: 0,
            row: 0,
            cursor_visible: true,
            autowrap: true,
            printed: String::new(),
        }
    }

    fn line_feed(&mut self) {
        self.col = 0;
        if self.row + 1 < self.rows {
            self.row += 1;
        } else {
            self.cells.remove(0);
            self.cells.push(vec![' '; self.cols as usize]);
        }
    }

    fn erase_line(&mut self, from: u16, to: u16) {
        if let Some(line) = self.cells.get_mut(self.row as usize) {
            for cell in line.iter_mut().take(to as usize).skip(from as usize) {
                *cell = ' ';
            }
        }
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.cells
            .resize(rows as usize, vec![' '; self.cols as usize]);
        for line in &mut self.cells {
            line.resize(cols as usize, ' ');
        }
        self.cols = cols;
        self.rows = rows;
        self.col = self.col.min(cols.saturating_sub(1));
        self.row = self.row.min(rows.saturating_sub(1));
    }
}

fn first_param(params: &Params, default: u16) -> u16 {
    params
        .iter()
        .next()
        .and_then(|p| p.first().copied())
        .filter(|&n| n != 0)
        .unwrap_or(default)
}

impl Perform for Grid {
    fn print(&mut self, c: char) {
        self.printed.push(c);
        // A character after the last column wraps to the next row, scrolling
        // at the bottom, the way a real terminal does.
        if self.col >= self.cols {
            if !self.autowrap {
                return;
            }
            self.line_feed();
        }
        if let Some(cell) = self.cells[self.row as usize].get_mut(self.col as usize) {
            *cell = c;
            self.col += 1;
        }
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.printed.push('\n');
                self.line_feed();
            }
            b'\r' => self.col = 0,
            0x08 => self.col = self.col.saturating_sub(1),
            _ => {}
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], _ignore: bool, action: char) {
        let private = intermediates.first() == Some(&b'?');
        match action {
            'H' | 'f' => {
                let mut iter = params.iter();
                let row = iter.next().and_then(|p| p.first().copied()).unwrap_or(1);
                let col = iter.next().and_then(|p| p.first().copied()).unwrap_or(1);
                self.row = row.max(1).min(self.rows) - 1;
                self.col = col.max(1).min(self.cols) - 1;
            }
            'A' => self.row = self.row.saturating_sub(first_param(params, 1)),
            'B' => {
                self.row = (self.row + first_param(params, 1)).min(self.rows.saturating_sub(1))
            }
            'C' => {
                self.col = (self.col + first_param(params, 1)).min(self.cols.saturating_sub(1))
            }
            'D' => self.col = self.col.saturating_sub(first_param(params, 1)),
            'G' => self.col = first_param(params, 1).min(self.cols) - 1,
            'K' => {
                let mode = params.iter().next().and_then(|p| p.first().copied()).unwrap_or(0);
                match mode {
                    1 => self.erase_line(0, self.col + 1),
                    2 => self.erase_line(0, self.cols),
                    _ => self.erase_line(self.col, self.cols),
                }
            }
            'h' | 'l' if private => {
                if params.iter().any(|p| p.first() == Some(&25)) {
                    self.cursor_visible = action == 'h';
                }
            }
            _ => {}
        }
    }
}

impl MemoryTerminal {
    /// A blank screen of `cols` x `rows` with the cursor at the origin.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Screen {
                parser: Parser::new(),
                grid: Grid::new(cols, rows),
                transcript: String::new(),
                color_calls: Vec::new(),
                fail_moves: false,
            })),
        }
    }

    fn screen(&self) -> MutexGuard<'_, Screen> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Text of one row with trailing blanks removed.
    pub fn row_text(&self, row: u16) -> String {
        self.screen()
            .grid
            .cells
            .get(row as usize)
            .map(|line| line.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// Every row, trailing blanks removed.
    pub fn lines(&self) -> Vec<String> {
        let rows = self.screen().grid.rows;
        (0..rows).map(|r| self.row_text(r)).collect()
    }

    pub fn cursor(&self) -> (u16, u16) {
        let screen = self.screen();
        (screen.grid.col, screen.grid.row)
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.screen().grid.cursor_visible
    }

    /// Every byte written, escapes included.
    pub fn transcript(&self) -> String {
        self.screen().transcript.clone()
    }

    /// Only the printable characters and newlines that were written.
    pub fn printed(&self) -> String {
        self.screen().grid.printed.clone()
    }

    pub fn clear_transcript(&self) {
        let mut screen = self.screen();
        screen.transcript.clear();
        screen.grid.printed.clear();
    }

    /// Calls made to the direct color API, in order. `reset_colors` is
    /// recorded as `(None, None)`.
    pub fn color_calls(&self) -> Vec<(Option<Color>, Option<Color>)> {
        self.screen().color_calls.clone()
    }

    /// Simulate a window resize.
    pub fn resize(&self, cols: u16, rows: u16) {
        self.screen().grid.resize(cols, rows);
    }

    /// Turn wrapping at the right edge on or off. On by default; when off,
    /// characters past the last column are dropped.
    pub fn set_autowrap(&self, autowrap: bool) {
        self.screen().grid.autowrap = autowrap;
    }

    /// Make every `move_to` fail, like a console whose buffer shrank under
    /// the caller.
    pub fn fail_moves(&self, fail: bool) {
        self.screen().fail_moves = fail;
    }

    /// Place the cursor without going through a frame.
    pub fn set_cursor(&self, col: u16, row: u16) {
        let mut screen = self.screen();
        screen.grid.col = col.min(screen.grid.cols.saturating_sub(1));
        screen.grid.row = row.min(screen.grid.rows.saturating_sub(1));
    }
}

impl Terminal for MemoryTerminal {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        let mut screen = self.screen();
        let screen = &mut *screen;
        screen.transcript.push_str(text);
        screen.parser.advance(&mut screen.grid, text.as_bytes());
        Ok(())
    }

    fn move_to(&mut self, col: u16, row: u16) -> io::Result<()> {
        let mut screen = self.screen();
        if screen.fail_moves {
            return Err(io::Error::new(io::ErrorKind::Other, "cursor move rejected"));
        }
        if col >= screen.grid.cols || row >= screen.grid.rows {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("({col}, {row}) is outside the buffer"),
            ));
        }
        screen.grid.col = col;
        screen.grid.row = row;
        Ok(())
    }

    fn position(&mut self) -> io::Result<(u16, u16)> {
        Ok(self.cursor())
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        let screen = self.screen();
        Ok((screen.grid.cols, screen.grid.rows))
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.write_str(if visible { "\x1b[?25h" } else { "\x1b[?25l" })
    }

    fn cursor_visible(&self) -> bool {
        self.is_cursor_visible()
    }

    fn set_colors(&mut self, fg: Option<Color>, bg: Option<Color>) -> io::Result<()> {
        self.screen().color_calls.push((fg, bg));
        Ok(())
    }

    fn reset_colors(&mut self) -> io::Result<()> {
        self.screen().color_calls.push((None, None));
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
