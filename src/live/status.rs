//! Status line with elapsed time.

use std::time::{Duration, Instant};

use crate::console::{pad_to_width, Console};

use super::reserve_row;

const FALLBACK_LINE_WIDTH: usize = 79;

/// Format a duration as `MM:SS` (minutes keep counting past 59).
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// A single row showing `text [MM:SS]`, redrawn on every update.
///
/// Unlike the other regions it finalizes rather than blanks: `complete`
/// leaves the final text on screen, and dropping an incomplete status line
/// completes it with `"Done."`.
pub struct StatusLine {
    console: Console,
    row: u16,
    started: Instant,
    text: String,
    completed: bool,
}

impl StatusLine {
    pub fn new(console: &Console, text: impl Into<String>) -> Self {
        let row = console.locked(reserve_row);
        let status = Self {
            console: console.clone(),
            row,
            started: Instant::now(),
            text: text.into(),
            completed: false,
        };
        status.render();
        status
    }

    /// Same as [`StatusLine::new`].
    pub fn start(console: &Console, text: impl Into<String>) -> Self {
        Self::new(console, text)
    }

    pub fn update(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.render();
    }

    /// Final redraw. Later calls are ignored.
    pub fn complete(&mut self, text: impl Into<String>) {
        if self.completed {
            return;
        }
        self.text = text.into();
        self.render();
        self.completed = true;
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    /// Complete with the default text if needed.
    pub fn finish(self) {}

    fn render(&self) {
        let line = format!("{} [{}]", self.text, format_elapsed(self.elapsed()));
        self.console.frame(self.row, |term| {
            let width = crate::console::line_width(term, FALLBACK_LINE_WIDTH);
            term.write_str(&pad_to_width(&line, width))
        });
    }
}

impl Drop for StatusLine {
    fn drop(&mut self) {
        self.complete("Done.");
    }
}
