//! Progress bar live region.

use crate::console::{blank_line, pad_to_width, Console};

use super::reserve_row;

/// Narrowest bar that will be drawn.
pub const MIN_BAR_WIDTH: usize = 10;

const FILLED: char = '█';
const TRACK: char = '─';

/// Number of filled cells for `progress` in a bar of `width` cells.
///
/// `round(progress * width)`, clamped to `0..=width`. NaN counts as empty.
pub fn filled_cells(progress: f64, width: usize) -> usize {
    let cells = (progress * width as f64).round();
    if cells.is_nan() {
        return 0;
    }
    cells.clamp(0.0, width as f64) as usize
}

/// Build `[███───] label` without padding.
pub fn build_bar_line(filled: usize, width: usize, label: &str) -> String {
    let filled = filled.min(width);
    let mut line = String::with_capacity(width * 3 + label.len() + 3);
    line.push('[');
    line.extend(std::iter::repeat(FILLED).take(filled));
    line.extend(std::iter::repeat(TRACK).take(width - filled));
    line.push_str("] ");
    line.push_str(label);
    line
}

/// A bar on its own row, redrawn in place on every report.
///
/// The row is blanked when the bar is dropped. The bar never hides the
/// cursor, so it leaves cursor visibility alone.
///
/// ```
/// use liveterm::{Console, ProgressBar};
/// use liveterm::device::MemoryTerminal;
///
/// let term = MemoryTerminal::new(40, 5);
/// let console = Console::new(term.clone(), true);
/// let mut bar = ProgressBar::new(&console, "copying", 10);
/// bar.report(0.5, None);
/// assert_eq!(term.row_text(0), "[█████─────] copying");
/// bar.finish();
/// assert_eq!(term.row_text(0), "");
/// ```
pub struct ProgressBar {
    console: Console,
    row: u16,
    width: usize,
    filled: usize,
    label: String,
}

impl ProgressBar {
    pub fn new(console: &Console, label: impl Into<String>, width: usize) -> Self {
        let row = console.locked(reserve_row);
        let bar = Self {
            console: console.clone(),
            row,
            width: width.max(MIN_BAR_WIDTH),
            filled: 0,
            label: label.into(),
        };
        bar.draw();
        bar
    }

    /// Set progress (`0.0..=1.0`, clamped) and optionally a new label.
    pub fn report(&mut self, progress: f64, label: Option<&str>) {
        self.filled = filled_cells(progress, self.width);
        if let Some(label) = label {
            self.label = label.to_string();
        }
        self.draw();
    }

    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    /// Blank the row now.
    pub fn finish(self) {}

    fn fallback_width(&self) -> usize {
        self.width + 35
    }

    fn draw(&self) {
        let line = build_bar_line(self.filled, self.width, &self.label);
        let fallback = self.fallback_width();
        self.console.frame(self.row, |term| {
            let width = crate::console::line_width(term, fallback);
            term.write_str(&pad_to_width(&line, width))
        });
    }
}

impl Drop for ProgressBar {
    fn drop(&mut self) {
        let fallback = self.fallback_width();
        let ansi = self.console.ansi_enabled();
        self.console.frame(self.row, |term| {
            let width = crate::console::line_width(term, fallback);
            term.write_str(&blank_line(width, ansi))
        });
    }
}
