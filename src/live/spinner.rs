//! Spinner live region with a background tick loop.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::warn;

use crate::console::{blank_line, pad_to_width, Console, HiddenCursor};

use super::worker::{CancelToken, Worker};
use super::claim_row;

/// Braille glyph cycle.
pub const SPINNER_FRAMES: [&str; 6] = ["⠋", "⠙", "⠸", "⠴", "⠦", "⠇"];

pub const DEFAULT_SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// How long disposal waits for the tick loop before blanking anyway.
pub const SPINNER_STOP_TIMEOUT: Duration = Duration::from_millis(200);

const MIN_LINE_WIDTH: usize = 20;
const FALLBACK_LINE_WIDTH: usize = 60;

/// `<glyph> <text>` for `tick`, padded to `width`.
pub fn spinner_line(tick: u64, text: &str, width: usize) -> String {
    let glyph = SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize];
    pad_to_width(&format!("{} {}", glyph, text), width)
}

/// A spinner on its own row.
///
/// A worker thread redraws the row every interval. [`Spinner::update`]
/// swaps the text; the next tick shows it. Dropping the spinner stops the
/// worker (waiting at most [`SPINNER_STOP_TIMEOUT`]) and blanks the row.
pub struct Spinner {
    console: Console,
    row: u16,
    text: Arc<Mutex<String>>,
    worker: Option<Worker<u64>>,
    // Released after the row is blanked in `drop`.
    _cursor: HiddenCursor,
}

impl Spinner {
    pub fn new(console: &Console, text: impl Into<String>) -> Self {
        Self::with_interval(console, text, DEFAULT_SPINNER_INTERVAL)
    }

    pub fn with_interval(console: &Console, text: impl Into<String>, interval: Duration) -> Self {
        let (row, cursor) = claim_row(console);

        let text = Arc::new(Mutex::new(text.into()));
        let worker = {
            let console = console.clone();
            let text = Arc::clone(&text);
            Worker::spawn("liveterm-spinner", move |token: CancelToken| {
                tick_loop(&console, row, &text, interval, &token)
            })
        };

        Self {
            console: console.clone(),
            row,
            text,
            worker: Some(worker),
            _cursor: cursor,
        }
    }

    /// Replace the text shown next to the glyph.
    pub fn update(&self, text: impl Into<String>) {
        *self.text.lock().unwrap_or_else(PoisonError::into_inner) = text.into();
    }

    pub fn text(&self) -> String {
        self.text.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    /// Stop the loop and blank the row now.
    pub fn finish(self) {}
}

/// Returns the number of frames drawn.
fn tick_loop(
    console: &Console,
    row: u16,
    text: &Mutex<String>,
    interval: Duration,
    token: &CancelToken,
) -> u64 {
    let mut tick = 0u64;
    while !token.is_cancelled() {
        let current = text.lock().unwrap_or_else(PoisonError::into_inner).clone();
        console.frame(row, |term| {
            let width = crate::console::line_width(term, FALLBACK_LINE_WIDTH).max(MIN_LINE_WIDTH);
            term.write_str(&spinner_line(tick, &current, width))
        });
        tick += 1;
        if token.wait(interval) {
            break;
        }
    }
    tick
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(mut worker) = self.worker.take() {
            if worker.stop(SPINNER_STOP_TIMEOUT).timed_out() {
                warn!(row = self.row, "spinner loop did not stop in time, blanking anyway");
            }
        }
        let ansi = self.console.ansi_enabled();
        self.console.frame(self.row, |term| {
            let width = crate::console::line_width(term, FALLBACK_LINE_WIDTH);
            term.write_str(&blank_line(width, ansi))
        });
    }
}
