//! Live regions: rows that are repainted in place.
//!
//! - `ProgressBar`: fraction-complete bar, redrawn on `report`
//! - `Spinner`: glyph cycle driven by a background worker
//! - `StatusLine`: text with an elapsed-time suffix
//! - `Timer`: prints how long a scope took
//!
//! Each region claims its row on construction and cleans it up when
//! dropped, so teardown also happens while unwinding.

mod progress;
mod spinner;
mod status;
mod timer;
pub mod worker;

pub use progress::{build_bar_line, filled_cells, ProgressBar, MIN_BAR_WIDTH};
pub use spinner::{spinner_line, Spinner, DEFAULT_SPINNER_INTERVAL, SPINNER_FRAMES, SPINNER_STOP_TIMEOUT};
pub use status::{format_elapsed, StatusLine};
pub use timer::Timer;
pub use worker::{CancelToken, JoinOutcome, Worker};

use crate::console::{Console, HiddenCursor};
use crate::device::Terminal;

/// Claim the current row: write a newline and return the row above the
/// cursor. Works at the bottom of the screen too, where the newline
/// scrolls everything up by one.
pub(crate) fn reserve_row(term: &mut dyn Terminal) -> u16 {
    let before = term.position().map(|(_, row)| row).unwrap_or(0);
    if term.write_str("\n").is_err() {
        return before;
    }
    match term.position() {
        Ok((_, row)) if row > 0 => row - 1,
        _ => before,
    }
}

/// Reserve a row and hide the cursor until the returned claim is dropped.
pub(crate) fn claim_row(console: &Console) -> (u16, HiddenCursor) {
    console.hide_cursor_with(reserve_row)
}
