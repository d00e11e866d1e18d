//! Scrolling marquee.
//!
//! The text plus a spacer as wide as the window is treated as a ring; each
//! tick shows the window starting one character further along.

use std::cell::Cell;
use std::time::Duration;

use crate::console::{blank_line, fit_to_width, line_width, Console, OnExit};
use crate::device::Terminal;
use crate::live::{claim_row, CancelToken};

use super::{AnimationClock, AnimationHandle, AnimationOutcome};

/// `len` characters of `ring` starting at `tick mod ring.len()`, wrapping
/// around the end.
pub fn wrap_slice(ring: &[char], tick: u64, len: usize) -> String {
    if ring.is_empty() {
        return String::new();
    }
    let start = (tick % ring.len() as u64) as usize;
    (0..len).map(|k| ring[(start + k) % ring.len()]).collect()
}

/// Marquee settings. Build with [`Marquee::new`] and the chained setters,
/// then [`run`](Marquee::run) or [`spawn`](Marquee::spawn).
#[derive(Debug, Clone)]
pub struct Marquee {
    text: String,
    width: usize,
    interval: Duration,
    loops: i64,
    dynamic_width: bool,
}

impl Marquee {
    /// 30 columns, 100ms per frame, endless.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            width: 30,
            interval: Duration::from_millis(100),
            loops: -1,
            dynamic_width: false,
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Full passes over the ring; negative runs until cancelled.
    pub fn loops(mut self, loops: i64) -> Self {
        self.loops = loops;
        self
    }

    /// Shrink the window to the terminal when it is narrower than `width`,
    /// re-measured every frame.
    pub fn dynamic_width(mut self, dynamic: bool) -> Self {
        self.dynamic_width = dynamic;
        self
    }

    /// Text followed by `width` spaces.
    pub fn ring(&self) -> Vec<char> {
        self.text
            .chars()
            .chain(std::iter::repeat(' ').take(self.width))
            .collect()
    }

    /// Frame for `tick` at the configured width.
    pub fn frame_at(&self, tick: u64) -> String {
        wrap_slice(&self.ring(), tick, self.width)
    }

    fn frame_width(&self, term: &dyn Terminal) -> usize {
        if !self.dynamic_width {
            return self.width;
        }
        line_width(term, self.width).min(self.width).max(1)
    }

    /// Animate on the calling thread until the loop budget is spent or
    /// `cancel` fires. The row is blanked on every exit.
    ///
    /// Every frame is clipped to the terminal line, so a narrow window never
    /// makes a frame wrap onto the next row.
    pub fn run(&self, console: &Console, cancel: &CancelToken) -> AnimationOutcome {
        let ring = self.ring();
        let mut clock = AnimationClock::from_loops(self.interval, self.loops, ring.len() as u64);
        let (row, cursor) = claim_row(console);
        // Columns covered by the last frame drawn.
        let drawn = Cell::new(0usize);

        let ansi = console.ansi_enabled();
        let _teardown = OnExit::new(|| {
            console.frame(row, |term| {
                let width = drawn.get().min(line_width(term, drawn.get()));
                term.write_str(&blank_line(width, ansi))
            });
            drop(cursor);
        });

        let mut outcome = AnimationOutcome::default();
        while !clock.is_exhausted() {
            if cancel.is_cancelled() {
                outcome.cancelled = true;
                break;
            }
            let tick = clock.tick();
            console.frame(row, |term| {
                let width = self.frame_width(term);
                let visible = width.min(line_width(term, width));
                drawn.set(visible);
                term.write_str(&fit_to_width(&wrap_slice(&ring, tick, width), visible))
            });
            outcome.frames += 1;
            clock.advance();

            if clock.is_exhausted() {
                break;
            }
            if cancel.wait(clock.period()) {
                outcome.cancelled = true;
                break;
            }
        }
        outcome
    }

    /// Animate on a worker thread.
    pub fn spawn(self, console: &Console) -> AnimationHandle {
        let console = console.clone();
        AnimationHandle::spawn("liveterm-marquee", move |token| self.run(&console, &token))
    }
}
