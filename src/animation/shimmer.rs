//! Highlight sweep across a line of text.

use std::io;
use std::ops::Range;
use std::time::Duration;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::console::{blank_line, line_width, Console, OnExit};
use crate::device::Terminal;
use crate::live::{claim_row, CancelToken};
use crate::style::{Color, Style};

use super::{AnimationClock, AnimationHandle, AnimationOutcome};

/// Indices lit when the window's leading edge is at `head`: the `window`
/// positions ending at `head`, clipped to `0..len`.
pub fn highlight_span(head: usize, window: usize, len: usize) -> Range<usize> {
    let start = (head + 1).saturating_sub(window.max(1));
    let end = (head + 1).min(len);
    start.min(end)..end
}

/// Cut `runs` down to `width` display columns. Runs past the edge are
/// dropped and the one crossing it is shortened.
pub fn clip_runs(runs: &[(bool, String)], width: usize) -> Vec<(bool, String)> {
    let mut used = 0;
    let mut clipped = Vec::with_capacity(runs.len());
    for (hi, chunk) in runs {
        let mut kept = String::new();
        for c in chunk.chars() {
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            kept.push(c);
        }
        let full = kept.len() == chunk.len();
        if !kept.is_empty() {
            clipped.push((*hi, kept));
        }
        if !full {
            break;
        }
    }
    clipped
}

/// Shimmer settings. Build with [`Shimmer::new`] and the chained setters.
#[derive(Debug, Clone)]
pub struct Shimmer {
    text: String,
    base: Color,
    highlight: Color,
    window: usize,
    interval: Duration,
    loops: i64,
    from_right: bool,
    bold_highlight: bool,
}

impl Shimmer {
    /// Window of 4, 60ms per frame, left to right, bold highlight, endless.
    pub fn new(text: impl Into<String>, base: Color, highlight: Color) -> Self {
        Self {
            text: text.into(),
            base,
            highlight,
            window: 4,
            interval: Duration::from_millis(60),
            loops: -1,
            from_right: false,
            bold_highlight: true,
        }
    }

    pub fn window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Full passes; negative runs until cancelled.
    pub fn loops(mut self, loops: i64) -> Self {
        self.loops = loops;
        self
    }

    pub fn from_right(mut self, from_right: bool) -> Self {
        self.from_right = from_right;
        self
    }

    pub fn bold_highlight(mut self, bold: bool) -> Self {
        self.bold_highlight = bold;
        self
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Ticks in one pass: long enough for the window to enter and leave.
    pub fn pass_len(&self) -> usize {
        (self.char_count() + self.window).max(1)
    }

    /// Leading edge of the window at `tick`.
    pub fn head_at(&self, tick: u64) -> usize {
        let pass = self.pass_len();
        let head = (tick % pass as u64) as usize;
        if self.from_right {
            pass - 1 - head
        } else {
            head
        }
    }

    /// Highlighted character indices at `tick`.
    pub fn highlighted_at(&self, tick: u64) -> Range<usize> {
        highlight_span(self.head_at(tick), self.window, self.char_count())
    }

    /// The text split into `(highlighted, chunk)` runs for `tick`.
    pub fn runs_at(&self, tick: u64) -> Vec<(bool, String)> {
        let lit = self.highlighted_at(tick);
        let mut runs: Vec<(bool, String)> = Vec::new();
        for (i, c) in self.text.chars().enumerate() {
            let hi = lit.contains(&i);
            match runs.last_mut() {
                Some((last, chunk)) if *last == hi => chunk.push(c),
                _ => runs.push((hi, c.to_string())),
            }
        }
        runs
    }

    fn style_for(&self, highlighted: bool) -> Style {
        if !highlighted {
            return Style::new().fg(self.base);
        }
        let style = Style::new().fg(self.highlight);
        if self.bold_highlight {
            style.bold()
        } else {
            style
        }
    }

    fn draw_runs(&self, term: &mut dyn Terminal, ansi: bool, runs: &[(bool, String)]) -> io::Result<()> {
        let width = line_width(term, self.text.width());
        let runs = clip_runs(runs, width);
        if ansi {
            let line: String = runs
                .iter()
                .map(|(hi, chunk)| self.style_for(*hi).paint(chunk))
                .collect();
            term.write_str(&line)?;
        } else {
            for (hi, chunk) in &runs {
                let color = if *hi { self.highlight } else { self.base };
                term.set_colors(Some(color), None)?;
                term.write_str(chunk)?;
            }
            term.reset_colors()?;
        }
        let used: usize = runs.iter().map(|(_, chunk)| chunk.width()).sum();
        term.write_str(&" ".repeat(width.saturating_sub(used)))
    }

    /// Animate on the calling thread until the loop budget is spent or
    /// `cancel` fires. On exit the text is left on screen in the base color.
    pub fn run(&self, console: &Console, cancel: &CancelToken) -> AnimationOutcome {
        let mut clock = AnimationClock::from_loops(self.interval, self.loops, self.pass_len() as u64);
        let (row, cursor) = claim_row(console);

        let ansi = console.ansi_enabled();
        let _teardown = OnExit::new(|| {
            console.frame(row, |term| {
                if self.text.is_empty() {
                    let width = line_width(term, 1);
                    return term.write_str(&blank_line(width, ansi));
                }
                self.draw_runs(term, ansi, &[(false, self.text.clone())])
            });
            drop(cursor);
        });

        let mut outcome = AnimationOutcome::default();
        while !clock.is_exhausted() {
            if cancel.is_cancelled() {
                outcome.cancelled = true;
                break;
            }
            let runs = self.runs_at(clock.tick());
            console.frame(row, |term| self.draw_runs(term, ansi, &runs));
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
        AnimationHandle::spawn("liveterm-shimmer", move |token| self.run(&console, &token))
    }
}
