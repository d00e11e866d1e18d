//! The shared console handle and the render lock.
//!
//! A [`Console`] owns the terminal device behind a single mutex. Every
//! component that draws holds a clone of the same console, so the mutex
//! serializes frame writes across spinner threads, animation workers and
//! the caller's own output.
//!
//! A live region draws with [`Console::frame`]: lock, remember the cursor,
//! move to the region's row, write the whole line, move the cursor back,
//! unlock. The lock is held for one frame only.
//!
//! Cursor hiding is counted under the same lock. Each region that hides the
//! cursor holds a `HiddenCursor`; the first claim remembers the real
//! visibility and the last release puts it back, so regions can be dropped
//! in any order.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::warn;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::capability;
use crate::device::{StdoutTerminal, Terminal};
use crate::style::{markup, Color, Style, RESET};
use crate::theme::Theme;

/// Shared handle to a terminal device. Cheap to clone.
#[derive(Clone)]
pub struct Console {
    device: Arc<Mutex<Device>>,
    ansi: bool,
    theme: Theme,
}

struct Device {
    term: Box<dyn Terminal>,
    hide_claims: usize,
    restore_visible: bool,
}

impl Console {
    /// The process's stdout, with ANSI support from the capability probe.
    pub fn stdout() -> Self {
        Self::new(StdoutTerminal::new(), capability::probe())
    }

    /// Wrap any device, e.g. a [`MemoryTerminal`](crate::device::MemoryTerminal).
    pub fn new(device: impl Terminal + 'static, ansi: bool) -> Self {
        Self {
            device: Arc::new(Mutex::new(Device {
                term: Box::new(device),
                hide_claims: 0,
                restore_visible: true,
            })),
            ansi,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn ansi_enabled(&self) -> bool {
        self.ansi
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    // A panic while drawing leaves nothing half-updated that matters, so a
    // poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Device> {
        self.device.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the device, then flush.
    pub fn locked<R>(&self, f: impl FnOnce(&mut dyn Terminal) -> R) -> R {
        let mut guard = self.lock();
        let term: &mut dyn Terminal = &mut *guard.term;
        let result = f(term);
        if let Err(err) = term.flush() {
            warn!(%err, "flush failed");
        }
        result
    }

    /// Run `f` under the lock and take a claim on the hidden cursor. The
    /// cursor stays hidden until every claim has been dropped.
    pub(crate) fn hide_cursor_with<R>(
        &self,
        f: impl FnOnce(&mut dyn Terminal) -> R,
    ) -> (R, HiddenCursor) {
        let mut guard = self.lock();
        let device = &mut *guard;
        let term: &mut dyn Terminal = &mut *device.term;
        let result = f(term);
        if device.hide_claims == 0 {
            device.restore_visible = device.term.cursor_visible();
            if let Err(err) = device.term.set_cursor_visible(false) {
                warn!(%err, "failed to hide cursor");
            }
        }
        device.hide_claims += 1;
        if let Err(err) = device.term.flush() {
            warn!(%err, "flush failed");
        }
        let claim = HiddenCursor {
            console: self.clone(),
        };
        (result, claim)
    }

    fn release_hidden_cursor(&self) {
        let mut guard = self.lock();
        let device = &mut *guard;
        device.hide_claims = device.hide_claims.saturating_sub(1);
        if device.hide_claims > 0 {
            return;
        }
        let visible = device.restore_visible;
        if let Err(err) = device.term.set_cursor_visible(visible) {
            warn!(%err, visible, "failed to restore cursor visibility");
        }
        if let Err(err) = device.term.flush() {
            warn!(%err, "flush failed");
        }
    }

    /// Draw one frame on `row` without moving the caller's cursor.
    ///
    /// Write errors are logged and dropped: a frame is cosmetic and
    /// teardown must still run after one fails.
    pub fn frame(&self, row: u16, draw: impl FnOnce(&mut dyn Terminal) -> io::Result<()>) {
        self.locked(|term| {
            let origin = term.position().ok();
            let result = match safe_move_to(term, 0, row) {
                Ok(()) => draw(term),
                Err(err) => Err(err),
            };
            if let Some((col, origin_row)) = origin {
                if let Err(err) = safe_move_to(term, col, origin_row) {
                    warn!(%err, "failed to restore cursor after frame");
                }
            }
            if let Err(err) = result {
                warn!(%err, row, "frame write failed");
            }
        })
    }

    /// Current cursor row, or 0 if the device cannot say.
    pub fn cursor_row(&self) -> u16 {
        self.locked(|term| term.position().map(|(_, row)| row).unwrap_or(0))
    }

    /// Usable line width (window width minus one), or `fallback`.
    pub fn line_width(&self, fallback: usize) -> usize {
        self.locked(|term| line_width(term, fallback))
    }

    pub fn cursor_visible(&self) -> bool {
        self.locked(|term| term.cursor_visible())
    }

    pub fn set_cursor_visible(&self, visible: bool) {
        self.locked(|term| {
            if let Err(err) = term.set_cursor_visible(visible) {
                warn!(%err, visible, "failed to set cursor visibility");
            }
        })
    }

    /// Write plain text at the cursor.
    pub fn write(&self, text: &str) -> io::Result<()> {
        self.locked(|term| term.write_str(text))
    }

    pub fn write_line(&self, text: &str) -> io::Result<()> {
        self.locked(|term| {
            term.write_str(text)?;
            term.write_str("\n")
        })
    }

    /// Write markup (`[red]x[/]`), falling back to the outermost color when
    /// ANSI is unavailable.
    pub fn write_markup(&self, text: &str, default: Option<Color>) -> io::Result<()> {
        self.locked(|term| write_markup(term, self.ansi, text, default))
    }

    pub fn write_markup_line(&self, text: &str, default: Option<Color>) -> io::Result<()> {
        self.locked(|term| {
            write_markup(term, self.ansi, text, default)?;
            term.write_str("\n")
        })
    }

    /// Write text in a fixed style.
    pub fn write_styled(&self, style: Style, text: &str) -> io::Result<()> {
        self.locked(|term| write_styled(term, self.ansi, style, text))
    }

    pub fn write_styled_line(&self, style: Style, text: &str) -> io::Result<()> {
        self.locked(|term| {
            write_styled(term, self.ansi, style, text)?;
            term.write_str("\n")
        })
    }

    pub fn info(&self, text: &str) -> io::Result<()> {
        self.write_markup_line(text, Some(self.theme.info))
    }

    pub fn success(&self, text: &str) -> io::Result<()> {
        self.write_markup_line(text, Some(self.theme.success))
    }

    pub fn warning(&self, text: &str) -> io::Result<()> {
        self.write_markup_line(text, Some(self.theme.warning))
    }

    pub fn error(&self, text: &str) -> io::Result<()> {
        self.write_markup_line(text, Some(self.theme.error))
    }
}

/// One claim on the hidden cursor, released on drop.
pub(crate) struct HiddenCursor {
    console: Console,
}

impl Drop for HiddenCursor {
    fn drop(&mut self) {
        self.console.release_hidden_cursor();
    }
}

/// Render markup onto a device that is already locked.
pub fn write_markup(
    term: &mut dyn Terminal,
    ansi: bool,
    text: &str,
    default: Option<Color>,
) -> io::Result<()> {
    if ansi {
        return term.write_str(&markup::render_ansi(text, default));
    }
    let (fg, bg) = markup::plain_colors(text, default);
    let plain = markup::strip(text);
    if fg.is_none() && bg.is_none() {
        return term.write_str(&plain);
    }
    term.set_colors(fg, bg)?;
    let written = term.write_str(&plain);
    term.reset_colors()?;
    written
}

/// Write `text` in `style` onto a locked device.
pub fn write_styled(
    term: &mut dyn Terminal,
    ansi: bool,
    style: Style,
    text: &str,
) -> io::Result<()> {
    if ansi {
        return term.write_str(&style.paint(text));
    }
    if style.foreground.is_none() && style.background.is_none() {
        return term.write_str(text);
    }
    term.set_colors(style.foreground, style.background)?;
    let written = term.write_str(text);
    term.reset_colors()?;
    written
}

/// Move the cursor, clamped to the buffer. If the move still fails, write a
/// newline so output at least advances instead of overwriting in place.
pub fn safe_move_to(term: &mut dyn Terminal, col: u16, row: u16) -> io::Result<()> {
    let (col, row) = match term.size() {
        Ok((cols, rows)) => (
            col.min(cols.saturating_sub(1)),
            row.min(rows.saturating_sub(1)),
        ),
        Err(_) => (col, row),
    };
    match term.move_to(col, row) {
        Ok(()) => Ok(()),
        Err(err) => {
            warn!(%err, col, row, "cursor positioning failed, advancing a line");
            term.write_str("\n")
        }
    }
}

/// Window width minus one (so a full line never wraps), or `fallback` when
/// the size is unknown or degenerate.
pub fn line_width(term: &dyn Terminal, fallback: usize) -> usize {
    match term.size() {
        Ok((cols, _)) if cols > 1 => cols as usize - 1,
        _ => fallback,
    }
}

/// Right-pad `text` with spaces to `width` display columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    let mut out = String::with_capacity(text.len() + width.saturating_sub(used));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// Truncate `text` to `width` display columns, then pad to exactly `width`.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// A blank line of `width` columns, with a reset so no background color
/// bleeds into it.
pub fn blank_line(width: usize, ansi: bool) -> String {
    let mut out = String::with_capacity(width + RESET.len());
    if ansi {
        out.push_str(RESET);
    }
    out.extend(std::iter::repeat(' ').take(width));
    out
}

/// Runs a closure when dropped, on every exit path.
pub(crate) struct OnExit<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> OnExit<F> {
    pub(crate) fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }
}

impl<F: FnOnce()> Drop for OnExit<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}
