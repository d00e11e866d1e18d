//! Scope timer.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::console::Console;

/// Prints `label: <elapsed>` as an info line when dropped.
pub struct Timer {
    console: Console,
    label: String,
    started: Instant,
}

impl Timer {
    pub fn start(console: &Console, label: impl Into<String>) -> Self {
        Self {
            console: console.clone(),
            label: label.into(),
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let line = format!("{}: {:.2?}", self.label, self.elapsed());
        if let Err(err) = self.console.info(&line) {
            warn!(%err, "failed to write timer line");
        }
    }
}
