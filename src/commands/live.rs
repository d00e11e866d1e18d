//! Progress and spinner subcommand handlers

use std::time::{Duration, Instant};

use anyhow::Result;

use liveterm::{ProgressBar, Spinner};

use super::Context;

/// Fill a bar in `steps` steps, `delay_ms` apart. Ctrl+C stops early.
#[cfg(not(tarpaulin_include))]
pub fn handle_progress(ctx: &Context, steps: u32, delay_ms: u64, width: usize) -> Result<()> {
    let steps = steps.max(1);
    let delay = Duration::from_millis(delay_ms);
    let mut completed = true;
    {
        let mut bar = ProgressBar::new(&ctx.console, "Starting", width);
        for step in 0..=steps {
            let label = format!("Step {}/{}", step, steps);
            bar.report(f64::from(step) / f64::from(steps), Some(&label));
            if step < steps && ctx.cancel.wait(delay) {
                completed = false;
                break;
            }
        }
    }
    finish_line(ctx, completed, "Progress complete")
}

/// Spin for `duration_ms`, counting down in the spinner text.
#[cfg(not(tarpaulin_include))]
pub fn handle_spinner(ctx: &Context, text: &str, duration_ms: u64) -> Result<()> {
    let total = Duration::from_millis(duration_ms);
    let started = Instant::now();
    let mut completed = true;
    {
        let spinner = Spinner::with_interval(&ctx.console, text, ctx.config.spinner.interval());
        while started.elapsed() < total {
            let left = total.saturating_sub(started.elapsed());
            spinner.update(format!("{} ({:.1}s left)", text, left.as_secs_f64()));
            if ctx.cancel.wait(left.min(Duration::from_millis(100))) {
                completed = false;
                break;
            }
        }
    }
    finish_line(ctx, completed, "Spinner finished")
}

pub(crate) fn finish_line(ctx: &Context, completed: bool, message: &str) -> Result<()> {
    if completed {
        ctx.console.success(message)?;
    } else {
        ctx.console.warning("Cancelled.")?;
    }
    Ok(())
}
