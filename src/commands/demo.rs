//! Demo subcommand handler
//!
//! Walks through every component. Regions that run at the same time each
//! hold their own row, so the demo doubles as a check that concurrent
//! repaints stay on their rows.

use std::time::Duration;

use anyhow::Result;

use liveterm::device::CrosstermKeys;
use liveterm::prompt::{self, PromptError};
use liveterm::{Color, Marquee, ProgressBar, Shimmer, Spinner, StatusLine, Style, Timer};

use super::Context;

const STEP: Duration = Duration::from_millis(40);

#[cfg(not(tarpaulin_include))]
pub fn handle(ctx: &Context) -> Result<()> {
    let console = &ctx.console;
    let _timer = Timer::start(console, "Demo took");

    console.write_markup_line("[bold]liveterm[/] demo, [cyan]Ctrl+C[/] skips ahead", None)?;
    console.write_markup_line(
        "Markup: [red]red[/] [green]green[/] [bg=blue][white]white on blue[/] [underline]underlined[/]",
        None,
    )?;
    console.write_styled_line(Style::new().fg(Color::Yellow).bold(), "Fluent style: yellow bold")?;
    console.info("Info line")?;
    console.success("Success line")?;
    console.warning("Warning line")?;
    console.error("Error line")?;

    concurrent_regions(ctx);
    if ctx.cancel.is_cancelled() {
        return Ok(());
    }

    Shimmer::new("Shimmering across the line", Color::DarkGray, console.theme().accent)
        .window(ctx.config.animation.shimmer_window)
        .interval(ctx.config.shimmer_interval())
        .loops(2)
        .run(console, &ctx.cancel);

    if atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout) {
        prompts(ctx)?;
    }
    Ok(())
}

/// A progress bar, a spinner, a status line and a marquee, all live at once.
#[cfg(not(tarpaulin_include))]
fn concurrent_regions(ctx: &Context) {
    let console = &ctx.console;
    let mut status = StatusLine::new(console, "Preparing");
    let spinner = Spinner::with_interval(console, "Spinning", ctx.config.spinner.interval());
    let marquee = Marquee::new("liveterm keeps every live row on its own line")
        .width(ctx.config.animation.marquee_width)
        .interval(ctx.config.marquee_interval())
        .spawn(console);
    let mut bar = ProgressBar::new(console, "Downloading", 30);

    let steps = 50;
    for step in 0..=steps {
        bar.report(f64::from(step) / f64::from(steps), None);
        if step % 10 == 0 {
            status.update(format!("Processed {} of {}", step, steps));
            spinner.update(format!("Spinning through step {}", step));
        }
        if ctx.cancel.wait(STEP) {
            break;
        }
    }

    marquee.stop(Duration::from_millis(500));
    drop(bar);
    drop(spinner);
    status.complete("All regions finished");
}

#[cfg(not(tarpaulin_include))]
fn prompts(ctx: &Context) -> Result<()> {
    let console = &ctx.console;
    let mut keys = CrosstermKeys::new();

    let result = (|| -> Result<(), PromptError> {
        if !prompt::yes_no(console, &mut keys, "Try the prompts?", true)? {
            return Ok(());
        }
        let name = prompt::input(console, &mut keys, "Your name", Some("friend"), None)?;
        let flavor = prompt::select(
            console,
            &mut keys,
            "Pick a flavor",
            vec!["Vanilla", "Chocolate", "Strawberry"],
            0,
        )?;
        let toppings = prompt::multi_select(
            console,
            &mut keys,
            "Toppings",
            vec!["Sprinkles", "Nuts", "Sauce"],
            &[0],
        )?;
        console.success(&format!(
            "{} ordered {} with {}",
            name,
            flavor,
            if toppings.is_empty() {
                "nothing".to_string()
            } else {
                toppings.join(", ")
            }
        ))?;
        Ok(())
    })();

    match result {
        Err(PromptError::Interrupted) => console.warning("Cancelled.")?,
        other => other?,
    }
    Ok(())
}
