//! Marquee and shimmer subcommand handlers

use anyhow::Result;
use tracing::debug;

use liveterm::{Color, Marquee, Shimmer};

use super::live::finish_line;
use super::Context;

#[cfg(not(tarpaulin_include))]
pub fn handle_marquee(ctx: &Context, text: &str, width: Option<usize>, loops: i64) -> Result<()> {
    let outcome = Marquee::new(text)
        .width(width.unwrap_or(ctx.config.animation.marquee_width))
        .interval(ctx.config.marquee_interval())
        .loops(loops)
        .dynamic_width(true)
        .run(&ctx.console, &ctx.cancel);
    debug!(frames = outcome.frames, cancelled = outcome.cancelled, "marquee finished");
    finish_line(ctx, !outcome.cancelled, "Marquee finished")
}

#[cfg(not(tarpaulin_include))]
pub fn handle_shimmer(ctx: &Context, text: &str, loops: i64, from_right: bool) -> Result<()> {
    let outcome = Shimmer::new(text, Color::DarkGray, ctx.console.theme().accent)
        .window(ctx.config.animation.shimmer_window)
        .interval(ctx.config.shimmer_interval())
        .loops(loops)
        .from_right(from_right)
        .run(&ctx.console, &ctx.cancel);
    debug!(frames = outcome.frames, cancelled = outcome.cancelled, "shimmer finished");
    finish_line(ctx, !outcome.cancelled, "Shimmer finished")
}
