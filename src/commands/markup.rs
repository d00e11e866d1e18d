//! Markup subcommand handler

use anyhow::Result;

use super::Context;

/// Render one line of markup.
pub fn handle(ctx: &Context, text: &str) -> Result<()> {
    ctx.console.write_markup_line(text, None)?;
    Ok(())
}
