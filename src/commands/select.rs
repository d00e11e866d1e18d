//! Select subcommand handler

use anyhow::{bail, Result};

use liveterm::device::CrosstermKeys;
use liveterm::prompt::{self, PromptError};

use super::Context;

/// Let the user choose among `options` and print the result.
///
/// Needs a terminal on both stdin and stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    ctx: &Context,
    title: &str,
    options: Vec<String>,
    multi: bool,
    defaults: &[usize],
) -> Result<()> {
    if !atty::is(atty::Stream::Stdin) || !atty::is(atty::Stream::Stdout) {
        bail!("select needs an interactive terminal");
    }

    let mut keys = CrosstermKeys::new();
    let picked = if multi {
        prompt::multi_select(&ctx.console, &mut keys, title, options, defaults)
            .map(|chosen| chosen.join(", "))
    } else {
        let default_index = defaults.first().copied().unwrap_or(0);
        prompt::select(&ctx.console, &mut keys, title, options, default_index)
    };

    match picked {
        Ok(choice) => ctx.console.success(&format!("Selected: {}", choice))?,
        Err(PromptError::Interrupted) => ctx.console.warning("Cancelled.")?,
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
