use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use liveterm::{AnsiMode, CancelToken, Config, Console};

mod cli;
mod commands;

use cli::{Cli, Commands, ConfigCommands};

/// Logs go to stderr and are off unless RUST_LOG asks for them, so they
/// never land inside a live row on stdout.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Config commands must work even when the file is broken.
    if let Commands::Config(cmd) = &cli.command {
        return match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init => commands::config::handle_init(),
        };
    }

    let config = Config::load()?;
    let mode = cli.ansi.map(AnsiMode::from).unwrap_or(config.ansi);
    let console = Console::new(liveterm::device::StdoutTerminal::new(), mode.resolve())
        .with_theme(config.theme);

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        ctrlc::set_handler(move || cancel.cancel())?;
    }

    let ctx = commands::Context {
        console,
        config,
        cancel,
    };

    match cli.command {
        Commands::Demo => commands::demo::handle(&ctx),
        Commands::Markup { text } => commands::markup::handle(&ctx, &text),
        Commands::Progress {
            steps,
            delay_ms,
            width,
        } => commands::live::handle_progress(&ctx, steps, delay_ms, width),
        Commands::Spinner { text, duration_ms } => {
            commands::live::handle_spinner(&ctx, &text, duration_ms)
        }
        Commands::Marquee { text, width, loops } => {
            commands::animate::handle_marquee(&ctx, &text, width, loops)
        }
        Commands::Shimmer {
            text,
            loops,
            from_right,
        } => commands::animate::handle_shimmer(&ctx, &text, loops, from_right),
        Commands::Select {
            options,
            title,
            multi,
            defaults,
        } => commands::select::handle(&ctx, &title, options, multi, &defaults),
        Commands::Config(_) => Ok(()),
    }
}
