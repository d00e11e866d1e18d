//! Command-line definitions.

use clap::{Parser, Subcommand, ValueEnum};

use liveterm::AnsiMode;

#[derive(Parser)]
#[command(name = "liveterm")]
#[command(version, about = "Styled text, live progress rows, animations and prompts in the terminal")]
pub struct Cli {
    /// Force ANSI escape output on or off
    #[arg(long, value_enum, global = true)]
    pub ansi: Option<AnsiArg>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AnsiArg {
    Auto,
    Always,
    Never,
}

impl From<AnsiArg> for AnsiMode {
    fn from(arg: AnsiArg) -> Self {
        match arg {
            AnsiArg::Auto => AnsiMode::Auto,
            AnsiArg::Always => AnsiMode::Always,
            AnsiArg::Never => AnsiMode::Never,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every component once
    Demo,

    /// Print markup text such as "[red]error[/] in [bold]file[/]"
    Markup {
        /// Markup to render
        text: String,
    },

    /// Fill a progress bar
    Progress {
        /// Number of steps to reach 100%
        #[arg(long, default_value_t = 40)]
        steps: u32,

        /// Delay between steps in milliseconds
        #[arg(long, default_value_t = 50)]
        delay_ms: u64,

        /// Bar width in cells
        #[arg(long, default_value_t = 30)]
        width: usize,
    },

    /// Show a spinner for a while
    Spinner {
        /// Text next to the spinner
        #[arg(long, default_value = "Working")]
        text: String,

        /// How long to spin, in milliseconds
        #[arg(long, default_value_t = 2000)]
        duration_ms: u64,
    },

    /// Scroll text across a fixed-width window
    Marquee {
        /// Text to scroll
        text: String,

        /// Window width (defaults to the config value)
        #[arg(long)]
        width: Option<usize>,

        /// Full passes; negative runs until Ctrl+C
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        loops: i64,
    },

    /// Sweep a highlight across text
    Shimmer {
        /// Text to shimmer
        text: String,

        /// Full passes; negative runs until Ctrl+C
        #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
        loops: i64,

        /// Move the highlight right to left
        #[arg(long)]
        from_right: bool,
    },

    /// Pick from a list with the arrow keys
    Select {
        /// Options to choose from
        #[arg(required = true)]
        options: Vec<String>,

        /// Title above the list
        #[arg(long, default_value = "Choose one")]
        title: String,

        /// Toggle several options with Space
        #[arg(long)]
        multi: bool,

        /// Initially focused option (single) or pre-selected options (multi)
        #[arg(long = "default", value_delimiter = ',')]
        defaults: Vec<usize>,
    },

    /// Inspect the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write the default configuration if no file exists
    Init,
}
