//! liveterm - terminal presentation toolkit
//!
//! Styled markup, live-updating rows (progress bars, spinners, status
//! lines), frame animations and keyboard prompts, all drawing through one
//! shared [`Console`] so concurrent regions never interleave their output.

pub mod animation;
pub mod capability;
pub mod config;
pub mod console;
pub mod device;
pub mod live;
pub mod prompt;
pub mod style;
pub mod theme;

pub use animation::{AnimationHandle, AnimationOutcome, Marquee, Shimmer};
pub use capability::{AnsiMode, TerminalCapability};
pub use config::{Config, ConfigError};
pub use console::Console;
pub use device::{Key, KeySource, MemoryTerminal, Terminal};
pub use live::{CancelToken, ProgressBar, Spinner, StatusLine, Timer};
pub use prompt::PromptError;
pub use style::{Color, Style};
pub use theme::Theme;
