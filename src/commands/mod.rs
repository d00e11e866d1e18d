//! Subcommand handlers.

pub mod animate;
pub mod config;
pub mod demo;
pub mod live;
pub mod markup;
pub mod select;

use liveterm::{CancelToken, Config, Console};

/// What every drawing command needs.
pub struct Context {
    pub console: Console,
    pub config: Config,
    /// Fired by Ctrl+C.
    pub cancel: CancelToken,
}
