//! Terminal capability probe.
//!
//! Decides once per process whether ANSI escape sequences can be written.
//! On Windows this also switches the console into virtual-terminal mode.
//! Detection never fails: anything unexpected counts as "no ANSI".

use std::panic;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable that forces ANSI on (`1`, `true`, `always`) or off
/// (`0`, `false`, `never`).
pub const ANSI_ENV: &str = "LIVETERM_ANSI";

static ANSI_ENABLED: OnceLock<bool> = OnceLock::new();

/// What the current process may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapability {
    pub ansi_enabled: bool,
}

impl TerminalCapability {
    /// The memoized probe result.
    pub fn current() -> Self {
        Self {
            ansi_enabled: probe(),
        }
    }
}

/// Probe the terminal on first call and return the cached answer after.
pub fn probe() -> bool {
    *ANSI_ENABLED.get_or_init(|| {
        let enabled = panic::catch_unwind(detect).unwrap_or(false);
        debug!(enabled, "terminal ANSI capability");
        enabled
    })
}

fn detect() -> bool {
    if let Some(forced) = std::env::var(ANSI_ENV).ok().as_deref().and_then(parse_override) {
        return forced;
    }
    if std::env::var("TERM").map_or(false, |term| term == "dumb") {
        return false;
    }
    platform_supports_ansi()
}

/// Parse an override value. Anything unrecognized means "auto".
pub fn parse_override(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "always" | "on" => Some(true),
        "0" | "false" | "no" | "never" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(windows)]
fn platform_supports_ansi() -> bool {
    // Tries to enable ENABLE_VIRTUAL_TERMINAL_PROCESSING on the output handle.
    crossterm::ansi_support::supports_ansi()
}

#[cfg(not(windows))]
fn platform_supports_ansi() -> bool {
    true
}

/// ANSI setting from the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnsiMode {
    /// Use the probe.
    #[default]
    Auto,
    Always,
    Never,
}

impl AnsiMode {
    pub fn resolve(self) -> bool {
        match self {
            AnsiMode::Auto => probe(),
            AnsiMode::Always => true,
            AnsiMode::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_override_accepts_common_spellings() {
        assert_eq!(parse_override("1"), Some(true));
        assert_eq!(parse_override("Always"), Some(true));
        assert_eq!(parse_override(" on "), Some(true));
        assert_eq!(parse_override("0"), Some(false));
        assert_eq!(parse_override("NEVER"), Some(false));
        assert_eq!(parse_override("auto"), None);
        assert_eq!(parse_override(""), None);
    }

    #[test]
    fn probe_is_memoized() {
        assert_eq!(probe(), probe());
        assert_eq!(TerminalCapability::current().ansi_enabled, probe());
    }

    #[test]
    fn forced_modes_ignore_the_probe() {
        assert!(AnsiMode::Always.resolve());
        assert!(!AnsiMode::Never.resolve());
        assert_eq!(AnsiMode::Auto.resolve(), probe());
    }
}
