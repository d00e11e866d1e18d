//! Shared helpers for integration tests.

use std::path::Path;
use std::process::Command;

use liveterm::{Console, MemoryTerminal};

/// A console over a fresh in-memory screen. The returned terminal shares
/// the screen with the console.
pub fn memory_console(cols: u16, rows: u16, ansi: bool) -> (MemoryTerminal, Console) {
    let term = MemoryTerminal::new(cols, rows);
    let console = Console::new(term.clone(), ansi);
    (term, console)
}

/// Run the liveterm binary with its config directory pointed at
/// `config_home`. Returns stdout, stderr and the exit code.
pub fn run_liveterm(args: &[&str], config_home: &Path) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_liveterm"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute liveterm");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// True when `transcript` contains an SGR (color/attribute) escape.
/// Cursor visibility escapes do not count.
pub fn has_sgr(transcript: &str) -> bool {
    transcript.split("\x1b[").skip(1).any(|rest| {
        let params: String = rest
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == ';')
            .collect();
        rest[params.len()..].starts_with('m')
    })
}
