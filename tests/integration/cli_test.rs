//! Integration tests for the liveterm binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::run_liveterm;

fn liveterm(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("liveterm").expect("binary should build");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_liveterm(&["--help"], home.path());

    assert_eq!(exit_code, 0);
    for name in ["demo", "markup", "progress", "spinner", "marquee", "shimmer", "select", "config"] {
        assert!(stdout.contains(name), "help should mention {}", name);
    }
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_liveterm(&[], home.path());
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"));
}

// ============================================================================
// Markup Tests
// ============================================================================

#[test]
fn markup_without_colors_prints_literal_text() {
    let home = TempDir::new().unwrap();
    liveterm(&home)
        .args(["--ansi", "never", "markup", "[bold]array[/][1] stays"])
        .assert()
        .success()
        .stdout("array[1] stays\n");
}

#[test]
fn markup_with_ansi_emits_escapes() {
    let home = TempDir::new().unwrap();
    liveterm(&home)
        .args(["--ansi", "always", "markup", "[red]hi[/]"])
        .assert()
        .success()
        .stdout("\x1b[0m\x1b[91mhi\x1b[0m\x1b[0m\n");
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_path_points_into_config_home() {
    let home = TempDir::new().unwrap();
    liveterm(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("liveterm").and(predicate::str::contains("config.toml")));
}

#[test]
fn config_show_prints_defaults_without_a_file() {
    let home = TempDir::new().unwrap();
    liveterm(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("ansi = \"auto\"")
                .and(predicate::str::contains("interval_ms = 80"))
                .and(predicate::str::contains("shimmer_window = 4")),
        );
}

#[test]
fn config_init_writes_file_once() {
    let home = TempDir::new().unwrap();
    liveterm(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    liveterm(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn broken_config_is_reported() {
    let home = TempDir::new().unwrap();
    let (path, _, _) = run_liveterm(&["config", "path"], home.path());
    let path = path.trim();
    fs::create_dir_all(std::path::Path::new(path).parent().unwrap()).unwrap();
    fs::write(path, "ansi = 42\n").unwrap();

    liveterm(&home)
        .args(["markup", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}

// ============================================================================
// Prompt Tests
// ============================================================================

#[test]
fn select_refuses_non_interactive_stdin() {
    let home = TempDir::new().unwrap();
    liveterm(&home)
        .args(["select", "a", "b"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("interactive terminal"));
}
