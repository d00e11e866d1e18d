//! Live regions sharing one screen.

use std::thread;
use std::time::{Duration, Instant};

use liveterm::live::SPINNER_STOP_TIMEOUT;
use liveterm::{ProgressBar, Spinner, StatusLine};

use super::helpers::memory_console;

#[test]
fn progress_bar_renders_and_blanks_on_drop() {
    let (term, console) = memory_console(60, 6, true);
    term.set_cursor(0, 2);

    let mut bar = ProgressBar::new(&console, "Copying", 10);
    bar.report(0.5, None);
    insta::assert_snapshot!(term.row_text(2), @"[█████─────] Copying");

    bar.report(1.0, Some("Done"));
    assert_eq!(term.row_text(2), "[██████████] Done");
    assert_eq!(term.cursor(), (0, 3));

    drop(bar);
    assert_eq!(term.row_text(2), "");
    assert!(term.is_cursor_visible());
}

#[test]
fn progress_is_clamped() {
    let (_term, console) = memory_console(60, 6, false);
    let mut bar = ProgressBar::new(&console, "x", 4);
    assert_eq!(bar.width(), 10);

    let test_cases = vec![(-0.5, 0), (0.04, 0), (0.06, 1), (0.56, 6), (1.7, 10), (f64::NAN, 0)];
    for (progress, expected) in test_cases {
        bar.report(progress, None);
        assert_eq!(bar.filled(), expected, "Failed for {:?}", progress);
    }
}

#[test]
fn sequential_writes_do_not_disturb_region() {
    let (term, console) = memory_console(60, 8, true);
    let mut bar = ProgressBar::new(&console, "Working", 10);

    console.write_line("log line one").unwrap();
    bar.report(0.3, None);
    console.write_line("log line two").unwrap();

    assert_eq!(term.row_text(0), "[███───────] Working");
    assert_eq!(term.row_text(1), "log line one");
    assert_eq!(term.row_text(2), "log line two");
    assert_eq!(term.cursor(), (0, 3));
}

#[test]
fn concurrent_regions_keep_their_rows() {
    let (term, console) = memory_console(60, 40, true);
    let mut status = StatusLine::new(&console, "Status");
    let spinner = Spinner::with_interval(&console, "Spinning", Duration::from_millis(1));
    let mut bar = ProgressBar::new(&console, "Bar", 10);
    assert_eq!((status.row(), spinner.row(), bar.row()), (0, 1, 2));

    let writer = {
        let console = console.clone();
        thread::spawn(move || {
            for i in 0..20 {
                console.write_line(&format!("line {}", i)).unwrap();
            }
        })
    };
    for step in 0..=10 {
        bar.report(f64::from(step) / 10.0, None);
        status.update(format!("Status {}", step));
        thread::sleep(Duration::from_millis(1));
    }
    writer.join().unwrap();
    drop(spinner);

    assert_eq!(term.row_text(0), "Status 10 [00:00]");
    assert_eq!(term.row_text(1), "");
    assert_eq!(term.row_text(2), "[██████████] Bar");
    for i in 0..20u16 {
        assert_eq!(term.row_text(3 + i), format!("line {}", i));
    }
    assert_eq!(term.cursor(), (0, 23));

    drop(bar);
    assert!(term.is_cursor_visible());
}

#[test]
fn cursor_returns_only_after_last_region_drops() {
    let (term, console) = memory_console(60, 10, true);
    let first = Spinner::with_interval(&console, "first", Duration::from_secs(30));
    let second = Spinner::with_interval(&console, "second", Duration::from_secs(30));
    let bar = ProgressBar::new(&console, "bar", 10);
    assert!(!term.is_cursor_visible());

    drop(first);
    assert!(!term.is_cursor_visible());
    drop(bar);
    assert!(!term.is_cursor_visible());
    drop(second);
    assert!(term.is_cursor_visible());
}

#[test]
fn progress_bar_leaves_cursor_visibility_alone() {
    let (term, console) = memory_console(60, 6, true);
    let bar = ProgressBar::new(&console, "bar", 10);
    assert!(term.is_cursor_visible());
    drop(bar);
    assert!(term.is_cursor_visible());
    assert!(!term.transcript().contains("\x1b[?25"));
}

#[test]
fn spinner_disposal_is_bounded_with_long_interval() {
    let (term, console) = memory_console(60, 4, true);
    let spinner = Spinner::with_interval(&console, "slow", Duration::from_secs(30));
    thread::sleep(Duration::from_millis(20));
    assert!(term.row_text(0).starts_with("⠋ slow"));
    assert!(!term.is_cursor_visible());

    let start = Instant::now();
    drop(spinner);
    assert!(start.elapsed() < SPINNER_STOP_TIMEOUT + Duration::from_millis(500));
    assert_eq!(term.row_text(0), "");
    assert!(term.is_cursor_visible());
}

#[test]
fn spinner_update_shows_on_next_tick() {
    let (term, console) = memory_console(60, 4, false);
    let spinner = Spinner::with_interval(&console, "first", Duration::from_millis(5));
    spinner.update("second");

    let deadline = Instant::now() + Duration::from_secs(2);
    while !term.row_text(0).ends_with("second") && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }
    assert!(term.row_text(0).ends_with("second"), "{:?}", term.row_text(0));
}

#[test]
fn status_line_keeps_completion_text() {
    let (term, console) = memory_console(60, 4, true);
    {
        let mut status = StatusLine::new(&console, "Indexing");
        status.update("Indexing 2/3");
        status.complete("Indexed");
        assert_eq!(term.cursor(), (0, 1));
    }
    console.write_line("next").unwrap();
    assert_eq!(term.row_text(0), "Indexed [00:00]");
    assert_eq!(term.row_text(1), "next");
}

#[test]
fn region_is_blanked_when_caller_panics() {
    let (term, console) = memory_console(60, 4, true);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut bar = ProgressBar::new(&console, "Doomed", 10);
        bar.report(0.5, None);
        panic!("caller failed");
    }));
    assert!(result.is_err());
    assert_eq!(term.row_text(0), "");
}
