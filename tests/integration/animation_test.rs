//! Marquee and shimmer loops on an in-memory screen.

use std::time::{Duration, Instant};

use liveterm::device::ScriptedKeys;
use liveterm::prompt::select;
use liveterm::{CancelToken, Color, Key, Marquee, Shimmer};

use super::helpers::{has_sgr, memory_console};

#[test]
fn marquee_frame_count_follows_loop_budget() {
    let test_cases = vec![("AB", 3, 1, 5), ("AB", 3, 2, 10), ("hello", 1, 1, 6), ("", 4, 3, 12)];
    for (text, width, loops, expected) in test_cases {
        let (_term, console) = memory_console(40, 4, true);
        let outcome = Marquee::new(text)
            .width(width)
            .interval(Duration::ZERO)
            .loops(loops)
            .run(&console, &CancelToken::new());
        assert_eq!(outcome.frames, expected, "Failed for {:?}", (text, width, loops));
        assert!(!outcome.cancelled);
    }
}

#[test]
fn marquee_blanks_its_row_and_restores_cursor() {
    let (term, console) = memory_console(40, 4, true);
    console.write_line("above").unwrap();

    Marquee::new("scrolling")
        .width(12)
        .interval(Duration::ZERO)
        .loops(1)
        .run(&console, &CancelToken::new());

    assert_eq!(term.row_text(0), "above");
    assert_eq!(term.row_text(1), "");
    assert_eq!(term.cursor(), (0, 2));
    assert!(term.is_cursor_visible());
}

#[test]
fn marquee_draws_wrapped_frames() {
    let (term, console) = memory_console(40, 4, true);
    let mut handle = Marquee::new("AB")
        .width(3)
        .interval(Duration::from_secs(30))
        .spawn(&console);

    let deadline = Instant::now() + Duration::from_secs(2);
    while term.row_text(0) != "AB" && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(term.row_text(0), "AB");
    assert!(!term.is_cursor_visible());

    handle.cancel();
    let outcome = handle.wait(Duration::from_secs(2)).expect("marquee should stop");
    assert!(outcome.cancelled);
    assert_eq!(outcome.frames, 1);
    assert_eq!(term.row_text(0), "");
    assert!(term.is_cursor_visible());
}

#[test]
fn cancelled_before_start_draws_nothing() {
    let (term, console) = memory_console(40, 4, true);
    let cancel = CancelToken::new();
    cancel.cancel();

    let outcome = Shimmer::new("never", Color::Gray, Color::White)
        .interval(Duration::ZERO)
        .run(&console, &cancel);

    assert_eq!(outcome.frames, 0);
    assert!(outcome.cancelled);
    // Teardown still leaves the text in the base color.
    assert_eq!(term.row_text(0), "never");
}

#[test]
fn shimmer_runs_full_passes_and_leaves_text() {
    let (term, console) = memory_console(40, 4, false);
    let shimmer = Shimmer::new("glow", Color::Gray, Color::Yellow).window(2);
    assert_eq!(shimmer.pass_len(), 6);

    let outcome = shimmer
        .interval(Duration::ZERO)
        .loops(2)
        .run(&console, &CancelToken::new());

    assert_eq!(outcome.frames, 12);
    assert_eq!(term.row_text(0), "glow");
    assert!(!has_sgr(&term.transcript()));
    assert!(term.color_calls().contains(&(Some(Color::Yellow), None)));
    assert_eq!(term.color_calls().last(), Some(&(None, None)));
    assert!(term.is_cursor_visible());
}

#[test]
fn shimmer_highlight_is_contiguous_and_bounded() {
    let shimmer = Shimmer::new("contiguous", Color::Gray, Color::White).window(3);
    for tick in 0..shimmer.pass_len() as u64 {
        let lit = shimmer.highlighted_at(tick);
        assert!(lit.len() <= 3.min(shimmer.pass_len()), "Failed for tick {}", tick);
        let runs = shimmer.runs_at(tick);
        let lit_runs = runs.iter().filter(|(hi, _)| *hi).count();
        assert!(lit_runs <= 1, "Failed for tick {}", tick);
    }
}

#[test]
fn handle_stop_is_prompt_for_long_intervals() {
    let (term, console) = memory_console(40, 4, true);
    let handle = Shimmer::new("slow", Color::Gray, Color::White)
        .interval(Duration::from_secs(30))
        .spawn(&console);
    std::thread::sleep(Duration::from_millis(20));

    let start = Instant::now();
    let outcome = handle.stop(Duration::from_secs(2));
    assert!(start.elapsed() < Duration::from_secs(1));
    assert_eq!(outcome.map(|o| o.cancelled), Some(true));
    assert_eq!(term.row_text(0), "slow");
}

#[test]
fn marquee_on_narrow_terminal_stays_on_its_row() {
    for dynamic in [true, false] {
        let (term, console) = memory_console(20, 3, true);
        console.write_line("top").unwrap();

        let outcome = Marquee::new("hello world")
            .width(30)
            .dynamic_width(dynamic)
            .interval(Duration::ZERO)
            .loops(1)
            .run(&console, &CancelToken::new());

        assert_eq!(outcome.frames, 41, "Failed for {:?}", dynamic);
        assert_eq!(term.lines(), vec!["top", "", ""], "Failed for {:?}", dynamic);
        assert_eq!(term.cursor(), (0, 2), "Failed for {:?}", dynamic);
    }
}

#[test]
fn marquee_follows_a_shrinking_terminal() {
    let (term, console) = memory_console(40, 4, true);
    let handle = Marquee::new("resize me")
        .width(30)
        .dynamic_width(true)
        .interval(Duration::from_millis(2))
        .spawn(&console);
    wait_for(|| !term.row_text(0).is_empty());
    console.write_line("neighbour").unwrap();

    // Under the render lock so no frame is half written when the size
    // changes.
    console.locked(|_| {
        term.resize(12, 4);
        term.clear_transcript();
    });
    wait_for(|| term.printed().chars().count() >= 11 * 5);

    assert_eq!(term.row_text(1), "neighbour");
    assert_eq!(term.row_text(2), "");
    assert_eq!(term.row_text(3), "");
    assert_eq!(term.cursor(), (0, 2));

    let outcome = handle.stop(Duration::from_secs(2));
    assert_eq!(outcome.map(|o| o.cancelled), Some(true));
    assert_eq!(term.lines(), vec!["", "neighbour", "", ""]);
    assert!(term.is_cursor_visible());
}

#[test]
fn shimmer_is_clipped_to_the_line() {
    let (term, console) = memory_console(10, 3, true);
    console.write_line("top").unwrap();

    Shimmer::new("a long shimmering line", Color::Gray, Color::White)
        .interval(Duration::ZERO)
        .loops(1)
        .run(&console, &CancelToken::new());

    assert_eq!(term.lines(), vec!["top", "a long sh", ""]);
    assert_eq!(term.cursor(), (0, 2));
}

#[test]
fn prompt_during_animation_keeps_cursor_hidden() {
    let (term, console) = memory_console(40, 10, true);
    let handle = Marquee::new("busy")
        .width(8)
        .interval(Duration::from_secs(30))
        .spawn(&console);
    wait_for(|| !term.row_text(0).is_empty());

    let mut keys = ScriptedKeys::new([Key::Enter]);
    let choice = select(&console, &mut keys, "Pick", vec!["x", "y"], 1).unwrap();
    assert_eq!(choice, "y");
    assert!(!term.is_cursor_visible());

    handle.stop(Duration::from_secs(2));
    assert!(term.is_cursor_visible());
}

fn wait_for(done: impl Fn() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while !done() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(2));
    }
    assert!(done(), "condition not reached in time");
}
