//! Prompts driven by scripted keys.

use liveterm::device::ScriptedKeys;
use liveterm::prompt::{multi_select, select, PromptError};
use liveterm::{Color, Key};

use super::helpers::{has_sgr, memory_console};

#[test]
fn select_moves_down_from_default() {
    let (term, console) = memory_console(40, 10, true);
    let mut keys = ScriptedKeys::new([Key::Down, Key::Enter]);

    let choice = select(&console, &mut keys, "Letter", vec!["A", "B", "C"], 1).unwrap();

    assert_eq!(choice, "C");
    assert_eq!(keys.remaining(), 0);
    insta::assert_snapshot!(term.lines()[..4].join("\n"), @r"
    Letter
      A
      B
    > C
    ");
    assert_eq!(term.cursor(), (0, 4));
}

#[test]
fn select_wraps_upward() {
    let (_term, console) = memory_console(40, 10, true);
    let mut keys = ScriptedKeys::new([Key::Up, Key::Enter]);
    let choice = select(&console, &mut keys, "Letter", vec!["A", "B", "C"], 0).unwrap();
    assert_eq!(choice, "C");
}

#[test]
fn select_ignores_unrelated_keys() {
    let (_term, console) = memory_console(40, 10, true);
    let mut keys = ScriptedKeys::new([Key::Char('q'), Key::Space, Key::Left, Key::Enter]);
    let choice = select(&console, &mut keys, "Letter", vec!["A", "B"], 1).unwrap();
    assert_eq!(choice, "B");
}

#[test]
fn multi_select_confirms_defaults_in_order() {
    let (term, console) = memory_console(60, 10, true);
    let mut keys = ScriptedKeys::new([Key::Enter]);

    let chosen = multi_select(
        &console,
        &mut keys,
        "Numbers",
        vec!["One", "Two", "Three"],
        &[2, 0],
    )
    .unwrap();

    assert_eq!(chosen, vec!["One", "Three"]);
    assert_eq!(term.row_text(0), "Numbers (Space to toggle, Enter to confirm)");
    assert_eq!(term.row_text(1), "> ● One");
    assert_eq!(term.row_text(2), "  ○ Two");
    assert_eq!(term.row_text(3), "  ● Three");
}

#[test]
fn multi_select_toggles_with_space() {
    let (_term, console) = memory_console(60, 10, false);
    let mut keys = ScriptedKeys::new([Key::Space, Key::Down, Key::Space, Key::Enter]);
    let chosen = multi_select(&console, &mut keys, "N", vec![1, 2, 3], &[0]).unwrap();
    assert_eq!(chosen, vec![2]);
}

#[test]
fn bad_arguments_fail_before_drawing() {
    let (term, console) = memory_console(40, 10, true);
    let mut keys = ScriptedKeys::new([]);

    let empty: Vec<String> = Vec::new();
    assert!(matches!(
        select(&console, &mut keys, "t", empty, 0),
        Err(PromptError::EmptyOptions)
    ));
    assert!(matches!(
        select(&console, &mut keys, "t", vec!["a", "b"], 5),
        Err(PromptError::DefaultOutOfRange { index: 5, len: 2 })
    ));
    assert!(term.transcript().is_empty());
}

#[test]
fn block_is_pulled_up_near_bottom() {
    let (term, console) = memory_console(40, 6, true);
    term.set_cursor(0, 5);
    let mut keys = ScriptedKeys::new([Key::Enter]);

    let choice = select(&console, &mut keys, "Pick", vec!["x", "y", "z"], 2).unwrap();

    assert_eq!(choice, "z");
    // Four rows on a six-row screen: the block starts at row 2 and ends on
    // row 5, so leaving it scrolls one line.
    assert_eq!(term.row_text(1), "Pick");
    assert_eq!(term.row_text(4), "> z");
    assert_eq!(term.cursor(), (0, 5));
}

#[test]
fn focused_row_uses_color_api_without_ansi() {
    let (term, console) = memory_console(40, 10, false);
    let mut keys = ScriptedKeys::new([Key::Enter]);
    select(&console, &mut keys, "Pick", vec!["x", "y"], 0).unwrap();
    assert!(!has_sgr(&term.transcript()));
    assert_eq!(
        term.color_calls(),
        vec![(Some(Color::Green), None), (None, None)]
    );
}
