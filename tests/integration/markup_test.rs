//! Markup rendering through a real screen model.

use liveterm::style::{render_ansi, strip};
use liveterm::Color;

use super::helpers::{has_sgr, memory_console};

#[test]
fn printed_text_equals_stripped_markup() {
    let test_cases = vec![
        "[red]error[/] in [bold]file[/]",
        "[bg=blue][white]w[/][/]",
        "no tags at all",
        "[1] is not a tag, [a b] neither",
        "[unknown]dropped[/] tag",
        "unterminated [red",
        "[/][/]over-closed",
    ];
    for input in test_cases {
        for ansi in [true, false] {
            let (term, console) = memory_console(80, 4, ansi);
            console.write_markup(input, None).unwrap();
            assert_eq!(term.printed(), strip(input), "Failed for {:?}", (input, ansi));
        }
    }
}

#[test]
fn output_ends_in_default_style() {
    let rendered = render_ansi("[red]a[green]b", None);
    assert!(rendered.ends_with("\x1b[0m"));
}

#[test]
fn over_closing_matches_plain_close() {
    let once = render_ansi("[red]x[/]y", None);
    let twice = render_ansi("[red]x[/][/]y", None);
    assert_eq!(once, twice);
}

#[test]
fn non_ansi_mode_writes_no_escapes() {
    let (term, console) = memory_console(80, 4, false);
    console
        .write_markup_line("[yellow]warn[/] and [bg=red]alert[/]", Some(Color::Cyan))
        .unwrap();
    assert!(!has_sgr(&term.transcript()));
    assert_eq!(term.row_text(0), "warn and alert");
    assert_eq!(
        term.color_calls(),
        vec![(Some(Color::Cyan), Some(Color::Red)), (None, None)]
    );
}

#[test]
fn snapshot_rendered_markup() {
    let rendered = render_ansi("[red]a[bg=blue]b[/]c", None).replace('\x1b', "ESC");
    insta::assert_snapshot!(rendered, @"ESC[0mESC[91maESC[0mESC[91mESC[104mbESC[0mcESC[0m");
}
