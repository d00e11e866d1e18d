//! Arrow-key selection lists.
//!
//! The list is drawn as a block: a title row followed by one row per option.
//! Every key press that changes the state redraws the whole block in place,
//! each row cleared to the line width. Enter moves the cursor below the
//! block and returns the choice.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::io;

use crate::console::{fit_to_width, line_width, safe_move_to, write_styled, Console};
use crate::device::{Key, KeySource, Terminal};
use crate::style::{Color, Style};

use super::PromptError;

const MULTI_HINT: &str = " (Space to toggle, Enter to confirm)";
const FALLBACK_LINE_WIDTH: usize = 79;

/// What a key did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Redraw,
    Ignored,
    Confirm,
    Interrupt,
}

/// Focus and toggles for a list of options.
#[derive(Debug, Clone)]
pub struct SelectionState<T> {
    options: Vec<T>,
    cursor: usize,
    selected: BTreeSet<usize>,
    multi: bool,
}

impl<T> SelectionState<T> {
    /// Single choice, focused on `default_index`.
    pub fn single(options: Vec<T>, default_index: usize) -> Result<Self, PromptError> {
        check_index(default_index, options.len())?;
        Ok(Self {
            options,
            cursor: default_index,
            selected: BTreeSet::new(),
            multi: false,
        })
    }

    /// Multiple choice with `defaults` pre-selected, focused on the first row.
    pub fn multi(options: Vec<T>, defaults: &[usize]) -> Result<Self, PromptError> {
        if options.is_empty() {
            return Err(PromptError::EmptyOptions);
        }
        for &index in defaults {
            check_index(index, options.len())?;
        }
        Ok(Self {
            options,
            cursor: 0,
            selected: defaults.iter().copied().collect(),
            multi: true,
        })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    pub fn move_up(&mut self) {
        let len = self.options.len();
        self.cursor = (self.cursor + len - 1) % len;
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % self.options.len();
    }

    /// Flip the focused row. Single-choice lists ignore this.
    pub fn toggle(&mut self) {
        if !self.multi {
            return;
        }
        if !self.selected.remove(&self.cursor) {
            self.selected.insert(self.cursor);
        }
    }

    pub fn handle_key(&mut self, key: Key) -> Transition {
        match key {
            Key::Up => {
                self.move_up();
                Transition::Redraw
            }
            Key::Down => {
                self.move_down();
                Transition::Redraw
            }
            Key::Space if self.multi => {
                self.toggle();
                Transition::Redraw
            }
            Key::Enter => Transition::Confirm,
            Key::Interrupt => Transition::Interrupt,
            _ => Transition::Ignored,
        }
    }

    /// The focused option.
    pub fn into_selection(mut self) -> T {
        self.options.swap_remove(self.cursor)
    }

    /// Selected options in list order.
    pub fn into_selections(self) -> Vec<T> {
        let selected = self.selected;
        self.options
            .into_iter()
            .enumerate()
            .filter(|(i, _)| selected.contains(i))
            .map(|(_, option)| option)
            .collect()
    }
}

impl<T: Display> SelectionState<T> {
    /// Title row followed by one row per option, unpadded.
    pub fn lines(&self, title: &str) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.options.len() + 1);
        if self.multi {
            lines.push(format!("{}{}", title, MULTI_HINT));
        } else {
            lines.push(title.to_string());
        }
        for (i, option) in self.options.iter().enumerate() {
            let marker = if i == self.cursor { "> " } else { "  " };
            if self.multi {
                let mark = if self.is_selected(i) { "●" } else { "○" };
                lines.push(format!("{}{} {}", marker, mark, option));
            } else {
                lines.push(format!("{}{}", marker, option));
            }
        }
        lines
    }
}

fn check_index(index: usize, len: usize) -> Result<(), PromptError> {
    if len == 0 {
        return Err(PromptError::EmptyOptions);
    }
    if index >= len {
        return Err(PromptError::DefaultOutOfRange { index, len });
    }
    Ok(())
}

/// First row of a block of `needed` rows starting at `row`, pulled up so
/// the block fits on a screen of `height` rows.
pub fn clamp_anchor(row: u16, needed: usize, height: u16) -> u16 {
    let needed = u16::try_from(needed).unwrap_or(u16::MAX);
    row.min(height.saturating_sub(needed))
}

/// Let the user pick one option with the arrow keys.
///
/// # Arguments
///
/// * `default_index` - Row focused when the list first appears
pub fn select<T: Display>(
    console: &Console,
    keys: &mut dyn KeySource,
    title: &str,
    options: Vec<T>,
    default_index: usize,
) -> Result<T, PromptError> {
    let state = SelectionState::single(options, default_index)?;
    Ok(run(console, keys, title, state)?.into_selection())
}

/// Let the user toggle any number of options with Space.
///
/// Returns the selected options in list order, which may be empty.
pub fn multi_select<T: Display>(
    console: &Console,
    keys: &mut dyn KeySource,
    title: &str,
    options: Vec<T>,
    defaults: &[usize],
) -> Result<Vec<T>, PromptError> {
    let state = SelectionState::multi(options, defaults)?;
    Ok(run(console, keys, title, state)?.into_selections())
}

fn run<T: Display>(
    console: &Console,
    keys: &mut dyn KeySource,
    title: &str,
    mut state: SelectionState<T>,
) -> Result<SelectionState<T>, PromptError> {
    let rows = state.options().len() + 1;
    let (anchor, _cursor) = console.hide_cursor_with(|term| {
        let row = term.position().map(|(_, row)| row).unwrap_or(0);
        let height = term.size().map(|(_, rows)| rows).unwrap_or(u16::MAX);
        clamp_anchor(row, rows, height)
    });

    let ansi = console.ansi_enabled();
    let mut transition = Transition::Redraw;
    loop {
        if transition == Transition::Redraw {
            let lines = state.lines(title);
            console.locked(|term| draw_block(term, ansi, anchor, &lines, state.cursor()))?;
        }
        transition = state.handle_key(keys.read_key()?);
        match transition {
            Transition::Confirm => {
                console.locked(|term| leave_block(term, anchor, rows))?;
                return Ok(state);
            }
            Transition::Interrupt => {
                console.locked(|term| leave_block(term, anchor, rows))?;
                return Err(PromptError::Interrupted);
            }
            Transition::Redraw | Transition::Ignored => {}
        }
    }
}

/// Put the cursor on the line below the block, scrolling if the block ends
/// on the last row.
fn leave_block(term: &mut dyn Terminal, anchor: u16, rows: usize) -> io::Result<()> {
    let last = anchor.saturating_add(u16::try_from(rows - 1).unwrap_or(u16::MAX));
    safe_move_to(term, 0, last)?;
    term.write_str("\n")
}

fn draw_block(
    term: &mut dyn Terminal,
    ansi: bool,
    anchor: u16,
    lines: &[String],
    focused: usize,
) -> io::Result<()> {
    let width = line_width(term, FALLBACK_LINE_WIDTH);
    let focus_style = Style::new().fg(Color::Green);
    for (i, line) in lines.iter().enumerate() {
        safe_move_to(term, 0, anchor.saturating_add(i as u16))?;
        let text = fit_to_width(line, width);
        // Row 0 is the title.
        if i == focused + 1 {
            write_styled(term, ansi, focus_style, &text)?;
        } else {
            term.write_str(&text)?;
        }
    }
    Ok(())
}
