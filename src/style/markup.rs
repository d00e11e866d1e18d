//! Inline markup: `[red]error[/] in [bold]file[/]`.
//!
//! Tags are `[name]`, `[bg=name]` and the close tag `[/]` (`[/name]` closes
//! too, the name is ignored). Tags do not have to nest: the renderer keeps
//! an explicit foreground stack and background stack, and a close pops one
//! entry from each stack that has one.
//!
//! Bracket text that does not look like a tag (`[1]`, `[a b]`, a lone `[`)
//! is literal. Tags that look right but name nothing known are dropped.

use super::color::{Color, RESET};
use super::styled::Style;

/// A recognized style directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Foreground(Color),
    Background(Color),
    Bold,
    Underline,
    Close,
}

/// A piece of scanned markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    Directive(Directive),
}

/// Split markup into literal text and directives.
///
/// Never fails. Unknown tags produce no token at all.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut search_from = 0;

    while let Some(offset) = input[search_from..].find('[') {
        let open = search_from + offset;
        let Some(close_offset) = input[open + 1..].find(']') else {
            break;
        };
        let close = open + 1 + close_offset;
        let body = &input[open + 1..close];

        if !is_tag_body(body) {
            search_from = open + 1;
            continue;
        }

        if literal_start < open {
            tokens.push(Token::Text(&input[literal_start..open]));
        }
        if let Some(directive) = classify(body) {
            tokens.push(Token::Directive(directive));
        }
        literal_start = close + 1;
        search_from = close + 1;
    }

    if literal_start < input.len() {
        tokens.push(Token::Text(&input[literal_start..]));
    }
    tokens
}

/// `/`, or `/?letters(=letters)?`.
fn is_tag_body(body: &str) -> bool {
    if body == "/" {
        return true;
    }
    let name = body.strip_prefix('/').unwrap_or(body);
    let (key, value) = match name.split_once('=') {
        Some((k, v)) => (k, Some(v)),
        None => (name, None),
    };
    let letters = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic());
    letters(key) && value.map_or(true, letters)
}

fn classify(body: &str) -> Option<Directive> {
    if body.starts_with('/') {
        return Some(Directive::Close);
    }
    if let Some((key, value)) = body.split_once('=') {
        if key.eq_ignore_ascii_case("bg") {
            return Color::from_name(value).map(Directive::Background);
        }
        return None;
    }
    if body.eq_ignore_ascii_case("bold") {
        return Some(Directive::Bold);
    }
    if body.eq_ignore_ascii_case("underline") {
        return Some(Directive::Underline);
    }
    Color::from_name(body).map(Directive::Foreground)
}

/// Nested markup scopes.
///
/// The base frame is whatever default color the caller passed; it is never
/// on the stacks, so it cannot be popped.
#[derive(Debug, Default, Clone)]
pub struct StyleStack {
    foreground: Vec<Color>,
    background: Vec<Color>,
    bold: bool,
    underline: bool,
}

impl StyleStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a directive. Returns `false` when nothing changed.
    pub fn apply(&mut self, directive: Directive) -> bool {
        match directive {
            Directive::Foreground(color) => self.foreground.push(color),
            Directive::Background(color) => self.background.push(color),
            Directive::Bold => self.bold = true,
            Directive::Underline => self.underline = true,
            Directive::Close => {
                let popped_fg = self.foreground.pop().is_some();
                let popped_bg = self.background.pop().is_some();
                let had_flags = self.bold || self.underline;
                self.bold = false;
                self.underline = false;
                return popped_fg || popped_bg || had_flags;
            }
        }
        true
    }

    /// The style in effect on top of `base`.
    pub fn effective(&self, base: Option<Color>) -> Style {
        Style {
            foreground: self.foreground.last().copied().or(base),
            background: self.background.last().copied(),
            bold: self.bold,
            underline: self.underline,
        }
    }

    pub fn depth(&self) -> (usize, usize) {
        (self.foreground.len(), self.background.len())
    }
}

/// Render markup to an ANSI string.
///
/// After every directive the full effective style is re-emitted (reset
/// first), and the output always ends with a reset.
pub fn render_ansi(input: &str, default: Option<Color>) -> String {
    let mut out = String::with_capacity(input.len() + 32);
    if let Some(color) = default {
        out.push_str(color.fg_code());
    }

    let mut stack = StyleStack::new();
    for token in tokenize(input) {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::Directive(directive) => {
                if stack.apply(directive) {
                    out.push_str(&stack.effective(default).to_ansi());
                }
            }
        }
    }

    out.push_str(RESET);
    out
}

/// The literal text of some markup, with every tag removed.
pub fn strip(input: &str) -> String {
    tokenize(input)
        .into_iter()
        .filter_map(|token| match token {
            Token::Text(text) => Some(text),
            Token::Directive(_) => None,
        })
        .collect()
}

/// Colors used when the terminal has no ANSI support.
///
/// Only the outermost request survives: the caller's default (or else the
/// first foreground tag) and the first background tag.
pub fn plain_colors(input: &str, default: Option<Color>) -> (Option<Color>, Option<Color>) {
    let mut fg = default;
    let mut bg = None;
    for token in tokenize(input) {
        match token {
            Token::Directive(Directive::Foreground(c)) if fg.is_none() => fg = Some(c),
            Token::Directive(Directive::Background(c)) if bg.is_none() => bg = Some(c),
            _ => {}
        }
    }
    (fg, bg)
}
