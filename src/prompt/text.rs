//! Line prompts: yes/no, free text and masked text.

use crate::console::Console;
use crate::device::{Key, KeySource};

use super::PromptError;

/// Validates submitted input; `Err` carries the message shown to the user.
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// Ask a yes/no question. Enter takes the default, `y`/`n` answer directly,
/// anything else is ignored.
pub fn yes_no(
    console: &Console,
    keys: &mut dyn KeySource,
    question: &str,
    default_yes: bool,
) -> Result<bool, PromptError> {
    let options = if default_yes { "[green]Y[/]/n" } else { "y/[red]N[/]" };
    console.write_markup(&format!("{} [{}]: ", question, options), None)?;

    loop {
        let answer = match keys.read_key()? {
            Key::Enter => default_yes,
            Key::Char('y' | 'Y') => true,
            Key::Char('n' | 'N') => false,
            Key::Interrupt => {
                console.write_line("")?;
                return Err(PromptError::Interrupted);
            }
            _ => continue,
        };
        console.write_line(if answer { "y" } else { "n" })?;
        return Ok(answer);
    }
}

/// Read a line of text. Empty input takes `default`; a failing `validator`
/// prints its message and asks again.
pub fn input(
    console: &Console,
    keys: &mut dyn KeySource,
    prompt: &str,
    default: Option<&str>,
    validator: Option<Validator<'_>>,
) -> Result<String, PromptError> {
    console.write_markup(&format!("{} ", prompt), None)?;
    if let Some(default) = default.filter(|d| !d.is_empty()) {
        console.write_markup(&format!("([cyan]{}[/]) ", default), None)?;
    }
    console.write(": ")?;

    loop {
        let mut value = read_line(console, keys, None)?;
        if value.is_empty() {
            value = default.unwrap_or_default().to_string();
        }
        let Some(validate) = validator else {
            return Ok(value);
        };
        match validate(&value) {
            Ok(()) => return Ok(value),
            Err(message) => {
                let message = if message.is_empty() {
                    "Invalid input.".to_string()
                } else {
                    message
                };
                console.error(&message)?;
                console.write(": ")?;
            }
        }
    }
}

/// Read a line of text, echoing `mask` for every character.
pub fn password(
    console: &Console,
    keys: &mut dyn KeySource,
    prompt: &str,
    mask: char,
) -> Result<String, PromptError> {
    console.write_markup(&format!("{}: ", prompt), None)?;
    read_line(console, keys, Some(mask))
}

/// Collect keys until Enter. `mask` replaces the echo of each character.
fn read_line(
    console: &Console,
    keys: &mut dyn KeySource,
    mask: Option<char>,
) -> Result<String, PromptError> {
    let mut buf = String::new();
    loop {
        let c = match keys.read_key()? {
            Key::Enter => {
                console.write_line("")?;
                return Ok(buf);
            }
            Key::Interrupt => {
                console.write_line("")?;
                return Err(PromptError::Interrupted);
            }
            Key::Backspace => {
                if buf.pop().is_some() {
                    console.write("\x08 \x08")?;
                }
                continue;
            }
            Key::Space => ' ',
            Key::Char(c) if !c.is_control() => c,
            _ => continue,
        };
        buf.push(c);
        let mut echo = [0u8; 4];
        console.write(mask.unwrap_or(c).encode_utf8(&mut echo))?;
    }
}
