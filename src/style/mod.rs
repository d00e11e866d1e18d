//! Colors, style values and the inline markup renderer.

mod color;
pub mod markup;
mod styled;

pub use color::{Color, BOLD, RESET, UNDERLINE};
pub use markup::{plain_colors, render_ansi, strip, Directive, StyleStack, Token};
pub use styled::Style;

/// A style frame as seen by the markup renderer.
pub type StyleFrame = Style;
