//! Interactive prompts.
//!
//! Every prompt reads from a [`KeySource`](crate::device::KeySource), so
//! tests drive them with [`ScriptedKeys`](crate::device::ScriptedKeys).
//! Ctrl+C ends any prompt with [`PromptError::Interrupted`].

mod error;
mod select;
mod text;

pub use error::PromptError;
pub use select::{clamp_anchor, multi_select, select, SelectionState, Transition};
pub use text::{input, password, yes_no, Validator};
