//! Prompt errors.

/// Errors returned by the interactive prompts.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Cannot prompt with an empty option list")]
    EmptyOptions,

    #[error("Default index {index} is out of range for {len} options")]
    DefaultOutOfRange { index: usize, len: usize },

    #[error("Prompt interrupted")]
    Interrupted,

    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),
}
