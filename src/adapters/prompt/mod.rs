//! Operator prompts
//!
//! The interactive session talks to the operator only through [`Prompter`],
//! so the menu flow can be driven by scripted answers in tests.

pub mod terminal;

use crate::domain::Result;

pub use terminal::TerminalPrompter;

/// Request/response interface to the operator
pub trait Prompter {
    /// Presents `choices` and returns the index of the selected one
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::PromptRender`](crate::domain::DumpError::PromptRender)
    /// if the prompt cannot be shown or input is closed.
    fn ask_choice(&mut self, message: &str, choices: &[&str]) -> Result<usize>;

    /// Asks a free-text question; the answer has its line ending stripped
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::PromptRender`](crate::domain::DumpError::PromptRender)
    /// if the prompt cannot be shown or input is closed.
    fn ask_text(&mut self, message: &str) -> Result<String>;
}
