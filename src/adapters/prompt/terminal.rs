//! Line-based terminal prompter

use super::Prompter;
use crate::domain::{DumpError, Result};
use std::io::{self, BufRead, IsTerminal, Write};

/// Prompter reading answers line by line
///
/// Choices are answered with their 1-based number or their label
/// (case-insensitive). Unrecognised answers are asked again.
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter on the process stdin/stdout
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::PromptRender`] when stdin is not an interactive
    /// terminal (piped input, CI runners).
    pub fn stdio() -> Result<Self> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return Err(DumpError::PromptRender(
                "stdin is not an interactive terminal".to_string(),
            ));
        }
        Ok(Self::new(stdin.lock(), io::stdout()))
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Prompter over arbitrary streams
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the prompter and returns the output stream
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| DumpError::PromptRender(format!("failed to read answer: {e}")))?;
        if read == 0 {
            return Err(DumpError::PromptRender("input closed".to_string()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn render(&mut self, text: std::fmt::Arguments<'_>) -> Result<()> {
        self.writer
            .write_fmt(text)
            .and_then(|_| self.writer.flush())
            .map_err(|e| DumpError::PromptRender(format!("failed to write prompt: {e}")))
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask_choice(&mut self, message: &str, choices: &[&str]) -> Result<usize> {
        if choices.is_empty() {
            return Err(DumpError::PromptRender(
                "no choices to present".to_string(),
            ));
        }

        self.render(format_args!("? {message}\n"))?;
        for (index, choice) in choices.iter().enumerate() {
            self.render(format_args!("  {}) {choice}\n", index + 1))?;
        }

        loop {
            self.render(format_args!("Answer [1-{}]: ", choices.len()))?;
            let answer = self.read_answer()?;
            if let Some(index) = parse_choice(answer.trim(), choices) {
                return Ok(index);
            }
            self.render(format_args!(
                "Please enter a number between 1 and {}.\n",
                choices.len()
            ))?;
        }
    }

    fn ask_text(&mut self, message: &str) -> Result<String> {
        self.render(format_args!("? {message} "))?;
        self.read_answer()
    }
}

fn parse_choice(answer: &str, choices: &[&str]) -> Option<usize> {
    if let Ok(number) = answer.parse::<usize>() {
        return (1..=choices.len()).contains(&number).then(|| number - 1);
    }
    choices
        .iter()
        .position(|choice| choice.eq_ignore_ascii_case(answer))
}
