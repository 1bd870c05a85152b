//! Operator confirmation
//!
//! The overwrite question is the only point where a run waits on a human.
//! It sits behind [`Confirm`] so `--yes` and tests can answer it without a
//! terminal.

use anyhow::Result;
use colored::*;
use std::io::{self, BufRead, Write};

/// Operator's answer to a yes/no question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Cancel,
}

impl Decision {
    /// Only a case-insensitive `y` proceeds; the line terminator is ignored,
    /// anything else (including an empty line or non-UTF-8 bytes) cancels.
    pub fn from_answer(answer: &[u8]) -> Self {
        let end = answer
            .iter()
            .rposition(|b| !matches!(b, b'\n' | b'\r'))
            .map_or(0, |i| i + 1);
        if answer[..end].eq_ignore_ascii_case(b"y") {
            Decision::Proceed
        } else {
            Decision::Cancel
        }
    }
}

/// Asks the operator a yes/no question
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<Decision>;
}

/// Reads the answer from a line-oriented input (stdin for the CLI)
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl PromptConfirm<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> Result<Decision> {
        write!(self.output, "{}", format!("{question} (y/N): ").yellow())?;
        self.output.flush()?;

        let mut answer = Vec::new();
        // EOF reads zero bytes and falls through to Cancel
        self.input.read_until(b'\n', &mut answer)?;
        Ok(Decision::from_answer(&answer))
    }
}

/// Non-interactive mode: every question is answered "yes"
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _question: &str) -> Result<Decision> {
        Ok(Decision::Proceed)
    }
}
