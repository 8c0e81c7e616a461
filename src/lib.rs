pub mod cli;
pub mod error;
pub mod process;

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::process::{CommandSpec, Launcher};

pub const PROMPT: &str = "Are you sure? (n,Y): ";

/// Writes the prompt and reads one answer line.
///
/// End of input before any answer counts as "no".
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    Ok(is_affirmative(&answer))
}

pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase().starts_with('y')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Declined,
    Executed { code: Option<i32> },
}

impl Outcome {
    /// Exit status for this process: the child's when it ran, 0 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Declined => 0,
            Outcome::Executed { code } => code.unwrap_or(1),
        }
    }
}

/// Prompts once and launches the command only on a "yes".
pub struct ConfirmRunner<R, W, L> {
    input: R,
    output: W,
    launcher: L,
}

impl<R: BufRead, W: Write, L: Launcher> ConfirmRunner<R, W, L> {
    pub fn new(input: R, output: W, launcher: L) -> Self {
        ConfirmRunner {
            input,
            output,
            launcher,
        }
    }

    pub fn run(&mut self, spec: &CommandSpec) -> Result<Outcome> {
        if !confirm(&mut self.input, &mut self.output)? {
            return Ok(Outcome::Declined);
        }
        let code = self.launcher.launch(spec)?;
        Ok(Outcome::Executed { code })
    }

    pub fn into_parts(self) -> (R, W, L) {
        (self.input, self.output, self.launcher)
    }
}
