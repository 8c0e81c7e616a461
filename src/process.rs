use std::process::Command;

use crate::error::{ConfirmError, Result};

/// A program and its arguments, split from a single command string.
///
/// Splitting happens on runs of whitespace only. There is no quoting or
/// escaping, so an argument can never contain a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace().map(str::to_string);
        let program = tokens.next().ok_or(ConfirmError::Argument)?;
        Ok(CommandSpec {
            program,
            args: tokens.collect(),
        })
    }

    pub fn tokens(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

/// Starts the confirmed command and reports how it ended.
pub trait Launcher {
    /// Returns the child's exit code, or `None` if it was killed by a signal.
    fn launch(&mut self, spec: &CommandSpec) -> Result<Option<i32>>;
}

/// Spawns a real child process that inherits our stdio and waits for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&mut self, spec: &CommandSpec) -> Result<Option<i32>> {
        let execution = |source: std::io::Error| ConfirmError::Execution {
            program: spec.program.clone(),
            source,
        };
        let mut child = Command::new(&spec.program)
            .args(&spec.args)
            .spawn()
            .map_err(execution)?;
        let status = child.wait().map_err(execution)?;
        Ok(status.code())
    }
}
