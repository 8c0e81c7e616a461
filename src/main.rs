use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use confirm::cli::Cli;
use confirm::process::{CommandSpec, SystemLauncher};
use confirm::{ConfirmRunner, Outcome};

use std::io;
use std::process::exit;

fn run(spec: &CommandSpec) -> Result<Outcome> {
    let mut runner = ConfirmRunner::new(io::stdin().lock(), io::stdout(), SystemLauncher);
    runner
        .run(spec)
        .with_context(|| format!("confirmation gate for `{}` failed", spec.tokens().join(" ")))
}

fn main() {
    let cli = Cli::parse();

    let spec = CommandSpec::parse(&cli.command).unwrap_or_else(|e| {
        eprintln!("{} {}", "Error:".red(), e);
        exit(2);
    });

    match run(&spec) {
        Ok(outcome) => exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            exit(1);
        }
    }
}
