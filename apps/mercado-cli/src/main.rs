//! # mercado Entry Point
//!
//! Parses arguments, sets up logging, runs one command.
//! The actual work is in lib.rs for better testability.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use mercado_cli::cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    mercado_cli::init_tracing();

    match mercado_cli::run(cli) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", output).context("Failed to write command output")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", err);
            Ok(ExitCode::from(err.code.exit_code()))
        }
    }
}
