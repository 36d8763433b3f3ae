//! CLI entry point for numval.

mod cmd;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use std::io;
use std::process::ExitCode;

use numval::cli::{Cli, Commands};

/// Every value valid
const EXIT_OK: u8 = 0;
/// At least one value rejected
const EXIT_REJECTED: u8 = 1;
/// The shape itself could not be built
const EXIT_CONFIG: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            shape,
            json,
            values,
        } => match cmd::check::run(&shape, values, json, cli.quiet) {
            Ok(true) => ExitCode::from(EXIT_OK),
            Ok(false) => ExitCode::from(EXIT_REJECTED),
            Err(e) => {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                ExitCode::from(EXIT_CONFIG)
            }
        },
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            generate(shell, &mut command, "numval", &mut io::stdout());
            ExitCode::from(EXIT_OK)
        }
    }
}
