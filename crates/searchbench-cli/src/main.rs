//! `searchbench` - compare linear and binary search from the terminal.

mod cli;
mod commands;
mod session;
mod shell;

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if !cli.quiet {
        searchbench_console::init();
    }

    let result = match cli.command {
        Command::Generate { size, seed } => commands::generate(&size, seed),
        Command::Search {
            algorithm,
            target,
            size,
            seed,
        } => commands::search(algorithm.into(), &target, &size, seed),
        Command::Bench(args) => commands::bench(&args),
        Command::Shell { seed, config } => commands::shell(seed, config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
