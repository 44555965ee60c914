//! gatecheck - lint and test gate for CI
//!
//! Runs a Python project's linter and then its test suite, prints a one-line
//! verdict and exits 0 (both passed), 1 (one failed) or 2 (both failed).

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod gate;
mod logging;

use cli::{Cli, Commands};

/// Exit status when the gate could not start, matching clap's usage errors
const EXIT_GATE_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        None | Some(Commands::Check) => {
            commands::check::run(cli.workspace, cli.config).map(gate::Verdict::exit_code)
        }
        Some(Commands::Version) => commands::version::run().map(|()| 0),
        Some(Commands::Completions(args)) => commands::completions::run(&args).map(|()| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", error::render_report(&e));
            std::process::exit(EXIT_GATE_ERROR);
        }
    }
}
