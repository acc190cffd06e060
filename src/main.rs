//! Wings: command-line front end for the template renderer.
//!
//! Parses arguments, sets up logging, dispatches to the command handler,
//! and maps errors to exit codes.

mod cli;
mod commands;
mod logging;

use cli::Cli;
use std::process::ExitCode;
use wings::exit_codes;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
