//! chainconf: inspect and update transformation-chain configuration files.
//!
//! This is the entry point for the `chainconf` CLI. It parses arguments,
//! sets up logging, dispatches to the command handler, and maps errors to
//! exit codes.

mod cli;
mod commands;

use chainconf::exit_codes;
use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match commands::dispatch(&cli.config, cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
