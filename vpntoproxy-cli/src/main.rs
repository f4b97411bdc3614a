//! Main entry point for the vpntoproxy binary.
//!
//! Resolves the service configuration from `./configs`, the environment and
//! the command line, installs it as the process-wide configuration and
//! prints it as JSON.

use std::io;

use vpntoproxy::config::{self, ConfigBuilder};
use vpntoproxy_cli::{report, resolve, CliError};

fn run() -> Result<(), CliError> {
    let config = resolve(ConfigBuilder::new())?;
    let config = config::set_global(config).map_err(|_| CliError::AlreadyResolved)?;
    log::debug!("configuration installed");

    report(config, &mut io::stdout().lock())
}

fn main() {
    // Warnings raised during resolution must be visible
    let _level = vpntoproxy::init_logger(false, false);

    match run() {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            // Help, version and flag errors are printed the way clap prints them
            if let Some(clap_err) = e.as_command_line() {
                clap_err.exit();
            }
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
