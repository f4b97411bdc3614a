//! Library exports for vpntoproxy-cli.
//!
//! The binary is a thin wrapper around [`resolve`] and [`report`]; the
//! command is also used by the build script to generate man pages and
//! shell completions.

pub mod cli;
pub mod error;

use std::io::Write;

use vpntoproxy::config::{log_summary, Config, ConfigBuilder};
use vpntoproxy::{set_level, LogLevel};

pub use cli::command;
pub use error::CliError;

/// Resolve the service configuration with `builder`.
///
/// When `Basic.Debug` ends up enabled, logging is raised to verbose and
/// every resolved value is logged.
///
/// # Errors
///
/// Returns the library error that stopped resolution.
pub fn resolve(builder: ConfigBuilder) -> Result<Config, CliError> {
    let mut config: Config = builder.with_command(command()).build_schema()?;

    if config.basic.debug {
        set_level(LogLevel::Verbose);
        log_summary(&mut config)?;
    }

    Ok(config)
}

/// Write `config` to `out` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the tree cannot be encoded or `out` fails.
pub fn report(config: &Config, out: &mut impl Write) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(config).map_err(vpntoproxy::Error::from)?;
    writeln!(out, "{json}")?;
    Ok(())
}
