//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and maps them to exit codes.

use std::fmt;
use vpntoproxy::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// I/O error while writing output.
    Io(std::io::Error),

    /// The process-wide configuration was installed before this run.
    AlreadyResolved,
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 2: Invalid flags (clap's own code; help and version exit with 0)
    /// - 5: I/O error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(LibError::CommandLine(e)) => e.exit_code(),
            CliError::Library(lib_err) if lib_err.is_io() => 5,
            CliError::Io(_) => 5,
            CliError::Library(_) | CliError::AlreadyResolved => 7,
        }
    }

    /// The clap error to hand back to clap for printing, if this is one.
    pub fn as_command_line(&self) -> Option<&clap::Error> {
        match self {
            CliError::Library(LibError::CommandLine(e)) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::AlreadyResolved => write!(f, "Configuration was already resolved"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::AlreadyResolved => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
