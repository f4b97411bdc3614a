//! Error types for the vpntoproxy library.
//!
//! Every failure the configuration engine can report is a variant of
//! [`Error`]. All variants are fatal for startup except
//! [`Error::MalformedEnvironmentInteger`], which the environment resolver
//! logs and then ignores.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a vpntoproxy error.
///
/// # Examples
///
/// ```
/// use vpntoproxy::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(8080)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the vpntoproxy library.
#[derive(Debug, Error)]
pub enum Error {
    /// A default literal could not be parsed for its declared kind.
    #[error("malformed default for '{key}': {literal:?} ({reason})")]
    MalformedDefault {
        /// Flag key of the offending leaf.
        key: String,
        /// The literal as declared.
        literal: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A group file could not be opened, read, or written.
    #[error("configuration file {}: {source}", path.display())]
    ConfigFileIo {
        /// Path of the group file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An existing group file does not decode into its group.
    #[error("corrupt configuration file {}: {source}", path.display())]
    ConfigFileCorrupt {
        /// Path of the group file.
        path: PathBuf,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// An environment variable for an integer leaf is not a base-10 integer.
    ///
    /// Never returned from resolution; it is logged and the leaf keeps its
    /// previous value.
    #[error("environment variable {key}={value:?} is not a valid integer")]
    MalformedEnvironmentInteger {
        /// Environment key.
        key: String,
        /// The rejected text.
        value: String,
    },

    /// An environment variable for a collection leaf is not valid JSON for
    /// the leaf's type.
    #[error("environment variable {key} does not decode: {source}")]
    MalformedEnvironmentCollection {
        /// Environment key.
        key: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// A group could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Command-line parsing failed, or help/version output was requested.
    #[error("{0}")]
    CommandLine(#[from] clap::Error),
}

impl Error {
    /// Check if the error stems from file system access.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpntoproxy::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::ConfigFileIo {
    ///     path: PathBuf::from("configs/server.json"),
    ///     source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    /// };
    /// assert!(err.is_io());
    /// ```
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::ConfigFileIo { .. })
    }

    /// Check if the error must abort startup.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::MalformedEnvironmentInteger { .. })
    }
}
