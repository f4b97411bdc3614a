#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # vpntoproxy
//!
//! Layered configuration resolution for the vpntoproxy service.
//!
//! The service configuration is a tree of named groups. Each group is
//! persisted as a JSON file, can be overridden field by field from the
//! environment, and every field is exposed as a command-line flag.
//!
//! ## Core Types
//!
//! - [`Config`]: The resolved service configuration
//! - [`ConfigBuilder`]: Resolution from files, environment and flags
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use std::collections::HashMap;
//! use vpntoproxy::ConfigBuilder;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let config = ConfigBuilder::new()
//!     .with_configs_dir(dir.path())
//!     .with_env_vars(HashMap::new())
//!     .with_args(["vpntoproxy", "--server_port", "8181"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.server.port, 8181);
//! assert!(dir.path().join("docker.json").exists());
//! ```

pub mod config;
pub mod error;
pub mod logging;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, set_level, LogLevel, Logger};
