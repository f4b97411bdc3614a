//! Configuration system for vpntoproxy.
//!
//! The configuration is a tree of groups ([`Config`] holds [`Basic`],
//! [`Server`], [`Docker`], [`Proxy`] and [`Log`]). Every group is backed by
//! one JSON file in the configs directory and every field can be overridden
//! from the environment and from the command line.
//!
//! # Configuration Precedence
//!
//! For each field, highest to lowest:
//!
//! 1. A flag given on the command line (`--docker_image_name`)
//! 2. Environment variable (`DOCKER_IMAGE_NAME`)
//! 3. Group file (`configs/docker.json`)
//! 4. Built-in default, written to the group file when the file is missing
//!
//! Flags declare the value resolved from 2-4 as their default, so the help
//! output shows what the service will run with.
//!
//! # Examples
//!
//! Process-wide access, resolved on first use:
//!
//! ```no_run
//! let config = vpntoproxy::config::global().unwrap();
//! println!("server port: {}", config.server.port);
//! ```
//!
//! Explicit construction, for passing the tree down:
//!
//! ```no_run
//! use vpntoproxy::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().with_configs_dir("./configs").build().unwrap();
//! assert!(config.docker.max_attempts >= 0);
//! ```

pub mod builder;
pub mod defaults;
pub mod environment;
pub mod flags;
pub mod group;
pub mod loader;
pub mod naming;
pub mod schema;
pub mod summary;
pub mod walker;

#[cfg(test)]
mod proptests;

use once_cell::sync::OnceCell;

use crate::error::Result;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use defaults::DefaultExtractor;
pub use environment::{EnvSource, EnvironmentConfig, ProcessEnv};
pub use flags::{FlagBinder, FlagMatches};
pub use group::{CollectionSlot, Group, Leaf, LeafKind, LeafValue, Schema, Visitor};
pub use loader::{ConfigLoader, DEFAULT_CONFIGS_DIR};
pub use naming::FieldKeys;
pub use schema::{Basic, Config, Docker, Log, Proxy, Server};
pub use summary::{log_summary, summarize};
pub use walker::SchemaWalker;

static GLOBAL: OnceCell<Config> = OnceCell::new();

/// The process-wide configuration.
///
/// The first successful call resolves the tree from `./configs`, the
/// process environment and the process arguments; the command line is
/// parsed exactly once. Later calls return the same tree. Concurrent first
/// calls are serialized, and a failed resolution is not cached.
///
/// # Errors
///
/// Returns the error of the failed resolution; see
/// [`ConfigBuilder::build_schema`].
pub fn global() -> Result<&'static Config> {
    GLOBAL.get_or_try_init(|| ConfigBuilder::new().build())
}

/// The process-wide configuration if it has already been resolved.
#[must_use]
pub fn try_global() -> Option<&'static Config> {
    GLOBAL.get()
}

/// Install `config` as the process-wide configuration.
///
/// Lets an entry point that built its tree with [`ConfigBuilder`] make it
/// reachable through [`global`].
///
/// # Errors
///
/// Gives `config` back if the process-wide configuration is already set.
pub fn set_global(config: Config) -> std::result::Result<&'static Config, Config> {
    GLOBAL.try_insert(config).map_err(|(_, config)| config)
}
