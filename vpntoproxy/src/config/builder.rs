//! Builder that resolves a configuration tree from all sources.

use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::Command;

use crate::config::environment::{EnvSource, ProcessEnv};
use crate::config::flags::FlagBinder;
use crate::config::group::Schema;
use crate::config::loader::DEFAULT_CONFIGS_DIR;
use crate::config::schema::Config;
use crate::config::summary::log_summary;
use crate::config::walker::SchemaWalker;
use crate::error::Result;

/// Resolves a configuration tree from group files, environment variables and
/// command-line flags.
///
/// Without further setup the builder reads `./configs`, the process
/// environment and the process arguments.
///
/// # Examples
///
/// ```no_run
/// use vpntoproxy::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_configs_dir("/etc/vpntoproxy")
///     .build()
///     .unwrap();
/// println!("server port: {}", config.server.port);
/// ```
///
/// Fully isolated from the process:
///
/// ```
/// use std::collections::HashMap;
/// use vpntoproxy::config::ConfigBuilder;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = ConfigBuilder::new()
///     .with_configs_dir(dir.path())
///     .with_env_vars(HashMap::from([("SERVER_PORT".into(), "9100".into())]))
///     .with_args(["vpntoproxy", "--proxy_starting_port", "9500"])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.server.port, 9100);
/// assert_eq!(config.proxy.starting_port, 9500);
/// ```
#[derive(Debug)]
pub struct ConfigBuilder {
    configs_dir: PathBuf,
    env_vars: Option<HashMap<String, String>>,
    args: Option<Vec<OsString>>,
    command: Option<Command>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// A builder with the default sources.
    #[must_use]
    pub fn new() -> Self {
        Self {
            configs_dir: PathBuf::from(DEFAULT_CONFIGS_DIR),
            env_vars: None,
            args: None,
            command: None,
        }
    }

    /// Read and create group files in `dir`.
    #[must_use]
    pub fn with_configs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.configs_dir = dir.into();
        self
    }

    /// Read environment overrides from `vars` instead of the process
    /// environment.
    #[must_use]
    pub fn with_env_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.env_vars = Some(vars);
        self
    }

    /// Parse `args` instead of the process arguments. The first item is the
    /// program name.
    #[must_use]
    pub fn with_args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Declare flags on `command`, which supplies name, version and about
    /// text for help output.
    #[must_use]
    pub fn with_command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    /// Resolve the service configuration.
    ///
    /// When debug mode ends up enabled, every resolved value is logged.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error met while resolving; see
    /// [`Self::build_schema`].
    pub fn build(self) -> Result<Config> {
        let mut config: Config = self.build_schema()?;
        if config.basic.debug {
            log_summary(&mut config)?;
        }
        Ok(config)
    }

    /// Resolve an arbitrary tree.
    ///
    /// Every group is loaded or provisioned and overridden from the
    /// environment in walk order; the command line is parsed once at the
    /// end and explicitly given flags are applied last.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::ConfigFileIo`] / [`crate::Error::ConfigFileCorrupt`]
    ///   for unusable group files.
    /// - [`crate::Error::MalformedDefault`] for invalid default literals.
    /// - [`crate::Error::MalformedEnvironmentCollection`] for collection
    ///   variables that do not decode.
    /// - [`crate::Error::CommandLine`] for invalid arguments or help output.
    pub fn build_schema<S: Schema>(self) -> Result<S> {
        let env: &dyn EnvSource = match &self.env_vars {
            Some(vars) => vars,
            None => &ProcessEnv,
        };
        let command = self
            .command
            .unwrap_or_else(|| Command::new(env!("CARGO_PKG_NAME")));
        let mut flags = FlagBinder::new(command);

        let mut tree = S::default();
        tree.walk(&mut SchemaWalker::new(&self.configs_dir, env, &mut flags))?;

        let args = self.args.unwrap_or_else(|| env::args_os().collect());
        let matches = flags.parse(args)?;
        matches.apply(&mut tree)?;

        Ok(tree)
    }
}
