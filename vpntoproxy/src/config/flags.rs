//! Command-line flags.
//!
//! One long flag is declared per scalar leaf, named after the leaf's lower
//! snake-case key (`--docker_image_name`). The flag's default is the value
//! the leaf holds when the flag is registered, i.e. after the group file and
//! the environment have been applied. Parsing happens once, after the whole
//! tree has been walked, and only values given on the command line are
//! written back into the tree.

use std::collections::HashSet;
use std::ffi::OsString;
use std::mem;

use clap::parser::ValueSource;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::config::defaults::DefaultExtractor;
use crate::config::group::{Group, Leaf, LeafKind, LeafValue, Schema, Visitor};
use crate::config::naming::flag_key;
use crate::error::Result;

/// Collects flag declarations for the leaves of a tree.
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use vpntoproxy::config::{FlagBinder, Leaf};
///
/// let mut binder = FlagBinder::new(Command::new("demo"));
/// let mut port = 8080_i64;
/// binder.register("Server", &Leaf::integer("Port", "8080", &mut port));
///
/// let matches = binder.parse(["demo", "--server_port", "9000"]).unwrap();
/// assert!(matches.is_explicit("server_port"));
/// ```
#[derive(Debug)]
pub struct FlagBinder {
    command: Command,
    registered: HashSet<String>,
}

impl FlagBinder {
    /// Start from `command`, which supplies name, version and about text.
    #[must_use]
    pub fn new(command: Command) -> Self {
        Self {
            command,
            registered: HashSet::new(),
        }
    }

    /// Declare the flag for `leaf` of `group`.
    ///
    /// Collection leaves are skipped. A key that is already declared keeps
    /// its first declaration.
    pub fn register(&mut self, group: &'static str, leaf: &Leaf<'_>) {
        if !leaf.kind().is_scalar() {
            return;
        }

        let key = flag_key(group, leaf.name);
        if !self.registered.insert(key.clone()) {
            log::warn!("flag --{key} is declared twice, ignoring {group}.{}", leaf.name);
            return;
        }

        let current = match leaf.value.render() {
            Ok(current) => current,
            Err(e) => {
                log::warn!("cannot render current value of --{key}: {e}");
                leaf.default.to_string()
            }
        };

        let arg = Self::arg_for(key, leaf.kind(), leaf.description, current);
        self.command = mem::take(&mut self.command).arg(arg);
    }

    fn arg_for(key: String, kind: LeafKind, description: &'static str, current: String) -> Arg {
        let mut arg = Arg::new(key.clone())
            .long(key)
            .value_name(kind.to_string().to_uppercase())
            .default_value(current)
            .action(ArgAction::Set);

        if !description.is_empty() {
            arg = arg.help(description);
        }

        match kind {
            LeafKind::String => arg.value_parser(value_parser!(String)),
            LeafKind::Integer => arg
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true),
            LeafKind::Boolean => arg
                .value_parser(value_parser!(bool))
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true"),
            LeafKind::Collection => arg,
        }
    }

    /// The command with every flag declared so far.
    #[must_use]
    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Consume the binder, returning the command.
    #[must_use]
    pub fn into_command(self) -> Command {
        self.command
    }

    /// Parse `args` (including the program name) against the declared flags.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CommandLine`] for unknown flags, values that do
    /// not parse, and requests for help or version output.
    pub fn parse<I, T>(self, args: I) -> Result<FlagMatches>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.try_get_matches_from(args)?;
        Ok(FlagMatches { matches })
    }

    /// Build a command whose flags show the default of every leaf of `S`,
    /// without reading files or the environment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedDefault`] if a default is invalid.
    pub fn describe<S: Schema>(command: Command) -> Result<Command> {
        let mut binder = Self::new(command);
        S::default().walk(&mut Describe {
            binder: &mut binder,
        })?;
        Ok(binder.into_command())
    }
}

/// The outcome of parsing the command line.
#[derive(Debug)]
pub struct FlagMatches {
    matches: ArgMatches,
}

impl FlagMatches {
    /// Whether the flag `key` was given explicitly on the command line.
    #[must_use]
    pub fn is_explicit(&self, key: &str) -> bool {
        self.matches.try_contains_id(key).unwrap_or(false)
            && self.matches.value_source(key) == Some(ValueSource::CommandLine)
    }

    /// Write every explicitly given flag into its leaf in `tree`.
    ///
    /// # Errors
    ///
    /// Never fails for trees walked by the binder that produced these
    /// matches; the signature follows [`Visitor`].
    pub fn apply<S: Schema>(&self, tree: &mut S) -> Result<()> {
        tree.walk(&mut Apply { flags: self })
    }

    /// Write every explicitly given flag into the leaves of a single group.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn apply_group<G: Group>(&self, group: &mut G) -> Result<()> {
        Apply { flags: self }.group(group)
    }

    // A leaf whose kind differs from the declared flag (duplicate key) is skipped.
    fn write(&self, key: &str, value: LeafValue<'_>) {
        let written = match value {
            LeafValue::String(value) => self.matches.try_get_one::<String>(key).map(|v| {
                if let Some(v) = v {
                    value.clone_from(v);
                }
            }),
            LeafValue::Integer(value) => self.matches.try_get_one::<i64>(key).map(|v| {
                if let Some(v) = v {
                    *value = *v;
                }
            }),
            LeafValue::Boolean(value) => self.matches.try_get_one::<bool>(key).map(|v| {
                if let Some(v) = v {
                    *value = *v;
                }
            }),
            LeafValue::Collection(_) => Ok(()),
        };

        if let Err(e) = written {
            log::warn!("--{key} does not fit the leaf it shadows, skipping: {e}");
        }
    }
}

struct Apply<'a> {
    flags: &'a FlagMatches,
}

impl Visitor for Apply<'_> {
    fn leaf(&mut self, group: &'static str, leaf: Leaf<'_>) -> Result<()> {
        if !leaf.kind().is_scalar() {
            return Ok(());
        }

        let key = flag_key(group, leaf.name);
        if self.flags.is_explicit(&key) {
            log::debug!("--{key} given on the command line");
            self.flags.write(&key, leaf.value);
        }
        Ok(())
    }
}

struct Describe<'a> {
    binder: &'a mut FlagBinder,
}

impl Visitor for Describe<'_> {
    fn group<G: Group>(&mut self, group: &mut G) -> Result<()> {
        DefaultExtractor::populate(group)?;
        group.walk(self)
    }

    fn leaf(&mut self, group: &'static str, leaf: Leaf<'_>) -> Result<()> {
        self.binder.register(group, &leaf);
        Ok(())
    }
}
