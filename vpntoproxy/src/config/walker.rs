//! Depth-first resolution of a configuration tree.
//!
//! For each group the walker loads (or provisions) the group file, then
//! visits the group's fields in declaration order: every leaf is overridden
//! from the environment and then declared as a command-line flag, and every
//! nested group is resolved recursively at its position.

use std::path::Path;

use crate::config::environment::{EnvSource, EnvironmentConfig};
use crate::config::flags::FlagBinder;
use crate::config::group::{Group, Leaf, Visitor};
use crate::config::loader::ConfigLoader;
use crate::config::naming::env_key;
use crate::error::Result;

/// Visitor that resolves every group it is handed.
pub struct SchemaWalker<'a> {
    configs_dir: &'a Path,
    env: &'a dyn EnvSource,
    flags: &'a mut FlagBinder,
}

impl<'a> SchemaWalker<'a> {
    /// A walker reading group files from `configs_dir`, variables from `env`
    /// and declaring flags on `flags`.
    pub fn new(configs_dir: &'a Path, env: &'a dyn EnvSource, flags: &'a mut FlagBinder) -> Self {
        Self {
            configs_dir,
            env,
            flags,
        }
    }
}

impl Visitor for SchemaWalker<'_> {
    fn group<G: Group>(&mut self, group: &mut G) -> Result<()> {
        *group = ConfigLoader::resolve(self.configs_dir)?;
        log::debug!("loaded group {} from {}", G::NAME, G::file_name());
        group.walk(self)
    }

    fn leaf(&mut self, group: &'static str, mut leaf: Leaf<'_>) -> Result<()> {
        EnvironmentConfig::apply(self.env, &env_key(group, leaf.name), &mut leaf.value)?;
        self.flags.register(group, &leaf);
        Ok(())
    }
}
