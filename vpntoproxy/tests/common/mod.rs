//! Common test utilities for integration tests.
//!
//! Helpers for building isolated resolutions and for guarding the process
//! environment in tests that read it.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use vpntoproxy::ConfigBuilder;

/// Every environment key the service schema reads.
pub const SERVICE_ENV_KEYS: [&str; 16] = [
    "BASIC_DEBUG",
    "SERVER_PORT",
    "DOCKER_IMAGE_NAME",
    "DOCKER_MAX_ATTEMPTS",
    "DOCKER_SERVICE_PREFIX",
    "DOCKER_DNS",
    "DOCKER_PROXY_PORT",
    "DOCKER_PROXY_USER",
    "DOCKER_PROXY_PASSWORD",
    "PROXY_STARTING_PORT",
    "PROXY_TEST_URL",
    "LOG_MODE",
    "LOG_MAX_SIZE",
    "LOG_MAX_BACKUPS",
    "LOG_MAX_AGE",
    "LOG_COMPRESS",
];

/// A builder reading `dir`, the given variables and the given flags only.
#[allow(dead_code)]
pub fn isolated_builder(dir: &Path, vars: &[(&str, &str)], flags: &[&str]) -> ConfigBuilder {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    let args = std::iter::once("vpntoproxy").chain(flags.iter().copied());

    ConfigBuilder::new()
        .with_configs_dir(dir)
        .with_env_vars(vars)
        .with_args(args)
}

/// Write a group file by hand.
#[allow(dead_code)]
pub fn write_group_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(format!("{name}.json"));
    fs::write(&path, content).unwrap();
    path
}

/// Read a group file back as JSON.
#[allow(dead_code)]
pub fn read_group_file(dir: &Path, name: &str) -> serde_json::Value {
    let content = fs::read_to_string(dir.join(format!("{name}.json"))).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// RAII guard for setting and restoring environment variables.
///
/// Note: Tests using environment variables should not run in parallel.
/// Use #[serial] attribute on every test that creates one.
#[allow(dead_code)]
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Unset every service variable, restoring them on drop.
    pub fn clean() -> Self {
        let saved = SERVICE_ENV_KEYS
            .iter()
            .map(|key| {
                let old = env::var(key).ok();
                env::remove_var(key);
                ((*key).to_string(), old)
            })
            .collect();
        Self { saved }
    }

    /// Set `key` for the lifetime of the guard.
    pub fn set(mut self, key: &str, value: &str) -> Self {
        if !self.saved.iter().any(|(k, _)| k == key) {
            self.saved.push((key.to_string(), env::var(key).ok()));
        }
        env::set_var(key, value);
        self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, old) in self.saved.drain(..) {
            match old {
                Some(value) => env::set_var(&key, value),
                None => env::remove_var(&key),
            }
        }
    }
}
