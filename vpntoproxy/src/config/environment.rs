//! Environment variable overrides.
//!
//! Every leaf can be overridden by the environment variable named after its
//! upper-case key, e.g. `DOCKER_IMAGE_NAME`. Unset and empty variables leave
//! the field alone.

use std::collections::HashMap;
use std::env::{self, VarError};

use crate::config::group::LeafValue;
use crate::error::{Error, Result};

/// Where environment variables are read from.
pub trait EnvSource {
    /// Value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(raw)) => {
                log::warn!("environment variable {key} is not valid UTF-8, ignoring {raw:?}");
                None
            }
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Applies environment variable overrides to leaves.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use vpntoproxy::config::{EnvironmentConfig, LeafValue};
///
/// let env = HashMap::from([("SERVER_PORT".to_string(), "9100".to_string())]);
/// let mut port = 8080_i64;
/// EnvironmentConfig::apply(&env, "SERVER_PORT", &mut LeafValue::Integer(&mut port)).unwrap();
/// assert_eq!(port, 9100);
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Override `value` from the variable `key`, if it is set and non-empty.
    ///
    /// Booleans become `true` only for the exact text `true`. An integer
    /// that does not parse is logged and ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEnvironmentCollection`] if the variable of a
    /// collection leaf does not decode.
    pub fn apply(source: &dyn EnvSource, key: &str, value: &mut LeafValue<'_>) -> Result<()> {
        let Some(text) = source.var(key).filter(|v| !v.is_empty()) else {
            return Ok(());
        };

        match value {
            LeafValue::String(value) => **value = text,
            LeafValue::Boolean(value) => **value = Self::parse_bool(&text),
            LeafValue::Integer(value) => match text.parse() {
                Ok(parsed) => **value = parsed,
                Err(_) => {
                    let err = Error::MalformedEnvironmentInteger {
                        key: key.to_string(),
                        value: text,
                    };
                    log::warn!("{err}; keeping {value}");
                }
            },
            LeafValue::Collection(value) => {
                value
                    .decode_json(&text)
                    .map_err(|source| Error::MalformedEnvironmentCollection {
                        key: key.to_string(),
                        source,
                    })?;
            }
        }

        Ok(())
    }

    /// Parse a boolean the way the environment spells it.
    ///
    /// Only the literal `true` is true; anything else is false.
    #[must_use]
    pub fn parse_bool(s: &str) -> bool {
        s == "true"
    }
}
