//! Default extraction.
//!
//! Builds a group instance in which every leaf holds its parsed default
//! literal. Nested groups are populated as well, so the result is complete
//! even though nested groups are persisted separately.

use crate::config::group::{Group, Leaf, LeafValue, Visitor};
use crate::config::naming::flag_key;
use crate::error::{Error, Result};

/// Writes default literals into the leaves it visits.
///
/// # Examples
///
/// ```
/// use vpntoproxy::config::{DefaultExtractor, Server};
///
/// let server: Server = DefaultExtractor::extract().unwrap();
/// assert_eq!(server.port, 8080);
/// ```
#[derive(Debug, Default)]
pub struct DefaultExtractor;

impl DefaultExtractor {
    /// Produce a fully populated instance of `G` from its default literals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDefault`] if a literal cannot be parsed for
    /// the kind of its leaf.
    pub fn extract<G: Group>() -> Result<G> {
        let mut group = G::default();
        Self::populate(&mut group)?;
        Ok(group)
    }

    /// Overwrite every leaf of `group` with its default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDefault`] if a literal cannot be parsed.
    pub fn populate<G: Group>(group: &mut G) -> Result<()> {
        DefaultExtractor.group(group)
    }
}

impl Visitor for DefaultExtractor {
    fn leaf(&mut self, group: &'static str, leaf: Leaf<'_>) -> Result<()> {
        let Leaf {
            name,
            default,
            value,
            ..
        } = leaf;
        let malformed = |reason: String| Error::MalformedDefault {
            key: flag_key(group, name),
            literal: default.to_string(),
            reason,
        };

        match value {
            LeafValue::String(value) => *value = default.to_string(),
            LeafValue::Integer(value) => {
                *value = default
                    .parse()
                    .map_err(|e: std::num::ParseIntError| malformed(e.to_string()))?;
            }
            LeafValue::Boolean(value) => *value = default == "true",
            LeafValue::Collection(value) => value
                .decode_json(default)
                .map_err(|e| malformed(e.to_string()))?,
        }

        Ok(())
    }
}
