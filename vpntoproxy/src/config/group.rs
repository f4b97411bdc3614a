//! The metadata model every configuration group registers itself with.
//!
//! Instead of inspecting types at runtime, each group implements [`Group`]
//! and hands every one of its fields to a [`Visitor`] in declaration order.
//! A field is described by a [`Leaf`]: its word-capitalized name, default
//! literal, description, and a mutable view of its storage tagged with one of
//! the four [`LeafValue`] kinds. Nested groups are handed over with
//! [`Visitor::group`] at their declaration position.
//!
//! The root of a tree implements [`Schema`] and visits its groups in a fixed
//! order, which is the order groups are resolved and their files created.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Storage of a collection leaf, encoded as JSON on every external surface.
///
/// Implemented for every serde type, so any `Vec<T>`, map or structure can be
/// a collection leaf.
pub trait CollectionSlot {
    /// Replace the value with the one decoded from `text`.
    ///
    /// The value is left untouched when decoding fails.
    ///
    /// # Errors
    ///
    /// Returns the decode error if `text` is not valid JSON for the type.
    fn decode_json(&mut self, text: &str) -> serde_json::Result<()>;

    /// Encode the current value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    fn encode_json(&self) -> serde_json::Result<String>;
}

impl<T> CollectionSlot for T
where
    T: Serialize + DeserializeOwned,
{
    fn decode_json(&mut self, text: &str) -> serde_json::Result<()> {
        *self = serde_json::from_str(text)?;
        Ok(())
    }

    fn encode_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// The four kinds a leaf can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind {
    /// Free-form text.
    String,
    /// Base-10 signed integer.
    Integer,
    /// `true` or `false`.
    Boolean,
    /// Sequence or mapping encoded as JSON.
    Collection,
}

impl LeafKind {
    /// Whether a command-line flag is registered for leaves of this kind.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !matches!(self, Self::Collection)
    }
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Boolean => write!(f, "boolean"),
            Self::Collection => write!(f, "collection"),
        }
    }
}

/// Mutable view of a leaf's storage, tagged by kind.
pub enum LeafValue<'a> {
    /// A string field.
    String(&'a mut String),
    /// An integer field.
    Integer(&'a mut i64),
    /// A boolean field.
    Boolean(&'a mut bool),
    /// A collection field.
    Collection(&'a mut dyn CollectionSlot),
}

impl LeafValue<'_> {
    /// The kind of the underlying field.
    #[must_use]
    pub fn kind(&self) -> LeafKind {
        match self {
            Self::String(_) => LeafKind::String,
            Self::Integer(_) => LeafKind::Integer,
            Self::Boolean(_) => LeafKind::Boolean,
            Self::Collection(_) => LeafKind::Collection,
        }
    }

    /// Render the current value the way it is written on the command line
    /// and in environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a collection cannot be encoded.
    pub fn render(&self) -> serde_json::Result<String> {
        Ok(match self {
            Self::String(v) => (**v).clone(),
            Self::Integer(v) => v.to_string(),
            Self::Boolean(v) => v.to_string(),
            Self::Collection(v) => v.encode_json()?,
        })
    }
}

impl fmt::Debug for LeafValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(v) => f.debug_tuple("String").field(v).finish(),
            Self::Integer(v) => f.debug_tuple("Integer").field(v).finish(),
            Self::Boolean(v) => f.debug_tuple("Boolean").field(v).finish(),
            Self::Collection(v) => f
                .debug_tuple("Collection")
                .field(&v.encode_json().unwrap_or_default())
                .finish(),
        }
    }
}

/// One configurable field together with its metadata.
///
/// # Examples
///
/// ```
/// use vpntoproxy::config::{Leaf, LeafKind};
///
/// let mut port = 0_i64;
/// let leaf = Leaf::integer("Port", "8080", &mut port).describe("HTTP server port");
/// assert_eq!(leaf.kind(), LeafKind::Integer);
/// assert_eq!(leaf.default, "8080");
/// ```
#[derive(Debug)]
pub struct Leaf<'a> {
    /// Word-capitalized field name, e.g. `ImageName`.
    pub name: &'static str,
    /// Default literal, parsed according to the kind.
    pub default: &'static str,
    /// Help text; empty when the field has none.
    pub description: &'static str,
    /// The field's storage.
    pub value: LeafValue<'a>,
}

impl<'a> Leaf<'a> {
    /// A string leaf.
    pub fn string(name: &'static str, default: &'static str, value: &'a mut String) -> Self {
        Self::new(name, default, LeafValue::String(value))
    }

    /// An integer leaf.
    pub fn integer(name: &'static str, default: &'static str, value: &'a mut i64) -> Self {
        Self::new(name, default, LeafValue::Integer(value))
    }

    /// A boolean leaf.
    pub fn boolean(name: &'static str, default: &'static str, value: &'a mut bool) -> Self {
        Self::new(name, default, LeafValue::Boolean(value))
    }

    /// A collection leaf; `default` must be a JSON document.
    pub fn collection<T>(name: &'static str, default: &'static str, value: &'a mut T) -> Self
    where
        T: CollectionSlot,
    {
        Self::new(name, default, LeafValue::Collection(value))
    }

    fn new(name: &'static str, default: &'static str, value: LeafValue<'a>) -> Self {
        Self {
            name,
            default,
            description: "",
            value,
        }
    }

    /// Attach help text.
    #[must_use]
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// The kind of the leaf.
    #[must_use]
    pub fn kind(&self) -> LeafKind {
        self.value.kind()
    }
}

/// Receives the groups and leaves of a tree during a walk.
pub trait Visitor {
    /// Called for every group, top-level or nested.
    ///
    /// The default walks straight into the group's fields.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised while visiting the group.
    fn group<G: Group>(&mut self, group: &mut G) -> Result<()>
    where
        Self: Sized,
    {
        group.walk(self)
    }

    /// Called for every leaf; `group` is the name of the owning group.
    ///
    /// # Errors
    ///
    /// Implementations decide which conditions abort the walk.
    fn leaf(&mut self, group: &'static str, leaf: Leaf<'_>) -> Result<()>;
}

/// A named record of configuration leaves, persisted as one JSON file.
///
/// Nested groups must be excluded from serialization (`#[serde(skip)]`):
/// each group owns its own file.
///
/// Mark the struct `#[serde(default)]` so a file lacking a field still loads.
pub trait Group: Default + Serialize + DeserializeOwned {
    /// Word-capitalized group name; the file is named after its lower-case form.
    const NAME: &'static str;

    /// Hand every field to `visitor` in declaration order.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by the visitor.
    fn walk<V: Visitor>(&mut self, visitor: &mut V) -> Result<()>;

    /// File name of the group, e.g. `docker.json`.
    #[must_use]
    fn file_name() -> String {
        format!("{}.json", Self::NAME.to_lowercase())
    }
}

/// The root of a configuration tree.
pub trait Schema: Default {
    /// Hand every top-level group to `visitor` with [`Visitor::group`], in
    /// resolution order.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by the visitor.
    fn walk<V: Visitor>(&mut self, visitor: &mut V) -> Result<()>;
}
