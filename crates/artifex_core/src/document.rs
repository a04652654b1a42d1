//! # Export Document
//!
//! Abstract interchange tree: objects, arrays and scalars.
//!
//! Pipelines walk their entity graphs into a [`Document`]; turning that into
//! text is the job of an external encoder. `Document` implements
//! `serde::Serialize`, so any serde format (JSON, TOML, ...) can render it.
//!
//! Object fields keep insertion order. Exported key order is therefore the
//! order the pipeline wrote them in, never alphabetical.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A node of the export tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Document {
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Integer(i64),
    /// Floating-point scalar.
    Number(f64),
    /// String scalar.
    Text(String),
    /// Ordered sequence.
    Array(Vec<Document>),
    /// Ordered key/value pairs.
    Object(Vec<(String, Document)>),
}

impl Document {
    /// Starts building an object node.
    #[must_use]
    pub fn object() -> ObjectBuilder {
        ObjectBuilder::default()
    }

    /// Looks up a field of an object node.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Document> {
        match self {
            Self::Object(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Returns the field names of an object node, in order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::Object(fields) => fields.iter().map(|(k, _)| k.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Returns the elements of an array node.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Document]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the text of a string node.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the value of an integer node.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numeric value of a number or integer node.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }
}

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Document {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for Document {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<usize> for Document {
    fn from(value: usize) -> Self {
        Self::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f32> for Document {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<f64> for Document {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Document>> for Document {
    fn from(items: Vec<Document>) -> Self {
        Self::Array(items)
    }
}

impl FromIterator<Document> for Document {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

/// Fluent builder for object nodes.
#[derive(Debug, Default)]
pub struct ObjectBuilder {
    fields: Vec<(String, Document)>,
}

impl ObjectBuilder {
    /// Appends a field.
    #[must_use]
    pub fn field(mut self, key: &str, value: impl Into<Document>) -> Self {
        self.fields.push((key.to_string(), value.into()));
        self
    }

    /// Finishes the object.
    #[must_use]
    pub fn build(self) -> Document {
        Document::Object(self.fields)
    }
}

/// An entity graph that can be walked into a [`Document`].
///
/// Export never fails for a well-formed graph.
pub trait Exportable {
    /// Builds the export tree.
    fn to_document(&self) -> Document;
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
