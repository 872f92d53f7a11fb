//! Order-preserving schema configuration.
//!
//! A configuration document is a JSON object mapping field keys to
//! descriptors:
//!
//! ```json
//! {
//!     "name": {"type": "text"},
//!     "age": {"type": "integer", "default": 0}
//! }
//! ```
//!
//! Key order in the document decides field offsets, so the object is read
//! into an ordered list rather than a hash map.

use crate::FieldDescriptor;
use ordinal_types::{Error, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Field descriptors keyed by field name, in configuration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaConfig {
    fields: Vec<(String, FieldDescriptor)>,
}

impl SchemaConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field. Repeated keys are rejected when the schema is built.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        self.fields.push((key.into(), descriptor));
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(config_error)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(config_error)
    }

    /// Reads a configuration document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), fields = config.len(), "loaded schema configuration");
        Ok(config)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the descriptor configured for `key`.
    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, descriptor)| descriptor)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &FieldDescriptor)> + '_ {
        self.fields.iter().map(|(k, d)| (k.as_str(), d))
    }
}

fn config_error(e: serde_json::Error) -> Error {
    Error::Configuration(e.to_string())
}

impl IntoIterator for SchemaConfig {
    type Item = (String, FieldDescriptor);
    type IntoIter = std::vec::IntoIter<(String, FieldDescriptor)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldDescriptor)> for SchemaConfig {
    fn from_iter<I: IntoIterator<Item = (K, FieldDescriptor)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, d)| (k.into(), d)).collect(),
        }
    }
}

impl Serialize for SchemaConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, descriptor) in &self.fields {
            map.serialize_entry(key, descriptor)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SchemaConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(SchemaConfigVisitor)
    }
}

struct SchemaConfigVisitor;

impl<'de> Visitor<'de> for SchemaConfigVisitor {
    type Value = SchemaConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of field keys to field descriptors")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, descriptor)) = access.next_entry::<String, FieldDescriptor>()? {
            if !seen.insert(key.clone()) {
                return Err(serde::de::Error::custom(format!("duplicate key: {key}")));
            }
            fields.push((key, descriptor));
        }
        Ok(SchemaConfig { fields })
    }
}
