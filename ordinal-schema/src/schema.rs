use crate::{Field, FieldDescriptor, SchemaConfig};
use ordinal_types::{Error, FieldType, Result, Value};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// An ordered, immutable collection of named fields.
///
/// Offsets form the contiguous range `0..len()` and follow the order in
/// which keys were supplied at construction. `keys[i]` and `fields[i]`
/// belong to offset `i`; `offsets` maps every key back to its index.
#[derive(Debug, Clone)]
pub struct Schema {
    keys: Vec<String>,
    fields: Vec<Field>,
    offsets: HashMap<String, usize>,
}

impl Schema {
    /// Builds a schema from `(key, descriptor)` pairs, in iteration order.
    ///
    /// The first invalid descriptor aborts construction and its
    /// [`Error::Configuration`] is returned unchanged. A key supplied twice
    /// is also a configuration error.
    pub fn new<I, K>(config: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, FieldDescriptor)>,
        K: Into<String>,
    {
        let mut keys = Vec::new();
        let mut fields = Vec::new();
        let mut offsets = HashMap::new();

        for (key, descriptor) in config {
            let key = key.into();
            if offsets.contains_key(&key) {
                warn!(%key, "rejecting schema: duplicate key");
                return Err(Error::Configuration(format!("duplicate key: {key}")));
            }
            let field = Field::new(&descriptor).inspect_err(|e| {
                warn!(%key, error = %e, "rejecting schema: invalid field descriptor");
            })?;
            let offset = keys.len();
            trace!(%key, offset, field_type = %field.field_type(), "registered field");
            offsets.insert(key.clone(), offset);
            keys.push(key);
            fields.push(field);
        }

        debug!(fields = keys.len(), "schema constructed");
        Ok(Self {
            keys,
            fields,
            offsets,
        })
    }

    /// Parses a JSON configuration object and builds a schema from it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::new(SchemaConfig::from_json_str(json)?)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.offsets.contains_key(key)
    }

    /// Returns the offset assigned to `key`.
    pub fn offset(&self, key: &str) -> Result<usize> {
        self.offsets
            .get(key)
            .copied()
            .ok_or_else(|| Error::UnknownKey(key.to_owned()))
    }

    /// Returns the key at `offset`, if any.
    #[must_use]
    pub fn key_at(&self, offset: usize) -> Option<&str> {
        self.keys.get(offset).map(String::as_str)
    }

    /// Keys in offset order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    /// `(key, offset)` pairs in ascending offset order.
    ///
    /// Every call starts a fresh pass over the whole schema.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, usize)> + '_ {
        self.keys
            .iter()
            .enumerate()
            .map(|(offset, key)| (key.as_str(), offset))
    }

    /// Calls `f` once per field with its key and offset, in offset order.
    pub fn for_each_key<F>(&self, mut f: F)
    where
        F: FnMut(&str, usize),
    {
        for (key, offset) in self.iter() {
            f(key, offset);
        }
    }

    /// Returns the field registered under `key`.
    pub fn field(&self, key: &str) -> Result<&Field> {
        let offset = self.offset(key)?;
        Ok(&self.fields[offset])
    }

    pub fn field_type(&self, key: &str) -> Result<FieldType> {
        self.field(key).map(Field::field_type)
    }

    /// Encodes `value` with the field registered under `key`.
    pub fn serialize(&self, key: &str, value: &Value) -> Result<String> {
        self.field(key)?.serialize(value)
    }

    /// Decodes `text` with the field registered under `key`.
    pub fn deserialize(&self, key: &str, text: &str) -> Result<Value> {
        self.field(key)?.deserialize(text)
    }

    /// Returns the default value of the field registered under `key`.
    pub fn default_value(&self, key: &str) -> Result<&Value> {
        self.field(key).map(Field::default_value)
    }
}
