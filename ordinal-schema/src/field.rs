//! Single-value text codec.
//!
//! Encodings per type tag:
//! - text: the string itself
//! - integer: decimal `i64`
//! - float: shortest `f64` form that parses back to the same value
//! - boolean: `true` / `false`

use crate::FieldDescriptor;
use ordinal_types::{Error, FieldType, Result, Value};

/// A typed value codec with a default, owned by a [`Schema`](crate::Schema).
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    field_type: FieldType,
    default: Value,
}

impl Field {
    /// Builds a field from its descriptor.
    ///
    /// Fails with [`Error::Configuration`] when the type tag is unsupported
    /// or the default does not belong to the tag. An integer default is
    /// accepted for a float field when it converts to `f64` exactly.
    pub fn new(descriptor: &FieldDescriptor) -> Result<Self> {
        let field_type: FieldType = descriptor.field_type.parse()?;
        let default = match &descriptor.default {
            None => field_type.fallback_default(),
            Some(value @ Value::Integer(n)) if field_type == FieldType::Float => {
                let x = value.as_f64().ok_or_else(|| {
                    Error::Configuration(format!(
                        "default {n} cannot be represented exactly as {field_type}"
                    ))
                })?;
                Value::Float(x)
            }
            Some(value) if field_type.matches(value) => value.clone(),
            Some(value) => {
                return Err(Error::Configuration(format!(
                    "default {value} ({}) is not representable as {field_type}",
                    value.kind()
                )));
            }
        };
        Ok(Self {
            field_type,
            default,
        })
    }

    /// A field of the given type with the type's fallback default.
    #[must_use]
    pub fn of_type(field_type: FieldType) -> Self {
        Self {
            field_type,
            default: field_type.fallback_default(),
        }
    }

    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Returns the stored default value.
    #[must_use]
    pub const fn default_value(&self) -> &Value {
        &self.default
    }

    /// Encodes `value` as text.
    ///
    /// The value's type must match the field exactly; there is no widening
    /// here, so the output always decodes back to an equal value.
    pub fn serialize(&self, value: &Value) -> Result<String> {
        match (self.field_type, value) {
            (FieldType::Text, Value::Text(s)) => Ok(s.clone()),
            (FieldType::Integer, Value::Integer(n)) => Ok(n.to_string()),
            (FieldType::Float, Value::Float(x)) => Ok(x.to_string()),
            (FieldType::Boolean, Value::Boolean(b)) => Ok(b.to_string()),
            (expected, other) => Err(Error::Encoding {
                expected,
                found: other.kind(),
            }),
        }
    }

    /// Decodes text produced by [`Field::serialize`].
    pub fn deserialize(&self, text: &str) -> Result<Value> {
        let decoded = match self.field_type {
            FieldType::Text => return Ok(Value::Text(text.to_owned())),
            FieldType::Integer => text
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|e| e.to_string()),
            FieldType::Float => text
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|e| e.to_string()),
            FieldType::Boolean => text
                .parse::<bool>()
                .map(Value::Boolean)
                .map_err(|e| e.to_string()),
        };
        decoded.map_err(|reason| Error::Decoding {
            expected: self.field_type,
            text: text.to_owned(),
            reason,
        })
    }
}
