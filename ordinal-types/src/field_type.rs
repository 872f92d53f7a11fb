//! Type tags selecting a field's codec.

use crate::{Error, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The data type of a schema field.
///
/// This is a closed set: every tag has exactly one codec in
/// `ordinal-schema`, and configuration naming anything else is rejected
/// when the schema is built.
///
/// Serde goes through [`FieldType::as_str`] and [`FromStr`], so JSON accepts
/// the same aliases as configuration descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum FieldType {
    Text,
    Integer,
    Float,
    Boolean,
}

impl FieldType {
    /// All type tags, in declaration order.
    pub const ALL: [FieldType; 4] = [
        FieldType::Text,
        FieldType::Integer,
        FieldType::Float,
        FieldType::Boolean,
    ];

    /// Returns the canonical tag used in configuration documents.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
        }
    }

    /// Returns the value a field of this type falls back to when its
    /// descriptor does not name a default.
    #[must_use]
    pub fn fallback_default(&self) -> Value {
        match self {
            Self::Text => Value::Text(String::new()),
            Self::Integer => Value::Integer(0),
            Self::Float => Value::Float(0.0),
            Self::Boolean => Value::Boolean(false),
        }
    }

    /// Returns true if `value` carries this type tag.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        value.field_type() == *self
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" | "string" => Ok(Self::Text),
            "integer" | "int" => Ok(Self::Integer),
            "float" | "number" | "double" => Ok(Self::Float),
            "boolean" | "bool" => Ok(Self::Boolean),
            other => Err(Error::Configuration(format!(
                "unsupported field type: {other:?}"
            ))),
        }
    }
}

impl TryFrom<String> for FieldType {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FieldType> for &'static str {
    fn from(field_type: FieldType) -> Self {
        field_type.as_str()
    }
}
