use ordinal_types::Value;
use serde::{Deserialize, Serialize};

/// Configuration for a single field: its type tag and optional default.
///
/// The tag is kept as written so that an unsupported tag surfaces as a
/// configuration error when the field is built, not as a parse failure of
/// the surrounding document. JSON shape: `{"type": "integer", "default": 0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDescriptor {
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl FieldDescriptor {
    /// Descriptor with the given type tag and no explicit default.
    pub fn new(field_type: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            default: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Shorthand for a text field.
    pub fn text() -> Self {
        Self::new("text")
    }

    /// Shorthand for an integer field.
    pub fn integer() -> Self {
        Self::new("integer")
    }

    /// Shorthand for a float field.
    pub fn float() -> Self {
        Self::new("float")
    }

    /// Shorthand for a boolean field.
    pub fn boolean() -> Self {
        Self::new("boolean")
    }
}
