//! Core type definitions for Ordinal.
//!
//! This crate defines the building blocks every schema is
//! made of:
//! - [`Value`] — a single typed value (text, integer, float, boolean)
//! - [`FieldType`] — the closed set of type tags a field can carry
//! - [`Error`] — the four error kinds surfaced by schema operations
//!
//! The schema registry itself lives in `ordinal-schema`.

mod field_type;
mod value;

pub use field_type::FieldType;
pub use value::Value;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in schema and field operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A field descriptor or configuration document could not be used to
    /// build a schema. Nothing is constructed when this is returned.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("unknown key: {0}")]
    UnknownKey(String),

    #[error("cannot encode {found} value as {expected}")]
    Encoding {
        expected: FieldType,
        found: &'static str,
    },

    #[error("cannot decode {text:?} as {expected}: {reason}")]
    Decoding {
        expected: FieldType,
        text: String,
        reason: String,
    },
}
