//! Ordered field registry for Ordinal.
//!
//! A [`Schema`] is built once from a configuration mapping of field keys to
//! [`FieldDescriptor`]s. Each key gets a [`Field`] (a single-value codec with
//! a default) and a stable zero-based offset in the order the keys were
//! configured. Record layers use those offsets for positional storage and
//! route every per-value call through the schema by key.
//!
//! - [`FieldDescriptor`] — type tag plus optional default, as configured
//! - [`Field`] — text codec and default for one type tag
//! - [`Schema`] — immutable keyed registry with offsets
//! - [`SchemaConfig`] — order-preserving configuration document
//!
//! Schemas are immutable after construction and can be shared across
//! threads without synchronization.

mod config;
mod descriptor;
mod field;
mod schema;

pub use config::SchemaConfig;
pub use descriptor::FieldDescriptor;
pub use field::Field;
pub use ordinal_types::{Error, FieldType, Result, Value};
pub use schema::Schema;
