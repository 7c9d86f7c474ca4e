//! The built-in tuning schema and the validator that checks documents
//! against it.

pub mod schema;
pub mod validate;

pub use schema::{BUILTIN_SCHEMA, Schema, SchemaError, SchemaNode, SchemaObject, TypeTag};
pub use validate::{ValidationError, ValidationErrorKind, validate};
