//! Schema model for assertify
//!
//! A schema maps record type names to ordered property sets. Schemas are
//! immutable once built and are checked for structural problems (missing
//! `properties`/`items`, unknown or cyclic type references) before any
//! validator is generated.

mod errors;
mod loader;
mod types;

pub use errors::{GenerationError, GenerationErrorCode, SchemaResult};
pub use loader::SchemaLoader;
pub use types::{PropertySet, PropertySpec, PropertyType, Schema, Transform};
