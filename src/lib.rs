//! assertify - compiles declarative record schemas into validator routines
//!
//! A schema maps type names to property specs. Each type compiles into an
//! immutable plan; plans are either emitted as Rust source
//! ([`generate_validators_string`], [`emit`]) or run in-process through
//! [`Validators`]. Both paths execute the same runtime evaluator.
//!
//! ```ignore
//! let validators = Validators::from_value(&schema)?;
//! let user = validators.get("User").unwrap();
//! let record = user.assert(&data)?;
//! ```

pub mod cli;
pub mod compiler;
pub mod emitter;
pub mod logging;
pub mod runtime;
pub mod schema;
pub mod validators;

pub use compiler::{compile, CompiledSchema};
pub use emitter::{emit, generate_validators_string, EmitOptions};
pub use runtime::{
    ErrorKind, Outcome, ValidateOptions, ValidationError, ValidationFailure, ValidationResult,
};
pub use schema::{GenerationError, GenerationErrorCode, Schema, SchemaLoader};
pub use validators::{Validator, Validators};
