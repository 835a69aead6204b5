//! Generation error types
//!
//! Error codes:
//! - ASSERTIFY_SCHEMA_MALFORMED
//! - ASSERTIFY_UNKNOWN_TYPE
//! - ASSERTIFY_CYCLIC_TYPE
//! - ASSERTIFY_NAME_COLLISION
//!
//! Every generation error is fatal to the call that raised it. No partial
//! output is produced and nothing is retried.

use std::fmt;

use thiserror::Error;

/// Stable codes for generation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorCode {
    /// Property spec or schema document is structurally invalid
    SchemaMalformed,
    /// A property references a type that is not declared
    UnknownType,
    /// Types reference each other in a cycle
    CyclicType,
    /// Two types map to the same routine name
    NameCollision,
}

impl GenerationErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            GenerationErrorCode::SchemaMalformed => "ASSERTIFY_SCHEMA_MALFORMED",
            GenerationErrorCode::UnknownType => "ASSERTIFY_UNKNOWN_TYPE",
            GenerationErrorCode::CyclicType => "ASSERTIFY_CYCLIC_TYPE",
            GenerationErrorCode::NameCollision => "ASSERTIFY_NAME_COLLISION",
        }
    }
}

impl fmt::Display for GenerationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Failure while compiling or emitting validators from a schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("malformed schema: {reason}")]
    Malformed { reason: String },

    #[error("type '{owner}' property '{property}' references unknown type '{target}'")]
    UnknownType {
        owner: String,
        property: String,
        target: String,
    },

    #[error("schema contains recursive type references: {cycle}")]
    CyclicType { cycle: String },

    #[error("types '{first}' and '{second}' both map to routine '{routine}'")]
    NameCollision {
        first: String,
        second: String,
        routine: String,
    },
}

impl GenerationError {
    /// Create a malformed schema error
    pub fn malformed(reason: impl Into<String>) -> Self {
        GenerationError::Malformed {
            reason: reason.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> GenerationErrorCode {
        match self {
            GenerationError::Malformed { .. } => GenerationErrorCode::SchemaMalformed,
            GenerationError::UnknownType { .. } => GenerationErrorCode::UnknownType,
            GenerationError::CyclicType { .. } => GenerationErrorCode::CyclicType,
            GenerationError::NameCollision { .. } => GenerationErrorCode::NameCollision,
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::malformed(err.to_string())
    }
}

/// Result type for schema and generation operations
pub type SchemaResult<T> = Result<T, GenerationError>;
