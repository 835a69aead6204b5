//! CLI-specific error types
//!
//! Every CLI error ends the process with exit code 1.

use std::io;

use thiserror::Error;

use crate::schema::GenerationError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (files, stdin/stdout)
    IoError,
    /// Record input is not valid JSON
    InvalidInput,
    /// Schema failed to load, compile or emit
    GenerationFailed,
    /// `--type` names a type the schema does not declare
    UnknownType,
    /// The record failed validation
    ValidationFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "ASSERTIFY_CLI_CONFIG_ERROR",
            Self::IoError => "ASSERTIFY_CLI_IO_ERROR",
            Self::InvalidInput => "ASSERTIFY_CLI_INVALID_INPUT",
            Self::GenerationFailed => "ASSERTIFY_CLI_GENERATION_FAILED",
            Self::UnknownType => "ASSERTIFY_CLI_UNKNOWN_TYPE",
            Self::ValidationFailed => "ASSERTIFY_CLI_VALIDATION_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug, Error)]
#[error("{}: {message}", .code.code())]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    pub fn unknown_type(type_name: &str) -> Self {
        Self::new(
            CliErrorCode::UnknownType,
            format!("schema does not declare type '{}'", type_name),
        )
    }

    pub fn validation_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ValidationFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<GenerationError> for CliError {
    fn from(e: GenerationError) -> Self {
        Self::new(
            CliErrorCode::GenerationFailed,
            format!("{} ({})", e, e.code()),
        )
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
