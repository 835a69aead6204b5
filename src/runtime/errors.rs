//! Validation failure types
//!
//! Every failure carries the property it concerns, the rule that rejected
//! it, and a complete message of the form
//! `Validation failed for {Type}: {detail}.`

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Which step of a property's plan rejected it. Serializes as the rule tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// Required property absent
    #[serde(rename = "required")]
    MissingProperty,
    /// Value not of the declared category
    #[serde(rename = "type")]
    TypeMismatch,
    /// Number not whole
    #[serde(rename = "isInteger")]
    IntegerMismatch,
    /// String missing the declared prefix
    #[serde(rename = "startsWith")]
    PrefixMismatch,
    /// String or array shorter than `minLength`
    #[serde(rename = "minLength")]
    LengthTooShort,
    /// Nested object failed its own plan
    #[serde(rename = "properties")]
    NestedInvalid,
    /// An array element failed the item plan
    #[serde(rename = "items")]
    ArrayItemInvalid,
}

impl ErrorKind {
    /// Returns the rule tag
    pub fn rule(&self) -> &'static str {
        match self {
            ErrorKind::MissingProperty => "required",
            ErrorKind::TypeMismatch => "type",
            ErrorKind::IntegerMismatch => "isInteger",
            ErrorKind::PrefixMismatch => "startsWith",
            ErrorKind::LengthTooShort => "minLength",
            ErrorKind::NestedInvalid => "properties",
            ErrorKind::ArrayItemInvalid => "items",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rule())
    }
}

/// One recorded failure: `{property, rule, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    property: String,
    #[serde(rename = "rule")]
    kind: ErrorKind,
    message: String,
    /// Message body without the type prefix; reused when wrapping
    #[serde(skip)]
    detail: String,
}

impl ValidationError {
    pub(crate) fn new(
        type_name: &str,
        property: impl Into<String>,
        kind: ErrorKind,
        detail: String,
    ) -> Self {
        Self {
            property: property.into(),
            kind,
            message: format!("Validation failed for {}: {}.", type_name, detail),
            detail,
        }
    }

    /// Property the failure concerns (`$root` for a non-object record)
    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Rule tag, e.g. `minLength`
    pub fn rule(&self) -> &'static str {
        self.kind.rule()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Assertion-mode failure: the first failing property's error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .error.message)]
pub struct ValidationFailure {
    error: ValidationError,
}

impl ValidationFailure {
    pub(crate) fn new(error: ValidationError) -> Self {
        Self { error }
    }

    /// The recorded failure
    pub fn error(&self) -> &ValidationError {
        &self.error
    }

    pub fn into_error(self) -> ValidationError {
        self.error
    }
}
