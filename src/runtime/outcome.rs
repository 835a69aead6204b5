//! Call options and call results

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ValidationError;

/// Per-call options. `verbose` selects the collecting mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateOptions {
    #[serde(default)]
    pub verbose: bool,
}

impl ValidateOptions {
    /// Assertion mode: stop at the first failing property
    pub fn assertion() -> Self {
        Self { verbose: false }
    }

    /// Verbose mode: evaluate every property and report all failures
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

/// Verbose-mode report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True iff `errors` is empty
    pub is_valid: bool,
    /// At most one error per failing property, in declared order
    pub errors: Vec<ValidationError>,
    /// Record with every applied transform
    pub value: Value,
}

/// What a successful call returns, depending on the mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Assertion mode: the transformed record
    Valid(Value),
    /// Verbose mode: the full report
    Report(ValidationResult),
}

impl Outcome {
    /// Whether the record passed every check
    pub fn is_valid(&self) -> bool {
        match self {
            Outcome::Valid(_) => true,
            Outcome::Report(report) => report.is_valid,
        }
    }

    /// The (possibly transformed) record
    pub fn value(&self) -> &Value {
        match self {
            Outcome::Valid(value) => value,
            Outcome::Report(report) => &report.value,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Outcome::Valid(value) => value,
            Outcome::Report(report) => report.value,
        }
    }

    /// The verbose report, if this outcome came from verbose mode
    pub fn report(&self) -> Option<&ValidationResult> {
        match self {
            Outcome::Valid(_) => None,
            Outcome::Report(report) => Some(report),
        }
    }

    pub fn into_report(self) -> Option<ValidationResult> {
        match self {
            Outcome::Valid(_) => None,
            Outcome::Report(report) => Some(report),
        }
    }
}
