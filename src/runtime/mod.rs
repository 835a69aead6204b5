//! Validation runtime
//!
//! Executes compiled plans against JSON records. Generated routines call
//! [`validate`] with their static plan; [`crate::Validators`] calls it with
//! plans compiled in-process. Both paths share the same evaluator.
//!
//! The runtime is pure: no I/O, no shared mutable state, no logging on the
//! validation path.

mod errors;
mod evaluator;
mod outcome;
pub mod transform;

pub use errors::{ErrorKind, ValidationError, ValidationFailure};
pub use evaluator::ROOT_PROPERTY;
pub use outcome::{Outcome, ValidateOptions, ValidationResult};

use serde_json::Value;

use crate::compiler::ObjectPlan;
use evaluator::{evaluate, Mode};

/// Validates `data` against `plan` in the mode `options` selects.
///
/// Assertion mode returns `Ok(Outcome::Valid(..))` or the first failure as
/// `Err`. Verbose mode always returns `Ok(Outcome::Report(..))`.
pub fn validate(
    plan: &ObjectPlan,
    data: &Value,
    options: &ValidateOptions,
) -> Result<Outcome, ValidationFailure> {
    if options.verbose {
        Ok(Outcome::Report(report(plan, data)))
    } else {
        assert(plan, data).map(Outcome::Valid)
    }
}

/// Assertion mode: the transformed record, or the first failure.
pub fn assert(plan: &ObjectPlan, data: &Value) -> Result<Value, ValidationFailure> {
    let evaluation = evaluate(plan, data, Mode::Assert);
    match evaluation.errors.into_iter().next() {
        Some(error) => Err(ValidationFailure::new(error)),
        None => Ok(evaluation.value),
    }
}

/// Verbose mode: every failing property, plus the transformed record.
pub fn report(plan: &ObjectPlan, data: &Value) -> ValidationResult {
    let evaluation = evaluate(plan, data, Mode::Verbose);
    ValidationResult {
        is_valid: evaluation.errors.is_empty(),
        errors: evaluation.errors,
        value: evaluation.value,
    }
}
