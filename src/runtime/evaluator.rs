//! Plan evaluator shared by both runtime modes
//!
//! Per property, in declared order:
//! presence -> transforms -> checks (type, isInteger, startsWith,
//! minLength, nested). The first failing step ends that property.
//!
//! The mode only decides what happens after a property fails:
//! assertion stops, verbose moves on to the next property. Nested objects
//! run in the caller's mode so verbose output carries every nested
//! transform, but only the first nested failure is reported.
//!
//! The caller's record is never mutated. The output record starts as a
//! copy and each present property is replaced by its transformed value.

use serde_json::{Map, Value};

use crate::compiler::{Check, ObjectPlan, PropertyPlan};

use super::errors::{ErrorKind, ValidationError};
use super::transform;

/// Property name reported when the record itself is not an object.
pub const ROOT_PROPERTY: &str = "$root";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Stop after the first failing property
    Assert,
    /// Evaluate every property
    Verbose,
}

/// Output of one evaluation: the rewritten record and failures in order.
#[derive(Debug)]
pub(crate) struct Evaluation {
    pub value: Value,
    pub errors: Vec<ValidationError>,
}

/// A failed check, described relative to the value it ran on.
struct Violation {
    kind: ErrorKind,
    /// e.g. "must be at least 3 characters long"
    text: String,
}

impl Violation {
    fn new(kind: ErrorKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Detail line once attached to a named property.
    fn for_property(&self, key: &str) -> String {
        match self.kind {
            ErrorKind::NestedInvalid => format!("property '{}' is invalid: {}", key, self.text),
            _ => format!("property '{}' {}", key, self.text),
        }
    }
}

/// Evaluates a record against a plan.
pub(crate) fn evaluate(plan: &ObjectPlan, data: &Value, mode: Mode) -> Evaluation {
    let Some(record) = data.as_object() else {
        return Evaluation {
            value: data.clone(),
            errors: vec![ValidationError::new(
                plan.name(),
                ROOT_PROPERTY,
                ErrorKind::TypeMismatch,
                "record must be of type 'object'".to_string(),
            )],
        };
    };

    let mut output = record.clone();
    let mut errors = Vec::new();

    for property in plan.properties() {
        if let Err((kind, detail)) = evaluate_property(property, record, &mut output, mode) {
            errors.push(ValidationError::new(plan.name(), property.key(), kind, detail));
            if mode == Mode::Assert {
                break;
            }
        }
    }

    Evaluation {
        value: Value::Object(output),
        errors,
    }
}

/// Runs one property's operation sequence, writing its transformed value
/// into `output`.
fn evaluate_property(
    property: &PropertyPlan,
    record: &Map<String, Value>,
    output: &mut Map<String, Value>,
    mode: Mode,
) -> Result<(), (ErrorKind, String)> {
    let Some(raw) = property.lookup(record) else {
        if property.is_required() {
            return Err((
                ErrorKind::MissingProperty,
                format!("missing required property '{}'", property.key()),
            ));
        }
        return Ok(());
    };

    let mut value = transform::apply_all(property.transforms(), raw);
    let checked = run_checks(property.checks(), &mut value, mode);
    output.insert(property.key().to_string(), value);

    checked.map_err(|v| (v.kind, v.for_property(property.key())))
}

/// Runs checks in order, stopping at the first violation. Nested object
/// checks replace `value` with the nested output, including inside array
/// elements.
fn run_checks(checks: &[Check], value: &mut Value, mode: Mode) -> Result<(), Violation> {
    for check in checks {
        match check {
            Check::Kind(kind) => {
                if !kind.matches(value) {
                    return Err(Violation::new(
                        ErrorKind::TypeMismatch,
                        format!("must be of type '{}'", kind.name()),
                    ));
                }
            }
            Check::Integer => {
                if !is_whole(value) {
                    return Err(Violation::new(ErrorKind::IntegerMismatch, "must be an integer"));
                }
            }
            Check::Prefix(prefix) => {
                if let Some(s) = value.as_str() {
                    if !s.starts_with(prefix.as_str()) {
                        return Err(Violation::new(
                            ErrorKind::PrefixMismatch,
                            format!("must start with '{}'", prefix),
                        ));
                    }
                }
            }
            Check::MinLength(n) => match value {
                Value::String(s) if s.chars().count() < *n => {
                    return Err(Violation::new(
                        ErrorKind::LengthTooShort,
                        format!("must be at least {} characters long", n),
                    ));
                }
                Value::Array(items) if items.len() < *n => {
                    return Err(Violation::new(
                        ErrorKind::LengthTooShort,
                        format!("must contain at least {} items", n),
                    ));
                }
                _ => {}
            },
            Check::Fields(plan) => {
                let nested = evaluate(plan, value, mode);
                *value = nested.value;
                if let Some(first) = nested.errors.first() {
                    return Err(Violation::new(ErrorKind::NestedInvalid, first.detail()));
                }
            }
            Check::Items(item) => {
                if let Value::Array(elements) = value {
                    for (index, element) in elements.iter_mut().enumerate() {
                        if let Err(v) = run_checks(item.checks(), element, mode) {
                            return Err(Violation::new(
                                ErrorKind::ArrayItemInvalid,
                                format!("item at index {} is invalid: {}", index, v.text),
                            ));
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

fn is_whole(value: &Value) -> bool {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => true,
        Value::Number(n) => n.as_f64().map_or(false, |f| f.fract() == 0.0),
        _ => false,
    }
}
