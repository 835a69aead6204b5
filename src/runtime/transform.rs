//! Transform pipeline
//!
//! Transforms never fail. A transform that does not apply to the value it
//! receives (trim on a number, toInteger on text that is not numeric) leaves
//! the value unchanged and the following type check judges it.

use serde_json::{Number, Value};

use crate::schema::Transform;

/// Applies each transform in order, producing a new value.
pub fn apply_all(transforms: &[Transform], value: &Value) -> Value {
    transforms
        .iter()
        .fold(value.clone(), |current, transform| apply(*transform, current))
}

/// Applies one transform.
pub fn apply(transform: Transform, value: Value) -> Value {
    match (transform, value) {
        (Transform::Trim, Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.len() == s.len() {
                Value::String(s)
            } else {
                Value::String(trimmed.to_string())
            }
        }
        (Transform::Lowercase, Value::String(s)) => Value::String(s.to_lowercase()),
        (Transform::ToInteger, Value::String(s)) => match parse_integer(&s) {
            Some(n) => n,
            None => Value::String(s),
        },
        (Transform::ToInteger, Value::Number(n)) => truncate(&n),
        (_, other) => other,
    }
}

/// Parses text as an integer, or as a finite decimal truncated toward zero.
fn parse_integer(text: &str) -> Option<Value> {
    let text = text.trim();
    if let Ok(i) = text.parse::<i64>() {
        return Some(Value::from(i));
    }
    if let Ok(u) = text.parse::<u64>() {
        return Some(Value::from(u));
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(whole(f.trunc())),
        _ => None,
    }
}

fn truncate(n: &Number) -> Value {
    if n.is_i64() || n.is_u64() {
        return Value::Number(n.clone());
    }
    match n.as_f64() {
        Some(f) => whole(f.trunc()),
        None => Value::Number(n.clone()),
    }
}

/// Represents a whole f64 as an integer when it fits.
fn whole(f: f64) -> Value {
    if f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Value::from(f as i64)
    } else {
        Number::from_f64(f).map_or(Value::Null, Value::Number)
    }
}
