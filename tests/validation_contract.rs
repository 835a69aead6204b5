//! Validation Contract Tests
//!
//! Runtime behavior every validator exhibits, exercised in-process:
//! - Properties are evaluated in declared order
//! - Assertion mode stops at the first failing property
//! - Verbose mode reports at most one error per property
//! - Transforms run before checks and their results appear in `value`
//! - Validation is deterministic, idempotent and never mutates its input

use std::sync::Arc;
use std::thread;

use assertify::{ErrorKind, ValidateOptions, Validators};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn person_validators() -> Validators {
    Validators::from_value(&json!({
        "Person": {
            "name": { "type": "string", "minLength": 3 },
            "age": { "type": "number" }
        }
    }))
    .unwrap()
}

fn rules(validators: &Validators, type_name: &str, data: &Value) -> Vec<&'static str> {
    validators
        .get(type_name)
        .unwrap()
        .report(data)
        .errors
        .iter()
        .map(|e| e.rule())
        .collect()
}

// =============================================================================
// Assertion Mode Tests
// =============================================================================

/// The first failing property wins, even when later ones fail too.
#[test]
fn test_assertion_first_failure_wins() {
    let validators = person_validators();
    let person = validators.get("Person").unwrap();

    let err = person.assert(&json!({ "name": "Jo", "age": 30 })).unwrap_err();
    assert_eq!(err.error().property(), "name");
    assert_eq!(err.error().kind(), ErrorKind::LengthTooShort);

    let err = person.assert(&json!({ "name": "John Doe" })).unwrap_err();
    assert_eq!(err.error().property(), "age");
    assert_eq!(err.error().kind(), ErrorKind::MissingProperty);
    assert_eq!(
        err.to_string(),
        "Validation failed for Person: missing required property 'age'."
    );
}

#[test]
fn test_assertion_success_returns_record() {
    let validators = person_validators();
    let data = json!({ "name": "John Doe", "age": 30, "nickname": "JD" });
    let value = validators.get("Person").unwrap().assert(&data).unwrap();
    assert_eq!(value, data);
}

// =============================================================================
// Verbose Mode Tests
// =============================================================================

/// Errors follow declared property order, not record order.
#[test]
fn test_verbose_errors_in_declared_order() {
    let validators = person_validators();
    let report = validators
        .get("Person")
        .unwrap()
        .report(&json!({ "age": "old", "name": "Jo" }));

    assert!(!report.is_valid);
    let props: Vec<&str> = report.errors.iter().map(|e| e.property()).collect();
    assert_eq!(props, vec!["name", "age"]);
}

#[test]
fn test_verbose_missing_and_short() {
    let validators = person_validators();
    assert_eq!(
        rules(&validators, "Person", &json!({ "name": "Jo" })),
        vec!["minLength", "required"]
    );
}

/// One error per property: a type mismatch ends that property's checks.
#[test]
fn test_verbose_one_error_per_property() {
    let validators = Validators::from_value(&json!({
        "User": {
            "userClass": { "type": "string", "startsWith": "class-", "minLength": 10 }
        }
    }))
    .unwrap();

    assert_eq!(rules(&validators, "User", &json!({ "userClass": 7 })), vec!["type"]);
    assert_eq!(
        rules(&validators, "User", &json!({ "userClass": "cls" })),
        vec!["startsWith"]
    );
    assert_eq!(
        rules(&validators, "User", &json!({ "userClass": "class-a" })),
        vec!["minLength"]
    );
}

#[test]
fn test_verbose_serializes_as_result_object() {
    let validators = person_validators();
    let report = validators.get("Person").unwrap().report(&json!({ "name": "Jo", "age": 1 }));

    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "isValid": false,
            "errors": [{
                "property": "name",
                "rule": "minLength",
                "message": "Validation failed for Person: property 'name' must be at least 3 characters long."
            }],
            "value": { "name": "Jo", "age": 1 }
        })
    );
}

// =============================================================================
// Transformation Tests
// =============================================================================

#[test]
fn test_trim_lowercase() {
    let validators = Validators::from_value(&json!({
        "User": { "username": { "type": "string", "transform": ["trim", "lowercase"] } }
    }))
    .unwrap();

    let value = validators
        .get("User")
        .unwrap()
        .assert(&json!({ "username": "  TestUser  " }))
        .unwrap();
    assert_eq!(value["username"], json!("testuser"));
}

#[test]
fn test_trim_to_integer() {
    let validators = Validators::from_value(&json!({
        "Seller": { "sellerId": { "type": "number", "transform": ["trim", "toInteger"] } }
    }))
    .unwrap();
    let seller = validators.get("Seller").unwrap();

    assert_eq!(seller.assert(&json!({ "sellerId": "  123  " })).unwrap()["sellerId"], json!(123));

    // Unparsable text is left alone and the type check rejects it.
    let err = seller.assert(&json!({ "sellerId": "abc" })).unwrap_err();
    assert_eq!(err.error().kind(), ErrorKind::TypeMismatch);
}

/// Checks see the transformed value: trimming can make a string too short.
#[test]
fn test_checks_observe_transformed_value() {
    let validators = Validators::from_value(&json!({
        "Doc": { "code": { "type": "string", "minLength": 3, "transform": ["trim"] } }
    }))
    .unwrap();

    let report = validators.get("Doc").unwrap().report(&json!({ "code": "  ab  " }));
    assert!(!report.is_valid);
    assert_eq!(report.errors[0].rule(), "minLength");
    assert_eq!(report.value["code"], json!("ab"));
}

/// Transformed values appear in `value` even when other properties fail.
#[test]
fn test_value_reflects_transforms_despite_failures() {
    let validators = Validators::from_value(&json!({
        "User": {
            "id": { "type": "number", "isInteger": true },
            "username": { "type": "string", "transform": ["trim", "lowercase"] }
        }
    }))
    .unwrap();

    let report = validators
        .get("User")
        .unwrap()
        .report(&json!({ "id": 1.5, "username": " ADA " }));
    assert!(!report.is_valid);
    assert_eq!(report.value, json!({ "id": 1.5, "username": "ada" }));
}

// =============================================================================
// Determinism and Idempotence Tests
// =============================================================================

#[test]
fn test_revalidating_value_is_stable() {
    let validators = Validators::from_value(&json!({
        "User": {
            "username": { "type": "string", "transform": ["trim", "lowercase"] },
            "id": { "type": "number", "transform": ["trim", "toInteger"] }
        }
    }))
    .unwrap();
    let user = validators.get("User").unwrap();

    let first = user.report(&json!({ "username": "  Mixed Case ", "id": " 42.7 " }));
    assert!(first.is_valid);

    let second = user.report(&first.value);
    assert!(second.is_valid);
    assert_eq!(second.value, first.value);
}

#[test]
fn test_input_never_mutated() {
    let validators = Validators::from_value(&json!({
        "User": { "username": { "type": "string", "transform": ["trim"] } }
    }))
    .unwrap();

    let input = json!({ "username": "  spaced  " });
    let snapshot = input.clone();
    let _ = validators.get("User").unwrap().report(&input);
    assert_eq!(input, snapshot);
}

#[test]
fn test_validation_is_deterministic() {
    let validators = person_validators();
    let person = validators.get("Person").unwrap();
    let data = json!({ "name": 1, "age": "x" });

    let first = person.report(&data);
    for _ in 0..100 {
        assert_eq!(person.report(&data), first);
    }
}

/// Compiled validators are shareable across threads.
#[test]
fn test_validators_shared_across_threads() {
    let validators = Arc::new(person_validators());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validators = Arc::clone(&validators);
            thread::spawn(move || {
                let name = "x".repeat(i + 1);
                validators
                    .get("Person")
                    .unwrap()
                    .report(&json!({ "name": name, "age": i }))
                    .is_valid
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![false, false, true, true]);
}

// =============================================================================
// Edge Case Tests
// =============================================================================

#[test]
fn test_null_is_present_but_mistyped() {
    let validators = Validators::from_value(&json!({
        "Doc": { "note": { "type": "string", "required": false } }
    }))
    .unwrap();

    let report = validators.get("Doc").unwrap().report(&json!({ "note": null }));
    assert_eq!(report.errors[0].rule(), "type");
}

#[test]
fn test_non_object_record() {
    let validators = person_validators();
    let err = validators.get("Person").unwrap().assert(&json!(42)).unwrap_err();
    assert_eq!(err.error().property(), "$root");
    assert_eq!(err.error().rule(), "type");
}

#[test]
fn test_min_length_counts_characters() {
    let validators = Validators::from_value(&json!({
        "Doc": { "word": { "type": "string", "minLength": 3 } }
    }))
    .unwrap();
    let doc = validators.get("Doc").unwrap();

    assert!(doc.assert(&json!({ "word": "héé" })).is_ok());
    assert!(doc.assert(&json!({ "word": "日本" })).is_err());
}

#[test]
fn test_array_item_objects() {
    let validators = Validators::from_value(&json!({
        "Order": {
            "lines": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": { "sku": { "type": "string" } }
                }
            }
        }
    }))
    .unwrap();

    let err = validators
        .get("Order")
        .unwrap()
        .assert(&json!({ "lines": [{ "sku": "a" }, {}] }))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation failed for Order: property 'lines' item at index 1 is invalid: missing required property 'sku'."
    );
}

// =============================================================================
// Nested Output Tests
// =============================================================================

/// Object elements carry their nested transforms into `value`.
#[test]
fn test_array_item_objects_keep_nested_transforms() {
    let validators = Validators::from_value(&json!({
        "Order": {
            "lines": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "qty": { "type": "number", "transform": ["trim", "toInteger"] }
                    }
                }
            }
        }
    }))
    .unwrap();
    let order = validators.get("Order").unwrap();

    let report = order.report(&json!({ "lines": [{ "qty": " 5 " }, { "qty": 2 }] }));
    assert!(report.is_valid);
    assert_eq!(report.value, json!({ "lines": [{ "qty": 5 }, { "qty": 2 }] }));

    let value = order.assert(&json!({ "lines": [{ "qty": "7" }] })).unwrap();
    assert_eq!(value["lines"][0]["qty"], json!(7));
}

/// Verbose mode keeps transforming nested properties after a nested failure.
#[test]
fn test_verbose_nested_transforms_survive_failure() {
    let validators = Validators::from_value(&json!({
        "Doc": {
            "s": {
                "type": "object",
                "properties": {
                    "a": { "type": "string" },
                    "b": { "type": "string", "transform": ["trim"] }
                }
            }
        }
    }))
    .unwrap();

    let report = validators.get("Doc").unwrap().report(&json!({ "s": { "b": "  x  " } }));
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].rule(), "properties");
    assert_eq!(
        report.errors[0].message(),
        "Validation failed for Doc: property 's' is invalid: missing required property 'a'."
    );
    assert_eq!(report.value, json!({ "s": { "b": "x" } }));
}
