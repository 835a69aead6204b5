//! Compiled plan IR
//!
//! A plan is the typed, immutable form of one record type: an ordered list
//! of property plans, each holding its presence rule, its transform
//! pipeline and the checks that run against the transformed value.
//!
//! Check order inside a property is fixed by the compiler:
//! type, isInteger, startsWith, minLength, then nested recursion.
//!
//! Constructors are public because generated validator modules rebuild
//! their plans from these types.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::schema::Transform;

/// Primitive category a value must belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl ValueKind {
    /// Returns the category name used in messages
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Object => "object",
            ValueKind::Array => "array",
        }
    }

    /// Whether the value belongs to this category. `null` belongs to none.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ValueKind::String => value.is_string(),
            ValueKind::Number => value.is_number(),
            ValueKind::Boolean => value.is_boolean(),
            ValueKind::Object => value.is_object(),
            ValueKind::Array => value.is_array(),
        }
    }
}

/// One check step run against a present, transformed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    /// Value must belong to the category
    Kind(ValueKind),
    /// Number must be whole
    Integer,
    /// String must begin with the literal prefix
    Prefix(String),
    /// String character count or array element count must be at least N
    MinLength(usize),
    /// Object must satisfy the nested plan
    Fields(Arc<ObjectPlan>),
    /// Every array element must satisfy the item plan
    Items(Box<ItemPlan>),
}

/// Checks applied to each array element. The item spec's own transforms
/// are dropped; object elements still carry their nested rewrites.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPlan {
    checks: Vec<Check>,
}

impl ItemPlan {
    pub fn new(checks: Vec<Check>) -> Self {
        Self { checks }
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }
}

/// Operation sequence for one property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPlan {
    key: String,
    required: bool,
    transforms: Vec<Transform>,
    checks: Vec<Check>,
}

impl PropertyPlan {
    pub fn new(
        key: impl Into<String>,
        required: bool,
        transforms: Vec<Transform>,
        checks: Vec<Check>,
    ) -> Self {
        Self {
            key: key.into(),
            required,
            transforms,
            checks,
        }
    }

    /// Property name
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Reads this property's value from a record.
    pub fn lookup<'r>(&self, record: &'r Map<String, Value>) -> Option<&'r Value> {
        record.get(&self.key)
    }
}

/// Plan for one record type, properties in declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPlan {
    name: String,
    properties: Vec<PropertyPlan>,
}

impl ObjectPlan {
    pub fn new(name: impl Into<String>, properties: Vec<PropertyPlan>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Type name used in failure messages. Inline nested plans are named
    /// by their path, e.g. `Product.seller`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &[PropertyPlan] {
        &self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_kind_matches() {
        assert!(ValueKind::String.matches(&json!("x")));
        assert!(ValueKind::Number.matches(&json!(1.5)));
        assert!(ValueKind::Boolean.matches(&json!(false)));
        assert!(ValueKind::Object.matches(&json!({})));
        assert!(ValueKind::Array.matches(&json!([])));

        assert!(!ValueKind::Object.matches(&json!([])));
        assert!(!ValueKind::Number.matches(&json!("1")));
    }

    #[test]
    fn test_null_matches_no_kind() {
        let null = Value::Null;
        for kind in [
            ValueKind::String,
            ValueKind::Number,
            ValueKind::Boolean,
            ValueKind::Object,
            ValueKind::Array,
        ] {
            assert!(!kind.matches(&null), "{} matched null", kind.name());
        }
    }

    #[test]
    fn test_property_lookup() {
        let plan = PropertyPlan::new("name", true, vec![], vec![Check::Kind(ValueKind::String)]);
        let record = json!({ "name": "Ada", "other": 1 });
        let record = record.as_object().unwrap();

        assert_eq!(plan.lookup(record), Some(&json!("Ada")));
        let missing = PropertyPlan::new("age", true, vec![], vec![]);
        assert_eq!(missing.lookup(record), None);
    }
}
