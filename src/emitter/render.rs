//! Plan IR to Rust expression text
//!
//! Every plan renders as the constructor calls that rebuild it. Named type
//! references render as a clone of that type's static so the generated
//! module shares plans the same way the compiler does.

use std::sync::Arc;

use crate::compiler::{Check, CompiledSchema, ItemPlan, ObjectPlan, PropertyPlan, ValueKind};
use crate::schema::Transform;

use super::naming::TypeNames;

const INDENT: &str = "    ";

/// Renders expressions for one compiled schema.
pub(crate) struct Renderer<'a> {
    schemas: &'a CompiledSchema,
    names: &'a [TypeNames],
}

impl<'a> Renderer<'a> {
    pub fn new(schemas: &'a CompiledSchema, names: &'a [TypeNames]) -> Self {
        Self { schemas, names }
    }

    /// `ObjectPlan::new(..)` for a plan, at the given depth.
    pub fn object_plan(&self, plan: &ObjectPlan, depth: usize) -> String {
        let pad = INDENT.repeat(depth + 1);
        let mut out = String::new();
        out.push_str("ObjectPlan::new(\n");
        out.push_str(&format!("{}{:?},\n", pad, plan.name()));
        out.push_str(&format!("{}vec![\n", pad));
        for property in plan.properties() {
            out.push_str(&INDENT.repeat(depth + 2));
            out.push_str(&self.property_plan(property, depth + 2));
            out.push_str(",\n");
        }
        out.push_str(&format!("{}],\n", pad));
        out.push_str(&INDENT.repeat(depth));
        out.push(')');
        out
    }

    fn property_plan(&self, property: &PropertyPlan, depth: usize) -> String {
        let pad = INDENT.repeat(depth + 1);
        let transforms: Vec<&str> = property.transforms().iter().map(transform).collect();

        let mut out = String::new();
        out.push_str("PropertyPlan::new(\n");
        out.push_str(&format!("{}{:?},\n", pad, property.key()));
        out.push_str(&format!("{}{},\n", pad, property.is_required()));
        out.push_str(&format!("{}vec![{}],\n", pad, transforms.join(", ")));
        out.push_str(&format!("{}{},\n", pad, self.checks(property.checks(), depth + 1)));
        out.push_str(&INDENT.repeat(depth));
        out.push(')');
        out
    }

    fn checks(&self, checks: &[Check], depth: usize) -> String {
        let nested = checks
            .iter()
            .any(|c| matches!(c, Check::Fields(_) | Check::Items(_)));
        let rendered: Vec<String> = checks.iter().map(|c| self.check(c, depth + 1)).collect();

        if !nested {
            return format!("vec![{}]", rendered.join(", "));
        }

        let pad = INDENT.repeat(depth + 1);
        let mut out = String::from("vec![\n");
        for check in rendered {
            out.push_str(&format!("{}{},\n", pad, check));
        }
        out.push_str(&INDENT.repeat(depth));
        out.push(']');
        out
    }

    fn check(&self, check: &Check, depth: usize) -> String {
        match check {
            Check::Kind(kind) => format!("Check::Kind({})", value_kind(*kind)),
            Check::Integer => "Check::Integer".to_string(),
            Check::Prefix(prefix) => format!("Check::Prefix({:?}.to_string())", prefix),
            Check::MinLength(n) => format!("Check::MinLength({})", n),
            Check::Fields(plan) => format!("Check::Fields({})", self.shared_plan(plan, depth)),
            Check::Items(item) => format!(
                "Check::Items(Box::new({}))",
                self.item_plan(item, depth)
            ),
        }
    }

    fn item_plan(&self, item: &ItemPlan, depth: usize) -> String {
        format!("ItemPlan::new({})", self.checks(item.checks(), depth))
    }

    fn shared_plan(&self, plan: &Arc<ObjectPlan>, depth: usize) -> String {
        match self.static_for(plan) {
            Some(name) => format!("Arc::clone(&*{})", name),
            None => format!("Arc::new({})", self.object_plan(plan, depth)),
        }
    }

    /// Static holding this exact plan, if it is a top-level type.
    fn static_for(&self, plan: &Arc<ObjectPlan>) -> Option<&str> {
        let type_name = self.schemas.type_of(plan)?;
        self.schemas
            .plans()
            .position(|p| p.name() == type_name)
            .and_then(|i| self.names.get(i))
            .map(|n| n.plan.as_str())
    }
}

fn value_kind(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::String => "ValueKind::String",
        ValueKind::Number => "ValueKind::Number",
        ValueKind::Boolean => "ValueKind::Boolean",
        ValueKind::Object => "ValueKind::Object",
        ValueKind::Array => "ValueKind::Array",
    }
}

fn transform(t: &Transform) -> &'static str {
    match t {
        Transform::Trim => "Transform::Trim",
        Transform::Lowercase => "Transform::Lowercase",
        Transform::ToInteger => "Transform::ToInteger",
    }
}
