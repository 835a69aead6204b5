//! Schema to plan compilation
//!
//! Compilation runs in two passes:
//! 1. Reference check: every named type reference must resolve, and the
//!    reference graph must be acyclic.
//! 2. Plan construction: each type is compiled once. Properties that
//!    reference a type share that type's plan.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use crate::schema::{GenerationError, PropertySet, PropertySpec, PropertyType, Schema, SchemaResult};

use super::plan::{Check, ItemPlan, ObjectPlan, PropertyPlan, ValueKind};

/// Compiled plans for every type of a schema, in declaration order.
#[derive(Debug, Clone)]
pub struct CompiledSchema {
    plans: Vec<Arc<ObjectPlan>>,
}

impl CompiledSchema {
    /// Gets a type's plan by name
    pub fn get(&self, type_name: &str) -> Option<&Arc<ObjectPlan>> {
        self.plans.iter().find(|p| p.name() == type_name)
    }

    /// Iterates plans in declaration order
    pub fn plans(&self) -> impl Iterator<Item = &Arc<ObjectPlan>> {
        self.plans.iter()
    }

    /// Finds the top-level type whose plan is this exact instance.
    pub fn type_of(&self, plan: &Arc<ObjectPlan>) -> Option<&str> {
        self.plans
            .iter()
            .find(|p| Arc::ptr_eq(p, plan))
            .map(|p| p.name())
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

/// Compiles every type of a schema.
///
/// # Errors
///
/// - `UnknownType` if a property references an undeclared type
/// - `CyclicType` if types reference each other in a cycle
pub fn compile(schema: &Schema) -> SchemaResult<CompiledSchema> {
    check_references(schema)?;

    let mut compiler = Compiler {
        schema,
        cache: HashMap::new(),
    };
    let plans = schema
        .types()
        .map(|(name, _)| compiler.type_plan(name))
        .collect::<SchemaResult<Vec<_>>>()?;

    tracing::debug!(types = plans.len(), "compiled schema");
    Ok(CompiledSchema { plans })
}

struct Compiler<'s> {
    schema: &'s Schema,
    cache: HashMap<&'s str, Arc<ObjectPlan>>,
}

impl<'s> Compiler<'s> {
    fn type_plan(&mut self, name: &'s str) -> SchemaResult<Arc<ObjectPlan>> {
        if let Some(plan) = self.cache.get(name) {
            return Ok(Arc::clone(plan));
        }

        let properties = self.schema.get(name).ok_or_else(|| {
            GenerationError::malformed(format!("type '{}' is not declared", name))
        })?;
        let plan = Arc::new(self.object_plan(name.to_string(), properties)?);

        tracing::debug!(
            type_name = name,
            properties = plan.properties().len(),
            "compiled type plan"
        );
        self.cache.insert(name, Arc::clone(&plan));
        Ok(plan)
    }

    fn object_plan(&mut self, name: String, properties: &'s PropertySet) -> SchemaResult<ObjectPlan> {
        let mut plans = Vec::with_capacity(properties.len());
        for (key, spec) in properties.iter() {
            let checks = self.checks(&format!("{}.{}", name, key), spec)?;
            plans.push(PropertyPlan::new(
                key,
                spec.required,
                spec.transform.clone(),
                checks,
            ));
        }
        Ok(ObjectPlan::new(name, plans))
    }

    /// Builds the check sequence for a spec: type, isInteger, startsWith,
    /// minLength, nested.
    fn checks(&mut self, path: &str, spec: &'s PropertySpec) -> SchemaResult<Vec<Check>> {
        let checks = match &spec.property_type {
            PropertyType::String {
                min_length,
                starts_with,
            } => {
                let mut checks = vec![Check::Kind(ValueKind::String)];
                if let Some(prefix) = starts_with {
                    checks.push(Check::Prefix(prefix.clone()));
                }
                if let Some(n) = min_length {
                    checks.push(Check::MinLength(*n));
                }
                checks
            }
            PropertyType::Number { is_integer } => {
                let mut checks = vec![Check::Kind(ValueKind::Number)];
                if *is_integer {
                    checks.push(Check::Integer);
                }
                checks
            }
            PropertyType::Boolean => vec![Check::Kind(ValueKind::Boolean)],
            PropertyType::Object { properties } => vec![
                Check::Kind(ValueKind::Object),
                Check::Fields(Arc::new(self.object_plan(path.to_string(), properties)?)),
            ],
            PropertyType::Array { min_length, items } => {
                if !items.transform.is_empty() {
                    tracing::warn!(path, "array items are not transformed; ignoring item transform");
                }
                let mut checks = vec![Check::Kind(ValueKind::Array)];
                if let Some(n) = min_length {
                    checks.push(Check::MinLength(*n));
                }
                let item_checks = self.checks(&format!("{}[]", path), items)?;
                checks.push(Check::Items(Box::new(ItemPlan::new(item_checks))));
                checks
            }
            PropertyType::Named(target) => vec![
                Check::Kind(ValueKind::Object),
                Check::Fields(self.type_plan(target)?),
            ],
        };
        Ok(checks)
    }
}

/// A named type reference found inside a type's property tree.
struct Reference<'s> {
    property: String,
    target: &'s str,
}

fn collect_references<'s>(properties: &'s PropertySet, prefix: &str, out: &mut Vec<Reference<'s>>) {
    for (key, spec) in properties.iter() {
        let path = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        };
        collect_spec_references(spec, path, out);
    }
}

fn collect_spec_references<'s>(spec: &'s PropertySpec, path: String, out: &mut Vec<Reference<'s>>) {
    match &spec.property_type {
        PropertyType::Named(target) => out.push(Reference {
            property: path,
            target: target.as_str(),
        }),
        PropertyType::Object { properties } => collect_references(properties, &path, out),
        PropertyType::Array { items, .. } => collect_spec_references(items, format!("{}[]", path), out),
        PropertyType::String { .. } | PropertyType::Number { .. } | PropertyType::Boolean => {}
    }
}

/// Rejects unknown type references and reference cycles.
fn check_references(schema: &Schema) -> SchemaResult<()> {
    let mut deps: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for (owner, properties) in schema.types() {
        let mut refs = Vec::new();
        collect_references(properties, "", &mut refs);

        for r in &refs {
            if schema.get(r.target).is_none() {
                return Err(GenerationError::UnknownType {
                    owner: owner.to_string(),
                    property: r.property.clone(),
                    target: r.target.to_string(),
                });
            }
        }
        deps.insert(owner, refs.iter().map(|r| r.target).collect());
    }

    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        Visiting,
        Visited,
    }

    fn visit<'s>(
        node: &'s str,
        deps: &BTreeMap<&'s str, BTreeSet<&'s str>>,
        marks: &mut BTreeMap<&'s str, Mark>,
        stack: &mut Vec<&'s str>,
    ) -> SchemaResult<()> {
        match marks.get(node) {
            Some(Mark::Visited) => return Ok(()),
            Some(Mark::Visiting) => {
                let start = stack.iter().position(|s| *s == node).unwrap_or(0);
                let mut cycle: Vec<&str> = stack[start..].to_vec();
                cycle.push(node);
                return Err(GenerationError::CyclicType {
                    cycle: cycle.join(" -> "),
                });
            }
            None => {}
        }

        marks.insert(node, Mark::Visiting);
        stack.push(node);
        if let Some(children) = deps.get(node) {
            for child in children {
                visit(child, deps, marks, stack)?;
            }
        }
        stack.pop();
        marks.insert(node, Mark::Visited);
        Ok(())
    }

    let mut marks = BTreeMap::new();
    let mut stack = Vec::new();
    for (name, _) in schema.types() {
        visit(name, &deps, &mut marks, &mut stack)?;
    }
    Ok(())
}
