//! Code emitter
//!
//! Renders compiled plans into one Rust source block: a lazily-built static
//! plan and a `pub fn validate_<type>` routine per type. The routines hand
//! their plan to the runtime evaluator and never call the compiler.
//!
//! Emission is deterministic. Identical plans and options produce
//! byte-identical text, and every error is raised before any text exists.

mod naming;
mod render;

pub use naming::snake_case;

use serde_json::Value;

use crate::compiler::{compile, CompiledSchema};
use crate::schema::{Schema, SchemaResult};

use render::Renderer;

/// Default path the emitted code imports the runtime from
pub const DEFAULT_RUNTIME_CRATE: &str = "assertify";

/// Options for [`emit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Crate path the generated code imports the runtime from
    pub runtime_crate: String,
    /// Prepend the `@generated` header
    pub header: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
            header: true,
        }
    }
}

/// Renders every plan of a compiled schema as Rust source.
///
/// # Errors
///
/// - `NameCollision` if two types map to the same routine name
/// - `Malformed` if a type name yields no identifier characters
pub fn emit(schemas: &CompiledSchema, options: &EmitOptions) -> SchemaResult<String> {
    let names = naming::type_names(schemas)?;
    let renderer = Renderer::new(schemas, &names);
    let krate = options.runtime_crate.as_str();

    let mut output = String::new();

    if options.header {
        output.push_str(&format!(
            "// @generated by assertify {}. Do not edit by hand.\n",
            env!("CARGO_PKG_VERSION")
        ));
        output.push_str("// Regenerate from the schema instead.\n\n");
    }

    output.push_str("#[allow(unused_imports)]\n");
    output.push_str("use std::sync::{Arc, LazyLock};\n\n");
    output.push_str("#[allow(unused_imports)]\n");
    output.push_str("use serde_json::Value;\n\n");
    output.push_str("#[allow(unused_imports)]\n");
    output.push_str(&format!(
        "use {}::compiler::{{Check, ItemPlan, ObjectPlan, PropertyPlan, ValueKind}};\n",
        krate
    ));
    output.push_str("#[allow(unused_imports)]\n");
    output.push_str(&format!(
        "use {}::runtime::{{Outcome, ValidateOptions, ValidationFailure}};\n",
        krate
    ));
    output.push_str("#[allow(unused_imports)]\n");
    output.push_str(&format!("use {}::schema::Transform;\n", krate));

    for (plan, ids) in schemas.plans().zip(&names) {
        output.push('\n');
        output.push_str(&format!(
            "static {}: LazyLock<Arc<ObjectPlan>> = LazyLock::new(|| {{\n",
            ids.plan
        ));
        output.push_str(&format!("    Arc::new({})\n", renderer.object_plan(plan, 1)));
        output.push_str("});\n\n");

        output.push_str(&format!("/// Validates a `{}` record.\n", plan.name()));
        output.push_str("///\n");
        output.push_str("/// Assertion mode returns the transformed record or the first failure.\n");
        output.push_str("/// Verbose mode returns a report of every failing property.\n");
        output.push_str(&format!(
            "pub fn {}(data: &Value, options: &ValidateOptions) -> Result<Outcome, ValidationFailure> {{\n",
            ids.routine
        ));
        output.push_str(&format!(
            "    {}::runtime::validate(&{}, data, options)\n",
            krate, ids.plan
        ));
        output.push_str("}\n");

        tracing::debug!(type_name = plan.name(), routine = %ids.routine, "emitted routine");
    }

    Ok(output)
}

/// Compiles a schema document and emits its validators with default options.
///
/// # Errors
///
/// Any `GenerationError` from parsing, compiling or emitting. No text is
/// produced on error.
pub fn generate_validators_string(schema: &Value) -> SchemaResult<String> {
    let schema = Schema::from_value(schema)?;
    let compiled = compile(&schema)?;
    emit(&compiled, &EmitOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{GenerationError, GenerationErrorCode};
    use serde_json::json;

    fn test_schema() -> Value {
        json!({
            "Test": {
                "name": { "type": "string", "minLength": 5 }
            }
        })
    }

    #[test]
    fn test_emits_routine_and_plan() {
        let source = generate_validators_string(&test_schema()).unwrap();
        assert!(source.starts_with("// @generated by assertify "));
        assert!(source.contains("static TEST_PLAN: LazyLock<Arc<ObjectPlan>>"));
        assert!(source.contains(
            "pub fn validate_test(data: &Value, options: &ValidateOptions) -> Result<Outcome, ValidationFailure> {"
        ));
        assert!(source.contains("assertify::runtime::validate(&TEST_PLAN, data, options)"));
        assert!(source.contains("Check::MinLength(5)"));
    }

    #[test]
    fn test_emission_is_deterministic() {
        let a = generate_validators_string(&test_schema()).unwrap();
        let b = generate_validators_string(&test_schema()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_runtime_crate_without_header() {
        let compiled = compile(&Schema::from_value(&test_schema()).unwrap()).unwrap();
        let source = emit(
            &compiled,
            &EmitOptions {
                runtime_crate: "crate::validation".into(),
                header: false,
            },
        )
        .unwrap();

        assert!(!source.contains("@generated"));
        assert!(source.contains("use crate::validation::runtime::{Outcome, ValidateOptions, ValidationFailure};"));
        assert!(source.contains("crate::validation::runtime::validate(&TEST_PLAN, data, options)"));
    }

    #[test]
    fn test_types_emitted_in_declaration_order() {
        let source = generate_validators_string(&json!({
            "Zeta": { "a": { "type": "boolean" } },
            "Alpha": { "b": { "type": "boolean" } }
        }))
        .unwrap();

        let zeta = source.find("pub fn validate_zeta(").unwrap();
        let alpha = source.find("pub fn validate_alpha(").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_cyclic_schema_yields_no_text() {
        let result = generate_validators_string(&json!({
            "A": { "b": { "type": "B" } },
            "B": { "a": { "type": "A" } }
        }));
        assert_eq!(
            result,
            Err(GenerationError::CyclicType {
                cycle: "A -> B -> A".into()
            })
        );
    }

    #[test]
    fn test_malformed_schema_yields_no_text() {
        let err = generate_validators_string(&json!({
            "A": { "b": { "type": "object" } }
        }))
        .unwrap_err();
        assert_eq!(err.code(), GenerationErrorCode::SchemaMalformed);

        let err = generate_validators_string(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(err.code(), GenerationErrorCode::SchemaMalformed);
    }
}
