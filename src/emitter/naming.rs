//! Identifier derivation for emitted items

use std::collections::HashMap;

use crate::compiler::CompiledSchema;
use crate::schema::{GenerationError, SchemaResult};

/// Identifiers emitted for one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TypeNames {
    /// `validate_user_profile`
    pub routine: String,
    /// `USER_PROFILE_PLAN`
    pub plan: String,
}

/// Converts a type name to snake_case.
///
/// Word boundaries are lower-to-upper transitions, the last capital of an
/// acronym (`HTTPServer` -> `http_server`) and any non-alphanumeric
/// character. Non-ASCII characters count as separators.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            push_separator(&mut out);
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_lower)
            {
                push_separator(&mut out);
            }
        }
        out.push(c.to_ascii_lowercase());
    }

    out.trim_end_matches('_').to_string()
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('_') {
        out.push('_');
    }
}

/// Derives routine and static names for every type, rejecting collisions.
pub(crate) fn type_names(schemas: &CompiledSchema) -> SchemaResult<Vec<TypeNames>> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut names = Vec::with_capacity(schemas.len());

    for plan in schemas.plans() {
        let snake = snake_case(plan.name());
        if snake.is_empty() {
            return Err(GenerationError::malformed(format!(
                "type name '{}' has no identifier characters",
                plan.name()
            )));
        }

        let routine = format!("validate_{}", snake);
        if let Some(first) = seen.get(&routine) {
            return Err(GenerationError::NameCollision {
                first: first.to_string(),
                second: plan.name().to_string(),
                routine,
            });
        }
        seen.insert(routine.clone(), plan.name());

        let upper = snake.to_ascii_uppercase();
        let plan_static = if upper.starts_with(|c: char| c.is_ascii_digit()) {
            format!("_{}_PLAN", upper)
        } else {
            format!("{}_PLAN", upper)
        };
        names.push(TypeNames {
            routine,
            plan: plan_static,
        });
    }

    Ok(names)
}
