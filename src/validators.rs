//! In-process validators
//!
//! Compiles a schema once and validates records against it without a
//! generation step. Handles run the same evaluator the emitted routines
//! call, so both paths produce identical outcomes and messages.

use std::sync::Arc;

use serde_json::Value;

use crate::compiler::{compile, CompiledSchema, ObjectPlan};
use crate::emitter::{emit, EmitOptions};
use crate::runtime::{self, Outcome, ValidateOptions, ValidationFailure, ValidationResult};
use crate::schema::{Schema, SchemaResult};

/// Compiled validators for every type of a schema.
///
/// Cheap to clone; plans are shared.
#[derive(Debug, Clone)]
pub struct Validators {
    compiled: CompiledSchema,
}

impl Validators {
    /// Compiles every type of a schema.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` for unknown or cyclic type references.
    pub fn new(schema: &Schema) -> SchemaResult<Self> {
        Ok(Self {
            compiled: compile(schema)?,
        })
    }

    /// Parses and compiles a schema document.
    pub fn from_value(schema: &Value) -> SchemaResult<Self> {
        Self::new(&Schema::from_value(schema)?)
    }

    /// Parses and compiles schema JSON text.
    pub fn from_json(text: &str) -> SchemaResult<Self> {
        Self::new(&Schema::from_json(text)?)
    }

    /// Gets the validator for a type, if declared
    pub fn get(&self, type_name: &str) -> Option<Validator<'_>> {
        self.compiled.get(type_name).map(|plan| Validator { plan })
    }

    /// Declared type names, in declaration order
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.compiled.plans().map(|p| p.name())
    }

    pub fn compiled(&self) -> &CompiledSchema {
        &self.compiled
    }

    /// Renders these validators as Rust source.
    pub fn emit(&self, options: &EmitOptions) -> SchemaResult<String> {
        emit(&self.compiled, options)
    }
}

/// Validator for one type.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    plan: &'a Arc<ObjectPlan>,
}

impl<'a> Validator<'a> {
    /// Type this validator checks
    pub fn type_name(&self) -> &str {
        self.plan.name()
    }

    /// Validates in the mode `options` selects. Same contract as an emitted
    /// `validate_<type>` routine.
    pub fn validate(
        &self,
        data: &Value,
        options: &ValidateOptions,
    ) -> Result<Outcome, ValidationFailure> {
        runtime::validate(self.plan, data, options)
    }

    /// Assertion mode: the transformed record, or the first failure.
    pub fn assert(&self, data: &Value) -> Result<Value, ValidationFailure> {
        runtime::assert(self.plan, data)
    }

    /// Verbose mode: every failing property, plus the transformed record.
    pub fn report(&self, data: &Value) -> ValidationResult {
        runtime::report(self.plan, data)
    }
}
