//! Rule compiler
//!
//! Turns a [`Schema`](crate::schema::Schema) into one [`ObjectPlan`] per
//! type. Plans are the single source of truth for both runtime modes and
//! for emitted source.

mod compile;
mod plan;

pub use compile::{compile, CompiledSchema};
pub use plan::{Check, ItemPlan, ObjectPlan, PropertyPlan, ValueKind};
