//! Extension traits

use crate::{AppContext, ConfigReader};
use rill_core::{AttributeType, RuntimeError, ValidationError, Value};
use serde::Serialize;
use std::collections::HashMap;

/// Metadata about a function parameter
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    pub kinds: &'static [AttributeType],
    pub description: &'static str,
}

impl ArgMeta {
    pub const fn new(
        name: &'static str,
        kinds: &'static [AttributeType],
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kinds,
            description,
        }
    }
}

/// Registration metadata for a scalar function
#[derive(Debug, Clone, Serialize)]
pub struct FunctionMeta {
    pub namespace: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub args: &'static [ArgMeta],
    pub returns: AttributeType,
    pub examples: &'static [&'static str],
}

impl FunctionMeta {
    /// Key the host looks the function up by, e.g. `math:floor`.
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.namespace, self.name)
    }
}

/// Static descriptor of one argument expression from the host's
/// expression tree. Only the declared kind matters to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgExpr {
    return_type: AttributeType,
}

impl ArgExpr {
    pub const fn of(return_type: AttributeType) -> Self {
        Self { return_type }
    }

    pub fn return_type(&self) -> AttributeType {
        self.return_type
    }
}

/// A scalar function pluggable into the host expression engine.
///
/// `validate` runs exactly once at query-compile time; `evaluate` runs once
/// per record. Lifecycle and state hooks exist so the host can treat every
/// extension uniformly; stateless functions keep the defaults. Implementors
/// are invoked concurrently, so any extension-local state needs interior
/// mutability behind its own synchronization.
pub trait ScalarFunction: Send + Sync {
    fn meta(&self) -> FunctionMeta;

    /// Static return kind, independent of any input.
    fn return_type(&self) -> AttributeType;

    /// Compile-time check of argument count and declared kinds.
    fn validate(
        &self,
        args: &[ArgExpr],
        config: &ConfigReader,
        ctx: &AppContext,
    ) -> Result<(), ValidationError>;

    /// Per-record evaluation of the single argument.
    fn evaluate(&self, value: &Value) -> Result<Value, RuntimeError>;

    /// Multi-argument variant of the uniform contract. Arity-1 functions
    /// keep this default, which funnels into `evaluate`.
    fn evaluate_many(&self, values: &[Value]) -> Result<Value, RuntimeError> {
        match values {
            [single] => self.evaluate(single),
            _ => Err(RuntimeError::arity_mismatch(
                &self.meta().qualified_name(),
                1,
                values.len(),
            )),
        }
    }

    fn start(&self) {}

    fn stop(&self) {}

    /// State captured at a host checkpoint. Stateless functions snapshot
    /// an empty mapping.
    fn snapshot_state(&self) -> HashMap<String, Value> {
        HashMap::new()
    }

    /// Restore from a host checkpoint. Takes `&self`: stateful extensions
    /// hold their state behind interior mutability.
    fn restore_state(&self, _state: &HashMap<String, Value>) {}
}
