//! Function registry and compile-time binding

use crate::{AppContext, ArgExpr, ConfigReader, ScalarFunction};
use rill_core::{AttributeType, RuntimeError, ValidationError, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Central registry of scalar functions.
///
/// Registration is explicit and builder-style; the host constructs the
/// registry once at startup, so the set of available functions is fixed
/// before any query compiles against it.
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn ScalarFunction>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    pub fn with_function<F: ScalarFunction + 'static>(mut self, f: F) -> Self {
        let key = f.meta().qualified_name().to_lowercase();
        debug!(function = %key, "registered scalar function");
        self.functions.insert(key, Arc::new(f));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn ScalarFunction> {
        self.functions.get(&name.to_lowercase()).map(|f| f.as_ref())
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Qualified names of all registered functions, for the host's
    /// documentation surface.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve and validate a function call at query-compile time.
    ///
    /// Runs the function's `validate` hook exactly once against the declared
    /// argument kinds. On success the returned handle is what the host
    /// evaluates per record; validation never runs again.
    pub fn bind(
        &self,
        name: &str,
        args: &[ArgExpr],
        config: &ConfigReader,
        ctx: &AppContext,
    ) -> Result<BoundFunction, ValidationError> {
        let func = self
            .functions
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| ValidationError::unknown_function(name))?;
        func.validate(args, config, ctx)?;
        debug!(function = %name, app = %ctx.app_name, arity = args.len(), "bound scalar function");
        Ok(BoundFunction { func })
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated function instance owned by one compiled query.
///
/// Cheap to clone; evaluation is pure, so clones may be driven from
/// different threads without synchronization.
#[derive(Clone)]
pub struct BoundFunction {
    func: Arc<dyn ScalarFunction>,
}

impl BoundFunction {
    pub fn evaluate(&self, value: &Value) -> Result<Value, RuntimeError> {
        self.func.evaluate(value)
    }

    pub fn evaluate_many(&self, values: &[Value]) -> Result<Value, RuntimeError> {
        self.func.evaluate_many(values)
    }

    pub fn return_type(&self) -> AttributeType {
        self.func.return_type()
    }

    pub fn start(&self) {
        self.func.start();
    }

    pub fn stop(&self) {
        self.func.stop();
    }

    pub fn snapshot_state(&self) -> HashMap<String, Value> {
        self.func.snapshot_state()
    }

    pub fn restore_state(&self, state: &HashMap<String, Value>) {
        self.func.restore_state(state);
    }
}

impl std::fmt::Debug for BoundFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundFunction")
            .field("function", &self.func.meta().qualified_name())
            .finish()
    }
}
