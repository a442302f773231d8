//! Rill Plugin System
//!
//! The contract between a streaming expression host and its scalar-function
//! extensions:
//! - `ScalarFunction`: validate once at compile time, evaluate per record,
//!   uniform lifecycle and checkpoint hooks
//! - `FunctionRegistry`: explicit registration and compile-time binding

mod context;
mod registry;
mod traits;

pub use context::{AppContext, ConfigReader};
pub use registry::{BoundFunction, FunctionRegistry};
pub use traits::{ArgExpr, ArgMeta, FunctionMeta, ScalarFunction};

/// Re-export core types for extension authors
pub mod prelude {
    pub use crate::{
        AppContext, ArgExpr, ArgMeta, BoundFunction, ConfigReader, FunctionMeta, FunctionRegistry,
        ScalarFunction,
    };
    pub use rill_core::prelude::*;
}
