//! Rill Core - Fundamental types
//!
//! This crate provides the types shared by every Rill extension:
//! - `Value`: runtime stream-attribute values
//! - `AttributeType`: static attribute kinds declared at compile time
//! - `ValidationError` / `RuntimeError`: the two error classes an extension
//!   can raise

mod error;
mod value;

pub use error::{RuntimeError, ValidationError};
pub use value::{AttributeType, Value};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{AttributeType, RuntimeError, ValidationError, Value};
}
