//! Error kinds surfaced by extensions
//!
//! Two classes, matching the two phases of an extension's life: validation
//! errors reject the query before it ever runs; runtime errors fail a single
//! record and leave the rest of the stream to the host.

use crate::AttributeType;
use thiserror::Error;

/// Compile-time rejection of a query that binds an extension incorrectly.
/// Never retried; the host refuses to start the query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid number of arguments passed to {function}(), required {expected}, but found {found}")]
    ArgCount {
        function: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid parameter type found for argument '{parameter}' of {function}(), required one of {expected:?}, but found {found}")]
    ArgType {
        function: String,
        parameter: String,
        expected: &'static [AttributeType],
        found: AttributeType,
    },

    #[error("no function registered under '{name}'")]
    UnknownFunction { name: String },
}

/// Per-record evaluation failure. The host decides whether to drop the
/// record, log it, or abort the query; the extension only signals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("input to {function}() cannot be null")]
    NullInput { function: String },

    #[error("{function}() received a runtime value of kind {found}, outside its validated input set")]
    TypeMismatch { function: String, found: String },

    #[error("invalid number of runtime arguments passed to {function}(), required {expected}, but found {found}")]
    ArityMismatch {
        function: String,
        expected: usize,
        found: usize,
    },
}

impl ValidationError {
    pub fn arg_count(function: &str, expected: usize, found: usize) -> Self {
        ValidationError::ArgCount {
            function: function.to_string(),
            expected,
            found,
        }
    }

    pub fn arg_type(
        function: &str,
        parameter: &str,
        expected: &'static [AttributeType],
        found: AttributeType,
    ) -> Self {
        ValidationError::ArgType {
            function: function.to_string(),
            parameter: parameter.to_string(),
            expected,
            found,
        }
    }

    pub fn unknown_function(name: &str) -> Self {
        ValidationError::UnknownFunction {
            name: name.to_string(),
        }
    }
}

impl RuntimeError {
    pub fn null_input(function: &str) -> Self {
        RuntimeError::NullInput {
            function: function.to_string(),
        }
    }

    pub fn type_mismatch(function: &str, found: &str) -> Self {
        RuntimeError::TypeMismatch {
            function: function.to_string(),
            found: found.to_string(),
        }
    }

    pub fn arity_mismatch(function: &str, expected: usize, found: usize) -> Self {
        RuntimeError::ArityMismatch {
            function: function.to_string(),
            expected,
            found,
        }
    }
}
