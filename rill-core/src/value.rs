//! Runtime values flowing through a stream
//!
//! Every attribute of an incoming record is one of the kinds below, or
//! absent (`Null`). Absence is a first-class value: extensions decide per
//! function whether a missing input is an error or passes through.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Static kind of a stream attribute, declared at query-compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    Int,
    Long,
    Float,
    Double,
    Bool,
    Text,
    Object,
}

impl AttributeType {
    /// The four kinds a numeric function accepts.
    pub const NUMERIC: [AttributeType; 4] = [
        AttributeType::Int,
        AttributeType::Long,
        AttributeType::Float,
        AttributeType::Double,
    ];

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            AttributeType::Int | AttributeType::Long | AttributeType::Float | AttributeType::Double
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            AttributeType::Int => "Int",
            AttributeType::Long => "Long",
            AttributeType::Float => "Float",
            AttributeType::Double => "Double",
            AttributeType::Bool => "Bool",
            AttributeType::Text => "Text",
            AttributeType::Object => "Object",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime value of a stream attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Text(String),
    Null,
}

impl Value {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Long(l) => Some(*l),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Runtime kind of this value; `None` for `Null`, which has no kind.
    pub fn kind(&self) -> Option<AttributeType> {
        match self {
            Value::Int(_) => Some(AttributeType::Int),
            Value::Long(_) => Some(AttributeType::Long),
            Value::Float(_) => Some(AttributeType::Float),
            Value::Double(_) => Some(AttributeType::Double),
            Value::Bool(_) => Some(AttributeType::Bool),
            Value::Text(_) => Some(AttributeType::Text),
            Value::Null => None,
        }
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Long(_) => "Long",
            Value::Float(_) => "Float",
            Value::Double(_) => "Double",
            Value::Bool(_) => "Bool",
            Value::Text(_) => "Text",
            Value::Null => "Null",
        }
    }
}

// ========== Conversions from primitives ==========

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}
