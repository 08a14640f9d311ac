//! The parsed value tree.
//!
//! [`Value`] is a closed tagged union over the JSON shapes. Numbers keep the
//! integer/float distinction of their source literal, and objects keep the
//! order their keys appeared in. Nothing here mutates a tree after it has
//! been built; readers only ever hand out shared references.

use crate::error::{JsonError, Result};
use indexmap::IndexMap;
use std::fmt;

/// Insertion-ordered object body. Re-inserting a key keeps its first position.
pub type Map = IndexMap<String, Value>;

/// A parsed JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    Object(Map),
    Array(Vec<Value>),
}

/// A numeric literal. `Integer` when the source had no fraction or exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

/// The runtime variant of a [`Value`], used in mismatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    Text,
    Object,
    Array,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::Object => "object",
            ValueKind::Array => "array",
        };
        f.write_str(name)
    }
}

/// Shared absence value handed out for missing keys.
pub(crate) static NULL: Value = Value::Null;

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(Number::Integer(_)) => ValueKind::Integer,
            Value::Number(Number::Float(_)) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(Number::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    /// Any number as `f64`; integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(Number::Integer(n)) => Some(*n as f64),
            Value::Number(Number::Float(f)) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Narrow this value to `T`, failing with [`JsonError::TypeMismatch`] when
    /// the runtime variant does not fit.
    ///
    /// ```
    /// use json_reader::{parse, Value};
    ///
    /// let value = parse(r#"{"n": 42}"#).unwrap();
    /// let n: i64 = value.as_object().unwrap()["n"].to().unwrap();
    /// assert_eq!(n, 42);
    /// assert!(Value::Null.to::<i64>().is_err());
    /// ```
    pub fn to<'a, T: FromValue<'a>>(&'a self) -> Result<T> {
        T::from_value(self)
    }
}

/// Checked conversion out of a borrowed [`Value`].
pub trait FromValue<'a>: Sized {
    fn from_value(value: &'a Value) -> Result<Self>;
}

impl<'a> FromValue<'a> for &'a Value {
    fn from_value(value: &'a Value) -> Result<Self> {
        Ok(value)
    }
}

impl<'a> FromValue<'a> for &'a str {
    fn from_value(value: &'a Value) -> Result<Self> {
        value
            .as_str()
            .ok_or_else(|| JsonError::mismatch(ValueKind::Text, value.kind()))
    }
}

impl<'a> FromValue<'a> for i64 {
    fn from_value(value: &'a Value) -> Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| JsonError::mismatch(ValueKind::Integer, value.kind()))
    }
}

impl<'a> FromValue<'a> for f64 {
    fn from_value(value: &'a Value) -> Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| JsonError::mismatch(ValueKind::Float, value.kind()))
    }
}

impl<'a> FromValue<'a> for bool {
    fn from_value(value: &'a Value) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| JsonError::mismatch(ValueKind::Bool, value.kind()))
    }
}

impl<'a> FromValue<'a> for &'a Map {
    fn from_value(value: &'a Value) -> Result<Self> {
        value
            .as_object()
            .ok_or_else(|| JsonError::mismatch(ValueKind::Object, value.kind()))
    }
}

impl<'a> FromValue<'a> for &'a [Value] {
    fn from_value(value: &'a Value) -> Result<Self> {
        value
            .as_array()
            .ok_or_else(|| JsonError::mismatch(ValueKind::Array, value.kind()))
    }
}

/// `null` (including a missing key) narrows to `None`.
impl<'a, T: FromValue<'a>> FromValue<'a> for Option<T> {
    fn from_value(value: &'a Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(Number::Integer(n)) => serde_json::Value::Number((*n).into()),
            Value::Number(Number::Float(f)) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
        }
    }
}
