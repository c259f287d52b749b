//! Typed value tree
//!
//! This module defines:
//! - TypedValue: kind-tagged rendering of a JSON value
//!
//! ## Conversion Rules
//!
//! Every scalar leaf is wrapped by its kind, containers keep their shape:
//!
//! | JSON | TypedValue |
//! |------|------------|
//! | float (or integer beyond i64) | `Float` |
//! | `true` / `false` | `Boolean(1)` / `Boolean(0)` |
//! | integer | `Int` |
//! | string | `Varchar` |
//! | `null` | `Null` |
//! | array | `Array` of converted elements |
//! | object | `Object` of converted members (order and duplicates kept) |
//!
//! Different kinds are never equal: `Int(1) != Float(1.0)`.

use crate::json::JsonValue;
use serde::{Deserialize, Serialize};

/// Kind-tagged value produced by the typed return mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypedValue {
    /// 64-bit floating point
    Float(f64),
    /// Boolean canonicalized to 1 or 0
    Boolean(u8),
    /// 64-bit signed integer
    Int(i64),
    /// String value
    Varchar(String),
    /// JSON null
    Null,
    /// Array of typed values
    Array(Vec<TypedValue>),
    /// Object members in document order
    Object(Vec<(String, TypedValue)>),
}

impl TypedValue {
    /// Convert a JSON value, recursing into containers
    pub fn from_json(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => TypedValue::Null,
            JsonValue::Bool(b) => TypedValue::Boolean(u8::from(*b)),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => TypedValue::Int(i),
                // u64 beyond i64::MAX and all floats
                None => TypedValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => TypedValue::Varchar(s.clone()),
            JsonValue::Array(items) => {
                TypedValue::Array(items.iter().map(TypedValue::from_json).collect())
            }
            JsonValue::Object(obj) => TypedValue::Object(
                obj.iter()
                    .map(|(k, v)| (k.to_string(), TypedValue::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Get the kind name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            TypedValue::Float(_) => "Float",
            TypedValue::Boolean(_) => "Boolean",
            TypedValue::Int(_) => "Int",
            TypedValue::Varchar(_) => "Varchar",
            TypedValue::Null => "Null",
            TypedValue::Array(_) => "Array",
            TypedValue::Object(_) => "Object",
        }
    }

    /// Check if this is a scalar leaf
    pub fn is_scalar(&self) -> bool {
        !matches!(self, TypedValue::Array(_) | TypedValue::Object(_))
    }

    /// Get as i64 if this is an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            TypedValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            TypedValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as bool if this is a Boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b == 1),
            _ => None,
        }
    }

    /// Get as string slice if this is a Varchar
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::Varchar(s) => Some(s),
            _ => None,
        }
    }

    /// Get elements if this is an Array
    pub fn as_array(&self) -> Option<&[TypedValue]> {
        match self {
            TypedValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get first member named `key` if this is an Object
    pub fn get(&self, key: &str) -> Option<&TypedValue> {
        match self {
            TypedValue::Object(members) => {
                members.iter().find(|(k, _)| k == key).map(|(_, v)| v)
            }
            _ => None,
        }
    }
}

impl From<&JsonValue> for TypedValue {
    fn from(value: &JsonValue) -> Self {
        TypedValue::from_json(value)
    }
}
