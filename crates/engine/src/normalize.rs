//! Result shaping
//!
//! A [`MatchResult`] is first flattened to a plain JSON structure, which is
//! then rendered in the active [`ReturnType`]:
//!
//! | Result | Plain structure |
//! |--------|-----------------|
//! | `Empty` | `[]` |
//! | `Single { key: None, v }` | `v` |
//! | `Single { key: Some(0), v }` | `[v]` |
//! | `Single { key: Some(k), v }` | `{"k": v}` |
//! | `Multiple(entries)` | list of the entry values |
//!
//! Typed mode wraps every scalar leaf of the plain structure by kind and maps
//! `Empty` to no value at all.

use crate::matching::MatchResult;
use jsontext_core::{Error, JsonObject, JsonValue, KeyRef, Result, TypedValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output shape of query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ReturnType {
    /// Canonical JSON text
    #[default]
    Json,
    /// Plain nested structure
    Array,
    /// Kind-tagged scalar tree (mode name `silverstripe`)
    Typed,
}

impl ReturnType {
    /// Mode string accepted by [`ReturnType::from_str`]
    pub fn mode_name(&self) -> &'static str {
        match self {
            ReturnType::Json => "json",
            ReturnType::Array => "array",
            ReturnType::Typed => "silverstripe",
        }
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mode_name())
    }
}

impl FromStr for ReturnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(ReturnType::Json),
            "array" => Ok(ReturnType::Array),
            "silverstripe" => Ok(ReturnType::Typed),
            other => Err(Error::invalid_argument(format!(
                "unknown return type '{}', expected \"json\", \"array\" or \"silverstripe\"",
                other
            ))),
        }
    }
}

impl TryFrom<String> for ReturnType {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ReturnType> for String {
    fn from(r: ReturnType) -> Self {
        r.mode_name().to_string()
    }
}

/// A shaped query result
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// JSON text
    Json(String),
    /// Plain structure
    Array(JsonValue),
    /// Typed tree; `None` when nothing matched
    Typed(Option<TypedValue>),
}

impl Output {
    /// JSON text if this is `Json`
    pub fn as_json(&self) -> Option<&str> {
        match self {
            Output::Json(s) => Some(s),
            _ => None,
        }
    }

    /// Plain structure if this is `Array`
    pub fn as_array(&self) -> Option<&JsonValue> {
        match self {
            Output::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Typed tree if this is `Typed` and something matched
    pub fn as_typed(&self) -> Option<&TypedValue> {
        match self {
            Output::Typed(t) => t.as_ref(),
            _ => None,
        }
    }

    /// Check if this represents an empty result
    pub fn is_empty(&self) -> bool {
        match self {
            Output::Json(s) => s == "[]",
            Output::Array(v) => v.as_array().is_some_and(|a| a.is_empty()),
            Output::Typed(t) => t.is_none(),
        }
    }
}

/// Flatten a result to its plain JSON structure
pub fn plain(result: MatchResult) -> JsonValue {
    match result {
        MatchResult::Empty => JsonValue::array(),
        MatchResult::Single { key: None, value } => value,
        MatchResult::Single {
            key: Some(KeyRef::Index(0)),
            value,
        } => JsonValue::Array(vec![value]),
        MatchResult::Single {
            key: Some(key),
            value,
        } => {
            let mut obj = JsonObject::new();
            obj.push(key.to_string(), value);
            JsonValue::Object(obj)
        }
        MatchResult::Multiple(entries) => {
            JsonValue::Array(entries.into_iter().map(|(_, v)| v).collect())
        }
    }
}

/// Render a result in `mode`
pub fn shape(result: MatchResult, mode: ReturnType) -> Output {
    match mode {
        ReturnType::Json => Output::Json(plain(result).to_json_string()),
        ReturnType::Array => Output::Array(plain(result)),
        ReturnType::Typed => {
            if result.is_empty() {
                Output::Typed(None)
            } else {
                Output::Typed(Some(TypedValue::from_json(&plain(result))))
            }
        }
    }
}
