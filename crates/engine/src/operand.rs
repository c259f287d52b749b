//! Query operands
//!
//! An operand is the right-hand side of an operator query. It is a tagged
//! variant so the matchers can reject the wrong kind explicitly instead of
//! coercing it.

use jsontext_core::{Error, JsonValue, Result};
use std::fmt;
use std::str::FromStr;

/// One-level-deep key→key descriptor used by the path operator
///
/// Parsed from a single-member JSON object whose value is a string,
/// e.g. `{"store":"book"}`, or from the PostgreSQL text-array literal
/// `{store,book}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathDescriptor {
    /// Key matched at the top level
    pub outer: String,
    /// Key (or decimal index) matched one level below
    pub inner: String,
}

impl PathDescriptor {
    /// Create a descriptor
    pub fn new(outer: impl Into<String>, inner: impl Into<String>) -> Self {
        PathDescriptor {
            outer: outer.into(),
            inner: inner.into(),
        }
    }

    /// Parse from a JSON object text or a `{outer,inner}` literal
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the text is neither form.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if let Ok(value) = trimmed.parse::<JsonValue>() {
            return Self::from_json(&value).ok_or_else(|| {
                Error::invalid_argument(format!(
                    "path descriptor must be a single-member object with a string value: {}",
                    trimmed
                ))
            });
        }
        Self::from_literal(trimmed).ok_or_else(|| {
            Error::invalid_argument(format!("not a path descriptor: {}", trimmed))
        })
    }

    fn from_json(value: &JsonValue) -> Option<Self> {
        let obj = value.as_object()?;
        if obj.len() != 1 {
            return None;
        }
        let (outer, inner) = obj.member(0)?;
        Some(PathDescriptor::new(outer, inner.as_str()?))
    }

    // {outer,inner}
    fn from_literal(text: &str) -> Option<Self> {
        let body = text.strip_prefix('{')?.strip_suffix('}')?;
        let mut parts = body.split(',').map(str::trim);
        let outer = parts.next().filter(|s| !s.is_empty())?;
        let inner = parts.next().filter(|s| !s.is_empty())?;
        if parts.next().is_some() {
            return None;
        }
        Some(PathDescriptor::new(unquote(outer), unquote(inner)))
    }
}

fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

impl fmt::Display for PathDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.outer, self.inner)
    }
}

impl FromStr for PathDescriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PathDescriptor::parse(s)
    }
}

/// Right-hand side of a query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Integer position or numeric key
    Int(i64),
    /// String key, or a JSONPath expression text
    Text(String),
    /// Key→key descriptor
    Path(PathDescriptor),
}

impl Operand {
    /// Kind name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Int(_) => "integer",
            Operand::Text(_) => "string",
            Operand::Path(_) => "path",
        }
    }

    /// Get the integer if this is `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Operand::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the text if this is `Text`
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Operand::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(i) => write!(f, "{}", i),
            Operand::Text(s) => f.write_str(s),
            Operand::Path(p) => write!(f, "{}", p),
        }
    }
}

impl From<i64> for Operand {
    fn from(i: i64) -> Self {
        Operand::Int(i)
    }
}

impl From<i32> for Operand {
    fn from(i: i32) -> Self {
        Operand::Int(i64::from(i))
    }
}

impl From<u32> for Operand {
    fn from(i: u32) -> Self {
        Operand::Int(i64::from(i))
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(s)
    }
}

impl From<PathDescriptor> for Operand {
    fn from(p: PathDescriptor) -> Self {
        Operand::Path(p)
    }
}
