//! JSONPath syntax tree

use jsontext_core::JsonValue;
use std::fmt;

/// A parsed JSONPath expression
///
/// An expression is the root `$` followed by segments. Each segment applies
/// its selectors to every node produced by the previous segment.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPathExpr {
    pub(crate) source: String,
    pub(crate) segments: Vec<Segment>,
}

impl JsonPathExpr {
    /// Expression text as given
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parsed segments
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for JsonPathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// One step of an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// `.name`, `.*`, `[...]`: apply to the children of each node
    Child(Vec<Selector>),
    /// `..name`, `..*`, `..[...]`: apply to each node and all its descendants
    Descendant(Vec<Selector>),
}

/// Selects children of a node
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Every member named this (duplicates included)
    Name(String),
    /// Every member or element
    Wildcard,
    /// Array element; negative counts from the end
    Index(i64),
    /// Array slice `[start:end:step]`
    Slice {
        /// First index (inclusive)
        start: Option<i64>,
        /// Last index (exclusive)
        end: Option<i64>,
        /// Stride, defaults to 1; zero selects nothing
        step: Option<i64>,
    },
    /// Children for which the filter holds
    Filter(FilterExpr),
}

/// Filter predicate evaluated against a candidate child `@`
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpr {
    /// `@.path` exists
    Exists(RelPath),
    /// `@.path <op> literal`
    Compare {
        /// Path under `@`
        left: RelPath,
        /// Comparison operator
        op: CompareOp,
        /// Literal right-hand side
        right: JsonValue,
    },
    /// Both hold
    And(Box<FilterExpr>, Box<FilterExpr>),
    /// Either holds
    Or(Box<FilterExpr>, Box<FilterExpr>),
}

/// Path relative to the filter candidate
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelPath {
    /// Steps below `@`; empty means `@` itself
    pub steps: Vec<RelStep>,
}

/// One step of a relative path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelStep {
    /// Object member (first with this name)
    Name(String),
    /// Array element; negative counts from the end
    Index(i64),
}

/// Filter comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl CompareOp {
    /// Operator text
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}
