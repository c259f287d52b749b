//! JSON store
//!
//! Parses a field's text into an addressable tree, answers path queries,
//! applies mutations, and serializes back. A store is built fresh for each
//! operation and dropped at its end.

use crate::classifier::{classify_with, ClassResult};
use crate::jsonpath;
use crate::matching::MatchResult;
use crate::mutation;
use crate::operand::Operand;
use crate::vocabulary::OperatorVocabulary;
use jsontext_core::{DocumentLimits, Error, JsonValue, Result};
use std::fmt;

/// Parsed JSON document
#[derive(Debug, Clone, PartialEq)]
pub struct JsonStore {
    root: JsonValue,
    limits: DocumentLimits,
    vocabulary: OperatorVocabulary,
}

impl JsonStore {
    /// Parse with default limits and the default vocabulary
    ///
    /// # Errors
    ///
    /// `MalformedJson` if the text is not JSON or its root is not an object
    /// or array; `Limit` if a document limit is exceeded.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, DocumentLimits::default(), OperatorVocabulary::default())
    }

    /// Parse with explicit limits and vocabulary
    pub fn parse_with(
        text: &str,
        limits: DocumentLimits,
        vocabulary: OperatorVocabulary,
    ) -> Result<Self> {
        limits.validate_text(text)?;
        if text.trim().is_empty() {
            return Err(Error::malformed_json("empty document"));
        }
        let root: JsonValue = text.parse()?;
        Self::from_value(root, limits, vocabulary)
    }

    /// Wrap an already parsed tree
    pub fn from_value(
        root: JsonValue,
        limits: DocumentLimits,
        vocabulary: OperatorVocabulary,
    ) -> Result<Self> {
        if !root.is_container() {
            return Err(Error::malformed_json(format!(
                "bare {} is not accepted as a document",
                root.type_name()
            )));
        }
        limits.validate(&root)?;
        Ok(JsonStore {
            root,
            limits,
            vocabulary,
        })
    }

    /// Resolve a JSONPath expression; the empty string is the whole document
    ///
    /// # Errors
    ///
    /// `InvalidExpression` unless the string classifies as JSONPath.
    pub fn get(&self, path_or_expr: &str) -> Result<MatchResult> {
        if path_or_expr.is_empty() {
            return Ok(MatchResult::whole(self.root.clone()));
        }
        match classify_with(path_or_expr, self.vocabulary) {
            ClassResult::JsonPathExpression => {
                jsonpath::match_on_expr(&self.root, &Operand::from(path_or_expr))
            }
            ClassResult::Operator(_) | ClassResult::Invalid => {
                Err(Error::invalid_expression(path_or_expr))
            }
        }
    }

    /// Replace every node matched by `expr` with `value`
    ///
    /// Returns the number of nodes replaced. On error the document is left
    /// unchanged.
    pub fn set(&mut self, expr: &str, value: JsonValue) -> Result<usize> {
        mutation::apply(self, expr, value)
    }

    /// Root of the tree
    pub fn root(&self) -> &JsonValue {
        &self.root
    }

    pub(crate) fn replace_root(&mut self, root: JsonValue) {
        self.root = root;
    }

    /// Consume the store, returning the tree
    pub fn into_value(self) -> JsonValue {
        self.root
    }

    /// Limits this store enforces
    pub fn limits(&self) -> &DocumentLimits {
        &self.limits
    }

    /// Vocabulary used to tell operators from expressions
    pub fn vocabulary(&self) -> OperatorVocabulary {
        self.vocabulary
    }

    /// Canonical compact JSON
    pub fn to_json_string(&self) -> String {
        self.root.to_json_string()
    }
}

impl fmt::Display for JsonStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}
