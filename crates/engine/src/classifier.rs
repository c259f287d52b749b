//! Expression classification
//!
//! Decides whether a candidate string is an operator token of the active
//! vocabulary, a JSONPath expression, or neither. Operator membership is
//! tested first, so a string can never be both.
//!
//! The JSONPath test is a prefix pattern, not a parse: it accepts
//! `*…`, a `[d:d:d]` slice start, or `$.` followed by at least one
//! non-digit. Digits are ASCII only. The full grammar is checked later by
//! the JSONPath parser.

use crate::vocabulary::OperatorVocabulary;
use once_cell::sync::Lazy;
use regex::Regex;

static JSON_PATH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\*|\[[0-9]:[0-9]:[0-9]\]|\$\.+[^0-9]+)").expect("JSONPath pattern is a valid regex")
});

/// Outcome of classifying a candidate string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassResult {
    /// One of the backend's operator tokens
    Operator(String),
    /// Looks like a JSONPath expression
    JsonPathExpression,
    /// Neither
    Invalid,
}

impl ClassResult {
    /// Check if the candidate was an operator
    pub fn is_operator(&self) -> bool {
        matches!(self, ClassResult::Operator(_))
    }

    /// Check if the candidate was a JSONPath expression
    pub fn is_expression(&self) -> bool {
        matches!(self, ClassResult::JsonPathExpression)
    }
}

/// Classify `candidate` against the given operator tokens
pub fn classify<'a, I>(candidate: &str, backend_operators: I) -> ClassResult
where
    I: IntoIterator<Item = &'a str>,
{
    if backend_operators.into_iter().any(|op| op == candidate) {
        return ClassResult::Operator(candidate.to_string());
    }
    if JSON_PATH_PATTERN.is_match(candidate) {
        return ClassResult::JsonPathExpression;
    }
    ClassResult::Invalid
}

/// Classify `candidate` against a vocabulary
pub fn classify_with(candidate: &str, vocabulary: OperatorVocabulary) -> ClassResult {
    classify(candidate, vocabulary.tokens())
}

/// Check if `text` passes the JSONPath expression test
pub fn is_valid_expression(text: &str) -> bool {
    JSON_PATH_PATTERN.is_match(text)
}

/// Check if `text` is an operator token of `backend`
pub fn is_valid_operator(text: &str, backend: OperatorVocabulary) -> bool {
    backend.tokens().any(|op| op == text)
}
