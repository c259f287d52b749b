//! JSON text field
//!
//! [`JsonText`] is what an embedding application holds for one JSON-valued
//! column: the stored text, the engine configuration, and the active return
//! type. Every call parses the text afresh; nothing is cached between calls.
//!
//! ## Query dispatch
//!
//! ```text
//! Start → Classify ─┬─ Operator   → MatchTopLevel     → Normalize → Done
//!                   ├─ JSONPath   → ResolveExpression → Normalize → Done
//!                   └─ Invalid    → Error
//! ```

use crate::classifier::{self, classify_with, ClassResult};
use crate::config::EngineConfig;
use crate::jsonpath;
use crate::matching::MatchResult;
use crate::normalize::{shape, Output, ReturnType};
use crate::operand::Operand;
use crate::operators::{match_position, match_top_level, Position};
use crate::store::JsonStore;
use crate::vocabulary::OperatorVocabulary;
use jsontext_core::{Error, JsonValue, Result};
use tracing::debug;

/// A JSON-valued field
///
/// # Example
///
/// ```
/// use jsontext_engine::{JsonText, Operand};
///
/// let mut field = JsonText::new(r#"{"a":{"b":{"c":"foo"}}}"#);
/// field.set_return_type("array").unwrap();
///
/// let out = field.query("$..c", None).unwrap();
/// assert_eq!(out.as_array().unwrap().to_json_string(), r#"["foo"]"#);
///
/// let out = field.query("->>", Some(Operand::from("a"))).unwrap();
/// assert_eq!(out.as_array().unwrap().to_json_string(), r#"{"a":{"b":{"c":"foo"}}}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsonText {
    value: String,
    config: EngineConfig,
    return_type: ReturnType,
}

impl JsonText {
    /// Field with the default configuration
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_config(value, EngineConfig::default())
    }

    /// Field with an explicit configuration; the return type starts at the
    /// configured default
    pub fn with_config(value: impl Into<String>, config: EngineConfig) -> Self {
        JsonText {
            value: value.into(),
            return_type: config.return_type,
            config,
        }
    }

    /// Stored JSON text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Active return type
    pub fn return_type(&self) -> ReturnType {
        self.return_type
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse the stored text
    pub fn store(&self) -> Result<JsonStore> {
        JsonStore::parse_with(&self.value, self.config.limits, self.config.backend)
    }

    /// Select the return type by mode string
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `mode` is `"json"`, `"array"` or
    /// `"silverstripe"`.
    pub fn set_return_type(&mut self, mode: &str) -> Result<&mut Self> {
        self.return_type = mode.parse()?;
        Ok(self)
    }

    /// Run an operator query or a JSONPath expression and shape the result
    ///
    /// # Errors
    ///
    /// - `InvalidExpression` if the string is neither an operator nor JSONPath
    /// - `InvalidArgument` for an operator without an operand, an operand of
    ///   the wrong kind, or an expression given together with an operand
    /// - `MalformedJson` if the stored text is not a JSON document
    pub fn query(&self, operator_or_expression: &str, operand: Option<Operand>) -> Result<Output> {
        let result = self.resolve(operator_or_expression, operand.as_ref())?;
        Ok(shape(result, self.return_type))
    }

    /// Like [`JsonText::query`], without shaping
    pub fn resolve(
        &self,
        operator_or_expression: &str,
        operand: Option<&Operand>,
    ) -> Result<MatchResult> {
        let class = classify_with(operator_or_expression, self.config.backend);
        debug!(
            target: "jsontext::query",
            candidate = operator_or_expression,
            class = ?class,
            "Classified query"
        );

        let result = match class {
            ClassResult::Operator(token) => {
                let kind = self
                    .config
                    .backend
                    .kind_for(&token)
                    .ok_or_else(|| Error::invalid_expression(token.as_str()))?;
                let operand = operand.ok_or_else(|| {
                    Error::invalid_argument(format!("operator '{}' requires an operand", token))
                })?;
                let store = self.store()?;
                match_top_level(store.root(), kind, operand)?
            }
            ClassResult::JsonPathExpression => {
                if let Some(op) = operand {
                    return Err(Error::invalid_argument(format!(
                        "JSONPath expression '{}' does not take an operand (got '{}')",
                        operator_or_expression, op
                    )));
                }
                let store = self.store()?;
                jsonpath::match_on_expr(store.root(), &Operand::from(operator_or_expression))?
            }
            ClassResult::Invalid => {
                return Err(Error::invalid_expression(operator_or_expression));
            }
        };

        debug!(target: "jsontext::query", matches = result.len(), "Query resolved");
        Ok(result)
    }

    /// Top-level entry at `position`, unshaped, with its origin key or index
    pub fn entry(&self, position: Position) -> Result<MatchResult> {
        let store = self.store()?;
        let result = match_position(store.root(), position);
        debug!(target: "jsontext::query", position = ?position, matches = result.len(), "Positional access");
        Ok(result)
    }

    /// First top-level entry
    pub fn first(&self) -> Result<Output> {
        Ok(shape(self.entry(Position::First)?, self.return_type))
    }

    /// Last top-level entry
    pub fn last(&self) -> Result<Output> {
        Ok(shape(self.entry(Position::Last)?, self.return_type))
    }

    /// Top-level entry at index `n`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `n` is not an integer operand.
    pub fn nth(&self, n: impl Into<Operand>) -> Result<Output> {
        let n = match n.into() {
            Operand::Int(i) => i,
            other => {
                return Err(Error::invalid_argument(format!(
                    "nth expects an integer, got {} '{}'",
                    other.kind(),
                    other
                )))
            }
        };
        Ok(shape(self.entry(Position::Nth(n))?, self.return_type))
    }

    /// Replace every node `expr` selects with `new_value` and store the
    /// re-serialized document
    ///
    /// On error the stored text is unchanged.
    pub fn set_value_at(&mut self, new_value: JsonValue, expr: &str) -> Result<&str> {
        let mut store = self.store()?;
        store.set(expr, new_value)?;
        self.value = store.into_value().to_json_string();
        Ok(&self.value)
    }
}

/// Check if `text` is accepted as a document
///
/// Bare scalars, including `true`, `false` and the empty string, are not.
pub fn is_valid_json(text: &str) -> bool {
    JsonStore::parse(text).is_ok()
}

/// Check if `text` passes the JSONPath expression test
pub fn is_valid_expression(text: &str) -> bool {
    classifier::is_valid_expression(text)
}

/// Check if `text` is an operator of `backend`
pub fn is_valid_operator(text: &str, backend: OperatorVocabulary) -> bool {
    classifier::is_valid_operator(text, backend)
}
