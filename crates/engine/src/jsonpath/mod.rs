//! JSONPath matching
//!
//! A fixed subset of JSONPath (see [`parser`] for the grammar). Matches are
//! reported in evaluation order and keyed by their ordinal, so several
//! matches shape as a list.

pub mod ast;
pub mod eval;
pub mod parser;

pub use ast::{CompareOp, FilterExpr, JsonPathExpr, RelPath, RelStep, Segment, Selector};
pub use eval::Node;
pub use parser::ExprParseError;

use crate::matching::MatchResult;
use crate::operand::Operand;
use jsontext_core::{Error, JsonValue, KeyRef, Location, Result};

/// Parse an expression, mapping syntax errors to `InvalidExpression`
pub fn compile(expression: &str) -> Result<JsonPathExpr> {
    JsonPathExpr::parse(expression)
        .map_err(|e| Error::invalid_expression(format!("{} ({})", expression, e)))
}

/// Resolve the expression carried by `operand` against `root`
///
/// # Errors
///
/// `InvalidArgument` if the operand is not text, `InvalidExpression` if the
/// text does not parse. Matching nothing is `Empty`, not an error.
pub fn match_on_expr(root: &JsonValue, operand: &Operand) -> Result<MatchResult> {
    let text = match operand {
        Operand::Text(s) => s,
        other => {
            return Err(Error::invalid_argument(format!(
                "JSONPath expression must be a string, got {} '{}'",
                other.kind(),
                other
            )))
        }
    };
    let expr = compile(text)?;
    Ok(match_compiled(root, &expr))
}

/// Resolve an already parsed expression
pub fn match_compiled(root: &JsonValue, expr: &JsonPathExpr) -> MatchResult {
    let entries = expr
        .evaluate(root)
        .into_iter()
        .enumerate()
        .map(|(i, (_, v))| (KeyRef::Index(i), v.clone()))
        .collect();
    MatchResult::from_entries(entries)
}

/// Locations of every node the expression selects
pub fn locate(root: &JsonValue, expression: &str) -> Result<Vec<Location>> {
    let expr = compile(expression)?;
    Ok(expr.evaluate(root).into_iter().map(|(loc, _)| loc).collect())
}
