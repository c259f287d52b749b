//! Mutation applier
//!
//! A mutation replaces every node a JSONPath expression selects with one
//! value (bulk update), then the whole document is re-serialized. There is no
//! byte patching: the tree is edited and written out again.
//!
//! ## Application order
//!
//! Locations are applied in document order. Once a node has been replaced,
//! locations nested inside it no longer refer to the old subtree and are
//! skipped. Replacing a node never shifts the position of a sibling, so every
//! other location stays valid.
//!
//! The edit happens on a working copy; the store is only updated when every
//! replacement succeeded and the result is within limits.

use crate::classifier::{classify_with, ClassResult};
use crate::config::EngineConfig;
use crate::jsonpath;
use crate::store::JsonStore;
use jsontext_core::{set_at_location, Error, JsonValue, Location, PathSegment, Result};
use tracing::{debug, info};

/// Replace every node `expr` selects in `store` with `value`
///
/// Returns the number of nodes replaced.
///
/// # Errors
///
/// - `InvalidExpression` if `expr` is an operator token or not a JSONPath
///   expression
/// - `NoMatch` if nothing is selected
/// - `InvalidArgument` if the root would be replaced by a non-container
/// - `Limit` if the value or the resulting document exceeds a limit
pub fn apply(store: &mut JsonStore, expr: &str, value: JsonValue) -> Result<usize> {
    match classify_with(expr, store.vocabulary()) {
        ClassResult::JsonPathExpression => {}
        ClassResult::Operator(_) | ClassResult::Invalid => {
            return Err(Error::invalid_expression(expr));
        }
    }
    store.limits().validate(&value)?;

    let mut locations = jsonpath::locate(store.root(), expr)?;
    if locations.is_empty() {
        return Err(Error::no_match(expr));
    }
    locations.sort_by_cached_key(document_order);
    locations.dedup();

    let mut working = store.root().clone();
    let mut applied: Vec<Location> = Vec::with_capacity(locations.len());
    for loc in locations {
        if applied.iter().any(|done| done.is_strict_ancestor_of(&loc)) {
            debug!(target: "jsontext::mutation", location = %loc, "Skipping location inside replaced node");
            continue;
        }
        if loc.is_root() && !value.is_container() {
            return Err(Error::invalid_argument(format!(
                "cannot replace the document root with a bare {}",
                value.type_name()
            )));
        }
        set_at_location(&mut working, &loc, value.clone())
            .map_err(|e| Error::invalid_argument(format!("cannot replace {}: {}", loc, e)))?;
        applied.push(loc);
    }

    store.limits().validate(&working)?;
    store.replace_root(working);

    info!(
        target: "jsontext::mutation",
        expression = expr,
        replaced = applied.len(),
        "Document rewritten"
    );
    Ok(applied.len())
}

// Pre-order position: a parent sorts before its children, siblings by position.
fn document_order(loc: &Location) -> Vec<usize> {
    loc.segments()
        .iter()
        .map(|seg| match seg {
            PathSegment::Member { position, .. } => *position,
            PathSegment::Index(i) => *i,
        })
        .collect()
}

/// Parse `json_text`, replace every node `expr` selects, and serialize
///
/// Pure: equal arguments always give the same output, and applying the same
/// update to its own output changes nothing.
///
/// ```
/// use jsontext_engine::mutation::set_value_at;
///
/// let doc = r#"{"store":{"book":[{"a":1},{"a":2}]}}"#;
/// let updated = set_value_at(doc, r#"{"a":99}"#.parse().unwrap(), "$.store.book[1]").unwrap();
/// assert_eq!(updated, r#"{"store":{"book":[{"a":1},{"a":99}]}}"#);
/// ```
pub fn set_value_at(json_text: &str, new_value: JsonValue, expr: &str) -> Result<String> {
    set_value_at_with(&EngineConfig::default(), json_text, new_value, expr)
}

/// [`set_value_at`] with explicit limits and vocabulary
pub fn set_value_at_with(
    config: &EngineConfig,
    json_text: &str,
    new_value: JsonValue,
    expr: &str,
) -> Result<String> {
    let mut store = JsonStore::parse_with(json_text, config.limits, config.backend)?;
    store.set(expr, new_value)?;
    Ok(store.to_json_string())
}
