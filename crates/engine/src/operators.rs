//! Operator-style matching
//!
//! Each routine walks only the top level of the document; the path routine
//! descends exactly one more level. A wrong operand kind is a contract
//! violation (`InvalidArgument`), a miss is an empty result.
//!
//! ## Duplicate members
//!
//! The parser keeps duplicate object members, so the path routine can find
//! several values for one `outer`→`inner` descriptor. All of them are
//! returned in document order.

use crate::matching::MatchResult;
use crate::operand::{Operand, PathDescriptor};
use crate::vocabulary::MatchKind;
use jsontext_core::{Error, JsonValue, KeyRef, Result};

/// Run the routine selected by `kind`
pub fn match_top_level(root: &JsonValue, kind: MatchKind, operand: &Operand) -> Result<MatchResult> {
    match kind {
        MatchKind::MatchOnInt => match_on_int(root, operand),
        MatchKind::MatchOnStr => match_on_str(root, operand),
        MatchKind::MatchOnPath => match_on_path(root, operand),
    }
}

fn wrong_kind(kind: MatchKind, expected: &str, operand: &Operand) -> Error {
    Error::invalid_argument(format!(
        "{} expects {} operand, got {} '{}'",
        kind,
        expected,
        operand.kind(),
        operand
    ))
}

/// `->`: array element by index, or object member by numeric-string key
pub fn match_on_int(root: &JsonValue, operand: &Operand) -> Result<MatchResult> {
    let n = match operand {
        Operand::Int(n) => *n,
        other => return Err(wrong_kind(MatchKind::MatchOnInt, "an integer", other)),
    };
    let Ok(idx) = usize::try_from(n) else {
        return Ok(MatchResult::Empty);
    };
    let hit = match root {
        JsonValue::Array(items) => items
            .get(idx)
            .map(|v| MatchResult::single(KeyRef::Index(idx), v.clone())),
        JsonValue::Object(obj) => {
            let key = idx.to_string();
            obj.get(&key).map(|v| MatchResult::single(KeyRef::Key(key), v.clone()))
        }
        _ => None,
    };
    Ok(hit.unwrap_or_default())
}

/// `->>`: first object member whose key equals the operand
pub fn match_on_str(root: &JsonValue, operand: &Operand) -> Result<MatchResult> {
    let key = match operand {
        Operand::Text(s) => s.as_str(),
        other => return Err(wrong_kind(MatchKind::MatchOnStr, "a string", other)),
    };
    Ok(root
        .as_object()
        .and_then(|obj| obj.get(key))
        .map(|v| MatchResult::single(key, v.clone()))
        .unwrap_or_default())
}

/// `#>`: every `inner` below every `outer`
pub fn match_on_path(root: &JsonValue, operand: &Operand) -> Result<MatchResult> {
    let descriptor = match operand {
        Operand::Path(p) => p.clone(),
        Operand::Text(s) => PathDescriptor::parse(s)?,
        other => return Err(wrong_kind(MatchKind::MatchOnPath, "a path", other)),
    };

    let mut hits = Vec::new();
    for outer in children_named(root, &descriptor.outer) {
        for (key, value) in children_keyed(outer, &descriptor.inner) {
            hits.push((key, value.clone()));
        }
    }
    Ok(MatchResult::from_entries(hits))
}

fn children_named<'a>(value: &'a JsonValue, name: &'a str) -> Vec<&'a JsonValue> {
    children_keyed(value, name).into_iter().map(|(_, v)| v).collect()
}

// Object: every member named `name`. Array: the element at decimal `name`.
fn children_keyed<'a>(value: &'a JsonValue, name: &'a str) -> Vec<(KeyRef, &'a JsonValue)> {
    match value {
        JsonValue::Object(obj) => obj
            .get_all(name)
            .map(|v| (KeyRef::Key(name.to_string()), v))
            .collect(),
        JsonValue::Array(items) => name
            .parse::<usize>()
            .ok()
            .and_then(|i| items.get(i).map(|v| (KeyRef::Index(i), v)))
            .into_iter()
            .collect(),
        _ => Vec::new(),
    }
}

/// Top-level entry picked by position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// First entry
    First,
    /// Last entry
    Last,
    /// Entry at a zero-based index; negative never matches
    Nth(i64),
}

/// Positional access over the top-level container
pub fn match_position(root: &JsonValue, position: Position) -> MatchResult {
    let mut entries = root.entries();
    let idx = match position {
        Position::First => Some(0),
        Position::Last => entries.len().checked_sub(1),
        Position::Nth(n) => usize::try_from(n).ok(),
    };
    match idx {
        Some(i) if i < entries.len() => {
            let (key, value) = entries.swap_remove(i);
            MatchResult::single(key, value.clone())
        }
        _ => MatchResult::Empty,
    }
}
