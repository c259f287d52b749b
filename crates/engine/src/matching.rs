//! Raw match results
//!
//! Every matcher returns a [`MatchResult`]: nothing, one value with the key
//! it was found under, or an ordered list of keyed values. Keys exist only to
//! re-associate values with their origin when the result is shaped.

use jsontext_core::{JsonValue, KeyRef};

/// Zero, one or many matches
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MatchResult {
    /// Valid request, no results
    #[default]
    Empty,
    /// One match; `key` is `None` for the whole document
    Single {
        /// Origin key or index
        key: Option<KeyRef>,
        /// Matched value
        value: JsonValue,
    },
    /// Several matches in document order
    Multiple(Vec<(KeyRef, JsonValue)>),
}

impl MatchResult {
    /// Build from keyed hits: none → `Empty`, one → `Single`, more → `Multiple`
    pub fn from_entries(mut entries: Vec<(KeyRef, JsonValue)>) -> Self {
        match entries.len() {
            0 => MatchResult::Empty,
            1 => {
                let (key, value) = entries.remove(0);
                MatchResult::Single {
                    key: Some(key),
                    value,
                }
            }
            _ => MatchResult::Multiple(entries),
        }
    }

    /// A single keyed match
    pub fn single(key: impl Into<KeyRef>, value: JsonValue) -> Self {
        MatchResult::Single {
            key: Some(key.into()),
            value,
        }
    }

    /// The whole document, no key
    pub fn whole(value: JsonValue) -> Self {
        MatchResult::Single { key: None, value }
    }

    /// Check if nothing matched
    pub fn is_empty(&self) -> bool {
        matches!(self, MatchResult::Empty)
    }

    /// Number of matched values
    pub fn len(&self) -> usize {
        match self {
            MatchResult::Empty => 0,
            MatchResult::Single { .. } => 1,
            MatchResult::Multiple(entries) => entries.len(),
        }
    }

    /// Key of a single match
    pub fn key(&self) -> Option<&KeyRef> {
        match self {
            MatchResult::Single { key, .. } => key.as_ref(),
            _ => None,
        }
    }

    /// Matched values in order
    pub fn values(&self) -> Vec<&JsonValue> {
        match self {
            MatchResult::Empty => Vec::new(),
            MatchResult::Single { value, .. } => vec![value],
            MatchResult::Multiple(entries) => entries.iter().map(|(_, v)| v).collect(),
        }
    }
}
