//! JSONPath evaluation
//!
//! Evaluation keeps a node list of `(Location, &JsonValue)` pairs. Each
//! segment maps every node to the children its selectors pick; a descendant
//! segment first expands each node to itself plus all descendants in
//! pre-order.

use super::ast::{CompareOp, FilterExpr, JsonPathExpr, RelPath, RelStep, Segment, Selector};
use jsontext_core::{JsonValue, Location};
use std::cmp::Ordering;

/// A matched node and where it lives
pub type Node<'a> = (Location, &'a JsonValue);

impl JsonPathExpr {
    /// Every node the expression selects, with its location
    pub fn evaluate<'a>(&self, root: &'a JsonValue) -> Vec<Node<'a>> {
        let mut nodes: Vec<Node<'a>> = vec![(Location::root(), root)];
        for segment in &self.segments {
            let mut next = Vec::new();
            for (loc, value) in &nodes {
                match segment {
                    Segment::Child(selectors) => {
                        for sel in selectors {
                            select(sel, loc, value, &mut next);
                        }
                    }
                    Segment::Descendant(selectors) => {
                        for (dloc, dvalue) in descendants(loc, value) {
                            for sel in selectors {
                                select(sel, &dloc, dvalue, &mut next);
                            }
                        }
                    }
                }
            }
            nodes = next;
            if nodes.is_empty() {
                break;
            }
        }
        nodes
    }
}

fn children<'a>(loc: &Location, value: &'a JsonValue) -> Vec<Node<'a>> {
    match value {
        JsonValue::Object(obj) => obj
            .iter()
            .enumerate()
            .map(|(pos, (k, v))| (loc.clone().member(pos, k), v))
            .collect(),
        JsonValue::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (loc.clone().index(i), v))
            .collect(),
        _ => Vec::new(),
    }
}

// the node itself, then every descendant in pre-order
fn descendants<'a>(loc: &Location, value: &'a JsonValue) -> Vec<Node<'a>> {
    let mut out = Vec::new();
    let mut stack = vec![(loc.clone(), value)];
    while let Some((l, v)) = stack.pop() {
        let kids = children(&l, v);
        out.push((l, v));
        stack.extend(kids.into_iter().rev());
    }
    out
}

fn select<'a>(sel: &Selector, loc: &Location, value: &'a JsonValue, out: &mut Vec<Node<'a>>) {
    match sel {
        Selector::Name(name) => {
            if let JsonValue::Object(obj) = value {
                for (pos, (k, v)) in obj.iter().enumerate() {
                    if k == name {
                        out.push((loc.clone().member(pos, k), v));
                    }
                }
            }
        }
        Selector::Wildcard => out.extend(children(loc, value)),
        Selector::Index(i) => {
            if let JsonValue::Array(items) = value {
                if let Some(idx) = normalize_index(*i, items.len()) {
                    out.push((loc.clone().index(idx), &items[idx]));
                }
            }
        }
        Selector::Slice { start, end, step } => {
            if let JsonValue::Array(items) = value {
                for idx in slice_indices(items.len(), *start, *end, *step) {
                    out.push((loc.clone().index(idx), &items[idx]));
                }
            }
        }
        Selector::Filter(filter) => {
            for (child_loc, child) in children(loc, value) {
                if filter_matches(filter, child) {
                    out.push((child_loc, child));
                }
            }
        }
    }
}

fn normalize_index(i: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let idx = if i < 0 { len + i } else { i };
    if (0..len).contains(&idx) {
        usize::try_from(idx).ok()
    } else {
        None
    }
}

/// Indices selected by `[start:end:step]` over an array of `len` elements
pub fn slice_indices(len: usize, start: Option<i64>, end: Option<i64>, step: Option<i64>) -> Vec<usize> {
    let step = step.unwrap_or(1);
    let Ok(len) = i64::try_from(len) else {
        return Vec::new();
    };
    let norm = |i: i64| if i >= 0 { i } else { len + i };
    let mut out = Vec::new();
    match step.cmp(&0) {
        Ordering::Equal => {}
        Ordering::Greater => {
            let lower = norm(start.unwrap_or(0)).clamp(0, len);
            let upper = norm(end.unwrap_or(len)).clamp(0, len);
            let mut i = lower;
            while i < upper {
                out.push(i as usize);
                match i.checked_add(step) {
                    Some(next) => i = next,
                    None => break,
                }
            }
        }
        Ordering::Less => {
            let upper = norm(start.unwrap_or(len - 1)).clamp(-1, len - 1);
            let lower = end.map(norm).unwrap_or(-1).clamp(-1, len - 1);
            let mut i = upper;
            while lower < i {
                out.push(i as usize);
                match i.checked_add(step) {
                    Some(next) => i = next,
                    None => break,
                }
            }
        }
    }
    out
}

fn filter_matches(filter: &FilterExpr, candidate: &JsonValue) -> bool {
    match filter {
        FilterExpr::Exists(path) => resolve(path, candidate).is_some(),
        FilterExpr::Compare { left, op, right } => match resolve(left, candidate) {
            Some(value) => compare(value, *op, right),
            None => *op == CompareOp::Ne,
        },
        FilterExpr::And(a, b) => filter_matches(a, candidate) && filter_matches(b, candidate),
        FilterExpr::Or(a, b) => filter_matches(a, candidate) || filter_matches(b, candidate),
    }
}

fn resolve<'a>(path: &RelPath, candidate: &'a JsonValue) -> Option<&'a JsonValue> {
    let mut current = candidate;
    for step in &path.steps {
        current = match (step, current) {
            (RelStep::Name(name), JsonValue::Object(obj)) => obj.get(name)?,
            (RelStep::Index(i), JsonValue::Array(items)) => {
                &items[normalize_index(*i, items.len())?]
            }
            _ => return None,
        };
    }
    Some(current)
}

fn compare(left: &JsonValue, op: CompareOp, right: &JsonValue) -> bool {
    match op {
        CompareOp::Eq => values_equal(left, right),
        CompareOp::Ne => !values_equal(left, right),
        _ => {
            let ordering = match (left, right) {
                (JsonValue::Number(_), JsonValue::Number(_)) => {
                    left.as_f64().zip(right.as_f64()).and_then(|(a, b)| a.partial_cmp(&b))
                }
                (JsonValue::String(a), JsonValue::String(b)) => Some(a.cmp(b)),
                _ => None,
            };
            match ordering {
                Some(ord) => match op {
                    CompareOp::Lt => ord == Ordering::Less,
                    CompareOp::Le => ord != Ordering::Greater,
                    CompareOp::Gt => ord == Ordering::Greater,
                    CompareOp::Ge => ord != Ordering::Less,
                    CompareOp::Eq | CompareOp::Ne => false,
                },
                None => false,
            }
        }
    }
}

// numbers compare by value, so 1 == 1.0
fn values_equal(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Number(_), JsonValue::Number(_)) => a.as_f64() == b.as_f64(),
        _ => a == b,
    }
}
