//! JSON types for the query/mutation engine
//!
//! This module defines the in-memory JSON tree and the ways to address it:
//! - JsonValue: Parsed JSON document tree
//! - JsonObject: Ordered object members, duplicate keys preserved
//! - Location: Normalized location of one node (e.g. `$['store']['book'][1]`)
//! - PathSegment: Individual location component (Member or Index)
//! - KeyRef: Key or index a match is reported under
//!
//! # Duplicate Keys
//!
//! JSON permits repeated member names and the stored documents this engine
//! serves are not always well formed. The parser therefore keeps every member
//! in source order instead of collapsing them into a map:
//!
//! ```
//! use jsontext_core::JsonValue;
//!
//! let doc: JsonValue = r#"{"a":{"b":1},"a":{"b":2}}"#.parse().unwrap();
//! let obj = doc.as_object().unwrap();
//! assert_eq!(obj.len(), 2);
//! assert_eq!(obj.get_all("a").count(), 2);
//! assert_eq!(doc.to_json_string(), r#"{"a":{"b":1},"a":{"b":2}}"#);
//! ```
//!
//! # Document Size Limits
//!
//! | Limit | Default | Constant |
//! |-------|---------|----------|
//! | Max document size | 16 MB | [`MAX_DOCUMENT_SIZE`] |
//! | Max nesting depth | 100 levels | [`MAX_NESTING_DEPTH`] |
//! | Max array size | 1M elements | [`MAX_ARRAY_SIZE`] |

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Document Size Limits
// =============================================================================

/// Maximum document size in bytes (16 MB)
pub const MAX_DOCUMENT_SIZE: usize = 16 * 1024 * 1024;

/// Maximum nesting depth in a JSON document (100 levels)
///
/// Matching and serialization recurse over the tree, so depth is bounded.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Maximum array size in elements (1 million elements)
pub const MAX_ARRAY_SIZE: usize = 1_000_000;

/// Error type for document limit violations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimitError {
    /// Document exceeds maximum size
    #[error("document size {size} exceeds maximum of {max} bytes")]
    DocumentTooLarge {
        /// Actual document size
        size: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// Document nesting exceeds maximum depth
    #[error("document nesting depth {depth} exceeds maximum of {max} levels")]
    NestingTooDeep {
        /// Actual nesting depth
        depth: usize,
        /// Maximum allowed depth
        max: usize,
    },

    /// Array exceeds maximum size
    #[error("array size {size} exceeds maximum of {max} elements")]
    ArrayTooLarge {
        /// Actual array size
        size: usize,
        /// Maximum allowed size
        max: usize,
    },
}

/// Configurable document limits
///
/// Defaults to [`MAX_DOCUMENT_SIZE`], [`MAX_NESTING_DEPTH`] and
/// [`MAX_ARRAY_SIZE`]. Deserializes from a `[limits]` table with every field
/// optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentLimits {
    /// Maximum serialized size in bytes
    pub max_document_size: usize,
    /// Maximum container nesting depth
    pub max_nesting_depth: usize,
    /// Maximum number of elements in any one array
    pub max_array_size: usize,
}

impl Default for DocumentLimits {
    fn default() -> Self {
        DocumentLimits {
            max_document_size: MAX_DOCUMENT_SIZE,
            max_nesting_depth: MAX_NESTING_DEPTH,
            max_array_size: MAX_ARRAY_SIZE,
        }
    }
}

impl DocumentLimits {
    /// Check raw text length before parsing
    pub fn validate_text(&self, text: &str) -> Result<(), LimitError> {
        if text.len() > self.max_document_size {
            return Err(LimitError::DocumentTooLarge {
                size: text.len(),
                max: self.max_document_size,
            });
        }
        Ok(())
    }

    /// Validate all limits against a parsed value
    ///
    /// Checks size, nesting depth, and array sizes.
    /// Returns the first error encountered, if any.
    pub fn validate(&self, value: &JsonValue) -> Result<(), LimitError> {
        let size = value.size_bytes();
        if size > self.max_document_size {
            return Err(LimitError::DocumentTooLarge {
                size,
                max: self.max_document_size,
            });
        }
        let depth = value.nesting_depth();
        if depth > self.max_nesting_depth {
            return Err(LimitError::NestingTooDeep {
                depth,
                max: self.max_nesting_depth,
            });
        }
        let array_size = value.max_array_size();
        if array_size > self.max_array_size {
            return Err(LimitError::ArrayTooLarge {
                size: array_size,
                max: self.max_array_size,
            });
        }
        Ok(())
    }
}

// =============================================================================
// JsonValue
// =============================================================================

/// Parsed JSON value
///
/// A tagged union over the six JSON kinds. Numbers keep the integer/float
/// shape of their literal; objects keep member order and duplicate members.
///
/// # Examples
///
/// ```
/// use jsontext_core::JsonValue;
///
/// let obj = JsonValue::object();
/// let arr = JsonValue::array();
/// let null = JsonValue::null();
///
/// let s = JsonValue::from("hello");
/// let n = JsonValue::from(42i64);
/// let b = JsonValue::from(true);
///
/// assert!(obj.is_object());
/// assert!(arr.is_array());
/// assert!(null.is_null());
/// assert_eq!(s.as_str(), Some("hello"));
/// assert_eq!(n.as_i64(), Some(42));
/// assert_eq!(b.as_bool(), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// `null`
    #[default]
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Integer or floating point number
    Number(serde_json::Number),
    /// UTF-8 string
    String(String),
    /// Ordered sequence of values
    Array(Vec<JsonValue>),
    /// Ordered object members
    Object(JsonObject),
}

impl JsonValue {
    /// Create a null JSON value
    pub fn null() -> Self {
        JsonValue::Null
    }

    /// Create an empty JSON object
    pub fn object() -> Self {
        JsonValue::Object(JsonObject::new())
    }

    /// Create an empty JSON array
    pub fn array() -> Self {
        JsonValue::Array(Vec::new())
    }

    /// Serialize to compact JSON string
    ///
    /// Forward slashes are not escaped.
    pub fn to_json_string(&self) -> String {
        self.to_string()
    }

    /// Kind name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }

    /// Check if this is `null`
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Check if this is an object
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Check if this is an array
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Check if this is an object or array
    pub fn is_container(&self) -> bool {
        self.is_object() || self.is_array()
    }

    /// Get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an integer that fits
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Get as f64 for any number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as array slice
    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get as mutable array
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get as object
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get as mutable object
    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        match self {
            JsonValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// First member named `key` (objects only)
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Number of top-level entries (0 for scalars)
    pub fn len(&self) -> usize {
        match self {
            JsonValue::Array(items) => items.len(),
            JsonValue::Object(obj) => obj.len(),
            _ => 0,
        }
    }

    /// True for empty containers and for scalars
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Top-level entries with the key each is reported under
    ///
    /// Arrays yield `KeyRef::Index`, objects yield `KeyRef::Key` (duplicates
    /// included), scalars yield nothing.
    pub fn entries(&self) -> Vec<(KeyRef, &JsonValue)> {
        match self {
            JsonValue::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (KeyRef::Index(i), v))
                .collect(),
            JsonValue::Object(obj) => obj
                .iter()
                .map(|(k, v)| (KeyRef::Key(k.to_string()), v))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Approximate size in bytes (length of the compact serialization)
    pub fn size_bytes(&self) -> usize {
        self.to_json_string().len()
    }

    /// Calculate the maximum nesting depth of this JSON value
    ///
    /// Returns 0 for primitives (null, bool, number, string),
    /// and counts nested objects/arrays.
    pub fn nesting_depth(&self) -> usize {
        match self {
            JsonValue::Null | JsonValue::Bool(_) | JsonValue::Number(_) | JsonValue::String(_) => 0,
            JsonValue::Array(items) => {
                1 + items.iter().map(JsonValue::nesting_depth).max().unwrap_or(0)
            }
            JsonValue::Object(obj) => {
                1 + obj.values().map(JsonValue::nesting_depth).max().unwrap_or(0)
            }
        }
    }

    /// Find the maximum array size in this JSON value (including nested arrays)
    pub fn max_array_size(&self) -> usize {
        match self {
            JsonValue::Null | JsonValue::Bool(_) | JsonValue::Number(_) | JsonValue::String(_) => 0,
            JsonValue::Array(items) => {
                let nested_max = items.iter().map(JsonValue::max_array_size).max().unwrap_or(0);
                items.len().max(nested_max)
            }
            JsonValue::Object(obj) => obj.values().map(JsonValue::max_array_size).max().unwrap_or(0),
        }
    }
}

impl FromStr for JsonValue {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Number(n) => n.serialize(serializer),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            JsonValue::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (key, value) in obj.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(JsonValueVisitor)
    }
}

/// Builds a `JsonValue`, keeping every object member the input contains
struct JsonValueVisitor;

impl<'de> Visitor<'de> for JsonValueVisitor {
    type Value = JsonValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any valid JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<JsonValue, E> {
        Ok(JsonValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<JsonValue, E> {
        Ok(JsonValue::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<JsonValue, E> {
        Ok(JsonValue::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<JsonValue, E> {
        Ok(serde_json::Number::from_f64(v).map_or(JsonValue::Null, JsonValue::Number))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<JsonValue, E> {
        Ok(JsonValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<JsonValue, E> {
        Ok(JsonValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<JsonValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<JsonValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(JsonValue::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<JsonValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut obj = JsonObject::new();
        while let Some((key, value)) = map.next_entry::<String, JsonValue>()? {
            obj.push(key, value);
        }
        Ok(JsonValue::Object(obj))
    }
}

// From implementations for common types
impl From<serde_json::Value> for JsonValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => JsonValue::Number(n),
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Lossy for duplicate members: the last member with a given key wins.
impl From<JsonValue> for serde_json::Value {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(b) => serde_json::Value::Bool(b),
            JsonValue::Number(n) => serde_json::Value::Number(n),
            JsonValue::String(s) => serde_json::Value::String(s),
            JsonValue::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            JsonValue::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for JsonValue {
    fn from(v: bool) -> Self {
        JsonValue::Bool(v)
    }
}

impl From<i64> for JsonValue {
    fn from(v: i64) -> Self {
        JsonValue::Number(v.into())
    }
}

impl From<i32> for JsonValue {
    fn from(v: i32) -> Self {
        JsonValue::Number(v.into())
    }
}

impl From<u64> for JsonValue {
    fn from(v: u64) -> Self {
        JsonValue::Number(v.into())
    }
}

impl From<u32> for JsonValue {
    fn from(v: u32) -> Self {
        JsonValue::Number(v.into())
    }
}

impl From<f64> for JsonValue {
    fn from(v: f64) -> Self {
        serde_json::Number::from_f64(v).map_or(JsonValue::Null, JsonValue::Number)
    }
}

impl From<&str> for JsonValue {
    fn from(v: &str) -> Self {
        JsonValue::String(v.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(v: String) -> Self {
        JsonValue::String(v)
    }
}

impl<T: Into<JsonValue>> From<Vec<T>> for JsonValue {
    fn from(v: Vec<T>) -> Self {
        JsonValue::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => JsonValue::Null,
        }
    }
}

impl From<JsonObject> for JsonValue {
    fn from(obj: JsonObject) -> Self {
        JsonValue::Object(obj)
    }
}

// =============================================================================
// JsonObject
// =============================================================================

/// Ordered object members
///
/// Members are kept in source order. Duplicate keys are allowed; name lookup
/// returns the first member, [`JsonObject::get_all`] returns every one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonObject {
    members: Vec<(String, JsonValue)>,
}

impl JsonObject {
    /// Create an empty object
    pub fn new() -> Self {
        JsonObject {
            members: Vec::new(),
        }
    }

    /// Number of members, duplicates included
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if there are no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// First member named `key`
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.members.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Every member named `key`, in order
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a JsonValue> + 'a {
        self.members
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Member at `position`
    pub fn member(&self, position: usize) -> Option<(&str, &JsonValue)> {
        self.members.get(position).map(|(k, v)| (k.as_str(), v))
    }

    /// Member at `position`, value mutably
    pub fn member_mut(&mut self, position: usize) -> Option<(&str, &mut JsonValue)> {
        self.members
            .get_mut(position)
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Append a member even if the key already exists
    pub fn push(&mut self, key: impl Into<String>, value: JsonValue) {
        self.members.push((key.into(), value));
    }

    /// Iterate `(key, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate values in order
    pub fn values(&self) -> impl Iterator<Item = &JsonValue> {
        self.members.iter().map(|(_, v)| v)
    }
}

impl FromIterator<(String, JsonValue)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
        JsonObject {
            members: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, JsonValue);
    type IntoIter = std::vec::IntoIter<(String, JsonValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

// =============================================================================
// KeyRef
// =============================================================================

/// Key a matched value is reported under
///
/// Used only to re-associate a value with its origin when shaping output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyRef {
    /// Object member name
    Key(String),
    /// Array index, or match ordinal for expression results
    Index(usize),
}

impl fmt::Display for KeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRef::Key(k) => f.write_str(k),
            KeyRef::Index(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for KeyRef {
    fn from(k: &str) -> Self {
        KeyRef::Key(k.to_string())
    }
}

impl From<usize> for KeyRef {
    fn from(i: usize) -> Self {
        KeyRef::Index(i)
    }
}

// =============================================================================
// Location and PathSegment
// =============================================================================

/// A segment in a normalized location
///
/// Object members are addressed by position so that duplicate keys remain
/// individually addressable; the key is kept for display and verification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member: `['key']`
    Member {
        /// Position of the member within its object
        position: usize,
        /// Member name
        key: String,
    },
    /// Array index: `[0]`
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Member { key, .. } => {
                f.write_str("['")?;
                for c in key.chars() {
                    match c {
                        '\'' => f.write_str("\\'")?,
                        '\\' => f.write_str("\\\\")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str("']")
            }
            PathSegment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// Normalized location of a single node
///
/// Produced by expression evaluation and consumed by mutation. Displays as a
/// normalized JSONPath.
///
/// ```
/// use jsontext_core::Location;
///
/// let loc = Location::root().member(0, "store").member(0, "book").index(1);
/// assert_eq!(loc.to_string(), "$['store']['book'][1]");
/// assert!(Location::root().is_ancestor_of(&loc));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Location {
    segments: Vec<PathSegment>,
}

impl Location {
    /// Create the root location
    pub fn root() -> Self {
        Location {
            segments: Vec::new(),
        }
    }

    /// Get the segments
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Get the number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if this is the root location (empty)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check if this is the root location
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a member segment (builder pattern)
    pub fn member(mut self, position: usize, key: impl Into<String>) -> Self {
        self.push_member(position, key);
        self
    }

    /// Append an index segment (builder pattern)
    pub fn index(mut self, idx: usize) -> Self {
        self.push_index(idx);
        self
    }

    /// Push a member segment (mutating)
    pub fn push_member(&mut self, position: usize, key: impl Into<String>) {
        self.segments.push(PathSegment::Member {
            position,
            key: key.into(),
        });
    }

    /// Push an index segment (mutating)
    pub fn push_index(&mut self, idx: usize) {
        self.segments.push(PathSegment::Index(idx));
    }

    /// Check if this location is an ancestor of another (or equal)
    pub fn is_ancestor_of(&self, other: &Location) -> bool {
        if self.segments.len() > other.segments.len() {
            return false;
        }
        self.segments
            .iter()
            .zip(other.segments.iter())
            .all(|(a, b)| a == b)
    }

    /// Check if this location is a strict ancestor of another (not equal)
    pub fn is_strict_ancestor_of(&self, other: &Location) -> bool {
        self.segments.len() < other.segments.len() && self.is_ancestor_of(other)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for seg in &self.segments {
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

// =============================================================================
// Location Operations
// =============================================================================

/// Error type for location operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// Type mismatch during traversal
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Expected type
        expected: &'static str,
        /// Actual type found
        found: &'static str,
    },

    /// Array index or member position out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// The container length
        len: usize,
    },

    /// Member at the position no longer carries the expected key
    #[error("location not found")]
    NotFound,
}

/// Replace the value at an existing location
///
/// Unlike path-creating setters, no intermediate containers are created: the
/// location must already exist. The root location replaces the whole value.
///
/// ```
/// use jsontext_core::{set_at_location, JsonValue, Location};
///
/// let mut json: JsonValue = r#"{"items": ["a", "b"]}"#.parse().unwrap();
/// let loc = Location::root().member(0, "items").index(1);
/// set_at_location(&mut json, &loc, JsonValue::from("z")).unwrap();
/// assert_eq!(json.to_json_string(), r#"{"items":["a","z"]}"#);
/// ```
pub fn set_at_location(
    root: &mut JsonValue,
    location: &Location,
    value: JsonValue,
) -> Result<(), LocationError> {
    let mut current = root;
    for segment in location.segments() {
        current = match segment {
            PathSegment::Member { position, key } => {
                let found = current.type_name();
                let obj = current.as_object_mut().ok_or(LocationError::TypeMismatch {
                    expected: "object",
                    found,
                })?;
                let len = obj.len();
                let (member_key, v) =
                    obj.member_mut(*position)
                        .ok_or(LocationError::IndexOutOfBounds {
                            index: *position,
                            len,
                        })?;
                if member_key != key.as_str() {
                    return Err(LocationError::NotFound);
                }
                v
            }
            PathSegment::Index(idx) => {
                let found = current.type_name();
                let items = current.as_array_mut().ok_or(LocationError::TypeMismatch {
                    expected: "array",
                    found,
                })?;
                let len = items.len();
                items
                    .get_mut(*idx)
                    .ok_or(LocationError::IndexOutOfBounds { index: *idx, len })?
            }
        };
    }
    *current = value;
    Ok(())
}
