//! Core types for jsontext
//!
//! This crate defines the foundational types used by the query engine:
//! - JsonValue / JsonObject: parsed JSON tree, duplicate members preserved
//! - Location / PathSegment: normalized node locations for mutation
//! - KeyRef: key or index a match is reported under
//! - DocumentLimits: size, depth and array limits
//! - TypedValue: kind-tagged output tree
//! - Error: error type shared by every crate

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod json;
pub mod value;

pub use error::{Error, Result};
pub use json::{
    set_at_location, DocumentLimits, JsonObject, JsonValue, KeyRef, LimitError, Location,
    LocationError, PathSegment, MAX_ARRAY_SIZE, MAX_DOCUMENT_SIZE, MAX_NESTING_DEPTH,
};
pub use value::TypedValue;
