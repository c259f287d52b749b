//! jsontext - query and mutate JSON text fields
//!
//! jsontext answers three kinds of request against a JSON document held as
//! text: positional access (first / last / nth top-level entry),
//! relational-style operators (`->`, `->>`, `#>`), and JSONPath expressions.
//! Results come back as JSON text, a plain structure, or a typed tree, and
//! updates come back as a re-serialized document.
//!
//! # Quick Start
//!
//! ```
//! use jsontext::{JsonText, JsonValue, Operand};
//!
//! let mut field = JsonText::new(r#"{"store":{"book":[{"a":1},{"a":2}]}}"#);
//!
//! let out = field.query("#>", Some(Operand::from(r#"{"store":"book"}"#))).unwrap();
//! assert_eq!(out.as_json(), Some(r#"{"book":[{"a":1},{"a":2}]}"#));
//!
//! let value: JsonValue = r#"{"a":99}"#.parse().unwrap();
//! field.set_value_at(value, "$.store.book[1]").unwrap();
//! assert_eq!(field.value(), r#"{"store":{"book":[{"a":1},{"a":99}]}}"#);
//! ```
//!
//! # Architecture
//!
//! The JSON tree, locations, limits and the error type live in
//! `jsontext-core`; classification, matching, shaping, mutation and
//! configuration live in `jsontext-engine`. This crate re-exports both.

pub use jsontext_engine::*;
