//! Query and mutation engine for jsontext
//!
//! This crate turns a JSON string plus a request into a shaped result or an
//! updated JSON string:
//! - Classifier: operator token, JSONPath expression, or invalid
//! - Operators: top-level matching for `->`, `->>`, `#>`
//! - JSONPath: parser and evaluator for the supported subset
//! - Normalizer: JSON text, plain structure, or typed tree
//! - Mutation: bulk replacement of every matched node
//! - JsonText: the field facade tying them together
//!
//! The engine is synchronous and does no I/O outside configuration loading.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classifier;
pub mod config;
pub mod field;
pub mod jsonpath;
pub mod matching;
pub mod mutation;
pub mod normalize;
pub mod operand;
pub mod operators;
pub mod store;
pub mod vocabulary;

pub use classifier::{classify, classify_with, ClassResult};
pub use config::{EngineConfig, CONFIG_FILE_NAME};
pub use field::{is_valid_expression, is_valid_json, is_valid_operator, JsonText};
pub use jsonpath::{match_on_expr, ExprParseError, JsonPathExpr};
pub use matching::MatchResult;
pub use mutation::{set_value_at, set_value_at_with};
pub use normalize::{shape, Output, ReturnType};
pub use operand::{Operand, PathDescriptor};
pub use operators::{match_position, match_top_level, Position};
pub use store::JsonStore;
pub use vocabulary::{MatchKind, OperatorVocabulary};

pub use jsontext_core::{
    DocumentLimits, Error, JsonObject, JsonValue, KeyRef, LimitError, Location, PathSegment,
    Result, TypedValue,
};
