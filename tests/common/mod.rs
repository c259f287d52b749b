//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from a test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::Once;

pub use jsontext::{
    is_valid_expression, is_valid_json, is_valid_operator, set_value_at, EngineConfig, Error,
    JsonStore, JsonText, JsonValue, KeyRef, MatchResult, Operand, OperatorVocabulary, Output,
    PathDescriptor, Position, ReturnType, TypedValue,
};

static INIT_TRACING: Once = Once::new();

/// Install a fmt subscriber that writes through the test harness.
///
/// Output is captured per test and shown for failures only.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// The bookstore document used across suites.
pub fn store_doc() -> String {
    serde_json::json!({
        "store": {
            "book": [
                {"category": "reference", "author": "Nigel Rees", "title": "Sayings of the Century", "price": 8.95},
                {"category": "fiction", "author": "Evelyn Waugh", "title": "Sword of Honour", "price": 12.99},
                {"category": "fiction", "author": "Herman Melville", "title": "Moby Dick", "isbn": "0-553-21311-3", "price": 8.99},
                {"category": "fiction", "author": "J. R. R. Tolkien", "title": "The Lord of the Rings", "isbn": "0-395-19395-8", "price": 22.99}
            ],
            "bicycle": {"color": "red", "price": 19.95}
        }
    })
    .to_string()
}

/// Parse a JSON literal, panicking on bad test input.
pub fn jv(text: &str) -> JsonValue {
    text.parse().expect("test JSON literal")
}

/// Field with the given return mode.
pub fn field(text: &str, mode: &str) -> JsonText {
    init_tracing();
    let mut f = JsonText::new(text);
    f.set_return_type(mode).expect("valid mode");
    f
}

/// Query and render the result as compact JSON text (Json mode).
pub fn query_json(text: &str, op: &str, operand: Option<Operand>) -> String {
    field(text, "json")
        .query(op, operand)
        .expect("query")
        .as_json()
        .expect("json output")
        .to_string()
}
