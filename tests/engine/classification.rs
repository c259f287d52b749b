//! Classification Tests
//!
//! How the dispatcher routes candidates before any document is parsed.

use crate::common::*;
use jsontext::{classify_with, ClassResult};

#[test]
fn operator_tokens_route_to_operators() {
    let f = field(r#"{"a":1}"#, "json");
    assert!(f.query("->>", Some("a".into())).is_ok());
    assert!(matches!(
        f.query("->>", None).unwrap_err(),
        Error::InvalidArgument { .. }
    ));
}

#[test]
fn expressions_refuse_operands() {
    let f = field(r#"{"a":1}"#, "json");
    let err = f.query("$.a", Some("a".into())).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn unrecognised_candidates_are_invalid_expressions() {
    let f = field(r#"{"a":1}"#, "json");
    for bad in ["", "a", "$", "#>>", "@>", "$.1", "store.book"] {
        let err = f.query(bad, None).unwrap_err();
        assert!(matches!(err, Error::InvalidExpression { .. }), "{:?}", bad);
        assert!(err.to_string().starts_with("invalid operator or expression"));
    }
}

#[test]
fn pattern_accepted_but_unparsable_is_invalid_expression() {
    let f = field(r#"{"a":1}"#, "json");
    let err = f.query("$.a[", None).unwrap_err();
    assert!(matches!(err, Error::InvalidExpression { .. }));
}

#[test]
fn predicates_agree_with_dispatch() {
    let pg = OperatorVocabulary::Postgres;
    for op in pg.tokens() {
        assert!(is_valid_operator(op, pg));
        assert!(!is_valid_expression(op));
        assert_eq!(classify_with(op, pg), ClassResult::Operator(op.to_string()));
    }
    assert!(is_valid_expression("$.store.book"));
    assert!(!is_valid_operator("$.store.book", pg));
}

#[test]
fn bracket_directly_after_root_is_rejected() {
    let f = field(r#"[{"v":1}]"#, "json");
    for bad in ["$[0]", "$[*].v", "$['a']"] {
        assert!(!is_valid_expression(bad), "{}", bad);
        assert!(matches!(
            f.query(bad, None).unwrap_err(),
            Error::InvalidExpression { .. }
        ));
    }
    let err = set_value_at(r#"[{"v":1}]"#, jv("0"), "$[0]").unwrap_err();
    assert!(matches!(err, Error::InvalidExpression { .. }));
}

#[test]
fn deeply_nested_filter_is_an_error_not_an_abort() {
    let f = field(r#"{"a":[{"b":1}]}"#, "json");
    let expr = format!("$.a[?{}@.b{}]", "(".repeat(200_000), ")".repeat(200_000));
    assert!(matches!(
        f.query(&expr, None).unwrap_err(),
        Error::InvalidExpression { .. }
    ));
}
