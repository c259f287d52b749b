//! Canonical Scenarios
//!
//! One test per walkthrough of the query/mutation contract.

use crate::common::*;

#[test]
fn descendant_expression_in_array_mode() {
    let f = field(r#"{"a": {"b": {"c": "foo"}}}"#, "array");
    let out = f.query("$..c", None).unwrap();
    assert_eq!(out, Output::Array(jv(r#"["foo"]"#)));
}

#[test]
fn positional_accessors_report_index_and_value() {
    let f = field(r#"["x","y","z"]"#, "json");

    assert_eq!(
        f.entry(Position::First).unwrap(),
        MatchResult::single(KeyRef::Index(0), jv(r#""x""#))
    );
    assert_eq!(
        f.entry(Position::Last).unwrap(),
        MatchResult::single(KeyRef::Index(2), jv(r#""z""#))
    );
    assert_eq!(
        f.entry(Position::Nth(1)).unwrap(),
        MatchResult::single(KeyRef::Index(1), jv(r#""y""#))
    );

    assert_eq!(f.first().unwrap().as_json(), Some(r#"["x"]"#));
    assert_eq!(f.last().unwrap().as_json(), Some(r#"{"2":"z"}"#));
    assert_eq!(f.nth(1).unwrap().as_json(), Some(r#"{"1":"y"}"#));
}

#[test]
fn int_operator_on_object_without_numeric_keys_is_empty() {
    assert_eq!(query_json(r#"{"a":1,"b":2}"#, "->", Some(Operand::Int(0))), "[]");
}

#[test]
fn set_value_at_replaces_only_the_addressed_element() {
    let mut f = field(r#"{"store":{"book":[{"a":1},{"a":2}]}}"#, "json");
    let updated = f
        .set_value_at(jv(r#"{"a":99}"#), "$.store.book[1]")
        .unwrap()
        .to_string();
    assert_eq!(updated, r#"{"store":{"book":[{"a":1},{"a":99}]}}"#);

    let book = f.query("$.store.book[0]", None).unwrap();
    assert_eq!(book.as_json(), Some(r#"[{"a":1}]"#));
}

#[test]
fn unknown_return_type_is_rejected() {
    let mut f = JsonText::new("{}");
    let err = f.set_return_type("bogus").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn bare_true_is_not_a_document() {
    assert!(!is_valid_json("true"));
    let f = JsonText::new("true");
    assert!(matches!(f.first().unwrap_err(), Error::MalformedJson { .. }));
}

#[test]
fn duplicate_keys_return_every_path_match() {
    let out = query_json(
        r#"{"a":{"b":1},"a":{"b":2}}"#,
        "#>",
        Some(PathDescriptor::new("a", "b").into()),
    );
    assert_eq!(out, "[1,2]");
}
