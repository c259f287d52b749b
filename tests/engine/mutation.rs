//! Mutation Tests
//!
//! `set_value_at` through the field and the free function.

use crate::common::*;

#[test]
fn bulk_update_every_match() {
    let out = set_value_at(&store_doc(), jv("0"), "$..price").unwrap();
    let prices = field(&out, "array").query("$..price", None).unwrap();
    assert_eq!(prices, Output::Array(jv("[0,0,0,0,0]")));
}

#[test]
fn filter_targets() {
    let out = set_value_at(
        &store_doc(),
        jv(r#""discount""#),
        "$.store.book[?(@.price > 20)].category",
    )
    .unwrap();
    let cats = field(&out, "json")
        .query("$.store.book[*].category", None)
        .unwrap();
    assert_eq!(
        cats.as_json(),
        Some(r#"["reference","fiction","fiction","discount"]"#)
    );
}

#[test]
fn rewrite_keeps_order_and_duplicates() {
    let doc = r#"{"z":1,"a":{"x":1},"z":2}"#;
    let out = set_value_at(doc, jv("[true]"), "$.a.x").unwrap();
    assert_eq!(out, r#"{"z":1,"a":{"x":[true]},"z":2}"#);
}

#[test]
fn errors_leave_field_unchanged() {
    let mut f = field(r#"{"a":1}"#, "json");
    for (expr, check) in [
        ("$.b", "NoMatch"),
        ("->", "InvalidExpression"),
        ("a", "InvalidExpression"),
        ("$.a[", "InvalidExpression"),
    ] {
        let err = f.set_value_at(jv("2"), expr).unwrap_err();
        assert_eq!(err.kind(), check, "{}", expr);
        assert_eq!(f.value(), r#"{"a":1}"#);
    }
}

#[test]
fn malformed_document_is_reported() {
    let err = set_value_at("{not json", jv("1"), "$.a").unwrap_err();
    assert!(matches!(err, Error::MalformedJson { .. }));
    let err = set_value_at("false", jv("1"), "$.a").unwrap_err();
    assert!(matches!(err, Error::MalformedJson { .. }));
}

#[test]
fn store_set_reports_replacement_count() {
    let mut store = JsonStore::parse(r#"[{"v":1},{"v":2},{"w":3}]"#).unwrap();
    assert_eq!(store.set("$.*.v", jv("null")).unwrap(), 2);
    assert_eq!(store.to_string(), r#"[{"v":null},{"v":null},{"w":3}]"#);
}
