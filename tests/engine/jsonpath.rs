//! JSONPath Tests
//!
//! The supported expression subset against the bookstore fixture.

use crate::common::*;

fn titles(expr: &str) -> Vec<String> {
    let f = field(&store_doc(), "array");
    let out = f.query(expr, None).unwrap();
    out.as_array()
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn child_paths() {
    assert_eq!(titles("$.store.book[0].title"), vec!["Sayings of the Century"]);
    assert_eq!(titles("$.store['book'][-1]['title']"), vec!["The Lord of the Rings"]);
}

#[test]
fn wildcard_and_descent() {
    assert_eq!(titles("$.store.book[*].author").len(), 4);
    assert_eq!(titles("$..author").len(), 4);
    let f = field(&store_doc(), "array");
    let prices = f.query("$..price", None).unwrap();
    assert_eq!(prices.as_array().unwrap().len(), 5);
}

#[test]
fn slices_and_unions() {
    assert_eq!(
        titles("$.store.book[0:2].title"),
        vec!["Sayings of the Century", "Sword of Honour"]
    );
    assert_eq!(
        titles("$.store.book[::-2].title"),
        vec!["The Lord of the Rings", "Sword of Honour"]
    );
    assert_eq!(
        titles("$.store.book[3,0].title"),
        vec!["The Lord of the Rings", "Sayings of the Century"]
    );
}

#[test]
fn filters() {
    assert_eq!(
        titles("$.store.book[?(@.isbn)].title"),
        vec!["Moby Dick", "The Lord of the Rings"]
    );
    assert_eq!(
        titles("$.store.book[?(@.price < 10)].title"),
        vec!["Sayings of the Century", "Moby Dick"]
    );
    assert_eq!(
        titles("$..book[?(@.category == 'fiction' && @.price > 20)].title"),
        vec!["The Lord of the Rings"]
    );
}

#[test]
fn implicit_roots() {
    let f = field(r#"[{"n":1},{"n":2},{"n":3}]"#, "json");
    assert_eq!(f.query("[0:2:1]", None).unwrap().as_json(), Some(r#"[{"n":1},{"n":2}]"#));
    assert_eq!(f.query("*.n", None).unwrap().as_json(), Some("[1,2,3]"));
}

#[test]
fn no_match_is_empty_not_error() {
    let f = field(&store_doc(), "json");
    assert_eq!(f.query("$.store.pencil", None).unwrap().as_json(), Some("[]"));
}

#[test]
fn store_get_with_empty_path_is_whole_document() {
    let store = JsonStore::parse(&store_doc()).unwrap();
    let whole = store.get("").unwrap();
    assert_eq!(whole.key(), None);
    assert_eq!(whole.values()[0], store.root());
}

#[test]
fn extreme_slice_bounds_do_not_overflow() {
    let f = field(r#"{"a":[0,1,2]}"#, "array");
    let out = f.query("$.a[1::9223372036854775807]", None).unwrap();
    assert_eq!(out, Output::Array(jv("[1]")));
    let out = f
        .query("$.a[-9223372036854775808:9223372036854775807:-9223372036854775808]", None)
        .unwrap();
    assert!(out.is_empty());
    let out = f.query("$.a[::-9223372036854775808]", None).unwrap();
    assert_eq!(out, Output::Array(jv("[2]")));

    let updated = set_value_at(r#"{"a":[0,1,2]}"#, jv("9"), "$.a[1::9223372036854775807]").unwrap();
    assert_eq!(updated, r#"{"a":[0,9,2]}"#);
}
