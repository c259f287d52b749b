//! Operator Tests
//!
//! `->`, `->>` and `#>` against the bookstore fixture and edge documents.

use crate::common::*;

#[test]
fn str_operator_returns_member_keyed_by_name() {
    let out = query_json(&store_doc(), "->>", Some("store".into()));
    let parsed = jv(&out);
    assert!(parsed.get("store").unwrap().get("bicycle").is_some());
}

#[test]
fn int_operator_indexes_arrays() {
    assert_eq!(query_json("[10,20,30]", "->", Some(Operand::Int(0))), "[10]");
    assert_eq!(query_json("[10,20,30]", "->", Some(Operand::Int(2))), r#"{"2":30}"#);
    assert_eq!(query_json("[10,20,30]", "->", Some(Operand::Int(3))), "[]");
    assert_eq!(query_json("[10,20,30]", "->", Some(Operand::Int(-1))), "[]");
}

#[test]
fn int_operator_matches_numeric_string_keys() {
    assert_eq!(
        query_json(r#"{"7":"seven"}"#, "->", Some(Operand::Int(7))),
        r#"{"7":"seven"}"#
    );
}

#[test]
fn wrong_operand_kinds_are_contract_errors() {
    let f = field(&store_doc(), "json");
    let cases: Vec<(&str, Operand)> = vec![
        ("->", Operand::from("store")),
        ("->", PathDescriptor::new("a", "b").into()),
        ("->>", Operand::Int(0)),
        ("->>", PathDescriptor::new("a", "b").into()),
        ("#>", Operand::Int(0)),
        ("#>", Operand::from("store")),
    ];
    for (op, operand) in cases {
        let err = f.query(op, Some(operand.clone())).unwrap_err();
        assert!(
            matches!(err, Error::InvalidArgument { .. }),
            "{} {:?} gave {:?}",
            op,
            operand,
            err
        );
    }
}

#[test]
fn path_operator_descends_one_level() {
    let f = field(&store_doc(), "array");
    let out = f
        .query("#>", Some(Operand::from(r#"{"store":"bicycle"}"#)))
        .unwrap();
    assert_eq!(
        out,
        Output::Array(jv(r#"{"bicycle":{"color":"red","price":19.95}}"#))
    );

    let out = f.query("#>", Some(Operand::from("{store,missing}"))).unwrap();
    assert!(out.is_empty());
}

#[test]
fn path_operator_into_array_by_index() {
    let f = field(r#"{"tags":["a","b","c"]}"#, "json");
    let out = f.query("#>", Some(Operand::from("{tags,2}"))).unwrap();
    assert_eq!(out.as_json(), Some(r#"{"2":"c"}"#));
}

#[test]
fn path_operator_duplicates_keep_document_order() {
    let doc = r#"{"a":{"b":"first"},"x":0,"a":{"b":"second","b":"third"}}"#;
    let f = field(doc, "json");
    let result = f
        .resolve("#>", Some(&PathDescriptor::new("a", "b").into()))
        .unwrap();
    assert_eq!(result.len(), 3);
    assert_eq!(
        f.query("#>", Some(PathDescriptor::new("a", "b").into()))
            .unwrap()
            .as_json(),
        Some(r#"["first","second","third"]"#)
    );
}
