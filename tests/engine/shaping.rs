//! Return Mode Tests
//!
//! The same results rendered as json, array and silverstripe (typed).

use crate::common::*;

#[test]
fn empty_result_in_each_mode() {
    let doc = r#"{"a":1}"#;
    assert_eq!(field(doc, "json").query("$.zz", None).unwrap(), Output::Json("[]".into()));
    assert_eq!(
        field(doc, "array").query("$.zz", None).unwrap(),
        Output::Array(JsonValue::array())
    );
    assert_eq!(field(doc, "silverstripe").query("$.zz", None).unwrap(), Output::Typed(None));
}

#[test]
fn typed_mode_wraps_scalars_by_kind() {
    let f = field(r#"{"row":{"f":1.5,"i":3,"t":true,"n":false,"s":"x","z":null}}"#, "silverstripe");
    let out = f.query("->>", Some("row".into())).unwrap();
    let row = out.as_typed().unwrap().get("row").unwrap();
    assert_eq!(row.get("f"), Some(&TypedValue::Float(1.5)));
    assert_eq!(row.get("i"), Some(&TypedValue::Int(3)));
    assert_eq!(row.get("t"), Some(&TypedValue::Boolean(1)));
    assert_eq!(row.get("n"), Some(&TypedValue::Boolean(0)));
    assert_eq!(row.get("s"), Some(&TypedValue::Varchar("x".into())));
    assert_eq!(row.get("z"), Some(&TypedValue::Null));
}

#[test]
fn typed_mode_keeps_container_shape() {
    let f = field(r#"{"rows":[[1,[2.0]]]}"#, "silverstripe");
    let out = f.query("$.rows[0]", None).unwrap();
    assert_eq!(
        out.as_typed(),
        Some(&TypedValue::Array(vec![TypedValue::Array(vec![
            TypedValue::Int(1),
            TypedValue::Array(vec![TypedValue::Float(2.0)]),
        ])]))
    );
}

#[test]
fn return_type_can_switch_between_calls() {
    let mut f = JsonText::new(r#"{"k":[1,2]}"#);
    assert_eq!(f.return_type(), ReturnType::Json);
    let json = f.query("$.k[*]", None).unwrap();
    assert_eq!(json.as_json(), Some("[1,2]"));

    f.set_return_type("array").unwrap();
    let array = f.query("$.k[*]", None).unwrap();
    assert_eq!(array.as_array(), Some(&jv("[1,2]")));
}

#[test]
fn json_output_leaves_slashes_unescaped() {
    let f = field(r#"{"url":"http://a/b"}"#, "json");
    let out = f.query("->>", Some("url".into())).unwrap();
    assert_eq!(out.as_json(), Some(r#"{"url":"http://a/b"}"#));
}
