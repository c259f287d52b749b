//! Property Tests
//!
//! Invariants that hold for arbitrary documents and candidates.

use crate::common::*;
use jsontext::{classify_with, ClassResult, JsonObject};
use proptest::prelude::*;

fn arb_leaf() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::from),
        any::<i64>().prop_map(JsonValue::from),
        Just(JsonValue::from(1.5)),
        "[a-z/ ]{0,8}".prop_map(JsonValue::from),
    ]
}

// Objects draw keys from a tiny alphabet so duplicate members are common.
fn arb_json() -> impl Strategy<Value = JsonValue> {
    arb_leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JsonValue::Array),
            prop::collection::vec(("[a-c]", inner), 0..6).prop_map(|members| {
                JsonValue::Object(members.into_iter().collect::<JsonObject>())
            }),
        ]
    })
}

fn arb_document() -> impl Strategy<Value = JsonValue> {
    arb_json().prop_map(|v| if v.is_container() { v } else { JsonValue::Array(vec![v]) })
}

proptest! {
    #[test]
    fn prop_round_trip_is_stable(doc in arb_document()) {
        let text = doc.to_json_string();
        let store = JsonStore::parse(&text).unwrap();
        prop_assert_eq!(store.root(), &doc);
        let again = JsonStore::parse(&store.to_string()).unwrap();
        prop_assert_eq!(again.to_string(), text);
    }

    #[test]
    fn prop_classifier_is_total(candidate in ".{0,12}") {
        let pg = OperatorVocabulary::Postgres;
        let class = classify_with(&candidate, pg);
        let op = is_valid_operator(&candidate, pg);
        let expr = is_valid_expression(&candidate);
        match class {
            ClassResult::Operator(_) => prop_assert!(op),
            ClassResult::JsonPathExpression => prop_assert!(!op && expr),
            ClassResult::Invalid => prop_assert!(!op && !expr),
        }
    }

    #[test]
    fn prop_mutation_is_idempotent(
        doc in arb_document(),
        value in arb_json(),
        expr in prop::sample::select(vec!["$..a", "$.*", "$..*", "[0:2:1]", "$..b[0]", "$.a.b"]),
    ) {
        let text = doc.to_json_string();
        match set_value_at(&text, value.clone(), expr) {
            Ok(once) => {
                let twice = set_value_at(&once, value, expr).unwrap();
                prop_assert_eq!(once, twice);
            }
            Err(err) => prop_assert!(
                matches!(err, Error::NoMatch { .. }),
                "unexpected error {:?}", err
            ),
        }
    }

    #[test]
    fn prop_int_and_str_operators_reject_wrong_kinds(n in any::<i64>(), key in "[a-z0-9]{0,6}") {
        let f = JsonText::new(r#"{"a":1,"0":2}"#);
        prop_assert!(
            matches!(f.query("->>", Some(Operand::Int(n))), Err(Error::InvalidArgument { .. })),
            "->> accepted an integer operand"
        );
        prop_assert!(
            matches!(f.query("->", Some(Operand::from(key))), Err(Error::InvalidArgument { .. })),
            "-> accepted a string operand"
        );
    }

    #[test]
    fn prop_empty_shapes_per_mode(doc in arb_document()) {
        let text = doc.to_json_string();
        for (mode, expect_typed_none) in [("json", false), ("array", false), ("silverstripe", true)] {
            let out = field(&text, mode).query("$.nonexistent_key", None).unwrap();
            prop_assert!(out.is_empty());
            prop_assert_eq!(matches!(out, Output::Typed(None)), expect_typed_none);
        }
    }
}
