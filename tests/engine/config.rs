//! Configuration Tests
//!
//! Fields built from `jsontext.toml`.

use crate::common::*;
use jsontext::CONFIG_FILE_NAME;
use tempfile::TempDir;

#[test]
fn field_uses_configured_return_type() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "return_type = \"silverstripe\"\n").unwrap();

    let config = EngineConfig::from_file(&path).unwrap();
    let f = JsonText::with_config(r#"{"n":1}"#, config);
    let out = f.query("->>", Some("n".into())).unwrap();
    assert_eq!(out.as_typed().unwrap().get("n"), Some(&TypedValue::Int(1)));
}

#[test]
fn configured_limits_apply_to_queries_and_updates() {
    let config = EngineConfig::from_toml_str("[limits]\nmax_array_size = 3\n").unwrap();

    let f = JsonText::with_config("[1,2,3,4]", config);
    assert!(matches!(f.first().unwrap_err(), Error::Limit(_)));

    let mut f = JsonText::with_config(r#"{"a":[]}"#, config);
    let err = f.set_value_at(jv("[1,2,3,4]"), "$.a").unwrap_err();
    assert!(matches!(err, Error::Limit(_)));
    assert_eq!(f.value(), r#"{"a":[]}"#);
}

#[test]
fn default_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    EngineConfig::write_default_if_missing(&path).unwrap();
    let config = EngineConfig::from_file(&path).unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.backend.allowed_operators().len(), 3);
}

#[test]
fn unknown_backend_fails_resolution() {
    let err = EngineConfig::from_toml_str("backend = \"sqlite\"").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    let err = OperatorVocabulary::from_name("sqlite").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}
