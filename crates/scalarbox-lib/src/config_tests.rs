use indoc::indoc;

use crate::{Config, MissingWrapper, RegistryError, ScalarKind};

#[test]
fn defaults_use_standard_wrapper_names() {
    let config = Config::new();

    assert_eq!(config.wrapper_name(ScalarKind::Number), "Number");
    assert_eq!(config.wrapper_name(ScalarKind::String), "String");
    assert_eq!(config.wrapper_name(ScalarKind::Boolean), "Boolean");
    assert_eq!(config.on_missing_wrapper(), MissingWrapper::Unknown);
}

#[test]
fn builder_overrides() {
    let config = Config::new()
        .wrapper(ScalarKind::String, "JSString")
        .missing_wrapper(MissingWrapper::Reject);

    assert_eq!(config.wrapper_name(ScalarKind::String), "JSString");
    assert_eq!(config.wrapper_name(ScalarKind::Number), "Number");
    assert_eq!(config.on_missing_wrapper(), MissingWrapper::Reject);
}

#[test]
fn parse_full_document() {
    let json = indoc! {r#"
        {
            "wrappers": {
                "number": "NumberObject",
                "string": "StringObject",
                "boolean": "BooleanObject"
            },
            "missing_wrapper": "reject"
        }
    "#};

    let config = Config::from_json(json).unwrap();

    assert_eq!(config.wrapper_name(ScalarKind::Number), "NumberObject");
    assert_eq!(config.wrapper_name(ScalarKind::Boolean), "BooleanObject");
    assert_eq!(config.on_missing_wrapper(), MissingWrapper::Reject);
}

#[test]
fn parse_partial_document_keeps_defaults() {
    let json = r#"{ "wrappers": { "boolean": "Bool" } }"#;

    let config = Config::from_json(json).unwrap();

    assert_eq!(config.wrapper_name(ScalarKind::Boolean), "Bool");
    assert_eq!(config.wrapper_name(ScalarKind::Number), "Number");
    assert_eq!(config.on_missing_wrapper(), MissingWrapper::Unknown);
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn parse_rejects_unknown_fields() {
    let err = Config::from_json(r#"{ "wrapper": {} }"#).unwrap_err();

    assert!(matches!(err, RegistryError::Config(_)));
    assert!(
        err.to_string()
            .starts_with("invalid registry configuration: unknown field `wrapper`")
    );
}

#[test]
fn parse_rejects_unknown_policy() {
    let err = Config::from_json(r#"{ "missing_wrapper": "ignore" }"#).unwrap_err();
    assert!(matches!(err, RegistryError::Config(_)));
}
