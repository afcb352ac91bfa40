use super::*;

#[test]
fn test_empty_object_is_default_config() {
    let config = TransformerConfig::from_json_str("{}").expect("empty object parses");
    assert_eq!(config, TransformerConfig::default());
}

#[test]
fn test_plugin_entry_keys_are_ignored() {
    let config = TransformerConfig::from_json_str(
        r#"{ "transform": "./dist/uuidTransformer.js", "after": false }"#,
    )
    .expect("plugin entry parses");
    assert_eq!(config, TransformerConfig::default());
}

#[test]
fn test_null_means_no_options() {
    let config =
        TransformerConfig::from_json_value(serde_json::Value::Null).expect("null accepted");
    assert_eq!(config, TransformerConfig::default());
}

#[test]
fn test_non_object_config_is_rejected() {
    let err = TransformerConfig::from_json_str("[1, 2]").expect_err("array rejected");
    assert!(matches!(err, ConfigError::InvalidShape { found: "array" }));
    assert_eq!(
        err.to_string(),
        "transformer config must be a JSON object, found array"
    );
}

#[test]
fn test_malformed_json_is_reported() {
    let err = TransformerConfig::from_json_str("{ not json").expect_err("syntax error");
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("invalid transformer config JSON"));
}

#[test]
fn test_config_serializes_as_empty_object() {
    let json = serde_json::to_string(&TransformerConfig::default()).expect("serializes");
    assert_eq!(json, "{}");
}
