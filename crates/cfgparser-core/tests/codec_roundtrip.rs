//! Integration tests for the cfgparser-core codec and file storage.
//!
//! These tests go through the public API only and cover the behaviour a
//! caller relies on: round-trips, default completeness, rejection of unknown
//! or invalid input, and the exact output layout.

use std::collections::HashMap;
use std::path::PathBuf;

use cfgparser_core::{
    decode_config, encode_config, parse_config, write_config, Config, ConfigError, Schema, Section,
};
use uuid::Uuid;

/// The defaults used by the example program.
fn full_schema() -> Schema {
    Schema::new(Config::from_literals(
        HashMap::from([
            ("debug".to_string(), false),
            ("auto_restart".to_string(), true),
        ]),
        HashMap::from([
            ("app_name".to_string(), "MyApp".to_string()),
            (
                "db_connection_string".to_string(),
                "host=localhost;user=user;password=pass;db=mydb".to_string(),
            ),
        ]),
        HashMap::from([
            ("max_retries".to_string(), 3),
            ("port".to_string(), 8080),
        ]),
        HashMap::from([("version".to_string(), 1.0)]),
    ))
}

/// `{bool: {debug: false}, int: {port: 8080}}`
fn small_schema() -> Schema {
    Schema::new(Config::new().with("debug", false).with("port", 8080))
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cfgparser_it_{}_{name}", Uuid::new_v4()))
}

// ── Round-trip ────────────────────────────────────────────────────────────────

#[test]
fn test_roundtrip_every_schema_key() {
    // Arrange
    let schema = full_schema();
    let mut config = schema.instantiate();
    config.set("debug", true);
    config.set("auto_restart", false);
    config.set("app_name", "UpdatedApp");
    config.set("db_connection_string", "host=db;user=admin");
    config.set("max_retries", -1);
    config.set("port", 65535);
    config.set("version", 2.125);

    // Act
    let decoded = decode_config(&encode_config(&config), &schema).expect("decode");

    // Assert
    assert_eq!(decoded, config);
}

#[test]
fn test_roundtrip_of_defaults_is_identity() {
    let schema = full_schema();
    let text = encode_config(schema.defaults());
    let decoded = decode_config(&text, &schema).expect("decode");
    assert_eq!(&decoded, schema.defaults());
}

#[test]
fn test_roundtrip_float_is_exact_up_to_six_digits() {
    let schema = full_schema();
    let config = schema.instantiate().with("version", 1.0 / 3.0);

    let decoded = decode_config(&encode_config(&config), &schema).expect("decode");

    assert_eq!(decoded.get::<f64>("version"), 0.333333);
}

#[test]
fn test_roundtrip_through_files() {
    // Arrange
    let schema = full_schema();
    let path = temp_path("roundtrip.cfg");
    let config = schema
        .instantiate()
        .with("debug", true)
        .with("app_name", "UpdatedApp");

    // Act
    write_config(&path, &config, &schema).expect("write");
    let loaded = parse_config(&path, &schema).expect("parse");

    // Assert
    assert_eq!(loaded, config);

    std::fs::remove_file(&path).ok();
}

// ── Default completeness ──────────────────────────────────────────────────────

#[test]
fn test_file_with_no_keys_yields_all_defaults() {
    let schema = full_schema();
    let config = decode_config("# nothing here\n\n[bool]\n[float]\n", &schema).expect("decode");

    for section in Section::ALL {
        for key in schema.defaults().section_keys(section) {
            assert_eq!(
                config.value(section, key),
                schema.defaults().value(section, key),
                "{section}.{key} must equal its default"
            );
        }
    }
    assert_eq!(config.len(), schema.defaults().len());
}

// ── Rejections ────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_int_key_is_rejected() {
    let err = decode_config("[int]\nbogus=1\n", &small_schema()).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownKey { section: Section::Int, .. }));
}

#[test]
fn test_non_numeric_port_is_invalid_value() {
    let err = decode_config("[int]\nport=abc\n", &small_schema()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    assert!(err.to_string().contains("invalid int value for key port"));
}

#[test]
fn test_maybe_is_invalid_bool() {
    let schema = Schema::new(Config::new().with("flag", false));
    let err = decode_config("[bool]\nflag=maybe\n", &schema).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    assert!(err.to_string().contains("invalid bool value for key flag"));
}

#[test]
fn test_line_without_separator_is_malformed() {
    let err = decode_config("[bool]\ndebug\n", &small_schema()).unwrap_err();
    assert!(matches!(err, ConfigError::MalformedLine { .. }));
    assert!(err.to_string().contains("debug"));
}

#[test]
fn test_unrecognized_section_is_rejected() {
    let err = decode_config("[weight]\nkg=70\n", &small_schema()).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownSection { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = parse_config(temp_path("absent.cfg"), &small_schema()).unwrap_err();
    assert!(err.is_io());
}

// ── Output layout ─────────────────────────────────────────────────────────────

#[test]
fn test_empty_float_mapping_produces_no_float_header() {
    let config = full_schema().instantiate();
    let mut without_floats = config.clone();
    without_floats.remove(Section::Float, "version");

    assert!(encode_config(&config).contains("[float]\n"));
    assert!(!encode_config(&without_floats).contains("[float]"));
}

#[test]
fn test_debug_port_scenario() {
    // Arrange
    let schema = small_schema();
    let input = "[bool]\ndebug=true\n[int]\nport=9090\n";

    // Act
    let config = decode_config(input, &schema).expect("decode");
    let written = encode_config(&config);

    // Assert
    assert!(config.get::<bool>("debug"));
    assert_eq!(config.get::<i64>("port"), 9090);
    assert_eq!(written, "[bool]\ndebug=true\n[int]\nport=9090\n");
}

#[test]
fn test_string_containing_equals_survives_roundtrip() {
    let schema = full_schema();
    let config = schema.instantiate();

    let decoded = decode_config(&encode_config(&config), &schema).expect("decode");

    assert_eq!(
        decoded.get::<String>("db_connection_string"),
        "host=localhost;user=user;password=pass;db=mydb"
    );
}
