//! Tests for loading platform configuration and naming files

use xlog_modgen::adapters::json::{ConfigError, load_file};
use xlog_modgen::adapters::toml::{NamingError, load_naming};
use xlog_modgen::codegen::Naming;
use xlog_modgen::core::models::Level;

use crate::common::{PLATFORM_JSON, PLATFORM_MODULES, Workspace};

// =============================================================================
// PLATFORM CONFIGURATION
// =============================================================================

#[test]
fn test_load_platform_file() {
    let ws = Workspace::new();
    let path = ws.add_file("rdkx_logger.json", PLATFORM_JSON);

    let table = load_file(&path).unwrap();

    assert_eq!(table.len(), PLATFORM_MODULES.len());
    let names: Vec<_> = table.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, PLATFORM_MODULES);
    assert_eq!(table.get("VOICE").unwrap().level, Level::Fatal);
    assert_eq!(table.get("VOICE").unwrap().id, 4);
}

#[test]
fn test_load_repeated_key_keeps_first_position() {
    let ws = Workspace::new();
    let path = ws.add_file(
        "dup.json",
        r#"{"A": "XLOG_LEVEL_INFO", "B": "XLOG_LEVEL_DEBUG", "A": "XLOG_LEVEL_FATAL"}"#,
    );

    let table = load_file(&path).unwrap();

    let modules: Vec<_> = table.iter().map(|m| (m.id, m.name.as_str(), m.level)).collect();
    assert_eq!(modules, vec![(0, "A", Level::Fatal), (1, "B", Level::Debug)]);
    assert_eq!(table.invalid_id(), 2);
}

#[test]
fn test_load_directory_is_not_found() {
    let ws = Workspace::new();
    let err = load_file(ws.path()).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
fn test_load_string_root_rejected() {
    let ws = Workspace::new();
    let path = ws.add_file("bad.json", r#""XLOG_LEVEL_INFO""#);
    let err = load_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::NotAnObject { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn test_load_reports_first_invalid_value() {
    let ws = Workspace::new();
    let path = ws.add_file(
        "bad.json",
        r#"{"XLOG": "XLOG_LEVEL_INFO", "BLE": null, "AUDIO": "debug"}"#,
    );
    let err = load_file(&path).unwrap_err();
    match err {
        ConfigError::InvalidLevel { key, value, .. } => {
            assert_eq!(key, "BLE");
            assert_eq!(value, "null");
        },
        other => panic!("unexpected error: {other}"),
    }
}

// =============================================================================
// NAMING FILES
// =============================================================================

#[test]
fn test_load_naming_overrides() {
    let ws = Workspace::new();
    let path = ws.add_file(
        "naming.toml",
        r#"
enum_type = "acme_module_id_t"
qty_macro = "ACME_MODULE_QTY_MAX"
"#,
    );

    let naming = load_naming(&path).unwrap();

    assert_eq!(naming.enum_type, "acme_module_id_t");
    assert_eq!(naming.qty_macro, "ACME_MODULE_QTY_MAX");
    assert_eq!(naming.names_array, Naming::default().names_array);
}

#[test]
fn test_load_naming_rejects_wrong_type() {
    let ws = Workspace::new();
    let path = ws.add_file("naming.toml", "enum_type = 3\n");
    let err = load_naming(&path).unwrap_err();
    assert!(matches!(err, NamingError::Parse { .. }));
}
