//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use std::path::Path;

use test_case::test_case;
use xlog_modgen::adapters::json::{ConfigError, parse_str};
use xlog_modgen::core::models::Level;
use xlog_modgen::core::services::is_c_identifier;
use xlog_modgen::generator::OutputPaths;

// =============================================================================
// Level Parsing Tests
// =============================================================================

#[test_case("XLOG_LEVEL_DEBUG", Some(Level::Debug) ; "debug")]
#[test_case("XLOG_LEVEL_INFO", Some(Level::Info) ; "info")]
#[test_case("XLOG_LEVEL_WARN", Some(Level::Warn) ; "warn")]
#[test_case("XLOG_LEVEL_ERROR", Some(Level::Error) ; "error")]
#[test_case("XLOG_LEVEL_FATAL", Some(Level::Fatal) ; "fatal")]
#[test_case("XLOG_LEVEL_ALL", None ; "all sentinel rejected")]
#[test_case("XLOG_LEVEL_INVALID", None ; "invalid sentinel rejected")]
#[test_case("XLOG_LEVEL_WARNING", None ; "near miss rejected")]
#[test_case(" XLOG_LEVEL_INFO", None ; "leading space rejected")]
fn test_level_parse(input: &str, expected: Option<Level>) {
    assert_eq!(input.parse::<Level>().ok(), expected);
}

// =============================================================================
// Configuration Value Tests
// =============================================================================

#[test_case(r#""XLOG_LEVEL_INFO""#, true ; "symbol string")]
#[test_case("1", false ; "number")]
#[test_case("true", false ; "boolean")]
#[test_case("null", false ; "null")]
#[test_case(r#"["XLOG_LEVEL_INFO"]"#, false ; "array")]
#[test_case(r#"{"level": "XLOG_LEVEL_INFO"}"#, false ; "nested object")]
fn test_config_value(value: &str, valid: bool) {
    let content = format!(r#"{{"XLOG": {value}}}"#);
    let result = parse_str(Path::new("platform.json"), &content);
    assert_eq!(result.is_ok(), valid);
    if !valid {
        assert!(matches!(result, Err(ConfigError::InvalidLevel { .. })));
    }
}

#[test_case("XLOG", None ; "plain name")]
#[test_case("NONE", Some("reserved") ; "none sentinel rejected")]
#[test_case("INVALID", Some("reserved") ; "invalid sentinel rejected")]
#[test_case("None", None ; "sentinel match is case sensitive")]
#[test_case("XLOG_INVALID", None ; "sentinel as suffix allowed")]
#[test_case("2BLE", Some("identifier") ; "leading digit rejected")]
fn test_config_key(key: &str, rejected: Option<&str>) {
    let content = format!(r#"{{"{key}": "XLOG_LEVEL_INFO"}}"#);
    let result = parse_str(Path::new("platform.json"), &content);
    match rejected {
        None => assert_eq!(result.unwrap().get(key).unwrap().id, 0),
        Some("reserved") => assert!(matches!(result, Err(ConfigError::ReservedName { .. }))),
        Some(_) => assert!(matches!(result, Err(ConfigError::InvalidName { .. }))),
    }
}

#[test_case("[]" ; "array")]
#[test_case("42" ; "number")]
#[test_case("null" ; "null")]
fn test_config_root_must_be_object(content: &str) {
    let result = parse_str(Path::new("platform.json"), content);
    assert!(matches!(result, Err(ConfigError::NotAnObject { .. })));
}

// =============================================================================
// Identifier Tests
// =============================================================================

#[test_case("XLOG", true ; "upper")]
#[test_case("ctrlm_rcu", true ; "snake")]
#[test_case("_x1", true ; "leading underscore")]
#[test_case("1x", false ; "leading digit")]
#[test_case("a.b", false ; "dot")]
#[test_case("", false ; "empty")]
fn test_identifier(name: &str, expected: bool) {
    assert_eq!(is_c_identifier(name), expected);
}

// =============================================================================
// Output Path Tests
// =============================================================================

#[test_case("mods", "mods.hash", "mods.h", "mods_lookup.c" ; "bare name")]
#[test_case("out/rdkx_logger_modules", "out/rdkx_logger_modules.hash", "out/rdkx_logger_modules.h", "out/rdkx_logger_modules_lookup.c" ; "nested")]
#[test_case("a.b", "a.b.hash", "a.b.h", "a.b_lookup.c" ; "prefix with dot")]
fn test_output_paths(prefix: &str, gperf: &str, header: &str, lookup: &str) {
    let paths = OutputPaths::from_prefix(prefix);
    assert_eq!(paths.gperf, Path::new(gperf));
    assert_eq!(paths.header, Path::new(header));
    assert_eq!(paths.lookup, Path::new(lookup));
}
