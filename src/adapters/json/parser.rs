//! Platform module configuration loader
//!
//! The configuration is a single JSON object mapping module names to level
//! symbols. Key order is significant: it assigns module IDs.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde_json::Value;
use thiserror::Error;

use crate::core::models::{Level, ModuleTable, RESERVED_NAMES};
use crate::core::services::is_c_identifier;

/// Errors that can occur while loading a platform configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist
    #[error(
        "platform configuration file {0} was not found; add the configuration file for this platform"
    )]
    NotFound(PathBuf),

    /// Configuration file could not be read
    #[error("failed to read platform configuration file {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration is not valid JSON
    #[error("platform configuration file {path} is not valid JSON: {source}")]
    Json {
        /// File being parsed
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// JSON root is not an object
    #[error("platform configuration file {path} parsing error - not a dictionary")]
    NotAnObject {
        /// File being parsed
        path: PathBuf,
    },

    /// A module was assigned something other than a level symbol
    #[error("platform configuration file {path} parsing error - key {key} has an invalid value {value}")]
    InvalidLevel {
        /// File being parsed
        path: PathBuf,
        /// Offending module name
        key: String,
        /// Offending value, rendered as JSON unless it was a string
        value: String,
    },

    /// A module name cannot be used as a C identifier
    #[error("platform configuration file {path} parsing error - key {key:?} is not a valid C identifier")]
    InvalidName {
        /// File being parsed
        path: PathBuf,
        /// Offending module name
        key: String,
    },

    /// A module name collides with an enum sentinel
    #[error("platform configuration file {path} parsing error - key {key} is reserved for the module ID enum sentinels")]
    ReservedName {
        /// File being parsed
        path: PathBuf,
        /// Offending module name
        key: String,
    },
}

/// Load and validate a platform configuration file
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, or if its content
/// fails [`parse_str`].
pub fn load_file(path: &Path) -> Result<ModuleTable, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_str(path, &content)?;
    info!("Loaded {} module(s) from {}", table.len(), path.display());
    Ok(table)
}

/// Parse and validate configuration text
///
/// `source` only names the input in error messages.
///
/// # Errors
///
/// Returns an error if the text is not JSON, the root is not an object, a
/// value is not a level symbol, or a key is not a C identifier or names an
/// enum sentinel.
pub fn parse_str(source: &Path, content: &str) -> Result<ModuleTable, ConfigError> {
    let root: Value = serde_json::from_str(content).map_err(|e| ConfigError::Json {
        path: source.to_path_buf(),
        source: e,
    })?;

    let Value::Object(map) = root else {
        return Err(ConfigError::NotAnObject {
            path: source.to_path_buf(),
        });
    };

    let mut entries = Vec::with_capacity(map.len());
    for (key, value) in map {
        let Some(level) = value.as_str().and_then(|s| s.parse::<Level>().ok()) else {
            return Err(ConfigError::InvalidLevel {
                path: source.to_path_buf(),
                value: value.as_str().map_or_else(|| value.to_string(), str::to_string),
                key,
            });
        };
        if !is_c_identifier(&key) {
            return Err(ConfigError::InvalidName {
                path: source.to_path_buf(),
                key,
            });
        }
        if RESERVED_NAMES.contains(&key.as_str()) {
            return Err(ConfigError::ReservedName {
                path: source.to_path_buf(),
                key,
            });
        }
        debug!("module {key} -> {level}");
        entries.push((key, level));
    }

    Ok(ModuleTable::from_entries(entries))
}
