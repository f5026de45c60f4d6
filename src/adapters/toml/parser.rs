//! Naming override file loader
//!
//! A naming file is a flat TOML table whose keys are [`Naming`] fields.
//! Fields left out keep their defaults:
//!
//! ```toml
//! lookup_function = "acme_logger_module_lookup"
//! private_header = "acme_logger_private.h"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::codegen::{Naming, SymbolError};

/// Errors that can occur while loading a naming file
#[derive(Debug, Error)]
pub enum NamingError {
    /// File could not be read
    #[error("failed to read naming file {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// File is not valid TOML or has unknown keys
    #[error("failed to parse naming file {path}: {source}")]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying parse error
        source: ::toml::de::Error,
    },

    /// A symbol would produce invalid C
    #[error("invalid naming file {path}: {source}")]
    Invalid {
        /// File being validated
        path: PathBuf,
        /// Rejected symbol
        source: SymbolError,
    },
}

/// Load and validate a naming file
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`parse_naming`].
pub fn load_naming(path: &Path) -> Result<Naming, NamingError> {
    let content = fs::read_to_string(path).map_err(|source| NamingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_naming(path, &content)
}

/// Parse and validate naming file text
///
/// # Errors
///
/// Returns an error if the text is not TOML, names an unknown field, or
/// sets a symbol that is not valid C.
pub fn parse_naming(source: &Path, content: &str) -> Result<Naming, NamingError> {
    let naming: Naming = ::toml::from_str(content).map_err(|e| NamingError::Parse {
        path: source.to_path_buf(),
        source: e,
    })?;
    naming.validate().map_err(|e| NamingError::Invalid {
        path: source.to_path_buf(),
        source: e,
    })?;
    debug!("Loaded naming overrides from {}", source.display());
    Ok(naming)
}
