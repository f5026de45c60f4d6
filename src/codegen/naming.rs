//! C symbol names used by the generated artifacts
//!
//! The defaults match what the xlog C runtime expects. A platform can
//! override any of them through a naming file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::is_c_identifier;

/// A naming value that would produce invalid C
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// Field must be a C identifier
    #[error("naming field {field} = {value:?} is not a valid C identifier")]
    NotAnIdentifier {
        /// Naming field name
        field: &'static str,
        /// Rejected value
        value: String,
    },

    /// Header path cannot be placed in an `#include "..."` line
    #[error("naming field private_header = {0:?} must be non-empty and must not contain '\"'")]
    InvalidHeader(String),
}

/// Every C symbol emitted by the generators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Naming {
    /// gperf `lookup-function-name`
    pub lookup_function: String,
    /// Header included by the gperf output
    pub private_header: String,
    /// Struct the gperf lookup returns
    pub struct_name: String,
    /// Include guard of the module header
    pub include_guard: String,
    /// Prefix of every enum constant
    pub enum_prefix: String,
    /// Enum typedef name
    pub enum_type: String,
    /// Max-count macro name
    pub qty_macro: String,
    /// Module-name string array
    pub names_array: String,
    /// Module-name length array
    pub lengths_array: String,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            lookup_function: "rdkx_logger_module_str_to_index".to_string(),
            private_header: "rdkx_logger_private.h".to_string(),
            struct_name: "rdkx_logger_module_s".to_string(),
            include_guard: "__RDKX_LOGGER_MODULES__".to_string(),
            enum_prefix: "XLOG_MODULE_ID_".to_string(),
            enum_type: "xlog_module_id_t".to_string(),
            qty_macro: "XLOG_MODULE_QTY_MAX".to_string(),
            names_array: "g_xlog_module_id_to_str".to_string(),
            lengths_array: "g_xlog_module_id_to_strlen".to_string(),
        }
    }
}

impl Naming {
    /// Check that every symbol can be emitted as-is
    ///
    /// # Errors
    ///
    /// Returns the first field that is not a C identifier, or an unusable
    /// header path.
    pub fn validate(&self) -> Result<(), SymbolError> {
        let identifiers = [
            ("lookup_function", &self.lookup_function),
            ("struct_name", &self.struct_name),
            ("include_guard", &self.include_guard),
            ("enum_prefix", &self.enum_prefix),
            ("enum_type", &self.enum_type),
            ("qty_macro", &self.qty_macro),
            ("names_array", &self.names_array),
            ("lengths_array", &self.lengths_array),
        ];
        for (field, value) in identifiers {
            if !is_c_identifier(value) {
                return Err(SymbolError::NotAnIdentifier {
                    field,
                    value: value.clone(),
                });
            }
        }

        if self.private_header.is_empty()
            || self.private_header.contains(['"', '\n', '\r'])
        {
            return Err(SymbolError::InvalidHeader(self.private_header.clone()));
        }

        Ok(())
    }
}
