//! Input file adapters
//!
//! This module contains the code that reads files from disk:
//!
//! - `json/` - Platform module configuration
//! - `toml/` - Optional naming overrides

pub mod json;
pub mod toml;
