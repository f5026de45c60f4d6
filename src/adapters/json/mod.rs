//! JSON platform configuration
//!
//! - [`parser`] - Read and validate the module-to-level map

pub mod parser;

pub use parser::{ConfigError, load_file, parse_str};
