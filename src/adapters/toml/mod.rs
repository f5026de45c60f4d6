//! TOML naming overrides
//!
//! - [`parser`] - Read and validate naming files

pub mod parser;

pub use parser::{NamingError, load_naming, parse_naming};
