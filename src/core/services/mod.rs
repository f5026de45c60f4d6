//! Domain services
//!
//! - [`identifier`] - C identifier validation shared by the loader and naming

pub mod identifier;

pub use identifier::is_c_identifier;
