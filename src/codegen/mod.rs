//! C artifact rendering
//!
//! Pure functions from a [`ModuleTable`](crate::core::models::ModuleTable)
//! and a [`Naming`] to file contents. Every artifact lists modules in ID
//! order.
//!
//! - [`gperf`] - Keyword file for the name-to-module hash
//! - [`header`] - Module ID enum and max-count macro
//! - [`lookup`] - ID-indexed name and length arrays
//! - [`naming`] - C symbols shared by all three

pub mod gperf;
pub mod header;
pub mod lookup;
pub mod naming;

pub use naming::{Naming, SymbolError};
