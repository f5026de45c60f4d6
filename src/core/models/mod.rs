//! Domain models for xlog-modgen
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Level`] - Severity symbol assigned to a module
//! - [`Module`] - A named module with its ID
//! - [`ModuleTable`] - The ordered module set every artifact is indexed by

mod level;
mod module;

pub use level::Level;
pub use module::{Module, ModuleTable, RESERVED_NAMES};
