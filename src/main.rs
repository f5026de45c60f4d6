//! xlog-modgen - Generate xlog module tables from a platform configuration
//!
//! Reads a JSON map of logging-module names to `XLOG_LEVEL_*` symbols and
//! writes the gperf input, module ID header and lookup tables consumed by
//! the xlog C logger.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the xlog-modgen CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
