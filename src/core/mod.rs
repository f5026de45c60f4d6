//! Core domain logic for xlog-modgen
//!
//! This module contains pure logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Level, Module, `ModuleTable`)
//! - `services/` - Validation shared across adapters and code generation

pub mod models;
pub mod services;
