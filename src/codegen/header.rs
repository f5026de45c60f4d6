//! Module ID header
//!
//! Declares the module-ID enum bracketed by the `NONE` (-1) and `INVALID`
//! (N) sentinels, plus the max-count macro.

use std::fmt::Write;

use super::Naming;
use crate::core::models::{ModuleTable, RESERVED_NAMES};

/// Render the module ID header
#[must_use]
pub fn render(table: &ModuleTable, naming: &Naming) -> String {
    let prefix = &naming.enum_prefix;
    let guard = &naming.include_guard;
    let count = table.invalid_id();

    let mut out = String::new();
    let _ = writeln!(out, "#ifndef {guard}");
    let _ = writeln!(out, "#define {guard}");

    out.push_str("\ntypedef enum {\n");
    let [none, invalid] = RESERVED_NAMES;
    let _ = writeln!(out, "   {prefix}{none:<16} = -1,");
    for module in table {
        let _ = writeln!(out, "   {prefix}{:<16} = {:>2},", module.name, module.id);
    }
    let _ = writeln!(out, "   {prefix}{invalid:<16} = {count:>2}");
    let _ = writeln!(out, "}} {};", naming.enum_type);

    let _ = writeln!(out, "\n#define {} ({count})\n", naming.qty_macro);
    out.push_str("#endif\n");
    out
}
