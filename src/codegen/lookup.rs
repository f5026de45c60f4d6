//! Module ID to name lookup tables
//!
//! Two parallel arrays indexed by module ID: the names and their lengths.

use std::fmt::Write;

use super::Naming;
use crate::core::models::ModuleTable;

/// Render the lookup table source file
#[must_use]
pub fn render(table: &ModuleTable, naming: &Naming) -> String {
    let count = table.invalid_id();

    let mut out = String::new();
    let _ = writeln!(out, "const char * const {}[{count}] = {{", naming.names_array);
    for module in table {
        let _ = writeln!(out, "   \"{}\",", module.name);
    }
    out.push_str("};\n");

    let _ = writeln!(out, "unsigned long {}[{count}] = {{", naming.lengths_array);
    for module in table {
        let _ = writeln!(out, "   {},", module.name.len());
    }
    out.push_str("};\n");
    out
}
