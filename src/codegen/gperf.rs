//! gperf keyword file
//!
//! Each keyword line carries the module name and its ID; gperf turns the
//! file into a perfect-hash lookup from name to module.

use std::fmt::Write;

use super::Naming;
use crate::core::models::ModuleTable;

/// Render the gperf input file
///
/// The file ends with the closing `%%` and no trailing newline.
#[must_use]
pub fn render(table: &ModuleTable, naming: &Naming) -> String {
    let mut out = String::new();
    out.push_str("%language=ANSI-C\n");
    out.push_str("%struct-type\n");
    out.push_str("%includes\n");
    let _ = writeln!(out, "%define lookup-function-name {}", naming.lookup_function);
    out.push_str("%{\n");
    let _ = writeln!(out, "#include \"{}\"", naming.private_header);
    out.push_str("%}\n");
    let _ = writeln!(out, "struct {};", naming.struct_name);
    out.push_str("%%\n");

    for module in table {
        let keyword = format!("{},", module.name);
        let _ = writeln!(out, "{keyword:<16} {:>2}", module.id);
    }

    out.push_str("%%");
    out
}
