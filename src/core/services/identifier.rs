//! C identifier validation
//!
//! Module names are pasted verbatim into enum constants and string
//! literals, so anything that is not a plain C identifier would produce a
//! header that does not compile.

use std::sync::LazyLock;

use regex::Regex;

static C_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern compiles"));

/// Check whether `s` is a valid C identifier
#[must_use]
pub fn is_c_identifier(s: &str) -> bool {
    C_IDENTIFIER.is_match(s)
}
