//! Logging modules and the ordered module table
//!
//! A module's ID is its position in the platform configuration. Every
//! generated artifact is indexed by that ID, so the table never reorders.

use super::Level;

/// Enum sentinel names the header emits around the module constants
pub const RESERVED_NAMES: [&str; 2] = ["NONE", "INVALID"];

/// A logging module with its assigned ID and default level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Zero-based ID, equal to the module's position in the configuration
    pub id: usize,
    /// Module name as written in the configuration
    pub name: String,
    /// Default severity level
    pub level: Level,
}

/// Ordered, immutable set of modules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleTable {
    modules: Vec<Module>,
}

impl ModuleTable {
    /// Build a table from `(name, level)` pairs in configuration order.
    ///
    /// A repeated name keeps its first position and takes the later level,
    /// which is how a JSON object with duplicate keys is read.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Level)>,
        S: Into<String>,
    {
        let mut modules: Vec<Module> = Vec::new();
        for (name, level) in entries {
            let name = name.into();
            if let Some(existing) = modules.iter_mut().find(|m| m.name == name) {
                existing.level = level;
            } else {
                modules.push(Module {
                    id: modules.len(),
                    name,
                    level,
                });
            }
        }
        Self { modules }
    }

    /// Number of modules
    #[must_use]
    pub const fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the table has no modules
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Iterate modules in ID order
    pub fn iter(&self) -> std::slice::Iter<'_, Module> {
        self.modules.iter()
    }

    /// Value of the `INVALID` sentinel and of the max-count macro
    #[must_use]
    pub const fn invalid_id(&self) -> usize {
        self.modules.len()
    }

    /// Look up a module by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }
}

impl<'a> IntoIterator for &'a ModuleTable {
    type Item = &'a Module;
    type IntoIter = std::slice::Iter<'a, Module>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
