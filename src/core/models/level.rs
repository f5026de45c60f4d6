//! Module severity levels
//!
//! The five symbols a platform configuration may assign to a module. They
//! mirror the `xlog_level_t` values of the C logger, minus the `ALL` and
//! `INVALID` sentinels which are never valid in a configuration.

use serde::{Deserialize, Serialize};

/// Severity level assigned to a logging module
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    /// `XLOG_LEVEL_DEBUG`
    #[serde(rename = "XLOG_LEVEL_DEBUG")]
    Debug,
    /// `XLOG_LEVEL_INFO`
    #[serde(rename = "XLOG_LEVEL_INFO")]
    Info,
    /// `XLOG_LEVEL_WARN`
    #[serde(rename = "XLOG_LEVEL_WARN")]
    Warn,
    /// `XLOG_LEVEL_ERROR`
    #[serde(rename = "XLOG_LEVEL_ERROR")]
    Error,
    /// `XLOG_LEVEL_FATAL`
    #[serde(rename = "XLOG_LEVEL_FATAL")]
    Fatal,
}

impl Level {
    /// All levels, least severe first
    pub const ALL: [Self; 5] = [Self::Debug, Self::Info, Self::Warn, Self::Error, Self::Fatal];

    /// The C symbol for this level
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Debug => "XLOG_LEVEL_DEBUG",
            Self::Info => "XLOG_LEVEL_INFO",
            Self::Warn => "XLOG_LEVEL_WARN",
            Self::Error => "XLOG_LEVEL_ERROR",
            Self::Fatal => "XLOG_LEVEL_FATAL",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|level| level.symbol() == s).ok_or_else(|| {
            format!(
                "Invalid level: {s}. Use one of: {}",
                Self::ALL.map(Self::symbol).join(", ")
            )
        })
    }
}
