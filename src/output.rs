//! Output formatting for human and JSON modes
//!
//! This module provides the generation report, rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::PathBuf;

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Which artifact a file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// gperf keyword file (`.hash`)
    Gperf,
    /// Module ID header (`.h`)
    Header,
    /// Lookup table source (`_lookup.c`)
    Lookup,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gperf => f.pad("gperf"),
            Self::Header => f.pad("header"),
            Self::Lookup => f.pad("lookup"),
        }
    }
}

/// What happened to an artifact on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactStatus {
    /// File was written
    Written,
    /// File already had identical content and was left alone
    Unchanged,
    /// Nothing was written (check mode)
    Skipped,
}

impl std::fmt::Display for ArtifactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Written => f.pad("written"),
            Self::Unchanged => f.pad("unchanged"),
            Self::Skipped => f.pad("skipped"),
        }
    }
}

/// One generated artifact
#[derive(Debug, Serialize)]
pub struct ArtifactReport {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Destination path
    pub path: PathBuf,
    /// Outcome
    pub status: ArtifactStatus,
}

/// Result of a generate operation
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    /// Number of modules in the configuration
    pub modules: usize,
    /// Artifacts in emission order
    pub artifacts: Vec<ArtifactReport>,
}

impl GenerateReport {
    /// Number of artifacts actually written
    #[must_use]
    pub fn written(&self) -> usize {
        self.artifacts.iter().filter(|a| a.status == ArtifactStatus::Written).count()
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for a in &self.artifacts {
            println!("  {:<9} {:<6} {}", a.status, a.kind, a.path.display());
        }

        if self.artifacts.iter().all(|a| a.status == ArtifactStatus::Skipped) {
            println!("\nChecked {} module(s). No files written.", self.modules);
        } else {
            println!(
                "\nGenerated {} module(s): {} file(s) written.",
                self.modules,
                self.written()
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
