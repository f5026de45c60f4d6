//! The generate operation
//!
//! Renders all three artifacts in memory first, then writes them. A bad
//! configuration or naming file therefore never leaves a partial artifact
//! on disk.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//!
//! use xlog_modgen::adapters::json::load_file;
//! use xlog_modgen::codegen::Naming;
//! use xlog_modgen::generator::{Generator, OutputPaths, WriteMode};
//!
//! let table = load_file(Path::new("rdkx_logger.json")).unwrap();
//! let generator = Generator::new(Naming::default()).unwrap();
//! let paths = OutputPaths::from_prefix("build/rdkx_logger_modules");
//! let report = generator.generate(&table, &paths, WriteMode::Always).unwrap();
//! assert_eq!(report.artifacts.len(), 3);
//! ```

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::codegen::{Naming, SymbolError, gperf, header, lookup};
use crate::core::models::ModuleTable;
use crate::output::{ArtifactKind, ArtifactReport, ArtifactStatus, GenerateReport};

/// Errors that can occur while writing artifacts
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Artifact could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// How artifacts reach the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Always overwrite
    #[default]
    Always,
    /// Leave files whose content is already identical untouched
    IfChanged,
    /// Render only, write nothing
    DryRun,
}

/// Destination of each artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// gperf keyword file
    pub gperf: PathBuf,
    /// Module ID header
    pub header: PathBuf,
    /// Lookup table source
    pub lookup: PathBuf,
}

impl OutputPaths {
    /// Derive `<prefix>.hash`, `<prefix>.h` and `<prefix>_lookup.c`
    #[must_use]
    pub fn from_prefix(prefix: impl AsRef<Path>) -> Self {
        let prefix = prefix.as_ref().as_os_str();
        let with_suffix = |suffix: &str| {
            let mut path = OsString::from(prefix);
            path.push(suffix);
            PathBuf::from(path)
        };
        Self {
            gperf: with_suffix(".hash"),
            header: with_suffix(".h"),
            lookup: with_suffix("_lookup.c"),
        }
    }

    fn get(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Gperf => &self.gperf,
            ArtifactKind::Header => &self.header,
            ArtifactKind::Lookup => &self.lookup,
        }
    }
}

/// A rendered artifact awaiting write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Full file content
    pub content: String,
}

/// Renders and writes the C artifacts for a module table
#[derive(Debug, Clone)]
pub struct Generator {
    naming: Naming,
}

impl Generator {
    /// Create a generator with validated naming
    ///
    /// # Errors
    ///
    /// Returns an error if any naming symbol would produce invalid C.
    pub fn new(naming: Naming) -> Result<Self, SymbolError> {
        naming.validate()?;
        Ok(Self { naming })
    }

    /// Render all artifacts in emission order
    #[must_use]
    pub fn render(&self, table: &ModuleTable) -> Vec<Artifact> {
        vec![
            Artifact {
                kind: ArtifactKind::Gperf,
                content: gperf::render(table, &self.naming),
            },
            Artifact {
                kind: ArtifactKind::Header,
                content: header::render(table, &self.naming),
            },
            Artifact {
                kind: ArtifactKind::Lookup,
                content: lookup::render(table, &self.naming),
            },
        ]
    }

    /// Render all artifacts and write them to `paths`
    ///
    /// # Errors
    ///
    /// Returns an error if an artifact cannot be written. The parent
    /// directory of each path must already exist.
    pub fn generate(
        &self,
        table: &ModuleTable,
        paths: &OutputPaths,
        mode: WriteMode,
    ) -> Result<GenerateReport, GenerateError> {
        let artifacts = self.render(table);

        let mut reports = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = paths.get(artifact.kind);
            let status = write_artifact(path, &artifact.content, mode)?;
            debug!("{} {}: {status}", artifact.kind, path.display());
            reports.push(ArtifactReport {
                kind: artifact.kind,
                path: path.to_path_buf(),
                status,
            });
        }

        Ok(GenerateReport {
            modules: table.len(),
            artifacts: reports,
        })
    }
}

fn write_artifact(
    path: &Path,
    content: &str,
    mode: WriteMode,
) -> Result<ArtifactStatus, GenerateError> {
    match mode {
        WriteMode::DryRun => return Ok(ArtifactStatus::Skipped),
        WriteMode::IfChanged => {
            if fs::read(path).is_ok_and(|existing| existing == content.as_bytes()) {
                return Ok(ArtifactStatus::Unchanged);
            }
        },
        WriteMode::Always => {},
    }

    fs::write(path, content).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ArtifactStatus::Written)
}
