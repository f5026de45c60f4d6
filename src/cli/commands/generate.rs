//! Generate the xlog module artifacts

use std::path::Path;

use anyhow::Context;
use log::info;

use xlog_modgen::adapters::{json, toml};
use xlog_modgen::codegen::Naming;
use xlog_modgen::generator::{Generator, OutputPaths, WriteMode};
use xlog_modgen::output::OutputMode;

/// Load `config`, render the artifacts and write them next to `output_prefix`
pub fn generate(
    config: &Path,
    output_prefix: &Path,
    naming: Option<&Path>,
    write_mode: WriteMode,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let naming = match naming {
        Some(path) => toml::load_naming(path)?,
        None => Naming::default(),
    };
    let generator = Generator::new(naming).context("invalid C symbol naming")?;

    let table = json::load_file(config)?;

    let paths = OutputPaths::from_prefix(output_prefix);
    let report = generator
        .generate(&table, &paths, write_mode)
        .with_context(|| format!("failed to generate {}", output_prefix.display()))?;

    info!("{} of {} artifact(s) written", report.written(), report.artifacts.len());
    report.render(mode);
    Ok(())
}
