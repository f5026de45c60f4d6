//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use super::commands;
use xlog_modgen::generator::WriteMode;
use xlog_modgen::output::OutputMode;

/// xlog-modgen - Generate xlog module tables from a platform configuration
#[derive(Parser, Debug)]
#[command(
    name = "xlog-modgen",
    version,
    about = "Generate xlog module tables from a platform configuration",
    long_about = "Generate the gperf input, module ID header and lookup tables for the xlog C \
                  logger.\n\n\
                  CONFIG maps module names to XLOG_LEVEL_* symbols. Module IDs follow the key \
                  order of CONFIG.\n\
                  Writes OUTPUT_PREFIX.hash, OUTPUT_PREFIX.h and OUTPUT_PREFIX_lookup.c."
)]
pub struct Cli {
    /// Platform configuration (JSON object of module name to level)
    pub config: PathBuf,

    /// Output path prefix shared by all generated files
    pub output_prefix: PathBuf,

    /// TOML file overriding the generated C symbol names
    #[arg(long, value_name = "FILE")]
    pub naming: Option<PathBuf>,

    /// Leave output files with identical content untouched
    #[arg(long)]
    pub if_changed: bool,

    /// Validate and render without writing any file
    #[arg(long, conflicts_with = "if_changed")]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let write_mode = if cli.check {
        WriteMode::DryRun
    } else if cli.if_changed {
        WriteMode::IfChanged
    } else {
        WriteMode::Always
    };

    commands::generate(
        &cli.config,
        &cli.output_prefix,
        cli.naming.as_deref(),
        write_mode,
        output_mode,
    )
}
