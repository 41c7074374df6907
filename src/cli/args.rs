//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// model-audit - hygiene checks for tabular BI data models
#[derive(Parser, Debug)]
#[command(name = "model-audit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a model and run every audit pass
    Audit(AuditArgs),

    /// Print the column references found in a measure formula
    Refs(RefsArgs),
}

/// Arguments for the audit command
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Template archive or extracted model document
    pub input: PathBuf,

    /// Output format for stdout
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also write an XLSX workbook to this path
    #[arg(long)]
    pub xlsx: Option<PathBuf>,

    /// Also write one CSV file per finding table into this directory
    #[arg(long)]
    pub csv_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Leave blank expressions out of duplicate detection
    #[arg(long)]
    pub skip_blank_expressions: bool,
}

/// Arguments for the refs command
#[derive(Args, Debug)]
pub struct RefsArgs {
    /// Formula segments, joined with newlines; `-` reads stdin
    #[arg(required = true)]
    pub formula: Vec<String>,
}

/// Stdout formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Full report as JSON
    Json,
}
