//! CLI module for the model-audit binary

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{AuditArgs, Cli, Commands, OutputFormat, RefsArgs};
pub use error::CliError;
