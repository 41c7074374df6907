use anyhow::Result;
use clap::Parser;
use model_audit_sdk::cli::commands::{handle_audit, handle_refs};
use model_audit_sdk::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber; warnings by default, debug with --verbose
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Audit(args) => handle_audit(args)?,
        Commands::Refs(args) => handle_refs(args)?,
    }

    Ok(())
}
