//! Audit command implementation

use crate::audit_path;
use crate::cli::args::{AuditArgs, OutputFormat};
use crate::cli::error::CliError;
use crate::cli::output::format_audit_output;
use crate::config::{AuditConfig, BlankExpressionPolicy};
use crate::export::{CsvExporter, JsonExporter, ReportExporter, XlsxExporter};
use tracing::info;

/// Resolve the configuration: file first, then flag overrides
fn load_config(args: &AuditArgs) -> Result<AuditConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => AuditConfig::load(path)?,
        None => AuditConfig::default(),
    };
    if args.skip_blank_expressions {
        config.blank_expressions = BlankExpressionPolicy::Skip;
    }
    Ok(config)
}

/// Handle the audit command
pub fn handle_audit(args: &AuditArgs) -> Result<(), CliError> {
    if !args.input.exists() {
        return Err(CliError::FileReadError(
            args.input.clone(),
            "file does not exist".to_string(),
        ));
    }

    let config = load_config(args)?;
    let (loaded, report) = audit_path(&args.input, &config)?;

    match args.format {
        OutputFormat::Text => print!("{}", format_audit_output(&loaded, &report)),
        OutputFormat::Json => println!("{}", JsonExporter::export_string(&report)?),
    }

    if let Some(path) = &args.xlsx {
        XlsxExporter.export(&report)?.write_to(path)?;
        info!("Wrote workbook to {}", path.display());
    }

    if let Some(dir) = &args.csv_dir {
        CsvExporter::write_directory(&report, dir)?;
    }

    Ok(())
}
