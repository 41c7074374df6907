//! CSV exporter for finding tables

use crate::audit::report::RANKING;
use crate::audit::{AuditReport, FindingTable};
use crate::export::{ExportError, ExportResult, ReportExporter};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Exporter for CSV. A report renders as one table; use
/// [`CsvExporter::write_directory`] for all of them.
#[derive(Debug, Clone, Copy)]
pub struct CsvExporter {
    table: &'static str,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self { table: RANKING }
    }
}

impl CsvExporter {
    /// Exporter for the named finding table (see [`AuditReport::tables`])
    pub fn for_table(table: &'static str) -> Self {
        Self { table }
    }

    /// Write one table, header first
    pub fn export_table<W: Write>(table: &FindingTable, writer: W) -> Result<(), ExportError> {
        let mut wtr = ::csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(writer);
        wtr.write_record(table.headers)?;
        for row in &table.rows {
            wtr.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        wtr.flush()
            .map_err(|e| ExportError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Write `<name>.csv` for every table into `dir`, creating it if needed
    pub fn write_directory(report: &AuditReport, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
        std::fs::create_dir_all(dir)
            .map_err(|e| ExportError::IoError(format!("{}: {}", dir.display(), e)))?;

        let mut written = Vec::new();
        for table in report.tables() {
            let path = dir.join(format!("{}.csv", table.name));
            let file = std::fs::File::create(&path)
                .map_err(|e| ExportError::IoError(format!("{}: {}", path.display(), e)))?;
            Self::export_table(&table, file)?;
            written.push(path);
        }

        info!("Wrote {} CSV files to {}", written.len(), dir.display());
        Ok(written)
    }
}

impl ReportExporter for CsvExporter {
    fn format(&self) -> &'static str {
        "csv"
    }

    fn export(&self, report: &AuditReport) -> Result<ExportResult, ExportError> {
        let table = report
            .table(self.table)
            .ok_or_else(|| ExportError::UnknownTable(self.table.to_string()))?;
        let mut content = Vec::new();
        Self::export_table(&table, &mut content)?;
        Ok(ExportResult::new(content, self.format()))
    }
}
