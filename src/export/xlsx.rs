//! XLSX workbook exporter
//!
//! One worksheet per finding table, named after the table, followed by a
//! `summary` sheet with the category totals and a bar chart over them.

use crate::audit::{AuditReport, Cell, FindingTable};
use crate::export::{ExportError, ExportResult, ReportExporter};
use rust_xlsxwriter::{Chart, ChartType, Format, Workbook, Worksheet, XlsxError};

/// Longest sheet name the workbook format accepts
pub const MAX_SHEET_NAME_CHARS: usize = 31;

pub const SUMMARY_SHEET: &str = "summary";

/// Exporter for XLSX workbooks
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxExporter;

impl XlsxExporter {
    /// Build the workbook in memory
    pub fn export_bytes(report: &AuditReport) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        for table in report.tables() {
            let sheet = workbook.add_worksheet();
            sheet.set_name(sheet_name(table.name))?;
            write_table(sheet, &table, &header_format)?;
        }

        {
            let sheet = workbook.add_worksheet();
            sheet.set_name(SUMMARY_SHEET)?;
            write_summary(sheet, report, &header_format)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}

impl ReportExporter for XlsxExporter {
    fn format(&self) -> &'static str {
        "xlsx"
    }

    fn export(&self, report: &AuditReport) -> Result<ExportResult, ExportError> {
        Ok(ExportResult::new(Self::export_bytes(report)?, self.format()))
    }
}

/// Truncate to the sheet name limit, counting characters
pub fn sheet_name(name: &str) -> String {
    name.chars().take(MAX_SHEET_NAME_CHARS).collect()
}

fn write_table(
    sheet: &mut Worksheet,
    table: &FindingTable,
    header: &Format,
) -> Result<(), XlsxError> {
    for (col, title) in table.headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, header)?;
    }
    for (idx, row) in table.rows.iter().enumerate() {
        let row_num = idx as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(text) => sheet.write_string(row_num, col as u16, text)?,
                Cell::Count(count) => sheet.write_number(row_num, col as u16, *count as f64)?,
            };
        }
    }
    Ok(())
}

fn write_summary(
    sheet: &mut Worksheet,
    report: &AuditReport,
    header: &Format,
) -> Result<(), XlsxError> {
    sheet.write_string_with_format(0, 0, "category", header)?;
    sheet.write_string_with_format(0, 1, "count", header)?;

    let bars = report.summary.bars();
    for (idx, (label, count)) in bars.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, *label)?;
        sheet.write_number(row, 1, *count as f64)?;
    }

    let last_row = bars.len() as u32;
    let mut chart = Chart::new(ChartType::Bar);
    chart
        .add_series()
        .set_categories((SUMMARY_SHEET, 1, 0, last_row, 0))
        .set_values((SUMMARY_SHEET, 1, 1, last_row, 1))
        .set_name("Findings");
    chart.title().set_name("Audit findings");
    chart.legend().set_hidden();
    sheet.insert_chart(1, 3, &chart)?;

    Ok(())
}
