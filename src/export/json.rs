//! JSON exporter for audit reports

use crate::audit::AuditReport;
use crate::export::{ExportError, ExportResult, ReportExporter};

/// Exporter for pretty-printed JSON reports.
///
/// # Example
///
/// ```rust
/// use model_audit_sdk::audit::AuditReport;
/// use model_audit_sdk::export::{JsonExporter, ReportExporter};
///
/// let result = JsonExporter.export(&AuditReport::default()).unwrap();
/// assert_eq!(result.format, "json");
/// let text = String::from_utf8(result.content).unwrap();
/// assert!(text.contains("\"unused_columns\": []"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl JsonExporter {
    /// Render the report as a JSON string
    pub fn export_string(report: &AuditReport) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

impl ReportExporter for JsonExporter {
    fn format(&self) -> &'static str {
        "json"
    }

    fn export(&self, report: &AuditReport) -> Result<ExportResult, ExportError> {
        let content = Self::export_string(report)?;
        Ok(ExportResult::new(content.into_bytes(), self.format()))
    }
}
