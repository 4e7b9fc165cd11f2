// ==========================================
// PLMECO - 通用导出器（根据扩展名自动选择）
// ==========================================

use crate::domain::load::LoadRow;
use crate::exporter::csv_exporter::CsvExporter;
use crate::exporter::error::{ExportError, ExportResult};
use crate::exporter::row_exporter_trait::RowExporter;
use crate::exporter::xlsx_exporter::XlsxExporter;
use std::path::Path;

pub struct UniversalExporter;

impl RowExporter for UniversalExporter {
    fn export_file(&self, file_path: &Path, rows: &[LoadRow]) -> ExportResult<usize> {
        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "xlsx" => XlsxExporter.export(file_path, rows),
            "csv" => CsvExporter.export(file_path, rows),
            _ => Err(ExportError::UnsupportedFormat(ext)),
        }
    }
}
