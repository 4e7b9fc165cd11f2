// ==========================================
// PLMECO - CSV 导出
// ==========================================
// 职责: 文档行 → CSV（固定表头，时间统一为 HH:MM，无着色）
// ==========================================

use crate::domain::load::LoadRow;
use crate::exporter::columns::{row_values, EXPORT_HEADERS};
use crate::exporter::error::ExportResult;
use crate::exporter::row_exporter_trait::RowExporter;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub struct CsvExporter;

impl CsvExporter {
    /// 导出到文件，返回写入的数据行数
    pub fn export<P: AsRef<Path>>(&self, file_path: P, rows: &[LoadRow]) -> ExportResult<usize> {
        let path = file_path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let written = self.write_to(file, rows)?;

        info!(path = %path.display(), rows = written, "CSV 导出完成");
        Ok(written)
    }

    /// 写入任意 Writer
    pub fn write_to<W: Write>(&self, writer: W, rows: &[LoadRow]) -> ExportResult<usize> {
        let mut csv_writer = WriterBuilder::new().from_writer(writer);
        csv_writer.write_record(EXPORT_HEADERS)?;

        for row in rows {
            csv_writer.write_record(row_values(row))?;
        }

        csv_writer.flush()?;
        Ok(rows.len())
    }
}

impl RowExporter for CsvExporter {
    fn export_file(&self, file_path: &Path, rows: &[LoadRow]) -> ExportResult<usize> {
        self.export(file_path, rows)
    }
}
