// ==========================================
// PLMECO - 导出接口定义
// ==========================================

use crate::domain::load::LoadRow;
use crate::exporter::error::ExportResult;
use std::path::Path;

// ==========================================
// RowExporter Trait
// ==========================================
// 用途: 工作区保存 / 另存为
// 实现者: CsvExporter, XlsxExporter, UniversalExporter
pub trait RowExporter {
    /// 写入文件（必要时创建父目录），返回写入的数据行数
    fn export_file(&self, file_path: &Path, rows: &[LoadRow]) -> ExportResult<usize>;
}
