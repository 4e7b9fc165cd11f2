// ==========================================
// PLMECO - 导出层
// ==========================================
// 职责: 编辑后的文档写回文件
// 支持: xlsx（带状态着色） / csv
// ==========================================

pub mod columns;
pub mod csv_exporter;
pub mod error;
pub mod row_exporter_trait;
pub mod universal_exporter;
pub mod xlsx_exporter;

pub use columns::{row_values, EXPORT_HEADERS, LEX_MARK};
pub use csv_exporter::CsvExporter;
pub use error::{ExportError, ExportResult};
pub use universal_exporter::UniversalExporter;
pub use xlsx_exporter::{cell_style, CellStyle, Fill, XlsxExporter, EXPORT_SHEET_NAME};

// 重导出 Trait 接口
pub use row_exporter_trait::RowExporter;
