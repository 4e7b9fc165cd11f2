// ==========================================
// PLMECO - 导出列定义
// ==========================================
// 职责: CSV / xlsx 共用的列顺序与单元格文本
// 说明: 表头沿用导入同义词，导出文件可直接再导入
// ==========================================

use crate::domain::load::LoadRow;
use crate::importer::time_parser::format_time;

/// 导出列
pub const EXPORT_HEADERS: [&str; 11] = [
    "TRANSPORTISTA",
    "MATRICULA",
    "DESTINO",
    "MUELLE",
    "ESTADO",
    "PRECINTO",
    "LLEGADA REAL",
    "SALIDA REAL",
    "SALIDA TOPE",
    "INCIDENCIAS",
    "LEX",
];

// 着色规则用到的列（从 0 开始）
pub const DESTINATION_COLUMN: usize = 2;
pub const STATUS_COLUMN: usize = 4;
pub const INCIDENTS_COLUMN: usize = 9;

/// LEX 列的勾选标记
pub const LEX_MARK: &str = "✔";

/// 一行的导出文本（时间统一为 HH:MM）
pub fn row_values(row: &LoadRow) -> [String; 11] {
    [
        row.carrier.clone(),
        row.plate.clone(),
        row.destination.clone(),
        row.dock.clone(),
        row.status.clone(),
        row.seal.clone(),
        format_time(row.arrival),
        format_time(row.departure),
        format_time(row.deadline),
        row.incidents().to_string(),
        if row.lex { LEX_MARK } else { "" }.to_string(),
    ]
}
