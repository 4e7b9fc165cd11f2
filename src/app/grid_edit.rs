// ==========================================
// PLMECO - 表格单元格编辑
// ==========================================
// 红线: 时间文本无法解析时不修改原值（与导入共用 parse_time_text）
//       清空文本 = 清空时间
// ==========================================

use crate::domain::load::LoadRow;
use crate::importer::time_parser::parse_time_text;
use serde::{Deserialize, Serialize};

/// 可编辑的时间列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeColumn {
    Arrival,   // LLEGADA REAL
    Departure, // SALIDA REAL
    Deadline,  // SALIDA TOPE
}

/// 可编辑的文本列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextColumn {
    Carrier,
    Plate,
    Destination,
    Dock,
    Status,
    Seal,
}

/// 应用时间编辑，返回是否写入
pub fn apply_time_edit(row: &mut LoadRow, column: TimeColumn, text: &str) -> bool {
    let value = if text.trim().is_empty() {
        None
    } else {
        match parse_time_text(text) {
            Some(t) => Some(t),
            None => return false,
        }
    };

    let target = match column {
        TimeColumn::Arrival => &mut row.arrival,
        TimeColumn::Departure => &mut row.departure,
        TimeColumn::Deadline => &mut row.deadline,
    };
    *target = value;
    true
}

/// 应用文本编辑（去首尾空白），返回值是否变化
pub fn apply_text_edit(row: &mut LoadRow, column: TextColumn, text: &str) -> bool {
    let target = match column {
        TextColumn::Carrier => &mut row.carrier,
        TextColumn::Plate => &mut row.plate,
        TextColumn::Destination => &mut row.destination,
        TextColumn::Dock => &mut row.dock,
        TextColumn::Status => &mut row.status,
        TextColumn::Seal => &mut row.seal,
    };

    let cleaned = text.trim();
    if target.as_str() == cleaned {
        return false;
    }
    *target = cleaned.to_string();
    true
}
