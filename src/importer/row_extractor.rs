// ==========================================
// PLMECO - 数据行提取与排序
// ==========================================
// 职责: 表头行以下 → LoadRow；空白行跳过；按月台顺序排序
// ==========================================

use crate::domain::load::LoadRow;
use crate::domain::types::SchemaField;
use crate::importer::data_cleaner::clean_text;
use crate::importer::field_mapper::HeaderMatch;
use crate::importer::time_parser::parse_cell_time;
use crate::importer::worksheet::Worksheet;
use std::cmp::Ordering;

/// 提取表头行以下的全部非空行（保持表格顺序）
pub fn extract_rows(sheet: &dyn Worksheet, header: &HeaderMatch) -> Vec<LoadRow> {
    let last_column = sheet.last_column();
    let mut rows = Vec::new();

    for row in (header.header_row + 1)..=sheet.last_row() {
        if is_blank_row(sheet, row, last_column) {
            continue;
        }

        let text = |field: SchemaField| -> String {
            header
                .columns
                .get(&field)
                .map(|&col| clean_text(&sheet.cell(row, col).text()))
                .unwrap_or_default()
        };

        rows.push(LoadRow {
            carrier: text(SchemaField::Carrier),
            plate: text(SchemaField::Plate),
            destination: text(SchemaField::Destination),
            dock: text(SchemaField::Dock),
            status: text(SchemaField::Status),
            seal: text(SchemaField::Seal),
            deadline: header
                .columns
                .get(&SchemaField::DeadlineDeparture)
                .and_then(|&col| parse_cell_time(&sheet.cell(row, col))),
            ..Default::default()
        });
    }

    rows
}

fn is_blank_row(sheet: &dyn Worksheet, row: usize, last_column: usize) -> bool {
    (1..=last_column).all(|col| sheet.cell(row, col).is_blank())
}

/// 月台顺序: 数字部分升序（无数字的排最后），再按原始文本
pub fn compare_docks(a: &LoadRow, b: &LoadRow) -> Ordering {
    let numeric = match (a.dock_number(), b.dock_number()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    numeric.then_with(|| a.dock.cmp(&b.dock))
}

/// 稳定排序并按新顺序重新编号（从 1 开始）
pub fn sort_by_dock(rows: &mut [LoadRow]) {
    rows.sort_by(compare_docks);
    for (idx, row) in rows.iter_mut().enumerate() {
        row.id = idx as u32 + 1;
    }
}
