// ==========================================
// PLMECO - xlsx 导出
// ==========================================
// 职责: 文档行 → 工作表 "Cargas"（表头加粗，时间为 HH:MM 文本）
// 着色规则（按顺序应用，后者覆盖前者的底色）:
//   1. ESTADO = OK        → DESTINO 浅绿、加粗
//   2. ESTADO = CARGANDO  → ESTADO 浅橙、加粗
//   3. ESTADO = CAMION ANULADO → 整行浅粉、深红字、加粗
//   4. LEX                → 整行浅绿
//   5. INCIDENCIAS 非空   → INCIDENCIAS 浅橙、加粗
// ==========================================

use crate::domain::load::LoadRow;
use crate::exporter::columns::{
    row_values, DESTINATION_COLUMN, EXPORT_HEADERS, INCIDENTS_COLUMN, STATUS_COLUMN,
};
use crate::exporter::error::ExportResult;
use crate::exporter::row_exporter_trait::RowExporter;
use crate::importer::data_cleaner::normalize_header;
use rust_xlsxwriter::{Color, Format, Workbook};
use std::path::Path;
use tracing::{debug, info};

/// 导出工作表名
pub const EXPORT_SHEET_NAME: &str = "Cargas";

const STATUS_OK: &str = "OK";
const STATUS_LOADING: &str = "CARGANDO";
const STATUS_CANCELLED: &str = "CAMION ANULADO";

/// 单元格底色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    LightGreen,
    LightOrange,
    LightPink,
}

impl Fill {
    fn color(self) -> Color {
        match self {
            Fill::LightGreen => Color::RGB(0x90EE90),
            Fill::LightOrange => Color::RGB(0xFED8B1),
            Fill::LightPink => Color::RGB(0xFFB6C1),
        }
    }
}

const DARK_RED: u32 = 0x8B0000;

/// 单元格样式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub fill: Option<Fill>,
    pub bold: bool,
    pub dark_red: bool,
}

impl CellStyle {
    fn is_plain(&self) -> bool {
        *self == CellStyle::default()
    }

    fn to_format(self) -> Format {
        let mut format = Format::new();
        if self.bold {
            format = format.set_bold();
        }
        if self.dark_red {
            format = format.set_font_color(Color::RGB(DARK_RED));
        }
        if let Some(fill) = self.fill {
            format = format.set_background_color(fill.color());
        }
        format
    }
}

/// 某行某列（从 0 开始，对应 EXPORT_HEADERS）的样式
pub fn cell_style(row: &LoadRow, column: usize) -> CellStyle {
    let status = normalize_header(&row.status);
    let mut style = CellStyle::default();

    if column == DESTINATION_COLUMN && status == STATUS_OK {
        style.fill = Some(Fill::LightGreen);
        style.bold = true;
    }
    if column == STATUS_COLUMN && status == STATUS_LOADING {
        style.fill = Some(Fill::LightOrange);
        style.bold = true;
    }
    if status == STATUS_CANCELLED {
        style.fill = Some(Fill::LightPink);
        style.dark_red = true;
        style.bold = true;
    }
    if row.lex {
        style.fill = Some(Fill::LightGreen);
    }
    if column == INCIDENTS_COLUMN && !row.incidents().is_empty() {
        style.fill = Some(Fill::LightOrange);
        style.bold = true;
    }

    style
}

pub struct XlsxExporter;

impl XlsxExporter {
    /// 导出到文件，返回写入的数据行数
    pub fn export<P: AsRef<Path>>(&self, file_path: P, rows: &[LoadRow]) -> ExportResult<usize> {
        let path = file_path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(EXPORT_SHEET_NAME)?;

        let header_format = Format::new().set_bold();
        for (col, title) in EXPORT_HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (idx, row) in rows.iter().enumerate() {
            let excel_row = (idx + 1) as u32;
            for (col, value) in row_values(row).into_iter().enumerate() {
                let style = cell_style(row, col);
                let format = style.to_format();
                if !value.is_empty() {
                    sheet.write_string_with_format(excel_row, col as u16, value, &format)?;
                } else if !style.is_plain() {
                    sheet.write_blank(excel_row, col as u16, &format)?;
                }
            }
        }
        debug!(rows = rows.len(), "工作表已生成");

        sheet.set_freeze_panes(1, 0)?;
        sheet.autofit();
        workbook.save(path)?;

        info!(path = %path.display(), rows = rows.len(), "xlsx 导出完成");
        Ok(rows.len())
    }
}

impl RowExporter for XlsxExporter {
    fn export_file(&self, file_path: &Path, rows: &[LoadRow]) -> ExportResult<usize> {
        self.export(file_path, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook_auto, Data, Reader};
    use chrono::NaiveTime;
    use tempfile::tempdir;

    fn row(status: &str) -> LoadRow {
        LoadRow {
            plate: "1234ABC".to_string(),
            destination: "MADRID".to_string(),
            dock: "3".to_string(),
            status: status.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_ok_highlights_destination_only() {
        let r = row("ok");
        let destination = cell_style(&r, DESTINATION_COLUMN);
        assert_eq!(destination.fill, Some(Fill::LightGreen));
        assert!(destination.bold);
        assert!(cell_style(&r, STATUS_COLUMN).is_plain());
    }

    #[test]
    fn test_loading_highlights_status() {
        let style = cell_style(&row("Cargando"), STATUS_COLUMN);
        assert_eq!(style.fill, Some(Fill::LightOrange));
        assert!(cell_style(&row("Cargando"), DESTINATION_COLUMN).is_plain());
    }

    #[test]
    fn test_cancelled_row_is_pink_and_dark_red() {
        let r = row("Camión anulado");
        for col in 0..EXPORT_HEADERS.len() {
            let style = cell_style(&r, col);
            assert_eq!(style.fill, Some(Fill::LightPink));
            assert!(style.dark_red && style.bold);
        }
    }

    #[test]
    fn test_lex_row_overrides_fill_but_keeps_font() {
        let mut r = row("CAMION ANULADO");
        r.lex = true;
        let style = cell_style(&r, 0);
        assert_eq!(style.fill, Some(Fill::LightGreen));
        assert!(style.dark_red);
    }

    #[test]
    fn test_incidents_cell_is_orange_even_on_lex_row() {
        let mut r = row("OK");
        r.lex = true;
        r.deadline = NaiveTime::from_hms_opt(7, 30, 0);
        r.departure = NaiveTime::from_hms_opt(8, 0, 0);
        assert_eq!(cell_style(&r, INCIDENTS_COLUMN).fill, Some(Fill::LightOrange));
        assert_eq!(cell_style(&r, 0).fill, Some(Fill::LightGreen));
    }

    #[test]
    fn test_export_writes_cargas_sheet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("salida").join("cargas.xlsx");
        let mut r = row("CARGANDO");
        r.deadline = NaiveTime::from_hms_opt(6, 5, 0);

        let written = XlsxExporter.export(&path, &[r]).unwrap();
        assert_eq!(written, 1);

        let mut workbook = open_workbook_auto(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec![EXPORT_SHEET_NAME.to_string()]);
        let range = workbook.worksheet_range(EXPORT_SHEET_NAME).unwrap();
        assert_eq!(
            range.get_value((0, 1)),
            Some(&Data::String("MATRICULA".to_string()))
        );
        assert_eq!(
            range.get_value((1, 8)),
            Some(&Data::String("06:05".to_string()))
        );
    }
}
