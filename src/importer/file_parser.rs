// ==========================================
// PLMECO - 文件解析器实现
// ==========================================
// 支持: Excel / ODS (calamine) / CSV (csv)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::load_importer_trait::FileParser;
use crate::importer::worksheet::{CalamineSheet, CsvSheet, Worksheet};
use calamine::{open_workbook_auto, Reader};
use std::fs::File;
use std::path::Path;
use tracing::debug;

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn open_worksheets(&self, file_path: &Path) -> ImportResult<Vec<Box<dyn Worksheet>>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        let mut sheets: Vec<Box<dyn Worksheet>> = Vec::new();
        for name in workbook.sheet_names() {
            let range = workbook.worksheet_range(&name)?;
            debug!(sheet = %name, size = ?range.get_size(), "读取工作表");
            sheets.push(Box::new(CalamineSheet::new(name, range)));
        }

        Ok(sheets)
    }
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn open_worksheets(&self, file_path: &Path) -> ImportResult<Vec<Box<dyn Worksheet>>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 工作表名取文件名（不含扩展名）
        let name = file_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let file = File::open(file_path)?;
        let sheet = CsvSheet::from_reader(name, file)?;
        Ok(vec![Box::new(sheet)])
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn open_worksheets(&self, file_path: &Path) -> ImportResult<Vec<Box<dyn Worksheet>>> {
        let ext = extension_of(file_path);
        if ext == "csv" {
            CsvParser.open_worksheets(file_path)
        } else if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
            ExcelParser.open_worksheets(file_path)
        } else {
            Err(ImportError::UnsupportedFormat(ext))
        }
    }
}
