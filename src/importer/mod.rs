// ==========================================
// PLMECO - 导入层
// ==========================================
// 职责: 人工维护的表格 → 装车记录
// 支持: xlsx / xlsm / xlsb / xls / ods / csv
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod load_importer_impl;
pub mod load_importer_trait;
pub mod row_extractor;
pub mod time_parser;
pub mod worksheet;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::{FieldMapper, HeaderMap, HeaderMatch, DEFAULT_HEADER_SCAN_ROWS};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use load_importer_impl::LoadImporterImpl;
pub use row_extractor::{extract_rows, sort_by_dock};
pub use time_parser::{format_time, parse_cell_time, parse_day_fraction, parse_time_text};
pub use worksheet::{CalamineSheet, CellKind, CellValue, CsvSheet, Worksheet};

// 重导出 Trait 接口
pub use load_importer_trait::{FileParser, LoadImporter};
