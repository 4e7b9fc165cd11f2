// ==========================================
// PLMECO - 装车计划导入器实现
// ==========================================
// 职责: 整合导入流程
// 流程: 打开文件 → 选表(表头评分) → 最小字段集校验 → 提取行 → 月台排序
// ==========================================

use crate::config::AppConfig;
use crate::domain::load::ImportOutcome;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::{FieldMapper, HeaderMap, HeaderMatch};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::load_importer_trait::{FileParser, LoadImporter};
use crate::importer::row_extractor::{extract_rows, sort_by_dock};
use crate::importer::worksheet::Worksheet;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};

// ==========================================
// LoadImporterImpl - 装车计划导入器实现
// ==========================================
pub struct LoadImporterImpl {
    file_parser: Box<dyn FileParser>,
    field_mapper: FieldMapper,
}

impl Default for LoadImporterImpl {
    fn default() -> Self {
        Self::new(Box::new(UniversalFileParser), FieldMapper::default())
    }
}

impl LoadImporterImpl {
    pub fn new(file_parser: Box<dyn FileParser>, field_mapper: FieldMapper) -> Self {
        Self {
            file_parser,
            field_mapper,
        }
    }

    /// 按配置创建（表头扫描行数）
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Box::new(UniversalFileParser),
            FieldMapper::new(config.header_scan_rows),
        )
    }

    /// 选出得分最高的工作表（平局保留靠前的）
    fn select_sheet<'a>(
        &self,
        sheets: &'a [Box<dyn Worksheet>],
    ) -> Option<(&'a dyn Worksheet, HeaderMatch)> {
        let mut best: Option<(&'a dyn Worksheet, HeaderMatch)> = None;

        for sheet in sheets {
            let header = self.field_mapper.detect_header(sheet.as_ref());
            let better = match &best {
                None => true,
                Some((_, current)) => header.score > current.score,
            };
            if better {
                best = Some((sheet.as_ref(), header));
            }
        }

        best
    }
}

impl LoadImporter for LoadImporterImpl {
    #[instrument(skip(self, file_path), fields(file = %file_path.display()))]
    fn import_file(&self, file_path: &Path) -> ImportResult<ImportOutcome> {
        info!("开始导入装车计划");

        let sheets = self.file_parser.open_worksheets(file_path).map_err(|e| {
            error!(error = %e, "文件解析失败");
            e
        })?;
        debug!(sheet_count = sheets.len(), "文件解析完成");

        Ok(self.import_worksheets(&sheets))
    }

    fn import_worksheets(&self, sheets: &[Box<dyn Worksheet>]) -> ImportOutcome {
        let Some((sheet, header)) = self.select_sheet(sheets) else {
            warn!("文件中没有工作表");
            return ImportOutcome::default();
        };

        // 最小字段集不满足: 空结果，不是错误
        if !header.is_viable() {
            warn!(
                sheet = %sheet.name(),
                header_row = header.header_row,
                missing = ?header.missing_required(),
                "缺少必需表头，没有可导入的行"
            );
            return ImportOutcome {
                sheet_name: sheet.name().to_string(),
                header_row: header.header_row,
                header_map: HeaderMap::new(),
                rows: Vec::new(),
            };
        }

        let mut rows = extract_rows(sheet, &header);
        sort_by_dock(&mut rows);

        info!(
            sheet = %sheet.name(),
            header_row = header.header_row,
            matched_fields = header.score,
            rows = rows.len(),
            "导入完成"
        );

        ImportOutcome {
            sheet_name: sheet.name().to_string(),
            header_row: header.header_row,
            header_map: header.columns,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::SchemaField;
    use crate::importer::worksheet::CsvSheet;

    fn boxed(name: &str, rows: &[&[&str]]) -> Box<dyn Worksheet> {
        Box::new(CsvSheet::new(
            name,
            rows.iter()
                .map(|r| r.iter().map(|v| v.to_string()).collect())
                .collect(),
        ))
    }

    #[test]
    fn test_selects_best_sheet_even_if_not_first() {
        let sheets = vec![
            boxed("Resumen", &[&["MATRICULA", "DESTINO", "MUELLE"], &["1", "X", "2"]]),
            boxed(
                "Cargas",
                &[
                    &["MATRICULA", "DESTINO", "MUELLE", "ESTADO"],
                    &["1234ABC", "MADRID", "12", "OK"],
                    &["5678DEF", "BILBAO", "3", "CARGANDO"],
                ],
            ),
        ];

        let outcome = LoadImporterImpl::default().import_worksheets(&sheets);
        assert_eq!(outcome.sheet_name, "Cargas");
        assert_eq!(outcome.header_row, 1);
        assert_eq!(outcome.rows.len(), 2);
        assert_eq!(outcome.rows[0].dock, "3");
        assert_eq!(outcome.rows[1].dock, "12");
    }

    #[test]
    fn test_tie_keeps_first_sheet() {
        let sheets = vec![
            boxed("Primera", &[&["MATRICULA", "DESTINO", "MUELLE", "ESTADO"], &["A", "B", "1", "OK"]]),
            boxed("Segunda", &[&["PLACA", "DEST.", "DOCK", "STATUS"], &["C", "D", "2", "OK"]]),
        ];
        let outcome = LoadImporterImpl::default().import_worksheets(&sheets);
        assert_eq!(outcome.sheet_name, "Primera");
    }

    #[test]
    fn test_not_viable_yields_empty_outcome() {
        let sheets = vec![
            boxed("Hoja1", &[&["MATRICULA", "DESTINO", "MUELLE", "PRECINTO"], &["A", "B", "1", "S1"]]),
            boxed("Hoja2", &[&["CARRIER"], &["DHL"]]),
        ];
        let outcome = LoadImporterImpl::default().import_worksheets(&sheets);
        assert!(outcome.is_empty());
        assert!(outcome.header_map.is_empty());
        assert_eq!(outcome.sheet_name, "Hoja1");
    }

    #[test]
    fn test_no_sheets() {
        let outcome = LoadImporterImpl::default().import_worksheets(&[]);
        assert_eq!(outcome, ImportOutcome::default());
    }

    #[test]
    fn test_header_map_in_outcome() {
        let sheets = vec![boxed(
            "Hoja1",
            &[&["ESTADO", "MUELLE", "DESTINO", "MATRICULA", "PRECINTO"], &["OK", "1", "X", "Y", "S-1"]],
        )];
        let outcome = LoadImporterImpl::default().import_worksheets(&sheets);
        assert_eq!(outcome.header_map.get(&SchemaField::Status), Some(&1));
        assert_eq!(outcome.header_map.get(&SchemaField::Seal), Some(&5));
        assert_eq!(outcome.rows[0].seal, "S-1");
    }
}
