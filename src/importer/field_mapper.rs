// ==========================================
// PLMECO - 表头识别与字段映射
// ==========================================
// 职责: 在工作表前 N 行中找出最像表头的一行，
//       并建立 目标字段 → 列号 的映射
// 规则: 每个字段每行只匹配一次（最左列优先）；
//       得分 = 匹配到的字段数；严格更高才替换（平局保留更早的行）
// ==========================================

use crate::domain::types::{SchemaField, REQUIRED_FIELDS, SCHEMA_SYNONYMS};
use crate::importer::data_cleaner::normalize_header;
use crate::importer::worksheet::Worksheet;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// 默认扫描的最大行数
pub const DEFAULT_HEADER_SCAN_ROWS: usize = 100;

/// 目标字段 → 列号（从 1 开始）
pub type HeaderMap = BTreeMap<SchemaField, usize>;

/// 表头识别结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub score: usize,
    pub header_row: usize,
    pub columns: HeaderMap,
}

impl HeaderMatch {
    /// 没有任何匹配时的兜底: 第 1 行、空映射
    pub fn fallback() -> Self {
        Self {
            score: 0,
            header_row: 1,
            columns: HeaderMap::new(),
        }
    }

    /// 是否包含最小字段集（MATRICULA/DESTINO/MUELLE/ESTADO）
    pub fn is_viable(&self) -> bool {
        REQUIRED_FIELDS
            .iter()
            .all(|field| self.columns.contains_key(field))
    }

    pub fn missing_required(&self) -> Vec<SchemaField> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.columns.contains_key(field))
            .collect()
    }
}

pub struct FieldMapper {
    // 预先标准化的同义词
    synonyms: Vec<(SchemaField, HashSet<String>)>,
    max_scan_rows: usize,
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_SCAN_ROWS)
    }
}

impl FieldMapper {
    pub fn new(max_scan_rows: usize) -> Self {
        let synonyms = SCHEMA_SYNONYMS
            .iter()
            .map(|(field, words)| {
                let normalized = words.iter().map(|w| normalize_header(w)).collect();
                (*field, normalized)
            })
            .collect();

        Self {
            synonyms,
            max_scan_rows,
        }
    }

    pub fn max_scan_rows(&self) -> usize {
        self.max_scan_rows
    }

    /// 对单行建立字段映射
    pub fn map_row(&self, sheet: &dyn Worksheet, row: usize) -> HeaderMap {
        let texts: Vec<String> = (1..=sheet.last_column())
            .map(|col| normalize_header(&sheet.cell(row, col).text()))
            .collect();

        let mut columns = HeaderMap::new();
        for (field, synonyms) in &self.synonyms {
            let hit = texts
                .iter()
                .position(|text| !text.is_empty() && synonyms.contains(text));
            if let Some(idx) = hit {
                columns.insert(*field, idx + 1);
            }
        }
        columns
    }

    /// 识别表头行
    pub fn detect_header(&self, sheet: &dyn Worksheet) -> HeaderMatch {
        let scan_to = sheet.last_row().min(self.max_scan_rows);
        let mut best = HeaderMatch::fallback();

        for row in 1..=scan_to {
            let columns = self.map_row(sheet, row);
            let score = columns.len();
            if score > best.score {
                best = HeaderMatch {
                    score,
                    header_row: row,
                    columns,
                };
            }
        }

        debug!(
            sheet = %sheet.name(),
            header_row = best.header_row,
            score = best.score,
            "表头识别完成"
        );
        best
    }
}
