// ==========================================
// PLMECO - 装车记录领域模型
// ==========================================
// 职责: 单行装车记录 (LoadRow) 与导入结果 (ImportOutcome)
// 用途: 导入层写入,工作区编辑,导出层只读
// ==========================================

use crate::domain::types::SchemaField;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 承运商延误标记
pub const INCIDENT_CARRIER_DELAY: &str = "RETRASO TRANSPORTISTA";

// ==========================================
// LoadRow - 装车记录
// ==========================================
// 导入字段: carrier/plate/destination/dock/status/seal/deadline
// 现场编辑字段: arrival/departure/lex
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadRow {
    pub id: u32, // 行标识（导入后按月台顺序编号）

    // ===== 导入字段 =====
    pub carrier: String,     // 承运商 (TRANSPORTISTA)
    pub plate: String,       // 车牌 (MATRICULA)
    pub destination: String, // 目的地 (DESTINO)
    pub dock: String,        // 月台 (MUELLE)
    pub status: String,      // 状态 (ESTADO)
    pub seal: String,        // 铅封号 (PRECINTO)
    pub deadline: Option<NaiveTime>, // 最晚发车 (SALIDA TOPE)

    // ===== 现场编辑字段 =====
    pub arrival: Option<NaiveTime>,   // 实际到达 (LLEGADA REAL)
    pub departure: Option<NaiveTime>, // 实际发车 (SALIDA REAL)
    pub lex: bool,                    // LEX 标记
}

impl LoadRow {
    /// 派生异常说明: 实际发车晚于最晚发车时间
    pub fn incidents(&self) -> &'static str {
        match (self.departure, self.deadline) {
            (Some(departure), Some(deadline)) if departure > deadline => INCIDENT_CARRIER_DELAY,
            _ => "",
        }
    }

    /// 月台号中的数字部分（无数字或溢出时为 None）
    pub fn dock_number(&self) -> Option<u64> {
        let digits: String = self.dock.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return None;
        }
        digits.parse::<u64>().ok()
    }
}

// ==========================================
// ImportOutcome - 导入结果
// ==========================================
// rows 为空表示"没有可导入的行"，不是错误
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub sheet_name: String,                    // 选中的工作表
    pub header_row: usize,                     // 表头行号（从 1 开始）
    pub header_map: BTreeMap<SchemaField, usize>, // 字段 → 列号（从 1 开始）
    pub rows: Vec<LoadRow>,                    // 按月台顺序排列
}

impl ImportOutcome {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
