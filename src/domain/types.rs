// ==========================================
// PLMECO - 领域类型定义
// ==========================================
// 职责: 导入目标字段 (SchemaField) 与同义词表
// 红线: 同义词只在此处声明,禁止散落在解析逻辑中
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 目标字段 (Schema Field)
// ==========================================
// 序列化格式: 表头标签 (与导出列名一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SchemaField {
    #[serde(rename = "TRANSPORTISTA")]
    Carrier, // 承运商
    #[serde(rename = "MATRICULA")]
    Plate, // 车牌
    #[serde(rename = "MUELLE")]
    Dock, // 月台
    #[serde(rename = "ESTADO")]
    Status, // 状态
    #[serde(rename = "DESTINO")]
    Destination, // 目的地
    #[serde(rename = "SALIDA TOPE")]
    DeadlineDeparture, // 最晚发车时间
    #[serde(rename = "PRECINTO")]
    Seal, // 铅封号
}

/// 同义词表（字段 → 可接受的表头文本，按声明顺序）
///
/// 比较前两侧都会经过 `data_cleaner::normalize_header`（大写、去重音、去空白）。
pub const SCHEMA_SYNONYMS: &[(SchemaField, &[&str])] = &[
    (
        SchemaField::Carrier,
        &["CARRIER", "TRANSPORTISTA", "TRANSPORTE", "TRANSPORTER"],
    ),
    (SchemaField::Plate, &["MATRICULA", "PLACA", "REG", "REGISTRO"]),
    (SchemaField::Dock, &["MUELLE", "MUEL.", "DOCK"]),
    (SchemaField::Status, &["ESTADO", "STATUS", "EST."]),
    (
        SchemaField::Destination,
        &["DESTINO", "DEST.", "DESTINATION", "DESTINO FINAL"],
    ),
    (
        SchemaField::DeadlineDeparture,
        &[
            "SALIDA TOPE",
            "TOPE SALIDA",
            "SALIDA_TOPE",
            "TOPE",
            "TOPE DE SALIDA",
        ],
    ),
    (
        SchemaField::Seal,
        &[
            "PRECINTO",
            "SEAL",
            "SEALS",
            "Nº PRECINTO",
            "NUM PRECINTO",
            "NUMERO PRECINTO",
        ],
    ),
];

/// 可导入的最小字段集
pub const REQUIRED_FIELDS: [SchemaField; 4] = [
    SchemaField::Plate,
    SchemaField::Destination,
    SchemaField::Dock,
    SchemaField::Status,
];

impl SchemaField {
    /// 全部字段（与同义词表顺序一致）
    pub const ALL: [SchemaField; 7] = [
        SchemaField::Carrier,
        SchemaField::Plate,
        SchemaField::Dock,
        SchemaField::Status,
        SchemaField::Destination,
        SchemaField::DeadlineDeparture,
        SchemaField::Seal,
    ];

    /// 表头标签
    pub fn label(self) -> &'static str {
        match self {
            SchemaField::Carrier => "TRANSPORTISTA",
            SchemaField::Plate => "MATRICULA",
            SchemaField::Dock => "MUELLE",
            SchemaField::Status => "ESTADO",
            SchemaField::Destination => "DESTINO",
            SchemaField::DeadlineDeparture => "SALIDA TOPE",
            SchemaField::Seal => "PRECINTO",
        }
    }

    /// 该字段的同义词
    pub fn synonyms(self) -> &'static [&'static str] {
        SCHEMA_SYNONYMS
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, synonyms)| *synonyms)
            .unwrap_or(&[])
    }

    pub fn is_required(self) -> bool {
        REQUIRED_FIELDS.contains(&self)
    }
}

impl fmt::Display for SchemaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
