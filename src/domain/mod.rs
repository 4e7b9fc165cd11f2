// ==========================================
// PLMECO - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含文件读写逻辑
// ==========================================

pub mod document;
pub mod load;
pub mod types;

// 重导出核心类型
pub use document::{AppSnapshot, Document, UNTITLED_DOCUMENT};
pub use load::{ImportOutcome, LoadRow, INCIDENT_CARRIER_DELAY};
pub use types::{SchemaField, REQUIRED_FIELDS, SCHEMA_SYNONYMS};
