// ==========================================
// PLMECO - 核心库
// ==========================================
// 职责: 月台装车计划的导入、编辑、导出与自动保存
// 技术栈: Rust + calamine + rust_xlsxwriter + csv + serde_json
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "es");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 表头识别 / 行提取 / 时间解析
pub mod importer;

// 导出层 - xlsx / CSV
pub mod exporter;

// 持久化层 - 自动保存快照
pub mod persistence;

// 配置层 - 运行时配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 应用层 - 工作区
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use app::{ImportNotice, Workspace};
pub use config::AppConfig;
pub use domain::{AppSnapshot, Document, ImportOutcome, LoadRow, SchemaField};
pub use exporter::{CsvExporter, RowExporter, UniversalExporter, XlsxExporter};
pub use importer::{LoadImporter, LoadImporterImpl};
pub use persistence::SnapshotStore;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "PLMECO";
