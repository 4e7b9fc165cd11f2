// ==========================================
// PLMECO - 配置层
// ==========================================
// 职责: 运行时配置（数据目录 / 表头扫描 / 自动保存 / 语言）
// 存储: 环境变量 PLMECO_*
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{config_keys, default_data_dir, AppConfig, ConfigManager};
