// ==========================================
// PLMECO - 配置管理器
// ==========================================
// 职责: 配置加载、查询、默认值
// 来源: 环境变量 (PLMECO_*)，未设置或非法时使用默认值
// ==========================================

use crate::importer::DEFAULT_HEADER_SCAN_ROWS;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// 默认自动保存延迟（毫秒）
pub const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 1500;

/// 默认界面语言
pub const DEFAULT_LOCALE: &str = "es";

/// 默认数据目录名
pub const DATA_DIR_NAME: &str = "PLMECO";

// ==========================================
// AppConfig - 运行时配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub data_dir: PathBuf,          // 自动保存目录
    pub header_scan_rows: usize,    // 表头最多扫描行数
    pub autosave_delay: Duration,   // 自动保存防抖延迟
    pub locale: String,             // 界面语言
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            header_scan_rows: DEFAULT_HEADER_SCAN_ROWS,
            autosave_delay: Duration::from_millis(DEFAULT_AUTOSAVE_DELAY_MS),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl AppConfig {
    /// 从环境变量加载
    pub fn from_env() -> Self {
        ConfigManager::from_env().load()
    }
}

/// 本地应用数据目录下的 PLMECO
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 读取全部 PLMECO_* 环境变量
    pub fn from_env() -> Self {
        let values = std::env::vars()
            .filter(|(k, _)| k.starts_with("PLMECO_"))
            .collect();
        Self { values }
    }

    /// 从键值对创建（测试 / 嵌入方使用）
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }

    /// 读取配置值（空白视为未设置）
    pub fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// 读取并解析配置值，非法时回退默认值
    fn parse_or_default<T: std::str::FromStr + Copy>(&self, key: &str, default: T) -> T {
        match self.get_config_value(key) {
            None => default,
            Some(raw) => raw.parse::<T>().unwrap_or_else(|_| {
                warn!(key = key, value = raw, "配置值非法，使用默认值");
                default
            }),
        }
    }

    /// 组装 AppConfig
    pub fn load(&self) -> AppConfig {
        let defaults = AppConfig::default();

        let data_dir = self
            .get_config_value(config_keys::DATA_DIR)
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let header_scan_rows =
            match self.parse_or_default(config_keys::HEADER_SCAN_ROWS, defaults.header_scan_rows) {
                0 => {
                    warn!("表头扫描行数不能为 0，使用默认值");
                    DEFAULT_HEADER_SCAN_ROWS
                }
                n => n,
            };

        let autosave_delay = Duration::from_millis(
            self.parse_or_default(config_keys::AUTOSAVE_DELAY_MS, DEFAULT_AUTOSAVE_DELAY_MS),
        );

        let locale = self
            .get_config_value(config_keys::LOCALE)
            .map(str::to_string)
            .unwrap_or(defaults.locale);

        AppConfig {
            data_dir,
            header_scan_rows,
            autosave_delay,
            locale,
        }
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 数据目录（自动保存快照）
    pub const DATA_DIR: &str = "PLMECO_DATA_DIR";

    // 导入
    pub const HEADER_SCAN_ROWS: &str = "PLMECO_HEADER_SCAN_ROWS";

    // 自动保存
    pub const AUTOSAVE_DELAY_MS: &str = "PLMECO_AUTOSAVE_DELAY_MS";

    // 界面语言
    pub const LOCALE: &str = "PLMECO_LOCALE";
}
