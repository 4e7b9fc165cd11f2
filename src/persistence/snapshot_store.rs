// ==========================================
// PLMECO - 自动保存快照存储
// ==========================================
// 职责: 全部打开的文档 ↔ 本地 JSON 文件
// 位置: {data_dir}/autosave_multi.json
// 说明: 读取失败（文件不存在/损坏）一律返回空快照
// ==========================================

use crate::config::AppConfig;
use crate::domain::document::AppSnapshot;
use crate::persistence::error::PersistenceResult;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 快照文件名
pub const SNAPSHOT_FILE_NAME: &str = "autosave_multi.json";

pub struct SnapshotStore {
    base_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.data_dir)
    }

    pub fn file_path(&self) -> PathBuf {
        self.base_dir.join(SNAPSHOT_FILE_NAME)
    }

    /// 写入快照（目录不存在时创建）
    pub fn save(&self, snapshot: &AppSnapshot) -> PersistenceResult<()> {
        fs::create_dir_all(&self.base_dir)?;
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(self.file_path(), json)?;

        debug!(
            path = %self.file_path().display(),
            documents = snapshot.documents.len(),
            "快照已保存"
        );
        Ok(())
    }

    /// 读取快照
    pub fn load(&self) -> AppSnapshot {
        let path = self.file_path();
        if !path.exists() {
            return AppSnapshot::default();
        }

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "快照读取失败");
                return AppSnapshot::default();
            }
        };

        serde_json::from_str(&text).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "快照已损坏，忽略");
            AppSnapshot::default()
        })
    }

    /// 删除快照（不存在时视为成功）
    pub fn clear(&self) -> PersistenceResult<()> {
        let path = self.file_path();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::Document;
    use crate::domain::load::LoadRow;
    use chrono::NaiveTime;
    use tempfile::tempdir;

    fn sample_snapshot() -> AppSnapshot {
        let mut doc = Document::with_title("Cargas");
        doc.current_file = Some("/tmp/cargas.csv".to_string());
        doc.rows.push(LoadRow {
            id: 1,
            plate: "1234ABC".to_string(),
            dock: "3".to_string(),
            deadline: NaiveTime::from_hms_opt(7, 30, 0),
            lex: true,
            ..Default::default()
        });
        AppSnapshot {
            documents: vec![doc, Document::default()],
            selected_index: 1,
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("nested"));

        let snapshot = sample_snapshot();
        store.save(&snapshot).unwrap();
        assert!(store.file_path().exists());
        assert_eq!(store.load(), snapshot);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        assert_eq!(store.load(), AppSnapshot::default());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        fs::write(store.file_path(), "{ no es json").unwrap();
        assert_eq!(store.load(), AppSnapshot::default());
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        store.clear().unwrap();
        store.save(&sample_snapshot()).unwrap();
        store.clear().unwrap();
        assert!(!store.file_path().exists());
    }
}
