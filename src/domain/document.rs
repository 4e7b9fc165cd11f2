// ==========================================
// PLMECO - 文档与快照模型
// ==========================================
// 职责: 工作区中的文档（标签页）以及自动保存快照结构
// ==========================================

use crate::domain::load::LoadRow;
use serde::{Deserialize, Serialize};

/// 新文档默认标题
pub const UNTITLED_DOCUMENT: &str = "Sin título";

// ==========================================
// Document - 单个文档（标签页）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub title: String,                // 标题（导入后为工作表名）
    pub current_file: Option<String>, // 保存路径（未保存过为 None）
    pub rows: Vec<LoadRow>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            title: UNTITLED_DOCUMENT.to_string(),
            current_file: None,
            rows: Vec::new(),
        }
    }
}

impl Document {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn row_mut(&mut self, row_id: u32) -> Option<&mut LoadRow> {
        self.rows.iter_mut().find(|r| r.id == row_id)
    }
}

// ==========================================
// AppSnapshot - 自动保存快照
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSnapshot {
    pub documents: Vec<Document>,
    pub selected_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_title() {
        assert_eq!(Document::default().title, UNTITLED_DOCUMENT);
        assert_eq!(Document::with_title("Hoja 1").title, "Hoja 1");
    }

    #[test]
    fn test_row_mut_by_id() {
        let mut doc = Document::default();
        doc.rows.push(LoadRow {
            id: 7,
            plate: "1234ABC".to_string(),
            ..Default::default()
        });
        doc.row_mut(7).unwrap().status = "OK".to_string();
        assert_eq!(doc.rows[0].status, "OK");
        assert!(doc.row_mut(8).is_none());
    }
}
