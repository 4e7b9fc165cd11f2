// ==========================================
// PLMECO - 工作区
// ==========================================
// 职责: 打开的文档（标签页）、导入落位、单元格编辑、保存、自动保存
// 说明: 与界面框架无关；界面层只负责对话框与渲染
// 自动保存: 导入/另存后立即写；编辑后经防抖写
// ==========================================

use crate::app::debounce::Debouncer;
use crate::app::grid_edit::{apply_text_edit, apply_time_edit, TextColumn, TimeColumn};
use crate::domain::document::{AppSnapshot, Document};
use crate::domain::load::{ImportOutcome, LoadRow};
use crate::exporter::{ExportError, ExportResult, RowExporter};
use crate::i18n::{t, t_with_args};
use crate::persistence::SnapshotStore;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// 新窗口的第一个标签页标题
pub const FIRST_DOCUMENT_TITLE: &str = "Hoja 1";

// ==========================================
// ImportNotice - 导入后给用户的提示
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportNotice {
    /// 没有可导入的行（警告，不是错误）
    NoImportableRows,
    Imported {
        sheet_name: String,
        header_row: usize,
        rows: usize,
    },
}

impl ImportNotice {
    fn from_outcome(outcome: &ImportOutcome) -> Self {
        ImportNotice::Imported {
            sheet_name: outcome.sheet_name.clone(),
            header_row: outcome.header_row,
            rows: outcome.rows.len(),
        }
    }

    /// 本地化提示文本
    pub fn message(&self) -> String {
        match self {
            ImportNotice::NoImportableRows => t("import.no_rows"),
            ImportNotice::Imported {
                sheet_name,
                header_row,
                rows,
            } => t_with_args(
                "import.imported",
                &[
                    ("sheet", sheet_name.as_str()),
                    ("header_row", header_row.to_string().as_str()),
                    ("rows", rows.to_string().as_str()),
                ],
            ),
        }
    }
}

// ==========================================
// Workspace - 工作区
// ==========================================
pub struct Workspace {
    documents: Vec<Document>,
    selected_index: usize,
    store: SnapshotStore,
    autosave: Debouncer,
}

impl Workspace {
    /// 新工作区: 一个空白标签页
    pub fn new(store: SnapshotStore, autosave_delay: Duration) -> Self {
        Self {
            documents: vec![Document::with_title(FIRST_DOCUMENT_TITLE)],
            selected_index: 0,
            store,
            autosave: Debouncer::new(autosave_delay),
        }
    }

    /// 从自动保存快照恢复（恢复过程不触发保存）
    pub fn restore(store: SnapshotStore, autosave_delay: Duration) -> Self {
        let snapshot = store.load();
        if snapshot.documents.is_empty() {
            return Self::new(store, autosave_delay);
        }

        let selected_index = snapshot
            .selected_index
            .min(snapshot.documents.len() - 1);
        info!(
            documents = snapshot.documents.len(),
            selected_index = selected_index,
            "已从快照恢复"
        );

        Self {
            documents: snapshot.documents,
            selected_index,
            store,
            autosave: Debouncer::new(autosave_delay),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn current(&self) -> Option<&Document> {
        self.documents.get(self.selected_index)
    }

    fn current_mut(&mut self) -> Option<&mut Document> {
        self.documents.get_mut(self.selected_index)
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.documents.len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    pub fn has_pending_autosave(&self) -> bool {
        self.autosave.is_pending()
    }

    pub fn to_snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            documents: self.documents.clone(),
            selected_index: self.selected_index,
        }
    }

    // ==========================================
    // 导入
    // ==========================================

    /// 导入到当前标签页（替换全部行，标题改为工作表名）
    pub fn import_into_current(&mut self, outcome: ImportOutcome) -> ImportNotice {
        if outcome.is_empty() {
            return ImportNotice::NoImportableRows;
        }
        let notice = ImportNotice::from_outcome(&outcome);

        match self.current_mut() {
            Some(doc) => {
                doc.title = outcome.sheet_name;
                doc.current_file = None;
                doc.rows = outcome.rows;
            }
            None => {
                self.documents.push(document_from(outcome));
                self.selected_index = self.documents.len() - 1;
            }
        }

        self.autosave_now();
        notice
    }

    /// 导入到新标签页并选中
    pub fn import_into_new(&mut self, outcome: ImportOutcome) -> ImportNotice {
        if outcome.is_empty() {
            return ImportNotice::NoImportableRows;
        }
        let notice = ImportNotice::from_outcome(&outcome);

        self.documents.push(document_from(outcome));
        self.selected_index = self.documents.len() - 1;

        self.autosave_now();
        notice
    }

    /// 关闭当前标签页
    pub fn close_current(&mut self, now: Instant) -> Option<Document> {
        if self.selected_index >= self.documents.len() {
            return None;
        }
        let closed = self.documents.remove(self.selected_index);
        self.selected_index = self
            .selected_index
            .min(self.documents.len().saturating_sub(1));
        self.autosave.trigger(now);
        Some(closed)
    }

    // ==========================================
    // 编辑（成功写入后触发防抖保存）
    // ==========================================

    fn edit_row<F>(&mut self, row_id: u32, now: Instant, edit: F) -> bool
    where
        F: FnOnce(&mut LoadRow) -> bool,
    {
        let changed = self
            .current_mut()
            .and_then(|doc| doc.row_mut(row_id))
            .map(edit)
            .unwrap_or(false);
        if changed {
            self.autosave.trigger(now);
        }
        changed
    }

    /// 编辑时间列；无法解析时返回 false 且不修改
    pub fn edit_time(&mut self, row_id: u32, column: TimeColumn, text: &str, now: Instant) -> bool {
        self.edit_row(row_id, now, |row| apply_time_edit(row, column, text))
    }

    pub fn edit_text(&mut self, row_id: u32, column: TextColumn, text: &str, now: Instant) -> bool {
        self.edit_row(row_id, now, |row| apply_text_edit(row, column, text))
    }

    pub fn set_lex(&mut self, row_id: u32, lex: bool, now: Instant) -> bool {
        self.edit_row(row_id, now, |row| {
            let changed = row.lex != lex;
            row.lex = lex;
            changed
        })
    }

    // ==========================================
    // 保存
    // ==========================================

    /// 保存到当前文件；没有保存路径时返回 MissingTargetFile（由界面转为"另存为"）
    pub fn save_current(&mut self, exporter: &dyn RowExporter) -> ExportResult<PathBuf> {
        let doc = self.current().ok_or(ExportError::MissingTargetFile)?;
        let target = doc
            .current_file
            .as_deref()
            .map(PathBuf::from)
            .ok_or(ExportError::MissingTargetFile)?;

        exporter.export_file(&target, &doc.rows)?;
        Ok(target)
    }

    /// 另存为，并记住保存路径
    pub fn save_current_as<P: AsRef<Path>>(
        &mut self,
        exporter: &dyn RowExporter,
        file_path: P,
    ) -> ExportResult<PathBuf> {
        let target = file_path.as_ref().to_path_buf();
        let doc = self.current_mut().ok_or(ExportError::MissingTargetFile)?;

        exporter.export_file(&target, &doc.rows)?;
        doc.current_file = Some(target.display().to_string());

        self.autosave_now();
        Ok(target)
    }

    // ==========================================
    // 自动保存
    // ==========================================

    /// 由事件循环周期调用；防抖到期时写快照
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.autosave.poll(now) {
            return self.autosave_now();
        }
        false
    }

    /// 立即写快照；失败只记录日志，不打断编辑
    pub fn autosave_now(&mut self) -> bool {
        self.autosave.cancel();
        match self.store.save(&self.to_snapshot()) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "自动保存失败");
                false
            }
        }
    }
}

fn document_from(outcome: ImportOutcome) -> Document {
    Document {
        title: outcome.sheet_name,
        current_file: None,
        rows: outcome.rows,
    }
}
