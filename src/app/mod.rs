// ==========================================
// PLMECO - 应用层
// ==========================================
// 职责: 工作区状态、单元格编辑、自动保存防抖
// ==========================================

pub mod debounce;
pub mod grid_edit;
pub mod workspace;

pub use debounce::Debouncer;
pub use grid_edit::{apply_text_edit, apply_time_edit, TextColumn, TimeColumn};
pub use workspace::{ImportNotice, Workspace, FIRST_DOCUMENT_TITLE};
