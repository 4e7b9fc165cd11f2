// ==========================================
// PLMECO - 持久化层
// ==========================================
// 职责: 自动保存快照（JSON）
// ==========================================

pub mod error;
pub mod snapshot_store;

pub use error::{PersistenceError, PersistenceResult};
pub use snapshot_store::{SnapshotStore, SNAPSHOT_FILE_NAME};
