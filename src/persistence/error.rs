// ==========================================
// PLMECO - 持久化错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("快照文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("快照序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;
