// ==========================================
// FarmTech 农场记录系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::CollectionKind;
use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// 位置索引越界 (index 为 0 基)
    #[error("索引越界: collection={collection}, index={index}, len={len}")]
    IndexOutOfRange {
        collection: CollectionKind,
        index: usize,
        len: usize,
    },
}

/// Result 类型别名
pub type StoreResult<T> = Result<T, StoreError>;
