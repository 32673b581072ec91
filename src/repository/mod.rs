// ==========================================
// FarmTech 农场记录系统 - 记录仓储层
// ==========================================
// 职责: 会话期内存记录集合 (四个有序序列)
// 标识: 仅按集合内位置索引,删除后后续索引前移
// ==========================================

pub mod error;
pub mod record_store;

pub use error::{StoreError, StoreResult};
pub use record_store::{RecordFields, RecordStore, StoreSummary};
