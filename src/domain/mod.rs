// ==========================================
// FarmTech 农场记录系统 - 领域模型层
// ==========================================
// 职责: 定义田块面积、投入品记录与集合类型
// 红线: 派生量(面积/用量)只由输入字段计算,不单独存储
// 红线: 不含存储逻辑,不含交互逻辑
// ==========================================

pub mod area;
pub mod input;
pub mod types;

// 重导出核心类型
pub use area::{CornArea, SoyArea};
pub use input::{CornInput, SoyInput};
pub use types::{CollectionKind, CropType};
