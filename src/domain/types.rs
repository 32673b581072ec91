// ==========================================
// FarmTech 农场记录系统 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 作物类型 (Crop Type)
// ==========================================
// 序列化格式: 小写 (与导出文件 cropType 列一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropType {
    Soy,  // 大豆 (矩形田块)
    Corn, // 玉米 (圆形田块)
}

impl CropType {
    /// 合并导出中使用的合成 ID 前缀
    pub fn id_prefix(&self) -> &'static str {
        match self {
            CropType::Soy => "soy",
            CropType::Corn => "corn",
        }
    }
}

impl fmt::Display for CropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id_prefix())
    }
}

// ==========================================
// 记录集合 (Collection Kind)
// ==========================================
// 顺序即列表展示顺序与导出顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    SoyArea,   // 大豆田块面积
    CornArea,  // 玉米田块面积
    SoyInput,  // 大豆液体投入品 (按行)
    CornInput, // 玉米颗粒投入品 (按公顷)
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 4] = [
        CollectionKind::SoyArea,
        CollectionKind::CornArea,
        CollectionKind::SoyInput,
        CollectionKind::CornInput,
    ];

    /// 导出文件名主干: `<file_stem>_<timestamp>.csv`
    pub fn file_stem(&self) -> &'static str {
        match self {
            CollectionKind::SoyArea => "soy_areas",
            CollectionKind::CornArea => "corn_areas",
            CollectionKind::SoyInput => "soy_inputs",
            CollectionKind::CornInput => "corn_inputs",
        }
    }

    /// 集合显示名称的翻译键
    pub fn label_key(&self) -> &'static str {
        match self {
            CollectionKind::SoyArea => "collection.soy_area",
            CollectionKind::CornArea => "collection.corn_area",
            CollectionKind::SoyInput => "collection.soy_input",
            CollectionKind::CornInput => "collection.corn_input",
        }
    }

    pub fn crop(&self) -> CropType {
        match self {
            CollectionKind::SoyArea | CollectionKind::SoyInput => CropType::Soy,
            CollectionKind::CornArea | CollectionKind::CornInput => CropType::Corn,
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}
