// ==========================================
// FarmTech 农场记录系统 - 菜单选项
// ==========================================
// 编号与屏幕显示一致 (1 基)
// ==========================================

use crate::domain::{CollectionKind, CropType};

/// 主菜单动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    Create, // 1. 录入
    List,   // 2. 列表
    Update, // 3. 按位置更新
    Delete, // 4. 按位置删除
    Export, // 5. 导出 CSV
    Exit,   // 6. 退出
}

impl MainAction {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MainAction::Create),
            "2" => Some(MainAction::List),
            "3" => Some(MainAction::Update),
            "4" => Some(MainAction::Delete),
            "5" => Some(MainAction::Export),
            "6" => Some(MainAction::Exit),
            _ => None,
        }
    }

    /// 菜单行的翻译键 (按显示顺序)
    pub const MENU_KEYS: [&'static str; 6] = [
        "menu.create",
        "menu.list",
        "menu.update",
        "menu.delete",
        "menu.export",
        "menu.exit",
    ];
}

/// 录入子菜单: 面积 / 投入品
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Area,
    Input,
}

impl EntryKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(EntryKind::Area),
            "2" => Some(EntryKind::Input),
            _ => None,
        }
    }

    /// 与作物组合得到目标集合
    pub fn collection(&self, crop: CropType) -> CollectionKind {
        match (self, crop) {
            (EntryKind::Area, CropType::Soy) => CollectionKind::SoyArea,
            (EntryKind::Area, CropType::Corn) => CollectionKind::CornArea,
            (EntryKind::Input, CropType::Soy) => CollectionKind::SoyInput,
            (EntryKind::Input, CropType::Corn) => CollectionKind::CornInput,
        }
    }
}

/// 作物选择: 1 大豆 / 2 玉米
pub fn parse_crop(raw: &str) -> Option<CropType> {
    match raw.trim() {
        "1" => Some(CropType::Soy),
        "2" => Some(CropType::Corn),
        _ => None,
    }
}

/// 集合选择 (更新 / 删除子菜单),编号按 CollectionKind::ALL 顺序
pub fn parse_collection(raw: &str) -> Option<CollectionKind> {
    let number: usize = raw.trim().parse().ok()?;
    CollectionKind::ALL.get(number.checked_sub(1)?).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_action_parse() {
        assert_eq!(MainAction::parse("1"), Some(MainAction::Create));
        assert_eq!(MainAction::parse(" 6 "), Some(MainAction::Exit));
        assert_eq!(MainAction::parse("7"), None);
        assert_eq!(MainAction::parse("sair"), None);
    }

    #[test]
    fn test_parse_collection() {
        assert_eq!(parse_collection("1"), Some(CollectionKind::SoyArea));
        assert_eq!(parse_collection("4"), Some(CollectionKind::CornInput));
        assert_eq!(parse_collection("0"), None);
        assert_eq!(parse_collection("5"), None);
    }

    #[test]
    fn test_entry_collection() {
        assert_eq!(EntryKind::Input.collection(CropType::Corn), CollectionKind::CornInput);
        assert_eq!(EntryKind::Area.collection(CropType::Soy), CollectionKind::SoyArea);
    }
}
