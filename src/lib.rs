// ==========================================
// FarmTech 农场记录系统 - 核心库
// ==========================================
// 范围: 大豆矩形田块 / 玉米圆形田块 面积记录,
//       液体 (按行) / 颗粒 (按公顷) 投入品用量记录,
//       会话内增删改查 + CSV 导出
// 技术栈: Rust + csv + chrono + tracing + rust-i18n
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 仓储层 - 会话内记录存储
pub mod repository;

// 导出层 - CSV 文件
pub mod exporter;

// 会话层 - 菜单与提示
pub mod session;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{CollectionKind, CornArea, CornInput, CropType, SoyArea, SoyInput};
pub use exporter::{CsvExporter, ExportError, ExportReport};
pub use repository::{RecordFields, RecordStore, StoreError, StoreSummary};
pub use session::{Session, SessionError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "FarmTech Solutions";
