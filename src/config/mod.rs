// ==========================================
// FarmTech 农场记录系统 - 配置层
// ==========================================
// 职责: 读取应用配置 (导出目录 / 语言 / 日志级别)
// 存储: <config_dir>/farmtech/config.json,缺失时使用默认值
// ==========================================

pub mod app_config;

pub use app_config::{config_keys, AppConfig, ConfigError, ConfigResult};
