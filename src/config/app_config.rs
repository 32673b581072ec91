// ==========================================
// FarmTech 农场记录系统 - 应用配置
// ==========================================
// 格式: JSON,未出现的键取默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ==========================================
// 默认值
// ==========================================
pub mod config_keys {
    pub const DEFAULT_EXPORT_DIR: &str = "exports";
    pub const DEFAULT_LOCALE: &str = "pt-BR";
    pub const DEFAULT_LOG_FILTER: &str = "warn";

    pub const CONFIG_DIR_NAME: &str = "farmtech";
    pub const CONFIG_FILE_NAME: &str = "config.json";
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误: {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// AppConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub export_dir: PathBuf, // 导出目录 (相对路径基于当前工作目录)
    pub locale: String,      // 界面语言 (pt-BR / en)
    pub log_filter: String,  // 默认日志过滤器 (RUST_LOG 优先)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from(config_keys::DEFAULT_EXPORT_DIR),
            locale: config_keys::DEFAULT_LOCALE.to_string(),
            log_filter: config_keys::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// 默认配置文件路径 (无法确定用户配置目录时为 None)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(config_keys::CONFIG_DIR_NAME)
                .join(config_keys::CONFIG_FILE_NAME)
        })
    }

    /// 从默认位置加载; 文件不存在时返回默认配置
    pub fn load_or_default() -> ConfigResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// 从指定文件加载
    ///
    /// # 返回
    /// - Ok(AppConfig): 文件内容与默认值合并后的配置; 文件不存在时为默认配置
    /// - Err(ConfigError): 文件不可读或 JSON 格式错误
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "配置文件不存在,使用默认配置");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), ?config, "配置已加载");
        Ok(config)
    }
}
