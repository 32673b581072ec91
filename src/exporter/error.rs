// ==========================================
// FarmTech 农场记录系统 - 导出层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: 每个错误都带出错文件/目录路径
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// 导出层错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    // ===== 文件系统错误 =====
    #[error("导出目录创建失败: {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("文件写入失败: {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("文件不存在: {}", .0.display())]
    FileNotFound(PathBuf),

    // ===== CSV 编解码错误 =====
    #[error("CSV 处理失败: {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
