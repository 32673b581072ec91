// ==========================================
// FarmTech 农场记录系统 - 会话层错误类型
// ==========================================
// 说明: 越界与导出失败在子流程内提示用户,不作为会话错误上抛
// ==========================================

use thiserror::Error;

/// 会话层错误类型
#[derive(Error, Debug)]
pub enum SessionError {
    /// 控制台读写失败
    #[error("控制台读写失败: {0}")]
    Io(#[from] std::io::Error),

    /// 输入流已结束 (EOF)
    #[error("输入流已结束")]
    InputClosed,
}

/// Result 类型别名
pub type SessionResult<T> = Result<T, SessionError>;
