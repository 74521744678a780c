// ==========================================
// DGA Duval 诊断引擎 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换下层错误为用户友好的错误消息
// 说明: 诊断哨兵值 (N/A / OUT_OF_RANGE / UNKNOWN) 不是错误,不经过此类型
// ==========================================

use crate::config::ConfigError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("读数无效 (field={field}): {value} {reason}")]
    InvalidReading {
        field: String,
        value: f64,
        reason: String,
    },

    // ==========================================
    // 下层错误
    // ==========================================
    #[error("会话历史错误: {0}")]
    HistoryError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::FieldValueError { field, message } => {
                ApiError::InvalidInput(format!("{}: {}", field, message))
            }
            RepositoryError::LockError(msg) => {
                ApiError::InternalError(format!("会话日志锁获取失败: {}", msg))
            }
            other => ApiError::HistoryError(other.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
