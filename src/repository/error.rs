// ==========================================
// DGA Duval 诊断引擎 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 存储错误 =====
    #[error("会话日志锁获取失败: {0}")]
    LockError(String),

    // ===== 导出错误 =====
    #[error("CSV 导出失败: {0}")]
    CsvExportError(#[from] csv::Error),

    #[error("导出写入失败: {0}")]
    IoError(#[from] std::io::Error),

    #[error("导出内容编码错误: {0}")]
    EncodingError(String),

    // ===== 数据质量错误 =====
    #[error("字段值错误 (field={field}): {message}")]
    FieldValueError { field: String, message: String },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
