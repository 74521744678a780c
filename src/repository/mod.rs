// ==========================================
// DGA Duval 诊断引擎 - 仓储层
// ==========================================
// 职责: 会话级历史日志 (只追加) 与 CSV 导出
// 红线: 核心引擎不依赖仓储层; 由 API 层作为显式协作者注入
// ==========================================

pub mod error;
pub mod history_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use history_repo::SessionHistoryRepository;
