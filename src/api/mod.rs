// ==========================================
// DGA Duval 诊断引擎 - API 层
// ==========================================
// 职责: 外壳调用入口 (输入归一化、校验、组装输出)
// 红线: 会话历史由外壳持有,API 只接收引用
// ==========================================

pub mod duval_api;
pub mod error;
pub mod screening_api;
pub mod validator;

pub use duval_api::DuvalApi;
pub use error::{ApiError, ApiResult};
pub use screening_api::{ScreeningApi, ScreeningRequest};
