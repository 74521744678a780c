// ==========================================
// DGA Duval 诊断引擎 - 配置层
// ==========================================
// 职责: 诊断参数加载与校验,按配置构造引擎
// 存储: JSON 文件 + 环境变量覆写
// ==========================================

pub mod config_manager;
pub mod dga_config;
pub mod error;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use dga_config::DgaConfig;
pub use error::{ConfigError, ConfigResult};
