// ==========================================
// DGA Duval 诊断引擎 - 核心库
// ==========================================
// 范围: Duval 三角形 1 区域分类 + IEEE C57.104 筛查
// 系统定位: 诊断支持 (结论由人工复核)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 值类型与诊断结果
pub mod domain;

// 引擎层 - 投影/分类/几何/筛查 (纯函数)
pub mod engine;

// 渲染层 - SVG 三角形
pub mod render;

// 配置层
pub mod config;

// 会话历史
pub mod repository;

// API 层 - 外壳入口
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::types::{
    AgeBracket, Gas, PreservationRegime, ScreeningCondition, SeverityGroup, TernaryAxis, ZoneCode,
};

pub use domain::{DuvalDiagnosis, GasComposition, GasPanel, PlanePoint, ScreeningReport};

pub use engine::{
    DuvalClassifier, FaultCatalog, IeeeScreeningEngine, TernaryProjector, ZoneGeometry,
};

pub use api::{ApiError, DuvalApi, ScreeningApi, ScreeningRequest};

pub use config::{ConfigManager, DgaConfig};

pub use render::TriangleRenderer;

pub use repository::SessionHistoryRepository;

// ==========================================
// 常量定义
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "DGA Duval 诊断引擎";
