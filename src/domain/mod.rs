// ==========================================
// DGA Duval 诊断引擎 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、输出结构
// 红线: 不含引擎逻辑,不含 I/O
// ==========================================

pub mod composition;
pub mod diagnosis;
pub mod history;
pub mod panel;
pub mod types;

// 重导出核心类型
pub use composition::{GasComposition, PlanePoint};
pub use diagnosis::{
    ConditionAssessment, DuvalDiagnosis, FaultDescription, GasComparisonRow, ReferenceRow,
    ScreeningReport,
};
pub use history::HistoryRecord;
pub use panel::{GasPanel, ThresholdRow};
pub use types::{
    AgeBracket, Gas, PreservationRegime, ScreeningCondition, SeverityGroup, TernaryAxis, ZoneCode,
};
