// ==========================================
// DGA Duval 诊断引擎 - 引擎层
// ==========================================
// 职责: 坐标变换、区域分类、区域几何、IEEE 筛查
// 红线: 引擎均为纯函数,不做 I/O,不持有会话状态
// 红线: 区域规则表只有一份 (duval::ZONE_RULES)
// ==========================================

pub mod duval;
pub mod fault_catalog;
pub mod ieee_screening;
pub mod ieee_tables;
pub mod ternary;
pub mod zone_geometry;

// 重导出核心引擎
pub use duval::{zone_for, DuvalClassifier, ZoneRule, ZONE_RULES};
pub use fault_catalog::FaultCatalog;
pub use ieee_screening::IeeeScreeningEngine;
pub use ieee_tables::{ThresholdTable, P90_TABLE, P95_TABLE};
pub use ternary::TernaryProjector;
pub use zone_geometry::{BoundaryLine, LabelAnchor, RasterCell, ZoneGeometry, ZoneRaster};
