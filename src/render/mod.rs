// ==========================================
// DGA Duval 诊断引擎 - 渲染层
// ==========================================
// 职责: 将区域几何渲染为可展示的图形 (SVG)
// ==========================================

pub mod triangle_svg;

pub use triangle_svg::{zone_color, TriangleRenderer};
