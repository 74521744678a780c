// ==========================================
// DGA Duval 诊断引擎 - 区域几何
// ==========================================
// 依据: Duval 三角形 1 区域边界 (CH4=98; C2H4=20/23/40/50; C2H2=4/13/15/29)
// ==========================================
// 职责: 边界等值线 + 区域栅格 + 标签锚点
// 红线: 栅格与点分类器共用 duval::zone_for,不得另抄一份规则
// ==========================================

use crate::domain::composition::{GasComposition, PlanePoint};
use crate::domain::types::{TernaryAxis, ZoneCode};
use crate::engine::duval::zone_for;
use crate::engine::ternary::{linspace, TernaryProjector};
use serde::Serialize;
use tracing::instrument;

/// CH4 边界值
pub const CH4_BOUNDARIES: [f64; 1] = [98.0];
/// C2H4 边界值
pub const C2H4_BOUNDARIES: [f64; 4] = [20.0, 23.0, 40.0, 50.0];
/// C2H2 边界值
pub const C2H2_BOUNDARIES: [f64; 4] = [4.0, 13.0, 15.0, 29.0];

/// 栅格边缘内缩量（避开 0 与 1 的退化坐标）
pub const GRID_EDGE_EPSILON: f64 = 1e-6;

/// 默认栅格分辨率
pub const DEFAULT_RESOLUTION: usize = 120;

/// 栅格分辨率上限 (单元数 = resolution²)
pub const MAX_RESOLUTION: usize = 2000;

/// 实际使用的分辨率,限制在 [2, MAX_RESOLUTION]
pub fn effective_resolution(resolution: usize) -> usize {
    resolution.clamp(2, MAX_RESOLUTION)
}

// ==========================================
// BoundaryLine - 边界等值线
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryLine {
    pub axis: TernaryAxis,
    pub value: f64,
    pub points: Vec<PlanePoint>,
}

// ==========================================
// LabelAnchor - 区域标签锚点
// ==========================================
// 仅用于放置文字,不属于分类契约
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelAnchor {
    pub zone: ZoneCode,
    pub composition: GasComposition,
    pub point: PlanePoint,
}

// ==========================================
// RasterCell - 栅格单元
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RasterCell {
    pub point: PlanePoint,
    pub composition: GasComposition,
    pub zone: Option<ZoneCode>, // None = 三角形外
}

// ==========================================
// ZoneRaster - 区域栅格
// ==========================================
// 行优先: cells[row * resolution + col], row 对应 y, col 对应 x
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneRaster {
    pub resolution: usize,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    cells: Vec<RasterCell>,
}

impl ZoneRaster {
    /// 单元 (row, col)
    pub fn cell(&self, row: usize, col: usize) -> Option<&RasterCell> {
        if row >= self.resolution || col >= self.resolution {
            return None;
        }
        self.cells.get(row * self.resolution + col)
    }

    /// 单元区域 (row, col),越界或三角形外为 None
    pub fn zone_at(&self, row: usize, col: usize) -> Option<ZoneCode> {
        self.cell(row, col).and_then(|c| c.zone)
    }

    /// 全部单元
    pub fn cells(&self) -> &[RasterCell] {
        &self.cells
    }

    /// 三角形内的单元
    pub fn inside_cells(&self) -> impl Iterator<Item = &RasterCell> {
        self.cells.iter().filter(|c| c.zone.is_some())
    }

    /// 某区域的单元数
    pub fn count(&self, zone: ZoneCode) -> usize {
        self.cells.iter().filter(|c| c.zone == Some(zone)).count()
    }

    /// x 方向单元宽度
    pub fn cell_width(&self) -> f64 {
        match self.xs.as_slice() {
            [first, second, ..] => second - first,
            _ => 1.0,
        }
    }

    /// y 方向单元高度
    pub fn cell_height(&self) -> f64 {
        match self.ys.as_slice() {
            [first, second, ..] => second - first,
            _ => 1.0,
        }
    }
}

// ==========================================
// ZoneGeometry - 区域几何引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ZoneGeometry {
    projector: TernaryProjector,
}

impl ZoneGeometry {
    pub fn new() -> Self {
        Self {
            projector: TernaryProjector::new(),
        }
    }

    /// 使用指定投影器（控制等值线采样点数）
    pub fn with_projector(projector: TernaryProjector) -> Self {
        Self { projector }
    }

    // ==========================================
    // 栅格化
    // ==========================================

    /// 区域栅格化
    ///
    /// 步骤:
    /// 0) 分辨率限制在 [2, MAX_RESOLUTION]
    /// 1) 在 [1e-6, 1-1e-6] 上取 resolution × resolution 个网格点
    /// 2) 逆变换到三元组成
    /// 3) 三个分量均 ≥ 0 视为三角形内
    /// 4) 三角形内的点按区域规则表分类
    #[instrument(skip(self))]
    pub fn rasterize_zones(&self, resolution: usize) -> ZoneRaster {
        let resolution = effective_resolution(resolution);
        let xs: Vec<f64> =
            linspace(GRID_EDGE_EPSILON, 1.0 - GRID_EDGE_EPSILON, resolution).collect();
        let ys = xs.clone();

        let mut cells = Vec::with_capacity(resolution * resolution);
        for &y in &ys {
            for &x in &xs {
                let point = PlanePoint::new(x, y);
                let composition = self.projector.inverse(&point);
                let zone = if composition.is_inside() {
                    Some(zone_for(composition.ch4, composition.c2h4, composition.c2h2).0)
                } else {
                    None
                };
                cells.push(RasterCell {
                    point,
                    composition,
                    zone,
                });
            }
        }

        ZoneRaster {
            resolution,
            xs,
            ys,
            cells,
        }
    }

    // ==========================================
    // 边界与标签
    // ==========================================

    /// 固定边界等值线（CH4=98; C2H4=20/23/40/50; C2H2=4/13/15/29）
    pub fn boundary_polylines(&self) -> Vec<BoundaryLine> {
        let axes = [
            (TernaryAxis::Ch4, &CH4_BOUNDARIES[..]),
            (TernaryAxis::C2h4, &C2H4_BOUNDARIES[..]),
            (TernaryAxis::C2h2, &C2H2_BOUNDARIES[..]),
        ];

        axes.iter()
            .flat_map(|(axis, values)| {
                values.iter().filter_map(move |&value| {
                    let points = self.projector.project_isoline(*axis, value);
                    if points.is_empty() {
                        None
                    } else {
                        Some(BoundaryLine {
                            axis: *axis,
                            value,
                            points,
                        })
                    }
                })
            })
            .collect()
    }

    /// 三角形外框（C2H2 → C2H4 → CH4 → C2H2 闭合）
    pub fn outline(&self) -> [PlanePoint; 4] {
        [
            self.projector.project(0.0, 0.0, 100.0),
            self.projector.project(0.0, 100.0, 0.0),
            self.projector.project(100.0, 0.0, 0.0),
            self.projector.project(0.0, 0.0, 100.0),
        ]
    }

    /// 区域标签锚点（每个区域一个内部样本点）
    pub fn label_anchors(&self) -> Vec<LabelAnchor> {
        // T2 / DT 锚点已调整: 每个锚点和为 100 且分类落在自身区域
        const ANCHORS: [(f64, f64, f64, ZoneCode); 7] = [
            (99.0, 0.5, 0.5, ZoneCode::Pd),
            (87.0, 10.0, 3.0, ZoneCode::T1),
            (60.0, 38.0, 2.0, ZoneCode::T2),
            (25.0, 65.0, 10.0, ZoneCode::T3),
            (50.0, 15.0, 35.0, ZoneCode::D1),
            (25.0, 35.0, 40.0, ZoneCode::D2),
            (40.0, 45.0, 15.0, ZoneCode::Dt),
        ];

        ANCHORS
            .iter()
            .map(|&(ch4, c2h4, c2h2, zone)| {
                let composition = GasComposition::new(ch4, c2h4, c2h2);
                LabelAnchor {
                    zone,
                    composition,
                    point: self.projector.project_composition(&composition),
                }
            })
            .collect()
    }
}
