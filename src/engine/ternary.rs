// ==========================================
// DGA Duval 诊断引擎 - 三元坐标投影
// ==========================================
// 依据: Duval 三角形 1 顶点布局
//   CH4  = 100% → (0.5, 1.0)
//   C2H4 = 100% → (1.0, 0.0)
//   C2H2 = 100% → (0.0, 0.0)
// ==========================================
// 职责: 三元百分比 ↔ 平面坐标, 等值线采样
// 红线: 投影不做校验,和 ≠ 100 的点允许落在三角形外
// ==========================================

use crate::domain::composition::{GasComposition, PlanePoint};
use crate::domain::types::TernaryAxis;

/// 等值线默认采样点数
pub const DEFAULT_ISOLINE_SAMPLES: usize = 50;

/// 等值线采样点数上限
pub const MAX_ISOLINE_SAMPLES: usize = 10_000;

/// 闭区间 [start, end] 上的 n 个等距采样点
///
/// n = 1 时只返回 start; n = 0 时为空
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}

// ==========================================
// TernaryProjector - 三元坐标投影器
// ==========================================
#[derive(Debug, Clone)]
pub struct TernaryProjector {
    isoline_samples: usize,
}

impl Default for TernaryProjector {
    fn default() -> Self {
        Self::new()
    }
}

impl TernaryProjector {
    /// 创建投影器（等值线 50 个采样点）
    pub fn new() -> Self {
        Self {
            isoline_samples: DEFAULT_ISOLINE_SAMPLES,
        }
    }

    /// 指定等值线采样点数（限制在 [2, MAX_ISOLINE_SAMPLES]）
    pub fn with_isoline_samples(samples: usize) -> Self {
        Self {
            isoline_samples: samples.clamp(2, MAX_ISOLINE_SAMPLES),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 三元百分比 → 平面坐标
    ///
    /// x = c2h4/100 + ch4/200, y = ch4/100
    ///
    /// c2h2 不参与计算: 在和为 100 的约束下它由另两个分量决定
    pub fn project(&self, ch4: f64, c2h4: f64, _c2h2: f64) -> PlanePoint {
        PlanePoint {
            x: c2h4 / 100.0 + ch4 / 200.0,
            y: ch4 / 100.0,
        }
    }

    /// 投影一个组成
    pub fn project_composition(&self, composition: &GasComposition) -> PlanePoint {
        self.project(composition.ch4, composition.c2h4, composition.c2h2)
    }

    /// 批量投影
    ///
    /// 三个切片按位置对齐,长度不一致时按最短切片截断
    pub fn project_many(&self, ch4: &[f64], c2h4: &[f64], c2h2: &[f64]) -> Vec<PlanePoint> {
        ch4.iter()
            .zip(c2h4)
            .zip(c2h2)
            .map(|((a, b), c)| self.project(*a, *b, *c))
            .collect()
    }

    /// 平面坐标 → 三元百分比（逆变换）
    ///
    /// ch4 = 100y, c2h4 = 100(x - y/2), c2h2 = 100 - ch4 - c2h4
    pub fn inverse(&self, point: &PlanePoint) -> GasComposition {
        let ch4 = point.y * 100.0;
        let c2h4 = (point.x - point.y / 2.0) * 100.0;
        let c2h2 = 100.0 - ch4 - c2h4;
        GasComposition { ch4, c2h4, c2h2 }
    }

    // ==========================================
    // 等值线
    // ==========================================

    /// 固定一个分量,在剩余预算 (100 - value) 上线性扫描另两个分量
    ///
    /// 扫描方向:
    /// - CH4 固定: C2H4 从 0 到剩余, C2H2 = 剩余 - C2H4
    /// - C2H4 固定: CH4 从 0 到剩余, C2H2 = 剩余 - CH4
    /// - C2H2 固定: CH4 从 0 到剩余, C2H4 = 剩余 - CH4
    ///
    /// value ≥ 100 时没有剩余预算,返回空序列
    pub fn project_isoline(&self, axis: TernaryAxis, value: f64) -> Vec<PlanePoint> {
        self.isoline_compositions(axis, value)
            .iter()
            .map(|c| self.project_composition(c))
            .collect()
    }

    /// 等值线上的三元组成（未投影）
    pub fn isoline_compositions(&self, axis: TernaryAxis, value: f64) -> Vec<GasComposition> {
        let rest = 100.0 - value;
        if rest <= 0.0 {
            return Vec::new();
        }

        linspace(0.0, rest, self.isoline_samples)
            .map(|sweep| {
                let other = rest - sweep;
                match axis {
                    TernaryAxis::Ch4 => GasComposition::new(value, sweep, other),
                    TernaryAxis::C2h4 => GasComposition::new(sweep, value, other),
                    TernaryAxis::C2h2 => GasComposition::new(sweep, other, value),
                }
            })
            .collect()
    }
}
