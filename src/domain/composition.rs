// ==========================================
// DGA Duval 诊断引擎 - 气体组成领域模型
// ==========================================
// 职责: Duval 三角形 1 的三元组成 + 平面坐标
// 红线: 和为 100 是"检查"而不是"强制",由分类器返回哨兵值
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// GasComposition - 三元气体组成 (%)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasComposition {
    pub ch4: f64,  // 甲烷 %
    pub c2h4: f64, // 乙烯 %
    pub c2h2: f64, // 乙炔 %
}

impl GasComposition {
    /// 构造函数（不做校验）
    pub fn new(ch4: f64, c2h4: f64, c2h2: f64) -> Self {
        Self { ch4, c2h4, c2h2 }
    }

    /// 三个分量之和
    pub fn sum(&self) -> f64 {
        self.ch4 + self.c2h4 + self.c2h2
    }

    /// 三个分量是否全部为 0
    pub fn is_zero(&self) -> bool {
        self.ch4 == 0.0 && self.c2h4 == 0.0 && self.c2h2 == 0.0
    }

    /// 和与 100 的偏差是否超出容差
    pub fn deviates_from_full(&self, tolerance: f64) -> bool {
        (self.sum() - 100.0).abs() > tolerance
    }

    /// 三个分量是否都非负（是否落在三角形内部或边上）
    pub fn is_inside(&self) -> bool {
        self.ch4 >= 0.0 && self.c2h4 >= 0.0 && self.c2h2 >= 0.0
    }

    /// 四舍五入到一位小数（用于历史记录）
    pub fn rounded(&self) -> Self {
        let round1 = |v: f64| (v * 10.0).round() / 10.0;
        Self {
            ch4: round1(self.ch4),
            c2h4: round1(self.c2h4),
            c2h2: round1(self.c2h2),
        }
    }
}

// ==========================================
// PlanePoint - 三角形平面坐标
// ==========================================
// 派生值: 由 TernaryProjector 计算,不独立修改
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
