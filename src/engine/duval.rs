// ==========================================
// DGA Duval 诊断引擎 - Duval 三角形 1 分类器
// ==========================================
// 依据: Duval 三角形 1 区域边界表 (Figure 3 / Table 6)
// 红线: 规则之间存在重叠,按顺序求值,首个命中即返回
// 红线: 兜底默认为 DT,边界缺口保持原样,不做"修正"
// ==========================================
// 职责: 百分比组成 → 区域代码
// 输入: (CH4%, C2H4%, C2H2%)
// 输出: ZoneCode (+ 命中规则说明)
// ==========================================

use crate::domain::composition::GasComposition;
use crate::domain::types::ZoneCode;
use tracing::debug;

/// 和为 100 的默认容差
pub const DEFAULT_SUM_TOLERANCE: f64 = 0.01;

// ==========================================
// ZoneRule - 区域规则
// ==========================================
// 谓词参数顺序: (ch4, c2h4, c2h2)
#[derive(Debug, Clone, Copy)]
pub struct ZoneRule {
    pub zone: ZoneCode,
    pub reason: &'static str,
    predicate: fn(f64, f64, f64) -> bool,
}

impl ZoneRule {
    /// 规则是否命中
    pub fn matches(&self, ch4: f64, c2h4: f64, c2h2: f64) -> bool {
        (self.predicate)(ch4, c2h4, c2h2)
    }
}

fn rule_pd(ch4: f64, _c2h4: f64, _c2h2: f64) -> bool {
    ch4 >= 98.0
}

fn rule_t1(_ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    c2h2 < 4.0 && c2h4 < 20.0
}

fn rule_t2(_ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    c2h2 < 4.0 && (20.0..50.0).contains(&c2h4)
}

fn rule_t3(_ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    c2h2 < 15.0 && c2h4 >= 50.0
}

fn rule_d1(_ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    c2h2 >= 13.0 && c2h4 < 23.0
}

fn rule_d2_high_c2h2(_ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    c2h4 >= 23.0 && c2h2 >= 29.0
}

fn rule_d2_band(_ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    (23.0..40.0).contains(&c2h4) && (13.0..29.0).contains(&c2h2)
}

fn rule_dt_low_c2h2(_ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    (4.0..13.0).contains(&c2h2) && c2h4 < 50.0
}

fn rule_dt_band(_ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    (40.0..50.0).contains(&c2h4) && (13.0..29.0).contains(&c2h2)
}

fn rule_dt_high_c2h4(_ch4: f64, c2h4: f64, c2h2: f64) -> bool {
    c2h4 >= 50.0 && (15.0..29.0).contains(&c2h2)
}

/// 区域规则表（优先级递减,唯一事实来源）
///
/// 点分类器与栅格化共用此表
pub static ZONE_RULES: [ZoneRule; 10] = [
    ZoneRule { zone: ZoneCode::Pd, reason: "RULE_PD: ch4>=98", predicate: rule_pd },
    ZoneRule { zone: ZoneCode::T1, reason: "RULE_T1: c2h2<4, c2h4<20", predicate: rule_t1 },
    ZoneRule { zone: ZoneCode::T2, reason: "RULE_T2: c2h2<4, 20<=c2h4<50", predicate: rule_t2 },
    ZoneRule { zone: ZoneCode::T3, reason: "RULE_T3: c2h2<15, c2h4>=50", predicate: rule_t3 },
    ZoneRule { zone: ZoneCode::D1, reason: "RULE_D1: c2h2>=13, c2h4<23", predicate: rule_d1 },
    ZoneRule { zone: ZoneCode::D2, reason: "RULE_D2: c2h4>=23, c2h2>=29", predicate: rule_d2_high_c2h2 },
    ZoneRule { zone: ZoneCode::D2, reason: "RULE_D2: 23<=c2h4<40, 13<=c2h2<29", predicate: rule_d2_band },
    ZoneRule { zone: ZoneCode::Dt, reason: "RULE_DT: 4<=c2h2<13, c2h4<50", predicate: rule_dt_low_c2h2 },
    ZoneRule { zone: ZoneCode::Dt, reason: "RULE_DT: 40<=c2h4<50, 13<=c2h2<29", predicate: rule_dt_band },
    ZoneRule { zone: ZoneCode::Dt, reason: "RULE_DT: c2h4>=50, 15<=c2h2<29", predicate: rule_dt_high_c2h4 },
];

/// 兜底规则说明
pub const DEFAULT_RULE_REASON: &str = "RULE_DT_DEFAULT: no explicit rule matched";

/// 对已通过和校验的点应用区域规则表
///
/// 返回: (区域代码, 命中规则说明)
pub fn zone_for(ch4: f64, c2h4: f64, c2h2: f64) -> (ZoneCode, &'static str) {
    ZONE_RULES
        .iter()
        .find(|rule| rule.matches(ch4, c2h4, c2h2))
        .map(|rule| (rule.zone, rule.reason))
        .unwrap_or((ZoneCode::Dt, DEFAULT_RULE_REASON))
}

// ==========================================
// DuvalClassifier - Duval 三角形 1 分类器
// ==========================================
#[derive(Debug, Clone)]
pub struct DuvalClassifier {
    sum_tolerance: f64,
}

impl Default for DuvalClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DuvalClassifier {
    /// 构造函数（和容差 0.01）
    pub fn new() -> Self {
        Self {
            sum_tolerance: DEFAULT_SUM_TOLERANCE,
        }
    }

    /// 指定和容差
    pub fn with_tolerance(sum_tolerance: f64) -> Self {
        Self { sum_tolerance }
    }

    pub fn sum_tolerance(&self) -> f64 {
        self.sum_tolerance
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 分类
    ///
    /// 规则（顺序执行，命中即返回）:
    /// 1) 三个分量均为 0 → N/A
    /// 2) |和 - 100| > 容差 → OUT_OF_RANGE
    /// 3..13) 区域规则表 ZONE_RULES,兜底 DT
    pub fn classify(&self, ch4: f64, c2h4: f64, c2h2: f64) -> ZoneCode {
        self.explain(ch4, c2h4, c2h2).0
    }

    /// 分类一个组成
    pub fn classify_composition(&self, composition: &GasComposition) -> ZoneCode {
        self.classify(composition.ch4, composition.c2h4, composition.c2h2)
    }

    /// 分类并返回命中规则说明
    pub fn explain(&self, ch4: f64, c2h4: f64, c2h2: f64) -> (ZoneCode, &'static str) {
        let composition = GasComposition::new(ch4, c2h4, c2h2);

        if composition.is_zero() {
            return (ZoneCode::NotApplicable, "NO_DATA: all components are zero");
        }

        if composition.deviates_from_full(self.sum_tolerance) {
            debug!(
                ch4,
                c2h4,
                c2h2,
                sum = composition.sum(),
                "组成之和偏离 100%"
            );
            return (ZoneCode::OutOfRange, "OUT_OF_RANGE: sum deviates from 100%");
        }

        zone_for(ch4, c2h4, c2h2)
    }
}
