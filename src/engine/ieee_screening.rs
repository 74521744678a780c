// ==========================================
// DGA Duval 诊断引擎 - IEEE C57.104-2019 筛查引擎
// ==========================================
// 依据: IEEE Std C57.104-2019 步骤 1/2/3
// 红线: 条件是"等级制" (NORMAL < CAUTION < ALERT),取最严重者
// 红线: 缺失阈值不能触发任何条件 (缺少限值 ≠ 超限)
// ==========================================
// 职责: 保护方式判定 → 阈值选择 → 条件计算
// 输入: O2/N2 + 年龄区间 + 7 种气体读数
// 输出: ScreeningReport
// ==========================================

use crate::domain::diagnosis::{ConditionAssessment, GasComparisonRow, ReferenceRow, ScreeningReport};
use crate::domain::panel::{GasPanel, ThresholdRow};
use crate::domain::types::{AgeBracket, Gas, PreservationRegime, ScreeningCondition};
use crate::engine::ieee_tables::{P90_TABLE, P95_TABLE};
use tracing::{debug, instrument};

/// 密封式判定上限 (O2/N2 ≤ 0.2)
pub const DEFAULT_SEALED_RATIO_LIMIT: f64 = 0.2;

// ==========================================
// IeeeScreeningEngine - IEEE 筛查引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct IeeeScreeningEngine {
    sealed_ratio_limit: f64,
}

impl Default for IeeeScreeningEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IeeeScreeningEngine {
    /// 构造函数（密封上限 0.2）
    pub fn new() -> Self {
        Self {
            sealed_ratio_limit: DEFAULT_SEALED_RATIO_LIMIT,
        }
    }

    /// 指定密封式判定上限
    pub fn with_sealed_ratio_limit(limit: f64) -> Self {
        Self {
            sealed_ratio_limit: limit,
        }
    }

    // ==========================================
    // 步骤 1: 保护方式
    // ==========================================

    /// 由 O2/N2 比值判定保护方式
    ///
    /// 规则:
    /// - N2 缺失或为 0 → UNKNOWN (比值无定义)
    /// - O2 缺失按 0 处理
    /// - ratio ≤ 0.2 → SEALED
    /// - ratio > 0.2 → FREE_BREATHING
    ///
    /// # 返回
    /// (保护方式, 比值), 比值无定义时为 None
    pub fn classify_regime(
        &self,
        o2_ppm: Option<f64>,
        n2_ppm: Option<f64>,
    ) -> (PreservationRegime, Option<f64>) {
        let n2 = match n2_ppm {
            Some(n2) if n2 != 0.0 => n2,
            _ => return (PreservationRegime::Unknown, None),
        };

        let ratio = o2_ppm.unwrap_or(0.0) / n2;
        let regime = if ratio <= self.sealed_ratio_limit {
            PreservationRegime::Sealed
        } else {
            PreservationRegime::FreeBreathing
        };

        (regime, Some(ratio))
    }

    // ==========================================
    // 步骤 2: 阈值选择
    // ==========================================

    /// 取 (P90 行, P95 行); 无此组合返回空行
    pub fn lookup_thresholds(
        &self,
        regime: PreservationRegime,
        age: AgeBracket,
    ) -> (ThresholdRow, ThresholdRow) {
        (P90_TABLE.row(regime, age), P95_TABLE.row(regime, age))
    }

    // ==========================================
    // 步骤 3: 条件计算
    // ==========================================

    /// 计算筛查条件
    ///
    /// 规则（全量扫描 7 种气体,取最严重等级）:
    /// 1) 任一气体 ≥ P95 → ALERT
    /// 2) 任一气体 ≥ P90 → CAUTION
    /// 3) 其它 → NORMAL
    pub fn compute_condition(
        &self,
        panel: &GasPanel,
        p90: &ThresholdRow,
        p95: &ThresholdRow,
    ) -> ConditionAssessment {
        let condition = Gas::ALL
            .iter()
            .map(|&gas| {
                let value = panel.get(gas);
                if p95.is_reached(gas, value) {
                    ScreeningCondition::Alert
                } else if p90.is_reached(gas, value) {
                    ScreeningCondition::Caution
                } else {
                    ScreeningCondition::Normal
                }
            })
            .max()
            .unwrap_or(ScreeningCondition::Normal);

        debug!(%condition, "筛查条件计算完成");
        assessment_for(condition)
    }

    /// 逐气体对比表（值 / P90 / P95 / 是否达到）
    pub fn comparison_rows(
        &self,
        panel: &GasPanel,
        p90: &ThresholdRow,
        p95: &ThresholdRow,
    ) -> Vec<GasComparisonRow> {
        Gas::ALL
            .iter()
            .map(|&gas| {
                let value = panel.get(gas);
                GasComparisonRow {
                    gas,
                    gas_label: gas.label().to_string(),
                    value,
                    p90: p90.get_or_zero(gas),
                    p95: p95.get_or_zero(gas),
                    exceeds_p90: p90.is_reached(gas, value),
                    exceeds_p95: p95.is_reached(gas, value),
                }
            })
            .collect()
    }

    // ==========================================
    // 完整流程
    // ==========================================

    /// 三步筛查
    ///
    /// 保护方式为 UNKNOWN 时不给出条件 (assessment = None),对比表为空阈值
    #[instrument(skip(self, panel))]
    pub fn evaluate(
        &self,
        o2_ppm: Option<f64>,
        n2_ppm: Option<f64>,
        age: AgeBracket,
        panel: &GasPanel,
    ) -> ScreeningReport {
        let (regime, ratio) = self.classify_regime(o2_ppm, n2_ppm);
        let (p90, p95) = self.lookup_thresholds(regime, age);

        let assessment = match regime {
            PreservationRegime::Unknown => None,
            _ => Some(self.compute_condition(panel, &p90, &p95)),
        };

        ScreeningReport {
            regime,
            regime_label: regime.label().to_string(),
            ratio,
            age,
            age_label: age.label().to_string(),
            assessment,
            rows: self.comparison_rows(panel, &p90, &p95),
        }
    }

    /// 参考表（某保护方式下各气体、各年龄区间的 P90/P95）
    pub fn reference_table(&self, regime: PreservationRegime) -> Vec<ReferenceRow> {
        Gas::ALL
            .iter()
            .map(|&gas| ReferenceRow {
                gas,
                gas_label: gas.label().to_string(),
                p90: AgeBracket::ALL
                    .iter()
                    .filter_map(|&age| P90_TABLE.row(regime, age).get(gas).map(|v| (age, v)))
                    .collect(),
                p95: AgeBracket::ALL
                    .iter()
                    .filter_map(|&age| P95_TABLE.row(regime, age).get(gas).map(|v| (age, v)))
                    .collect(),
            })
            .collect()
    }
}

/// 条件 → 标签与说明
pub fn assessment_for(condition: ScreeningCondition) -> ConditionAssessment {
    let (label, rationale) = match condition {
        ScreeningCondition::Normal => (
            "条件 1 (正常)",
            "所有气体均低于 P90 百分位。继续按正常周期取样。",
        ),
        ScreeningCondition::Caution => (
            "条件 2 (注意)",
            "至少一种气体达到 P90 但低于 P95。提高取样频率以监视趋势。",
        ),
        ScreeningCondition::Alert => (
            "条件 3 (高/告警)",
            "气体达到 P95 百分位。存在活跃或近期故障的可能性高,需要立即调查。",
        ),
    };

    ConditionAssessment {
        condition,
        label: label.to_string(),
        rationale: rationale.to_string(),
    }
}
