// ==========================================
// DGA Duval 诊断引擎 - 诊断与筛查输出模型
// ==========================================
// 职责: 外壳消费的输出结构 (只读数据)
// ==========================================

use crate::domain::composition::{GasComposition, PlanePoint};
use crate::domain::types::{AgeBracket, Gas, PreservationRegime, ScreeningCondition, SeverityGroup, ZoneCode};
use serde::{Deserialize, Serialize};

// ==========================================
// FaultDescription - 故障解释
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultDescription {
    pub name: String,           // 故障名称
    pub cause: String,          // 可能原因
    pub recommendation: String, // 处理建议
}

// ==========================================
// DuvalDiagnosis - Duval 三角形诊断结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuvalDiagnosis {
    pub composition: GasComposition, // 参与分类的百分比
    pub zone: ZoneCode,              // 区域代码
    pub point: PlanePoint,           // 平面投影点
    pub fault: FaultDescription,     // 故障解释
    pub severity_group: SeverityGroup,
    pub rule: String, // 命中规则 (可解释性)
}

// ==========================================
// GasComparisonRow - 单气体阈值对比
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasComparisonRow {
    pub gas: Gas,
    pub gas_label: String, // 展示名称
    pub value: f64,
    pub p90: f64,
    pub p95: f64,
    pub exceeds_p90: bool,
    pub exceeds_p95: bool,
}

// ==========================================
// ConditionAssessment - 步骤 3 结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionAssessment {
    pub condition: ScreeningCondition,
    pub label: String,     // 条件标签
    pub rationale: String, // 条件说明与建议
}

// ==========================================
// ScreeningReport - IEEE 筛查报告
// ==========================================
// regime = Unknown 时 assessment 为空,外壳需提示补充 N2
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub regime: PreservationRegime,
    pub regime_label: String,
    pub ratio: Option<f64>, // O2/N2
    pub age: AgeBracket,
    pub age_label: String,
    pub assessment: Option<ConditionAssessment>,
    pub rows: Vec<GasComparisonRow>,
}

impl ScreeningReport {
    /// 条件（比值无定义时为 None）
    pub fn condition(&self) -> Option<ScreeningCondition> {
        self.assessment.as_ref().map(|a| a.condition)
    }
}

// ==========================================
// ReferenceRow - 参考表行 (单气体, 各年龄区间)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    pub gas: Gas,
    pub gas_label: String,
    pub p90: Vec<(AgeBracket, f64)>,
    pub p95: Vec<(AgeBracket, f64)>,
}
