// ==========================================
// DGA Duval 诊断引擎 - IEEE 筛查 API
// ==========================================
// 职责: 请求校验 → 三步筛查 → 报告
// ==========================================

use crate::api::error::ApiResult;
use crate::api::validator::{validate_optional_reading, validate_panel};
use crate::config::ConfigManager;
use crate::domain::diagnosis::{ReferenceRow, ScreeningReport};
use crate::domain::panel::GasPanel;
use crate::domain::types::{AgeBracket, PreservationRegime};
use crate::engine::IeeeScreeningEngine;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// 筛查请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningRequest {
    #[serde(default)]
    pub o2_ppm: Option<f64>,
    #[serde(default)]
    pub n2_ppm: Option<f64>,
    #[serde(default = "default_age")]
    pub age: AgeBracket,
    #[serde(default)]
    pub panel: GasPanel,
}

fn default_age() -> AgeBracket {
    AgeBracket::Unknown
}

// ==========================================
// ScreeningApi - IEEE 筛查 API
// ==========================================
#[derive(Debug, Clone)]
pub struct ScreeningApi {
    engine: IeeeScreeningEngine,
    locale: String,
}

impl Default for ScreeningApi {
    fn default() -> Self {
        Self::new(&ConfigManager::new())
    }
}

impl ScreeningApi {
    pub fn new(config: &ConfigManager) -> Self {
        Self {
            engine: config.screening_engine(),
            locale: config.config().locale.clone(),
        }
    }

    /// 执行筛查
    ///
    /// 中文以外的语言会替换条件标签与说明
    #[instrument(skip(self, request), fields(age = %request.age))]
    pub fn screen(&self, request: &ScreeningRequest) -> ApiResult<ScreeningReport> {
        validate_optional_reading("O2", request.o2_ppm)?;
        validate_optional_reading("N2", request.n2_ppm)?;
        validate_panel(&request.panel)?;

        let mut report = self
            .engine
            .evaluate(request.o2_ppm, request.n2_ppm, request.age, &request.panel);

        if !self.locale.starts_with("zh") {
            report.regime_label = report.regime.localized_label(&self.locale);
            report.age_label = report.age.localized_label(&self.locale);
            for row in report.rows.iter_mut() {
                row.gas_label = row.gas.localized_label(&self.locale);
            }
            if let Some(assessment) = report.assessment.as_mut() {
                assessment.label = assessment.condition.localized_label(&self.locale);
                assessment.rationale = assessment.condition.localized_rationale(&self.locale);
            }
        }

        match report.condition() {
            Some(condition) => info!(regime = %report.regime, %condition, "IEEE 筛查完成"),
            None => warn!(regime = %report.regime, "O2/N2 比值无定义,未给出筛查条件"),
        }
        Ok(report)
    }

    /// 参考表 (P90/P95 按年龄段),气体名称按配置语言给出
    pub fn reference_tables(&self, regime: PreservationRegime) -> Vec<ReferenceRow> {
        let mut rows = self.engine.reference_table(regime);
        for row in rows.iter_mut() {
            row.gas_label = row.gas.localized_label(&self.locale);
        }
        rows
    }
}
