// ==========================================
// DGA Duval 诊断引擎 - Duval 诊断 API
// ==========================================
// 职责: 输入归一化 → 分类 → 投影 → 故障解释
// 输入: ppm 读数 / 百分比 / 滑块 (CH4%, C2H4%)
// 输出: DuvalDiagnosis
// ==========================================

use crate::api::error::ApiResult;
use crate::api::validator::{validate_reading, validate_triplet};
use crate::config::ConfigManager;
use crate::domain::composition::GasComposition;
use crate::domain::diagnosis::DuvalDiagnosis;
use crate::domain::history::HistoryRecord;
use crate::domain::types::SeverityGroup;
use crate::engine::{DuvalClassifier, FaultCatalog, TernaryProjector};
use crate::render::TriangleRenderer;
use crate::repository::SessionHistoryRepository;
use tracing::{instrument, warn};

// ==========================================
// DuvalApi - Duval 诊断 API
// ==========================================
#[derive(Debug, Clone)]
pub struct DuvalApi {
    classifier: DuvalClassifier,
    projector: TernaryProjector,
    catalog: FaultCatalog,
    renderer: TriangleRenderer,
    slider_tolerance: f64,
    locale: String,
}

impl Default for DuvalApi {
    fn default() -> Self {
        Self::new(&ConfigManager::new())
    }
}

impl DuvalApi {
    /// 按配置构造
    pub fn new(config: &ConfigManager) -> Self {
        Self {
            classifier: config.classifier(),
            projector: config.projector(),
            catalog: FaultCatalog::new(),
            renderer: config.renderer(),
            slider_tolerance: config.config().slider_renormalize_tolerance,
            locale: config.config().locale.clone(),
        }
    }

    // ==========================================
    // 输入归一化
    // ==========================================

    /// ppm 读数 → 百分比（总量为 0 时返回全 0）
    pub fn normalize_ppm(&self, ch4_ppm: f64, c2h4_ppm: f64, c2h2_ppm: f64) -> ApiResult<GasComposition> {
        validate_triplet(ch4_ppm, c2h4_ppm, c2h2_ppm)?;

        let total = ch4_ppm + c2h4_ppm + c2h2_ppm;
        if total <= 0.0 {
            return Ok(GasComposition::new(0.0, 0.0, 0.0));
        }
        Ok(GasComposition::new(
            ch4_ppm / total * 100.0,
            c2h4_ppm / total * 100.0,
            c2h2_ppm / total * 100.0,
        ))
    }

    /// 滑块输入 → 百分比
    ///
    /// 规则:
    /// 1) C2H2 = max(0, 100 - CH4 - C2H4)
    /// 2) 总和 > 0 且偏离 100 超过容差 (默认 1 个百分点) → 三者按比例重新归一化
    pub fn normalize_sliders(&self, ch4_pct: f64, c2h4_pct: f64) -> ApiResult<GasComposition> {
        validate_reading("CH4", ch4_pct)?;
        validate_reading("C2H4", c2h4_pct)?;

        let c2h2_pct = (100.0 - ch4_pct - c2h4_pct).max(0.0);
        let composition = GasComposition::new(ch4_pct, c2h4_pct, c2h2_pct);
        let total = composition.sum();

        if total > 0.0 && (total - 100.0).abs() > self.slider_tolerance {
            return Ok(GasComposition::new(
                ch4_pct / total * 100.0,
                c2h4_pct / total * 100.0,
                c2h2_pct / total * 100.0,
            ));
        }
        Ok(composition)
    }

    // ==========================================
    // 诊断
    // ==========================================

    /// 按百分比诊断
    #[instrument(skip(self))]
    pub fn diagnose_percentages(&self, ch4: f64, c2h4: f64, c2h2: f64) -> ApiResult<DuvalDiagnosis> {
        validate_triplet(ch4, c2h4, c2h2)?;
        Ok(self.diagnose(GasComposition::new(ch4, c2h4, c2h2)))
    }

    /// 按 ppm 读数诊断
    #[instrument(skip(self))]
    pub fn diagnose_ppm(&self, ch4_ppm: f64, c2h4_ppm: f64, c2h2_ppm: f64) -> ApiResult<DuvalDiagnosis> {
        let composition = self.normalize_ppm(ch4_ppm, c2h4_ppm, c2h2_ppm)?;
        Ok(self.diagnose(composition))
    }

    /// 按滑块输入诊断
    #[instrument(skip(self))]
    pub fn diagnose_sliders(&self, ch4_pct: f64, c2h4_pct: f64) -> ApiResult<DuvalDiagnosis> {
        let composition = self.normalize_sliders(ch4_pct, c2h4_pct)?;
        Ok(self.diagnose(composition))
    }

    /// 组成 → 诊断结果（不做输入校验）
    pub fn diagnose(&self, composition: GasComposition) -> DuvalDiagnosis {
        let (zone, rule) = self
            .classifier
            .explain(composition.ch4, composition.c2h4, composition.c2h2);

        if zone.is_sentinel() {
            warn!(%zone, sum = composition.sum(), "Duval 输入无效,返回哨兵结果");
        }

        DuvalDiagnosis {
            composition,
            zone,
            point: self.projector.project_composition(&composition),
            fault: self.catalog.describe_localized(zone, &self.locale),
            severity_group: SeverityGroup::from(zone),
            rule: rule.to_string(),
        }
    }

    /// 渲染三角形 SVG（总和为 0 时不绘制当前点）
    pub fn render_svg(&self, diagnosis: Option<&DuvalDiagnosis>) -> String {
        self.renderer.render_svg(diagnosis)
    }

    // ==========================================
    // 会话历史
    // ==========================================

    /// 将诊断结果写入会话历史
    ///
    /// 历史由外壳持有,此处仅作为显式协作者传入
    pub fn record(
        &self,
        history: &SessionHistoryRepository,
        transformer_id: &str,
        diagnosis: &DuvalDiagnosis,
    ) -> ApiResult<HistoryRecord> {
        let record = HistoryRecord::from_diagnosis(transformer_id, diagnosis);
        history.append(record.clone())?;
        Ok(record)
    }
}
