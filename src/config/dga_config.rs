use crate::engine::duval::DEFAULT_SUM_TOLERANCE;
use crate::engine::ieee_screening::DEFAULT_SEALED_RATIO_LIMIT;
use crate::engine::ternary::DEFAULT_ISOLINE_SAMPLES;
use crate::engine::zone_geometry::DEFAULT_RESOLUTION;
use serde::{Deserialize, Serialize};

/// 诊断参数（配置文件对象）
///
/// 所有字段均可省略,缺省取引擎默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DgaConfig {
    /// 分类器和校验容差（|和 - 100| > 容差 → OUT_OF_RANGE）
    #[serde(default = "default_sum_tolerance")]
    pub sum_tolerance: f64,

    /// 滑块输入的重新归一化容差（百分点）
    #[serde(default = "default_slider_tolerance")]
    pub slider_renormalize_tolerance: f64,

    /// 等值线采样点数
    #[serde(default = "default_isoline_samples")]
    pub isoline_samples: usize,

    /// 渲染栅格分辨率
    #[serde(default = "default_raster_resolution")]
    pub raster_resolution: usize,

    /// 密封式判定上限 (O2/N2)
    #[serde(default = "default_sealed_ratio_limit")]
    pub sealed_ratio_limit: f64,

    /// 界面语言（zh-CN / en）
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_sum_tolerance() -> f64 {
    DEFAULT_SUM_TOLERANCE
}

fn default_slider_tolerance() -> f64 {
    1.0
}

fn default_isoline_samples() -> usize {
    DEFAULT_ISOLINE_SAMPLES
}

fn default_raster_resolution() -> usize {
    DEFAULT_RESOLUTION
}

fn default_sealed_ratio_limit() -> f64 {
    DEFAULT_SEALED_RATIO_LIMIT
}

fn default_locale() -> String {
    "zh-CN".to_string()
}

impl Default for DgaConfig {
    fn default() -> Self {
        Self {
            sum_tolerance: default_sum_tolerance(),
            slider_renormalize_tolerance: default_slider_tolerance(),
            isoline_samples: default_isoline_samples(),
            raster_resolution: default_raster_resolution(),
            sealed_ratio_limit: default_sealed_ratio_limit(),
            locale: default_locale(),
        }
    }
}
