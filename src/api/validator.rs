// ==========================================
// DGA Duval 诊断引擎 - 输入校验
// ==========================================
// 职责: 外壳输入进入引擎前的基本校验
// 规则: 读数必须为有限值且不能为负
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::panel::GasPanel;

/// 校验单个读数
pub fn validate_reading(field: &str, value: f64) -> ApiResult<()> {
    if !value.is_finite() {
        return Err(ApiError::InvalidReading {
            field: field.to_string(),
            value,
            reason: "不是有限数值".to_string(),
        });
    }
    if value < 0.0 {
        return Err(ApiError::InvalidReading {
            field: field.to_string(),
            value,
            reason: "不能为负".to_string(),
        });
    }
    Ok(())
}

/// 校验可选读数（缺失视为合法）
pub fn validate_optional_reading(field: &str, value: Option<f64>) -> ApiResult<()> {
    match value {
        Some(v) => validate_reading(field, v),
        None => Ok(()),
    }
}

/// 校验三元输入
pub fn validate_triplet(ch4: f64, c2h4: f64, c2h2: f64) -> ApiResult<()> {
    validate_reading("CH4", ch4)?;
    validate_reading("C2H4", c2h4)?;
    validate_reading("C2H2", c2h2)
}

/// 校验气体面板
pub fn validate_panel(panel: &GasPanel) -> ApiResult<()> {
    for (gas, value) in panel.iter() {
        validate_reading(gas.as_str(), value)?;
    }
    Ok(())
}
