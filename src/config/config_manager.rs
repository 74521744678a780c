// ==========================================
// DGA Duval 诊断引擎 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写、校验
// 来源优先级: 环境变量 > 配置文件 (JSON) > 默认值
// ==========================================

use crate::config::dga_config::DgaConfig;
use crate::config::error::{ConfigError, ConfigResult};
use crate::engine::ternary::MAX_ISOLINE_SAMPLES;
use crate::engine::zone_geometry::MAX_RESOLUTION;
use crate::engine::{DuvalClassifier, IeeeScreeningEngine, TernaryProjector, ZoneGeometry};
use crate::render::TriangleRenderer;
use std::path::Path;
use tracing::{info, warn};

/// 配置键（环境变量）
pub mod config_keys {
    pub const RASTER_RESOLUTION: &str = "DGA_DUVAL_RASTER_RESOLUTION";
    pub const LOCALE: &str = "DGA_DUVAL_LOCALE";
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: DgaConfig,
}

impl ConfigManager {
    /// 使用默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已有配置创建（会校验）
    pub fn from_config(config: DgaConfig) -> ConfigResult<Self> {
        validate(&config)?;
        Ok(Self { config })
    }

    /// 从 JSON 字符串加载
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: DgaConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    /// 从 JSON 文件加载
    ///
    /// # 参数
    /// - path: 配置文件路径
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadError {
            path: path.display().to_string(),
            source,
        })?;
        let manager = Self::from_json(&raw)?;
        info!(path = %path.display(), "配置文件加载完成");
        Ok(manager)
    }

    /// 应用环境变量覆写
    ///
    /// 无法解析的值记录警告并忽略
    pub fn with_env_overrides(mut self) -> ConfigResult<Self> {
        if let Ok(raw) = std::env::var(config_keys::RASTER_RESOLUTION) {
            match raw.trim().parse::<usize>() {
                Ok(v) => self.config.raster_resolution = v,
                Err(e) => warn!(key = config_keys::RASTER_RESOLUTION, value = %raw, error = %e, "环境变量解析失败,已忽略"),
            }
        }
        if let Ok(raw) = std::env::var(config_keys::LOCALE) {
            let raw = raw.trim();
            if !raw.is_empty() {
                self.config.locale = raw.to_string();
            }
        }
        validate(&self.config)?;
        Ok(self)
    }

    /// 当前配置
    pub fn config(&self) -> &DgaConfig {
        &self.config
    }

    // ==========================================
    // 引擎工厂
    // ==========================================

    pub fn classifier(&self) -> DuvalClassifier {
        DuvalClassifier::with_tolerance(self.config.sum_tolerance)
    }

    pub fn projector(&self) -> TernaryProjector {
        TernaryProjector::with_isoline_samples(self.config.isoline_samples)
    }

    pub fn screening_engine(&self) -> IeeeScreeningEngine {
        IeeeScreeningEngine::with_sealed_ratio_limit(self.config.sealed_ratio_limit)
    }

    pub fn renderer(&self) -> TriangleRenderer {
        TriangleRenderer::new()
            .with_geometry(ZoneGeometry::with_projector(self.projector()))
            .with_resolution(self.config.raster_resolution)
    }
}

/// 配置校验
fn validate(config: &DgaConfig) -> ConfigResult<()> {
    let invalid = |key: &str, message: &str| ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    };

    if !(config.sum_tolerance > 0.0) {
        return Err(invalid("sum_tolerance", "必须大于 0"));
    }
    if !(config.slider_renormalize_tolerance >= 0.0) {
        return Err(invalid("slider_renormalize_tolerance", "不能为负"));
    }
    if !(2..=MAX_ISOLINE_SAMPLES).contains(&config.isoline_samples) {
        return Err(invalid(
            "isoline_samples",
            &format!("取值范围 2..={}", MAX_ISOLINE_SAMPLES),
        ));
    }
    if !(2..=MAX_RESOLUTION).contains(&config.raster_resolution) {
        return Err(invalid(
            "raster_resolution",
            &format!("取值范围 2..={}", MAX_RESOLUTION),
        ));
    }
    if !(config.sealed_ratio_limit > 0.0) {
        return Err(invalid("sealed_ratio_limit", "必须大于 0"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let manager = ConfigManager::new();
        assert_eq!(manager.config().sum_tolerance, 0.01);
        assert_eq!(manager.config().raster_resolution, 120);
        assert_eq!(manager.config().locale, "zh-CN");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let manager = ConfigManager::from_json(r#"{"raster_resolution": 60}"#).unwrap();
        assert_eq!(manager.config().raster_resolution, 60);
        assert_eq!(manager.config().isoline_samples, 50);
        assert_eq!(manager.config().sealed_ratio_limit, 0.2);
    }

    #[test]
    fn test_invalid_value_rejected() {
        let err = ConfigManager::from_json(r#"{"sum_tolerance": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "sum_tolerance"));
    }

    #[test]
    fn test_oversized_raster_resolution_rejected() {
        let err = ConfigManager::from_json(r#"{"raster_resolution": 5000000000}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "raster_resolution"));

        let err = ConfigManager::from_json(r#"{"raster_resolution": 2001}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "raster_resolution"));

        let manager = ConfigManager::from_json(r#"{"raster_resolution": 2000}"#).unwrap();
        assert_eq!(manager.config().raster_resolution, MAX_RESOLUTION);
    }

    #[test]
    fn test_oversized_isoline_samples_rejected() {
        let err = ConfigManager::from_json(r#"{"isoline_samples": 1000000}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "isoline_samples"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ConfigManager::from_json("{not json").unwrap_err(),
            ConfigError::ParseError(_)
        ));
    }

    #[test]
    fn test_engine_factories_use_config() {
        let manager = ConfigManager::from_json(r#"{"sum_tolerance": 1.0}"#).unwrap();
        assert_eq!(manager.classifier().sum_tolerance(), 1.0);
    }
}
