// ==========================================
// DGA Duval 诊断引擎 - 会话历史记录
// ==========================================
// 用途: 外壳持有的只追加日志,核心引擎不读写
// ==========================================

use crate::domain::diagnosis::DuvalDiagnosis;
use crate::domain::types::ZoneCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// HistoryRecord - 历史记录行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub record_id: String,      // 记录ID (UUID v4)
    pub transformer_id: String, // 变压器标识
    pub ch4_pct: f64,           // 一位小数
    pub c2h4_pct: f64,
    pub c2h2_pct: f64,
    pub zone: ZoneCode,
    pub fault_name: String,
    pub recorded_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// 从诊断结果生成记录（百分比四舍五入到一位小数）
    pub fn from_diagnosis(transformer_id: &str, diagnosis: &DuvalDiagnosis) -> Self {
        let rounded = diagnosis.composition.rounded();
        Self {
            record_id: Uuid::new_v4().to_string(),
            transformer_id: transformer_id.to_string(),
            ch4_pct: rounded.ch4,
            c2h4_pct: rounded.c2h4,
            c2h2_pct: rounded.c2h2,
            zone: diagnosis.zone,
            fault_name: diagnosis.fault.name.clone(),
            recorded_at: Utc::now(),
        }
    }
}
