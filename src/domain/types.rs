// ==========================================
// DGA Duval 诊断引擎 - 领域类型定义
// ==========================================
// 依据: Duval 三角形 1 (IEC 60599 / IEEE C57.104)
// 依据: IEEE Std C57.104-2019 表 1/表 2 (P90/P95)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 故障区域代码 (Zone Code)
// ==========================================
// 红线: NotApplicable / OutOfRange 是哨兵值,不是故障诊断
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneCode {
    #[serde(rename = "PD")]
    Pd, // 局部放电
    T1, // 低温过热 < 300°C
    T2, // 中温过热 300-700°C
    T3, // 高温过热 > 700°C
    D1, // 低能放电
    D2, // 高能放电
    #[serde(rename = "DT")]
    Dt, // 热电混合
    #[serde(rename = "N/A")]
    NotApplicable, // 无数据 (三个分量均为 0)
    #[serde(rename = "OUT_OF_RANGE")]
    OutOfRange, // 百分比之和 ≠ 100%
}

impl ZoneCode {
    /// 7 个真实故障区域（不含哨兵值），顺序即渲染顺序
    pub const FAULT_ZONES: [ZoneCode; 7] = [
        ZoneCode::Pd,
        ZoneCode::T1,
        ZoneCode::T2,
        ZoneCode::T3,
        ZoneCode::D1,
        ZoneCode::D2,
        ZoneCode::Dt,
    ];

    /// 是否为哨兵值（无效输入）
    pub fn is_sentinel(&self) -> bool {
        matches!(self, ZoneCode::NotApplicable | ZoneCode::OutOfRange)
    }

    /// 转换为展示/导出使用的代码字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneCode::Pd => "PD",
            ZoneCode::T1 => "T1",
            ZoneCode::T2 => "T2",
            ZoneCode::T3 => "T3",
            ZoneCode::D1 => "D1",
            ZoneCode::D2 => "D2",
            ZoneCode::Dt => "DT",
            ZoneCode::NotApplicable => "N/A",
            ZoneCode::OutOfRange => "OUT_OF_RANGE",
        }
    }

    /// 从字符串解析区域代码（大小写不敏感）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "PD" => Some(ZoneCode::Pd),
            "T1" => Some(ZoneCode::T1),
            "T2" => Some(ZoneCode::T2),
            "T3" => Some(ZoneCode::T3),
            "D1" => Some(ZoneCode::D1),
            "D2" => Some(ZoneCode::D2),
            "DT" => Some(ZoneCode::Dt),
            "N/A" => Some(ZoneCode::NotApplicable),
            "OUT_OF_RANGE" => Some(ZoneCode::OutOfRange),
            _ => None,
        }
    }
}

impl fmt::Display for ZoneCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 故障严重类别 (Severity Group)
// ==========================================
// 用途: 外壳按类别着色 (PD / 过热 / 放电 / 未分类)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityGroup {
    PartialDischarge, // 局部放电
    Thermal,          // 过热 (T1/T2/T3)
    Electrical,       // 放电 (D1/D2/DT)
    Unclassified,     // 哨兵值
}

impl From<ZoneCode> for SeverityGroup {
    fn from(zone: ZoneCode) -> Self {
        match zone {
            ZoneCode::Pd => SeverityGroup::PartialDischarge,
            ZoneCode::T1 | ZoneCode::T2 | ZoneCode::T3 => SeverityGroup::Thermal,
            ZoneCode::D1 | ZoneCode::D2 | ZoneCode::Dt => SeverityGroup::Electrical,
            ZoneCode::NotApplicable | ZoneCode::OutOfRange => SeverityGroup::Unclassified,
        }
    }
}

impl fmt::Display for SeverityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityGroup::PartialDischarge => write!(f, "PARTIAL_DISCHARGE"),
            SeverityGroup::Thermal => write!(f, "THERMAL"),
            SeverityGroup::Electrical => write!(f, "ELECTRICAL"),
            SeverityGroup::Unclassified => write!(f, "UNCLASSIFIED"),
        }
    }
}

// ==========================================
// 三元坐标轴 (Ternary Axis)
// ==========================================
// Duval 三角形 1 的三个关键气体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TernaryAxis {
    Ch4,  // 甲烷 - 顶点 (0.5, 1)
    C2h4, // 乙烯 - 右下顶点 (1, 0)
    C2h2, // 乙炔 - 左下顶点 (0, 0)
}

impl fmt::Display for TernaryAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TernaryAxis::Ch4 => write!(f, "CH4"),
            TernaryAxis::C2h4 => write!(f, "C2H4"),
            TernaryAxis::C2h2 => write!(f, "C2H2"),
        }
    }
}

// ==========================================
// 油保护方式 (Preservation Regime)
// ==========================================
// 依据: IEEE C57.104-2019 步骤 1, O2/N2 比值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreservationRegime {
    Sealed,        // 密封式 (O2/N2 ≤ 0.2)
    FreeBreathing, // 自由呼吸式 (O2/N2 > 0.2)
    Unknown,       // N2 缺失或为 0,比值无定义
}

impl PreservationRegime {
    /// 转换为展示标签
    pub fn label(&self) -> &'static str {
        match self {
            PreservationRegime::Sealed => "密封式 (O₂/N₂ ≤ 0.2)",
            PreservationRegime::FreeBreathing => "自由呼吸式 (O₂/N₂ > 0.2)",
            PreservationRegime::Unknown => "未知 (需要 N₂ > 0)",
        }
    }

    /// i18n 键
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PreservationRegime::Sealed => "regime.sealed",
            PreservationRegime::FreeBreathing => "regime.free_breathing",
            PreservationRegime::Unknown => "regime.unknown",
        }
    }

    /// 指定语言的展示标签,缺失翻译时回落到中文
    pub fn localized_label(&self, locale: &str) -> String {
        crate::i18n::label_in(locale, self.i18n_key(), self.label())
    }
}

impl fmt::Display for PreservationRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreservationRegime::Sealed => write!(f, "SEALED"),
            PreservationRegime::FreeBreathing => write!(f, "FREE_BREATHING"),
            PreservationRegime::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ==========================================
// 设备年龄区间 (Age Bracket)
// ==========================================
// 依据: IEEE C57.104-2019 表 1/表 2 的列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "UNKNOWN")]
    Unknown, // 年龄未知
    #[serde(rename = "1_9")]
    Years1To9, // 1-9 年
    #[serde(rename = "10_30")]
    Years10To30, // 10-30 年
    #[serde(rename = "OVER_30")]
    Over30, // > 30 年
}

impl AgeBracket {
    /// 全部年龄区间（表格列顺序）
    pub const ALL: [AgeBracket; 4] = [
        AgeBracket::Unknown,
        AgeBracket::Years1To9,
        AgeBracket::Years10To30,
        AgeBracket::Over30,
    ];

    /// 从字符串解析年龄区间
    ///
    /// 兼容简写: "desc"/"unknown", "1_9", "10_30", "30"/"over_30"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "unknown" | "desc" => Some(AgeBracket::Unknown),
            "1_9" | "1-9" => Some(AgeBracket::Years1To9),
            "10_30" | "10-30" => Some(AgeBracket::Years10To30),
            "over_30" | "30" | ">30" => Some(AgeBracket::Over30),
            _ => None,
        }
    }

    /// 转换为展示标签
    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::Unknown => "未知",
            AgeBracket::Years1To9 => "1–9 年",
            AgeBracket::Years10To30 => "10–30 年",
            AgeBracket::Over30 => ">30 年",
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            AgeBracket::Unknown => "age.unknown",
            AgeBracket::Years1To9 => "age.1_9",
            AgeBracket::Years10To30 => "age.10_30",
            AgeBracket::Over30 => "age.over_30",
        }
    }

    pub fn localized_label(&self, locale: &str) -> String {
        crate::i18n::label_in(locale, self.i18n_key(), self.label())
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeBracket::Unknown => write!(f, "UNKNOWN"),
            AgeBracket::Years1To9 => write!(f, "1_9"),
            AgeBracket::Years10To30 => write!(f, "10_30"),
            AgeBracket::Over30 => write!(f, "OVER_30"),
        }
    }
}

// ==========================================
// 筛查条件 (Screening Condition)
// ==========================================
// 依据: IEEE C57.104-2019 步骤 3
// 顺序: Normal < Caution < Alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreeningCondition {
    Normal,  // 条件 1
    Caution, // 条件 2
    Alert,   // 条件 3
}

impl ScreeningCondition {
    /// 条件序号 (1/2/3)
    pub fn ordinal(&self) -> u8 {
        match self {
            ScreeningCondition::Normal => 1,
            ScreeningCondition::Caution => 2,
            ScreeningCondition::Alert => 3,
        }
    }

    /// i18n 键前缀
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ScreeningCondition::Normal => "condition.normal",
            ScreeningCondition::Caution => "condition.caution",
            ScreeningCondition::Alert => "condition.alert",
        }
    }

    /// 指定语言的条件标签,缺失翻译时返回键本身
    pub fn localized_label(&self, locale: &str) -> String {
        crate::i18n::t_in(locale, &format!("{}.label", self.i18n_key()))
    }

    /// 指定语言的条件说明
    pub fn localized_rationale(&self, locale: &str) -> String {
        crate::i18n::t_in(locale, &format!("{}.rationale", self.i18n_key()))
    }
}

impl fmt::Display for ScreeningCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreeningCondition::Normal => write!(f, "NORMAL"),
            ScreeningCondition::Caution => write!(f, "CAUTION"),
            ScreeningCondition::Alert => write!(f, "ALERT"),
        }
    }
}

// ==========================================
// IEEE 筛查气体 (Gas)
// ==========================================
// 顺序与 IEEE 表格行一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gas {
    H2,
    #[serde(rename = "CH4")]
    Ch4,
    #[serde(rename = "C2H6")]
    C2h6,
    #[serde(rename = "C2H4")]
    C2h4,
    #[serde(rename = "C2H2")]
    C2h2,
    #[serde(rename = "CO")]
    Co,
    #[serde(rename = "CO2")]
    Co2,
}

impl Gas {
    /// 全部 7 种筛查气体（表格行顺序）
    pub const ALL: [Gas; 7] = [
        Gas::H2,
        Gas::Ch4,
        Gas::C2h6,
        Gas::C2h4,
        Gas::C2h2,
        Gas::Co,
        Gas::Co2,
    ];

    /// 表格行下标
    pub fn index(&self) -> usize {
        match self {
            Gas::H2 => 0,
            Gas::Ch4 => 1,
            Gas::C2h6 => 2,
            Gas::C2h4 => 3,
            Gas::C2h2 => 4,
            Gas::Co => 5,
            Gas::Co2 => 6,
        }
    }

    /// 化学式
    pub fn as_str(&self) -> &'static str {
        match self {
            Gas::H2 => "H2",
            Gas::Ch4 => "CH4",
            Gas::C2h6 => "C2H6",
            Gas::C2h4 => "C2H4",
            Gas::C2h2 => "C2H2",
            Gas::Co => "CO",
            Gas::Co2 => "CO2",
        }
    }

    /// 展示名称
    pub fn label(&self) -> &'static str {
        match self {
            Gas::H2 => "氢气 (H₂)",
            Gas::Ch4 => "甲烷 (CH₄)",
            Gas::C2h6 => "乙烷 (C₂H₆)",
            Gas::C2h4 => "乙烯 (C₂H₄)",
            Gas::C2h2 => "乙炔 (C₂H₂)",
            Gas::Co => "一氧化碳 (CO)",
            Gas::Co2 => "二氧化碳 (CO₂)",
        }
    }

    /// i18n 键 (gas.<化学式>)
    pub fn i18n_key(&self) -> String {
        format!("gas.{}", self.as_str())
    }

    pub fn localized_label(&self, locale: &str) -> String {
        crate::i18n::label_in(locale, &self.i18n_key(), self.label())
    }

    /// 从化学式解析（大小写不敏感）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "H2" => Some(Gas::H2),
            "CH4" => Some(Gas::Ch4),
            "C2H6" => Some(Gas::C2h6),
            "C2H4" => Some(Gas::C2h4),
            "C2H2" => Some(Gas::C2h2),
            "CO" => Some(Gas::Co),
            "CO2" => Some(Gas::Co2),
            _ => None,
        }
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_code_round_trip_strings() {
        for zone in ZoneCode::FAULT_ZONES {
            assert_eq!(ZoneCode::from_str(zone.as_str()), Some(zone));
        }
        assert_eq!(ZoneCode::from_str("n/a"), Some(ZoneCode::NotApplicable));
        assert_eq!(ZoneCode::from_str("X9"), None);
    }

    #[test]
    fn test_zone_code_serde_names() {
        let json = serde_json::to_string(&ZoneCode::NotApplicable).unwrap();
        assert_eq!(json, "\"N/A\"");
        let zone: ZoneCode = serde_json::from_str("\"DT\"").unwrap();
        assert_eq!(zone, ZoneCode::Dt);
    }

    #[test]
    fn test_condition_ordering() {
        assert!(ScreeningCondition::Alert > ScreeningCondition::Caution);
        assert!(ScreeningCondition::Caution > ScreeningCondition::Normal);
        assert_eq!(ScreeningCondition::Alert.ordinal(), 3);
    }

    #[test]
    fn test_age_bracket_aliases() {
        assert_eq!(AgeBracket::from_str("desc"), Some(AgeBracket::Unknown));
        assert_eq!(AgeBracket::from_str("30"), Some(AgeBracket::Over30));
        assert_eq!(AgeBracket::from_str("10_30"), Some(AgeBracket::Years10To30));
        assert_eq!(AgeBracket::from_str("forever"), None);
    }

    #[test]
    fn test_gas_index_matches_table_order() {
        for (i, gas) in Gas::ALL.iter().enumerate() {
            assert_eq!(gas.index(), i);
        }
    }

    #[test]
    fn test_severity_group_mapping() {
        assert_eq!(SeverityGroup::from(ZoneCode::Pd), SeverityGroup::PartialDischarge);
        assert_eq!(SeverityGroup::from(ZoneCode::T2), SeverityGroup::Thermal);
        assert_eq!(SeverityGroup::from(ZoneCode::Dt), SeverityGroup::Electrical);
        assert_eq!(SeverityGroup::from(ZoneCode::OutOfRange), SeverityGroup::Unclassified);
    }
}
