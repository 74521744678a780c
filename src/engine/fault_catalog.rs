// ==========================================
// DGA Duval 诊断引擎 - 故障解释目录
// ==========================================
// 职责: 区域代码 → 故障名称 / 可能原因 / 处理建议
// 纯静态查找,未知代码返回通用"未分类"条目
// ==========================================

use crate::domain::diagnosis::FaultDescription;
use crate::domain::types::ZoneCode;
use crate::i18n;

/// (名称, 原因, 建议)
type Entry = (&'static str, &'static str, &'static str);

const PD: Entry = (
    "局部放电",
    "电晕型放电,固体绝缘中可能存在气隙,或油中存在气泡。",
    "检查油位,排查超声波异常声响。",
);
const T1: Entry = (
    "低温过热 < 300°C",
    "纸或油过载,连接部位氧化但温度较低。",
    "核查负载历史及冷却系统状态。",
);
const T2: Entry = (
    "中温过热 300°C - 700°C",
    "纸绝缘碳化、接触不良、铁芯环流。",
    "进行外部红外热像检查,安排检修。",
);
const T3: Entry = (
    "高温过热 > 700°C",
    "严重热点、油箱漏磁、铁芯短路。",
    "风险高。考虑脱气处理或尽快安排内部检查。",
);
const D1: Entry = (
    "低能放电",
    "火花放电,持续的小电流放电。",
    "建议进行电气试验(绝缘电阻、变比 TTR)。",
);
const D2: Entry = (
    "高能放电",
    "严重电弧放电,匝间或对地短路。",
    "严重。产气速率高时应退出运行,并进行糠醛分析。",
);
const DT: Entry = (
    "热电混合故障",
    "多种故障混合,可能为伴随热点的电弧。",
    "需要深入调查。",
);
const NOT_APPLICABLE: Entry = ("数据不足", "请输入大于 0 的数值", "-");
const OUT_OF_RANGE: Entry = (
    "超出三角形",
    "CH4、C2H4、C2H2 百分比之和必须为 100%。",
    "请核对或归一化数值。",
);
const UNCLASSIFIED: Entry = ("未知", "未分类区域", "请复核数据");

fn entry_for(zone: ZoneCode) -> Entry {
    match zone {
        ZoneCode::Pd => PD,
        ZoneCode::T1 => T1,
        ZoneCode::T2 => T2,
        ZoneCode::T3 => T3,
        ZoneCode::D1 => D1,
        ZoneCode::D2 => D2,
        ZoneCode::Dt => DT,
        ZoneCode::NotApplicable => NOT_APPLICABLE,
        ZoneCode::OutOfRange => OUT_OF_RANGE,
    }
}

fn to_description((name, cause, recommendation): Entry) -> FaultDescription {
    FaultDescription {
        name: name.to_string(),
        cause: cause.to_string(),
        recommendation: recommendation.to_string(),
    }
}

// ==========================================
// FaultCatalog - 故障解释目录
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct FaultCatalog;

impl FaultCatalog {
    pub fn new() -> Self {
        Self
    }

    /// 区域代码 → 故障解释（默认中文）
    pub fn describe(&self, zone: ZoneCode) -> FaultDescription {
        to_description(entry_for(zone))
    }

    /// 代码字符串 → 故障解释,无法识别的代码返回"未分类"条目
    pub fn describe_code(&self, code: &str) -> FaultDescription {
        match ZoneCode::from_str(code) {
            Some(zone) => self.describe(zone),
            None => to_description(UNCLASSIFIED),
        }
    }

    /// 按指定语言返回故障解释
    ///
    /// 中文直接取静态表; 其它语言查 locales/<locale>.yml 的 fault.<CODE>.*,
    /// 缺失的条目回落到中文
    pub fn describe_localized(&self, zone: ZoneCode, locale: &str) -> FaultDescription {
        let fallback = self.describe(zone);
        if locale.starts_with("zh") {
            return fallback;
        }

        let lookup = |field: &str, default: &str| {
            i18n::label_in(locale, &format!("fault.{}.{}", zone.as_str(), field), default)
        };

        FaultDescription {
            name: lookup("name", &fallback.name),
            cause: lookup("cause", &fallback.cause),
            recommendation: lookup("recommendation", &fallback.recommendation),
        }
    }
}
