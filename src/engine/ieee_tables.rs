// ==========================================
// DGA Duval 诊断引擎 - IEEE C57.104-2019 百分位表
// ==========================================
// 依据: IEEE Std C57.104-2019 表 1 (P90) / 表 2 (P95)
// 单位: µL/L (ppm)
// 索引: [保护方式][年龄区间][气体]
//   保护方式: 0 = 密封 (O2/N2 ≤ 0.2), 1 = 自由呼吸 (O2/N2 > 0.2)
//   年龄区间: 0 = 未知, 1 = 1-9, 2 = 10-30, 3 = >30
//   气体: H2, CH4, C2H6, C2H4, C2H2, CO, CO2
// ==========================================

use crate::domain::panel::ThresholdRow;
use crate::domain::types::{AgeBracket, PreservationRegime};

type Table = [[[f64; 7]; 4]; 2];

/// 90 百分位 (条件 1 上限)
pub const P90: Table = [
    [
        [80.0, 90.0, 90.0, 50.0, 1.0, 900.0, 9000.0],
        [80.0, 45.0, 30.0, 20.0, 1.0, 900.0, 5000.0],
        [75.0, 90.0, 90.0, 50.0, 1.0, 900.0, 10000.0],
        [100.0, 110.0, 150.0, 90.0, 1.0, 900.0, 5000.0],
    ],
    [
        [40.0, 20.0, 15.0, 50.0, 2.0, 500.0, 3500.0],
        [40.0, 20.0, 15.0, 25.0, 2.0, 500.0, 3500.0],
        [40.0, 20.0, 15.0, 60.0, 2.0, 500.0, 5500.0],
        [40.0, 20.0, 15.0, 60.0, 2.0, 500.0, 5500.0],
    ],
];

/// 95 百分位 (条件 2 上限)
pub const P95: Table = [
    [
        [200.0, 150.0, 175.0, 100.0, 2.0, 1100.0, 12500.0],
        [200.0, 100.0, 70.0, 40.0, 2.0, 1100.0, 7000.0],
        [200.0, 150.0, 175.0, 95.0, 2.0, 1100.0, 14000.0],
        [200.0, 200.0, 250.0, 175.0, 4.0, 1100.0, 14000.0],
    ],
    [
        [90.0, 50.0, 40.0, 100.0, 7.0, 600.0, 7000.0],
        [90.0, 60.0, 30.0, 80.0, 7.0, 600.0, 5000.0],
        [90.0, 60.0, 40.0, 125.0, 7.0, 600.0, 8000.0],
        [90.0, 80.0, 40.0, 125.0, 7.0, 600.0, 8000.0],
    ],
];

// ==========================================
// ThresholdTable - 百分位表
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable {
    pub name: &'static str,
    values: &'static Table,
}

/// P90 表
pub const P90_TABLE: ThresholdTable = ThresholdTable {
    name: "P90",
    values: &P90,
};

/// P95 表
pub const P95_TABLE: ThresholdTable = ThresholdTable {
    name: "P95",
    values: &P95,
};

fn regime_index(regime: PreservationRegime) -> Option<usize> {
    match regime {
        PreservationRegime::Sealed => Some(0),
        PreservationRegime::FreeBreathing => Some(1),
        PreservationRegime::Unknown => None,
    }
}

fn age_index(age: AgeBracket) -> usize {
    match age {
        AgeBracket::Unknown => 0,
        AgeBracket::Years1To9 => 1,
        AgeBracket::Years10To30 => 2,
        AgeBracket::Over30 => 3,
    }
}

impl ThresholdTable {
    /// 按 (保护方式, 年龄) 取阈值行,无此组合返回空行
    pub fn row(&self, regime: PreservationRegime, age: AgeBracket) -> ThresholdRow {
        match regime_index(regime) {
            Some(r) => ThresholdRow::from_table(&self.values[r][age_index(age)]),
            None => ThresholdRow::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Gas;

    #[test]
    fn test_sealed_unknown_age_ch4() {
        assert_eq!(P90_TABLE.row(PreservationRegime::Sealed, AgeBracket::Unknown).get(Gas::Ch4), Some(90.0));
        assert_eq!(P95_TABLE.row(PreservationRegime::Sealed, AgeBracket::Unknown).get(Gas::Ch4), Some(150.0));
    }

    #[test]
    fn test_free_breathing_over_30() {
        let row = P95_TABLE.row(PreservationRegime::FreeBreathing, AgeBracket::Over30);
        assert_eq!(row.get(Gas::Ch4), Some(80.0));
        assert_eq!(row.get(Gas::C2h4), Some(125.0));
    }

    #[test]
    fn test_unknown_regime_is_empty() {
        assert!(P90_TABLE.row(PreservationRegime::Unknown, AgeBracket::Years1To9).is_empty());
    }

    #[test]
    fn test_p95_never_below_p90() {
        for r in 0..2 {
            for a in 0..4 {
                for g in 0..7 {
                    assert!(P95[r][a][g] >= P90[r][a][g], "r={} a={} g={}", r, a, g);
                }
            }
        }
    }
}
