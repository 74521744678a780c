// ==========================================
// DGA Duval 诊断引擎 - 气体读数与阈值行
// ==========================================
// 依据: IEEE C57.104-2019 步骤 2/3
// 红线: 缺失读数按 0 处理; 缺失阈值不触发任何条件
// ==========================================

use crate::domain::types::Gas;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// GasPanel - 7 种气体读数 (ppm)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GasPanel {
    readings: BTreeMap<Gas, f64>,
}

impl GasPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式设置读数
    pub fn with(mut self, gas: Gas, ppm: f64) -> Self {
        self.readings.insert(gas, ppm);
        self
    }

    /// 设置读数
    pub fn set(&mut self, gas: Gas, ppm: f64) {
        self.readings.insert(gas, ppm);
    }

    /// 读取读数（缺失视为 0）
    pub fn get(&self, gas: Gas) -> f64 {
        self.readings.get(&gas).copied().unwrap_or(0.0)
    }

    /// 原始读数（区分缺失与 0）
    pub fn raw(&self, gas: Gas) -> Option<f64> {
        self.readings.get(&gas).copied()
    }

    /// 已录入的读数
    pub fn iter(&self) -> impl Iterator<Item = (Gas, f64)> + '_ {
        self.readings.iter().map(|(g, v)| (*g, *v))
    }
}

impl FromIterator<(Gas, f64)> for GasPanel {
    fn from_iter<I: IntoIterator<Item = (Gas, f64)>>(iter: I) -> Self {
        Self {
            readings: iter.into_iter().collect(),
        }
    }
}

// ==========================================
// ThresholdRow - 单个 (保护方式, 年龄) 的阈值行
// ==========================================
// 空行 = 表中无此组合
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThresholdRow {
    limits: BTreeMap<Gas, f64>,
}

impl ThresholdRow {
    /// 空行
    pub fn empty() -> Self {
        Self::default()
    }

    /// 从 IEEE 表格行构造（按 Gas::ALL 顺序）
    pub fn from_table(values: &[f64; 7]) -> Self {
        Self {
            limits: Gas::ALL.iter().map(|g| (*g, values[g.index()])).collect(),
        }
    }

    /// 阈值（缺失返回 None）
    pub fn get(&self, gas: Gas) -> Option<f64> {
        self.limits.get(&gas).copied()
    }

    /// 展示用阈值（缺失视为 0）
    pub fn get_or_zero(&self, gas: Gas) -> f64 {
        self.get(gas).unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// 读数是否达到阈值
    ///
    /// 阈值缺失时返回 false（缺少限值不能产生误报）
    pub fn is_reached(&self, gas: Gas, reading: f64) -> bool {
        match self.get(gas) {
            Some(limit) => reading >= limit,
            None => false,
        }
    }
}
