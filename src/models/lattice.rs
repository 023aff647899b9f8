//! # 晶格参数数据模型
//!
//! 定义六个晶格常数 (a, b, c, alpha, beta, gamma) 的统一表示，
//! 以及从 AIMS 晶格向量推导晶格常数的几何计算。
//!
//! 晶格常数以字符串保存：CIF 与自由文本路径直接保留原始写法
//! （如 `3.45(2)`），AIMS 路径则由浮点计算结果格式化得到。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `batch/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};
use std::fmt;

/// 晶格常数的键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatticeKey {
    A,
    B,
    C,
    Alpha,
    Beta,
    Gamma,
}

impl LatticeKey {
    /// 按表单顺序排列的全部键
    pub const ALL: [LatticeKey; 6] = [
        LatticeKey::A,
        LatticeKey::B,
        LatticeKey::C,
        LatticeKey::Alpha,
        LatticeKey::Beta,
        LatticeKey::Gamma,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LatticeKey::A => "a",
            LatticeKey::B => "b",
            LatticeKey::C => "c",
            LatticeKey::Alpha => "alpha",
            LatticeKey::Beta => "beta",
            LatticeKey::Gamma => "gamma",
        }
    }

    /// 从标签识别键（大小写敏感）
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "a" => Some(LatticeKey::A),
            "b" => Some(LatticeKey::B),
            "c" => Some(LatticeKey::C),
            "alpha" => Some(LatticeKey::Alpha),
            "beta" => Some(LatticeKey::Beta),
            "gamma" => Some(LatticeKey::Gamma),
            _ => None,
        }
    }
}

impl fmt::Display for LatticeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 晶格向量 (仅 AIMS 格式使用)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeVector(pub [f64; 3]);

impl LatticeVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        LatticeVector([x, y, z])
    }

    pub fn dot(&self, other: &LatticeVector) -> f64 {
        self.0.iter().zip(other.0.iter()).map(|(x, y)| x * y).sum()
    }

    /// 欧几里得范数
    pub fn norm(&self) -> f64 {
        (self.0[0].powi(2) + self.0[1].powi(2) + self.0[2].powi(2)).sqrt()
    }

    /// 两向量夹角（度）
    ///
    /// 零长度或数值越界时结果为 `NaN`，不做修正。
    pub fn angle_to(&self, other: &LatticeVector) -> f64 {
        (self.dot(other) / (self.norm() * other.norm()))
            .acos()
            .to_degrees()
    }
}

/// 六个晶格常数
///
/// 每个字段要么有值要么为空。自由文本路径要求六个全有或全无，
/// CIF 路径允许部分字段为空。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeParameters {
    pub a: Option<String>,
    pub b: Option<String>,
    pub c: Option<String>,
    pub alpha: Option<String>,
    pub beta: Option<String>,
    pub gamma: Option<String>,
}

impl LatticeParameters {
    /// 六个字段均为空
    pub fn empty() -> Self {
        Self::default()
    }

    /// 由三个晶格向量推导 a, b, c, alpha, beta, gamma
    ///
    /// alpha = ∠(v2, v3)，beta = ∠(v1, v3)，gamma = ∠(v1, v2)
    pub fn from_vectors(vectors: &[LatticeVector; 3]) -> Self {
        let [v1, v2, v3] = vectors;

        Self::from_values([
            v1.norm(),
            v2.norm(),
            v3.norm(),
            v2.angle_to(v3),
            v1.angle_to(v3),
            v1.angle_to(v2),
        ])
    }

    /// 由数值创建，按 a, b, c, alpha, beta, gamma 顺序
    pub fn from_values(values: [f64; 6]) -> Self {
        LatticeKey::ALL
            .iter()
            .zip(values.iter())
            .fold(Self::empty(), |acc, (key, value)| {
                acc.with(*key, value.to_string())
            })
    }

    /// 返回设置了某个键的新记录（后写覆盖先写）
    pub fn with(mut self, key: LatticeKey, value: impl Into<String>) -> Self {
        *self.slot_mut(key) = Some(value.into());
        self
    }

    pub fn get(&self, key: LatticeKey) -> Option<&str> {
        match key {
            LatticeKey::A => self.a.as_deref(),
            LatticeKey::B => self.b.as_deref(),
            LatticeKey::C => self.c.as_deref(),
            LatticeKey::Alpha => self.alpha.as_deref(),
            LatticeKey::Beta => self.beta.as_deref(),
            LatticeKey::Gamma => self.gamma.as_deref(),
        }
    }

    fn slot_mut(&mut self, key: LatticeKey) -> &mut Option<String> {
        match key {
            LatticeKey::A => &mut self.a,
            LatticeKey::B => &mut self.b,
            LatticeKey::C => &mut self.c,
            LatticeKey::Alpha => &mut self.alpha,
            LatticeKey::Beta => &mut self.beta,
            LatticeKey::Gamma => &mut self.gamma,
        }
    }

    /// 按表单顺序遍历 (键, 值)
    pub fn iter(&self) -> impl Iterator<Item = (LatticeKey, Option<&str>)> + '_ {
        LatticeKey::ALL.iter().map(move |key| (*key, self.get(*key)))
    }

    /// 已填充字段数量
    pub fn count(&self) -> usize {
        self.iter().filter(|(_, v)| v.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.count() == LatticeKey::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// 取数值，忽略括号中的不确定度后缀（如 `3.45(2)` -> 3.45）
    pub fn numeric(&self, key: LatticeKey) -> Option<f64> {
        let raw = self.get(key)?;
        let value = raw.split('(').next().unwrap_or(raw).trim();
        value.parse().ok()
    }

    /// 计算晶胞体积，需要六个字段均可解析为数值
    pub fn volume(&self) -> Option<f64> {
        let a = self.numeric(LatticeKey::A)?;
        let b = self.numeric(LatticeKey::B)?;
        let c = self.numeric(LatticeKey::C)?;
        let cos_alpha = self.numeric(LatticeKey::Alpha)?.to_radians().cos();
        let cos_beta = self.numeric(LatticeKey::Beta)?.to_radians().cos();
        let cos_gamma = self.numeric(LatticeKey::Gamma)?.to_radians().cos();

        let factor = 1.0 - cos_alpha.powi(2) - cos_beta.powi(2) - cos_gamma.powi(2)
            + 2.0 * cos_alpha * cos_beta * cos_gamma;

        Some(a * b * c * factor.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(value: Option<f64>, expected: f64) -> bool {
        value.map(|v| (v - expected).abs() < 1e-6).unwrap_or(false)
    }

    #[test]
    fn test_from_vectors_unit_cube() {
        let lattice = LatticeParameters::from_vectors(&[
            LatticeVector::new(1.0, 0.0, 0.0),
            LatticeVector::new(0.0, 1.0, 0.0),
            LatticeVector::new(0.0, 0.0, 1.0),
        ]);

        for key in [LatticeKey::A, LatticeKey::B, LatticeKey::C] {
            assert!(close(lattice.numeric(key), 1.0));
        }
        for key in [LatticeKey::Alpha, LatticeKey::Beta, LatticeKey::Gamma] {
            assert!(close(lattice.numeric(key), 90.0));
        }
    }

    #[test]
    fn test_from_vectors_hexagonal() {
        let lattice = LatticeParameters::from_vectors(&[
            LatticeVector::new(3.0, 0.0, 0.0),
            LatticeVector::new(-1.5, 1.5 * 3f64.sqrt(), 0.0),
            LatticeVector::new(0.0, 0.0, 5.0),
        ]);

        assert!(close(lattice.numeric(LatticeKey::A), 3.0));
        assert!(close(lattice.numeric(LatticeKey::B), 3.0));
        assert!(close(lattice.numeric(LatticeKey::C), 5.0));
        assert!(close(lattice.numeric(LatticeKey::Alpha), 90.0));
        assert!(close(lattice.numeric(LatticeKey::Beta), 90.0));
        assert!(close(lattice.numeric(LatticeKey::Gamma), 120.0));
    }

    #[test]
    fn test_degenerate_vector_gives_nan() {
        let lattice = LatticeParameters::from_vectors(&[
            LatticeVector::new(0.0, 0.0, 0.0),
            LatticeVector::new(0.0, 1.0, 0.0),
            LatticeVector::new(0.0, 0.0, 1.0),
        ]);

        assert_eq!(lattice.get(LatticeKey::A), Some("0"));
        assert_eq!(lattice.get(LatticeKey::Beta), Some("NaN"));
        assert_eq!(lattice.get(LatticeKey::Gamma), Some("NaN"));
        assert!(close(lattice.numeric(LatticeKey::Alpha), 90.0));
    }

    #[test]
    fn test_with_last_write_wins() {
        let lattice = LatticeParameters::empty()
            .with(LatticeKey::A, "4.0")
            .with(LatticeKey::A, "4.5");

        assert_eq!(lattice.get(LatticeKey::A), Some("4.5"));
        assert_eq!(lattice.count(), 1);
        assert!(!lattice.is_complete());
        assert!(!lattice.is_empty());
    }

    #[test]
    fn test_numeric_strips_uncertainty() {
        let lattice = LatticeParameters::empty().with(LatticeKey::C, "3.45(2)");
        assert!(close(lattice.numeric(LatticeKey::C), 3.45));

        let lattice = LatticeParameters::empty().with(LatticeKey::C, "?");
        assert_eq!(lattice.numeric(LatticeKey::C), None);
    }

    #[test]
    fn test_volume_cubic() {
        let lattice = LatticeParameters::from_values([5.0, 5.0, 5.0, 90.0, 90.0, 90.0]);
        assert!(close(lattice.volume(), 125.0));
    }

    #[test]
    fn test_volume_requires_all_six() {
        let lattice = LatticeParameters::empty()
            .with(LatticeKey::A, "5.0")
            .with(LatticeKey::B, "5.0");
        assert_eq!(lattice.volume(), None);
    }

    #[test]
    fn test_key_labels() {
        for key in LatticeKey::ALL {
            assert_eq!(LatticeKey::from_label(key.as_str()), Some(key));
        }
        assert_eq!(LatticeKey::from_label("Alpha"), None);
        assert_eq!(LatticeKey::from_label("d"), None);
    }
}
