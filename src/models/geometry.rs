//! # 几何格式与单个子集的解析结果
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `batch/` 使用
//! - 使用 `models/lattice.rs`

use super::lattice::LatticeParameters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 结构文件格式标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryFormat {
    /// FHI-aims geometry.in (lattice_vector 行)
    Aims,
    /// Crystallographic Information File
    Cif,
    /// 自由文本，直接读取 `a 4.5` 形式的标签数值
    Other,
}

impl GeometryFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryFormat::Aims => "aims",
            GeometryFormat::Cif => "cif",
            GeometryFormat::Other => "other",
        }
    }
}

impl fmt::Display for GeometryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 单个文本块的解析结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureFill {
    /// 识别出的格式
    pub format: GeometryFormat,

    /// 晶格常数
    pub lattice: LatticeParameters,

    /// 写入原子坐标栏的剩余文本
    pub coordinates: String,
}

impl StructureFill {
    pub fn new(format: GeometryFormat, lattice: LatticeParameters, coordinates: impl Into<String>) -> Self {
        StructureFill {
            format,
            lattice,
            coordinates: coordinates.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tags() {
        assert_eq!(GeometryFormat::Aims.to_string(), "aims");
        assert_eq!(GeometryFormat::Cif.to_string(), "cif");
        assert_eq!(GeometryFormat::Other.to_string(), "other");
    }

    #[test]
    fn test_format_serializes_lowercase() {
        let json = serde_json::to_string(&GeometryFormat::Aims).unwrap();
        assert_eq!(json, "\"aims\"");
    }
}
