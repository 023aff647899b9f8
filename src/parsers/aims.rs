//! # FHI-aims geometry.in 格式解析器
//!
//! 从 `lattice_vector` 行推导晶格常数。
//!
//! ## geometry.in 格式说明
//! ```text
//! lattice_vector 5.43 0.00 0.00
//! lattice_vector 0.00 5.43 0.00
//! lattice_vector 0.00 0.00 5.43
//! atom_frac 0.00 0.00 0.00 Si
//! atom_frac 0.25 0.25 0.25 Si
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/lattice.rs`

use crate::error::{LatfillError, Result};
use crate::models::{LatticeParameters, LatticeVector};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// 行首的 lattice_vector 标记，用于格式识别
static LATTICE_VECTOR_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*lattice_vector").unwrap());

/// 完整的 lattice_vector 行（三个带符号小数）
static LATTICE_VECTOR_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[ \t]*lattice_vector\s+(-?\d+(?:\.\d+)?)\s+(-?\d+(?:\.\d+)?)\s+(-?\d+(?:\.\d+)?)\b",
    )
    .unwrap()
});

/// 是否存在以 lattice_vector 开头的行
pub fn has_lattice_vector_tag(content: &str) -> bool {
    content.lines().any(|line| LATTICE_VECTOR_TAG.is_match(line))
}

/// 解析单行 lattice_vector
pub fn parse_lattice_vector_line(line: &str) -> Option<LatticeVector> {
    let caps = LATTICE_VECTOR_LINE.captures(line)?;
    let x = caps.get(1)?.as_str().parse().ok()?;
    let y = caps.get(2)?.as_str().parse().ok()?;
    let z = caps.get(3)?.as_str().parse().ok()?;
    Some(LatticeVector::new(x, y, z))
}

/// 按顺序收集最多三个晶格向量，收集满后停止扫描
pub fn collect_lattice_vectors(content: &str) -> Vec<LatticeVector> {
    content
        .lines()
        .filter_map(parse_lattice_vector_line)
        .take(3)
        .collect()
}

/// 从 geometry.in 文本推导晶格常数
///
/// 不足三个晶格向量时返回错误，不输出部分结果。
pub fn derive_lattice(content: &str) -> Result<LatticeParameters> {
    let vectors = collect_lattice_vectors(content);

    match vectors.as_slice() {
        [v1, v2, v3] => Ok(LatticeParameters::from_vectors(&[*v1, *v2, *v3])),
        _ => {
            debug!("{} lattice_vector line(s) found, need 3", vectors.len());
            Err(LatfillError::InsufficientLatticeVectors {
                found: vectors.len(),
            })
        }
    }
}
