//! # CIF 格式解析器
//!
//! 只读取晶胞参数，原子位置由下游按原文处理。
//!
//! ## CIF 晶胞参数说明
//! ```text
//! _cell_length_a    5.4307
//! _cell_length_b    5.4307
//! _cell_length_c    5.4307
//! _cell_angle_alpha 90
//! _cell_angle_beta  90
//! _cell_angle_gamma 90
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/lattice.rs`

use crate::models::{LatticeKey, LatticeParameters};
use once_cell::sync::Lazy;
use regex::Regex;

static CELL_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^_cell_(?:length_(a|b|c)|angle_(alpha|beta|gamma))\s+(.*)$").unwrap()
});

/// 解析单行 `_cell_*` 键值，值为行剩余部分去除首尾空白
pub fn parse_cell_entry(line: &str) -> Option<(LatticeKey, &str)> {
    let caps = CELL_ENTRY.captures(line)?;
    let label = caps.get(1).or_else(|| caps.get(2))?.as_str();
    let key = LatticeKey::from_label(label)?;
    let value = caps.get(3)?.as_str().trim();

    if value.is_empty() {
        None
    } else {
        Some((key, value))
    }
}

/// 从 CIF 文本读取晶格常数
///
/// 六个键都找到后提前停止；缺失的键保持为空，不视为错误。
pub fn derive_lattice(content: &str) -> LatticeParameters {
    let mut lattice = LatticeParameters::empty();

    for line in content.lines() {
        if let Some((key, value)) = parse_cell_entry(line) {
            lattice = lattice.with(key, value);
        }
        if lattice.is_complete() {
            break;
        }
    }

    lattice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            parse_cell_entry("_cell_length_a   5.4307(2)  "),
            Some((LatticeKey::A, "5.4307(2)"))
        );
        assert_eq!(
            parse_cell_entry("_cell_angle_gamma\t120.0"),
            Some((LatticeKey::Gamma, "120.0"))
        );
        assert_eq!(parse_cell_entry("_cell_length_alpha 90"), None);
        assert_eq!(parse_cell_entry("_cell_volume 160.1"), None);
        assert_eq!(parse_cell_entry("_cell_length_a"), None);
    }

    #[test]
    fn test_full_cell() {
        let content = "data_Si\n\
                       _symmetry_space_group_name_H-M 'F d -3 m'\n\
                       _cell_length_a 5.43\n\
                       _cell_length_b 5.43\n\
                       _cell_length_c 5.43\n\
                       _cell_angle_alpha 90\n\
                       _cell_angle_beta 90\n\
                       _cell_angle_gamma 90\n\
                       loop_\n\
                       _atom_site_label\n";
        let lattice = derive_lattice(content);

        assert!(lattice.is_complete());
        assert_eq!(lattice.get(LatticeKey::A), Some("5.43"));
        assert_eq!(lattice.get(LatticeKey::Gamma), Some("90"));
    }

    #[test]
    fn test_partial_cell_leaves_missing_empty() {
        let content = "_cell_length_a 3.0\n_cell_angle_beta 101.5\nrandom line\n";
        let lattice = derive_lattice(content);

        assert_eq!(lattice.get(LatticeKey::A), Some("3.0"));
        assert_eq!(lattice.get(LatticeKey::Beta), Some("101.5"));
        assert_eq!(lattice.get(LatticeKey::B), None);
        assert_eq!(lattice.get(LatticeKey::Alpha), None);
        assert_eq!(lattice.count(), 2);
    }

    #[test]
    fn test_stops_once_complete() {
        let content = "_cell_length_a 1\n_cell_length_b 2\n_cell_length_c 3\n\
                       _cell_angle_alpha 90\n_cell_angle_beta 90\n_cell_angle_gamma 90\n\
                       _cell_length_a 99\n";
        let lattice = derive_lattice(content);
        assert_eq!(lattice.get(LatticeKey::A), Some("1"));
    }
}
