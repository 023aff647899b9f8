//! # 自由文本直接读取
//!
//! 既不是 CIF 也没有 lattice_vector 的文本，按 `标签 数值` 形式扫描晶格常数：
//! ```text
//! a 4.5
//! b 4.5
//! c 4.5(1)
//! alpha 90
//! beta 90
//! gamma 90
//! ```
//!
//! 六个全部找到时整段文本视为晶格常数，坐标栏清空；
//! 否则六个常数全部清空，原文作为原子坐标保留。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/`

use crate::models::{GeometryFormat, LatticeKey, LatticeParameters, StructureFill};
use once_cell::sync::Lazy;
use regex::Regex;

/// 标签 + 带符号小数，可带括号不确定度后缀
static LABELLED_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([a-z]+)\s+(-?(?:\d+(?:\.\d+)?|\.\d+)(?:\(\d+(?:\.\d+)?\)|\b))").unwrap()
});

/// 扫描所有标签数值，同一键以最后一次出现为准
pub fn extract_lattice(content: &str) -> LatticeParameters {
    LABELLED_NUMBER
        .captures_iter(content)
        .filter_map(|caps| {
            let key = LatticeKey::from_label(caps.get(1)?.as_str())?;
            Some((key, caps.get(2)?.as_str()))
        })
        .fold(LatticeParameters::empty(), |acc, (key, value)| {
            acc.with(key, value)
        })
}

/// 全有或全无地读取晶格常数
pub fn read_direct(content: &str) -> StructureFill {
    let lattice = extract_lattice(content);

    if lattice.is_complete() {
        StructureFill::new(GeometryFormat::Other, lattice, "")
    } else {
        StructureFill::new(GeometryFormat::Other, LatticeParameters::empty(), content)
    }
}
