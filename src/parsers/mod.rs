//! # 解析器模块
//!
//! 识别上传结构文本的格式，并分派给对应的晶格常数解析器。
//!
//! 流程：格式识别 → {AIMS, CIF, 直接读取} 三选一 → 晶格常数 + 坐标文本
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: aims, cif, direct

pub mod aims;
pub mod cif;
pub mod direct;

use crate::error::Result;
use crate::models::{GeometryFormat, StructureFill};
use log::debug;

/// 文件名是否以 `.cif` 结尾（大小写敏感）
pub fn is_cif_file_name(file_name: &str) -> bool {
    file_name.ends_with(".cif")
}

/// 识别文本格式
///
/// CIF 只看扩展名；否则有 lattice_vector 行即为 AIMS；其余一律为直接读取。
pub fn classify(file_name: &str, content: &str) -> GeometryFormat {
    if is_cif_file_name(file_name) {
        GeometryFormat::Cif
    } else if aims::has_lattice_vector_tag(content) {
        GeometryFormat::Aims
    } else {
        GeometryFormat::Other
    }
}

/// 解析单个子集的文本块
pub fn parse_block(file_name: &str, block: &str) -> Result<StructureFill> {
    let format = classify(file_name, block);
    debug!("{}: classified as '{}'", file_name, format);
    derive_block(format, file_name, block)
}

/// 按已识别的格式提取晶格常数
///
/// AIMS 和 CIF 路径保留整段文本作为坐标；直接读取路径按全有或全无规则处理。
pub fn derive_block(format: GeometryFormat, file_name: &str, block: &str) -> Result<StructureFill> {
    match format {
        GeometryFormat::Aims => {
            let lattice = aims::derive_lattice(block)?;
            Ok(StructureFill::new(format, lattice, block))
        }
        GeometryFormat::Cif => {
            let lattice = cif::derive_lattice(block);
            if !lattice.is_complete() {
                debug!(
                    "{}: only {} of 6 cell parameters found",
                    file_name,
                    lattice.count()
                );
            }
            Ok(StructureFill::new(format, lattice, block))
        }
        GeometryFormat::Other => Ok(direct::read_direct(block)),
    }
}
