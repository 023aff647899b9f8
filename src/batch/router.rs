//! # 结果路由
//!
//! 将上传文本拆分后的每个子集分别解析，并把结果写入对应的表单字段。
//!
//! ## 功能
//! - 结构文件：六个晶格常数 + 原子坐标 + 几何格式
//! - 数据点文件：整段文本写入 datapoints 字段
//! - 上传或解析失败时，错误文本写入目标字段，不中断其余子集
//!
//! ## 依赖关系
//! - 被 `commands/fill.rs`, `commands/datapoints.rs` 调用
//! - 使用 `parsers/`, `models/form.rs`, `batch/splitter.rs`

use super::splitter::{normalize_line_endings, strip_leading_newline, FillMode, ParseBatch};
use crate::error::Result;
use crate::models::{FieldLayout, FieldSink, GeometryFormat, StructureFill};
use crate::parsers;

use log::{debug, warn};

/// 单个子集的处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubsetOutcome {
    /// 已写入结构数据
    Filled {
        subset: usize,
        format: GeometryFormat,
        /// 已填充的晶格常数数量
        constants: usize,
    },
    /// 已写入数据点
    Datapoints { subset: usize, lines: usize },
    /// 失败，错误文本已写入字段
    Failed { subset: usize, message: String },
}

impl SubsetOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SubsetOutcome::Failed { .. })
    }
}

/// 把一个子集的解析结果写入表单
///
/// 几何格式字段在识别阶段写入，这里只写晶格常数和坐标。
pub fn write_structure<S: FieldSink>(
    sink: &mut S,
    layout: &FieldLayout,
    subset: usize,
    fill: &StructureFill,
) {
    for (key, value) in fill.lattice.iter() {
        sink.set_field(&layout.lattice_constant(key, subset), value.unwrap_or(""));
    }
    sink.set_field(&layout.atomic_coordinates(subset), &fill.coordinates);
}

/// 结构文件上传结果 → 表单字段
///
/// 单子集模式下记录原始文件名；上传失败时错误文本写入坐标字段。
pub fn route_structure_upload<S: FieldSink>(
    upload: Result<String>,
    file_name: &str,
    mode: FillMode,
    layout: &FieldLayout,
    sink: &mut S,
) -> Vec<SubsetOutcome> {
    if let FillMode::Single(subset) = mode {
        sink.set_field(&layout.import_file_name_atomic(subset), file_name);
    }

    let body = match upload {
        Ok(body) => body,
        Err(e) => {
            let subset = mode.fallback_subset();
            let message = e.to_string();
            warn!("{}: upload failed: {}", file_name, message);
            sink.set_field(&layout.atomic_coordinates(subset), &message);
            return vec![SubsetOutcome::Failed { subset, message }];
        }
    };

    fill_structure(&body, file_name, mode, layout, sink)
}

/// 拆分并逐块解析结构文本，各子集相互独立
pub fn fill_structure<S: FieldSink>(
    body: &str,
    file_name: &str,
    mode: FillMode,
    layout: &FieldLayout,
    sink: &mut S,
) -> Vec<SubsetOutcome> {
    let batch = ParseBatch::from_upload(body, mode);
    if batch.is_empty() {
        debug!("{}: nothing to fill", file_name);
    } else {
        debug!("{}: {} block(s)", file_name, batch.len());
    }

    batch
        .into_iter()
        .map(|block| {
            debug!("{}: routing block to subset {}", file_name, block.subset);
            let format = parsers::classify(file_name, &block.text);
            sink.set_field(&layout.geometry_format(block.subset), format.as_str());

            match parsers::derive_block(format, file_name, &block.text) {
                Ok(fill) => {
                    write_structure(sink, layout, block.subset, &fill);
                    SubsetOutcome::Filled {
                        subset: block.subset,
                        format: fill.format,
                        constants: fill.lattice.count(),
                    }
                }
                Err(e) => {
                    let message = e.to_string();
                    sink.set_field(&layout.atomic_coordinates(block.subset), &message);
                    SubsetOutcome::Failed {
                        subset: block.subset,
                        message,
                    }
                }
            }
        })
        .collect()
}

/// 数据点文件上传结果 → 表单字段
pub fn route_datapoints_upload<S: FieldSink>(
    upload: Result<String>,
    file_name: &str,
    mode: FillMode,
    subset_count: Option<usize>,
    layout: &FieldLayout,
    sink: &mut S,
) -> Vec<SubsetOutcome> {
    if let FillMode::Single(subset) = mode {
        sink.set_field(&layout.import_file_name(subset), file_name);
    }

    match upload {
        Ok(body) => fill_datapoints(&body, mode, subset_count, layout, sink),
        Err(e) => {
            let subset = mode.fallback_subset();
            let message = e.to_string();
            warn!("{}: upload failed: {}", file_name, message);
            sink.set_field(&layout.datapoints(subset), &message);
            vec![SubsetOutcome::Failed { subset, message }]
        }
    }
}

/// 数据点文本写入 datapoints 字段
///
/// 全局模式且包含多个块时，第 i 块写入子集 i（受 `subset_count` 限制）；
/// 否则整段文本写入指定子集（全局模式为子集 1）。
pub fn fill_datapoints<S: FieldSink>(
    body: &str,
    mode: FillMode,
    subset_count: Option<usize>,
    layout: &FieldLayout,
    sink: &mut S,
) -> Vec<SubsetOutcome> {
    let normalized = normalize_line_endings(body);
    let blocks: Vec<&str> = normalized.split('&').collect();

    if mode == FillMode::Global && blocks.len() > 1 {
        let count = subset_count.unwrap_or(blocks.len());
        return blocks
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, block)| {
                let text = strip_leading_newline(block);
                sink.set_field(&layout.datapoints(i + 1), text);
                SubsetOutcome::Datapoints {
                    subset: i + 1,
                    lines: text.lines().count(),
                }
            })
            .collect();
    }

    let subset = mode.fallback_subset();
    sink.set_field(&layout.datapoints(subset), &normalized);
    vec![SubsetOutcome::Datapoints {
        subset,
        lines: normalized.lines().count(),
    }]
}
