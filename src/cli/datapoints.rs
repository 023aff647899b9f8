//! # datapoints 子命令 CLI 定义
//!
//! 数据点文件自动填充，多子集以 '&' 分隔
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/datapoints.rs`

use super::fill::{FieldArgs, UploadArgs};
use clap::Args;
use std::path::PathBuf;

/// datapoints 子命令参数
#[derive(Args, Debug)]
pub struct DatapointsArgs {
    /// Data file to upload
    pub file: PathBuf,

    /// Fill only this subset (1-based); all subsets are filled when omitted
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub subset: Option<u64>,

    /// Number of subsets in the dataset (global mode); extra blocks are ignored
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub subsets: Option<u64>,

    #[command(flatten)]
    pub fields: FieldArgs,

    #[command(flatten)]
    pub upload: UploadArgs,

    /// Write the field map as JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
