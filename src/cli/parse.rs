//! # parse 子命令 CLI 定义
//!
//! 以单子集模式解析一个结构文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/parse.rs`

use super::fill::UploadArgs;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 结果输出样式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human readable table
    Table,
    /// JSON document
    Json,
}

/// parse 子命令参数
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Structure file (CIF, FHI-aims geometry.in or free text)
    pub file: PathBuf,

    /// Output style
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,

    #[command(flatten)]
    pub upload: UploadArgs,
}
