//! # fill 子命令 CLI 定义
//!
//! 结构文件自动填充：晶格常数、原子坐标与几何格式
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/fill.rs`
//! - `FieldArgs`, `UploadArgs` 也被其他子命令复用

use clap::Args;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────
// 公共参数
// ─────────────────────────────────────────────────────────────

/// 表单字段命名参数
#[derive(Args, Debug, Clone)]
pub struct FieldArgs {
    /// Dataset index used in field names
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub dataset: u64,

    /// Prefix prepended to every field name
    #[arg(long, default_value = "id_")]
    pub field_prefix: String,
}

/// 上传服务参数
#[derive(Args, Debug, Clone)]
pub struct UploadArgs {
    /// Base URL of the autofill upload service (local preprocessing when unset)
    #[arg(long, env = "LATFILL_ENDPOINT")]
    pub endpoint: Option<String>,
}

// ─────────────────────────────────────────────────────────────
// fill 子命令
// ─────────────────────────────────────────────────────────────

/// fill 子命令参数
#[derive(Args, Debug)]
pub struct FillArgs {
    /// Uploaded structure file; subsets separated by '&' in global mode
    pub file: PathBuf,

    /// Fill only this subset (1-based); all subsets are filled when omitted
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub subset: Option<u64>,

    #[command(flatten)]
    pub fields: FieldArgs,

    #[command(flatten)]
    pub upload: UploadArgs,

    /// Write the field map as JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
