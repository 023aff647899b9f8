//! # scan 子命令 CLI 定义
//!
//! 批量扫描结构文件，汇总每个子集的晶格常数
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use super::fill::UploadArgs;
use clap::Args;
use std::path::PathBuf;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Input file or directory
    pub input: PathBuf,

    /// Glob pattern(s) for input files, comma separated
    #[arg(short, long, default_value = "*.cif,*.in,*.txt")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Export the summary to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub upload: UploadArgs,
}
