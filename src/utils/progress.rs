//! # 扫描进度条
//!
//! `scan` 命令逐文件解析时显示的进度条。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};

const SCAN_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}";

/// 按文件数计数的进度条，`label` 显示在末尾
pub fn scan_progress_bar(files: usize, label: &str) -> ProgressBar {
    let style = ProgressStyle::with_template(SCAN_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

    let pb = ProgressBar::new(files as u64);
    pb.set_style(style);
    pb.set_message(label.to_string());
    pb
}
