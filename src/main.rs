//! # latfill - 结构文件晶格常数自动填充工具
//!
//! 从上传的结构文件 (CIF, FHI-aims geometry.in, 自由文本) 中提取六个晶格常数
//! 与原子坐标，并按子集写入数据录入表单的字段。
//!
//! ## 子命令
//! - `parse`      - 解析单个结构文件
//! - `fill`       - 结构文件自动填充表单字段
//! - `datapoints` - 数据点文件自动填充表单字段
//! - `scan`       - 批量扫描并汇总晶格常数
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── upload/    (上传预处理服务)
//!   │     ├── batch/     (子集拆分、路由、批量执行)
//!   │     ├── parsers/   (格式识别与解析器)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出、日志、进度条)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod upload;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    let level = utils::logger::level_from(cli.verbose, cli.log_level.as_deref());
    if let Err(e) = utils::logger::init(level) {
        utils::output::print_warning(&format!("Logger unavailable: {}", e));
    }

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
