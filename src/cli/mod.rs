//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `parse`: 解析单个结构文件并显示晶格常数
//! - `fill`: 结构文件自动填充表单字段（晶格常数 + 原子坐标）
//! - `datapoints`: 数据点文件自动填充表单字段
//! - `scan`: 批量扫描结构文件并汇总晶格常数
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: parse, fill, datapoints, scan

pub mod datapoints;
pub mod fill;
pub mod parse;
pub mod scan;

use clap::{ArgAction, Parser, Subcommand};

/// latfill - 结构文件晶格常数自动填充工具
#[derive(Parser)]
#[command(name = "latfill")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Lattice parameter autofill from CIF, FHI-aims and free-text structure uploads", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log level (error, warn, info, debug, trace, off); overrides -v
    #[arg(long, env = "LATFILL_LOG", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Parse one structure file and print its lattice parameters
    Parse(parse::ParseArgs),

    /// Autofill lattice constants and atomic coordinates into form fields
    Fill(fill::FillArgs),

    /// Autofill datapoint textareas from a data file
    Datapoints(datapoints::DatapointsArgs),

    /// Scan many structure files and summarize their lattice parameters
    Scan(scan::ScanArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fill_global_mode() {
        let cli = Cli::try_parse_from(["latfill", "fill", "upload.txt", "--dataset", "2"]).unwrap();
        match cli.command {
            Commands::Fill(args) => {
                assert_eq!(args.subset, None);
                assert_eq!(args.fields.dataset, 2);
                assert_eq!(args.fields.field_prefix, "id_");
            }
            _ => panic!("expected fill"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["latfill", "parse", "Si.cif", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_subset_must_be_positive() {
        assert!(Cli::try_parse_from(["latfill", "fill", "x.in", "--subset", "0"]).is_err());
    }
}
