//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `batch/`, `upload/`, `models/`, `utils/`
//! - 子模块: parse, fill, datapoints, scan

pub mod datapoints;
pub mod fill;
pub mod parse;
pub mod scan;

use crate::cli::fill::FieldArgs;
use crate::cli::Commands;
use crate::error::{LatfillError, Result};
use crate::models::{FieldLayout, FormFields};
use crate::utils::output;

use std::fs;
use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Parse(args) => parse::execute(args),
        Commands::Fill(args) => fill::execute(args),
        Commands::Datapoints(args) => datapoints::execute(args),
        Commands::Scan(args) => scan::execute(args),
    }
}

/// 由命令行参数构造字段命名规则
pub(crate) fn field_layout(args: &FieldArgs) -> FieldLayout {
    FieldLayout::new(args.dataset as usize).with_prefix(args.field_prefix.clone())
}

/// 输出字段映射：指定文件时写入文件，否则打印到 stdout
pub(crate) fn emit_fields(fields: &FormFields, output_path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(fields)?;

    match output_path {
        Some(path) => {
            fs::write(path, format!("{}\n", json)).map_err(|e| LatfillError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
            output::print_success(&format!(
                "{} field(s) written to '{}'",
                fields.len(),
                path.display()
            ));
        }
        None => println!("{}", json),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldSink;

    #[test]
    fn test_emit_fields_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fields.json");

        let mut fields = FormFields::new();
        fields.set_field("id_lattice_constant_a_1_1", "5.43");
        emit_fields(&fields, Some(&path)).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["id_lattice_constant_a_1_1"], "5.43");
    }

    #[test]
    fn test_field_layout_from_args() {
        let args = FieldArgs {
            dataset: 4,
            field_prefix: "form-".to_string(),
        };
        assert_eq!(field_layout(&args).datapoints(2), "form-datapoints_4_2");
    }
}
