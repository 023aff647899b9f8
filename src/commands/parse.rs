//! # parse 命令实现
//!
//! 以单子集模式解析一个结构文件，输出格式、晶格常数与坐标文本。
//!
//! ## 依赖关系
//! - 使用 `cli/parse.rs` 定义的参数
//! - 使用 `upload/`, `parsers/`, `batch/splitter.rs`
//! - 使用 `utils/output.rs`

use crate::batch::splitter::normalize_line_endings;
use crate::cli::parse::{ParseArgs, ReportFormat};
use crate::error::Result;
use crate::models::StructureFill;
use crate::parsers;
use crate::upload;
use crate::utils::output;

use log::info;
use serde::Serialize;
use tabled::{Table, Tabled};

/// 晶格常数表格行
#[derive(Debug, Clone, Tabled)]
struct ParameterRow {
    #[tabled(rename = "Parameter")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// JSON 输出
#[derive(Debug, Serialize)]
struct ParseReport<'a> {
    file: &'a str,
    #[serde(flatten)]
    fill: &'a StructureFill,
    volume: Option<f64>,
}

/// 执行 parse 命令
pub fn execute(args: ParseArgs) -> Result<()> {
    let service = upload::service_for(args.upload.endpoint.as_deref())?;
    let file_name = upload::display_name(&args.file);
    info!("Reading '{}' via {}", args.file.display(), service.describe());

    let body = normalize_line_endings(&service.autofill(&args.file)?);
    let fill = parsers::parse_block(&file_name, &body)?;

    match args.format {
        ReportFormat::Json => {
            let report = ParseReport {
                file: &file_name,
                fill: &fill,
                volume: fill.lattice.volume(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        ReportFormat::Table => print_report(&file_name, &fill),
    }

    Ok(())
}

fn print_report(file_name: &str, fill: &StructureFill) {
    output::print_header(&format!("{} ({})", file_name, fill.format));

    if fill.lattice.is_empty() {
        output::print_warning("No lattice parameters found; text kept as atomic coordinates");
    } else {
        let rows = parameter_rows(fill);
        println!("{}", Table::new(&rows));

        if let Some(volume) = fill.lattice.volume() {
            output::print_info(&format!("Cell volume: {:.4}", volume));
        }
    }

    if !fill.coordinates.is_empty() {
        output::print_separator();
        println!("{}", fill.coordinates.trim_end());
        output::print_separator();
    }
}

fn parameter_rows(fill: &StructureFill) -> Vec<ParameterRow> {
    fill.lattice
        .iter()
        .map(|(key, value)| ParameterRow {
            key: key.to_string(),
            value: value.unwrap_or("-").to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeometryFormat, LatticeKey, LatticeParameters};

    #[test]
    fn test_parameter_rows_mark_missing() {
        let fill = StructureFill::new(
            GeometryFormat::Cif,
            LatticeParameters::empty().with(LatticeKey::A, "5.43"),
            "",
        );
        let rows = parameter_rows(&fill);

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].value, "5.43");
        assert_eq!(rows[5].key, "gamma");
        assert_eq!(rows[5].value, "-");
    }

    #[test]
    fn test_json_report_is_flat() {
        let fill = StructureFill::new(
            GeometryFormat::Other,
            LatticeParameters::from_values([2.0, 2.0, 2.0, 90.0, 90.0, 90.0]),
            "",
        );
        let report = ParseReport {
            file: "cell.txt",
            fill: &fill,
            volume: fill.lattice.volume(),
        };
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["format"], "other");
        assert_eq!(value["lattice"]["a"], "2");
        assert!((value["volume"].as_f64().unwrap() - 8.0).abs() < 1e-6);
    }
}
