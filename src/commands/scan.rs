//! # scan 命令实现
//!
//! 批量扫描结构文件，每个文件按全局模式拆分子集，逐块解析后汇总。
//!
//! ## 功能
//! - 收集匹配文件（支持递归）
//! - 并行解析，文件之间互不共享状态
//! - 表格汇总，可选导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 使用 `batch/`, `parsers/`, `upload/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, FileCollector, FillMode, ParseBatch};
use crate::cli::scan::ScanArgs;
use crate::error::{LatfillError, Result};
use crate::models::{LatticeKey, StructureFill};
use crate::parsers;
use crate::upload::{self, UploadService};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 汇总表格行，一个子集一行
#[derive(Debug, Clone, Tabled)]
struct ScanRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Subset")]
    subset: usize,
    #[tabled(rename = "Format")]
    format: String,
    #[tabled(rename = "a")]
    a: String,
    #[tabled(rename = "b")]
    b: String,
    #[tabled(rename = "c")]
    c: String,
    #[tabled(rename = "α")]
    alpha: String,
    #[tabled(rename = "β")]
    beta: String,
    #[tabled(rename = "γ")]
    gamma: String,
    #[tabled(rename = "V")]
    volume: String,
    #[tabled(rename = "Note")]
    note: String,
}

impl ScanRow {
    fn from_fill(file: &str, subset: usize, fill: &StructureFill) -> Self {
        let value = |key| fill.lattice.get(key).unwrap_or("").to_string();
        let note = if fill.lattice.is_empty() {
            "coordinates only".to_string()
        } else if !fill.lattice.is_complete() {
            format!("{} of 6 constants", fill.lattice.count())
        } else {
            String::new()
        };

        ScanRow {
            file: file.to_string(),
            subset,
            format: fill.format.to_string(),
            a: value(LatticeKey::A),
            b: value(LatticeKey::B),
            c: value(LatticeKey::C),
            alpha: value(LatticeKey::Alpha),
            beta: value(LatticeKey::Beta),
            gamma: value(LatticeKey::Gamma),
            volume: fill
                .lattice
                .volume()
                .map(|v| format!("{:.4}", v))
                .unwrap_or_default(),
            note,
        }
    }

    fn failed(file: &str, subset: usize, message: String) -> Self {
        ScanRow {
            file: file.to_string(),
            subset,
            format: String::new(),
            a: String::new(),
            b: String::new(),
            c: String::new(),
            alpha: String::new(),
            beta: String::new(),
            gamma: String::new(),
            volume: String::new(),
            note: message,
        }
    }

    fn record(&self) -> [String; 11] {
        [
            self.file.clone(),
            self.subset.to_string(),
            self.format.clone(),
            self.a.clone(),
            self.b.clone(),
            self.c.clone(),
            self.alpha.clone(),
            self.beta.clone(),
            self.gamma.clone(),
            self.volume.clone(),
            self.note.clone(),
        ]
    }
}

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Scanning structure files");

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect()?;

    if files.is_empty() {
        return Err(LatfillError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }

    let service = upload::service_for(args.upload.endpoint.as_deref())?;
    output::print_info(&format!(
        "Found {} file(s); reading via {}",
        files.len(),
        service.describe()
    ));

    let result = BatchRunner::new(args.jobs).run(files, |path| scan_file(service.as_ref(), path))?;

    let rows: Vec<ScanRow> = result
        .outputs
        .iter()
        .flat_map(|(_, rows)| rows.iter().cloned())
        .collect();

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
    }

    for (path, err) in &result.failures {
        output::print_error(&format!("{}: {}", path, err));
    }

    if let Some(ref csv_path) = args.output {
        save_rows_csv(&rows, csv_path)?;
        output::print_success(&format!("Summary saved to '{}'", csv_path.display()));
    }

    output::print_done(&format!(
        "Scanned {} file(s), {} subset(s), {} failed file(s)",
        result.total(),
        rows.len(),
        result.failures.len()
    ));

    Ok(())
}

/// 解析单个文件的全部子集；上传失败视为整个文件失败
fn scan_file(service: &dyn UploadService, path: &Path) -> Result<Vec<ScanRow>> {
    let file_name = upload::display_name(path);
    let body = service.autofill(path)?;

    Ok(scan_body(&file_name, &body))
}

fn scan_body(file_name: &str, body: &str) -> Vec<ScanRow> {
    ParseBatch::from_upload(body, FillMode::Global)
        .into_iter()
        .map(
            |block| match parsers::parse_block(file_name, &block.text) {
                Ok(fill) => ScanRow::from_fill(file_name, block.subset, &fill),
                Err(e) => ScanRow::failed(file_name, block.subset, e.to_string()),
            },
        )
        .collect()
}

/// 保存汇总到 CSV
fn save_rows_csv(rows: &[ScanRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record([
        "file", "subset", "format", "a", "b", "c", "alpha", "beta", "gamma", "volume", "note",
    ])?;

    for row in rows {
        wtr.write_record(row.record())?;
    }

    wtr.flush().map_err(|e| LatfillError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_body_rows_per_subset() {
        let body = "lattice_vector 3 0 0\nlattice_vector 0 3 0\nlattice_vector 0 0 3\n\
                    &\nSi 0.0 0.0 0.0\n\
                    &\nlattice_vector 1 0 0\n";
        let rows = scan_body("mixed.in", body);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].format, "aims");
        assert_eq!(rows[0].a, "3");
        assert_eq!(rows[0].volume, "27.0000");
        assert_eq!(rows[1].format, "other");
        assert_eq!(rows[1].note, "coordinates only");
        assert_eq!(rows[2].subset, 3);
        assert!(rows[2].note.starts_with("Unable to find three lattice vectors"));
    }

    #[test]
    fn test_scan_partial_cif_note() {
        let rows = scan_body("x.cif", "_cell_length_a 4.0\n_cell_length_b 4.0\n");
        assert_eq!(rows[0].note, "2 of 6 constants");
        assert_eq!(rows[0].volume, "");
    }

    #[test]
    fn test_save_rows_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        let rows = scan_body("cell.txt", "a 1\nb 1\nc 1\nalpha 90\nbeta 90\ngamma 90\n");

        save_rows_csv(&rows, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("file,subset,format,a,b,c,alpha,beta,gamma,volume,note")
        );
        assert_eq!(
            lines.next(),
            Some("cell.txt,1,other,1,1,1,90,90,90,1.0000,")
        );
    }

    #[test]
    fn test_scan_file_with_local_service() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Si.cif");
        fs::write(
            &path,
            "# Si\n_cell_length_a 5.43\n_cell_length_b 5.43\n_cell_length_c 5.43\n\
             _cell_angle_alpha 90\n_cell_angle_beta 90\n_cell_angle_gamma 90\n",
        )
        .unwrap();

        let service = upload::LocalPreprocessor::new();
        let rows = scan_file(&service, &path).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].format, "cif");
        assert_eq!(rows[0].file, "Si.cif");
        assert_eq!(rows[0].note, "");
    }
}
