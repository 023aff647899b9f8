//! # fill 命令实现
//!
//! 结构文件自动填充：上传预处理 → 按 `&` 拆分 → 逐子集解析 → 写入表单字段。
//!
//! ## 依赖关系
//! - 使用 `cli/fill.rs` 定义的参数
//! - 使用 `upload/`, `batch/router.rs`, `models/form.rs`
//! - 使用 `utils/output.rs`

use super::{emit_fields, field_layout};
use crate::batch::router::{self, SubsetOutcome};
use crate::batch::FillMode;
use crate::cli::fill::FillArgs;
use crate::error::Result;
use crate::models::FormFields;
use crate::upload;
use crate::utils::output;

use log::{info, warn};

/// 执行 fill 命令
pub fn execute(args: FillArgs) -> Result<()> {
    let service = upload::service_for(args.upload.endpoint.as_deref())?;
    let layout = field_layout(&args.fields);
    let mode = FillMode::from_subset(args.subset.map(|s| s as usize));
    let file_name = upload::display_name(&args.file);

    if args.output.is_some() {
        output::print_header(&format!("Autofilling structure from {}", file_name));
    }
    info!("Uploading '{}' via {}", args.file.display(), service.describe());

    let mut fields = FormFields::new();
    let outcomes = router::route_structure_upload(
        service.autofill(&args.file),
        &file_name,
        mode,
        &layout,
        &mut fields,
    );

    report_outcomes(&outcomes, args.output.is_some());
    emit_fields(&fields, args.output.as_deref())
}

/// 报告各子集结果；JSON 输出到 stdout 时只通过日志报告失败
pub(crate) fn report_outcomes(outcomes: &[SubsetOutcome], verbose: bool) {
    for outcome in outcomes {
        match outcome {
            SubsetOutcome::Failed { subset, message } => {
                warn!("subset {}: {}", subset, message);
            }
            SubsetOutcome::Filled {
                subset,
                format,
                constants,
            } if verbose => {
                output::print_subset(
                    *subset,
                    &format!("{} ({} of 6 lattice constants)", format, constants),
                );
            }
            SubsetOutcome::Datapoints { subset, lines } if verbose => {
                output::print_subset(*subset, &format!("{} datapoint line(s)", lines));
            }
            _ => {}
        }
    }

    let failed = outcomes.iter().filter(|o| o.is_failure()).count();
    if verbose && failed > 0 {
        output::print_warning(&format!(
            "{} of {} subset(s) failed; error text written to their fields",
            failed,
            outcomes.len()
        ));
    }
}
