//! # datapoints 命令实现
//!
//! 数据点文件自动填充：上传预处理 → 按 `&` 拆分 → 写入 datapoints 字段。
//!
//! ## 依赖关系
//! - 使用 `cli/datapoints.rs` 定义的参数
//! - 使用 `upload/`, `batch/router.rs`

use super::fill::report_outcomes;
use super::{emit_fields, field_layout};
use crate::batch::router;
use crate::batch::FillMode;
use crate::cli::datapoints::DatapointsArgs;
use crate::error::Result;
use crate::models::FormFields;
use crate::upload;
use crate::utils::output;

use log::info;

/// 执行 datapoints 命令
pub fn execute(args: DatapointsArgs) -> Result<()> {
    let service = upload::service_for(args.upload.endpoint.as_deref())?;
    let layout = field_layout(&args.fields);
    let mode = FillMode::from_subset(args.subset.map(|s| s as usize));
    let file_name = upload::display_name(&args.file);

    if args.output.is_some() {
        output::print_header(&format!("Autofilling datapoints from {}", file_name));
    }
    info!("Uploading '{}' via {}", args.file.display(), service.describe());

    let mut fields = FormFields::new();
    let outcomes = router::route_datapoints_upload(
        service.autofill(&args.file),
        &file_name,
        mode,
        args.subsets.map(|n| n as usize),
        &layout,
        &mut fields,
    );

    report_outcomes(&outcomes, args.output.is_some());
    emit_fields(&fields, args.output.as_deref())
}
