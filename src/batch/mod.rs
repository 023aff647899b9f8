//! # 批量处理模块
//!
//! 一次上传可包含多个子集，多个文件也可一次扫描。
//!
//! ## 功能
//! - 多子集文本拆分与行尾统一 (splitter)
//! - 解析结果路由到表单字段 (router)
//! - 收集匹配文件列表 (collector)
//! - 并行处理与进度反馈 (runner)
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `parsers/`、`models/`
//! - 使用 `rayon` 进行并行处理，`indicatif` 显示进度

pub mod collector;
pub mod router;
pub mod runner;
pub mod splitter;

pub use collector::FileCollector;
pub use runner::BatchRunner;
pub use splitter::{FillMode, ParseBatch};
