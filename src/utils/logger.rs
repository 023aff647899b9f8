//! # 终端日志
//!
//! `log` 门面的最小实现：按级别着色后输出到 stderr，
//! 标签样式与 `utils/output.rs` 一致。
//!
//! ## 依赖关系
//! - 被 `main.rs` 初始化
//! - 使用 `utils/output.rs`

use super::output;
use log::{LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: TerminalLogger = TerminalLogger;

struct TerminalLogger;

/// 安装全局日志器
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// 由 `-v` 次数和 `LATFILL_LOG` 决定日志级别，显式的级别名优先
pub fn level_from(verbose: u8, name: Option<&str>) -> LevelFilter {
    if let Some(level) = name.and_then(|s| s.trim().parse::<LevelFilter>().ok()) {
        return level;
    }

    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

impl log::Log for TerminalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {}", output::level_tag(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}
