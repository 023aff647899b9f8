//! # 终端输出
//!
//! 命令输出与日志共用同一套状态标签，保证 `[WARN]` 等前缀在两处样式一致。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块与 `utils/logger.rs` 使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 60;

/// 状态标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Ok,
    Err,
    Warn,
    Info,
    Done,
    Debug,
    Trace,
}

impl Tag {
    pub fn label(self) -> &'static str {
        match self {
            Tag::Ok => "[OK]",
            Tag::Err => "[ERR]",
            Tag::Warn => "[WARN]",
            Tag::Info => "[*]",
            Tag::Done => "[DONE]",
            Tag::Debug => "[DBG]",
            Tag::Trace => "[TRC]",
        }
    }

    pub fn paint(self) -> ColoredString {
        let label = self.label();
        match self {
            Tag::Ok | Tag::Done => label.green().bold(),
            Tag::Err => label.red().bold(),
            Tag::Warn => label.yellow().bold(),
            Tag::Info => label.blue().bold(),
            Tag::Debug | Tag::Trace => label.dimmed(),
        }
    }
}

impl From<log::Level> for Tag {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Tag::Err,
            log::Level::Warn => Tag::Warn,
            log::Level::Info => Tag::Info,
            log::Level::Debug => Tag::Debug,
            log::Level::Trace => Tag::Trace,
        }
    }
}

/// 日志记录使用的彩色标签
pub fn level_tag(level: log::Level) -> ColoredString {
    Tag::from(level).paint()
}

pub fn print_success(msg: &str) {
    println!("{} {}", Tag::Ok.paint(), msg);
}

/// 错误写到 stderr，stdout 只留给 JSON 结果
pub fn print_error(msg: &str) {
    eprintln!("{} {}", Tag::Err.paint(), msg);
}

pub fn print_warning(msg: &str) {
    println!("{} {}", Tag::Warn.paint(), msg);
}

pub fn print_info(msg: &str) {
    println!("{} {}", Tag::Info.paint(), msg);
}

pub fn print_done(msg: &str) {
    println!("{} {}", Tag::Done.paint(), msg);
}

/// 单个子集的填充结果，例如 `[OK] subset 2 -> cif (6 of 6 lattice constants)`
pub fn print_subset(subset: usize, detail: &str) {
    println!(
        "{} {} {} {}",
        Tag::Ok.paint(),
        format!("subset {}", subset).dimmed(),
        "->".cyan(),
        detail
    );
}

/// 文件或批次的标题栏
pub fn print_header(title: &str) {
    println!("\n{}", rule());
    println!("  {}", title.bold());
    println!("{}\n", rule());
}

/// 晶格常数表格前后的分隔线
pub fn print_separator() {
    println!("{}", rule());
}

fn rule() -> ColoredString {
    "─".repeat(RULE_WIDTH).dimmed()
}
