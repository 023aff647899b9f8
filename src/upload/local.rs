//! # 本地预处理
//!
//! 读取 UTF-8 文本，删除 `#` 注释行与空行，剩余行以 `\n` 连接。
//!
//! ## 依赖关系
//! - 被 `upload/mod.rs` 使用

use super::UploadService;
use crate::batch::splitter::normalize_line_endings;
use crate::error::{LatfillError, Result};

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static COMMENT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#").unwrap());

/// 本地预处理器
#[derive(Debug, Default, Clone)]
pub struct LocalPreprocessor;

impl LocalPreprocessor {
    pub fn new() -> Self {
        LocalPreprocessor
    }
}

/// 删除注释行与空行
pub fn strip_comments(content: &str) -> String {
    normalize_line_endings(content)
        .split('\n')
        .filter(|line| !line.is_empty() && !COMMENT_LINE.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
}

impl UploadService for LocalPreprocessor {
    fn autofill(&self, path: &Path) -> Result<String> {
        if !path.is_file() {
            return Err(LatfillError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| LatfillError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(strip_comments(&content))
    }

    fn describe(&self) -> String {
        "local preprocessor".to_string()
    }
}
