//! # 上传预处理服务
//!
//! 结构文件和数据点文件在解析之前先经过"自动填充"预处理：
//! 去掉注释行与空行，返回纯文本。
//!
//! - `LocalPreprocessor`: 本地读取并预处理
//! - `HttpUploadService`: 以 multipart 表单上传到远端自动填充接口
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: local, http

pub mod http;
pub mod local;

pub use http::HttpUploadService;
pub use local::LocalPreprocessor;

use crate::error::Result;
use std::path::Path;

/// 上传预处理接口
pub trait UploadService: Sync {
    /// 上传文件并返回预处理后的文本
    fn autofill(&self, path: &Path) -> Result<String>;

    /// 用于日志的服务描述
    fn describe(&self) -> String;
}

/// 根据是否配置了远端地址选择服务
pub fn service_for(endpoint: Option<&str>) -> Result<Box<dyn UploadService>> {
    match endpoint {
        Some(url) if !url.trim().is_empty() => Ok(Box::new(HttpUploadService::new(url)?)),
        _ => Ok(Box::new(LocalPreprocessor::new())),
    }
}

/// 上传时展示的文件名
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_selection() {
        assert_eq!(service_for(None).unwrap().describe(), "local preprocessor");
        assert_eq!(service_for(Some("  ")).unwrap().describe(), "local preprocessor");
        assert!(service_for(Some("http://localhost:8000"))
            .unwrap()
            .describe()
            .contains("/materials/autofill-input-data"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/tmp/data/Si.cif")), "Si.cif");
    }
}
