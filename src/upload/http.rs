//! # 远端自动填充接口
//!
//! `POST {endpoint}/materials/autofill-input-data`，multipart 字段名为 `file`，
//! 成功时响应体即为预处理后的文本。
//!
//! ## 依赖关系
//! - 被 `upload/mod.rs` 使用
//! - 使用 `reqwest` 阻塞客户端

use super::UploadService;
use crate::error::{LatfillError, Result};

use log::debug;
use reqwest::blocking::{multipart, Client};
use std::path::Path;
use std::time::Duration;

const AUTOFILL_PATH: &str = "/materials/autofill-input-data";

/// 远端上传服务
pub struct HttpUploadService {
    url: String,
    client: Client,
}

impl HttpUploadService {
    /// 以服务根地址创建，例如 `https://example.org`
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| LatfillError::UploadFailed {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        Ok(HttpUploadService {
            url: autofill_url(endpoint),
            client,
        })
    }

    fn failure(&self, reason: impl ToString) -> LatfillError {
        LatfillError::UploadFailed {
            endpoint: self.url.clone(),
            reason: reason.to_string(),
        }
    }
}

/// 拼接自动填充接口地址
pub fn autofill_url(endpoint: &str) -> String {
    format!("{}{}", endpoint.trim().trim_end_matches('/'), AUTOFILL_PATH)
}

impl UploadService for HttpUploadService {
    fn autofill(&self, path: &Path) -> Result<String> {
        if !path.is_file() {
            return Err(LatfillError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let form = multipart::Form::new()
            .file("file", path)
            .map_err(|e| LatfillError::FileReadError {
                path: path.display().to_string(),
                source: e,
            })?;

        debug!("POST {} ({})", self.url, path.display());

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .map_err(|e| self.failure(e))?;

        let status = response.status();
        let body = response.text().map_err(|e| self.failure(e))?;

        if !status.is_success() {
            return Err(self.failure(format!("HTTP {}: {}", status, body.trim())));
        }

        Ok(body)
    }

    fn describe(&self) -> String {
        format!("upload service at {}", self.url)
    }
}
