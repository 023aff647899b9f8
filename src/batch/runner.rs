//! # 批量执行器
//!
//! 并行解析多个结构文件。各文件的解析互不共享状态。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{LatfillError, Result};
use crate::utils::progress;

use rayon::prelude::*;
use std::path::PathBuf;

/// 批量处理结果统计
#[derive(Debug)]
pub struct BatchResult<T> {
    /// 成功结果，保持输入顺序
    pub outputs: Vec<(PathBuf, T)>,
    /// 失败详情 (文件路径, 错误信息)
    pub failures: Vec<(String, String)>,
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        BatchResult {
            outputs: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> BatchResult<T> {
    /// 合并单个文件的处理结果
    pub fn merge(&mut self, path: PathBuf, result: Result<T>) {
        match result {
            Ok(output) => self.outputs.push((path, output)),
            Err(e) => self
                .failures
                .push((path.display().to_string(), e.to_string())),
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.outputs.len() + self.failures.len()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 表示使用全部 CPU）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行处理文件列表
    pub fn run<T, F>(&self, files: Vec<PathBuf>, processor: F) -> Result<BatchResult<T>>
    where
        T: Send,
        F: Fn(&PathBuf) -> Result<T> + Sync + Send,
    {
        let pb = progress::scan_progress_bar(files.len(), "Scanning");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| LatfillError::Other(format!("failed to start thread pool: {}", e)))?;

        let results: Vec<(PathBuf, Result<T>)> = pool.install(|| {
            files
                .into_par_iter()
                .map(|file| {
                    let result = processor(&file);
                    pb.inc(1);
                    (file, result)
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut batch_result = BatchResult::default();
        for (path, result) in results {
            batch_result.merge(path, result);
        }

        Ok(batch_result)
    }
}
