//! # 多子集文本拆分
//!
//! 上传服务返回的文本可包含多个子集，以 `&` 分隔：
//! ```text
//! lattice_vector ...   <- 子集 1
//! &
//! _cell_length_a ...   <- 子集 2
//! ```
//!
//! ## 依赖关系
//! - 被 `batch/router.rs` 和 `commands/scan.rs` 使用
//! - 无外部模块依赖

/// 填充模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// 一次填充全部子集，按 `&` 拆分
    Global,
    /// 只填充指定子集（从 1 开始），不拆分
    Single(usize),
}

impl FillMode {
    /// 由可选的子集编号构造
    pub fn from_subset(subset: Option<usize>) -> Self {
        match subset {
            Some(i) => FillMode::Single(i),
            None => FillMode::Global,
        }
    }

    /// 出错时写入的目标子集
    pub fn fallback_subset(&self) -> usize {
        match self {
            FillMode::Global => 1,
            FillMode::Single(i) => *i,
        }
    }
}

/// 一个子集对应的文本块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetBlock {
    /// 目标子集编号（从 1 开始）
    pub subset: usize,
    pub text: String,
}

/// 一次上传拆分出的有序文本块
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseBatch {
    blocks: Vec<SubsetBlock>,
}

impl ParseBatch {
    /// 按填充模式拆分上传文本
    pub fn from_upload(text: &str, mode: FillMode) -> Self {
        let normalized = normalize_line_endings(text);

        let blocks = match mode {
            FillMode::Single(subset) => vec![SubsetBlock {
                subset,
                text: normalized,
            }],
            FillMode::Global => split_subsets(&normalized),
        };

        ParseBatch { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl IntoIterator for ParseBatch {
    type Item = SubsetBlock;
    type IntoIter = std::vec::IntoIter<SubsetBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

/// 统一换行符：`\r\n` 与单独的 `\r` 都转为 `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// 去掉块首的一个换行
pub fn strip_leading_newline(block: &str) -> &str {
    block.strip_prefix('\n').unwrap_or(block)
}

/// 按 `&` 拆分，跳过空块，保留原始序号
pub fn split_subsets(text: &str) -> Vec<SubsetBlock> {
    text.split('&')
        .enumerate()
        .filter(|(_, block)| !block.is_empty())
        .map(|(i, block)| SubsetBlock {
            subset: i + 1,
            text: strip_leading_newline(block).to_string(),
        })
        .collect()
}
