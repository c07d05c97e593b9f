//! # 统一错误处理模块
//!
//! 定义 edepview 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 参数个数错误时的固定提示
pub const USAGE_MESSAGE: &str = "Please provide the energy deposition file";

/// edepview 统一错误类型
#[derive(Error, Debug)]
pub enum ViewerError {
    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Usage(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse matrix file: {path} (line {line})\nReason: {reason}")]
    ParseError {
        path: String,
        line: usize,
        reason: String,
    },

    #[error(
        "Wrong number of columns at line {line} in {path}: expected {expected}, found {found}"
    )]
    RaggedRow {
        path: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("No data rows found in: {path}")]
    EmptyMatrix { path: String },

    #[error("Invalid grid shape: {0}")]
    InvalidShape(String),

    // ─────────────────────────────────────────────────────────────
    // 绘图与显示错误
    // ─────────────────────────────────────────────────────────────
    #[error("Plotting failed: {0}")]
    PlotError(String),

    #[error("Display window error: {0}")]
    WindowError(String),
}

impl ViewerError {
    /// 参数个数不为 1 时的用法错误
    pub fn usage() -> Self {
        ViewerError::Usage(USAGE_MESSAGE.to_string())
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ViewerError>;
