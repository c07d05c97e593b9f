//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数
//! - `ENERGY_DEPO_FILE`: 能量沉积矩阵文件（必须且只能提供一个）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数校验结果传递给 `commands/`

use crate::error::{Result, ViewerError};
use clap::Parser;
use std::path::{Path, PathBuf};

/// edepview - 二维能量沉积热图查看器
#[derive(Parser, Debug)]
#[command(name = "edepview")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Display a 2D energy deposition matrix as a heatmap", long_about = None)]
pub struct Cli {
    /// Path to the whitespace-delimited energy deposition file
    // 个数由 `Cli::energy_file` 校验
    #[arg(value_name = "ENERGY_DEPO_FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// 返回唯一的输入文件路径；个数不为 1 时返回用法错误
    pub fn energy_file(&self) -> Result<&Path> {
        match self.files.as_slice() {
            [path] => Ok(path.as_path()),
            _ => Err(ViewerError::usage()),
        }
    }
}
