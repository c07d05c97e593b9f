//! # 数值矩阵文本解析器
//!
//! 解析空白分隔的二维数值矩阵：每行一个网格行，行内以任意空白分隔。
//!
//! ## 格式
//! ```text
//! # 注释行（可选）
//! 0 0.125 1.5e-3
//! 0 2.75  0
//! ```
//! - 空行跳过，`#` 之后的内容视为注释
//! - 允许行尾空白
//! - 第一行数据确定列数，后续行必须一致
//!
//! ## 依赖关系
//! - 被 `commands/view.rs` 调用
//! - 使用 `models/grid.rs`

use crate::error::{Result, ViewerError};
use crate::models::EnergyGrid;
use std::fs;
use std::io;
use std::path::Path;

/// 解析矩阵文件
pub fn parse_matrix_file(path: &Path) -> Result<EnergyGrid> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ViewerError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => ViewerError::FileReadError {
            path: path.display().to_string(),
            source: e,
        },
    })?;

    parse_matrix_content(&content, &path.display().to_string())
}

/// 解析矩阵文本内容
pub fn parse_matrix_content(content: &str, source: &str) -> Result<EnergyGrid> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = match raw_line.find('#') {
            Some(pos) => &raw_line[..pos],
            None => raw_line,
        };

        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| ViewerError::ParseError {
                    path: source.to_string(),
                    line: line_no,
                    reason: format!("could not convert '{}' to float", token),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(ViewerError::RaggedRow {
                    path: source.to_string(),
                    line: line_no,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }

        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ViewerError::EmptyMatrix {
            path: source.to_string(),
        });
    }

    EnergyGrid::from_rows(rows)
}
