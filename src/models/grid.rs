//! # 能量沉积网格模型
//!
//! 行对应 Y 位置，列对应 X 位置，按行优先顺序存储。
//!
//! ## 依赖关系
//! - 被 `parsers/matrix.rs` 构建
//! - 被 `plot/heatmap.rs` 和 `commands/view.rs` 读取

use crate::error::{Result, ViewerError};

/// 二维能量沉积网格 (MeV)
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyGrid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

/// 网格统计信息
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSummary {
    pub rows: usize,
    pub cols: usize,
    /// 有限值的 (最小, 最大)；全部为非有限值时为 None
    pub range: Option<(f64, f64)>,
    /// 有限值之和
    pub total: f64,
    pub non_finite: usize,
}

impl EnergyGrid {
    /// 由逐行数据构建网格，要求每行列数一致且非空
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => {
                return Err(ViewerError::InvalidShape(
                    "grid must have at least one row and one column".to_string(),
                ))
            }
        };

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(ViewerError::InvalidShape(format!(
                "row {} has {} columns, expected {}",
                idx,
                row.len(),
                cols
            )));
        }

        let n_rows = rows.len();
        let values = rows.into_iter().flatten().collect();

        Ok(Self {
            rows: n_rows,
            cols,
            values,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (行数, 列数)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[cfg(test)]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    #[cfg(test)]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.values[start..start + self.cols])
        } else {
            None
        }
    }

    /// 遍历所有单元 (row, col, value)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let cols = self.cols;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i / cols, i % cols, v))
    }

    /// 有限值的取值范围
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    pub fn summary(&self) -> GridSummary {
        let total = self.values.iter().filter(|v| v.is_finite()).sum();
        let non_finite = self.values.iter().filter(|v| !v.is_finite()).count();

        GridSummary {
            rows: self.rows,
            cols: self.cols,
            range: self.value_range(),
            total,
            non_finite,
        }
    }
}
