//! # 数据模型模块
//!
//! 定义能量沉积网格数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `plot/` 和 `commands/` 使用
//! - 子模块: grid

pub mod grid;

pub use grid::{EnergyGrid, GridSummary};
