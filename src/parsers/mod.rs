//! # 解析器模块
//!
//! 提供能量沉积矩阵文本文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: matrix

pub mod matrix;

pub use matrix::parse_matrix_file;
