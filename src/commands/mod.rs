//! # 命令执行模块
//!
//! 实现查看流程的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `plot/`, `utils/`
//! - 子模块: view

pub mod view;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令：先校验参数个数，再进入查看流程
pub fn run(cli: Cli) -> Result<()> {
    let path = cli.energy_file()?;
    view::execute(path)
}
