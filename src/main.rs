//! # edepview - 二维能量沉积热图查看器
//!
//! 读取外部模拟输出的能量沉积矩阵（空白分隔文本），以 "hot" 色图渲染为热图，
//! 并在阻塞式窗口中显示。
//!
//! ## 用法
//! ```text
//! edepview <ENERGY_DEPO_FILE>
//! ```
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (查看流程)
//!   │     ├── parsers/   (矩阵文本解析)
//!   │     ├── models/    (能量网格模型)
//!   │     └── plot/      (色图、渲染、显示窗口)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod plot;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
