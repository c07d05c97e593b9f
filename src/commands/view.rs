//! # 热图查看流程
//!
//! 加载 → 统计 → 渲染 → 显示。
//!
//! ## 功能
//! - 解析能量沉积矩阵文件
//! - 终端打印网格统计表格
//! - 渲染 8×6 英寸热图并在阻塞式窗口中显示
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `parsers/matrix.rs`, `plot/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::error::Result;
use crate::models::{EnergyGrid, GridSummary};
use crate::parsers;
use crate::plot::{heatmap, window, Figure};
use crate::utils::{output, progress};

use std::path::Path;
use tabled::{Table, Tabled};

/// 统计表格行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Property")]
    property: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行查看
pub fn execute(path: &Path) -> Result<()> {
    output::print_header("Energy Deposition Heatmap");

    let grid = load(path)?;
    let summary = grid.summary();
    print_summary(&summary);

    if summary.non_finite > 0 {
        output::print_warning(&format!(
            "{} non-finite cells will be left blank",
            summary.non_finite
        ));
    }

    let figure = Figure::energy_deposition();
    let (width, height) = figure.pixel_size();
    output::print_info(&format!(
        "Rendering {}x{} px heatmap with '{}' colormap",
        width, height, figure.colormap.name
    ));
    let pixels = heatmap::render_rgb(&grid, &figure)?;

    output::print_info("Close the window (or press Esc / q) to exit");
    window::show(&pixels, figure.pixel_size(), &figure.title)?;

    output::print_success("Viewer closed");
    Ok(())
}

fn load(path: &Path) -> Result<EnergyGrid> {
    let spinner = progress::create_spinner(&format!("Loading '{}'...", path.display()));
    let result = parsers::parse_matrix_file(path);
    spinner.finish_and_clear();

    let grid = result?;
    let (rows, cols) = grid.shape();
    output::print_success(&format!(
        "Loaded {} x {} grid from '{}'",
        rows,
        cols,
        path.display()
    ));
    Ok(grid)
}

fn summary_rows(summary: &GridSummary) -> Vec<SummaryRow> {
    let (min, max) = match summary.range {
        Some((lo, hi)) => (format!("{:.6e}", lo), format!("{:.6e}", hi)),
        None => ("-".to_string(), "-".to_string()),
    };

    vec![
        SummaryRow {
            property: "Rows (Y)".to_string(),
            value: summary.rows.to_string(),
        },
        SummaryRow {
            property: "Columns (X)".to_string(),
            value: summary.cols.to_string(),
        },
        SummaryRow {
            property: "Min (MeV)".to_string(),
            value: min,
        },
        SummaryRow {
            property: "Max (MeV)".to_string(),
            value: max,
        },
        SummaryRow {
            property: "Total (MeV)".to_string(),
            value: format!("{:.6e}", summary.total),
        },
        SummaryRow {
            property: "Non-finite cells".to_string(),
            value: summary.non_finite.to_string(),
        },
    ]
}

/// 打印网格统计表格
fn print_summary(summary: &GridSummary) {
    let table = Table::new(summary_rows(summary));
    println!("{}", table);
}
