//! # 热图渲染
//!
//! 使用 `plotters` 将能量网格绘制为热图，右侧附带色标。
//!
//! ## 功能
//! - 单元 (row, col) 覆盖 [col-0.5, col+0.5] × [row-0.5, row+0.5]，第 0 行位于底部
//! - 等比例显示：单元为正方形，图像居中
//! - 颜色按有限值的 [min, max] 线性归一化后查色图
//! - 非有限值单元不着色
//! - 渲染到内存 RGB 缓冲区，供显示窗口使用
//!
//! ## 依赖关系
//! - 被 `commands/view.rs` 调用
//! - 使用 `plot/colormap.rs`, `models/grid.rs`
//! - 使用 `plotters` 渲染图表

use crate::error::{Result, ViewerError};
use crate::models::EnergyGrid;
use crate::plot::{Colormap, Figure, Normalize};

use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;

const MARGIN: i32 = 15;
const X_LABEL_AREA: i32 = 45;
const Y_LABEL_AREA: i32 = 60;
const COLORBAR_AREA_WIDTH: i32 = 150;
const COLORBAR_GAP: i32 = 20;
const COLORBAR_LABEL_AREA: i32 = 75;
const COLORBAR_STEPS: usize = 256;

type CellChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// 渲染热图到 RGB 缓冲区 (每像素 3 字节，行优先)
pub fn render_rgb(grid: &EnergyGrid, figure: &Figure) -> Result<Vec<u8>> {
    let (width, height) = figure.pixel_size();
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_heatmap(&root, grid, figure)?;
        root.present()
            .map_err(|e| ViewerError::PlotError(e.to_string()))?;
    }
    Ok(buffer)
}

/// 归一化范围取有限值的 [min, max]；没有有限值时退化为 [0, 1]
pub fn normalization(grid: &EnergyGrid) -> Normalize {
    let (vmin, vmax) = grid.value_range().unwrap_or((0.0, 1.0));
    Normalize::new(vmin, vmax)
}

/// 网格在图中的坐标范围
pub fn image_extent(grid: &EnergyGrid) -> (Range<f64>, Range<f64>) {
    let cols = grid.cols() as f64;
    let rows = grid.rows() as f64;
    (-0.5..cols - 0.5, -0.5..rows - 0.5)
}

/// 在可用的绘图区内放下 rows × cols 个正方形单元，返回绘图区像素尺寸 (宽, 高)
pub fn fit_square_cells(max_width: i32, max_height: i32, rows: usize, cols: usize) -> (i32, i32) {
    let (max_width, max_height) = (max_width.max(1), max_height.max(1));
    let (rows, cols) = (rows.max(1) as f64, cols.max(1) as f64);
    let cell = (max_width as f64 / cols).min(max_height as f64 / rows);

    (
        ((cell * cols).round() as i32).clamp(1, max_width),
        ((cell * rows).round() as i32).clamp(1, max_height),
    )
}

/// 绘制完整热图：标题、图像、坐标轴和色标
pub fn draw_heatmap<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    grid: &EnergyGrid,
    figure: &Figure,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| ViewerError::PlotError(format!("{:?}", e)))?;

    let body = root
        .titled(&figure.title, ("sans-serif", 24).into_font())
        .map_err(|e| ViewerError::PlotError(format!("{:?}", e)))?;

    let (body_width, body_height) = body.dim_in_pixel();
    let (image_area, bar_area) = body.split_horizontally(body_width as i32 - COLORBAR_AREA_WIDTH);

    // 等比例：每个单元为正方形，图像居中，色标与图像等高
    let (area_width, _) = image_area.dim_in_pixel();
    let (plot_width, plot_height) = fit_square_cells(
        area_width as i32 - 2 * MARGIN - Y_LABEL_AREA,
        body_height as i32 - 2 * MARGIN - X_LABEL_AREA,
        grid.rows(),
        grid.cols(),
    );
    let chart_width = plot_width + 2 * MARGIN + Y_LABEL_AREA;
    let chart_height = plot_height + 2 * MARGIN + X_LABEL_AREA;
    let top = (body_height as i32 - chart_height) / 2;
    let left = (area_width as i32 - chart_width) / 2;

    let image_area = image_area.shrink((left, top), (chart_width, chart_height));
    let bar_area = bar_area.shrink((0, top), (COLORBAR_AREA_WIDTH, chart_height));

    let norm = normalization(grid);

    draw_image(&image_area, grid, figure, &norm)?;
    draw_colorbar(&bar_area, figure, &norm)?;

    Ok(())
}

fn draw_image<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    grid: &EnergyGrid,
    figure: &Figure,
    norm: &Normalize,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (x_range, y_range) = image_extent(grid);

    let mut chart = ChartBuilder::on(area)
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| ViewerError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(figure.x_label.as_str())
        .y_desc(figure.y_label.as_str())
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| ViewerError::PlotError(format!("{:?}", e)))?;

    paint_cells(&mut chart, grid, figure.colormap, norm)
}

/// 逐单元填充颜色
fn paint_cells<DB: DrawingBackend>(
    chart: &mut CellChart<'_, DB>,
    grid: &EnergyGrid,
    colormap: &Colormap,
    norm: &Normalize,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    chart
        .draw_series(
            grid.cells()
                .filter(|(_, _, v)| v.is_finite())
                .map(|(row, col, v)| {
                    let (x, y) = (col as f64, row as f64);
                    Rectangle::new(
                        [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                        colormap.color(norm.apply(v)).filled(),
                    )
                }),
        )
        .map_err(|e| ViewerError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    figure: &Figure,
    norm: &Normalize,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (lo, hi) = colorbar_bounds(norm);

    let mut bar = ChartBuilder::on(area)
        .margin_top(MARGIN)
        .margin_bottom(MARGIN + X_LABEL_AREA)
        .margin_left(COLORBAR_GAP)
        .margin_right(MARGIN)
        .right_y_label_area_size(COLORBAR_LABEL_AREA)
        .build_cartesian_2d(0.0..1.0, lo..hi)
        .map_err(|e| ViewerError::PlotError(format!("{:?}", e)))?
        .set_secondary_coord(0.0..1.0, lo..hi);

    // 刻度与标签画在色标右侧
    bar.configure_secondary_axes()
        .y_desc(figure.colorbar_label.as_str())
        .y_label_formatter(&format_tick)
        .label_style(("sans-serif", 13))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| ViewerError::PlotError(format!("{:?}", e)))?;

    paint_gradient(&mut bar, figure.colormap, lo, hi)?;

    bar.draw_series(std::iter::once(Rectangle::new(
        [(0.0, lo), (1.0, hi)],
        BLACK.stroke_width(1),
    )))
    .map_err(|e| ViewerError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

/// 色标数值范围；常数网格时向两侧各扩展 0.5
fn colorbar_bounds(norm: &Normalize) -> (f64, f64) {
    if norm.vmax > norm.vmin {
        (norm.vmin, norm.vmax)
    } else {
        (norm.vmin - 0.5, norm.vmin + 0.5)
    }
}

/// 沿 y 方向从 lo 到 hi 绘制色图渐变
fn paint_gradient<DB: DrawingBackend>(
    chart: &mut CellChart<'_, DB>,
    colormap: &Colormap,
    lo: f64,
    hi: f64,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let step = (hi - lo) / COLORBAR_STEPS as f64;

    chart
        .draw_series((0..COLORBAR_STEPS).map(|i| {
            let y0 = lo + step * i as f64;
            let t = (i as f64 + 0.5) / COLORBAR_STEPS as f64;
            Rectangle::new([(0.0, y0), (1.0, y0 + step)], colormap.color(t).filled())
        }))
        .map_err(|e| ViewerError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

fn format_tick(v: &f64) -> String {
    let a = v.abs();
    if a != 0.0 && !(1e-2..1e4).contains(&a) {
        format!("{:.1e}", v)
    } else {
        format!("{:.2}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::HOT;

    const W: u32 = 200;
    const H: u32 = 100;

    fn pixel(buffer: &[u8], x: u32, y: u32) -> RGBColor {
        let i = ((y * W + x) * 3) as usize;
        RGBColor(buffer[i], buffer[i + 1], buffer[i + 2])
    }

    /// 在无文字的图表上只绘制单元，便于按像素检查
    fn paint_plain(grid: &EnergyGrid) -> Vec<u8> {
        let mut buffer = vec![0u8; (W * H * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (W, H)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            let (x_range, y_range) = image_extent(grid);
            let mut chart = ChartBuilder::on(&root)
                .build_cartesian_2d(x_range, y_range)
                .unwrap();
            paint_cells(&mut chart, grid, &HOT, &normalization(grid)).unwrap();
            root.present().unwrap();
        }
        buffer
    }

    #[test]
    fn test_row_zero_is_at_bottom() {
        let grid = EnergyGrid::from_rows(vec![vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
        let norm = normalization(&grid);
        let buffer = paint_plain(&grid);

        // 四个象限的中心
        let bottom_left = pixel(&buffer, W / 4, 3 * H / 4);
        let bottom_right = pixel(&buffer, 3 * W / 4, 3 * H / 4);
        let top_left = pixel(&buffer, W / 4, H / 4);
        let top_right = pixel(&buffer, 3 * W / 4, H / 4);

        assert_eq!(bottom_left, HOT.color(norm.apply(0.0)));
        assert_eq!(bottom_right, HOT.color(norm.apply(1.0)));
        assert_eq!(top_left, HOT.color(norm.apply(2.0)));
        assert_eq!(top_right, HOT.color(norm.apply(3.0)));
    }

    #[test]
    fn test_non_finite_cells_left_blank() {
        let grid = EnergyGrid::from_rows(vec![vec![f64::NAN, 1.0], vec![2.0, 3.0]]).unwrap();
        let buffer = paint_plain(&grid);
        assert_eq!(pixel(&buffer, W / 4, 3 * H / 4), WHITE);
        assert_eq!(pixel(&buffer, 3 * W / 4, H / 4), HOT.color(1.0));
    }

    #[test]
    fn test_constant_grid_uses_colormap_bottom() {
        let grid = EnergyGrid::from_rows(vec![vec![5.0, 5.0], vec![5.0, 5.0]]).unwrap();
        let buffer = paint_plain(&grid);
        assert_eq!(pixel(&buffer, W / 2, H / 2), HOT.color(0.0));
    }

    #[test]
    fn test_gradient_runs_bottom_to_top() {
        let mut buffer = vec![0u8; (W * H * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (W, H)).into_drawing_area();
            let mut chart = ChartBuilder::on(&root)
                .build_cartesian_2d(0.0..1.0, 0.0..10.0)
                .unwrap();
            paint_gradient(&mut chart, &HOT, 0.0, 10.0).unwrap();
            root.present().unwrap();
        }
        let bottom = pixel(&buffer, W / 2, H - 3);
        let top = pixel(&buffer, W / 2, 2);
        assert!(bottom.0 < 60 && bottom.1 == 0 && bottom.2 == 0);
        assert!(top.0 == 255 && top.1 == 255 && top.2 > 200);
    }

    /// 在 figure 尺寸的缓冲区中查找某颜色像素的包围盒 (x0, y0, x1, y1)，只看 x < max_x
    fn bounding_box(
        buffer: &[u8],
        width: u32,
        color: RGBColor,
        max_x: u32,
    ) -> Option<(u32, u32, u32, u32)> {
        let mut bbox: Option<(u32, u32, u32, u32)> = None;
        for (i, p) in buffer.chunks_exact(3).enumerate() {
            let (x, y) = (i as u32 % width, i as u32 / width);
            if x >= max_x || RGBColor(p[0], p[1], p[2]) != color {
                continue;
            }
            bbox = Some(match bbox {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
        bbox
    }

    #[test]
    fn test_fit_square_cells() {
        // 单行：受宽度限制
        assert_eq!(fit_square_cells(560, 480, 1, 10), (560, 56));
        // 方阵：受高度限制
        assert_eq!(fit_square_cells(560, 480, 2, 2), (480, 480));
        assert_eq!(fit_square_cells(560, 480, 400, 400), (480, 480));
        // 高而窄
        assert_eq!(fit_square_cells(560, 480, 10, 1), (48, 480));
    }

    #[test]
    fn test_render_rgb_square_matrix() {
        let grid = crate::parsers::matrix::parse_matrix_content("1 2\n3 4\n", "test").unwrap();
        let figure = Figure::energy_deposition();
        let (width, _) = figure.pixel_size();

        let buffer = render_rgb(&grid, &figure).unwrap();
        assert_eq!(buffer.len(), 800 * 600 * 3);

        let image_right = width - COLORBAR_AREA_WIDTH as u32;
        let norm = normalization(&grid);
        for v in [1.0, 2.0, 3.0, 4.0] {
            let color = HOT.color(norm.apply(v));
            assert!(
                bounding_box(&buffer, width, color, image_right).is_some(),
                "cell with value {v} not painted"
            );
        }

        // 色标条带内应有 hot 渐变的红段与黄段颜色
        let strip: Vec<RGBColor> = buffer
            .chunks_exact(3)
            .enumerate()
            .filter(|(i, _)| (*i as u32 % width) >= image_right)
            .map(|(_, p)| RGBColor(p[0], p[1], p[2]))
            .collect();
        assert!(strip
            .iter()
            .any(|c| c.0 > 11 && c.0 < 255 && c.1 == 0 && c.2 == 0));
        assert!(strip
            .iter()
            .any(|c| c.0 == 255 && c.1 > 0 && c.1 < 255 && c.2 == 0));
    }

    #[test]
    fn test_render_rgb_cells_are_square() {
        let row: Vec<f64> = (0..10).map(|v| v as f64).collect();
        let grid = EnergyGrid::from_rows(vec![row]).unwrap();
        let figure = Figure::energy_deposition();
        let (width, _) = figure.pixel_size();

        let buffer = render_rgb(&grid, &figure).unwrap();
        let color = HOT.color(normalization(&grid).apply(5.0));
        let (x0, y0, x1, y1) =
            bounding_box(&buffer, width, color, width - COLORBAR_AREA_WIDTH as u32).unwrap();

        let cell_width = (x1 - x0 + 1) as i64;
        let cell_height = (y1 - y0 + 1) as i64;
        assert!(cell_width > 20);
        assert!(
            (cell_width - cell_height).abs() <= 2,
            "cell is {cell_width}x{cell_height} px"
        );
    }

    #[test]
    fn test_colorbar_bounds() {
        assert_eq!(colorbar_bounds(&Normalize::new(1.0, 4.0)), (1.0, 4.0));
        assert_eq!(colorbar_bounds(&Normalize::new(2.0, 2.0)), (1.5, 2.5));
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(&0.0), "0.00");
        assert_eq!(format_tick(&12.5), "12.50");
        assert_eq!(format_tick(&25000.0), "2.5e4");
        assert_eq!(format_tick(&0.0005), "5.0e-4");
    }
}
