//! # 热图绘制模块
//!
//! 将能量沉积网格渲染为带色标的热图并显示。
//!
//! ## 子模块
//! - `colormap`: "hot" 色图与线性归一化
//! - `heatmap`: 使用 `plotters` 渲染热图
//! - `window`: 使用 `minifb` 显示阻塞式窗口
//!
//! ## 依赖关系
//! - 被 `commands/view.rs` 使用
//! - 使用 `models/grid.rs`

pub mod colormap;
pub mod heatmap;
pub mod window;

pub use colormap::{Colormap, Normalize, HOT};

/// 图像描述：尺寸、色图与各处标注
#[derive(Debug, Clone)]
pub struct Figure {
    /// 图像尺寸 (英寸)
    pub size_inches: (f64, f64),
    pub dpi: u32,
    pub colormap: &'static Colormap,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub colorbar_label: String,
}

impl Figure {
    /// 能量沉积热图的默认设置
    pub fn energy_deposition() -> Self {
        Self {
            size_inches: (8.0, 6.0),
            dpi: 100,
            colormap: &HOT,
            title: "2D Energy Deposition Heatmap".to_string(),
            x_label: "X Position".to_string(),
            y_label: "Y Position".to_string(),
            colorbar_label: "Energy Deposited (MeV)".to_string(),
        }
    }

    /// 像素尺寸 (宽, 高)
    pub fn pixel_size(&self) -> (u32, u32) {
        let (w, h) = self.size_inches;
        (
            (w * self.dpi as f64).round() as u32,
            (h * self.dpi as f64).round() as u32,
        )
    }
}
