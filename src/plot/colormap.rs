//! # 色图
//!
//! 分段线性色图：每个通道由若干 (位置, 强度) 锚点定义，锚点之间线性插值。
//!
//! ## 依赖关系
//! - 被 `plot/heatmap.rs` 使用
//! - 使用 `plotters` 的 RGBColor

use plotters::style::RGBColor;

/// 分段线性色图
#[derive(Debug)]
pub struct Colormap {
    pub name: &'static str,
    red: &'static [(f64, f64)],
    green: &'static [(f64, f64)],
    blue: &'static [(f64, f64)],
}

/// "hot" 色图：黑 → 红 → 黄 → 白
pub static HOT: Colormap = Colormap {
    name: "hot",
    red: &[(0.0, 0.0416), (0.365079, 1.0), (1.0, 1.0)],
    green: &[(0.0, 0.0), (0.365079, 0.0), (0.746032, 1.0), (1.0, 1.0)],
    blue: &[(0.0, 0.0), (0.746032, 0.0), (1.0, 1.0)],
};

impl Colormap {
    /// 将 [0, 1] 内的位置映射为颜色，超出部分截断
    pub fn color(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        RGBColor(
            to_u8(channel(self.red, t)),
            to_u8(channel(self.green, t)),
            to_u8(channel(self.blue, t)),
        )
    }
}

fn channel(anchors: &[(f64, f64)], t: f64) -> f64 {
    for pair in anchors.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if t <= x1 {
            if x1 <= x0 {
                return y1;
            }
            return y0 + (y1 - y0) * (t - x0) / (x1 - x0);
        }
    }
    anchors.last().map(|&(_, y)| y).unwrap_or(0.0)
}

fn to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// 线性归一化：把数据值映射到 [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    pub vmin: f64,
    pub vmax: f64,
}

impl Normalize {
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Self { vmin, vmax }
    }

    /// vmin == vmax 时所有值映射到 0
    pub fn apply(&self, value: f64) -> f64 {
        if self.vmax > self.vmin {
            (value - self.vmin) / (self.vmax - self.vmin)
        } else {
            0.0
        }
    }
}
