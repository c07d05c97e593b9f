//! # 显示窗口
//!
//! 使用 `minifb` 打开窗口显示渲染好的热图，阻塞直到窗口被关闭
//! （关闭按钮、`Esc` 或 `q`）。
//!
//! ## 依赖关系
//! - 被 `commands/view.rs` 调用
//! - 显示 `plot/heatmap.rs` 渲染的 RGB 缓冲区

use crate::error::{Result, ViewerError};
use minifb::{Key, Window, WindowOptions};

const TARGET_FPS: usize = 30;

/// 显示 RGB 缓冲区，阻塞至窗口关闭
pub fn show(rgb: &[u8], size: (u32, u32), title: &str) -> Result<()> {
    let (width, height) = (size.0 as usize, size.1 as usize);
    let frame = pack_rgb(rgb);

    if frame.len() != width * height {
        return Err(ViewerError::WindowError(format!(
            "frame has {} pixels, expected {}x{}",
            frame.len(),
            width,
            height
        )));
    }

    let mut window = Window::new(title, width, height, WindowOptions::default())
        .map_err(|e| ViewerError::WindowError(e.to_string()))?;
    window.set_target_fps(TARGET_FPS);

    while window.is_open() && !window.is_key_down(Key::Escape) && !window.is_key_down(Key::Q) {
        window
            .update_with_buffer(&frame, width, height)
            .map_err(|e| ViewerError::WindowError(e.to_string()))?;
    }

    Ok(())
}

/// RGB888 字节流打包为 minifb 使用的 0RGB u32 像素
pub fn pack_rgb(rgb: &[u8]) -> Vec<u32> {
    rgb.chunks_exact(3)
        .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32)
        .collect()
}
