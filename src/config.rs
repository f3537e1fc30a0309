//! Scene and window settings.
//!
//! The program takes no arguments and reads no files; `Config::default()`
//! is the whole configuration. Tests build their own to vary sizes and colors.

use crate::color;

/// An axis-aligned filled rectangle drawn every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectSpec {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Window title; empty by default since the window is borderless.
    pub title: String,
    /// Display resolution, also the framebuffer size.
    pub width: usize,
    pub height: usize,
    /// 0 leaves the frame rate uncapped.
    pub target_fps: usize,
    /// Grid line every `grid_spacing` pixels; 0 disables the grid.
    pub grid_spacing: u32,
    pub grid_color: u32,
    /// Color the buffer is cleared to between frames.
    pub background: u32,
    /// Drawn in order, on top of the grid.
    pub rects: Vec<RectSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: 800,
            height: 600,
            target_fps: 0,
            grid_spacing: 30,
            grid_color: color::GRID_GREY,
            background: color::BLACK,
            rects: vec![
                RectSpec { x: 100, y: 75, w: 50, h: 50, color: color::MAGENTA },
                RectSpec { x: 300, y: 200, w: 200, h: 120, color: color::TEAL },
            ],
        }
    }
}
