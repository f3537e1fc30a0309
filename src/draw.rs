// Software drawing into a FrameBuffer.
// Every shape goes through `set_pixel`, so off-screen parts are dropped
// there instead of being clipped up front.

use crate::types::FrameBuffer;

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn set_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    let width = fb.width();
    if x >= width || y >= fb.height() {
        return;
    }
    fb.pixels_mut()[y * width + x] = color;
}

/// Paint every row and column that is a multiple of `spacing`.
/// A zero spacing draws nothing.
pub fn draw_grid(fb: &mut FrameBuffer, spacing: u32, color: u32) {
    if spacing == 0 {
        return;
    }
    let (w, h) = (fb.width() as u32, fb.height() as u32);
    for y in 0..h {
        for x in 0..w {
            if x % spacing == 0 || y % spacing == 0 {
                set_pixel(fb, x as i32, y as i32, color);
            }
        }
    }
}

/// Fill `[x, x+w) x [y, y+h)`. Zero or negative extents draw nothing.
pub fn draw_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for dy in 0..h {
        for dx in 0..w {
            set_pixel(fb, x.saturating_add(dx), y.saturating_add(dy), color);
        }
    }
}
