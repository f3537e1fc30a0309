//! Packed 32-bit colors.
//!
//! Layout is alpha:red:green:blue from the most to the least significant
//! byte. minifb ignores the alpha byte, so a fully opaque value and its
//! `0x00RRGGBB` counterpart look the same on screen.

/// Pack 8-bit components into one `0xAARRGGBB` value.
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

pub const BLACK: u32 = argb(0xFF, 0x00, 0x00, 0x00);
pub const GRID_GREY: u32 = argb(0xFF, 0x33, 0x33, 0x33);
pub const MAGENTA: u32 = argb(0xFF, 0xFF, 0x00, 0xFF);
pub const TEAL: u32 = argb(0xFF, 0x00, 0xB3, 0xA4);
