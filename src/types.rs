// Core types: the CPU-side color buffer and the streaming texture it is
// uploaded into once per frame.

use crate::error::Error;
use crate::window::RenderTarget;
use log::{debug, info, trace};

/// Bytes per packed ARGB cell; a texture row pitch is `width * BYTES_PER_PIXEL`.
pub const BYTES_PER_PIXEL: usize = 4;

/// Reserve `width * height` zeroed cells without aborting on out-of-memory.
pub(crate) fn alloc_cells(width: usize, height: usize) -> Result<Vec<u32>, Error> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidSize { width, height });
    }
    let len = width
        .checked_mul(height)
        .ok_or_else(|| Error::Allocation(format!("{width}x{height} cells overflow usize")))?;

    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|e| Error::Allocation(format!("{len} cells: {e}")))?;
    cells.resize(len, 0);
    Ok(cells)
}

/// Device-side streaming image the framebuffer is copied into before a blit.
/// Render targets hand these out; the framebuffer owns the one it gets.
pub struct Texture {
    width: usize,
    height: usize,
    staging: Vec<u32>, // row-major, tightly packed (pitch = width * 4)
}

impl Texture {
    pub fn new_streaming(width: usize, height: usize) -> Result<Self, Error> {
        let staging = alloc_cells(width, height)?;
        Ok(Self { width, height, staging })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.staging
    }

    /// Full-texture upload. `pitch` is the source row length in bytes.
    /// Rows missing from `src` leave the old texture contents in place, and
    /// a pitch shorter than one row uploads nothing.
    pub fn update(&mut self, src: &[u32], pitch: usize) {
        let stride = pitch / BYTES_PER_PIXEL;
        if stride < self.width {
            trace!("Texture update skipped: pitch {pitch} shorter than one row");
            return;
        }
        for (dst, row) in self.staging.chunks_exact_mut(self.width).zip(src.chunks(stride)) {
            let n = dst.len().min(row.len());
            dst[..n].copy_from_slice(&row[..n]);
        }
    }
}

/// The pixel buffer we draw into every frame.
///
/// `pixels` always holds exactly `width * height` cells, row 0 at the top.
/// Dimensions are fixed for the buffer's whole life.
pub struct FrameBuffer {
    width: usize,   // how wide the frame is on screen (pixels)
    height: usize,  // how tall the frame is on screen (pixels)
    pixels: Vec<u32>, // each entry is 0xAARRGGBB
    texture: Texture,
}

impl FrameBuffer {
    /// Allocate the color buffer and a matching streaming texture on `target`.
    pub fn create<T: RenderTarget>(width: usize, height: usize, target: &mut T) -> Result<Self, Error> {
        let pixels = alloc_cells(width, height)?;
        let texture = target.create_streaming_texture(width, height)?;
        if texture.width() != width || texture.height() != height {
            return Err(Error::TextureInit(format!(
                "expected {width}x{height}, got {}x{}",
                texture.width(),
                texture.height()
            )));
        }
        info!("Framebuffer allocated: {width}x{height}");
        Ok(Self { width, height, pixels, texture })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable cells; a slice, so the length can't drift from `width * height`.
    pub(crate) fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    /// Read one cell, `None` when (x,y) is off the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Overwrite every cell with `color`.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Upload the whole buffer into the texture, then blit it onto `target`.
    pub fn present<T: RenderTarget>(&mut self, target: &mut T) -> Result<(), Error> {
        self.texture.update(&self.pixels, self.width * BYTES_PER_PIXEL);
        trace!("Texture updated ({} bytes)", self.pixels.len() * BYTES_PER_PIXEL);
        target.present(&self.texture)
    }

    /// Release the pixel memory and the texture.
    pub fn destroy(self) {
        debug!("Framebuffer {}x{} released", self.width, self.height);
    }
}
