// Window + presentation.
// The drawing code only sees `RenderTarget`; `Screen` puts frames in a real
// minifb window, `HeadlessScreen` keeps them in memory for tests.

use crate::error::Error;
use crate::types::Texture;
use log::{info, trace};
use minifb::{Key, Window, WindowOptions};
use std::collections::VecDeque;

/// Inputs the frame loop reacts to; everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,   // window closed
    Escape, // ESC pressed
}

/// Out-of-memory stays an `Allocation` error; anything else means the
/// texture itself could not be made.
fn streaming_texture(width: usize, height: usize) -> Result<Texture, Error> {
    Texture::new_streaming(width, height).map_err(|e| match e {
        Error::Allocation(_) => e,
        other => Error::TextureInit(other.to_string()),
    })
}

/// Something a framebuffer can be presented on.
pub trait RenderTarget {
    /// Make a streaming texture the framebuffer can upload into.
    fn create_streaming_texture(&mut self, width: usize, height: usize) -> Result<Texture, Error>;

    /// Blit the texture onto the visible surface.
    fn present(&mut self, texture: &Texture) -> Result<(), Error>;

    /// Input gathered since the last call.
    fn poll_input(&mut self) -> Vec<InputEvent>;
}

/// A borderless minifb window.
pub struct Screen {
    window: Window, // the on-screen window you see
}

impl Screen {
    /// Open the window. `target_fps` of 0 leaves frame pacing uncapped.
    pub fn new(title: &str, width: usize, height: usize, target_fps: usize) -> Result<Self, Error> {
        let options = WindowOptions {
            borderless: true,
            ..WindowOptions::default()
        };
        let mut window =
            Window::new(title, width, height, options).map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(target_fps);
        info!("Window created: {width}x{height}");
        Ok(Self { window })
    }

    /// Close the window. Call after the framebuffer has been destroyed.
    pub fn close(self) {
        info!("Window closed");
    }
}

impl RenderTarget for Screen {
    fn create_streaming_texture(&mut self, width: usize, height: usize) -> Result<Texture, Error> {
        streaming_texture(width, height)
    }

    fn present(&mut self, texture: &Texture) -> Result<(), Error> {
        self.window
            .update_with_buffer(texture.pixels(), texture.width(), texture.height())
            .map_err(|e| Error::Presentation(e.to_string()))
    }

    fn poll_input(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if !self.window.is_open() {
            events.push(InputEvent::Quit);
        }
        if self.window.is_key_down(Key::Escape) {
            events.push(InputEvent::Escape);
        }
        events
    }
}

/// In-memory render target: remembers the last frame and replays queued input.
#[derive(Default)]
pub struct HeadlessScreen {
    width: usize,
    height: usize,
    last_frame: Vec<u32>,
    frames: u64,
    pending: VecDeque<InputEvent>,
    fail_present: bool,
}

impl HeadlessScreen {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn queue_input(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Make every following `present` fail.
    pub fn set_present_failure(&mut self, fail: bool) {
        self.fail_present = fail;
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> &[u32] {
        &self.last_frame
    }
}

impl RenderTarget for HeadlessScreen {
    fn create_streaming_texture(&mut self, width: usize, height: usize) -> Result<Texture, Error> {
        streaming_texture(width, height)
    }

    fn present(&mut self, texture: &Texture) -> Result<(), Error> {
        if self.fail_present {
            return Err(Error::Presentation("headless present disabled".into()));
        }
        self.last_frame.clear();
        self.last_frame.extend_from_slice(texture.pixels());
        self.frames += 1;
        trace!("Headless frame {} presented", self.frames);
        Ok(())
    }

    fn poll_input(&mut self) -> Vec<InputEvent> {
        self.pending.drain(..).collect()
    }
}
