// Application context: everything the frame loop used to keep in globals
// (run flag, render target, framebuffer) lives here and is passed by reference.

use crate::config::Config;
use crate::draw::{draw_grid, draw_rect};
use crate::error::Error;
use crate::types::FrameBuffer;
use crate::window::{InputEvent, RenderTarget};
use log::{debug, info, trace};
use std::time::{Duration, Instant};

pub struct App<T: RenderTarget> {
    config: Config,
    // Fields drop in order: the framebuffer must go before the window.
    framebuffer: FrameBuffer,
    target: T,
    running: bool,

    // FPS bookkeeping, reported once per second
    frames: u64,
    frames_this_second: u32,
    last_fps_time: Instant,
}

impl<T: RenderTarget> App<T> {
    /// Allocate the framebuffer on an already-open target and clear it.
    pub fn setup(config: Config, mut target: T) -> Result<Self, Error> {
        let mut framebuffer = FrameBuffer::create(config.width, config.height, &mut target)?;
        framebuffer.clear(config.background);
        info!(
            "Scene: grid every {}px, {} rectangle(s)",
            config.grid_spacing,
            config.rects.len()
        );
        Ok(Self {
            config,
            framebuffer,
            target,
            running: true,
            frames: 0,
            frames_this_second: 0,
            last_fps_time: Instant::now(),
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Poll the target and stop on a quit request or ESC.
    pub fn process_input(&mut self) {
        for event in self.target.poll_input() {
            match event {
                InputEvent::Quit | InputEvent::Escape => {
                    debug!("{event:?} received, stopping");
                    self.running = false;
                }
            }
        }
    }

    /// Per-frame bookkeeping; the scene itself is static.
    pub fn update(&mut self) {
        self.frames += 1;
        self.frames_this_second += 1;
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_fps_time);
        if elapsed >= Duration::from_secs(1) {
            let fps = self.frames_this_second as f32 / elapsed.as_secs_f32();
            debug!("FPS: {fps:.1}");
            self.frames_this_second = 0;
            self.last_fps_time = now;
        }
    }

    /// Grid, rectangles, present, then clear for the next frame.
    pub fn render(&mut self) -> Result<(), Error> {
        let fb = &mut self.framebuffer;
        draw_grid(fb, self.config.grid_spacing, self.config.grid_color);
        for r in &self.config.rects {
            draw_rect(fb, r.x, r.y, r.w, r.h, r.color);
        }

        fb.present(&mut self.target)?;
        trace!("Frame {} presented", self.frames);

        fb.clear(self.config.background);
        Ok(())
    }

    /// One loop iteration: input, update, render.
    pub fn frame(&mut self) -> Result<(), Error> {
        self.process_input();
        if !self.running {
            return Ok(());
        }
        self.update();
        self.render()
    }

    /// Release the framebuffer, then hand the target back so the caller
    /// can close it last.
    pub fn shutdown(self) -> T {
        info!("Shutting down after {} frame(s)", self.frames);
        self.framebuffer.destroy();
        self.target
    }
}
