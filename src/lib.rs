//! Software pixel framebuffer: draw a grid and filled rectangles into a
//! CPU-side ARGB buffer, upload it to a streaming texture, and show it in a
//! window.

pub mod app;
pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod types;
pub mod window;

pub use app::App;
pub use config::{Config, RectSpec};
pub use error::Error;
pub use types::{FrameBuffer, Texture};
pub use window::{HeadlessScreen, InputEvent, RenderTarget, Screen};
