// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),                          // Creating the window failed
    TextureInit(String),                         // Creating the streaming texture failed
    Allocation(String),                          // Pixel memory could not be reserved
    InvalidSize { width: usize, height: usize }, // Zero-sized framebuffer requested
    Presentation(String),                        // Copying/blitting a frame to the window failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::TextureInit(s) => write!(f, "Texture init error: {s}"),
            Error::Allocation(s) => write!(f, "Allocation error: {s}"),
            Error::InvalidSize { width, height } => {
                write!(f, "Invalid framebuffer size: {width}x{height}")
            }
            Error::Presentation(s) => write!(f, "Presentation error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
