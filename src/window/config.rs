use crate::error::{Error, Result};
use kiss3d::color::{self, Color};

/// Default window width, in pixels.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default window height, in pixels.
pub const DEFAULT_HEIGHT: u32 = 640;
/// Default target frame rate.
pub const DEFAULT_FPS: u32 = 60;

/// Parameters of the window opened by a [`Stage`](crate::window::Stage).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowConfig {
    /// Window title.
    pub title: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Target number of frames per second.
    pub fps: u32,
    /// Clear color.
    pub background: Color,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "kiss3d scene".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            background: color::WHITE_SMOKE,
        }
    }
}

impl WindowConfig {
    /// Default parameters with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        WindowConfig {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Checks that a window can be created with these parameters.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidWindowSize {
                width: self.width,
                height: self.height,
            });
        }

        if self.fps == 0 {
            return Err(Error::InvalidFrameRate);
        }

        Ok(())
    }
}
