//! Errors reported by the scene shell.

use thiserror::Error;

/// Result type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while opening a stage or driving its frame loop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested window has a zero width or height.
    #[error("invalid window size {width}x{height}")]
    InvalidWindowSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// The requested target frame rate is zero.
    #[error("the target frame rate must be at least 1")]
    InvalidFrameRate,
    /// The frame loop already ran to completion and released its context.
    #[error("the frame loop has already terminated")]
    LoopTerminated,
}
