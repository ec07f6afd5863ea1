//! The window shell: frame timing, input, and the update/draw loop.

mod clock;
mod config;
mod frame_loop;
mod input;
mod stage;

pub use clock::{FrameClock, FramePacer};
pub use config::{WindowConfig, DEFAULT_FPS, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use frame_loop::{Callbacks, FrameDriver, FrameHooks, FrameLoop, FrameStats, LoopState};
pub use input::MouseState;
pub use stage::Stage;
