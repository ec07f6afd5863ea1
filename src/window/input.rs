//! Per-frame mouse state.

use glamx::Vec2;
use kiss3d::event::{Action, MouseButton, WindowEvent};

/// Tracks the cursor and the left-button press edges of the current frame.
///
/// A press is reported by [`MouseState::left_pressed`] only during the frame
/// in which it happened, like raylib's `IsMouseButtonPressed`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MouseState {
    cursor: Option<Vec2>,
    left_down: bool,
    left_pressed: bool,
    left_released: bool,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the edges of the previous frame. Held buttons stay held.
    pub fn begin_frame(&mut self) {
        self.left_pressed = false;
        self.left_released = false;
    }

    /// Feeds one window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match *event {
            WindowEvent::CursorPos(x, y, _) => self.move_to(Vec2::new(x as f32, y as f32)),
            WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) => self.press_left(),
            WindowEvent::MouseButton(MouseButton::Button1, Action::Release, _) => {
                self.release_left()
            }
            _ => {}
        }
    }

    pub fn move_to(&mut self, pos: Vec2) {
        self.cursor = Some(pos);
    }

    pub fn press_left(&mut self) {
        if !self.left_down {
            self.left_pressed = true;
        }
        self.left_down = true;
    }

    pub fn release_left(&mut self) {
        if self.left_down {
            self.left_released = true;
        }
        self.left_down = false;
    }

    /// The last known cursor position, in pixels from the top-left corner.
    #[inline]
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Whether the left button went down during this frame.
    #[inline]
    pub fn left_pressed(&self) -> bool {
        self.left_pressed
    }

    /// Whether the left button went up during this frame.
    #[inline]
    pub fn left_released(&self) -> bool {
        self.left_released
    }

    /// Whether the left button is currently held.
    #[inline]
    pub fn left_down(&self) -> bool {
        self.left_down
    }
}
