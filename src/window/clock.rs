//! Frame timing.

use web_time::{Duration, Instant};

/// Measures the time elapsed between consecutive frames.
#[derive(Copy, Clone, Debug)]
pub struct FrameClock {
    last: Instant,
    max_delta: Option<Duration>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// A clock whose first delta is measured from now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// A clock whose first delta is measured from `start`.
    pub fn starting_at(start: Instant) -> Self {
        FrameClock {
            last: start,
            max_delta: None,
        }
    }

    /// Clamps every reported delta to `max`.
    ///
    /// Useful to avoid a huge first step after a long window creation, or
    /// after the window was suspended.
    pub fn with_max_delta(mut self, max: Duration) -> Self {
        self.max_delta = Some(max);
        self
    }

    /// Seconds since the previous tick, measured now.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Seconds since the previous tick, measured at `now`.
    ///
    /// An instant earlier than the previous tick yields 0.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let mut delta = now.saturating_duration_since(self.last);
        if let Some(max) = self.max_delta {
            delta = delta.min(max);
        }

        self.last = self.last.max(now);
        delta.as_secs_f32()
    }
}

/// Caps the frame rate by sleeping away what is left of each frame.
///
/// On the web the browser paces the frames, so [`FramePacer::wait`] only
/// restarts the frame timer there.
#[derive(Copy, Clone, Debug)]
pub struct FramePacer {
    fps: u32,
    min_frame: Option<Duration>,
    frame_start: Instant,
}

impl FramePacer {
    /// A pacer targeting `fps` frames per second. Zero means no limit.
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    /// A pacer whose first frame starts at `start`.
    pub fn starting_at(fps: u32, start: Instant) -> Self {
        FramePacer {
            fps,
            min_frame: Self::frame_duration(fps),
            frame_start: start,
        }
    }

    /// The shortest frame allowed at `fps` frames per second.
    pub fn frame_duration(fps: u32) -> Option<Duration> {
        (fps != 0).then(|| Duration::from_secs_f64(1.0 / fps as f64))
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    #[inline]
    pub fn min_frame_duration(&self) -> Option<Duration> {
        self.min_frame
    }

    /// Changes the target frame rate. Zero means no limit.
    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps;
        self.min_frame = Self::frame_duration(fps);
    }

    /// How long to wait at `now` before the current frame has lasted long enough.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        match self.min_frame {
            Some(min) => min.saturating_sub(now.saturating_duration_since(self.frame_start)),
            None => Duration::ZERO,
        }
    }

    /// Ends the current frame at `now` and starts the next one.
    pub fn restart_at(&mut self, now: Instant) {
        self.frame_start = now;
    }

    /// Sleeps until the current frame has lasted long enough, then starts the next one.
    pub fn wait(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let rest = self.remaining_at(Instant::now());
            if !rest.is_zero() {
                std::thread::sleep(rest);
            }
        }

        self.restart_at(Instant::now());
    }
}
