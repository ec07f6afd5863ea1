//! The per-frame update/draw loop.

use crate::error::{Error, Result};

/// Something that can present frames and report when it should stop.
///
/// [`Stage`](crate::window::Stage) implements this on top of a kiss3d window.
#[allow(async_fn_in_trait)]
pub trait FrameDriver {
    /// Whether a close signal has been observed.
    fn should_close(&self) -> bool;

    /// Seconds elapsed since the previous call.
    fn frame_time(&mut self) -> f32;

    /// Presents everything queued during the current frame.
    ///
    /// On the web this yields to the browser until the next frame is due.
    async fn present(&mut self);

    /// Stops presenting. Called once, after the last frame.
    ///
    /// Whatever the driver owns is only freed when it is dropped, e.g. after
    /// [`FrameLoop::into_driver`].
    fn release(&mut self) {}
}

/// Per-frame hooks invoked by a [`FrameLoop`]. Every hook defaults to a no-op.
pub trait FrameHooks<D: ?Sized> {
    /// Advances the simulation by `dt` seconds.
    fn update(&mut self, _driver: &mut D, _dt: f32) {}

    /// Queues everything that has to be drawn this frame.
    fn draw(&mut self, _driver: &mut D) {}

    /// Called once when the loop stops, before the driver is released.
    fn destroy(&mut self, _driver: &mut D) {}
}

type UpdateFn<D> = Box<dyn FnMut(&mut D, f32)>;
type DrawFn<D> = Box<dyn FnMut(&mut D)>;
type DestroyFn<D> = Box<dyn FnOnce(&mut D)>;

/// Hooks made of optional closures. Unset slots are skipped.
///
/// # Example
/// ```
/// # use kiss3d_scenes::window::{Callbacks, FrameHooks};
/// let mut frames = 0;
/// let mut hooks = Callbacks::<()>::new().on_update(move |_, dt| {
///     frames += 1;
///     log::debug!("frame {} lasted {}s", frames, dt);
/// });
/// hooks.update(&mut (), 0.016);
/// ```
pub struct Callbacks<D: ?Sized> {
    update: Option<UpdateFn<D>>,
    draw: Option<DrawFn<D>>,
    destroy: Option<DestroyFn<D>>,
}

impl<D: ?Sized> Default for Callbacks<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ?Sized> Callbacks<D> {
    /// Callbacks with every slot empty.
    pub fn new() -> Self {
        Callbacks {
            update: None,
            draw: None,
            destroy: None,
        }
    }

    /// Sets the update callback, replacing the previous one.
    pub fn on_update(mut self, f: impl FnMut(&mut D, f32) + 'static) -> Self {
        self.update = Some(Box::new(f));
        self
    }

    /// Sets the draw callback, replacing the previous one.
    pub fn on_draw(mut self, f: impl FnMut(&mut D) + 'static) -> Self {
        self.draw = Some(Box::new(f));
        self
    }

    /// Sets the teardown callback, replacing the previous one.
    pub fn on_destroy(mut self, f: impl FnOnce(&mut D) + 'static) -> Self {
        self.destroy = Some(Box::new(f));
        self
    }
}

impl<D: ?Sized> FrameHooks<D> for Callbacks<D> {
    fn update(&mut self, driver: &mut D, dt: f32) {
        if let Some(update) = &mut self.update {
            update(driver, dt);
        }
    }

    fn draw(&mut self, driver: &mut D) {
        if let Some(draw) = &mut self.draw {
            draw(driver);
        }
    }

    fn destroy(&mut self, driver: &mut D) {
        if let Some(destroy) = self.destroy.take() {
            destroy(driver);
        }
    }
}

/// Lifecycle of a [`FrameLoop`].
///
/// There is no uninitialized state: a loop is only ever built from a driver
/// that was opened successfully.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LoopState {
    /// Built, not started yet.
    Idle,
    /// Inside [`FrameLoop::run`].
    Running,
    /// The close signal was observed and the driver released.
    Terminated,
}

/// Statistics of a completed [`FrameLoop::run`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    /// Number of frames during which the hooks were invoked.
    pub frames: u64,
    /// Sum of the frame deltas passed to `update`, in seconds.
    pub elapsed: f32,
}

/// Dispatches [`FrameHooks`] once per frame until its driver asks to close.
pub struct FrameLoop<D> {
    driver: D,
    state: LoopState,
    stats: FrameStats,
}

impl<D: FrameDriver> FrameLoop<D> {
    /// Creates an idle loop around an opened driver.
    pub fn new(driver: D) -> Self {
        FrameLoop {
            driver,
            state: LoopState::Idle,
            stats: FrameStats::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    #[inline]
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Consumes the loop, returning its driver.
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Runs frames until the driver reports a close signal.
    ///
    /// Each frame calls `update` then `draw`, then presents. Once the close
    /// signal is seen, `destroy` is called exactly once and the driver is
    /// released. A terminated loop cannot be run again.
    pub async fn run<H: FrameHooks<D> + ?Sized>(&mut self, hooks: &mut H) -> Result<FrameStats> {
        if self.state == LoopState::Terminated {
            return Err(Error::LoopTerminated);
        }

        self.state = LoopState::Running;
        log::info!("Frame loop started.");

        while !self.driver.should_close() {
            let dt = self.driver.frame_time();
            hooks.update(&mut self.driver, dt);
            hooks.draw(&mut self.driver);
            self.driver.present().await;

            self.stats.frames += 1;
            self.stats.elapsed += dt;
        }

        hooks.destroy(&mut self.driver);
        self.driver.release();
        self.state = LoopState::Terminated;

        log::info!(
            "Frame loop terminated after {} frames ({:.2}s).",
            self.stats.frames,
            self.stats.elapsed
        );

        Ok(self.stats)
    }
}
