//! The kiss3d window, scenes and cameras driven by a [`FrameLoop`](super::FrameLoop).

use glamx::{Vec2, Vec3};
use kiss3d::camera::FixedView2d;
use kiss3d::color::Color;
use kiss3d::light::Light;
use kiss3d::scene::{SceneNode2d, SceneNode3d};
use kiss3d::window::Window;

use super::{FrameClock, FrameDriver, FramePacer, MouseState, WindowConfig};
use crate::bounding::Ray;
use crate::camera::{CameraRig, ViewCamera};
use crate::error::Result;

/// Intensity radius of the point light added to every stage.
const LIGHT_RADIUS: f32 = 100.0;

/// A window with a 3D scene, a 2D overlay and their cameras.
///
/// The 3D scene is seen through the camera described by a [`CameraRig`]; the
/// 2D overlay uses a fixed view with the origin at the window center, `y` up
/// and one unit per pixel.
pub struct Stage {
    window: Window,
    scene: SceneNode3d,
    overlay: SceneNode2d,
    camera: ViewCamera,
    overlay_camera: FixedView2d,
    clock: FrameClock,
    pacer: FramePacer,
    mouse: MouseState,
    closed: bool,
    released: bool,
}

impl Stage {
    /// Opens a window.
    ///
    /// Fails without opening anything if `config` is invalid.
    pub async fn open(config: &WindowConfig, rig: &CameraRig) -> Result<Stage> {
        config.validate()?;

        let mut window = Window::new_with_size(&config.title, config.width, config.height).await;
        window.set_background_color(config.background);

        let mut scene = SceneNode3d::empty();
        scene
            .add_light(Light::point(LIGHT_RADIUS))
            .set_position(rig.position);

        log::info!(
            "Opened window \"{}\" ({}x{} @ {} fps).",
            config.title,
            config.width,
            config.height,
            config.fps
        );

        Ok(Stage {
            window,
            scene,
            overlay: SceneNode2d::empty(),
            camera: rig.build(),
            overlay_camera: FixedView2d::new(),
            clock: FrameClock::new(),
            pacer: FramePacer::new(config.fps),
            mouse: MouseState::new(),
            closed: false,
            released: false,
        })
    }

    #[inline]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[inline]
    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    /// The root of the 3D scene.
    #[inline]
    pub fn scene(&self) -> &SceneNode3d {
        &self.scene
    }

    #[inline]
    pub fn scene_mut(&mut self) -> &mut SceneNode3d {
        &mut self.scene
    }

    /// The root of the 2D overlay.
    #[inline]
    pub fn overlay_mut(&mut self) -> &mut SceneNode2d {
        &mut self.overlay
    }

    #[inline]
    pub fn camera(&self) -> &ViewCamera {
        &self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut ViewCamera {
        &mut self.camera
    }

    #[inline]
    pub fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    /// The target frame rate.
    #[inline]
    pub fn fps(&self) -> u32 {
        self.pacer.fps()
    }

    /// Changes the target frame rate. Zero is ignored.
    pub fn set_fps(&mut self, fps: u32) {
        if fps == 0 {
            log::warn!("Ignoring a target frame rate of 0.");
            return;
        }

        self.pacer.set_fps(fps);
    }

    /// The window size in pixels.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.window.width() as f32, self.window.height() as f32)
    }

    /// Applies the time-driven camera motion for a frame lasting `dt` seconds.
    pub fn update_camera(&mut self, dt: f32) {
        self.camera.update(dt);
    }

    /// The eye position of the 3D camera.
    pub fn eye(&self) -> Vec3 {
        self.camera.eye()
    }

    /// The ray from the eye through the mouse cursor, if the cursor position is known.
    pub fn mouse_ray(&self) -> Option<Ray> {
        let cursor = self.mouse.cursor().or_else(|| {
            self.window
                .cursor_pos()
                .map(|(x, y)| Vec2::new(x as f32, y as f32))
        })?;

        Some(self.camera.ray_through(cursor, self.size()))
    }

    /// Draws a 3D segment for the current frame.
    #[inline]
    pub fn draw_line(&mut self, a: Vec3, b: Vec3, color: Color, width: f32) {
        self.window.draw_line(a, b, color, width, false);
    }

    /// Draws the first `len` units of `ray` for the current frame.
    pub fn draw_ray(&mut self, ray: &Ray, len: f32, color: Color) {
        self.window
            .draw_line(ray.origin, ray.endpoint(len), color, 1.0, false);
    }

    /// Draws a segment on the 2D overlay for the current frame.
    #[inline]
    pub fn draw_line_2d(&mut self, a: Vec2, b: Vec2, color: Color, width: f32) {
        self.window.draw_line_2d(a, b, color, width);
    }

    /// Asks the frame loop to stop after the current frame.
    pub fn close(&mut self) {
        self.window.close();
    }

    fn poll_input(&mut self) {
        self.mouse.begin_frame();

        for event in self.window.events().iter() {
            self.mouse.handle_event(&event.value);
        }
    }
}

impl FrameDriver for Stage {
    fn should_close(&self) -> bool {
        self.closed || self.window.should_close()
    }

    fn frame_time(&mut self) -> f32 {
        self.clock.tick()
    }

    async fn present(&mut self) {
        if self.released {
            return;
        }

        let open = self
            .window
            .render(
                Some(&mut self.scene),
                Some(&mut self.overlay),
                Some(self.camera.as_camera_mut()),
                Some(&mut self.overlay_camera),
                None,
                None,
            )
            .await;

        if !open {
            self.closed = true;
        }

        self.pacer.wait();
        self.poll_input();
    }

    /// Closes the window and stops presenting. The GPU resources are freed
    /// when the stage is dropped.
    fn release(&mut self) {
        if !self.released {
            self.window.close();
            self.released = true;
            log::debug!("Closed the window.");
        }
    }
}
