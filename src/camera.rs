//! Camera description and the kiss3d cameras built from it.

use glamx::{Vec2, Vec3};
use kiss3d::camera::{Camera3d, FirstPersonCamera3d, OrbitCamera3d};

use crate::bounding::Ray;

/// Angular speed of [`CameraMode::Orbital`], in radians per second.
pub const ORBITAL_SPEED: f32 = 0.5;
/// Distance of the near clipping plane.
pub const ZNEAR: f32 = 0.1;
/// Distance of the far clipping plane.
pub const ZFAR: f32 = 1024.0;

/// How the camera reacts to time and input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CameraMode {
    /// Turns around its target on its own; the mouse can still zoom and drag.
    #[default]
    Orbital,
    /// Turns around its target only when dragged with the mouse.
    Free,
    /// Looks around from its position; moved with the arrow keys.
    FirstPerson,
}

/// Everything needed to build the camera of a scene.
///
/// kiss3d cameras use a perspective projection, so the vertical field of view
/// is the only projection parameter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraRig {
    /// Eye position.
    pub position: Vec3,
    /// Point looked at.
    pub target: Vec3,
    /// Up direction.
    pub up: Vec3,
    /// Vertical field of view, in degrees.
    pub fovy: f32,
    /// Control mode.
    pub mode: CameraMode,
}

impl Default for CameraRig {
    fn default() -> Self {
        CameraRig::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO)
    }
}

impl CameraRig {
    /// A camera at `position` looking at `target`, with `y` up and a 45° field of view.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        CameraRig {
            position,
            target,
            up: Vec3::Y,
            fovy: 45.0,
            mode: CameraMode::default(),
        }
    }

    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up;
        self
    }

    pub fn with_fovy(mut self, fovy: f32) -> Self {
        self.fovy = fovy;
        self
    }

    pub fn with_mode(mut self, mode: CameraMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builds the kiss3d camera described by this rig.
    pub fn build(&self) -> ViewCamera {
        let fov = self.fovy.to_radians();

        match self.mode {
            CameraMode::Orbital | CameraMode::Free => {
                let mut camera =
                    OrbitCamera3d::new_with_frustum(fov, ZNEAR, ZFAR, self.position, self.target);
                camera.set_up_axis(self.up);
                ViewCamera::Orbit {
                    camera,
                    auto_rotate: self.mode == CameraMode::Orbital,
                }
            }
            CameraMode::FirstPerson => {
                let mut camera = FirstPersonCamera3d::new_with_frustum(
                    fov,
                    ZNEAR,
                    ZFAR,
                    self.position,
                    self.target,
                );
                camera.set_up_axis(self.up);
                ViewCamera::FirstPerson(camera)
            }
        }
    }
}

/// The camera owned by a [`Stage`](crate::window::Stage).
pub enum ViewCamera {
    /// An orbit camera, optionally turning on its own.
    Orbit {
        camera: OrbitCamera3d,
        auto_rotate: bool,
    },
    /// A first-person camera.
    FirstPerson(FirstPersonCamera3d),
}

impl ViewCamera {
    /// Applies the time-driven part of the camera motion.
    ///
    /// Input-driven motion is applied by kiss3d while presenting the frame.
    pub fn update(&mut self, dt: f32) {
        if let ViewCamera::Orbit {
            camera,
            auto_rotate: true,
        } = self
        {
            let yaw = camera.yaw();
            camera.set_yaw(yaw + ORBITAL_SPEED * dt);
        }
    }

    /// The eye position.
    pub fn eye(&self) -> Vec3 {
        self.as_camera().eye()
    }

    /// The ray going from the eye through the given window point.
    pub fn ray_through(&self, window_coord: Vec2, window_size: Vec2) -> Ray {
        let (origin, dir) = self.as_camera().unproject(window_coord, window_size);
        Ray::new(origin, dir)
    }

    pub fn as_camera(&self) -> &dyn Camera3d {
        match self {
            ViewCamera::Orbit { camera, .. } => camera,
            ViewCamera::FirstPerson(camera) => camera,
        }
    }

    pub fn as_camera_mut(&mut self) -> &mut dyn Camera3d {
        match self {
            ViewCamera::Orbit { camera, .. } => camera,
            ViewCamera::FirstPerson(camera) => camera,
        }
    }
}
