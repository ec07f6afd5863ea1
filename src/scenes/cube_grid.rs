//! A grid of colored cubes that can be removed one by one with the mouse.

use glamx::Vec3;
use kiss3d::color::{self, Color};
use rand::Rng;

use crate::bounding::Ray;
use crate::camera::{CameraMode, CameraRig};
use crate::picking::{self, PickPolicy};
use crate::shape::{Entity, Outline};
use crate::window::{FrameHooks, Stage};

/// Colors the cubes are randomly painted with.
pub const PALETTE: [Color; 8] = [
    color::RED,
    color::ORANGE,
    color::YELLOW,
    color::GREEN,
    color::BLUE,
    color::PURPLE,
    color::PINK,
    color::BROWN,
];

/// Length of the visualized mouse ray.
pub const RAY_LENGTH: f32 = 50.0;

/// Cubes reserved up front by [`CubeGrid::new`]; larger grids grow as they fill.
const MAX_PREALLOCATED_CUBES: usize = 4096;

/// Parameters of a [`CubeGrid`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CubeGridConfig {
    /// Number of cubes along `x` and `z`.
    pub grid_size: u32,
    /// Number of cube layers along `y`.
    pub grid_height: u32,
    /// Full extents of each cube.
    pub cube_size: Vec3,
    /// How the removed cube is chosen when the click ray hits several.
    pub pick_policy: PickPolicy,
    /// Wireframe drawn around each cube, if any.
    pub outline: Option<Outline>,
    /// Color of the bounding boxes.
    pub bounds_color: Color,
    /// Whether to draw the bounding boxes.
    pub show_bounds: bool,
    /// Whether to draw the mouse ray.
    pub show_ray: bool,
}

impl Default for CubeGridConfig {
    fn default() -> Self {
        CubeGridConfig {
            grid_size: 5,
            grid_height: 5,
            cube_size: Vec3::ONE,
            pick_policy: PickPolicy::default(),
            outline: None,
            bounds_color: color::ORANGE,
            show_bounds: true,
            show_ray: true,
        }
    }
}

impl CubeGridConfig {
    pub fn with_grid(mut self, grid_size: u32, grid_height: u32) -> Self {
        self.grid_size = grid_size;
        self.grid_height = grid_height;
        self
    }

    pub fn with_pick_policy(mut self, policy: PickPolicy) -> Self {
        self.pick_policy = policy;
        self
    }

    pub fn with_outline(mut self, outline: Outline) -> Self {
        self.outline = Some(outline);
        self
    }

    /// Number of cubes in a full grid, saturating at `usize::MAX`.
    pub fn cube_count(&self) -> usize {
        (self.grid_size as usize)
            .saturating_mul(self.grid_size as usize)
            .saturating_mul(self.grid_height as usize)
    }

    /// The camera looking at the middle of the grid from above one corner.
    pub fn camera(&self) -> CameraRig {
        let target = Vec3::new(
            self.grid_size as f32 / 2.0,
            self.grid_height as f32 / 2.0,
            self.grid_size as f32 / 2.0,
        );

        CameraRig::new(Vec3::new(-10.0, 15.0, -10.0), target)
            .with_fovy(45.0)
            .with_mode(CameraMode::Orbital)
    }
}

/// The voxel-grid cube picker.
pub struct CubeGrid {
    config: CubeGridConfig,
    cubes: Vec<Entity>,
    last_ray: Option<Ray>,
}

impl CubeGrid {
    /// Builds the grid, painting every cube with a random palette color.
    ///
    /// Cubes are laid out layer by layer (`y`), then row by row (`x`), then
    /// along `z`; the cube at grid coordinates `(x, y, z)` is centered at
    /// `(x, y, z)`.
    pub fn new(config: CubeGridConfig, rng: &mut impl Rng) -> Self {
        let mut cubes = Vec::with_capacity(config.cube_count().min(MAX_PREALLOCATED_CUBES));

        for y in 0..config.grid_height {
            for x in 0..config.grid_size {
                for z in 0..config.grid_size {
                    let color = PALETTE[rng.random_range(0..PALETTE.len())];
                    let position = Vec3::new(x as f32, y as f32, z as f32);
                    let mut cube = Entity::cube(position, config.cube_size, color);

                    if let Some(outline) = config.outline {
                        cube = cube.with_outline(outline);
                    }

                    cubes.push(cube);
                }
            }
        }

        CubeGrid {
            config,
            cubes,
            last_ray: None,
        }
    }

    /// Builds the grid with the thread-local random generator.
    pub fn with_random_colors(config: CubeGridConfig) -> Self {
        Self::new(config, &mut rand::rng())
    }

    #[inline]
    pub fn config(&self) -> &CubeGridConfig {
        &self.config
    }

    /// The cubes still present.
    #[inline]
    pub fn cubes(&self) -> &[Entity] {
        &self.cubes
    }

    /// Removes the cube selected by `ray`, as seen from `eye`.
    ///
    /// At most one cube is removed per click.
    pub fn click(&mut self, ray: &Ray, eye: Vec3) -> Option<Entity> {
        let removed = picking::remove_picked(ray, &mut self.cubes, eye, self.config.pick_policy);

        match &removed {
            Some(cube) => log::info!(
                "Removed the cube at {:?}, {} left.",
                cube.position(),
                self.cubes.len()
            ),
            None => log::debug!("Click ray hit no cube."),
        }

        removed
    }

    /// Adds every cube to the 3D scene of `stage`.
    pub fn attach(&mut self, stage: &mut Stage) {
        let root = stage.scene().clone();
        for cube in &mut self.cubes {
            cube.attach(&root);
        }
    }
}

impl FrameHooks<Stage> for CubeGrid {
    fn update(&mut self, stage: &mut Stage, dt: f32) {
        stage.update_camera(dt);
        self.last_ray = stage.mouse_ray();

        if stage.mouse().left_pressed() {
            log::info!("Left button pressed (frame delta: {}s).", dt);

            if let Some(ray) = self.last_ray {
                let eye = stage.eye();
                // Dropping the entity removes its scene nodes.
                let _ = self.click(&ray, eye);
            }
        }
    }

    fn draw(&mut self, stage: &mut Stage) {
        if self.config.show_bounds {
            for cube in &self.cubes {
                cube.draw_bounds(stage.window_mut(), self.config.bounds_color, 1.0);
            }
        }

        if self.config.show_ray {
            if let Some(ray) = self.last_ray {
                stage.draw_ray(&ray, RAY_LENGTH, color::RED);
            }
        }
    }

    fn destroy(&mut self, _: &mut Stage) {
        log::info!("Program ended with {} cubes left.", self.cubes.len());
    }
}
