//! A few shapes seen through an orbit camera, highlighted when under the mouse.

use glamx::Vec3;
use kiss3d::color::{self, Color};

use crate::bounding::Ray;
use crate::camera::{CameraMode, CameraRig};
use crate::picking;
use crate::shape::{Entity, Outline, Shape};
use crate::window::{FrameHooks, Stage};

/// Parameters of a [`ShapeViewer`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShapeViewerConfig {
    /// The shapes, with their positions and colors.
    pub shapes: Vec<(Vec3, Shape, Color)>,
    /// Color of the shapes under the mouse.
    pub highlight: Color,
    /// Color of the bounding boxes of the shapes not under the mouse.
    pub bounds_color: Color,
    /// Length of the visualized mouse ray.
    pub ray_length: f32,
    /// The camera.
    pub camera: CameraRig,
}

impl Default for ShapeViewerConfig {
    fn default() -> Self {
        ShapeViewerConfig {
            shapes: vec![
                (
                    Vec3::new(-3.0, 0.0, 0.0),
                    Shape::Cuboid {
                        extents: Vec3::ONE,
                    },
                    color::STEEL_BLUE,
                ),
                (
                    Vec3::new(-1.0, 0.0, 0.0),
                    Shape::Cylinder {
                        radius: 0.5,
                        height: 2.0,
                    },
                    color::SEA_GREEN,
                ),
                (
                    Vec3::new(1.0, 0.0, 0.0),
                    Shape::Cuboid {
                        extents: Vec3::new(1.0, 2.0, 0.5),
                    },
                    color::GOLDENROD,
                ),
                (
                    Vec3::new(3.0, 0.0, 0.0),
                    Shape::Cylinder {
                        radius: 0.75,
                        height: 0.5,
                    },
                    color::SLATE_GRAY,
                ),
            ],
            highlight: color::RED,
            bounds_color: color::ORANGE,
            ray_length: 50.0,
            camera: CameraRig::new(Vec3::new(0.0, 4.0, 10.0), Vec3::ZERO)
                .with_mode(CameraMode::Free),
        }
    }
}

/// The shape viewer with ray-hit highlighting.
pub struct ShapeViewer {
    config: ShapeViewerConfig,
    entities: Vec<Entity>,
    base_colors: Vec<Color>,
    highlighted: Vec<bool>,
    last_ray: Option<Ray>,
}

impl ShapeViewer {
    pub fn new(config: ShapeViewerConfig) -> Self {
        let entities: Vec<Entity> = config
            .shapes
            .iter()
            .map(|(position, shape, color)| {
                Entity::new(*position, *shape, *color).with_outline(Outline {
                    color: color::BLACK,
                    margin: 0.02,
                    width: 1.0,
                })
            })
            .collect();
        let base_colors = entities.iter().map(|e| e.color()).collect();
        let highlighted = vec![false; entities.len()];

        ShapeViewer {
            config,
            entities,
            base_colors,
            highlighted,
            last_ray: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &ShapeViewerConfig {
        &self.config
    }

    #[inline]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Whether the `i`-th shape is currently highlighted.
    #[inline]
    pub fn is_highlighted(&self, i: usize) -> bool {
        self.highlighted.get(i).copied().unwrap_or(false)
    }

    /// Highlights exactly the shapes hit by `ray`; `None` clears every highlight.
    ///
    /// Returns the indices of the highlighted shapes.
    pub fn highlight(&mut self, ray: Option<&Ray>) -> Vec<usize> {
        let hits = ray
            .map(|ray| picking::hits(ray, &self.entities))
            .unwrap_or_default();

        for (i, entity) in self.entities.iter_mut().enumerate() {
            let hit = hits.contains(&i);
            if hit != self.highlighted[i] {
                let color = if hit {
                    self.config.highlight
                } else {
                    self.base_colors[i]
                };
                entity.set_color(color);
                self.highlighted[i] = hit;
            }
        }

        hits
    }

    /// Adds every shape to the 3D scene of `stage`.
    pub fn attach(&mut self, stage: &mut Stage) {
        let root = stage.scene().clone();
        for entity in &mut self.entities {
            entity.attach(&root);
        }
    }
}

impl FrameHooks<Stage> for ShapeViewer {
    fn update(&mut self, stage: &mut Stage, dt: f32) {
        stage.update_camera(dt);
        let ray = stage.mouse_ray();
        self.last_ray = ray;
        let _ = self.highlight(ray.as_ref());
    }

    fn draw(&mut self, stage: &mut Stage) {
        for (i, entity) in self.entities.iter().enumerate() {
            let color = if self.highlighted[i] {
                self.config.highlight
            } else {
                self.config.bounds_color
            };
            entity.draw_bounds(stage.window_mut(), color, 1.0);
        }

        if let Some(ray) = self.last_ray {
            stage.draw_ray(&ray, self.config.ray_length, color::RED);
        }
    }
}
