//! Renderable shapes and the entities built from them.

pub use self::entity::{mesh_bounds, Entity, Outline};

mod entity;

use glamx::Vec3;
use kiss3d::procedural::{self, RenderMesh};

/// Number of subdivisions around the circumference of generated cylinders.
pub const CYLINDER_SUBDIVISIONS: u32 = 32;

/// The geometry of an [`Entity`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// A box with the given full extents.
    Cuboid {
        /// Full extents along each axis.
        extents: Vec3,
    },
    /// A cylinder whose principal axis is aligned with `y`.
    Cylinder {
        /// Base radius.
        radius: f32,
        /// Full height.
        height: f32,
    },
}

impl Shape {
    /// Generates the mesh of this shape, centered at the origin.
    pub fn mesh(&self) -> RenderMesh {
        match *self {
            Shape::Cuboid { extents } => procedural::cuboid(extents),
            Shape::Cylinder { radius, height } => {
                procedural::cylinder(radius * 2.0, height, CYLINDER_SUBDIVISIONS)
            }
        }
    }

    /// The full extents of this shape along each axis.
    pub fn extents(&self) -> Vec3 {
        match *self {
            Shape::Cuboid { extents } => extents,
            Shape::Cylinder { radius, height } => Vec3::new(radius * 2.0, height, radius * 2.0),
        }
    }

    /// The same kind of shape with new full extents.
    ///
    /// Cylinders take their diameter from `size.x` and their height from `size.y`.
    pub fn resized(&self, size: Vec3) -> Shape {
        match *self {
            Shape::Cuboid { .. } => Shape::Cuboid { extents: size },
            Shape::Cylinder { .. } => Shape::Cylinder {
                radius: size.x * 0.5,
                height: size.y,
            },
        }
    }
}
