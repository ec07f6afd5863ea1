use crate::bounding::{Aabb, Ray, RayHit};
use crate::shape::Shape;
use glamx::Vec3;
use kiss3d::color::Color;
use kiss3d::procedural::RenderMesh;
use kiss3d::scene::SceneNode3d;
use kiss3d::window::Window;

/// Wireframe drawn on top of an attached entity.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outline {
    /// Color of the wireframe lines.
    pub color: Color,
    /// How much larger than the entity the wireframe is, along each axis.
    pub margin: f32,
    /// Line width in pixels.
    pub width: f32,
}

impl Default for Outline {
    fn default() -> Self {
        Outline {
            color: kiss3d::color::BLACK,
            margin: 0.1,
            width: 1.0,
        }
    }
}

/// Scene nodes backing an attached entity.
struct Attachment {
    parent: SceneNode3d,
    body: SceneNode3d,
    outline: Option<SceneNode3d>,
}

/// A renderable shape with a position, a generated mesh and a bounding box.
///
/// The mesh is generated centered at the origin; the bounding box is the mesh
/// bounds translated by the entity position. Both are kept in sync by every
/// setter, so [`Entity::bounding_box`] is never stale.
///
/// An entity does not need a window to exist: the mesh is generated on the CPU.
/// Call [`Entity::attach`] to make it visible in a kiss3d scene.
pub struct Entity {
    position: Vec3,
    shape: Shape,
    color: Color,
    outline: Option<Outline>,
    mesh: RenderMesh,
    local_bounds: Aabb,
    bounds: Aabb,
    attachment: Option<Attachment>,
}

impl Entity {
    /// Creates an entity of the given shape at `position`.
    pub fn new(position: Vec3, shape: Shape, color: Color) -> Entity {
        let mesh = shape.mesh();
        let local_bounds = mesh_bounds(&mesh);

        Entity {
            position,
            shape,
            color,
            outline: None,
            mesh,
            local_bounds,
            bounds: local_bounds.translated(position),
            attachment: None,
        }
    }

    /// Creates a box with full extents `size`, centered at `position`.
    pub fn cube(position: Vec3, size: Vec3, color: Color) -> Entity {
        Entity::new(position, Shape::Cuboid { extents: size }, color)
    }

    /// Creates a Y-aligned cylinder centered at `position`.
    pub fn cylinder(position: Vec3, radius: f32, height: f32, color: Color) -> Entity {
        Entity::new(position, Shape::Cylinder { radius, height }, color)
    }

    /// Sets the wireframe drawn around this entity once attached.
    pub fn with_outline(mut self, outline: Outline) -> Self {
        self.outline = Some(outline);
        self
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The full extents of this entity along each axis.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.shape.extents()
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn outline(&self) -> Option<Outline> {
        self.outline
    }

    /// The mesh of this entity, centered at the origin.
    #[inline]
    pub fn mesh(&self) -> &RenderMesh {
        &self.mesh
    }

    /// The world-space bounding box of this entity.
    #[inline]
    pub fn bounding_box(&self) -> Aabb {
        self.bounds
    }

    /// Whether this entity currently has scene nodes.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Moves this entity.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.bounds = self.local_bounds.translated(position);

        if let Some(att) = &mut self.attachment {
            att.body.set_position(position);
            if let Some(outline) = &mut att.outline {
                outline.set_position(position);
            }
        }
    }

    /// Resizes this entity to the given full extents.
    ///
    /// For cylinders, `size.x` is the diameter and `size.y` the height; `size.z`
    /// is ignored.
    pub fn set_size(&mut self, size: Vec3) {
        let shape = self.shape.resized(size);
        self.set_shape(shape);
    }

    /// Replaces the shape of this entity, regenerating its mesh and bounds.
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
        self.mesh = shape.mesh();
        self.local_bounds = mesh_bounds(&self.mesh);
        self.bounds = self.local_bounds.translated(self.position);

        if let Some(att) = self.attachment.take() {
            let parent = att.parent.clone();
            Self::remove_nodes(att);
            self.attach(&parent);
        }
    }

    /// Changes the surface color of this entity.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;

        if let Some(att) = &mut self.attachment {
            att.body.set_color(color);
        }
    }

    /// Casts `ray` against the bounding box of this entity.
    #[inline]
    pub fn ray_cast(&self, ray: &Ray) -> Option<RayHit> {
        self.bounds.cast_ray(ray)
    }

    /// Whether `ray` hits the bounding box of this entity.
    #[inline]
    pub fn ray_hit(&self, ray: &Ray) -> bool {
        self.bounds.intersects_ray(ray)
    }

    /// Adds scene nodes displaying this entity as children of `parent`.
    ///
    /// Attaching an already attached entity moves it under the new parent.
    pub fn attach(&mut self, parent: &SceneNode3d) {
        if let Some(att) = self.attachment.take() {
            Self::remove_nodes(att);
        }

        let mut parent = parent.clone();
        let mut body = parent.add_render_mesh(self.mesh.clone(), Vec3::ONE);
        body.set_position(self.position);
        body.set_color(self.color);

        let outline = self.outline.map(|outline| {
            let extents = self.size().max(Vec3::splat(f32::EPSILON));
            let scale = (extents + Vec3::splat(outline.margin)) / extents;

            let mut node = parent.add_render_mesh(self.mesh.clone(), scale);
            node.set_position(self.position);
            node.set_surface_rendering_activation(false);
            node.set_lines_width(outline.width, false);
            node.set_lines_color(Some(outline.color));
            node
        });

        self.attachment = Some(Attachment {
            parent,
            body,
            outline,
        });
    }

    /// Removes the scene nodes of this entity, if any.
    pub fn detach(&mut self) {
        if let Some(att) = self.attachment.take() {
            Self::remove_nodes(att);
        }
    }

    /// Draws the bounding box of this entity for the current frame.
    pub fn draw_bounds(&self, window: &mut Window, color: Color, width: f32) {
        for (a, b) in self.bounds.edges() {
            window.draw_line(a, b, color, width, false);
        }
    }

    fn remove_nodes(att: Attachment) {
        let Attachment {
            mut body, outline, ..
        } = att;

        body.remove();
        if let Some(mut outline) = outline {
            outline.remove();
        }
    }
}

impl Drop for Entity {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("position", &self.position)
            .field("shape", &self.shape)
            .field("color", &self.color)
            .field("bounds", &self.bounds)
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Bounds of a mesh in its local frame.
pub fn mesh_bounds(mesh: &RenderMesh) -> Aabb {
    Aabb::from_points(&mesh.coords).unwrap_or(Aabb::new(Vec3::ZERO, Vec3::ZERO))
}
