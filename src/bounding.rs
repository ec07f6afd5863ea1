//! Axis-aligned bounding boxes and rays used for mouse picking.

use crate::math;
use glamx::Vec3;
use parry3d::bounding_volume::Aabb as ParryAabb;
use parry3d::query::{Ray as ParryRay, RayCast};

/// A half-line starting at `origin` and extending along `dir`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Vec3,
    /// Direction of the ray. Not required to be normalized.
    pub dir: Vec3,
}

impl Ray {
    /// Creates a new ray.
    #[inline]
    pub fn new(origin: Vec3, dir: Vec3) -> Ray {
        Ray { origin, dir }
    }

    /// The point at parameter `t`, i.e., `origin + dir * t`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// The point `len` units away from the origin, along the normalized direction.
    ///
    /// This is what gets drawn when the ray is visualized.
    #[inline]
    pub fn endpoint(&self, len: f32) -> Vec3 {
        math::ray_endpoint(self.origin, self.dir, len)
    }

    /// This ray as a parry query ray.
    #[inline]
    pub fn to_parry(&self) -> ParryRay {
        ParryRay::new(self.origin, self.dir)
    }
}

/// Result of a successful ray cast against a box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// Ray parameter at which the ray enters the box (0 if it starts inside).
    pub toi: f32,
    /// World-space point where the ray enters the box.
    pub point: Vec3,
}

/// An axis-aligned bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// The corner with the smallest coordinates.
    pub mins: Vec3,
    /// The corner with the largest coordinates.
    pub maxs: Vec3,
}

impl Aabb {
    /// Creates a box from its two corners.
    #[inline]
    pub fn new(mins: Vec3, maxs: Vec3) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a box centered at `center` with the given half-extents.
    #[inline]
    pub fn from_half_extents(center: Vec3, half_extents: Vec3) -> Aabb {
        Aabb::new(center - half_extents, center + half_extents)
    }

    /// The smallest box enclosing all the given points.
    ///
    /// Returns `None` if there are no points.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Option<Aabb> {
        math::point_bounds(points).map(|(mins, maxs)| Aabb::new(mins, maxs))
    }

    /// The center of this box.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.mins + self.maxs) * 0.5
    }

    /// The full extents of this box.
    #[inline]
    pub fn extents(&self) -> Vec3 {
        self.maxs - self.mins
    }

    /// This box moved by `shift`.
    #[inline]
    pub fn translated(&self, shift: Vec3) -> Aabb {
        Aabb::new(self.mins + shift, self.maxs + shift)
    }

    /// This box grown by `margin` on every side.
    #[inline]
    pub fn loosened(&self, margin: f32) -> Aabb {
        let m = Vec3::splat(margin);
        Aabb::new(self.mins - m, self.maxs + m)
    }

    /// Whether `pt` lies inside or on the boundary of this box.
    #[inline]
    pub fn contains_point(&self, pt: Vec3) -> bool {
        pt.cmpge(self.mins).all() && pt.cmple(self.maxs).all()
    }

    /// This box as a parry bounding volume.
    #[inline]
    pub fn to_parry(&self) -> ParryAabb {
        ParryAabb::new(self.mins, self.maxs)
    }

    /// The smallest non-negative ray parameter at which `ray` touches this
    /// box, if any. The box is solid: a ray starting inside hits at 0.
    pub fn cast_ray(&self, ray: &Ray) -> Option<RayHit> {
        let toi = self
            .to_parry()
            .cast_local_ray(&ray.to_parry(), f32::MAX, true)?;

        Some(RayHit {
            toi,
            point: ray.point_at(toi),
        })
    }

    /// Whether `ray` touches this box.
    #[inline]
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        self.cast_ray(ray).is_some()
    }

    /// The eight corners of this box.
    ///
    /// Corner `i` takes its x from `maxs` if bit 0 of `i` is set, its y if
    /// bit 1 is set, and its z if bit 2 is set.
    pub fn vertices(&self) -> [Vec3; 8] {
        let mut out = [Vec3::ZERO; 8];
        for (i, pt) in out.iter_mut().enumerate() {
            *pt = Vec3::new(
                if i & 1 == 0 { self.mins.x } else { self.maxs.x },
                if i & 2 == 0 { self.mins.y } else { self.maxs.y },
                if i & 4 == 0 { self.mins.z } else { self.maxs.z },
            );
        }
        out
    }

    /// The twelve edges of this box, as pairs of corners.
    pub fn edges(&self) -> [(Vec3, Vec3); 12] {
        const EDGES: [(usize, usize); 12] = [
            (0, 1),
            (2, 3),
            (4, 5),
            (6, 7),
            (0, 2),
            (1, 3),
            (4, 6),
            (5, 7),
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ];

        let v = self.vertices();
        EDGES.map(|(a, b)| (v[a], v[b]))
    }
}
