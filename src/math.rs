//! Small vector helpers on top of `glamx`.
//!
//! `glamx::Vec3` already implements componentwise `+`, `-`, `*` and `/` by
//! vector and by scalar, along with the compound assignment operators, so
//! scene code uses them directly. This module only adds the few free
//! functions the scenes need on top of that.

use glamx::Vec3;

/// Euclidean distance between two points.
///
/// # Example
/// ```
/// # use kiss3d_scenes::math::distance;
/// # use glamx::Vec3;
/// let d = distance(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
/// assert_eq!(d, 5.0);
/// ```
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    (a - b).length()
}

/// The point reached after moving `len` units from `origin` along `direction`.
///
/// `direction` does not need to be normalized. A zero direction yields `origin`.
#[inline]
pub fn ray_endpoint(origin: Vec3, direction: Vec3, len: f32) -> Vec3 {
    origin + direction.normalize_or_zero() * Vec3::splat(len)
}

/// Componentwise minimum and maximum of a set of points.
///
/// Returns `None` if `points` is empty.
pub fn point_bounds<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Option<(Vec3, Vec3)> {
    let mut it = points.into_iter();
    let first = *it.next()?;

    Some(it.fold((first, first), |(mins, maxs), pt| {
        (mins.min(*pt), maxs.max(*pt))
    }))
}

/// Linear remapping of `value` from `[from_min, from_max]` to `[to_min, to_max]`.
///
/// A degenerate source range maps everything to the middle of the target range.
#[inline]
pub fn remap(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    let span = from_max - from_min;
    if span.abs() <= f32::EPSILON {
        return (to_min + to_max) * 0.5;
    }

    to_min + (value - from_min) / span * (to_max - to_min)
}
