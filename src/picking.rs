//! Mouse picking: selecting one entity among those hit by a ray.

use crate::bounding::Ray;
use crate::math::distance;
use crate::shape::Entity;
use glamx::Vec3;

/// How a single entity is chosen when several are hit by the picking ray.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickPolicy {
    /// Every hit replaces the current selection, whatever its distance, so the
    /// last hit in iteration order wins.
    ///
    /// This is the selection the cube picker always had: its distance
    /// comparison assigned the candidate on both branches.
    #[default]
    LastHit,
    /// The hit entity whose position is closest to the eye wins. Ties keep
    /// the earliest one.
    Nearest,
}

/// An entity selected by [`pick`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pick {
    /// Index of the selected entity in the candidate slice.
    pub index: usize,
    /// Distance from the eye to the selected entity position.
    pub distance: f32,
}

/// Indices of all the entities whose bounding box is hit by `ray`.
pub fn hits(ray: &Ray, entities: &[Entity]) -> Vec<usize> {
    entities
        .iter()
        .enumerate()
        .filter(|(_, e)| e.ray_hit(ray))
        .map(|(i, _)| i)
        .collect()
}

/// Selects at most one entity hit by `ray`, as seen from `eye`.
pub fn pick(ray: &Ray, entities: &[Entity], eye: Vec3, policy: PickPolicy) -> Option<Pick> {
    let mut selected: Option<Pick> = None;

    for (index, entity) in entities.iter().enumerate() {
        if !entity.ray_hit(ray) {
            continue;
        }

        let candidate = Pick {
            index,
            distance: distance(eye, entity.position()),
        };

        selected = match (policy, selected) {
            (PickPolicy::Nearest, Some(curr)) if curr.distance <= candidate.distance => Some(curr),
            _ => Some(candidate),
        };
    }

    selected
}

/// Removes the entity selected by [`pick`] from `entities` and returns it.
///
/// At most one entity is removed. The order of the remaining entities is preserved.
pub fn remove_picked(
    ray: &Ray,
    entities: &mut Vec<Entity>,
    eye: Vec3,
    policy: PickPolicy,
) -> Option<Entity> {
    let selected = pick(ray, entities, eye, policy)?;
    Some(entities.remove(selected.index))
}
