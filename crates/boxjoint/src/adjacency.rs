//! Detection of the solid that lies across the selected face.

use tracing::debug;

use boxjoint_math::{Dir3, Point3};
use boxjoint_primitives::SolidId;
use boxjoint_raycast::RayCaster;

/// Outcome of the adjacency ray cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency {
    /// Nothing lies along the normal. Not an error: the joint is one-sided.
    NotFound,
    /// The ray hit this solid first.
    Found(SolidId),
}

impl Adjacency {
    /// The solid that was found, if any.
    pub fn solid(&self) -> Option<SolidId> {
        match self {
            Adjacency::Found(id) => Some(*id),
            Adjacency::NotFound => None,
        }
    }
}

/// Casts a single ray outward from the face to find its neighbor.
///
/// The ray starts `ray_offset` in front of the origin so it does not hit
/// the source face itself. The offset is an absolute length: too small for
/// very large meshes and able to skip a neighbor closer than itself.
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyLocator {
    ray_offset: f64,
}

impl AdjacencyLocator {
    /// Locator with the given ray start offset.
    pub fn new(ray_offset: f64) -> Self {
        Self { ray_offset }
    }

    /// The ray start offset.
    pub fn ray_offset(&self) -> f64 {
        self.ray_offset
    }

    /// Cast once from `origin + direction * ray_offset` along `direction`.
    /// Never retries and never casts in the opposite direction.
    pub fn locate(&self, origin: &Point3, direction: &Dir3, caster: &dyn RayCaster) -> Adjacency {
        let start = origin + direction.as_ref() * self.ray_offset;
        match caster.cast_ray(&start, direction) {
            Some(hit) => {
                debug!(solid = %hit.solid_id, t = hit.t, "adjacent solid found");
                Adjacency::Found(hit.solid_id)
            }
            None => Adjacency::NotFound,
        }
    }
}
