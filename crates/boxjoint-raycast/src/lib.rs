#![warn(missing_docs)]

//! Scene ray casting for adjacent solid detection.
//!
//! - [`Ray`] - origin plus unit direction, with AABB and triangle tests
//! - [`RayHit`] - nearest hit: point, normal and the solid that was hit
//! - [`RayCaster`] - the scene-wide ray cast a joint is computed against
//! - [`MeshScene`] - a [`RayCaster`] over world-space triangle meshes
//!
//! # Example
//!
//! ```
//! use boxjoint_math::{Dir3, Point3, Transform, Vec3};
//! use boxjoint_primitives::{make_unit_cube, SolidId};
//! use boxjoint_raycast::{MeshScene, RayCaster};
//!
//! let mut scene = MeshScene::new();
//! let cube = make_unit_cube().transformed(&Transform::translation(0.0, 0.0, 2.0));
//! scene.insert(SolidId(1), cube.triangulate());
//!
//! let hit = scene.cast_ray(&Point3::origin(), &Dir3::new_normalize(Vec3::z()));
//! assert_eq!(hit.map(|h| h.solid_id), Some(SolidId(1)));
//! ```

mod ray;
mod scene;

pub use ray::{Ray, RayHit};
pub use scene::MeshScene;

use boxjoint_math::{Dir3, Point3};

/// Scene-wide ray intersection.
///
/// Returns the nearest hit in front of `origin` along `direction`, or `None`.
pub trait RayCaster {
    /// Cast one ray into the scene.
    fn cast_ray(&self, origin: &Point3, direction: &Dir3) -> Option<RayHit>;
}

impl<F> RayCaster for F
where
    F: Fn(&Point3, &Dir3) -> Option<RayHit>,
{
    fn cast_ray(&self, origin: &Point3, direction: &Dir3) -> Option<RayHit> {
        self(origin, direction)
    }
}
