//! Mesh-backed scene used for ray casting.

use boxjoint_math::{Dir3, Point3};
use boxjoint_primitives::{Aabb3, SolidId, TriangleMesh};

use crate::ray::{Ray, RayHit};
use crate::RayCaster;

/// Padding applied to each solid's AABB before the broadphase test.
const AABB_PAD: f64 = 1e-6;

#[derive(Debug, Clone)]
struct SceneSolid {
    id: SolidId,
    mesh: TriangleMesh,
    aabb: Aabb3,
}

/// A set of world-space triangle meshes keyed by solid.
///
/// Casting returns the nearest hit over every solid. Equal distances keep
/// the solid inserted first.
#[derive(Debug, Clone, Default)]
pub struct MeshScene {
    solids: Vec<SceneSolid>,
}

impl MeshScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a solid. Empty meshes are ignored.
    pub fn insert(&mut self, id: SolidId, mesh: TriangleMesh) {
        if mesh.is_empty() {
            return;
        }
        let mut aabb = mesh.aabb();
        aabb.expand(AABB_PAD);
        self.solids.push(SceneSolid { id, mesh, aabb });
    }

    /// Number of solids in the scene.
    pub fn len(&self) -> usize {
        self.solids.len()
    }

    /// True if the scene has no solids.
    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    /// Nearest hit of `ray` against the scene.
    pub fn trace(&self, ray: &Ray) -> Option<RayHit> {
        let mut best: Option<(f64, SolidId, [Point3; 3])> = None;

        for solid in &self.solids {
            let Some((t_enter, _)) = ray.intersect_aabb(&solid.aabb) else {
                continue;
            };
            if best.is_some_and(|(t, _, _)| t_enter > t) {
                continue;
            }
            for i in 0..solid.mesh.num_triangles() {
                let tri = solid.mesh.triangle(i);
                if let Some(t) = ray.intersect_triangle(&tri) {
                    if best.map_or(true, |(bt, _, _)| t < bt) {
                        best = Some((t, solid.id, tri));
                    }
                }
            }
        }

        best.map(|(t, id, tri)| {
            let n = (tri[1] - tri[0]).cross(&(tri[2] - tri[0]));
            let normal = Dir3::try_new(n, 0.0).unwrap_or_else(|| -ray.direction);
            RayHit::new(t, ray.at(t), normal, id)
        })
    }
}

impl RayCaster for MeshScene {
    fn cast_ray(&self, origin: &Point3, direction: &Dir3) -> Option<RayHit> {
        self.trace(&Ray::from_dir(*origin, *direction))
    }
}
