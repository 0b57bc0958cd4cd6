//! Ray representation and ray-primitive tests.

use boxjoint_math::{Dir3, Point3, Vec3};
use boxjoint_primitives::{Aabb3, SolidId};

/// Determinant threshold below which a ray counts as parallel to a triangle.
const PARALLEL_EPS: f64 = 1e-12;

/// Barycentric slack so rays through a shared triangle edge hit at least one side.
const EDGE_EPS: f64 = 1e-9;

/// A ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
    /// Precomputed reciprocal of direction components for fast AABB tests.
    inv_direction: Vec3,
    /// Sign of direction components (0 if positive, 1 if negative).
    sign: [usize; 3],
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// The direction will be normalized.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self::from_dir(origin, Dir3::new_normalize(direction))
    }

    /// Create a new ray from origin and an already normalized direction.
    pub fn from_dir(origin: Point3, direction: Dir3) -> Self {
        let inv = Vec3::new(1.0 / direction.x, 1.0 / direction.y, 1.0 / direction.z);
        let sign = [
            usize::from(inv.x < 0.0),
            usize::from(inv.y < 0.0),
            usize::from(inv.z < 0.0),
        ];
        Self {
            origin,
            direction,
            inv_direction: inv,
            sign,
        }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }

    /// Test ray-AABB intersection using the slab method.
    ///
    /// Returns `Some((t_min, t_max))` with the entry and exit parameters,
    /// clamped so `t_min >= 0`, or `None` if the box is missed or behind.
    #[inline]
    pub fn intersect_aabb(&self, aabb: &Aabb3) -> Option<(f64, f64)> {
        let bounds = [aabb.min, aabb.max];

        let tx1 = (bounds[self.sign[0]].x - self.origin.x) * self.inv_direction.x;
        let tx2 = (bounds[1 - self.sign[0]].x - self.origin.x) * self.inv_direction.x;

        let mut t_min = tx1;
        let mut t_max = tx2;

        let ty1 = (bounds[self.sign[1]].y - self.origin.y) * self.inv_direction.y;
        let ty2 = (bounds[1 - self.sign[1]].y - self.origin.y) * self.inv_direction.y;

        t_min = t_min.max(ty1);
        t_max = t_max.min(ty2);

        let tz1 = (bounds[self.sign[2]].z - self.origin.z) * self.inv_direction.z;
        let tz2 = (bounds[1 - self.sign[2]].z - self.origin.z) * self.inv_direction.z;

        t_min = t_min.max(tz1);
        t_max = t_max.min(tz2);

        if t_max >= t_min && t_max >= 0.0 {
            Some((t_min.max(0.0), t_max))
        } else {
            None
        }
    }

    /// Moller-Trumbore ray-triangle intersection.
    ///
    /// Returns the ray parameter of the hit for `t > 0`; both faces of the
    /// triangle count, and edges are widened by a small slack.
    pub fn intersect_triangle(&self, tri: &[Point3; 3]) -> Option<f64> {
        let edge1 = tri[1] - tri[0];
        let edge2 = tri[2] - tri[0];
        let h = self.direction.cross(&edge2);
        let a = edge1.dot(&h);
        if a.abs() < PARALLEL_EPS {
            return None;
        }

        let f = 1.0 / a;
        let s = self.origin - tri[0];
        let u = f * s.dot(&h);
        if !(-EDGE_EPS..=1.0 + EDGE_EPS).contains(&u) {
            return None;
        }

        let q = s.cross(&edge1);
        let v = f * self.direction.dot(&q);
        if v < -EDGE_EPS || u + v > 1.0 + EDGE_EPS {
            return None;
        }

        let t = f * edge2.dot(&q);
        (t > 0.0).then_some(t)
    }
}

/// Result of casting a ray into a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Parameter along the ray where the hit occurs.
    pub t: f64,
    /// World-space hit point.
    pub point: Point3,
    /// Geometric normal of the surface that was hit.
    pub normal: Dir3,
    /// Solid that was hit.
    pub solid_id: SolidId,
}

impl RayHit {
    /// Create a new ray hit.
    pub fn new(t: f64, point: Point3, normal: Dir3, solid_id: SolidId) -> Self {
        Self {
            t,
            point,
            normal,
            solid_id,
        }
    }
}
