//! Rectangular solids placed in a local frame.

use boxjoint_math::{Frame, Point3, Transform, Vec3};

use crate::bbox::Aabb3;
use crate::mesh::{PolyMesh, TriangleMesh};
use crate::make_unit_cube;

/// A unit cube scaled by full `extents` and placed by `placement`.
///
/// `extents.x` runs along the frame tangent, `extents.y` along the binormal
/// and `extents.z` along the normal. The cube is centered on the frame
/// origin.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPrimitive {
    /// Display name of the primitive (e.g. `Tooth_Union`).
    pub name: String,
    /// Local-to-world placement.
    pub placement: Frame,
    /// Full extents along the frame axes.
    pub extents: Vec3,
}

impl BoxPrimitive {
    /// Create a box primitive.
    pub fn new(name: impl Into<String>, placement: Frame, extents: Vec3) -> Self {
        Self {
            name: name.into(),
            placement,
            extents,
        }
    }

    /// Unit-cube-to-world transform: scale first, then place.
    pub fn transform(&self) -> Transform {
        self.placement.to_transform().then(&Transform::scale(
            self.extents.x,
            self.extents.y,
            self.extents.z,
        ))
    }

    /// The 8 world-space corners, in unit cube vertex order.
    pub fn corners(&self) -> [Point3; 8] {
        let t = self.transform();
        let cube = make_unit_cube();
        std::array::from_fn(|i| t.apply_point(&cube.vertices[i]))
    }

    /// Test if a world-space point lies inside the box, within `tol`.
    pub fn contains_point(&self, p: &Point3, tol: f64) -> bool {
        let d = p - self.placement.origin;
        let local = [
            d.dot(self.placement.tangent.as_ref()),
            d.dot(self.placement.binormal.as_ref()),
            d.dot(self.placement.normal.as_ref()),
        ];
        local
            .iter()
            .zip(self.extents.iter())
            .all(|(c, e)| c.abs() <= e / 2.0 + tol)
    }

    /// World-space polygonal mesh of the box.
    pub fn to_poly_mesh(&self) -> PolyMesh {
        make_unit_cube().transformed(&self.transform())
    }

    /// World-space triangle mesh of the box.
    pub fn to_mesh(&self) -> TriangleMesh {
        self.to_poly_mesh().triangulate()
    }

    /// World-space bounding box.
    pub fn aabb(&self) -> Aabb3 {
        let mut aabb = Aabb3::empty();
        for c in &self.corners() {
            aabb.include_point(c);
        }
        aabb
    }

    /// Enclosed volume.
    pub fn volume(&self) -> f64 {
        self.extents.x * self.extents.y * self.extents.z
    }
}
