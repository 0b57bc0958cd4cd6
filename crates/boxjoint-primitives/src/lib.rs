#![warn(missing_docs)]

//! Solids, meshes and box primitives for box joint construction.
//!
//! - [`SolidId`] names a solid in the caller's scene
//! - [`PolyMesh`] is a polygonal solid with selectable faces
//! - [`TriangleMesh`] is the flat triangle soup handed to ray casters and
//!   boolean solvers
//! - [`BoxPrimitive`] is a unit cube scaled and placed in a tooth frame

pub mod bbox;
mod mesh;
mod tooth_box;

pub use bbox::Aabb3;
pub use mesh::{PolyMesh, TriangleMesh};
pub use tooth_box::BoxPrimitive;

use serde::{Deserialize, Serialize};
use std::fmt;

use boxjoint_math::Point3;

/// Opaque identifier of a solid in the caller's scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SolidId(pub u64);

impl fmt::Display for SolidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "solid#{}", self.0)
    }
}

/// Build a unit cube (side 1) centered at the origin.
///
/// The cube has 8 vertices and 6 quad faces, wound counter-clockwise when
/// viewed from outside so every Newell normal points outward.
/// ```text
///     v4----v5
///    /|    /|
///   v7----v6|    z
///   | v0--|-v1   | y
///   |/    |/     |/
///   v3----v2     +---x
/// ```
pub fn make_unit_cube() -> PolyMesh {
    make_cuboid(1.0, 1.0, 1.0)
}

/// Build a cuboid with full extents `(sx, sy, sz)` centered at the origin.
pub fn make_cuboid(sx: f64, sy: f64, sz: f64) -> PolyMesh {
    let (hx, hy, hz) = (sx / 2.0, sy / 2.0, sz / 2.0);
    let vertices = vec![
        Point3::new(-hx, -hy, -hz),
        Point3::new(hx, -hy, -hz),
        Point3::new(hx, hy, -hz),
        Point3::new(-hx, hy, -hz),
        Point3::new(-hx, -hy, hz),
        Point3::new(hx, -hy, hz),
        Point3::new(hx, hy, hz),
        Point3::new(-hx, hy, hz),
    ];
    let faces = vec![
        // -Z
        vec![0, 3, 2, 1],
        // +Z
        vec![4, 5, 6, 7],
        // -Y
        vec![0, 1, 5, 4],
        // +Y
        vec![2, 3, 7, 6],
        // -X
        vec![0, 4, 7, 3],
        // +X
        vec![1, 2, 6, 5],
    ];
    PolyMesh { vertices, faces }
}
