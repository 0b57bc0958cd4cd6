//! World-space boundary of the selected face.

use boxjoint_math::{Point3, Transform, Vec3};
use boxjoint_primitives::PolyMesh;

/// One boundary edge, from vertex `index` to the next vertex in traversal
/// order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceEdge {
    /// Position of the edge in traversal order.
    pub index: usize,
    /// Start point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
}

impl FaceEdge {
    /// Edge vector `end - start`.
    pub fn vector(&self) -> Vec3 {
        self.end - self.start
    }

    /// Edge length.
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }
}

/// Ordered world-space vertices of a planar face. The boundary is closed:
/// the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceBoundary {
    vertices: Vec<Point3>,
}

impl FaceBoundary {
    /// Boundary from ordered world-space vertices.
    pub fn new(vertices: Vec<Point3>) -> Self {
        Self { vertices }
    }

    /// World-space boundary of `face` on `mesh` placed by `world`, together
    /// with the world-space normal hint (the local Newell normal mapped by
    /// the inverse transpose, not normalized). `None` if `face` is out of
    /// range.
    pub fn from_mesh_face(mesh: &PolyMesh, face: usize, world: &Transform) -> Option<(Self, Vec3)> {
        if face >= mesh.faces.len() {
            return None;
        }
        let vertices = mesh
            .face_vertices(face)
            .iter()
            .map(|p| world.apply_point(p))
            .collect();
        let hint = world.apply_normal(&mesh.face_normal(face));
        Some((Self { vertices }, hint))
    }

    /// Boundary vertices in traversal order.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Number of boundary edges (equal to the vertex count).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if the boundary has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Boundary edges in traversal order.
    ///
    /// A boundary with fewer than two vertices has no edges.
    pub fn edges(&self) -> impl Iterator<Item = FaceEdge> + '_ {
        let n = if self.vertices.len() < 2 { 0 } else { self.vertices.len() };
        (0..n).map(move |i| FaceEdge {
            index: i,
            start: self.vertices[i],
            end: self.vertices[(i + 1) % n],
        })
    }

    /// Median center: the plain mean of the vertices.
    pub fn center(&self) -> Point3 {
        let sum = self
            .vertices
            .iter()
            .fold(Vec3::zeros(), |acc, p| acc + p.coords);
        Point3::from(sum / self.vertices.len().max(1) as f64)
    }

    /// Newell normal of the boundary; its length is twice the enclosed area.
    pub fn area_normal(&self) -> Vec3 {
        let mut n = Vec3::zeros();
        for e in self.edges() {
            let (a, b) = (e.start, e.end);
            n.x += (a.y - b.y) * (a.z + b.z);
            n.y += (a.z - b.z) * (a.x + b.x);
            n.z += (a.x - b.x) * (a.y + b.y);
        }
        n
    }
}
