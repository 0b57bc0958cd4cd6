//! Polygonal and triangle meshes.

use boxjoint_math::{Point3, Transform, Vec3};

use crate::bbox::Aabb3;

/// A polygonal solid in its own local space.
///
/// Faces are vertex index loops, counter-clockwise when viewed from outside.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Faces as loops of indices into `vertices`.
    pub faces: Vec<Vec<u32>>,
}

impl PolyMesh {
    /// First face index that does not name a vertex, as `(face, index)`.
    pub fn out_of_range_index(&self) -> Option<(usize, u32)> {
        let n = self.vertices.len();
        self.faces.iter().enumerate().find_map(|(fi, face)| {
            face.iter()
                .find(|&&i| i as usize >= n)
                .map(|&i| (fi, i))
        })
    }

    /// Ordered vertex positions of face `face`.
    ///
    /// Panics if `face` is out of range or names a missing vertex; see
    /// [`PolyMesh::out_of_range_index`].
    pub fn face_vertices(&self, face: usize) -> Vec<Point3> {
        self.faces[face]
            .iter()
            .map(|&i| self.vertices[i as usize])
            .collect()
    }

    /// Mean of the face's vertices (not area-weighted).
    pub fn face_center(&self, face: usize) -> Point3 {
        let verts = self.face_vertices(face);
        let sum = verts.iter().fold(Vec3::zeros(), |acc, p| acc + p.coords);
        Point3::from(sum / verts.len().max(1) as f64)
    }

    /// Newell normal of face `face`. Not normalized: its length is twice the
    /// face area, so a near-zero result marks a degenerate face.
    pub fn face_normal(&self, face: usize) -> Vec3 {
        newell_normal(&self.face_vertices(face))
    }

    /// Copy with every vertex mapped through `transform`.
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|p| transform.apply_point(p))
                .collect(),
            faces: self.faces.clone(),
        }
    }

    /// Fan-triangulate every face with at least three vertices.
    pub fn triangulate(&self) -> TriangleMesh {
        let mut mesh = TriangleMesh::new();
        for p in &self.vertices {
            mesh.vertices
                .extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
        }

        // Accumulate face normals per vertex, normalized below.
        let mut accum = vec![Vec3::zeros(); self.vertices.len()];
        for (fi, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                continue;
            }
            let n = self.face_normal(fi);
            for &i in face {
                accum[i as usize] += n;
            }
            for k in 1..face.len() - 1 {
                mesh.indices
                    .extend_from_slice(&[face[0], face[k], face[k + 1]]);
            }
        }
        for n in accum {
            let n = n.try_normalize(1e-12).unwrap_or_else(Vec3::zeros);
            mesh.normals
                .extend_from_slice(&[n.x as f32, n.y as f32, n.z as f32]);
        }
        mesh
    }
}

/// Newell's method: robust polygon normal scaled by twice the area.
pub(crate) fn newell_normal(points: &[Point3]) -> Vec3 {
    let mut n = Vec3::zeros();
    for (i, a) in points.iter().enumerate() {
        let b = &points[(i + 1) % points.len()];
        n.x += (a.y - b.y) * (a.z + b.z);
        n.y += (a.z - b.z) * (a.x + b.x);
        n.z += (a.x - b.x) * (a.y + b.y);
    }
    n
}

/// A triangle mesh with flat f32 buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]`.
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]`.
    pub indices: Vec<u32>,
    /// Flat array of vertex normals, same length as `vertices`.
    pub normals: Vec<f32>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// True if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Position of vertex `i`.
    pub fn vertex(&self, i: usize) -> Point3 {
        Point3::new(
            self.vertices[i * 3] as f64,
            self.vertices[i * 3 + 1] as f64,
            self.vertices[i * 3 + 2] as f64,
        )
    }

    /// Corner positions of triangle `t`.
    pub fn triangle(&self, t: usize) -> [Point3; 3] {
        let tri = &self.indices[t * 3..t * 3 + 3];
        [
            self.vertex(tri[0] as usize),
            self.vertex(tri[1] as usize),
            self.vertex(tri[2] as usize),
        ]
    }

    /// Merge another mesh into this one.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.num_vertices() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(other.indices.iter().map(|&i| i + offset));
    }

    /// Bounding box of all vertices.
    pub fn aabb(&self) -> Aabb3 {
        let mut aabb = Aabb3::empty();
        for i in 0..self.num_vertices() {
            aabb.include_point(&self.vertex(i));
        }
        aabb
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}
