//! Orthonormal local frames anchored at a point.

use crate::{Dir3, Point3, Tolerance, Transform, Vec3};

/// A right-handed orthonormal frame: tangent (local X), binormal (local Y)
/// and normal (local Z), anchored at `origin`.
///
/// Invariant: `tangent x binormal == normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Origin of the frame in world space.
    pub origin: Point3,
    /// Unit tangent (local X axis).
    pub tangent: Dir3,
    /// Unit binormal (local Y axis), `normal x tangent`.
    pub binormal: Dir3,
    /// Unit normal (local Z axis).
    pub normal: Dir3,
}

impl Frame {
    /// Build a frame from a normal and an approximate in-plane tangent.
    ///
    /// The binormal is `normalize(normal x tangent)`; the tangent is then
    /// re-derived as `binormal x normal`, dropping whatever component of the
    /// input tangent lies along the normal. Returns `None` when either input
    /// is shorter than `tol.linear` or the two are parallel.
    pub fn new(origin: Point3, tangent: &Vec3, normal: &Vec3, tol: &Tolerance) -> Option<Self> {
        let normal = tol.normalize(normal)?;
        let tangent = tol.normalize(tangent)?;
        let binormal = tol.normalize(&normal.cross(tangent.as_ref()))?;
        let tangent = Dir3::new_normalize(binormal.cross(normal.as_ref()));
        Some(Self {
            origin,
            tangent,
            binormal,
            normal,
        })
    }

    /// The world-aligned frame at the origin.
    pub fn world() -> Self {
        Self {
            origin: Point3::origin(),
            tangent: Vec3::x_axis(),
            binormal: Vec3::y_axis(),
            normal: Vec3::z_axis(),
        }
    }

    /// Local-to-world rigid transform.
    pub fn to_transform(&self) -> Transform {
        Transform::from_basis(
            self.tangent.as_ref(),
            self.binormal.as_ref(),
            self.normal.as_ref(),
            &self.origin,
        )
    }

    /// Map a point from local frame coordinates to world space.
    pub fn local_to_world(&self, p: &Point3) -> Point3 {
        self.origin
            + p.x * self.tangent.as_ref()
            + p.y * self.binormal.as_ref()
            + p.z * self.normal.as_ref()
    }

    /// Copy of this frame with the origin moved `distance` along the normal.
    pub fn translated_along_normal(&self, distance: f64) -> Self {
        Self {
            origin: self.origin + distance * self.normal.as_ref(),
            ..self.clone()
        }
    }

    /// Check unit lengths, pairwise orthogonality and right-handedness.
    pub fn is_orthonormal(&self, eps: f64) -> bool {
        let (t, b, n) = (
            self.tangent.as_ref(),
            self.binormal.as_ref(),
            self.normal.as_ref(),
        );
        let unit = [t, b, n].iter().all(|v| (v.norm() - 1.0).abs() <= eps);
        let orthogonal = t.dot(b).abs() <= eps && t.dot(n).abs() <= eps && b.dot(n).abs() <= eps;
        let right_handed = (t.cross(b) - n).norm() <= eps;
        unit && orthogonal && right_handed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_frame_from_axis_aligned_inputs() {
        let frame = Frame::new(
            Point3::origin(),
            &Vec3::new(2.0, 0.0, 0.0),
            &Vec3::new(0.0, 0.0, 3.0),
            &Tolerance::DEFAULT,
        )
        .unwrap();
        assert_abs_diff_eq!(frame.tangent.into_inner(), Vec3::x(), epsilon = 1e-12);
        assert_abs_diff_eq!(frame.binormal.into_inner(), Vec3::y(), epsilon = 1e-12);
        assert!(frame.is_orthonormal(1e-12));
    }

    #[test]
    fn test_tilted_tangent_is_projected() {
        let frame = Frame::new(
            Point3::origin(),
            &Vec3::new(1.0, 0.0, 0.2),
            &Vec3::z(),
            &Tolerance::DEFAULT,
        )
        .unwrap();
        assert_abs_diff_eq!(frame.tangent.into_inner(), Vec3::x(), epsilon = 1e-12);
        assert!(frame.is_orthonormal(1e-12));
    }

    #[test]
    fn test_parallel_inputs_rejected() {
        let frame = Frame::new(
            Point3::origin(),
            &Vec3::new(0.0, 0.0, 2.0),
            &Vec3::z(),
            &Tolerance::DEFAULT,
        );
        assert!(frame.is_none());
        assert!(Frame::new(Point3::origin(), &Vec3::zeros(), &Vec3::z(), &Tolerance::DEFAULT).is_none());
    }

    #[test]
    fn test_transform_matches_local_to_world() {
        let frame = Frame::new(
            Point3::new(1.0, 2.0, 3.0),
            &Vec3::new(0.0, 1.0, 0.0),
            &Vec3::new(1.0, 0.0, 0.0),
            &Tolerance::DEFAULT,
        )
        .unwrap();
        let local = Point3::new(0.5, -0.25, 2.0);
        let via_transform = frame.to_transform().apply_point(&local);
        assert_abs_diff_eq!(via_transform, frame.local_to_world(&local), epsilon = 1e-12);
    }

    #[test]
    fn test_translated_along_normal() {
        let moved = Frame::world().translated_along_normal(0.5);
        assert_abs_diff_eq!(moved.origin, Point3::new(0.0, 0.0, 0.5), epsilon = 1e-12);
        assert_eq!(moved.tangent, Frame::world().tangent);
    }
}
