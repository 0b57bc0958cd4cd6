//! Local frame and characteristic edge lengths of the selected face.

use tracing::debug;

use boxjoint_math::{Frame, Tolerance, Vec3};

use crate::error::{JointError, Result};
use crate::face::{FaceBoundary, FaceEdge};
use crate::settings::{FacePolicy, JointSettings};

/// Frame of a face plus the two edge lengths that size the tooth.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceFrame {
    /// Orthonormal frame at the face center; tangent along the longest edge.
    pub frame: Frame,
    /// Length of the longest boundary edge.
    pub long_edge: f64,
    /// Length of the shortest boundary edge.
    pub short_edge: f64,
    /// Traversal index of the edge chosen as the tangent.
    pub long_edge_index: usize,
}

/// Derives a [`FaceFrame`] from a face boundary.
///
/// Edges are ranked by length, longest first. Equal lengths keep traversal
/// order, so among several longest edges the first one encountered defines
/// the tangent. The result depends on where traversal starts.
#[derive(Debug, Clone)]
pub struct FrameSolver {
    tolerance: Tolerance,
    policy: FacePolicy,
}

impl FrameSolver {
    /// Solver with explicit tolerance and face policy.
    pub fn new(tolerance: Tolerance, policy: FacePolicy) -> Self {
        Self { tolerance, policy }
    }

    /// Solver configured from joint settings.
    pub fn from_settings(settings: &JointSettings) -> Self {
        Self::new(settings.tolerance(), settings.face_policy)
    }

    /// Compute the face frame.
    ///
    /// `normal_hint` is the world-space outward normal of the face. When it
    /// is shorter than the tolerance the boundary's own Newell normal is
    /// used instead.
    pub fn solve(&self, face: &FaceBoundary, normal_hint: &Vec3) -> Result<FaceFrame> {
        let n = face.len();
        if n < 3 {
            return Err(JointError::DegenerateFace(format!(
                "face has {n} vertices, at least 3 are needed"
            )));
        }

        let area_normal = face.area_normal();
        if self.tolerance.is_zero(area_normal.norm()) {
            return Err(JointError::DegenerateFace("face has near-zero area".into()));
        }

        if self.policy == FacePolicy::QuadOnly && n != 4 {
            return Err(JointError::NonQuadFace { edges: n });
        }

        let normal = if self.tolerance.is_zero(normal_hint.norm()) {
            area_normal
        } else {
            *normal_hint
        };

        let mut edges: Vec<FaceEdge> = face.edges().collect();
        // Stable: ties stay in traversal order.
        edges.sort_by(|a, b| b.length().total_cmp(&a.length()));
        let long = edges[0];
        let short = edges[edges.len() - 1];
        if self.tolerance.is_zero(short.length()) {
            return Err(JointError::DegenerateFace(format!(
                "edge {} has near-zero length",
                short.index
            )));
        }

        let frame = Frame::new(face.center(), &long.vector(), &normal, &self.tolerance)
            .ok_or_else(|| {
                JointError::DegenerateFace(
                    "longest edge is parallel to the face normal".into(),
                )
            })?;

        debug!(
            long_edge = long.length(),
            short_edge = short.length(),
            long_edge_index = long.index,
            tangent = ?frame.tangent.into_inner(),
            normal = ?frame.normal.into_inner(),
            "solved face frame"
        );

        Ok(FaceFrame {
            frame,
            long_edge: long.length(),
            short_edge: short.length(),
            long_edge_index: long.index,
        })
    }
}

impl Default for FrameSolver {
    fn default() -> Self {
        Self::from_settings(&JointSettings::default())
    }
}
