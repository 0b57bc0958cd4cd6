//! Joint construction parameters.

use std::path::Path;

use serde::{Deserialize, Serialize};

use boxjoint_booleans::BooleanSolver;
use boxjoint_math::Tolerance;

use crate::error::{JointError, Result};

/// Which faces the frame solver accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacePolicy {
    /// Only quadrilateral faces.
    #[default]
    QuadOnly,
    /// Any polygon with at least three edges, sized from its longest and
    /// shortest edge.
    AnyPolygon,
}

/// Joint construction parameters.
///
/// Every field has a default, so a TOML file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JointSettings {
    /// How much larger the cutter tooth is than the union tooth, per axis.
    pub clearance: f64,
    /// Distance the adjacency ray starts in front of the face.
    pub ray_offset: f64,
    /// Normals and edges shorter than this count as zero.
    pub degenerate_epsilon: f64,
    /// Which faces are accepted.
    pub face_policy: FacePolicy,
    /// Solver requested by the boolean modifiers.
    pub solver: BooleanSolver,
    /// Name of the collection helper primitives are linked into.
    pub helper_collection: String,
    /// Hide the helper collection.
    pub hide_helpers: bool,
}

impl Default for JointSettings {
    fn default() -> Self {
        Self {
            clearance: 0.5,
            ray_offset: 0.01,
            degenerate_epsilon: 1e-9,
            face_policy: FacePolicy::QuadOnly,
            solver: BooleanSolver::Fast,
            helper_collection: "BoxJoint_Helpers".into(),
            hide_helpers: true,
        }
    }
}

impl JointSettings {
    /// Parse settings from a TOML string and validate them.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file and validate them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !self.clearance.is_finite() || self.clearance < 0.0 {
            return Err(JointError::InvalidClearance(self.clearance));
        }
        if !self.ray_offset.is_finite() || self.ray_offset <= 0.0 {
            return Err(JointError::InvalidSettings(
                "ray_offset must be positive".into(),
            ));
        }
        if !self.degenerate_epsilon.is_finite() || self.degenerate_epsilon <= 0.0 {
            return Err(JointError::InvalidSettings(
                "degenerate_epsilon must be positive".into(),
            ));
        }
        if self.helper_collection.trim().is_empty() {
            return Err(JointError::InvalidSettings(
                "helper_collection must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Geometric tolerance derived from `degenerate_epsilon`.
    pub fn tolerance(&self) -> Tolerance {
        Tolerance::with_linear(self.degenerate_epsilon)
    }
}
