//! Error types for joint construction.

use thiserror::Error;

use boxjoint_booleans::BooleanError;
use boxjoint_primitives::SolidId;

/// Errors that can occur while building a box joint.
#[derive(Error, Debug)]
pub enum JointError {
    /// The caller's selection does not name exactly one editable face.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// The face cannot yield a stable orthonormal frame.
    #[error("degenerate face: {0}")]
    DegenerateFace(String),

    /// The face is not a quadrilateral and the face policy requires one.
    #[error("face has {edges} edges, expected a quad")]
    NonQuadFace {
        /// Number of boundary edges found.
        edges: usize,
    },

    /// Clearance is negative or not finite.
    #[error("clearance must be a finite non-negative length, got {0}")]
    InvalidClearance(f64),

    /// Settings failed validation.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A mesh handed to the session is malformed.
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),

    /// No solid with this id exists in the session.
    #[error("unknown solid {0}")]
    UnknownSolid(SolidId),

    /// Settings file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Settings file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The boolean combiner failed while evaluating a modifier stack.
    #[error(transparent)]
    Boolean(#[from] BooleanError),
}

/// Result type for joint operations.
pub type Result<T> = std::result::Result<T, JointError>;
