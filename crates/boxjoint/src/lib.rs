#![warn(missing_docs)]

//! Box (finger) joints between two adjacent solids.
//!
//! Given one selected face of a source solid, the crate derives a local
//! frame on that face, sizes a rectangular tooth from the face's edge
//! lengths, finds the solid across the face with a single ray cast, and
//! emits two box primitives plus the boolean requests that join them:
//! a union of the exact tooth into the source and a difference of the
//! enlarged cutter from the target.
//!
//! - [`FrameSolver`] - face frame and characteristic edge lengths
//! - [`ToothSpec`] - tooth and cutter dimensions
//! - [`AdjacencyLocator`] - neighbor detection along the face normal
//! - [`JointAssembler`] - ties the three together into a [`JointAssembly`]
//! - [`JointSession`] - selection, helper collection and modifier bookkeeping
//!
//! # Example
//!
//! ```
//! use boxjoint::{Adjacency, JointAssembler, JointSession, JointSettings};
//! use boxjoint::boxjoint_math::Transform;
//! use boxjoint::boxjoint_primitives::make_unit_cube;
//!
//! let mut session = JointSession::new();
//! let source = session.add_object("Left", make_unit_cube(), Transform::identity())?;
//! let target = session.add_object("Right", make_unit_cube(), Transform::translation(1.0, 0.0, 0.0))?;
//!
//! session.set_active(source)?;
//! session.enter_edit_mode()?;
//! session.select_face(5)?; // +X face
//!
//! let assembler = JointAssembler::new(JointSettings::default())?;
//! let joint = session.create_box_joint(&assembler)?;
//! assert_eq!(joint.adjacency, Adjacency::Found(target));
//! assert_eq!(session.object(target).unwrap().modifiers[0].name, "Joint_Cut");
//! # Ok::<(), boxjoint::JointError>(())
//! ```

pub use boxjoint_booleans;
pub use boxjoint_math;
pub use boxjoint_primitives;
pub use boxjoint_raycast;

pub mod adjacency;
pub mod assembler;
pub mod error;
pub mod face;
pub mod frame_solver;
pub mod session;
pub mod settings;
pub mod sizer;

pub use adjacency::{Adjacency, AdjacencyLocator};
pub use assembler::{JointAssembler, JointAssembly, CUTTER_TOOTH, UNION_TOOTH};
pub use error::{JointError, Result};
pub use face::{FaceBoundary, FaceEdge};
pub use frame_solver::{FaceFrame, FrameSolver};
pub use session::{
    DisplayType, HelperCollection, HelperObject, JointSession, Mode, SceneObject, CUT_MODIFIER,
    UNION_MODIFIER,
};
pub use settings::{FacePolicy, JointSettings};
pub use sizer::ToothSpec;
