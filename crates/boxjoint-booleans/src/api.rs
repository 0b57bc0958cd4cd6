//! Public API types for boolean requests and modifier stacks.

use serde::{Deserialize, Serialize};
use tracing::debug;

use boxjoint_primitives::{BoxPrimitive, SolidId, TriangleMesh};

use crate::error::{BooleanError, Result};

/// CSG boolean operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanOp {
    /// Union: combine both solids.
    Union,
    /// Difference: subtract the operand from the target.
    Difference,
    /// Intersection: keep only the overlapping region.
    Intersection,
}

/// Which boolean solver a modifier asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanSolver {
    /// Fast solver, adequate for simple box geometry.
    #[default]
    Fast,
    /// Exact solver, robust for coplanar or complex input.
    Exact,
}

/// A request to combine a box primitive into a target solid.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanRequest {
    /// Solid the operation is applied to.
    pub target: SolidId,
    /// Operand primitive.
    pub operator: BoxPrimitive,
    /// Operation to perform.
    pub op: BooleanOp,
}

impl BooleanRequest {
    /// Create a request.
    pub fn new(target: SolidId, operator: BoxPrimitive, op: BooleanOp) -> Self {
        Self {
            target,
            operator,
            op,
        }
    }
}

/// Non-destructive boolean attached to a solid, applied on evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanModifier {
    /// Modifier name (e.g. `Joint_Union`).
    pub name: String,
    /// Operation to perform.
    pub op: BooleanOp,
    /// Operand primitive.
    pub operator: BoxPrimitive,
    /// Requested solver.
    pub solver: BooleanSolver,
}

impl BooleanModifier {
    /// Create a modifier from a request.
    pub fn from_request(name: impl Into<String>, request: &BooleanRequest, solver: BooleanSolver) -> Self {
        Self {
            name: name.into(),
            op: request.op,
            operator: request.operator.clone(),
            solver,
        }
    }
}

/// Black-box boolean mesh solver.
///
/// Implementations own the actual CSG; the joint only tells them what to
/// combine.
pub trait MeshCombiner {
    /// Combine `base` with `operand` and return the resulting mesh.
    fn combine(
        &mut self,
        base: &TriangleMesh,
        operand: &TriangleMesh,
        op: BooleanOp,
        solver: BooleanSolver,
    ) -> Result<TriangleMesh>;
}

/// Fold a modifier stack over `base`, first modifier first.
pub fn apply_modifiers(
    base: &TriangleMesh,
    modifiers: &[BooleanModifier],
    combiner: &mut dyn MeshCombiner,
) -> Result<TriangleMesh> {
    let mut mesh = base.clone();
    for modifier in modifiers {
        if modifier.operator.volume() <= 0.0 {
            return Err(BooleanError::EmptyOperand(modifier.name.clone()));
        }
        let operand = modifier.operator.to_mesh();
        debug!(
            modifier = %modifier.name,
            op = ?modifier.op,
            triangles = mesh.num_triangles(),
            "applying boolean modifier"
        );
        mesh = combiner.combine(&mesh, &operand, modifier.op, modifier.solver)?;
    }
    Ok(mesh)
}
