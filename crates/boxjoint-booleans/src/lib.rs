#![warn(missing_docs)]

//! Boolean operation requests for box joints.
//!
//! The joint never runs CSG itself. It emits [`BooleanRequest`]s, which a
//! caller records as [`BooleanModifier`]s on its solids and later evaluates
//! through a [`MeshCombiner`].

mod api;
pub mod error;

pub use api::{
    apply_modifiers, BooleanModifier, BooleanOp, BooleanRequest, BooleanSolver, MeshCombiner,
};
pub use error::{BooleanError, Result};

#[cfg(test)]
mod tests {
    use super::*;
    use boxjoint_math::{Frame, Vec3};
    use boxjoint_primitives::{BoxPrimitive, SolidId, TriangleMesh};

    /// Records each call and returns the operand merged into the base.
    #[derive(Default)]
    struct MergingCombiner {
        calls: Vec<(BooleanOp, BooleanSolver)>,
    }

    impl MeshCombiner for MergingCombiner {
        fn combine(
            &mut self,
            base: &TriangleMesh,
            operand: &TriangleMesh,
            op: BooleanOp,
            solver: BooleanSolver,
        ) -> Result<TriangleMesh> {
            self.calls.push((op, solver));
            let mut out = base.clone();
            out.merge(operand);
            Ok(out)
        }
    }

    struct FailingCombiner;

    impl MeshCombiner for FailingCombiner {
        fn combine(
            &mut self,
            _: &TriangleMesh,
            _: &TriangleMesh,
            op: BooleanOp,
            _: BooleanSolver,
        ) -> Result<TriangleMesh> {
            Err(BooleanError::Unsupported(op))
        }
    }

    fn modifier(name: &str, op: BooleanOp, extents: Vec3) -> BooleanModifier {
        let request = BooleanRequest::new(
            SolidId(1),
            BoxPrimitive::new("Tooth", Frame::world(), extents),
            op,
        );
        BooleanModifier::from_request(name, &request, BooleanSolver::Fast)
    }

    #[test]
    fn test_modifiers_applied_in_order() {
        let stack = [
            modifier("Joint_Union", BooleanOp::Union, Vec3::new(1.0, 1.0, 1.0)),
            modifier("Joint_Cut", BooleanOp::Difference, Vec3::new(2.0, 2.0, 2.0)),
        ];
        let mut combiner = MergingCombiner::default();
        let out = apply_modifiers(&TriangleMesh::new(), &stack, &mut combiner).unwrap();
        assert_eq!(out.num_triangles(), 24);
        assert_eq!(
            combiner.calls,
            vec![
                (BooleanOp::Union, BooleanSolver::Fast),
                (BooleanOp::Difference, BooleanSolver::Fast)
            ]
        );
    }

    #[test]
    fn test_empty_stack_returns_base() {
        let base = boxjoint_primitives::make_unit_cube().triangulate();
        let out = apply_modifiers(&base, &[], &mut FailingCombiner).unwrap();
        assert_eq!(out, base);
    }

    #[test]
    fn test_combiner_error_propagates() {
        let stack = [modifier("Joint_Union", BooleanOp::Union, Vec3::new(1.0, 1.0, 1.0))];
        let err = apply_modifiers(&TriangleMesh::new(), &stack, &mut FailingCombiner).unwrap_err();
        assert!(matches!(err, BooleanError::Unsupported(BooleanOp::Union)));
    }

    #[test]
    fn test_flat_operand_rejected() {
        let stack = [modifier("Joint_Cut", BooleanOp::Difference, Vec3::new(1.0, 0.0, 1.0))];
        let mut combiner = MergingCombiner::default();
        let err = apply_modifiers(&TriangleMesh::new(), &stack, &mut combiner).unwrap_err();
        assert!(matches!(err, BooleanError::EmptyOperand(name) if name == "Joint_Cut"));
        assert!(combiner.calls.is_empty());
    }

    #[test]
    fn test_default_solver_is_fast() {
        assert_eq!(BooleanSolver::default(), BooleanSolver::Fast);
    }
}
