//! Joint assembly: frame, tooth, neighbor, primitives and boolean requests.

use tracing::{info, instrument, warn};

use boxjoint_booleans::{BooleanOp, BooleanRequest};
use boxjoint_math::Vec3;
use boxjoint_primitives::{BoxPrimitive, SolidId};
use boxjoint_raycast::RayCaster;

use crate::adjacency::{Adjacency, AdjacencyLocator};
use crate::error::{JointError, Result};
use crate::face::FaceBoundary;
use crate::frame_solver::{FaceFrame, FrameSolver};
use crate::settings::JointSettings;
use crate::sizer::ToothSpec;

/// Name of the exact-fit tooth primitive.
pub const UNION_TOOTH: &str = "Tooth_Union";
/// Name of the enlarged cutter primitive.
pub const CUTTER_TOOTH: &str = "Tooth_Cutter";

/// Everything a caller needs to materialize one box joint.
#[derive(Debug, Clone, PartialEq)]
pub struct JointAssembly {
    /// Frame and edge lengths of the source face.
    pub face: FaceFrame,
    /// Tooth dimensions.
    pub tooth: ToothSpec,
    /// Solid found across the face, if any.
    pub adjacency: Adjacency,
    /// Exact-fit tooth, to be unioned into the source.
    pub union_primitive: BoxPrimitive,
    /// Enlarged tooth, to be subtracted from the target.
    pub cutter_primitive: BoxPrimitive,
    /// Union on the source, then difference on the target when one exists.
    pub requests: Vec<BooleanRequest>,
}

impl JointAssembly {
    /// The union request on the source solid.
    pub fn union_request(&self) -> Option<&BooleanRequest> {
        self.requests.iter().find(|r| r.op == BooleanOp::Union)
    }

    /// The difference request on the target solid, if a target was found.
    pub fn difference_request(&self) -> Option<&BooleanRequest> {
        self.requests.iter().find(|r| r.op == BooleanOp::Difference)
    }

    /// Rename both primitives, including the copies held by the requests.
    pub fn rename_primitives(&mut self, union_name: &str, cutter_name: &str) {
        self.union_primitive.name = union_name.to_string();
        self.cutter_primitive.name = cutter_name.to_string();
        for request in &mut self.requests {
            request.operator.name = match request.op {
                BooleanOp::Union => union_name.to_string(),
                _ => cutter_name.to_string(),
            };
        }
    }
}

/// Runs the frame solver, tooth sizer and adjacency locator and turns the
/// result into two box primitives and their boolean requests.
///
/// Holds no state between calls.
#[derive(Debug, Clone)]
pub struct JointAssembler {
    settings: JointSettings,
    frame_solver: FrameSolver,
    locator: AdjacencyLocator,
}

impl JointAssembler {
    /// Assembler for validated settings.
    pub fn new(settings: JointSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            frame_solver: FrameSolver::from_settings(&settings),
            locator: AdjacencyLocator::new(settings.ray_offset),
            settings,
        })
    }

    /// The settings this assembler was built with.
    pub fn settings(&self) -> &JointSettings {
        &self.settings
    }

    /// Build the joint for `face` on `source`.
    ///
    /// Fails before producing anything if `clearance` is negative or the
    /// face is degenerate. A missing neighbor only drops the difference
    /// request.
    #[instrument(skip(self, face, normal_hint, source, caster), fields(source = %source))]
    pub fn assemble(
        &self,
        face: &FaceBoundary,
        normal_hint: &Vec3,
        source: SolidId,
        clearance: f64,
        caster: &dyn RayCaster,
    ) -> Result<JointAssembly> {
        if !clearance.is_finite() || clearance < 0.0 {
            return Err(JointError::InvalidClearance(clearance));
        }

        let solved = self.frame_solver.solve(face, normal_hint)?;
        let tooth = ToothSpec::size(solved.long_edge, solved.short_edge, clearance);
        let adjacency = self
            .locator
            .locate(&solved.frame.origin, &solved.frame.normal, caster);

        let placement = solved
            .frame
            .translated_along_normal(tooth.placement_offset());
        let union_primitive = BoxPrimitive::new(UNION_TOOTH, placement.clone(), tooth.exact_extents());
        let cutter_primitive = BoxPrimitive::new(CUTTER_TOOTH, placement, tooth.cutter_extents());

        let mut requests = vec![BooleanRequest::new(
            source,
            union_primitive.clone(),
            BooleanOp::Union,
        )];
        match adjacency {
            Adjacency::Found(target) => {
                if target == source {
                    warn!("adjacency ray hit the source solid itself");
                }
                requests.push(BooleanRequest::new(
                    target,
                    cutter_primitive.clone(),
                    BooleanOp::Difference,
                ));
            }
            Adjacency::NotFound => {
                warn!("no adjacent solid found along the face normal");
            }
        }

        info!(
            width = tooth.width,
            thickness = tooth.thickness,
            protrusion = tooth.protrusion,
            target = ?adjacency.solid(),
            "assembled box joint"
        );

        Ok(JointAssembly {
            face: solved,
            tooth,
            adjacency,
            union_primitive,
            cutter_primitive,
            requests,
        })
    }
}
