//! Property-based tests for joint construction using the `proptest` crate.

use proptest::prelude::*;

use boxjoint::boxjoint_math::{Dir3, Point3, Transform, Vec3};
use boxjoint::boxjoint_primitives::{make_cuboid, SolidId};
use boxjoint::boxjoint_raycast::{MeshScene, RayHit};
use boxjoint::{Adjacency, FaceBoundary, FrameSolver, JointAssembler, JointSettings, ToothSpec};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_dim() -> impl Strategy<Value = f64> {
    0.1f64..100.0
}

fn arb_clearance() -> impl Strategy<Value = f64> {
    0.0f64..5.0
}

fn arb_angle() -> impl Strategy<Value = f64> {
    -std::f64::consts::PI..std::f64::consts::PI
}

fn arb_axis() -> impl Strategy<Value = Dir3> {
    (-1.0f64..1.0, -1.0f64..1.0, -1.0f64..1.0)
        .prop_filter("axis too short", |(x, y, z)| Vec3::new(*x, *y, *z).norm() > 0.1)
        .prop_map(|(x, y, z)| Dir3::new_normalize(Vec3::new(x, y, z)))
}

fn arb_translation() -> impl Strategy<Value = (f64, f64, f64)> {
    (-100.0f64..100.0, -100.0f64..100.0, -100.0f64..100.0)
}

/// A `w` by `h` rectangle in the XY plane, moved by a rigid transform.
fn placed_rectangle(w: f64, h: f64, world: &Transform) -> (FaceBoundary, Vec3) {
    let local = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(w, 0.0, 0.0),
        Point3::new(w, h, 0.0),
        Point3::new(0.0, h, 0.0),
    ];
    let face = FaceBoundary::new(local.iter().map(|p| world.apply_point(p)).collect());
    (face, world.apply_normal(&Vec3::z()))
}

fn rigid(axis: &Dir3, angle: f64, (tx, ty, tz): (f64, f64, f64)) -> Transform {
    Transform::translation(tx, ty, tz).then(&Transform::rotation_about_axis(axis, angle))
}

fn miss(_: &Point3, _: &Dir3) -> Option<RayHit> {
    None
}

const TOL: f64 = 1e-6;

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn frame_is_orthonormal_for_any_placement(
        w in arb_dim(),
        h in arb_dim(),
        axis in arb_axis(),
        angle in arb_angle(),
        offset in arb_translation(),
    ) {
        let world = rigid(&axis, angle, offset);
        let (face, hint) = placed_rectangle(w, h, &world);
        let solved = FrameSolver::default().solve(&face, &hint).unwrap();

        prop_assert!(solved.frame.is_orthonormal(1e-9));
        prop_assert!((solved.frame.normal.into_inner() - hint.normalize()).norm() < TOL);
        prop_assert!((solved.long_edge - w.max(h)).abs() < TOL * w.max(h));
        prop_assert!((solved.short_edge - w.min(h)).abs() < TOL * w.max(h));

        let center = world.apply_point(&Point3::new(w / 2.0, h / 2.0, 0.0));
        prop_assert!((solved.frame.origin - center).norm() < TOL * 100.0);
    }
}

proptest! {
    #[test]
    fn tangent_follows_longer_side(
        w in arb_dim(),
        h in arb_dim(),
        axis in arb_axis(),
        angle in arb_angle(),
    ) {
        prop_assume!((w - h).abs() > 1e-3);
        let world = Transform::rotation_about_axis(&axis, angle);
        let (face, hint) = placed_rectangle(w, h, &world);
        let solved = FrameSolver::default().solve(&face, &hint).unwrap();

        let long_axis = if w > h { Vec3::x() } else { Vec3::y() };
        let expected = world.apply_vec(&long_axis);
        prop_assert!((solved.frame.tangent.dot(&expected).abs() - 1.0).abs() < TOL);
    }
}

// ---------------------------------------------------------------------------
// Sizing
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn cutter_exceeds_tooth_by_clearance(
        long in arb_dim(),
        short in arb_dim(),
        clearance in arb_clearance(),
    ) {
        let tooth = ToothSpec::size(long, short, clearance);
        let diff = tooth.cutter_extents() - tooth.exact_extents();
        prop_assert!((diff - Vec3::repeat(clearance)).norm() < 1e-9);
        prop_assert_eq!(tooth.width, long / 2.0);
        prop_assert_eq!(tooth.thickness, short);
        prop_assert_eq!(tooth.protrusion, short);
        prop_assert_eq!(tooth.placement_offset(), short / 2.0);
    }
}

proptest! {
    #[test]
    fn cutter_encloses_union_tooth(
        w in arb_dim(),
        h in arb_dim(),
        clearance in arb_clearance(),
        axis in arb_axis(),
        angle in arb_angle(),
    ) {
        let world = Transform::rotation_about_axis(&axis, angle);
        let (face, hint) = placed_rectangle(w, h, &world);
        let assembler = JointAssembler::new(JointSettings::default()).unwrap();
        let joint = assembler.assemble(&face, &hint, SolidId(1), clearance, &miss).unwrap();

        prop_assert_eq!(&joint.union_primitive.placement, &joint.cutter_primitive.placement);
        for corner in joint.union_primitive.corners() {
            prop_assert!(joint.cutter_primitive.contains_point(&corner, 1e-6 * w.max(h)));
        }
    }
}

proptest! {
    #[test]
    fn tooth_rests_on_face_plane(
        w in arb_dim(),
        h in arb_dim(),
        axis in arb_axis(),
        angle in arb_angle(),
        offset in arb_translation(),
    ) {
        let world = rigid(&axis, angle, offset);
        let (face, hint) = placed_rectangle(w, h, &world);
        let assembler = JointAssembler::new(JointSettings::default()).unwrap();
        let joint = assembler.assemble(&face, &hint, SolidId(1), 0.0, &miss).unwrap();

        // The tooth's inner face lies in the face plane, its outer face one
        // protrusion further out.
        let frame = &joint.face.frame;
        let depths: Vec<f64> = joint
            .union_primitive
            .corners()
            .iter()
            .map(|c| (c - frame.origin).dot(frame.normal.as_ref()))
            .collect();
        let scale = w.max(h);
        let min = depths.iter().copied().fold(f64::INFINITY, f64::min);
        let max = depths.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(min.abs() < TOL * scale);
        prop_assert!((max - joint.tooth.protrusion).abs() < TOL * scale);
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn assembly_is_deterministic(
        w in arb_dim(),
        h in arb_dim(),
        clearance in arb_clearance(),
        axis in arb_axis(),
        angle in arb_angle(),
        offset in arb_translation(),
    ) {
        let world = rigid(&axis, angle, offset);
        let (face, hint) = placed_rectangle(w, h, &world);
        let assembler = JointAssembler::new(JointSettings::default()).unwrap();
        let first = assembler.assemble(&face, &hint, SolidId(1), clearance, &miss).unwrap();
        let second = assembler.assemble(&face, &hint, SolidId(1), clearance, &miss).unwrap();
        prop_assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn neighbor_across_gap_is_found(
        gap in 0.02f64..20.0,
        thickness in 0.1f64..5.0,
    ) {
        // Unit square at z = 0 facing +Z; a wide slab floats `gap` above it.
        let face = FaceBoundary::new(vec![
            Point3::new(-0.5, -0.5, 0.0),
            Point3::new(0.5, -0.5, 0.0),
            Point3::new(0.5, 0.5, 0.0),
            Point3::new(-0.5, 0.5, 0.0),
        ]);
        let slab = make_cuboid(3.0, 3.0, thickness)
            .transformed(&Transform::translation(0.1, 0.2, gap + thickness / 2.0));
        let mut scene = MeshScene::new();
        scene.insert(SolidId(7), slab.triangulate());

        let assembler = JointAssembler::new(JointSettings::default()).unwrap();
        let joint = assembler.assemble(&face, &Vec3::z(), SolidId(1), 0.5, &scene).unwrap();
        prop_assert_eq!(joint.adjacency, Adjacency::Found(SolidId(7)));
        prop_assert_eq!(joint.requests.len(), 2);
        prop_assert_eq!(joint.difference_request().map(|r| r.target), Some(SolidId(7)));
    }
}

proptest! {
    #[test]
    fn nothing_behind_the_face_is_found(
        gap in 0.0f64..20.0,
    ) {
        let face = FaceBoundary::new(vec![
            Point3::new(-0.5, -0.5, 0.0),
            Point3::new(0.5, -0.5, 0.0),
            Point3::new(0.5, 0.5, 0.0),
            Point3::new(-0.5, 0.5, 0.0),
        ]);
        let below = make_cuboid(3.0, 3.0, 1.0)
            .transformed(&Transform::translation(0.0, 0.0, -gap - 0.5));
        let mut scene = MeshScene::new();
        scene.insert(SolidId(7), below.triangulate());

        let assembler = JointAssembler::new(JointSettings::default()).unwrap();
        let joint = assembler.assemble(&face, &Vec3::z(), SolidId(1), 0.5, &scene).unwrap();
        prop_assert_eq!(joint.adjacency, Adjacency::NotFound);
        prop_assert_eq!(joint.requests.len(), 1);
    }
}
