//! Caller-side scene context: objects, selection, helpers and modifiers.
//!
//! The geometric core in [`crate::assembler`] never touches this state. A
//! [`JointSession`] validates the selection, feeds the core, and records
//! what it returns: helper primitives in a collection and boolean
//! modifiers on the affected solids.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{info, instrument};

use boxjoint_booleans::{apply_modifiers, BooleanModifier, BooleanOp, MeshCombiner};
use boxjoint_math::{Transform, Vec3};
use boxjoint_primitives::{BoxPrimitive, PolyMesh, SolidId, TriangleMesh};
use boxjoint_raycast::MeshScene;

use crate::assembler::{JointAssembler, JointAssembly};
use crate::error::{JointError, Result};
use crate::face::FaceBoundary;

/// Name of the union modifier added to the source solid.
pub const UNION_MODIFIER: &str = "Joint_Union";
/// Name of the difference modifier added to the target solid.
pub const CUT_MODIFIER: &str = "Joint_Cut";

/// Interaction mode of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Whole objects are selected.
    #[default]
    Object,
    /// Faces of the active object are selected.
    Edit,
}

/// How a helper is drawn if its collection is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayType {
    /// Wireframe only.
    Wire,
}

/// A solid in the scene.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Identifier.
    pub id: SolidId,
    /// Display name.
    pub name: String,
    /// Local-space geometry.
    pub mesh: PolyMesh,
    /// Local-to-world placement.
    pub world: Transform,
    /// Boolean modifier stack, applied in order.
    pub modifiers: Vec<BooleanModifier>,
}

impl SceneObject {
    /// World-space triangle mesh without modifiers.
    pub fn world_mesh(&self) -> TriangleMesh {
        self.mesh.transformed(&self.world).triangulate()
    }
}

/// A helper primitive linked into a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct HelperObject {
    /// The primitive.
    pub primitive: BoxPrimitive,
    /// Display style.
    pub display: DisplayType,
}

/// A named group of helper primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct HelperCollection {
    /// Collection name.
    pub name: String,
    /// Hidden from display.
    pub hidden: bool,
    /// Linked helpers.
    pub objects: Vec<HelperObject>,
}

impl HelperCollection {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            hidden: false,
            objects: Vec::new(),
        }
    }

    /// Find a helper by name.
    pub fn get(&self, name: &str) -> Option<&HelperObject> {
        self.objects.iter().find(|o| o.primitive.name == name)
    }
}

/// `base`, or `base.001`, `base.002`, ... whichever is not taken yet.
fn unique_name<'a>(base: &str, taken: impl Iterator<Item = &'a str> + Clone) -> String {
    if !taken.clone().any(|n| n == base) {
        return base.to_string();
    }
    (1..)
        .map(|i| format!("{base}.{i:03}"))
        .find(|candidate| !taken.clone().any(|n| n == candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Scene context a joint is created in.
#[derive(Debug, Clone, Default)]
pub struct JointSession {
    objects: BTreeMap<SolidId, SceneObject>,
    next_id: u64,
    active: Option<SolidId>,
    selected_objects: BTreeSet<SolidId>,
    mode: Mode,
    selected_faces: BTreeSet<usize>,
    collections: Vec<HelperCollection>,
}

impl JointSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a solid and return its id.
    ///
    /// Fails with [`JointError::InvalidMesh`] if a face names a vertex the
    /// mesh does not have.
    pub fn add_object(
        &mut self,
        name: impl Into<String>,
        mesh: PolyMesh,
        world: Transform,
    ) -> Result<SolidId> {
        if let Some((face, index)) = mesh.out_of_range_index() {
            return Err(JointError::InvalidMesh(format!(
                "face {face} references vertex {index}, mesh has {}",
                mesh.vertices.len()
            )));
        }
        self.next_id += 1;
        let id = SolidId(self.next_id);
        self.objects.insert(
            id,
            SceneObject {
                id,
                name: name.into(),
                mesh,
                world,
                modifiers: Vec::new(),
            },
        );
        Ok(id)
    }

    /// Look up a solid.
    pub fn object(&self, id: SolidId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// All solids, ordered by id.
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    /// The active solid.
    pub fn active(&self) -> Option<SolidId> {
        self.active
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True if `id` is among the selected objects.
    pub fn is_selected(&self, id: SolidId) -> bool {
        self.selected_objects.contains(&id)
    }

    /// Make `id` the active, solely selected object. Leaves edit mode.
    pub fn set_active(&mut self, id: SolidId) -> Result<()> {
        if !self.objects.contains_key(&id) {
            return Err(JointError::UnknownSolid(id));
        }
        self.enter_object_mode();
        self.active = Some(id);
        self.selected_objects.clear();
        self.selected_objects.insert(id);
        Ok(())
    }

    /// Enter edit mode on the active object.
    pub fn enter_edit_mode(&mut self) -> Result<()> {
        if self.active.is_none() {
            return Err(JointError::InvalidSelection(
                "no active object to edit".into(),
            ));
        }
        self.mode = Mode::Edit;
        Ok(())
    }

    /// Return to object mode, dropping the face selection.
    pub fn enter_object_mode(&mut self) {
        self.mode = Mode::Object;
        self.selected_faces.clear();
    }

    /// Add a face of the active object to the selection.
    pub fn select_face(&mut self, face: usize) -> Result<()> {
        let id = self.require_edit_mode()?;
        let faces = self.objects.get(&id).map_or(0, |o| o.mesh.faces.len());
        if face >= faces {
            return Err(JointError::InvalidSelection(format!(
                "face {face} does not exist on {id} ({faces} faces)"
            )));
        }
        self.selected_faces.insert(face);
        Ok(())
    }

    /// Clear the face selection.
    pub fn deselect_faces(&mut self) {
        self.selected_faces.clear();
    }

    fn require_edit_mode(&self) -> Result<SolidId> {
        match (self.active, self.mode) {
            (Some(id), Mode::Edit) => Ok(id),
            _ => Err(JointError::InvalidSelection(
                "must be in edit mode with a face selected".into(),
            )),
        }
    }

    /// The single selected face in world space, with its owning solid and
    /// world-space normal hint.
    pub fn selected_face(&self) -> Result<(SolidId, FaceBoundary, Vec3)> {
        let id = self.require_edit_mode()?;
        let face = match self.selected_faces.iter().collect::<Vec<_>>().as_slice() {
            [face] => **face,
            faces => {
                return Err(JointError::InvalidSelection(format!(
                    "select exactly one face ({} selected)",
                    faces.len()
                )))
            }
        };
        let object = self.objects.get(&id).ok_or(JointError::UnknownSolid(id))?;
        let (boundary, hint) = FaceBoundary::from_mesh_face(&object.mesh, face, &object.world)
            .ok_or_else(|| JointError::InvalidSelection(format!("face {face} does not exist on {id}")))?;
        Ok((id, boundary, hint))
    }

    /// Ray caster over every solid in world space, without modifiers.
    pub fn scene_caster(&self) -> MeshScene {
        let mut scene = MeshScene::new();
        for object in self.objects.values() {
            scene.insert(object.id, object.world_mesh());
        }
        scene
    }

    /// Helper collection by name.
    pub fn collection(&self, name: &str) -> Option<&HelperCollection> {
        self.collections.iter().find(|c| c.name == name)
    }

    fn collection_mut(&mut self, name: &str) -> &mut HelperCollection {
        let index = match self.collections.iter().position(|c| c.name == name) {
            Some(index) => index,
            None => {
                self.collections.push(HelperCollection::new(name));
                self.collections.len() - 1
            }
        };
        &mut self.collections[index]
    }

    /// Build a box joint on the selected face.
    ///
    /// On success the session is back in object mode, the tooth helpers are
    /// linked into the helper collection, the source carries a
    /// `Joint_Union` modifier, the target (if any) a `Joint_Cut` modifier,
    /// and the source is the only selected object. On error nothing changes.
    #[instrument(skip_all)]
    pub fn create_box_joint(&mut self, assembler: &JointAssembler) -> Result<JointAssembly> {
        let (source, face, hint) = self.selected_face()?;
        let settings = assembler.settings().clone();
        let caster = self.scene_caster();
        let mut assembly = assembler.assemble(&face, &hint, source, settings.clearance, &caster)?;

        if let Some(missing) = assembly
            .requests
            .iter()
            .map(|r| r.target)
            .find(|id| !self.objects.contains_key(id))
        {
            return Err(JointError::UnknownSolid(missing));
        }

        self.enter_object_mode();

        let collection = self.collection_mut(&settings.helper_collection);
        if settings.hide_helpers {
            collection.hidden = true;
        }
        let union_name = unique_name(
            &assembly.union_primitive.name,
            collection.objects.iter().map(|o| o.primitive.name.as_str()),
        );
        let cutter_name = unique_name(
            &assembly.cutter_primitive.name,
            collection.objects.iter().map(|o| o.primitive.name.as_str()),
        );
        assembly.rename_primitives(&union_name, &cutter_name);
        for primitive in [&assembly.union_primitive, &assembly.cutter_primitive] {
            collection.objects.push(HelperObject {
                primitive: primitive.clone(),
                display: DisplayType::Wire,
            });
        }

        for request in &assembly.requests {
            let base = match request.op {
                BooleanOp::Union => UNION_MODIFIER,
                _ => CUT_MODIFIER,
            };
            if let Some(object) = self.objects.get_mut(&request.target) {
                let name = unique_name(base, object.modifiers.iter().map(|m| m.name.as_str()));
                object
                    .modifiers
                    .push(BooleanModifier::from_request(name, request, settings.solver));
            }
        }

        self.selected_objects.clear();
        self.selected_objects.insert(source);
        self.active = Some(source);

        info!(
            source = %source,
            target = ?assembly.adjacency.solid(),
            collection = %settings.helper_collection,
            "box joint modifiers applied"
        );
        Ok(assembly)
    }

    /// World-space mesh of `id` with its modifier stack applied.
    pub fn evaluate(&self, id: SolidId, combiner: &mut dyn MeshCombiner) -> Result<TriangleMesh> {
        let object = self.objects.get(&id).ok_or(JointError::UnknownSolid(id))?;
        Ok(apply_modifiers(&object.world_mesh(), &object.modifiers, combiner)?)
    }
}
