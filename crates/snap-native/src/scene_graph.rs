//! Flat in-memory scene used by the native host.
//!
//! Every entity hangs directly off a single content root whose world
//! transform is `root_transform`, so an entity's position is parent-local.

use glam::{Mat4, Vec3};
use snap_core::{HostEngine, ModelPlacement, PhysicsMaterial, PhysicsMode, SceneHost, StaticBody};

use crate::assets::LoadedModel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(usize);

#[derive(Clone, Debug)]
pub enum EntityKind {
    Static(StaticBody),
    Model(LoadedModel),
}

#[derive(Clone, Debug)]
pub struct Entity {
    pub name: String,
    pub kind: EntityKind,
    pub position: Vec3,
    pub scale: f32,
    pub physics: PhysicsMode,
    pub physics_material: Option<PhysicsMaterial>,
    pub collision: bool,
    pub interactable: bool,
}

pub struct MemoryScene {
    entities: Vec<Entity>,
    root_transform: Mat4,
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

impl MemoryScene {
    pub fn new(root_transform: Mat4) -> Self {
        Self {
            entities: Vec::new(),
            root_transform,
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter()
    }

    pub fn root_transform(&self) -> Mat4 {
        self.root_transform
    }

    pub fn world_position(&self, id: EntityId) -> Option<Vec3> {
        self.get(id)
            .map(|e| self.root_transform.transform_point3(e.position))
    }

    /// World-space centers of everything currently accepting input.
    pub fn interactable_centers(&self) -> impl Iterator<Item = (EntityId, Vec3)> + '_ {
        self.entities
            .iter()
            .enumerate()
            .filter(|(_, e)| e.interactable)
            .map(|(i, e)| (EntityId(i), self.root_transform.transform_point3(e.position)))
    }

    fn add(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.entities.len());
        log::debug!("[scene] spawned {} as {:?}", entity.name, id);
        self.entities.push(entity);
        id
    }
}

impl HostEngine for MemoryScene {
    type Handle = EntityId;

    fn position(&self, object: EntityId) -> Option<Vec3> {
        self.get(object).map(|e| e.position)
    }

    fn set_position(&mut self, object: EntityId, position: Vec3) {
        if let Some(e) = self.entities.get_mut(object.0) {
            e.position = position;
        }
    }

    fn physics_mode(&self, object: EntityId) -> Option<PhysicsMode> {
        self.get(object).map(|e| e.physics)
    }

    fn set_physics_mode(&mut self, object: EntityId, mode: PhysicsMode) {
        if let Some(e) = self.entities.get_mut(object.0) {
            e.physics = mode;
        }
    }

    fn set_interactable(&mut self, object: EntityId, interactable: bool) {
        if let Some(e) = self.entities.get_mut(object.0) {
            e.interactable = interactable;
        }
    }
}

impl SceneHost for MemoryScene {
    type Model = LoadedModel;

    fn spawn_static(&mut self, body: &StaticBody) -> EntityId {
        self.add(Entity {
            name: body.name.clone(),
            kind: EntityKind::Static(body.clone()),
            position: body.position,
            scale: 1.0,
            physics: body.physics_mode(),
            physics_material: None,
            collision: body.generate_collision,
            interactable: false,
        })
    }

    fn spawn_model(&mut self, model: LoadedModel, placement: &ModelPlacement) -> EntityId {
        self.add(Entity {
            name: placement.name.clone(),
            kind: EntityKind::Model(model),
            position: placement.position,
            scale: placement.scale,
            physics: PhysicsMode::Kinematic,
            physics_material: Some(placement.physics),
            collision: true,
            interactable: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snap_core::{DragSnapController, SceneLayout};
    use std::path::PathBuf;

    fn model(name: &str) -> LoadedModel {
        LoadedModel {
            source: PathBuf::from(format!("{name}.glb")),
            node_name: name.to_string(),
        }
    }

    #[test]
    fn spawned_statics_are_static_colliders() {
        let layout = SceneLayout::tabletop();
        let mut scene = MemoryScene::default();
        let table = scene.spawn_static(&layout.statics[1]);
        let e = scene.get(table).unwrap();
        assert_eq!(e.name, "table");
        assert_eq!(e.physics, PhysicsMode::Static);
        assert!(e.collision);
        assert!(!e.interactable);
    }

    #[test]
    fn registered_model_becomes_interactable_and_pickable() {
        let layout = SceneLayout::tabletop();
        let mut scene = MemoryScene::default();
        let mut controller = DragSnapController::new();
        let pot = scene.spawn_model(model("pot"), &layout.models[0]);
        assert_eq!(scene.interactable_centers().count(), 0);

        controller
            .register(&mut scene, pot, layout.models[0].position)
            .unwrap();
        let centers: Vec<_> = scene.interactable_centers().collect();
        assert_eq!(centers, vec![(pot, Vec3::new(-0.5, 0.6, -2.0))]);
        assert_eq!(scene.get(pot).unwrap().scale, 10.0);
    }

    #[test]
    fn world_position_applies_root_transform() {
        let mut scene = MemoryScene::new(Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0)));
        let layout = SceneLayout::tabletop();
        let bird = scene.spawn_model(model("bird"), &layout.models[1]);
        let world = scene.world_position(bird).unwrap();
        assert!((world - Vec3::new(0.5, 1.6, -2.0)).length() < 1e-6);
        assert_eq!(scene.entities().count(), 1);
    }

    #[test]
    fn unknown_handles_are_ignored() {
        let mut scene = MemoryScene::default();
        scene.set_position(EntityId(7), Vec3::ONE);
        assert_eq!(scene.position(EntityId(7)), None);
        assert_eq!(scene.physics_mode(EntityId(7)), None);
    }
}
