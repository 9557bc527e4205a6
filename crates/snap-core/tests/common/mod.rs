// Recording host shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use glam::Vec3;
use snap_core::{HostEngine, ModelPlacement, PhysicsMode, SceneHost, StaticBody};

#[derive(Clone, Debug, Default)]
pub struct FakeObject {
    pub position: Vec3,
    pub physics: Option<PhysicsMode>,
    pub interactable: bool,
    pub scale: f32,
}

#[derive(Default)]
pub struct FakeHost {
    pub objects: HashMap<&'static str, FakeObject>,
    pub statics: Vec<String>,
    pub calls: usize,
}

impl FakeHost {
    pub fn with(names: &[(&'static str, Vec3)]) -> Self {
        let mut host = Self::default();
        for (name, position) in names {
            host.objects.insert(
                *name,
                FakeObject {
                    position: *position,
                    scale: 1.0,
                    ..Default::default()
                },
            );
        }
        host
    }

    pub fn pos(&self, name: &str) -> Vec3 {
        self.objects[name].position
    }

    pub fn mode(&self, name: &str) -> Option<PhysicsMode> {
        self.objects[name].physics
    }
}

impl HostEngine for FakeHost {
    type Handle = &'static str;

    fn position(&self, object: &'static str) -> Option<Vec3> {
        self.objects.get(object).map(|o| o.position)
    }

    fn set_position(&mut self, object: &'static str, position: Vec3) {
        self.calls += 1;
        self.objects.entry(object).or_default().position = position;
    }

    fn physics_mode(&self, object: &'static str) -> Option<PhysicsMode> {
        self.objects.get(object).and_then(|o| o.physics)
    }

    fn set_physics_mode(&mut self, object: &'static str, mode: PhysicsMode) {
        self.calls += 1;
        self.objects.entry(object).or_default().physics = Some(mode);
    }

    fn set_interactable(&mut self, object: &'static str, interactable: bool) {
        self.calls += 1;
        self.objects.entry(object).or_default().interactable = interactable;
    }
}

impl SceneHost for FakeHost {
    type Model = &'static str;

    fn spawn_static(&mut self, body: &StaticBody) -> &'static str {
        self.statics.push(body.name.clone());
        "static"
    }

    fn spawn_model(&mut self, model: &'static str, placement: &ModelPlacement) -> &'static str {
        self.objects.insert(
            model,
            FakeObject {
                position: placement.position,
                physics: Some(PhysicsMode::Kinematic),
                interactable: false,
                scale: placement.scale,
            },
        );
        model
    }
}
