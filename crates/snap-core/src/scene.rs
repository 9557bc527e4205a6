//! One-time scene construction: static bodies plus draggable models.
//!
//! The layout is plain data. `populate` walks it once at startup, asks the
//! resolver for each model and registers whatever actually loaded. A model
//! that fails to resolve simply never appears.

use glam::Vec3;

use crate::asset::{AssetResolver, LoadOutcome};
use crate::constants::{
    table_position_vec3, BIRD_MODEL, BIRD_POSITION, BIRD_SCALE, DYNAMIC_FRICTION, FLOOR_SIZE,
    POT_MODEL, POT_POSITION, POT_SCALE, RESTITUTION, STATIC_FRICTION, TABLE_COLOR, TABLE_SIZE,
};
use crate::controller::DragSnapController;
use crate::host::{HostEngine, PhysicsMode};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Plane { width: f32, depth: f32 },
    Box { size: Vec3 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    /// Invisible, hides virtual content behind real-world surfaces.
    Occlusion,
    Simple { color: [f32; 3], metallic: bool },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsMaterial {
    pub static_friction: f32,
    pub dynamic_friction: f32,
    pub restitution: f32,
}

impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self {
            static_friction: STATIC_FRICTION,
            dynamic_friction: DYNAMIC_FRICTION,
            restitution: RESTITUTION,
        }
    }
}

/// Immovable geometry such as the floor and the table.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticBody {
    pub name: String,
    pub shape: Shape,
    pub material: Material,
    pub position: Vec3,
    pub generate_collision: bool,
}

impl StaticBody {
    pub fn physics_mode(&self) -> PhysicsMode {
        PhysicsMode::Static
    }
}

/// Where and how a loaded model is placed before it becomes draggable.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelPlacement {
    pub name: String,
    pub position: Vec3,
    pub scale: f32,
    pub physics: PhysicsMaterial,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneLayout {
    pub statics: Vec<StaticBody>,
    pub models: Vec<ModelPlacement>,
}

impl SceneLayout {
    /// Floor, table, and the pot and bird resting on the table top.
    pub fn tabletop() -> Self {
        let statics = vec![
            StaticBody {
                name: "floor".into(),
                shape: Shape::Plane {
                    width: FLOOR_SIZE[0],
                    depth: FLOOR_SIZE[1],
                },
                material: Material::Occlusion,
                position: Vec3::ZERO,
                generate_collision: true,
            },
            StaticBody {
                name: "table".into(),
                shape: Shape::Box {
                    size: Vec3::from(TABLE_SIZE),
                },
                material: Material::Simple {
                    color: TABLE_COLOR,
                    metallic: false,
                },
                position: table_position_vec3(),
                generate_collision: true,
            },
        ];
        let models = vec![
            ModelPlacement {
                name: POT_MODEL.into(),
                position: Vec3::from(POT_POSITION),
                scale: POT_SCALE,
                physics: PhysicsMaterial::default(),
            },
            ModelPlacement {
                name: BIRD_MODEL.into(),
                position: Vec3::from(BIRD_POSITION),
                scale: BIRD_SCALE,
                physics: PhysicsMaterial::default(),
            },
        ];
        Self { statics, models }
    }
}

/// Host capabilities needed only while building the scene.
pub trait SceneHost: HostEngine {
    type Model;

    fn spawn_static(&mut self, body: &StaticBody) -> Self::Handle;

    /// Add a loaded model with scale, position, collision shapes and a
    /// kinematic physics body already applied.
    fn spawn_model(&mut self, model: Self::Model, placement: &ModelPlacement) -> Self::Handle;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PopulateReport {
    pub statics: usize,
    pub registered: Vec<String>,
    pub skipped: Vec<String>,
}

/// Build `layout` into `host` and register every model that loaded.
pub async fn populate<R, S>(
    layout: &SceneLayout,
    resolver: &mut R,
    host: &mut S,
    controller: &mut DragSnapController<S::Handle>,
) -> PopulateReport
where
    R: AssetResolver,
    S: SceneHost<Model = R::Model>,
{
    let mut report = PopulateReport::default();

    for body in &layout.statics {
        host.spawn_static(body);
        report.statics += 1;
    }

    for placement in &layout.models {
        let model = match resolver.resolve(&placement.name).await {
            LoadOutcome::Loaded(model) => model,
            LoadOutcome::Absent => {
                log::warn!("[scene] model '{}' unavailable; skipping", placement.name);
                report.skipped.push(placement.name.clone());
                continue;
            }
        };
        let handle = host.spawn_model(model, placement);
        match controller.register(host, handle, placement.position) {
            Ok(()) => report.registered.push(placement.name.clone()),
            Err(err) => {
                log::error!("[scene] '{}': {err}", placement.name);
                report.skipped.push(placement.name.clone());
            }
        }
    }

    log::info!(
        "[scene] {} static bodies, {} draggable, {} skipped",
        report.statics,
        report.registered.len(),
        report.skipped.len()
    );
    report
}
