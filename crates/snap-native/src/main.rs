use anyhow::Context;
use glam::Vec2;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use snap_core::{populate, Camera, DragSnapController, HostEngine, SceneLayout};

mod assets;
mod input;
mod scene_graph;

use assets::GltfAssets;
use input::PointerInput;
use scene_graph::{EntityId, EntityKind, MemoryScene};

const ASSET_DIR_ENV: &str = "SNAP_ASSET_DIR";
const DEFAULT_ASSET_DIR: &str = "assets";

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let asset_dir = std::env::var(ASSET_DIR_ENV).unwrap_or_else(|_| DEFAULT_ASSET_DIR.into());
    let mut resolver = GltfAssets::new(&asset_dir);
    let mut scene = MemoryScene::default();
    let mut controller: DragSnapController<EntityId> = DragSnapController::new();

    let report = pollster::block_on(populate(
        &SceneLayout::tabletop(),
        &mut resolver,
        &mut scene,
        &mut controller,
    ));
    for name in &report.skipped {
        log::warn!("'{name}' did not load from {asset_dir}; it will not appear");
    }
    if controller.is_empty() {
        log::warn!("no draggable models loaded; put pot/bird glTF files in {asset_dir}");
    }
    log_scene(&scene, &report.registered);

    let event_loop = EventLoop::new().context("creating event loop")?;
    let window = WindowBuilder::new()
        .with_title("Snapback (native)")
        .build(&event_loop)
        .context("creating window")?;

    let size = window.inner_size();
    let mut pointer = PointerInput::new(
        Camera::default(),
        Vec2::new(size.width as f32, size.height as f32),
    );

    event_loop
        .run(move |event, elwt| {
            let Event::WindowEvent { event, .. } = event else {
                return;
            };
            let gesture = match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                    None
                }
                WindowEvent::Resized(size) => {
                    pointer.resize(Vec2::new(size.width as f32, size.height as f32));
                    None
                }
                WindowEvent::CursorMoved { position, .. } => {
                    pointer.cursor_moved(Vec2::new(position.x as f32, position.y as f32), &scene)
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => match state {
                    ElementState::Pressed => pointer.pressed(&scene),
                    ElementState::Released => pointer.released(),
                },
                WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) => pointer.cancel(),
                _ => None,
            };
            if let Some(gesture) = gesture {
                let object = gesture.object();
                let terminal = gesture.is_terminal();
                controller.dispatch(&mut scene, gesture);
                window.set_title(&status_line(&scene, object, terminal));
            }
        })
        .context("running event loop")?;
    Ok(())
}

fn status_line(scene: &MemoryScene, object: EntityId, terminal: bool) -> String {
    let name = scene.get(object).map_or("?", |e| e.name.as_str());
    let pos = scene.position(object).unwrap_or_default();
    let verb = if terminal { "resting" } else { "dragging" };
    format!(
        "Snapback: {name} {verb} at ({:.2}, {:.2}, {:.2})",
        pos.x, pos.y, pos.z
    )
}

fn log_scene(scene: &MemoryScene, registered: &[String]) {
    for entity in scene.entities() {
        let what = match &entity.kind {
            EntityKind::Static(body) => format!("{:?} {:?}", body.shape, body.material),
            EntityKind::Model(model) => {
                format!("node '{}' from {}", model.node_name, model.source.display())
            }
        };
        log::info!(
            "{} at {} scale {} {:?} collision={} friction={:?}: {what}",
            entity.name,
            entity.position,
            entity.scale,
            entity.physics,
            entity.collision,
            entity.physics_material,
        );
    }
    log::info!("draggable: {}", registered.join(", "));
}
