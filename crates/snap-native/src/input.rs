//! Mouse input → drag gestures.
//!
//! Press picks the nearest interactable model under the cursor and locks a
//! depth plane through its center; moves project the cursor onto that plane;
//! release (or losing the pointer) ends the gesture.

use glam::Vec2;
use snap_core::{
    pick, project_onto_plane_z, to_parent_local, Camera, DragState, GestureEvent,
    PICK_SPHERE_RADIUS,
};

use crate::scene_graph::{EntityId, MemoryScene};

pub struct PointerInput {
    pub camera: Camera,
    cursor_px: Vec2,
    viewport_px: Vec2,
    drag: Option<DragState<EntityId>>,
}

impl PointerInput {
    pub fn new(camera: Camera, viewport_px: Vec2) -> Self {
        let mut camera = camera;
        camera.set_viewport(viewport_px);
        Self {
            camera,
            cursor_px: viewport_px * 0.5,
            viewport_px,
            drag: None,
        }
    }

    pub fn resize(&mut self, viewport_px: Vec2) {
        if viewport_px.x <= 0.0 || viewport_px.y <= 0.0 {
            return;
        }
        self.viewport_px = viewport_px;
        self.camera.set_viewport(viewport_px);
    }

    pub fn dragging(&self) -> Option<EntityId> {
        self.drag.map(|d| d.object)
    }

    pub fn cursor_moved(
        &mut self,
        cursor_px: Vec2,
        scene: &MemoryScene,
    ) -> Option<GestureEvent<EntityId>> {
        self.cursor_px = cursor_px;
        let drag = self.drag?;
        let location = self.project(drag.plane_z_world, scene)?;
        Some(GestureEvent::Changed {
            object: drag.object,
            location,
        })
    }

    pub fn pressed(&mut self, scene: &MemoryScene) -> Option<GestureEvent<EntityId>> {
        if let Some(drag) = self.drag {
            log::debug!("[mouse] press while dragging {:?}; ignored", drag.object);
            return None;
        }
        let ray = self.camera.ray_through(self.cursor_px, self.viewport_px);
        let object = pick(&ray, scene.interactable_centers(), PICK_SPHERE_RADIUS)?;
        let center = scene.world_position(object)?;
        self.drag = Some(DragState {
            object,
            plane_z_world: center.z,
        });
        log::info!("[mouse] begin drag on {object:?}");
        let location = self
            .project(center.z, scene)
            .unwrap_or_else(|| to_parent_local(center, scene.root_transform()));
        Some(GestureEvent::Began { object, location })
    }

    pub fn released(&mut self) -> Option<GestureEvent<EntityId>> {
        let drag = self.drag.take()?;
        log::info!("[mouse] end drag on {:?}", drag.object);
        Some(GestureEvent::Ended {
            object: drag.object,
        })
    }

    /// Pointer left the window or focus was lost mid-gesture.
    pub fn cancel(&mut self) -> Option<GestureEvent<EntityId>> {
        let drag = self.drag.take()?;
        log::info!("[mouse] drag on {:?} cancelled", drag.object);
        Some(GestureEvent::Cancelled {
            object: drag.object,
        })
    }

    fn project(&self, plane_z: f32, scene: &MemoryScene) -> Option<glam::Vec3> {
        let ray = self.camera.ray_through(self.cursor_px, self.viewport_px);
        let hit_world = project_onto_plane_z(&ray, plane_z)?;
        Some(to_parent_local(hit_world, scene.root_transform()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::LoadedModel;
    use glam::{Mat4, Vec3};
    use snap_core::{DragSnapController, HostEngine, SceneHost, SceneLayout};
    use std::path::PathBuf;

    const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

    fn scene_with_pot() -> (MemoryScene, DragSnapController<EntityId>, EntityId) {
        let layout = SceneLayout::tabletop();
        let mut scene = MemoryScene::default();
        let mut controller = DragSnapController::new();
        let pot = scene.spawn_model(
            LoadedModel {
                source: PathBuf::from("pot.glb"),
                node_name: "pot".into(),
            },
            &layout.models[0],
        );
        controller
            .register(&mut scene, pot, layout.models[0].position)
            .unwrap();
        (scene, controller, pot)
    }

    // Pixel position at which `world` appears on screen.
    fn screen_of(camera: &Camera, world: Vec3) -> Vec2 {
        let clip = camera.projection_matrix() * camera.view_matrix() * world.extend(1.0);
        let ndc = clip / clip.w;
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * VIEWPORT.x,
            (1.0 - ndc.y) * 0.5 * VIEWPORT.y,
        )
    }

    #[test]
    fn press_on_pot_begins_and_release_snaps_back() {
        let (mut scene, mut controller, pot) = scene_with_pot();
        let mut input = PointerInput::new(Camera::default(), VIEWPORT);
        let resting = Vec3::new(-0.5, 0.6, -2.0);

        let on_pot = screen_of(&input.camera, resting);
        assert!(input.cursor_moved(on_pot, &scene).is_none());
        let began = input.pressed(&scene).expect("pot should be picked");
        assert_eq!(began.object(), pot);
        controller.dispatch(&mut scene, began);
        assert_eq!(input.dragging(), Some(pot));

        let elsewhere = screen_of(&input.camera, Vec3::new(0.3, 0.9, -2.0));
        let changed = input.cursor_moved(elsewhere, &scene).unwrap();
        controller.dispatch(&mut scene, changed);
        let moved = scene.position(pot).unwrap();
        assert!((moved - Vec3::new(0.3, 0.9, -2.0)).length() < 1e-2);

        let ended = input.released().unwrap();
        controller.dispatch(&mut scene, ended);
        assert_eq!(scene.position(pot), Some(resting));
        assert!(input.released().is_none());
    }

    #[test]
    fn press_on_empty_space_picks_nothing() {
        let (scene, _controller, _pot) = scene_with_pot();
        let mut input = PointerInput::new(Camera::default(), VIEWPORT);
        input.cursor_moved(Vec2::new(5.0, 5.0), &scene);
        assert!(input.pressed(&scene).is_none());
        assert!(input.dragging().is_none());
    }

    #[test]
    fn cancel_emits_cancelled_for_active_drag() {
        let (scene, _controller, pot) = scene_with_pot();
        let mut input = PointerInput::new(Camera::default(), VIEWPORT);
        let on_pot = screen_of(&input.camera, Vec3::new(-0.5, 0.6, -2.0));
        input.cursor_moved(on_pot, &scene);
        input.pressed(&scene).unwrap();
        assert_eq!(
            input.cancel(),
            Some(GestureEvent::Cancelled { object: pot })
        );
        assert!(input.cancel().is_none());
    }

    #[test]
    fn root_transform_is_removed_from_drag_location() {
        let layout = SceneLayout::tabletop();
        let mut scene = MemoryScene::new(Mat4::from_translation(Vec3::new(0.0, 0.2, 0.0)));
        let mut controller = DragSnapController::new();
        let bird = scene.spawn_model(
            LoadedModel {
                source: PathBuf::from("bird.glb"),
                node_name: "bird".into(),
            },
            &layout.models[1],
        );
        controller
            .register(&mut scene, bird, layout.models[1].position)
            .unwrap();
        let mut input = PointerInput::new(Camera::default(), VIEWPORT);
        let on_bird = screen_of(&input.camera, scene.world_position(bird).unwrap());
        input.cursor_moved(on_bird, &scene);
        let GestureEvent::Began { location, .. } = input.pressed(&scene).unwrap() else {
            panic!("expected a began event");
        };
        assert!((location - layout.models[1].position).length() < 1e-2);
    }
}
