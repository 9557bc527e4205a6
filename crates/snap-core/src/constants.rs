use glam::Vec3;

// Shared scene layout and interaction tuning used by every front-end.

// Static geometry
pub const FLOOR_SIZE: [f32; 2] = [50.0, 50.0]; // width, depth
pub const TABLE_SIZE: [f32; 3] = [2.0, 0.1, 2.0]; // width, height, depth
pub const TABLE_POSITION: [f32; 3] = [0.0, 0.5, -2.0];
pub const TABLE_COLOR: [f32; 3] = [0.59, 0.29, 0.0]; // brown

// Draggable models resting on the table top
pub const POT_MODEL: &str = "pot";
pub const POT_POSITION: [f32; 3] = [-0.5, 0.6, -2.0];
pub const POT_SCALE: f32 = 10.0;

pub const BIRD_MODEL: &str = "bird";
pub const BIRD_POSITION: [f32; 3] = [0.5, 0.6, -2.0];
pub const BIRD_SCALE: f32 = 5.0;

// Physics material for draggable models
pub const STATIC_FRICTION: f32 = 0.8;
pub const DYNAMIC_FRICTION: f32 = 0.5;
pub const RESTITUTION: f32 = 0.0; // no bouncing

// Interaction
pub const PICK_SPHERE_RADIUS: f32 = 0.15; // ray-sphere radius for picking a model

// Viewer
pub const CAMERA_EYE: [f32; 3] = [0.0, 1.4, 0.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.6, -2.0];
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.05;
pub const CAMERA_ZFAR: f32 = 100.0;

#[inline]
pub fn table_position_vec3() -> Vec3 {
    Vec3::from(TABLE_POSITION)
}
