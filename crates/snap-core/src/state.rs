//! Viewer state shared with the front-ends.
//!
//! These types avoid platform-specific APIs so both the native host and the
//! tests can use them to turn cursor positions into world-space rays.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::constants::{CAMERA_EYE, CAMERA_FOVY_RADIANS, CAMERA_TARGET, CAMERA_ZFAR, CAMERA_ZNEAR};

/// World-space ray with a normalized direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from(CAMERA_EYE),
            target: Vec3::from(CAMERA_TARGET),
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Keep the aspect ratio in sync with the surface size.
    pub fn set_viewport(&mut self, viewport_px: Vec2) {
        self.aspect = viewport_px.x / viewport_px.y.max(1.0);
    }

    /// Compute a world-space ray through a cursor position.
    ///
    /// - `cursor_px`: pixel coordinates, origin top-left
    /// - `viewport_px`: surface size in pixels
    pub fn ray_through(&self, cursor_px: Vec2, viewport_px: Vec2) -> Ray {
        let width = viewport_px.x.max(1.0);
        let height = viewport_px.y.max(1.0);
        let ndc_x = (2.0 * cursor_px.x / width) - 1.0;
        let ndc_y = 1.0 - (2.0 * cursor_px.y / height);
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (p1 - self.eye).normalize(),
        }
    }
}
