use glam::{Mat4, Vec3};

use crate::host::ObjectHandle;
use crate::state::Ray;

/// Distance along the ray to the first intersection with the sphere, if any.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Nearest candidate whose pick sphere the ray hits.
///
/// `candidates` pairs each object with its world-space center.
pub fn pick<H, I>(ray: &Ray, candidates: I, radius: f32) -> Option<H>
where
    H: ObjectHandle,
    I: IntoIterator<Item = (H, Vec3)>,
{
    candidates
        .into_iter()
        .filter_map(|(h, center)| {
            ray_sphere(ray.origin, ray.dir, center, radius).map(|t| (h, t))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(h, _)| h)
}

/// Where the ray crosses the plane `z = plane_z`. Parallel or backwards hits
/// yield `None`.
#[inline]
pub fn project_onto_plane_z(ray: &Ray, plane_z: f32) -> Option<Vec3> {
    if ray.dir.z.abs() <= 1e-6 {
        return None;
    }
    let t = (plane_z - ray.origin.z) / ray.dir.z;
    (t >= 0.0).then(|| ray.at(t))
}

/// Express a world-space point in the space of a parent whose world matrix
/// is `parent_world`.
#[inline]
pub fn to_parent_local(world: Vec3, parent_world: Mat4) -> Vec3 {
    parent_world.inverse().transform_point3(world)
}

/// Active pointer drag in the host: which object, and the world-space depth
/// plane the pointer is projected onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState<H: ObjectHandle> {
    pub object: H,
    pub plane_z_world: f32,
}
