//! Pointer-to-die hit testing.
//!
//! Unprojects the cursor through the camera into a world-space ray and
//! tests it against the die's bounding sphere. The die tumbles freely,
//! so the rotation-invariant sphere is the right proxy; a miss on the
//! sphere is always a miss on the die.

use glam::{Vec2, Vec3, Vec4};
use tumble_render::Camera;

/// A world-space ray with a unit direction.
#[derive(Debug, Clone, Copy)]
pub struct PickRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl PickRay {
    /// Builds the ray from the camera through a cursor position in
    /// normalized device coordinates.
    #[must_use]
    pub fn from_ndc(camera: &Camera, ndc: Vec2) -> Self {
        let inverse_vp = camera.view_projection_matrix().inverse();
        // Reverse-Z: the near plane sits at depth 1 in NDC.
        let near = inverse_vp * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let near = near.truncate() / near.w;

        Self {
            origin: camera.position,
            direction: (near - camera.position).normalize(),
        }
    }

    /// Distance along the ray to the nearest intersection with a
    /// sphere, or `None` when the ray misses or the sphere is behind
    /// the origin.
    #[must_use]
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let to_origin = self.origin - center;
        let b = to_origin.dot(self.direction);
        let discriminant = b * b - (to_origin.length_squared() - radius * radius);
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let t = -b - sqrt_d;
        if t >= 0.0 {
            return Some(t);
        }
        let t = -b + sqrt_d;
        (t >= 0.0).then_some(t)
    }
}

/// Whether the cursor at `ndc` is over the die: a bounding-sphere test
/// against an origin-centered die of the given radius.
#[must_use]
pub fn pick_die(camera: &Camera, ndc: Vec2, bounding_radius: f32) -> bool {
    PickRay::from_ndc(camera, ndc)
        .intersect_sphere(Vec3::ZERO, bounding_radius)
        .is_some()
}
