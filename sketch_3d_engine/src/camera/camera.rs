/// Camera: position/target/up plus perspective parameters.
///
/// Mutators overwrite fields and mark the matching cache stale; the view and
/// projection getters rebuild at most once per batch of mutations. The
/// combined view-projection product is never cached.
///
/// Angles are in degrees. Nothing here validates projection parameters or
/// clamps pitch: degenerate input yields a degenerate matrix.

use glam::{Mat4, Vec3};
use crate::math;
use super::cached_matrix::{CachedMatrix, CameraStats};

const DEFAULT_FOV: f32 = 45.0;
const DEFAULT_ASPECT_RATIO: f32 = 16.0 / 9.0;
const DEFAULT_NEAR_PLANE: f32 = 0.1;
const DEFAULT_FAR_PLANE: f32 = 100.0;

/// Interactive perspective camera with lazily cached matrices.
///
/// `Camera` is `!Sync`: it belongs to the rendering thread.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up: Vec3,

    fov: f32,
    aspect_ratio: f32,
    near_plane: f32,
    far_plane: f32,

    view: CachedMatrix,
    projection: CachedMatrix,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y)
    }
}

impl Camera {
    /// Create a camera looking from `position` at `target`.
    ///
    /// Projection starts at fov 45°, aspect 16:9, near 0.1, far 100.
    pub fn new(position: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            position,
            target,
            up,
            fov: DEFAULT_FOV,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            near_plane: DEFAULT_NEAR_PLANE,
            far_plane: DEFAULT_FAR_PLANE,
            view: CachedMatrix::new(),
            projection: CachedMatrix::new(),
        }
    }

    /// Create a camera at `position` facing the direction given by `yaw`/`pitch`.
    ///
    /// The target is placed one unit along that direction.
    pub fn with_angles(position: Vec3, up: Vec3, yaw: f32, pitch: f32) -> Self {
        let direction = math::direction_from_angles(pitch, yaw).normalize_or_zero();
        Self::new(position, position + direction, up)
    }

    // ===== VIEW MUTATORS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.view.invalidate();
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.view.invalidate();
    }

    /// Overwrite eye, target and up at once.
    pub fn look_at(&mut self, eye: Vec3, center: Vec3, up: Vec3) {
        self.position = eye;
        self.target = center;
        self.up = up;
        self.view.invalidate();
    }

    /// Move position and target together, keeping the viewing direction and distance.
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
        self.target += offset;
        self.view.invalidate();
    }

    /// Point the camera along `pitch`/`yaw` from its current position.
    ///
    /// The target becomes `position + direction`. A non-zero `roll` replaces
    /// the up vector with world up rotated about the new forward axis.
    pub fn rotate(&mut self, pitch: f32, yaw: f32, roll: f32) {
        let direction = math::direction_from_angles(pitch, yaw).normalize_or_zero();
        self.target = self.position + direction;

        if roll != 0.0 {
            self.up = math::rotate_about_axis(Vec3::Y, direction, roll);
        }
        self.view.invalidate();
    }

    /// Place the camera on a sphere of radius `distance` centered on `target`.
    pub fn orbit_around(&mut self, target: Vec3, distance: f32, pitch: f32, yaw: f32) {
        self.target = target;
        self.position = target + math::orbit_offset(distance, pitch, yaw);
        self.view.invalidate();
    }

    // ===== PROJECTION MUTATORS =====

    pub fn set_perspective(&mut self, fov: f32, aspect_ratio: f32, near_plane: f32, far_plane: f32) {
        self.fov = fov;
        self.aspect_ratio = aspect_ratio;
        self.near_plane = near_plane;
        self.far_plane = far_plane;
        self.projection.invalidate();
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
        self.projection.invalidate();
    }

    // ===== MATRICES =====

    /// View matrix, rebuilt only if a view mutator ran since the last call.
    pub fn view_matrix(&self) -> Mat4 {
        self.view
            .get_or_recompute(|| math::look_at(self.position, self.target, self.up))
    }

    /// Projection matrix, rebuilt only if a projection mutator ran since the last call.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.get_or_recompute(|| {
            math::perspective(self.fov, self.aspect_ratio, self.near_plane, self.far_plane)
        })
    }

    /// `projection * view`, recomputed on every call.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }

    /// Normalized `target - position` (zero if they coincide).
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Normalized `forward × up`.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or_zero()
    }

    /// Recompute counters of both matrix caches.
    pub fn stats(&self) -> CameraStats {
        CameraStats {
            view_recomputes: self.view.recomputes(),
            projection_recomputes: self.projection.recomputes(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_view_dirty(&self) -> bool {
        self.view.is_dirty()
    }

    #[cfg(test)]
    pub(crate) fn is_projection_dirty(&self) -> bool {
        self.projection.is_dirty()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
