/// Look-at / perspective construction and spherical conversions.
///
/// Conventions: right-handed world, +Y up, OpenGL clip depth (-1..1).

use glam::{Mat4, Quat, Vec3};

/// Right-handed view matrix looking from `eye` towards `center`.
///
/// `eye == center` or `up` parallel to the view direction yields a
/// non-finite matrix; callers own that edge case.
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, center, up)
}

/// Right-handed perspective projection with OpenGL depth range.
///
/// No validation: a non-positive `fov_degrees` or `near >= far` produces a
/// degenerate matrix, not an error.
pub fn perspective(fov_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_degrees.to_radians(), aspect_ratio, near, far)
}

/// Unit view direction for a pitch/yaw pair.
///
/// `x = cos(pitch)·cos(yaw)`, `y = sin(pitch)`, `z = cos(pitch)·sin(yaw)`.
/// Yaw 0 looks down +X, yaw -90 looks down -Z.
pub fn direction_from_angles(pitch_degrees: f32, yaw_degrees: f32) -> Vec3 {
    let (pitch, yaw) = (pitch_degrees.to_radians(), yaw_degrees.to_radians());
    Vec3::new(
        pitch.cos() * yaw.cos(),
        pitch.sin(),
        pitch.cos() * yaw.sin(),
    )
}

/// Inverse of [`direction_from_angles`]: returns `(pitch, yaw)` in degrees.
///
/// The direction does not need to be normalized. A zero vector maps to (0, 0).
pub fn angles_from_direction(direction: Vec3) -> (f32, f32) {
    let direction = direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        return (0.0, 0.0);
    }
    let pitch = direction.y.clamp(-1.0, 1.0).asin();
    let yaw = direction.z.atan2(direction.x);
    (pitch.to_degrees(), yaw.to_degrees())
}

/// Offset of an orbiting eye relative to its pivot.
///
/// `distance · (cos(pitch)·sin(yaw), sin(pitch), cos(pitch)·cos(yaw))`:
/// yaw 0 / pitch 0 sits on +Z, which differs from [`direction_from_angles`].
pub fn orbit_offset(distance: f32, pitch_degrees: f32, yaw_degrees: f32) -> Vec3 {
    let (pitch, yaw) = (pitch_degrees.to_radians(), yaw_degrees.to_radians());
    distance * Vec3::new(
        pitch.cos() * yaw.sin(),
        pitch.sin(),
        pitch.cos() * yaw.cos(),
    )
}

/// Rotate `vector` about `axis` by `angle_degrees` (right-hand rule).
///
/// The axis is normalized first; a zero axis leaves the vector unchanged.
pub fn rotate_about_axis(vector: Vec3, axis: Vec3, angle_degrees: f32) -> Vec3 {
    let axis = axis.normalize_or_zero();
    if axis == Vec3::ZERO {
        return vector;
    }
    Quat::from_axis_angle(axis, angle_degrees.to_radians()) * vector
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
