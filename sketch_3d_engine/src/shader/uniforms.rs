/// Camera and lighting uniform helpers.

use glam::{Mat4, Vec3};
use crate::camera::Camera;
use super::shader_program::ShaderProgram;

pub const MODEL: &str = "model";
pub const VIEW: &str = "view";
pub const PROJECTION: &str = "projection";

/// Push `model`, the camera's view and its projection.
///
/// The program must already be current.
pub fn upload_camera(shader: &mut dyn ShaderProgram, camera: &Camera, model: &Mat4) {
    shader.set_mat4(MODEL, model);
    shader.set_mat4(VIEW, &camera.view_matrix());
    shader.set_mat4(PROJECTION, &camera.projection_matrix());
}

/// Identity model/view and a `[-1, 1]` orthographic projection, for overlays
/// drawn directly in normalized device coordinates.
pub fn upload_screen_space(shader: &mut dyn ShaderProgram) {
    shader.set_mat4(MODEL, &Mat4::IDENTITY);
    shader.set_mat4(VIEW, &Mat4::IDENTITY);
    shader.set_mat4(
        PROJECTION,
        &Mat4::orthographic_rh_gl(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0),
    );
}

/// Single point light with a flat object color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub light_position: Vec3,
    pub light_color: Vec3,
    pub object_color: Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            light_position: Vec3::new(1.2, 1.0, 2.0),
            light_color: Vec3::ONE,
            object_color: Vec3::new(1.0, 0.5, 0.31),
        }
    }
}

impl Lighting {
    /// Sets `lightPos`, `lightColor` and `objectColor`.
    pub fn upload(&self, shader: &mut dyn ShaderProgram) {
        shader.set_vec3("lightPos", self.light_position);
        shader.set_vec3("lightColor", self.light_color);
        shader.set_vec3("objectColor", self.object_color);
    }
}

#[cfg(test)]
#[path = "uniforms_tests.rs"]
mod tests;
