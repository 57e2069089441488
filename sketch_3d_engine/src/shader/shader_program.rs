/// ShaderProgram trait - uniform setters of a linked program

use glam::{Mat4, Vec3};

/// A linked shader program.
///
/// Setting a uniform the program does not declare is silently ignored, as
/// graphics APIs do.
pub trait ShaderProgram {
    /// Make this program current
    fn use_program(&mut self);

    fn set_bool(&mut self, name: &str, value: bool);

    fn set_int(&mut self, name: &str, value: i32);

    fn set_float(&mut self, name: &str, value: f32);

    fn set_vec3(&mut self, name: &str, value: Vec3);

    /// Column-major 4x4 matrix
    fn set_mat4(&mut self, name: &str, value: &Mat4);
}
