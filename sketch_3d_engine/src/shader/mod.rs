//! Shader module: the uniform surface of a linked shader program.
//!
//! Loading, compiling and linking belong to the backend. The engine only
//! pushes camera matrices and lighting vectors through [`ShaderProgram`].

mod shader_program;
mod uniforms;

pub use shader_program::ShaderProgram;
pub use uniforms::{upload_camera, upload_screen_space, Lighting, MODEL, VIEW, PROJECTION};
