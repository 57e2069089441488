/// Built-in meshes uploaded once by the buffer set.

use super::vertex::Vertex;

const fn v(position: [f32; 3], color: [f32; 3]) -> Vertex {
    Vertex { position, color }
}

/// Colored triangle in the XY plane (red, green, blue corners).
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    v([-0.5, -0.5, 0.0], [1.0, 0.0, 0.0]),
    v([0.5, -0.5, 0.0], [0.0, 1.0, 0.0]),
    v([0.0, 0.5, 0.0], [0.0, 0.0, 1.0]),
];

/// Unit cube centered on the origin, 4 vertices per face, second attribute is the face normal.
pub const CUBE_VERTICES: [Vertex; 24] = [
    // Front
    v([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    v([0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    v([0.5, 0.5, 0.5], [0.0, 0.0, 1.0]),
    v([-0.5, 0.5, 0.5], [0.0, 0.0, 1.0]),
    // Back
    v([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0]),
    v([0.5, -0.5, -0.5], [0.0, 0.0, -1.0]),
    v([0.5, 0.5, -0.5], [0.0, 0.0, -1.0]),
    v([-0.5, 0.5, -0.5], [0.0, 0.0, -1.0]),
    // Left
    v([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0]),
    v([-0.5, -0.5, 0.5], [-1.0, 0.0, 0.0]),
    v([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0]),
    v([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0]),
    // Right
    v([0.5, -0.5, -0.5], [1.0, 0.0, 0.0]),
    v([0.5, -0.5, 0.5], [1.0, 0.0, 0.0]),
    v([0.5, 0.5, 0.5], [1.0, 0.0, 0.0]),
    v([0.5, 0.5, -0.5], [1.0, 0.0, 0.0]),
    // Top
    v([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
    v([0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
    v([0.5, 0.5, 0.5], [0.0, 1.0, 0.0]),
    v([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0]),
    // Bottom
    v([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0]),
    v([0.5, -0.5, -0.5], [0.0, -1.0, 0.0]),
    v([0.5, -0.5, 0.5], [0.0, -1.0, 0.0]),
    v([-0.5, -0.5, 0.5], [0.0, -1.0, 0.0]),
];

pub const CUBE_INDICES: [u32; 36] = [
    0, 1, 2, 2, 3, 0, // front
    4, 6, 5, 6, 4, 7, // back
    8, 9, 10, 10, 11, 8, // left
    12, 14, 13, 14, 12, 15, // right
    16, 17, 18, 18, 19, 16, // top
    20, 22, 21, 22, 20, 23, // bottom
];

#[cfg(test)]
#[path = "static_meshes_tests.rs"]
mod tests;
