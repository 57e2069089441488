/// Interleaved vertex record: position + color (or normal), 6 floats.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use crate::error::Result;
use crate::engine_bail;

pub const WHITE: Vec3 = Vec3::ONE;
pub const RED: Vec3 = Vec3::X;
pub const GREEN: Vec3 = Vec3::Y;
pub const BLUE: Vec3 = Vec3::Z;
pub const YELLOW: Vec3 = Vec3::new(1.0, 1.0, 0.0);
pub const GRAY: Vec3 = Vec3::splat(0.5);

/// One vertex as laid out in GPU memory.
///
/// The second attribute is a color in the dynamic and triangle buffers and a
/// normal in the cube buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    /// Floats per vertex
    pub const FLOATS: usize = 6;

    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }

    pub fn white(position: Vec3) -> Self {
        Self::new(position, WHITE)
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// View a flat `[x, y, z, r, g, b, ...]` stream as vertices without copying.
///
/// Fails unless the stream holds exactly `count` records.
pub fn vertices_from_floats(floats: &[f32], count: usize) -> Result<&[Vertex]> {
    let expected = count.checked_mul(Vertex::FLOATS);
    if expected != Some(floats.len()) {
        engine_bail!(
            "sketch3d::Vertex",
            InvalidArgument,
            "vertex stream holds {} floats, {} vertices need {}",
            floats.len(),
            count,
            count.saturating_mul(Vertex::FLOATS)
        );
    }
    match bytemuck::try_cast_slice(floats) {
        Ok(vertices) => Ok(vertices),
        Err(err) => engine_bail!("sketch3d::Vertex", InvalidArgument, "cannot view floats as vertices: {}", err),
    }
}

#[cfg(test)]
#[path = "vertex_tests.rs"]
mod tests;
