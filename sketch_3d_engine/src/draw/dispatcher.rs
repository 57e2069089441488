/// PrimitiveDispatcher - draws caller-owned vertex streams through the dynamic buffer
///
/// Each call replaces the whole dynamic buffer with the supplied vertices and
/// issues exactly one non-indexed draw from vertex 0. Nothing is batched or
/// retained between calls, so a draw only ever shows its own data.

use glam::Vec3;
use crate::error::Result;
use crate::graphics_device::{GraphicsDevice, PrimitiveTopology};
use crate::{engine_bail, engine_trace};
use super::buffer_set::GpuBufferSet;
use super::vertex::{Vertex, vertices_from_floats};

const SOURCE: &str = "sketch3d::PrimitiveDispatcher";

/// Borrowed view over a device and the buffer set it draws with.
pub struct PrimitiveDispatcher<'a> {
    device: &'a mut dyn GraphicsDevice,
    buffers: &'a GpuBufferSet,
}

impl<'a> PrimitiveDispatcher<'a> {
    pub fn new(device: &'a mut dyn GraphicsDevice, buffers: &'a GpuBufferSet) -> Self {
        Self { device, buffers }
    }

    /// Upload `vertices` into the dynamic buffer and draw them with `topology`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the vertex count does not fit the topology
    ///   (odd for `Lines`, not a multiple of 3 for `Triangles`)
    /// - `ResourceError` if the buffer set has been released
    /// - whatever the device reports for the upload or the draw
    ///
    /// An empty stream is a no-op.
    pub fn draw(&mut self, vertices: &[Vertex], topology: PrimitiveTopology) -> Result<()> {
        validate_count(vertices.len(), topology)?;
        if vertices.is_empty() {
            return Ok(());
        }
        let count = match u32::try_from(vertices.len()) {
            Ok(count) => count,
            Err(_) => engine_bail!(SOURCE, InvalidArgument, "{} vertices exceed a single draw", vertices.len()),
        };

        let (vbo, vao) = self.buffers.dynamic();
        if !vbo.is_set() || !vao.is_set() {
            engine_bail!(SOURCE, ResourceError, "dynamic buffer is not available (released or never created)");
        }

        self.device.orphan_buffer(vbo, bytemuck::cast_slice(vertices))?;
        self.device.draw(vao, topology, 0, count)?;

        engine_trace!(SOURCE, "Drew {} vertices as {:?}", count, topology);
        Ok(())
    }

    /// Flat-stream entry point: `floats` must hold exactly `count · 6` values.
    pub fn draw_interleaved(&mut self, floats: &[f32], count: usize, topology: PrimitiveTopology) -> Result<()> {
        let vertices = vertices_from_floats(floats, count)?;
        self.draw(vertices, topology)
    }

    pub fn draw_points(&mut self, vertices: &[Vertex]) -> Result<()> {
        self.draw(vertices, PrimitiveTopology::Points)
    }

    /// Independent segments, one per consecutive vertex pair.
    pub fn draw_lines(&mut self, vertices: &[Vertex]) -> Result<()> {
        self.draw(vertices, PrimitiveTopology::Lines)
    }

    pub fn draw_line_strip(&mut self, vertices: &[Vertex]) -> Result<()> {
        self.draw(vertices, PrimitiveTopology::LineStrip)
    }

    /// Closed polyline: the last vertex connects back to the first.
    pub fn draw_line_loop(&mut self, vertices: &[Vertex]) -> Result<()> {
        self.draw(vertices, PrimitiveTopology::LineLoop)
    }

    /// Single white point.
    pub fn draw_point(&mut self, position: Vec3) -> Result<()> {
        self.draw_points(&[Vertex::white(position)])
    }

    /// Single white segment.
    pub fn draw_line(&mut self, from: Vec3, to: Vec3) -> Result<()> {
        self.draw_lines(&[Vertex::white(from), Vertex::white(to)])
    }
}

fn validate_count(count: usize, topology: PrimitiveTopology) -> Result<()> {
    match topology {
        PrimitiveTopology::Lines if count % 2 != 0 => {
            engine_bail!(SOURCE, InvalidArgument, "line list needs an even vertex count, got {}", count)
        }
        PrimitiveTopology::Triangles if count % 3 != 0 => {
            engine_bail!(SOURCE, InvalidArgument, "triangle list needs a multiple of 3 vertices, got {}", count)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
