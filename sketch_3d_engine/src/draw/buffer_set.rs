/// GpuBufferSet - the fixed set of GPU resources owned by one renderer
///
/// Three groups, each with its own vertex array:
/// - static triangle: vertex buffer
/// - static cube: vertex buffer + index buffer
/// - dynamic: one vertex buffer whose storage is replaced on every draw
///
/// Every handle is created once by [`GpuBufferSet::create`] and destroyed once
/// by [`GpuBufferSet::release`]. A released (or never created) handle holds the
/// `UNSET` sentinel and is skipped, so releasing twice is harmless.

use crate::error::Result;
use crate::graphics_device::{
    GraphicsDevice, BufferDesc, BufferId, VertexArrayId, VertexLayout, UpdateFrequency,
};
use crate::{engine_err, engine_bail, engine_info, engine_debug};
use super::static_meshes::{TRIANGLE_VERTICES, CUBE_VERTICES, CUBE_INDICES};

const SOURCE: &str = "sketch3d::GpuBufferSet";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct GpuBufferSet {
    triangle_vbo: BufferId,
    triangle_vao: VertexArrayId,

    cube_vbo: BufferId,
    cube_ebo: BufferId,
    cube_vao: VertexArrayId,

    dynamic_vbo: BufferId,
    dynamic_vao: VertexArrayId,
}

impl GpuBufferSet {
    /// Create and fill every buffer.
    ///
    /// On failure, whatever was already created is released before the
    /// `ResourceError` is returned.
    pub fn create(device: &mut dyn GraphicsDevice) -> Result<Self> {
        let mut set = Self::default();
        if let Err(err) = set.create_all(device) {
            set.release(device);
            return Err(err);
        }
        engine_info!(SOURCE, "GPU buffer set created");
        Ok(set)
    }

    fn create_all(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        let layout = VertexLayout::position_and_vec3();

        // Triangle
        self.triangle_vbo = create_buffer(
            device,
            BufferDesc::vertex(std::mem::size_of_val(&TRIANGLE_VERTICES) as u64, UpdateFrequency::Static),
            "triangle vertex buffer",
        )?;
        upload(device, self.triangle_vbo, bytemuck::cast_slice(&TRIANGLE_VERTICES), "triangle vertex buffer")?;
        self.triangle_vao = create_vertex_array(device, &layout, self.triangle_vbo, None, "triangle vertex array")?;

        // Dynamic points/lines
        self.dynamic_vbo = create_buffer(
            device,
            BufferDesc::vertex(0, UpdateFrequency::Dynamic),
            "dynamic vertex buffer",
        )?;
        self.dynamic_vao = create_vertex_array(device, &layout, self.dynamic_vbo, None, "dynamic vertex array")?;

        // Cube
        self.cube_vbo = create_buffer(
            device,
            BufferDesc::vertex(std::mem::size_of_val(&CUBE_VERTICES) as u64, UpdateFrequency::Static),
            "cube vertex buffer",
        )?;
        upload(device, self.cube_vbo, bytemuck::cast_slice(&CUBE_VERTICES), "cube vertex buffer")?;
        self.cube_ebo = create_buffer(
            device,
            BufferDesc::index(std::mem::size_of_val(&CUBE_INDICES) as u64),
            "cube index buffer",
        )?;
        upload(device, self.cube_ebo, bytemuck::cast_slice(&CUBE_INDICES), "cube index buffer")?;
        self.cube_vao = create_vertex_array(device, &layout, self.cube_vbo, Some(self.cube_ebo), "cube vertex array")?;

        Ok(())
    }

    /// Destroy every handle that is still set, then reset it to `UNSET`.
    pub fn release(&mut self, device: &mut dyn GraphicsDevice) {
        let mut released = 0usize;

        for vao in [&mut self.triangle_vao, &mut self.dynamic_vao, &mut self.cube_vao] {
            if vao.is_set() {
                device.destroy_vertex_array(*vao);
                *vao = VertexArrayId::UNSET;
                released += 1;
            }
        }
        for buffer in [&mut self.triangle_vbo, &mut self.dynamic_vbo, &mut self.cube_vbo, &mut self.cube_ebo] {
            if buffer.is_set() {
                device.destroy_buffer(*buffer);
                *buffer = BufferId::UNSET;
                released += 1;
            }
        }

        if released > 0 {
            engine_info!(SOURCE, "Released {} GPU handles", released);
        }
    }

    /// True once every handle has been created.
    pub fn is_complete(&self) -> bool {
        self.triangle_vbo.is_set()
            && self.triangle_vao.is_set()
            && self.cube_vbo.is_set()
            && self.cube_ebo.is_set()
            && self.cube_vao.is_set()
            && self.dynamic_vbo.is_set()
            && self.dynamic_vao.is_set()
    }

    /// True when no handle is held.
    pub fn is_released(&self) -> bool {
        *self == Self::default()
    }

    pub fn triangle(&self) -> VertexArrayId {
        self.triangle_vao
    }

    pub fn cube(&self) -> VertexArrayId {
        self.cube_vao
    }

    /// Dynamic vertex buffer and its vertex array
    pub fn dynamic(&self) -> (BufferId, VertexArrayId) {
        (self.dynamic_vbo, self.dynamic_vao)
    }
}

fn create_buffer(device: &mut dyn GraphicsDevice, desc: BufferDesc, what: &str) -> Result<BufferId> {
    let id = device
        .create_buffer(&desc)
        .map_err(|err| engine_err!(SOURCE, ResourceError, "failed to create {}: {}", what, err))?;
    if !id.is_set() {
        engine_bail!(SOURCE, ResourceError, "{} was left unset by the device", what);
    }
    engine_debug!(SOURCE, "Created {} ({} bytes) as buffer {}", what, desc.size, id.0);
    Ok(id)
}

fn create_vertex_array(
    device: &mut dyn GraphicsDevice,
    layout: &VertexLayout,
    vertex_buffer: BufferId,
    index_buffer: Option<BufferId>,
    what: &str,
) -> Result<VertexArrayId> {
    let id = device
        .create_vertex_array(layout, vertex_buffer, index_buffer)
        .map_err(|err| engine_err!(SOURCE, ResourceError, "failed to create {}: {}", what, err))?;
    if !id.is_set() {
        engine_bail!(SOURCE, ResourceError, "{} was left unset by the device", what);
    }
    Ok(id)
}

fn upload(device: &mut dyn GraphicsDevice, buffer: BufferId, data: &[u8], what: &str) -> Result<()> {
    device
        .upload_buffer(buffer, data)
        .map_err(|err| engine_err!(SOURCE, ResourceError, "failed to fill {}: {}", what, err))
}

#[cfg(test)]
#[path = "buffer_set_tests.rs"]
mod tests;
