/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Every call is recorded into a shared `MockDeviceState` so that a test can
/// keep a handle on the state after the device has been boxed into a
/// `Renderer`. Buffer contents are kept byte for byte and each draw captures
/// the vertex bytes it would read.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::engine_bail;
use super::{
    GraphicsDevice, BufferDesc, BufferId, VertexArrayId, VertexLayout,
    PrimitiveTopology, IndexType, ClearValue, ClearFlags, PolygonMode,
};

// ============================================================================
// Recorded state
// ============================================================================

#[derive(Debug, Clone)]
pub struct MockBuffer {
    pub desc: BufferDesc,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct MockVertexArray {
    pub layout: VertexLayout,
    pub vertex_buffer: BufferId,
    pub index_buffer: Option<BufferId>,
}

/// One draw call as seen by the device
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDraw {
    pub vertex_array: VertexArrayId,
    pub topology: PrimitiveTopology,
    pub first: u32,
    pub count: u32,
    pub index_type: Option<IndexType>,
    /// Vertex bytes `[first, first + count)` at draw time (non-indexed draws only)
    pub vertex_data: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct MockDeviceState {
    /// Call log, one entry per trait call
    pub commands: Vec<String>,
    pub buffers: HashMap<BufferId, MockBuffer>,
    pub vertex_arrays: HashMap<VertexArrayId, MockVertexArray>,
    pub created_buffers: Vec<BufferId>,
    pub destroyed_buffers: Vec<BufferId>,
    pub created_vertex_arrays: Vec<VertexArrayId>,
    pub destroyed_vertex_arrays: Vec<VertexArrayId>,
    pub draws: Vec<RecordedDraw>,
    pub clears: Vec<(ClearValue, ClearFlags)>,
    pub point_size: Option<f32>,
    pub line_width: Option<f32>,
    pub polygon_mode: Option<PolygonMode>,
    /// 0-based index of the creation call (buffers and vertex arrays) that fails
    pub fail_creation_at: Option<usize>,
    /// Point sizes above this are rejected
    pub max_point_size: Option<f32>,
    /// Indexed draws fail
    pub fail_indexed_draws: bool,
    /// This polygon mode is rejected
    pub rejected_polygon_mode: Option<PolygonMode>,
    creations: usize,
    next_id: u32,
}

impl MockDeviceState {
    pub fn count_commands(&self, prefix: &str) -> usize {
        self.commands.iter().filter(|c| c.starts_with(prefix)).count()
    }

    /// Handles created but not yet destroyed
    pub fn live_handles(&self) -> usize {
        self.buffers.len() + self.vertex_arrays.len()
    }

    fn next_creation(&mut self, what: &str) -> Result<u32> {
        let index = self.creations;
        self.creations += 1;
        if self.fail_creation_at == Some(index) {
            self.commands.push(format!("create_{}_failed", what));
            engine_bail!("sketch3d::MockGraphicsDevice", BackendError, "{} creation #{} refused", what, index);
        }
        self.next_id += 1;
        Ok(self.next_id)
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct MockGraphicsDevice {
    pub state: Arc<Mutex<MockDeviceState>>,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Device whose `index`-th creation call fails
    pub fn failing_at(index: usize) -> Self {
        let device = Self::new();
        device.state.lock().unwrap().fail_creation_at = Some(index);
        device
    }

    /// Shared handle on the recorded state
    pub fn state(&self) -> Arc<Mutex<MockDeviceState>> {
        Arc::clone(&self.state)
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_buffer(&mut self, desc: &BufferDesc) -> Result<BufferId> {
        let mut state = self.state.lock().unwrap();
        let id = BufferId(state.next_creation("buffer")?);
        state.commands.push(format!("create_buffer({})", id.0));
        state.buffers.insert(id, MockBuffer { desc: desc.clone(), data: Vec::new() });
        state.created_buffers.push(id);
        Ok(id)
    }

    fn destroy_buffer(&mut self, buffer: BufferId) {
        let mut state = self.state.lock().unwrap();
        state.commands.push(format!("destroy_buffer({})", buffer.0));
        state.buffers.remove(&buffer);
        state.destroyed_buffers.push(buffer);
    }

    fn upload_buffer(&mut self, buffer: BufferId, data: &[u8]) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.commands.push(format!("upload_buffer({}, {})", buffer.0, data.len()));
        match state.buffers.get_mut(&buffer) {
            Some(stored) => {
                stored.data = data.to_vec();
                Ok(())
            }
            None => engine_bail!("sketch3d::MockGraphicsDevice", BackendError, "unknown buffer {}", buffer.0),
        }
    }

    fn orphan_buffer(&mut self, buffer: BufferId, data: &[u8]) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.commands.push(format!("orphan_buffer({}, {})", buffer.0, data.len()));
        match state.buffers.get_mut(&buffer) {
            Some(stored) => {
                stored.data = data.to_vec();
                stored.desc.size = data.len() as u64;
                Ok(())
            }
            None => engine_bail!("sketch3d::MockGraphicsDevice", BackendError, "unknown buffer {}", buffer.0),
        }
    }

    fn create_vertex_array(
        &mut self,
        layout: &VertexLayout,
        vertex_buffer: BufferId,
        index_buffer: Option<BufferId>,
    ) -> Result<VertexArrayId> {
        let mut state = self.state.lock().unwrap();
        let id = VertexArrayId(state.next_creation("vertex_array")?);
        state.commands.push(format!("create_vertex_array({})", id.0));
        state.vertex_arrays.insert(id, MockVertexArray {
            layout: layout.clone(),
            vertex_buffer,
            index_buffer,
        });
        state.created_vertex_arrays.push(id);
        Ok(id)
    }

    fn destroy_vertex_array(&mut self, vertex_array: VertexArrayId) {
        let mut state = self.state.lock().unwrap();
        state.commands.push(format!("destroy_vertex_array({})", vertex_array.0));
        state.vertex_arrays.remove(&vertex_array);
        state.destroyed_vertex_arrays.push(vertex_array);
    }

    fn draw(
        &mut self,
        vertex_array: VertexArrayId,
        topology: PrimitiveTopology,
        first_vertex: u32,
        vertex_count: u32,
    ) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.commands.push(format!("draw({:?}, {}, {})", topology, first_vertex, vertex_count));

        let Some(vao) = state.vertex_arrays.get(&vertex_array) else {
            engine_bail!("sketch3d::MockGraphicsDevice", BackendError, "unknown vertex array {}", vertex_array.0);
        };
        let stride = vao.layout.stride as usize;
        let data = state
            .buffers
            .get(&vao.vertex_buffer)
            .map(|b| b.data.clone())
            .unwrap_or_default();
        let start = (first_vertex as usize * stride).min(data.len());
        let end = ((first_vertex + vertex_count) as usize * stride).min(data.len());

        state.draws.push(RecordedDraw {
            vertex_array,
            topology,
            first: first_vertex,
            count: vertex_count,
            index_type: None,
            vertex_data: data[start..end].to_vec(),
        });
        Ok(())
    }

    fn draw_indexed(
        &mut self,
        vertex_array: VertexArrayId,
        topology: PrimitiveTopology,
        index_count: u32,
        index_type: IndexType,
    ) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.commands.push(format!("draw_indexed({:?}, {})", topology, index_count));
        if state.fail_indexed_draws {
            engine_bail!("sketch3d::MockGraphicsDevice", BackendError, "indexed draw refused");
        }

        let has_indices = state
            .vertex_arrays
            .get(&vertex_array)
            .map(|vao| vao.index_buffer.is_some())
            .unwrap_or(false);
        if !has_indices {
            engine_bail!("sketch3d::MockGraphicsDevice", BackendError, "vertex array {} has no index buffer", vertex_array.0);
        }

        state.draws.push(RecordedDraw {
            vertex_array,
            topology,
            first: 0,
            count: index_count,
            index_type: Some(index_type),
            vertex_data: Vec::new(),
        });
        Ok(())
    }

    fn clear(&mut self, value: ClearValue, flags: ClearFlags) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.commands.push("clear".to_string());
        state.clears.push((value, flags));
        Ok(())
    }

    fn set_point_size(&mut self, size: f32) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.commands.push(format!("set_point_size({})", size));
        if state.max_point_size.is_some_and(|max| size > max) {
            engine_bail!("sketch3d::MockGraphicsDevice", BackendError, "point size {} out of range", size);
        }
        state.point_size = Some(size);
        Ok(())
    }

    fn set_line_width(&mut self, width: f32) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.commands.push(format!("set_line_width({})", width));
        state.line_width = Some(width);
        Ok(())
    }

    fn set_polygon_mode(&mut self, mode: PolygonMode) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.commands.push(format!("set_polygon_mode({:?})", mode));
        if state.rejected_polygon_mode == Some(mode) {
            engine_bail!("sketch3d::MockGraphicsDevice", BackendError, "polygon mode {:?} refused", mode);
        }
        state.polygon_mode = Some(mode);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
