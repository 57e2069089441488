//! Shared recording GraphicsDevice for integration tests
//!
//! Implements the public trait only, the way an application backend would.
//! State lives behind `Rc<RefCell<_>>` so the test keeps a view on it after
//! the device has been handed to a Renderer.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use sketch_3d_engine::sketch3d::{Error, Result};
use sketch_3d_engine::sketch3d::render::{
    GraphicsDevice, BufferDesc, BufferId, VertexArrayId, VertexLayout,
    PrimitiveTopology, IndexType, ClearValue, ClearFlags, PolygonMode,
};

/// A draw as the GPU would see it: topology and the vertex floats it reads
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub topology: PrimitiveTopology,
    pub vertex_count: u32,
    pub floats: Vec<f32>,
}

#[derive(Debug, Default)]
pub struct DeviceLog {
    pub next_handle: u32,
    pub creations: usize,
    pub fail_creation_at: Option<usize>,
    pub live: HashSet<u32>,
    pub destroy_counts: HashMap<u32, usize>,
    pub buffer_data: HashMap<u32, Vec<u8>>,
    pub array_buffers: HashMap<u32, u32>,
    pub frames: Vec<Frame>,
    pub indexed_draws: usize,
    pub orphans: usize,
    pub polygon_modes: Vec<PolygonMode>,
}

#[derive(Debug, Default, Clone)]
pub struct RecordingDevice {
    pub log: Rc<RefCell<DeviceLog>>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(index: usize) -> Self {
        let device = Self::new();
        device.log.borrow_mut().fail_creation_at = Some(index);
        device
    }

    fn allocate(&mut self) -> Result<u32> {
        let mut log = self.log.borrow_mut();
        let index = log.creations;
        log.creations += 1;
        if log.fail_creation_at == Some(index) {
            return Err(Error::BackendError(format!("allocation #{} refused", index)));
        }
        log.next_handle += 1;
        let handle = log.next_handle;
        log.live.insert(handle);
        Ok(handle)
    }

    fn release(&mut self, handle: u32) {
        let mut log = self.log.borrow_mut();
        log.live.remove(&handle);
        *log.destroy_counts.entry(handle).or_insert(0) += 1;
    }
}

impl GraphicsDevice for RecordingDevice {
    fn create_buffer(&mut self, _desc: &BufferDesc) -> Result<BufferId> {
        self.allocate().map(BufferId)
    }

    fn destroy_buffer(&mut self, buffer: BufferId) {
        self.release(buffer.0);
    }

    fn upload_buffer(&mut self, buffer: BufferId, data: &[u8]) -> Result<()> {
        self.log.borrow_mut().buffer_data.insert(buffer.0, data.to_vec());
        Ok(())
    }

    fn orphan_buffer(&mut self, buffer: BufferId, data: &[u8]) -> Result<()> {
        let mut log = self.log.borrow_mut();
        log.orphans += 1;
        log.buffer_data.insert(buffer.0, data.to_vec());
        Ok(())
    }

    fn create_vertex_array(
        &mut self,
        _layout: &VertexLayout,
        vertex_buffer: BufferId,
        _index_buffer: Option<BufferId>,
    ) -> Result<VertexArrayId> {
        let handle = self.allocate()?;
        self.log.borrow_mut().array_buffers.insert(handle, vertex_buffer.0);
        Ok(VertexArrayId(handle))
    }

    fn destroy_vertex_array(&mut self, vertex_array: VertexArrayId) {
        self.release(vertex_array.0);
    }

    fn draw(
        &mut self,
        vertex_array: VertexArrayId,
        topology: PrimitiveTopology,
        first_vertex: u32,
        vertex_count: u32,
    ) -> Result<()> {
        let mut log = self.log.borrow_mut();
        let buffer = log.array_buffers.get(&vertex_array.0).copied().unwrap_or(0);
        let bytes = log.buffer_data.get(&buffer).cloned().unwrap_or_default();
        let floats: Vec<f32> = bytes
            .chunks_exact(4)
            .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
            .skip(first_vertex as usize * 6)
            .take(vertex_count as usize * 6)
            .collect();
        log.frames.push(Frame { topology, vertex_count, floats });
        Ok(())
    }

    fn draw_indexed(
        &mut self,
        _vertex_array: VertexArrayId,
        _topology: PrimitiveTopology,
        _index_count: u32,
        _index_type: IndexType,
    ) -> Result<()> {
        self.log.borrow_mut().indexed_draws += 1;
        Ok(())
    }

    fn clear(&mut self, _value: ClearValue, _flags: ClearFlags) -> Result<()> {
        Ok(())
    }

    fn set_point_size(&mut self, _size: f32) -> Result<()> {
        Ok(())
    }

    fn set_line_width(&mut self, _width: f32) -> Result<()> {
        Ok(())
    }

    fn set_polygon_mode(&mut self, mode: PolygonMode) -> Result<()> {
        self.log.borrow_mut().polygon_modes.push(mode);
        Ok(())
    }
}
