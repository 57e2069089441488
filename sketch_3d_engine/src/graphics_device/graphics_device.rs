/// GraphicsDevice trait - handle-based backend interface
///
/// Everything the buffer set, the primitive dispatcher and the renderer need
/// from a GPU backend. Implementations own the real API objects and hand out
/// `u32` handles; the engine never sees backend types.
///
/// The device is driven from a single rendering thread, hence `&mut self`
/// everywhere and no `Send`/`Sync` bound.

use crate::error::Result;
use super::{
    BufferDesc, BufferId, VertexArrayId, VertexLayout,
    PrimitiveTopology, IndexType, ClearValue, ClearFlags, PolygonMode,
};

pub trait GraphicsDevice {
    // ===== BUFFERS =====

    /// Create a buffer
    ///
    /// Never returns `BufferId::UNSET` on success.
    fn create_buffer(&mut self, desc: &BufferDesc) -> Result<BufferId>;

    /// Destroy a buffer (callers never pass `UNSET`)
    fn destroy_buffer(&mut self, buffer: BufferId);

    /// Upload the whole storage of a buffer
    ///
    /// Used once for static data.
    fn upload_buffer(&mut self, buffer: BufferId, data: &[u8]) -> Result<()>;

    /// Discard the buffer's storage and replace it with exactly `data`
    ///
    /// The previous contents are dropped as a whole, so the backend may hand
    /// out fresh storage instead of waiting on in-flight draws.
    fn orphan_buffer(&mut self, buffer: BufferId, data: &[u8]) -> Result<()>;

    // ===== VERTEX ARRAYS =====

    /// Bind a vertex layout to a vertex buffer and optional index buffer
    fn create_vertex_array(
        &mut self,
        layout: &VertexLayout,
        vertex_buffer: BufferId,
        index_buffer: Option<BufferId>,
    ) -> Result<VertexArrayId>;

    /// Destroy a vertex array (callers never pass `UNSET`)
    fn destroy_vertex_array(&mut self, vertex_array: VertexArrayId);

    // ===== DRAWING =====

    /// Non-indexed draw of `vertex_count` vertices starting at `first_vertex`
    fn draw(
        &mut self,
        vertex_array: VertexArrayId,
        topology: PrimitiveTopology,
        first_vertex: u32,
        vertex_count: u32,
    ) -> Result<()>;

    /// Indexed draw using the vertex array's index buffer
    fn draw_indexed(
        &mut self,
        vertex_array: VertexArrayId,
        topology: PrimitiveTopology,
        index_count: u32,
        index_type: IndexType,
    ) -> Result<()>;

    // ===== STATE =====

    /// Clear the current framebuffer
    fn clear(&mut self, value: ClearValue, flags: ClearFlags) -> Result<()>;

    fn set_point_size(&mut self, size: f32) -> Result<()>;

    fn set_line_width(&mut self, width: f32) -> Result<()>;

    fn set_polygon_mode(&mut self, mode: PolygonMode) -> Result<()>;
}
