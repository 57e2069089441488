/// Renderer - facade over a GraphicsDevice and its GpuBufferSet
///
/// Owns the device and the fixed buffer set. Static meshes are drawn directly;
/// arbitrary vertex streams go through [`Renderer::primitives`] and the
/// built-in shapes through [`Renderer::shapes`].
///
/// `shutdown()` may be called any number of times and is also run on drop.

use crate::error::Result;
use crate::graphics_device::{
    GraphicsDevice, PrimitiveTopology, IndexType, ClearValue, ClearFlags, PolygonMode,
};
use crate::draw::{GpuBufferSet, PrimitiveDispatcher, ShapeComposer, CUBE_INDICES, TRIANGLE_VERTICES};
use crate::{engine_bail, engine_error, engine_info, engine_warn};

const SOURCE: &str = "sketch3d::Renderer";

/// Renderer configuration, applied at initialization
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Color used by [`Renderer::clear`]
    pub clear_color: [f32; 4],
    /// Initial point size in pixels
    pub point_size: f32,
    /// Initial line width in pixels
    pub line_width: f32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.1, 0.1, 0.15, 1.0],
            point_size: 1.0,
            line_width: 1.0,
        }
    }
}

pub struct Renderer {
    device: Box<dyn GraphicsDevice>,
    buffers: GpuBufferSet,
    config: RendererConfig,
}

impl Renderer {
    /// Wrap a device. No GPU resource is created until [`initialize`](Self::initialize).
    pub fn new(device: Box<dyn GraphicsDevice>, config: RendererConfig) -> Self {
        Self {
            device,
            buffers: GpuBufferSet::default(),
            config,
        }
    }

    /// Create the buffer set and apply the configured point size and line width.
    ///
    /// A failed initialization leaves no GPU handle behind: buffer creation
    /// failures return `ResourceError`, a rejected point size or line width
    /// returns `InitializationFailed`. Calling this on an
    /// initialized renderer does nothing.
    pub fn initialize(&mut self) -> Result<()> {
        if self.is_initialized() {
            engine_warn!(SOURCE, "initialize() called twice, ignoring");
            return Ok(());
        }

        self.buffers = GpuBufferSet::create(self.device.as_mut())?;
        if let Err(error) = self.apply_state() {
            self.buffers.release(self.device.as_mut());
            engine_bail!(SOURCE, InitializationFailed, "could not apply renderer state: {}", error);
        }

        engine_info!(SOURCE, "Renderer initialized");
        Ok(())
    }

    fn apply_state(&mut self) -> Result<()> {
        self.device.set_point_size(self.config.point_size)?;
        self.device.set_line_width(self.config.line_width)
    }

    pub fn is_initialized(&self) -> bool {
        self.buffers.is_complete()
    }

    /// Release every GPU handle. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        if self.buffers.is_released() {
            return;
        }
        self.buffers.release(self.device.as_mut());
        engine_info!(SOURCE, "Renderer shut down");
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    // ===== FRAME =====

    /// Clear color and depth with the configured clear color.
    pub fn clear(&mut self) -> Result<()> {
        self.clear_with(self.config.clear_color)
    }

    /// Clear color and depth with an explicit color.
    pub fn clear_with(&mut self, color: [f32; 4]) -> Result<()> {
        self.device
            .clear(ClearValue::color(color), ClearFlags::COLOR | ClearFlags::DEPTH)
    }

    pub fn draw_triangle(&mut self) -> Result<()> {
        self.ensure_initialized("draw_triangle")?;
        self.device.draw(
            self.buffers.triangle(),
            PrimitiveTopology::Triangles,
            0,
            TRIANGLE_VERTICES.len() as u32,
        )
    }

    /// Unit cube, filled.
    pub fn draw_cube(&mut self) -> Result<()> {
        self.ensure_initialized("draw_cube")?;
        self.device.draw_indexed(
            self.buffers.cube(),
            PrimitiveTopology::Triangles,
            CUBE_INDICES.len() as u32,
            IndexType::U32,
        )
    }

    /// Unit cube as edges. Fill mode is restored even if the draw fails; the
    /// draw error wins over a failed restore.
    pub fn draw_cube_wireframe(&mut self) -> Result<()> {
        self.ensure_initialized("draw_cube_wireframe")?;
        self.device.set_polygon_mode(PolygonMode::Line)?;
        let drawn = self.draw_cube();
        let restored = self.device.set_polygon_mode(PolygonMode::Fill);
        match (drawn, restored) {
            (Err(draw_error), Err(restore_error)) => {
                engine_error!(SOURCE, "Could not restore fill mode after failed wireframe draw: {}", restore_error);
                Err(draw_error)
            }
            (drawn, restored) => drawn.and(restored),
        }
    }

    /// The config keeps the previous size if the device rejects `size`.
    pub fn set_point_size(&mut self, size: f32) -> Result<()> {
        self.device.set_point_size(size)?;
        self.config.point_size = size;
        Ok(())
    }

    pub fn set_line_width(&mut self, width: f32) -> Result<()> {
        self.device.set_line_width(width)?;
        self.config.line_width = width;
        Ok(())
    }

    // ===== DYNAMIC DRAWING =====

    /// Dispatcher drawing through this renderer's dynamic buffer.
    pub fn primitives(&mut self) -> PrimitiveDispatcher<'_> {
        PrimitiveDispatcher::new(self.device.as_mut(), &self.buffers)
    }

    /// Grid / axis / circle helpers on top of [`primitives`](Self::primitives).
    pub fn shapes(&mut self) -> ShapeComposer<'_> {
        ShapeComposer::new(self.primitives())
    }

    fn ensure_initialized(&self, operation: &str) -> Result<()> {
        if !self.is_initialized() {
            engine_bail!(SOURCE, ResourceError, "{} requires an initialized renderer", operation);
        }
        Ok(())
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
