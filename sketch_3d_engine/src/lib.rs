/*!
# Sketch3D Engine

Camera transforms and immediate-style primitive drawing for small 3D tools.

The crate is backend-agnostic: every GPU operation goes through the
[`GraphicsDevice`](graphics_device::GraphicsDevice) trait, implemented by the
application's backend (OpenGL, Vulkan, wgpu...).

## Architecture

- **math**: look-at / perspective construction, spherical conversions, axis rotation
- **Camera**: position/target/up + projection parameters with lazily cached matrices
- **GpuBufferSet**: the fixed set of static and dynamic buffers owned by a renderer
- **PrimitiveDispatcher**: uploads a vertex stream into the dynamic buffer and draws it
- **ShapeComposer**: grid, axis and circle streams built on the dispatcher
- **Renderer**: facade owning the device and the buffer set
- **FlyCameraController**: mouse-look / WASD input layer driving a Camera
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod math;
pub mod camera;
pub mod graphics_device;
pub mod draw;
pub mod renderer;
pub mod controller;
pub mod shader;

// Main sketch3d namespace module
pub mod sketch3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::engine::Engine;

    // Renderer facade
    pub use crate::renderer::{Renderer, RendererConfig};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera and transform math
    pub mod camera {
        pub use crate::camera::*;
        pub use crate::math;
    }

    // Device seam and drawing types
    pub mod render {
        pub use crate::graphics_device::*;
        pub use crate::draw::*;
        pub use crate::shader::*;
    }

    // Input layer
    pub mod controller {
        pub use crate::controller::*;
    }
}

// Re-export math library at crate root
pub use glam;
