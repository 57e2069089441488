//! Draw module: vertex records, GPU buffer set, primitive dispatch and shapes.
//!
//! Arbitrary-length vertex streams are rendered through one reusable dynamic
//! buffer whose storage is replaced on every call. Static triangle and cube
//! data live in their own buffers, created once by [`GpuBufferSet`].

mod vertex;
mod static_meshes;
mod buffer_set;
mod dispatcher;
mod shapes;

pub use vertex::{Vertex, vertices_from_floats, WHITE, RED, GREEN, BLUE, YELLOW, GRAY};
pub use static_meshes::{TRIANGLE_VERTICES, CUBE_VERTICES, CUBE_INDICES};
pub use buffer_set::GpuBufferSet;
pub use dispatcher::PrimitiveDispatcher;
pub use shapes::{ShapeComposer, grid_vertices, axis_vertices, circle_vertices};
