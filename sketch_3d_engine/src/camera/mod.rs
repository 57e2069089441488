//! Camera module: interactive camera with lazily cached matrices.
//!
//! The camera is owned and driven by the caller. It is queried once per frame
//! for its view and projection matrices; mutators only mark the caches stale.

mod cached_matrix;
mod camera;

pub use cached_matrix::CameraStats;
pub use camera::Camera;
