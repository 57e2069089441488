//! Controller module: interactive input layer driving a Camera.
//!
//! Controllers never own the camera. The caller threads it through every
//! event, which keeps window callbacks free of global state.

mod fly_camera;

pub use fly_camera::{FlyCameraController, ControllerConfig, ControllerResponse, CursorMode};
