/// FlyCameraController - right-mouse look and WASD movement
///
/// - Holding the right mouse button captures the cursor and turns mouse
///   motion into yaw/pitch, pitch clamped to `±pitch_limit`.
/// - W/A/S/D move the camera along its forward/right axes, only while the
///   right button is held.
/// - Escape requests the window to close.
/// - Resizing the window updates the camera's aspect ratio.
///
/// Yaw and pitch are read back from the camera's current direction on every
/// mouse move, so the controller keeps no orientation of its own and code
/// that moves the camera directly stays in sync.

use bitflags::bitflags;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use crate::camera::Camera;
use crate::math;
use crate::{engine_debug, engine_trace};

const SOURCE: &str = "sketch3d::FlyCameraController";

/// Controller tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// Movement speed in world units per second
    pub move_speed: f32,
    /// Degrees of rotation per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Maximum absolute pitch in degrees
    pub pitch_limit: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: 2.5,
            mouse_sensitivity: 0.1,
            pitch_limit: 89.0,
        }
    }
}

/// Cursor behavior the window should apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    /// Visible, free cursor
    Free,
    /// Hidden cursor locked to the window (mouse look)
    Captured,
}

/// What the application should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerResponse {
    /// New cursor mode, if it changed
    pub cursor: Option<CursorMode>,
    /// The user asked to quit
    pub close_requested: bool,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct MovementKeys: u8 {
        const FORWARD = 1 << 0;
        const BACKWARD = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl MovementKeys {
    fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyW => Some(Self::FORWARD),
            KeyCode::KeyS => Some(Self::BACKWARD),
            KeyCode::KeyA => Some(Self::LEFT),
            KeyCode::KeyD => Some(Self::RIGHT),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FlyCameraController {
    config: ControllerConfig,
    looking: bool,
    last_cursor: Option<(f64, f64)>,
    held: MovementKeys,
}

impl Default for FlyCameraController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl FlyCameraController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            looking: false,
            last_cursor: None,
            held: MovementKeys::empty(),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// True while the right mouse button is held.
    pub fn is_looking(&self) -> bool {
        self.looking
    }

    /// Route a winit window event. Events the controller does not use are ignored.
    pub fn handle_window_event(&mut self, camera: &mut Camera, event: &WindowEvent) -> ControllerResponse {
        match event {
            WindowEvent::MouseInput { state, button, .. } => self.on_mouse_button(*button, *state),
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(camera, position.x, position.y);
                ControllerResponse::default()
            }
            WindowEvent::KeyboardInput {
                event: KeyEvent { physical_key: PhysicalKey::Code(code), state, .. },
                ..
            } => self.on_key(*code, *state),
            WindowEvent::Resized(size) => {
                self.on_resize(camera, *size);
                ControllerResponse::default()
            }
            WindowEvent::Focused(false) => self.on_focus_lost(),
            WindowEvent::CloseRequested => ControllerResponse {
                cursor: None,
                close_requested: true,
            },
            _ => ControllerResponse::default(),
        }
    }

    /// Right button press starts mouse look, release ends it.
    pub fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) -> ControllerResponse {
        if button != MouseButton::Right {
            return ControllerResponse::default();
        }
        match state {
            ElementState::Pressed => {
                self.looking = true;
                // the first motion after a press only records the cursor
                self.last_cursor = None;
                engine_debug!(SOURCE, "Mouse look started");
                ControllerResponse { cursor: Some(CursorMode::Captured), close_requested: false }
            }
            ElementState::Released => {
                self.looking = false;
                engine_debug!(SOURCE, "Mouse look ended");
                ControllerResponse { cursor: Some(CursorMode::Free), close_requested: false }
            }
        }
    }

    /// Turn the camera by the cursor delta while looking.
    ///
    /// Moving right increases yaw; moving up (screen y decreasing) increases pitch.
    pub fn on_cursor_moved(&mut self, camera: &mut Camera, x: f64, y: f64) {
        if !self.looking {
            self.last_cursor = None;
            return;
        }
        let Some((last_x, last_y)) = self.last_cursor.replace((x, y)) else {
            return;
        };

        let x_offset = (x - last_x) as f32 * self.config.mouse_sensitivity;
        let y_offset = (last_y - y) as f32 * self.config.mouse_sensitivity;

        let (pitch, yaw) = math::angles_from_direction(camera.forward());
        let limit = self.config.pitch_limit.abs();
        let pitch = (pitch + y_offset).clamp(-limit, limit);
        let yaw = yaw + x_offset;

        camera.rotate(pitch, yaw, 0.0);
        engine_trace!(SOURCE, "Mouse look pitch={:.2} yaw={:.2}", pitch, yaw);
    }

    /// Track movement keys; Escape requests close.
    pub fn on_key(&mut self, key: KeyCode, state: ElementState) -> ControllerResponse {
        if key == KeyCode::Escape && state == ElementState::Pressed {
            return ControllerResponse { cursor: None, close_requested: true };
        }
        if let Some(flag) = MovementKeys::from_key(key) {
            self.held.set(flag, state == ElementState::Pressed);
        }
        ControllerResponse::default()
    }

    /// New aspect ratio from the window size. A zero-height (minimized) window is ignored.
    pub fn on_resize(&mut self, camera: &mut Camera, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        camera.set_aspect_ratio(size.width as f32 / size.height as f32);
    }

    /// Apply held movement keys for a frame of `dt` seconds.
    pub fn update(&mut self, camera: &mut Camera, dt: f32) {
        if !self.looking || self.held.is_empty() {
            return;
        }

        let forward = camera.forward();
        let right = camera.right();
        let mut offset = glam::Vec3::ZERO;
        if self.held.contains(MovementKeys::FORWARD) {
            offset += forward;
        }
        if self.held.contains(MovementKeys::BACKWARD) {
            offset -= forward;
        }
        if self.held.contains(MovementKeys::RIGHT) {
            offset += right;
        }
        if self.held.contains(MovementKeys::LEFT) {
            offset -= right;
        }

        camera.translate(offset * self.config.move_speed * dt);
    }

    fn on_focus_lost(&mut self) -> ControllerResponse {
        self.held = MovementKeys::empty();
        if !self.looking {
            return ControllerResponse::default();
        }
        self.looking = false;
        ControllerResponse { cursor: Some(CursorMode::Free), close_requested: false }
    }
}

#[cfg(test)]
#[path = "fly_camera_tests.rs"]
mod tests;
