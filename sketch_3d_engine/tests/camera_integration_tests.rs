//! Integration tests for the camera, its controller and the shader helpers
//!
//! Run with: cargo test --test camera_integration_tests

use sketch_3d_engine::glam::{Mat4, Vec3};
use sketch_3d_engine::sketch3d::camera::{math, Camera};
use sketch_3d_engine::sketch3d::controller::{FlyCameraController, CursorMode};
use sketch_3d_engine::sketch3d::render::{upload_camera, ShaderProgram, VIEW};
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

struct LastViewShader {
    view: Option<Mat4>,
}

impl ShaderProgram for LastViewShader {
    fn use_program(&mut self) {}
    fn set_bool(&mut self, _name: &str, _value: bool) {}
    fn set_int(&mut self, _name: &str, _value: i32) {}
    fn set_float(&mut self, _name: &str, _value: f32) {}
    fn set_vec3(&mut self, _name: &str, _value: Vec3) {}
    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        if name == VIEW {
            self.view = Some(*value);
        }
    }
}

#[test]
fn test_integration_frame_reads_each_matrix_once() {
    let mut camera = Camera::default();
    let mut controller = FlyCameraController::default();
    let mut shader = LastViewShader { view: None };

    assert_eq!(
        controller.on_mouse_button(MouseButton::Right, ElementState::Pressed).cursor,
        Some(CursorMode::Captured)
    );
    controller.on_key(KeyCode::KeyW, ElementState::Pressed);

    for frame in 0..10 {
        controller.on_cursor_moved(&mut camera, 100.0 + frame as f64 * 5.0, 100.0);
        controller.update(&mut camera, 0.016);
        upload_camera(&mut shader, &camera, &Mat4::IDENTITY);
        upload_camera(&mut shader, &camera, &Mat4::IDENTITY);
    }

    // one rebuild per frame, however many times it is read
    let stats = camera.stats();
    assert_eq!(stats.view_recomputes, 10);
    assert_eq!(stats.projection_recomputes, 1);
    assert_eq!(shader.view, Some(camera.view_matrix()));
}

#[test]
fn test_integration_orbit_then_look_back() {
    let mut camera = Camera::default();

    camera.orbit_around(Vec3::ZERO, 5.0, 0.0, 0.0);
    assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-4));

    let origin = camera.view_matrix().transform_point3(Vec3::ZERO);
    assert!(origin.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-4));

    let (pitch, yaw) = math::angles_from_direction(camera.forward());
    assert!(pitch.abs() < 1e-3);
    assert!((yaw + 90.0).abs() < 1e-3);
}

#[test]
fn test_integration_projection_follows_aspect_ratio() {
    let mut camera = Camera::default();
    let wide = camera.projection_matrix();

    camera.set_aspect_ratio(1.0);

    let square = camera.projection_matrix();
    assert_ne!(wide, square);
    assert_eq!(square, math::perspective(45.0, 1.0, 0.1, 100.0));
}

#[test]
fn test_integration_every_mutator_rebuilds_its_matrix_once() {
    let mut camera = Camera::default();
    camera.view_matrix();
    camera.projection_matrix();

    camera.set_target(Vec3::new(0.0, 1.0, 0.0));
    camera.view_matrix();
    camera.look_at(Vec3::new(3.0, 3.0, 3.0), Vec3::ZERO, Vec3::Y);
    camera.view_matrix();
    camera.translate(Vec3::X);
    camera.view_matrix();
    camera.rotate(0.0, 45.0, 0.0);
    camera.view_matrix();
    camera.orbit_around(Vec3::ZERO, 4.0, 10.0, 10.0);
    let view = camera.view_matrix();
    camera.set_perspective(70.0, 1.5, 0.2, 40.0);
    let projection = camera.projection_matrix();

    let stats = camera.stats();
    assert_eq!(stats.view_recomputes, 6);
    assert_eq!(stats.projection_recomputes, 2);
    assert_eq!(view, math::look_at(camera.position(), Vec3::ZERO, Vec3::Y));
    assert_eq!(projection, math::perspective(70.0, 1.5, 0.2, 40.0));
}
