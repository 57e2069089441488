/// Grid, axis and circle helpers built on the primitive dispatcher.
///
/// Each shape has a pure builder returning its vertex stream, and a
/// `ShapeComposer` method that builds the stream and draws it.

use std::f32::consts::TAU;
use glam::Vec3;
use crate::error::Result;
use crate::engine_bail;
use super::dispatcher::PrimitiveDispatcher;
use super::vertex::{Vertex, RED, GREEN, BLUE, YELLOW, GRAY};

/// Line-list stream of a square grid in the XY plane, centered on the origin.
///
/// `size + 1` vertical segments followed by `size + 1` horizontal ones, each
/// spanning `±size·spacing/2`.
pub fn grid_vertices(size: u32, spacing: f32) -> Vec<Vertex> {
    let half = size as f32 * spacing * 0.5;
    let mut vertices = Vec::with_capacity(4 * (size as usize + 1));

    for i in 0..=size {
        let x = -half + i as f32 * spacing;
        vertices.push(Vertex::new(Vec3::new(x, -half, 0.0), GRAY));
        vertices.push(Vertex::new(Vec3::new(x, half, 0.0), GRAY));
    }
    for i in 0..=size {
        let y = -half + i as f32 * spacing;
        vertices.push(Vertex::new(Vec3::new(-half, y, 0.0), GRAY));
        vertices.push(Vertex::new(Vec3::new(half, y, 0.0), GRAY));
    }
    vertices
}

/// Line-list stream of the X (red), Y (green) and Z (blue) axes from the origin.
pub fn axis_vertices(length: f32) -> [Vertex; 6] {
    [
        Vertex::new(Vec3::ZERO, RED),
        Vertex::new(Vec3::new(length, 0.0, 0.0), RED),
        Vertex::new(Vec3::ZERO, GREEN),
        Vertex::new(Vec3::new(0.0, length, 0.0), GREEN),
        Vertex::new(Vec3::ZERO, BLUE),
        Vertex::new(Vec3::new(0.0, 0.0, length), BLUE),
    ]
}

/// `segments + 1` vertices around a circle in the XY plane.
///
/// The last vertex repeats the first exactly, so the loop closes at angle 0.
pub fn circle_vertices(center_x: f32, center_y: f32, radius: f32, segments: u32) -> Result<Vec<Vertex>> {
    if segments == 0 {
        engine_bail!("sketch3d::ShapeComposer", InvalidArgument, "circle needs at least one segment");
    }

    let vertices = (0..=segments)
        .map(|i| {
            let angle = TAU * (i % segments) as f32 / segments as f32;
            let position = Vec3::new(
                center_x + radius * angle.cos(),
                center_y + radius * angle.sin(),
                0.0,
            );
            Vertex::new(position, YELLOW)
        })
        .collect();
    Ok(vertices)
}

/// Draws the built-in shapes through a [`PrimitiveDispatcher`].
pub struct ShapeComposer<'a> {
    dispatcher: PrimitiveDispatcher<'a>,
}

impl<'a> ShapeComposer<'a> {
    pub fn new(dispatcher: PrimitiveDispatcher<'a>) -> Self {
        Self { dispatcher }
    }

    /// `2·(size + 1)` gray segments.
    pub fn grid(&mut self, size: u32, spacing: f32) -> Result<()> {
        self.dispatcher.draw_lines(&grid_vertices(size, spacing))
    }

    pub fn axis(&mut self, length: f32) -> Result<()> {
        self.dispatcher.draw_lines(&axis_vertices(length))
    }

    /// Yellow circle drawn as a closed loop.
    pub fn circle(&mut self, center_x: f32, center_y: f32, radius: f32, segments: u32) -> Result<()> {
        let vertices = circle_vertices(center_x, center_y, radius, segments)?;
        self.dispatcher.draw_line_loop(&vertices)
    }

    /// Back to the underlying dispatcher for free-form streams.
    pub fn primitives(&mut self) -> &mut PrimitiveDispatcher<'a> {
        &mut self.dispatcher
    }
}

#[cfg(test)]
#[path = "shapes_tests.rs"]
mod tests;
