/// Fixed-function state and clear commands

use bitflags::bitflags;

bitflags! {
    /// Which attachments a clear touches
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
    }
}

/// Clear values for color and depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearValue {
    /// RGBA color
    pub color: [f32; 4],
    /// Depth value (1.0 = far plane)
    pub depth: f32,
}

impl ClearValue {
    pub fn color(color: [f32; 4]) -> Self {
        Self { color, depth: 1.0 }
    }
}

/// Rasterization mode for filled primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonMode {
    Fill,
    Line,
}
