/// Vertex input layout, primitive topology and index types

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTopology {
    /// Unconnected points
    Points,
    /// Independent segments, one per vertex pair
    Lines,
    /// Connected open polyline
    LineStrip,
    /// Connected polyline, last vertex joined back to the first
    LineLoop,
    /// Triangle list
    Triangles,
}

/// Index buffer element type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    U32,
}

/// Vertex attribute data format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum BufferFormat {
    R32G32B32_SFLOAT, // vec3 (12 bytes)
}

/// Vertex attribute description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Attribute location in shader
    pub location: u32,
    /// Format of the attribute
    pub format: BufferFormat,
    /// Offset in bytes from the start of the vertex
    pub offset: u32,
}

/// Interleaved single-binding vertex layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    /// Stride in bytes between consecutive vertices
    pub stride: u32,
    /// Vertex attributes
    pub attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Six floats per vertex: location 0 = position, location 1 = color or normal.
    pub fn position_and_vec3() -> Self {
        Self {
            stride: 24,
            attributes: vec![
                VertexAttribute { location: 0, format: BufferFormat::R32G32B32_SFLOAT, offset: 0 },
                VertexAttribute { location: 1, format: BufferFormat::R32G32B32_SFLOAT, offset: 12 },
            ],
        }
    }

}

#[cfg(test)]
#[path = "vertex_layout_tests.rs"]
mod tests;
