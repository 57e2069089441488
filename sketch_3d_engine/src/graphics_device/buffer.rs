/// Buffer descriptor

/// Buffer usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Vertex buffer
    Vertex,
    /// Index buffer
    Index,
}

/// How often the buffer contents are replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFrequency {
    /// Uploaded once at creation
    Static,
    /// Replaced wholesale on every draw
    Dynamic,
}

/// Descriptor for creating a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferDesc {
    /// Initial size in bytes (dynamic buffers may start empty)
    pub size: u64,
    /// Buffer usage
    pub usage: BufferUsage,
    /// Update frequency hint
    pub frequency: UpdateFrequency,
}

impl BufferDesc {
    pub fn vertex(size: u64, frequency: UpdateFrequency) -> Self {
        Self { size, usage: BufferUsage::Vertex, frequency }
    }

    pub fn index(size: u64) -> Self {
        Self { size, usage: BufferUsage::Index, frequency: UpdateFrequency::Static }
    }
}
