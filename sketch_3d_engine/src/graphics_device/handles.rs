/// Opaque GPU resource handles
///
/// Handles are plain `u32` names handed out by the backend. The value `0` is
/// reserved: it marks a resource that was never created or was already
/// released, and must never be passed to a destroy call.

/// Buffer handle (vertex or index storage)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BufferId(pub u32);

impl BufferId {
    /// Never-created / already-released sentinel
    pub const UNSET: Self = Self(0);

    pub fn is_set(self) -> bool {
        self != Self::UNSET
    }
}

/// Vertex array handle (attribute layout bound to a vertex/index buffer pair)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VertexArrayId(pub u32);

impl VertexArrayId {
    /// Never-created / already-released sentinel
    pub const UNSET: Self = Self(0);

    pub fn is_set(self) -> bool {
        self != Self::UNSET
    }
}
