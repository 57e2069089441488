/// Lazily recomputed 4x4 matrix.
///
/// The cache lives behind `Cell`s so that read paths stay `&self`. A stale
/// cache is recomputed on the next read and then served unchanged until it is
/// invalidated again.

use std::cell::Cell;
use glam::Mat4;

#[derive(Debug, Clone)]
pub(crate) struct CachedMatrix {
    value: Cell<Mat4>,
    dirty: Cell<bool>,
    recomputes: Cell<u64>,
}

impl CachedMatrix {
    /// A new cache starts stale.
    pub(crate) fn new() -> Self {
        Self {
            value: Cell::new(Mat4::IDENTITY),
            dirty: Cell::new(true),
            recomputes: Cell::new(0),
        }
    }

    pub(crate) fn invalidate(&mut self) {
        self.dirty.set(true);
    }

    #[cfg(test)]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Return the cached matrix, running `compute` first if the cache is stale.
    pub(crate) fn get_or_recompute(&self, compute: impl FnOnce() -> Mat4) -> Mat4 {
        if self.dirty.get() {
            self.value.set(compute());
            self.dirty.set(false);
            self.recomputes.set(self.recomputes.get() + 1);
        }
        self.value.get()
    }

    pub(crate) fn recomputes(&self) -> u64 {
        self.recomputes.get()
    }
}

/// Recompute counters of a camera's matrix caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraStats {
    /// Number of times the view matrix was rebuilt
    pub view_recomputes: u64,
    /// Number of times the projection matrix was rebuilt
    pub projection_recomputes: u64,
}
