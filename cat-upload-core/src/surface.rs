use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::model::{StatusMessage, Tile};

/// Where the client renders tiles and status, and whose file selection it resets.
///
/// Methods take `&self` so overlapping operations can share one surface.
pub trait GallerySurface {
    fn clear_tiles(&self);
    fn push_tile(&self, tile: Tile);
    fn set_status(&self, status: StatusMessage);
    fn clear_selection(&self);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceSnapshot {
    pub tiles: Vec<Tile>,
    pub status: StatusMessage,
    pub selection_cleared: bool,
}

/// In-memory surface, rendered after the fact.
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: Mutex<SurfaceSnapshot>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        self.lock().clone()
    }

    // A panic mid-update leaves plain data behind, still fine to read.
    fn lock(&self) -> MutexGuard<'_, SurfaceSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GallerySurface for MemorySurface {
    fn clear_tiles(&self) {
        self.lock().tiles.clear();
    }

    fn push_tile(&self, tile: Tile) {
        self.lock().tiles.push(tile);
    }

    fn set_status(&self, status: StatusMessage) {
        self.lock().status = status;
    }

    fn clear_selection(&self) {
        self.lock().selection_cleared = true;
    }
}
