/// Renderable — an opaque culling proxy for a scene object.
///
/// The library never sees real geometry: a Renderable is just a world
/// transform plus a local-space bounding volume, which is all a
/// visibility query needs. Flags carry caller-facing state (manual
/// visibility toggle, culling bypass).

use super::bounds::BoundingVolume;
use bitflags::bitflags;
use glam::Mat4;
use slotmap::new_key_type;

new_key_type! {
    /// Stable key for a Renderable within a Scene.
    ///
    /// Keys remain valid even after other renderables are removed.
    /// A key becomes invalid only when its own renderable is removed.
    pub struct RenderableKey;
}

bitflags! {
    /// Renderable state flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RenderableFlags: u64 {
        /// Candidate for rendering; cullers skip renderables without it
        const VISIBLE = 1 << 0;
        /// Bypass the frustum test — always reported visible while VISIBLE
        /// is set (skyboxes, full-screen effects)
        const ALWAYS_VISIBLE = 1 << 1;
    }
}

/// A culling proxy: world transform + local-space bounding volume.
///
/// Created through `Scene::create_renderable()`. Transform changes should
/// go through `Scene::set_world_matrix()` so the scene can track them for
/// spatial-index maintenance.
#[derive(Debug, Clone, Copy)]
pub struct Renderable {
    /// World transform matrix (pre-computed by the caller's scene graph)
    world_matrix: Mat4,
    /// Bounding volume in local space
    bounds: BoundingVolume,
    /// State flags (visibility toggle, culling bypass)
    flags: RenderableFlags,
}

impl Renderable {
    /// Create a renderable with the VISIBLE flag set.
    pub(crate) fn new(bounds: BoundingVolume, world_matrix: Mat4) -> Self {
        Self {
            world_matrix,
            bounds,
            flags: RenderableFlags::VISIBLE,
        }
    }

    // ===== ACCESSORS =====

    /// Get the world transform matrix
    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// Set the world transform matrix.
    ///
    /// Prefer `Scene::set_world_matrix()` which also records the change
    /// for spatial-index maintenance.
    pub fn set_world_matrix(&mut self, matrix: Mat4) {
        self.world_matrix = matrix;
    }

    /// Get the bounding volume (local space)
    pub fn bounds(&self) -> &BoundingVolume {
        &self.bounds
    }

    /// Get the flags
    pub fn flags(&self) -> RenderableFlags {
        self.flags
    }

    /// Set the flags
    pub fn set_flags(&mut self, flags: RenderableFlags) {
        self.flags = flags;
    }

    /// Set or clear the VISIBLE flag
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(RenderableFlags::VISIBLE, visible);
    }

    /// Check the VISIBLE flag
    pub fn is_visible(&self) -> bool {
        self.flags.contains(RenderableFlags::VISIBLE)
    }

    // ===== DERIVED =====

    /// Bounding volume transformed into world space.
    pub fn world_bounds(&self) -> BoundingVolume {
        self.bounds.transformed(&self.world_matrix)
    }

    /// Smallest world-space AABB enclosing the bounding volume.
    ///
    /// This is what spatial indexes store.
    pub fn world_aabb(&self) -> super::bounds::AABB {
        self.world_bounds().aabb()
    }
}

#[cfg(test)]
#[path = "renderable_tests.rs"]
mod tests;
