/// Scene — a collection of Renderables for visibility queries.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys.
/// Transform and membership changes are recorded in change sets that the
/// Updater drains once per frame to keep a spatial index in sync.

use super::bounds::BoundingVolume;
use super::renderable::{Renderable, RenderableFlags, RenderableKey};
use crate::engine_bail;
use crate::error::Result;
use glam::Mat4;
use rustc_hash::FxHashSet;
use slotmap::SlotMap;

/// A scene of renderables, managed via stable keys.
///
/// Keys remain valid even after other renderables are removed.
/// Removal is deferred: `remove_renderable()` marks the key, and the
/// Updater commits the removal after cleaning up the spatial index.
pub struct Scene {
    /// Renderables stored in a slot map for O(1) insert/remove
    renderables: SlotMap<RenderableKey, Renderable>,
    /// Renderables whose world matrix changed since last take_dirty_transforms()
    dirty_transforms: FxHashSet<RenderableKey>,
    /// Newly created renderables pending spatial-index insertion
    new_renderables: FxHashSet<RenderableKey>,
    /// Renderables marked for deferred removal (processed by the Updater)
    removed_renderables: FxHashSet<RenderableKey>,
    /// Renderables carrying the ALWAYS_VISIBLE flag (kept for cullers,
    /// which must include them without a frustum test)
    always_visible: FxHashSet<RenderableKey>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            renderables: SlotMap::with_key(),
            dirty_transforms: FxHashSet::default(),
            new_renderables: FxHashSet::default(),
            removed_renderables: FxHashSet::default(),
            always_visible: FxHashSet::default(),
        }
    }

    /// Create a Renderable and add it to the scene.
    ///
    /// Returns a stable key that remains valid until the renderable is
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the world matrix contains
    /// non-finite values.
    pub fn create_renderable(
        &mut self,
        bounds: BoundingVolume,
        world_matrix: Mat4,
    ) -> Result<RenderableKey> {
        if !world_matrix.is_finite() {
            engine_bail!("nova::Scene", "world matrix contains non-finite values");
        }

        let renderable = Renderable::new(bounds, world_matrix);
        let key = self.renderables.insert(renderable);
        self.new_renderables.insert(key);
        Ok(key)
    }

    /// Mark a Renderable for deferred removal.
    ///
    /// The renderable stays in the scene until the Updater processes it
    /// (via `take_removed_renderables` + `commit_removals`).
    /// Returns false if the key is invalid.
    pub fn remove_renderable(&mut self, key: RenderableKey) -> bool {
        if self.renderables.contains_key(key) {
            self.removed_renderables.insert(key);
            self.dirty_transforms.remove(&key);
            self.new_renderables.remove(&key);
            true
        } else {
            false
        }
    }

    /// Get a Renderable by key
    pub fn renderable(&self, key: RenderableKey) -> Option<&Renderable> {
        self.renderables.get(key)
    }

    /// Set the world matrix of a renderable and record the change.
    /// Returns false if the key is invalid or the matrix is non-finite.
    pub fn set_world_matrix(&mut self, key: RenderableKey, matrix: Mat4) -> bool {
        if !matrix.is_finite() {
            return false;
        }
        if let Some(renderable) = self.renderables.get_mut(key) {
            renderable.set_world_matrix(matrix);
            self.dirty_transforms.insert(key);
            true
        } else {
            false
        }
    }

    /// Replace a renderable's flags, keeping the ALWAYS_VISIBLE lookup in
    /// sync. Returns false if the key is invalid.
    pub fn set_flags(&mut self, key: RenderableKey, flags: RenderableFlags) -> bool {
        if let Some(renderable) = self.renderables.get_mut(key) {
            renderable.set_flags(flags);
            if flags.contains(RenderableFlags::ALWAYS_VISIBLE) {
                self.always_visible.insert(key);
            } else {
                self.always_visible.remove(&key);
            }
            true
        } else {
            false
        }
    }

    /// Set or clear a renderable's VISIBLE flag. Returns false if the key
    /// is invalid.
    pub fn set_visible(&mut self, key: RenderableKey, visible: bool) -> bool {
        if let Some(renderable) = self.renderables.get_mut(key) {
            renderable.set_visible(visible);
            true
        } else {
            false
        }
    }

    /// Keys of renderables carrying the ALWAYS_VISIBLE flag.
    pub fn always_visible(&self) -> &FxHashSet<RenderableKey> {
        &self.always_visible
    }

    /// Get the set of renderables with pending transform changes.
    pub fn dirty_transforms(&self) -> &FxHashSet<RenderableKey> {
        &self.dirty_transforms
    }

    /// Take and clear the dirty transform set.
    pub fn take_dirty_transforms(&mut self) -> FxHashSet<RenderableKey> {
        std::mem::take(&mut self.dirty_transforms)
    }

    /// Get the set of newly created renderables pending index insertion.
    pub fn new_renderables(&self) -> &FxHashSet<RenderableKey> {
        &self.new_renderables
    }

    /// Take and clear the new renderables set.
    pub fn take_new_renderables(&mut self) -> FxHashSet<RenderableKey> {
        std::mem::take(&mut self.new_renderables)
    }

    /// Take and clear the set of renderables marked for removal.
    pub fn take_removed_renderables(&mut self) -> FxHashSet<RenderableKey> {
        std::mem::take(&mut self.removed_renderables)
    }

    /// Actually remove renderables from the SlotMap.
    ///
    /// Called by the Updater after draining removed_renderables and
    /// cleaning up the spatial index.
    pub(crate) fn commit_removals(&mut self, keys: &FxHashSet<RenderableKey>) {
        for &key in keys {
            self.renderables.remove(key);
            self.always_visible.remove(&key);
        }
    }

    /// Iterate over all renderable keys.
    pub fn renderable_keys(&self) -> impl Iterator<Item = RenderableKey> + '_ {
        self.renderables.keys()
    }

    /// Iterate over all renderables (key, renderable)
    pub fn renderables(&self) -> impl Iterator<Item = (RenderableKey, &Renderable)> {
        self.renderables.iter()
    }

    /// Get the number of renderables
    pub fn renderable_count(&self) -> usize {
        self.renderables.len()
    }

    /// Remove all renderables and clear every change set
    pub fn clear(&mut self) {
        self.renderables.clear();
        self.dirty_transforms.clear();
        self.new_renderables.clear();
        self.removed_renderables.clear();
        self.always_visible.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
