/// Update strategies.
///
/// An Updater synchronizes per-frame state before culling runs.
/// Two separate phases: the camera matrix refresh, then scene change
/// sets (removals, insertions, transform updates) flushed into the
/// spatial index.

use super::scene::Scene;
use super::scene_index::SceneIndex;
use crate::camera::Camera;
use crate::error::Result;

/// Strategy for per-frame synchronization.
///
/// Called once per frame before culling. `&mut self` allows stateful
/// implementations to track their own bookkeeping across frames.
pub trait Updater: Send + Sync {
    /// Refresh the camera's cached matrices for this frame.
    ///
    /// Runs the camera's single explicit update step. Call it once per
    /// frame — every subsequent query then reads the same cached
    /// matrices, keeping results consistent across the frame.
    fn update_frame(&mut self, camera: &mut Camera) -> Result<()>;

    /// Flush the scene's change sets into the spatial index.
    ///
    /// Processes removed, new, and dirty renderables:
    /// - Removed: cleans up the SceneIndex + commits removal from Scene
    /// - New: inserts the world AABB into the SceneIndex
    /// - Dirty: re-inserts the world AABB after a transform change
    fn update_renderables(
        &mut self,
        scene: &mut Scene,
        scene_index: Option<&mut dyn SceneIndex>,
    ) -> Result<()>;
}

/// No-op updater — does nothing.
///
/// Placeholder for callers that refresh cameras themselves and use no
/// spatial index.
pub struct NoOpUpdater;

impl NoOpUpdater {
    pub fn new() -> Self {
        Self
    }
}

impl Updater for NoOpUpdater {
    fn update_frame(&mut self, _camera: &mut Camera) -> Result<()> {
        Ok(())
    }

    fn update_renderables(
        &mut self,
        _scene: &mut Scene,
        _scene_index: Option<&mut dyn SceneIndex>,
    ) -> Result<()> {
        Ok(())
    }
}

/// Default updater — refreshes the camera and keeps a SceneIndex in sync.
///
/// Drains the Scene's change sets exactly once; with no SceneIndex the
/// change sets are still drained so they cannot grow without bound.
pub struct DefaultUpdater;

impl DefaultUpdater {
    pub fn new() -> Self {
        Self
    }
}

impl Updater for DefaultUpdater {
    fn update_frame(&mut self, camera: &mut Camera) -> Result<()> {
        camera.update_matrices()
    }

    fn update_renderables(
        &mut self,
        scene: &mut Scene,
        mut scene_index: Option<&mut dyn SceneIndex>,
    ) -> Result<()> {
        // Phase 0: removals — clean SceneIndex then commit removal from Scene
        let removed_keys = scene.take_removed_renderables();
        if let Some(ref mut idx) = scene_index {
            for key in &removed_keys {
                idx.remove(*key);
            }
        }
        scene.commit_removals(&removed_keys);

        // Phase 1: new renderables — insert world AABBs into the SceneIndex
        let new_keys = scene.take_new_renderables();
        if let Some(ref mut idx) = scene_index {
            for key in &new_keys {
                let renderable = match scene.renderable(*key) {
                    Some(renderable) => renderable,
                    None => continue,
                };
                idx.insert(*key, &renderable.world_aabb());
            }
        }

        // Phase 2: dirty transforms — refresh world AABBs in the SceneIndex
        let dirty_keys = scene.take_dirty_transforms();
        if let Some(ref mut idx) = scene_index {
            for key in &dirty_keys {
                let renderable = match scene.renderable(*key) {
                    Some(renderable) => renderable,
                    None => continue,
                };
                // A renderable created and moved the same frame shows up in
                // both sets; the index insert above already used the latest
                // transform, so update() is simply a re-insert here.
                idx.update(*key, &renderable.world_aabb());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "updater_tests.rs"]
mod tests;
