/// Spatial acceleration structures for scene queries.
///
/// A SceneIndex indexes Renderables by their world-space AABB
/// for efficient frustum culling and spatial queries.
///
/// Ownership: the caller creates and owns the SceneIndex.
/// It is passed by reference to Updater and CameraCuller.

use super::bounds::AABB;
use super::renderable::RenderableKey;
use crate::camera::Frustum;

/// Trait for spatial indexing of scene renderables.
///
/// Used by CameraCuller (frustum queries) and Updater (renderable
/// placement). The caller owns the SceneIndex and passes it as a
/// parameter.
pub trait SceneIndex: Send + Sync {
    /// Insert a renderable with its world-space AABB.
    fn insert(&mut self, key: RenderableKey, world_aabb: &AABB);

    /// Remove a renderable from the index.
    fn remove(&mut self, key: RenderableKey);

    /// Update a renderable's world-space AABB (e.g. after transform change).
    fn update(&mut self, key: RenderableKey, world_aabb: &AABB);

    /// Query all renderables whose world AABB intersects the frustum.
    /// Results are appended to `results`, without duplicates.
    fn query_frustum(&self, frustum: &Frustum, results: &mut Vec<RenderableKey>);

    /// Remove all renderables from the index.
    fn clear(&mut self);
}
