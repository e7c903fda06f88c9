/// Camera culling strategies.
///
/// A CameraCuller determines which Renderables are visible from a given
/// camera. Implementations range from brute-force (return all) to
/// spatial-index queries and depth-ordered output.
///
/// Precondition for every culler: the camera's matrices must be current
/// (`Camera::update_matrices()` / `Updater::update_frame()`) — the cull
/// itself performs no refresh, so one refresh serves every query of the
/// frame.

use super::renderable::{RenderableFlags, RenderableKey};
use super::scene::Scene;
use super::scene_index::SceneIndex;
use crate::camera::{Camera, Frustum, RenderView};
use rdst::{RadixKey, RadixSort};
use rustc_hash::FxHashSet;

/// Strategy for determining visible renderables from a camera.
///
/// Called once per frame. The returned RenderView is ephemeral and
/// consumed by the caller's draw or update pass.
///
/// `&mut self` allows stateful implementations (e.g. caching)
/// to maintain state across frames.
pub trait CameraCuller: Send + Sync {
    /// Cull the scene against the camera and return visible renderables.
    fn cull(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        scene_index: Option<&dyn SceneIndex>,
    ) -> RenderView;
}

/// Brute-force culler — returns ALL renderables (no actual culling).
///
/// Suitable for small scenes or as a baseline for comparison.
/// Ignores flags and the SceneIndex entirely.
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl CameraCuller for BruteForceCuller {
    fn cull(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        _scene_index: Option<&dyn SceneIndex>,
    ) -> RenderView {
        let visible: Vec<RenderableKey> = scene.renderable_keys().collect();
        RenderView::new(camera.clone(), visible)
    }
}

/// Frustum culler — tests renderable bounds against the camera frustum.
///
/// With a SceneIndex: spatial query over world AABBs, then flag filtering.
/// Without: frustum test on every renderable's world bounding volume.
/// Renderables without VISIBLE are skipped; ALWAYS_VISIBLE renderables
/// are included without a frustum test.
pub struct FrustumCuller;

impl FrustumCuller {
    pub fn new() -> Self {
        Self
    }

    fn renderable_is_visible(scene: &Scene, key: RenderableKey) -> bool {
        scene
            .renderable(key)
            .map(|r| r.is_visible())
            .unwrap_or(false)
    }
}

impl CameraCuller for FrustumCuller {
    fn cull(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        scene_index: Option<&dyn SceneIndex>,
    ) -> RenderView {
        debug_assert!(
            !camera.is_dirty(),
            "camera matrices must be refreshed before culling"
        );

        // One frustum per frame, shared by every test below
        let frustum = Frustum::from_view_projection(&camera.view_projection_matrix());

        let visible = match scene_index {
            Some(idx) => {
                let mut results = Vec::new();
                idx.query_frustum(&frustum, &mut results);
                results.retain(|key| Self::renderable_is_visible(scene, *key));

                // ALWAYS_VISIBLE renderables bypass the index query
                let mut seen: FxHashSet<RenderableKey> = results.iter().copied().collect();
                for &key in scene.always_visible() {
                    if Self::renderable_is_visible(scene, key) && seen.insert(key) {
                        results.push(key);
                    }
                }
                results
            }
            None => scene
                .renderables()
                .filter_map(|(key, renderable)| {
                    if !renderable.is_visible() {
                        return None;
                    }
                    if renderable.flags().contains(RenderableFlags::ALWAYS_VISIBLE)
                        || renderable.world_bounds().intersects_frustum(&frustum)
                    {
                        Some(key)
                    } else {
                        None
                    }
                })
                .collect(),
        };

        RenderView::new(camera.clone(), visible)
    }
}

// ===== DEPTH-SORTED CULLER =====

/// A visible renderable keyed by its view-space depth, radix-sortable.
#[derive(Clone, Copy)]
struct DepthKeyedRenderable {
    depth_bits: u32,
    key: RenderableKey,
}

impl RadixKey for DepthKeyedRenderable {
    const LEVELS: usize = 4;

    #[inline]
    fn get_level(&self, level: usize) -> u8 {
        (self.depth_bits >> (level * 8)) as u8
    }
}

/// Map an f32 depth to a u32 that sorts in the same order.
///
/// Flips the sign bit for positives and all bits for negatives, the
/// standard order-preserving IEEE-754 trick.
#[inline]
fn depth_sort_bits(depth: f32) -> u32 {
    let bits = depth.to_bits();
    if bits & 0x8000_0000 != 0 {
        !bits
    } else {
        bits ^ 0x8000_0000
    }
}

/// Frustum culler with front-to-back output ordering.
///
/// Culls exactly like [`FrustumCuller`], then radix-sorts the survivors
/// by view-space depth of their world-bounds center (nearest first).
/// Useful for draw-order optimization (early-z) and prioritized updates.
pub struct DepthSortedCuller {
    inner: FrustumCuller,
}

impl DepthSortedCuller {
    pub fn new() -> Self {
        Self {
            inner: FrustumCuller::new(),
        }
    }
}

impl CameraCuller for DepthSortedCuller {
    fn cull(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        scene_index: Option<&dyn SceneIndex>,
    ) -> RenderView {
        let view = self.inner.cull(scene, camera, scene_index);
        let view_matrix = *camera.view_matrix();

        let mut keyed: Vec<DepthKeyedRenderable> = view
            .visible_renderables()
            .iter()
            .filter_map(|&key| {
                let renderable = scene.renderable(key)?;
                let center = renderable.world_aabb().center();
                // Right-handed view space looks down -Z: depth = -view_z
                let depth = -view_matrix.transform_point3(center).z;
                Some(DepthKeyedRenderable {
                    depth_bits: depth_sort_bits(depth),
                    key,
                })
            })
            .collect();

        keyed.radix_sort_unstable();

        let sorted: Vec<RenderableKey> = keyed.into_iter().map(|k| k.key).collect();
        RenderView::new(camera.clone(), sorted)
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
