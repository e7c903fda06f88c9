//! Scene management module
//!
//! Provides the scene container, renderable culling proxies, bounding
//! volumes, and per-frame strategies (culling, updating, spatial
//! indexing).

mod bounds;
mod culler;
mod grid_scene_index;
mod renderable;
mod scene;
mod scene_index;
mod updater;

pub use bounds::{BoundingSphere, BoundingVolume, AABB};
pub use culler::{BruteForceCuller, CameraCuller, DepthSortedCuller, FrustumCuller};
pub use grid_scene_index::GridSceneIndex;
pub use renderable::{Renderable, RenderableFlags, RenderableKey};
pub use scene::Scene;
pub use scene_index::SceneIndex;
pub use updater::{DefaultUpdater, NoOpUpdater, Updater};
