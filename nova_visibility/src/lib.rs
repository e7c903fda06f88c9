/*!
# Nova Visibility

Camera-space visibility testing for the Nova rendering stack.

This crate answers one question — "is this object currently within the
camera's view frustum?" — and provides the scene-side plumbing to ask it
efficiently for one object ([`nova::is_visible`]) or for whole scenes
(`CameraCuller` strategies over a `Scene`, optionally accelerated by a
`SceneIndex`).

## Architecture

- **Camera**: explicit transform + projection state with a cached
  world/view matrix pair, refreshed by a single `update_matrices()` step
- **Frustum**: six world-space planes extracted per query from the
  view-projection matrix
- **Scene**: slotmap of Renderables (world transform + bounding volume)
  with change tracking for spatial-index maintenance
- **Cullers**: brute-force, frustum, and depth-sorted batch strategies
- **Updater**: once-per-frame synchronization of camera matrices and
  spatial indexes

Rendering, windowing, and input are out of scope — callers own the render
loop and feed transforms in.
*/

// Internal modules
mod engine;
mod error;
pub mod camera;
pub mod log;
pub mod scene;
pub mod visibility;

// Main nova namespace module
pub mod nova {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logging host)
    pub use crate::engine::Engine;

    // The single-object visibility query
    pub use crate::visibility::is_visible;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
