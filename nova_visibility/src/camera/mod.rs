//! Camera module — camera state, projection, frustum, and render view.
//!
//! The library does NOT store or manage cameras — they are tools
//! provided to the caller, who owns and drives them. Matrix caches are
//! refreshed by an explicit `Camera::update_matrices()` step.

mod camera;
mod frustum;
mod projection;
mod render_view;

pub use camera::Camera;
pub use frustum::{
    Frustum, FrustumTest, PLANE_BOTTOM, PLANE_FAR, PLANE_LEFT, PLANE_NEAR, PLANE_RIGHT, PLANE_TOP,
};
pub use projection::Projection;
pub use render_view::RenderView;
