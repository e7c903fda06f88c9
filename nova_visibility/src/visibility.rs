/// Single-object visibility query.
///
/// Answers "is this renderable currently within the camera's visible
/// region?" with a conservative frustum test against the renderable's
/// bounding volume. The frustum is derived fresh on every call — nothing
/// is cached between queries beyond the camera's own matrix cache.
///
/// For whole-scene queries prefer a `CameraCuller`, which shares one
/// camera refresh and one frustum across every renderable in the frame.

use crate::camera::{Camera, Frustum};
use crate::engine_bail;
use crate::error::Result;
use crate::scene::Renderable;

/// Test whether a renderable's bounding volume intersects the camera frustum.
///
/// Runs the camera's single explicit refresh step, derives the
/// view-projection frustum, and tests the renderable's world-space bounds
/// against all six planes. The renderable is reported visible unless its
/// bounds are entirely outside at least one plane; a volume exactly
/// touching a plane counts as visible.
///
/// The refresh only covers the camera itself: any upstream scene-graph
/// state feeding `Camera::parent_matrix` must be current before the call.
/// Repeated calls with unchanged inputs return the same result and leave
/// the cached matrices untouched.
///
/// Renderable flags are ignored here — this is a pure geometric query;
/// flag handling belongs to the cullers.
///
/// # Errors
///
/// - `Error::NonInvertibleTransform` if the camera's world transform is
///   singular (the view matrix cannot be derived).
/// - `Error::InvalidInput` if the renderable's world matrix contains
///   non-finite values.
///
/// An off-screen renderable is NOT an error: it yields `Ok(false)`.
///
/// # Example
///
/// ```
/// use nova_visibility::nova::camera::{Camera, Projection};
/// use nova_visibility::nova::scene::{BoundingSphere, BoundingVolume, Scene};
/// use nova_visibility::nova::is_visible;
/// use nova_visibility::glam::{Mat4, Vec3};
///
/// let mut camera = Camera::new(
///     Projection::perspective(std::f32::consts::FRAC_PI_3, 1.0, 0.1, 100.0)?,
/// );
///
/// let mut scene = Scene::new();
/// let sphere = BoundingVolume::Sphere(BoundingSphere::new(Vec3::ZERO, 1.0)?);
/// let key = scene.create_renderable(sphere, Mat4::from_translation(Vec3::new(0.0, 0.0, -10.0)))?;
///
/// assert!(is_visible(&mut camera, scene.renderable(key).unwrap())?);
/// # Ok::<(), nova_visibility::nova::Error>(())
/// ```
pub fn is_visible(camera: &mut Camera, renderable: &Renderable) -> Result<bool> {
    if !renderable.world_matrix().is_finite() {
        engine_bail!(
            "nova::visibility",
            "renderable world matrix contains non-finite values"
        );
    }

    // One explicit update step; a no-op when the camera is already clean
    camera.update_matrices()?;

    let frustum = Frustum::from_view_projection(&camera.view_projection_matrix());

    Ok(renderable.world_bounds().intersects_frustum(&frustum))
}

#[cfg(test)]
#[path = "visibility_tests.rs"]
mod tests;
