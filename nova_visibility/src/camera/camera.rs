/// Camera — explicit transform state with cached matrices.
///
/// The camera owns a local rigid transform (translation + rotation), an
/// opaque parent transform for the upstream scene-graph chain it does not
/// manage, and a validated projection. Derived matrices (world, view,
/// projection) are cached and refreshed by an explicit `update_matrices()`
/// step — nothing is recomputed implicitly on property access.
///
/// Callers are responsible for refreshing any upstream state feeding
/// `parent_matrix` before refreshing the camera itself.

use super::projection::Projection;
use crate::error::{Error, Result};
use glam::{Mat4, Quat, Vec3};

/// Smallest |determinant| accepted when inverting the world transform.
const MIN_WORLD_DETERMINANT: f32 = 1e-8;

/// Camera with an explicit refresh step.
///
/// Setters only record state and mark the cache dirty; call
/// [`Camera::update_matrices`] once per frame (before culling or
/// visibility queries) to rebuild the cached world/view/projection
/// matrices. The refresh is idempotent — with no intervening changes
/// it leaves the cache untouched.
#[derive(Debug, Clone)]
pub struct Camera {
    // Authoritative state
    translation: Vec3,
    rotation: Quat,
    parent_matrix: Mat4,
    projection: Projection,

    // Cached derived matrices, valid when !dirty
    world_matrix: Mat4,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    dirty: bool,
}

impl Camera {
    /// Create a new camera at the origin, looking down -Z, with the given
    /// projection. The matrix cache starts dirty; call `update_matrices()`
    /// before the first query.
    pub fn new(projection: Projection) -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            parent_matrix: Mat4::IDENTITY,
            projection,
            world_matrix: Mat4::IDENTITY,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: projection.matrix(),
            dirty: true,
        }
    }

    // ===== GETTERS =====

    /// Local translation relative to the parent transform.
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Local rotation relative to the parent transform.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Upstream parent transform (identity when the camera is a root).
    pub fn parent_matrix(&self) -> &Mat4 {
        &self.parent_matrix
    }

    /// Projection parameters.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Cached world matrix (parent * local). Valid after `update_matrices()`.
    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// Cached view matrix (inverse of the world matrix). Valid after
    /// `update_matrices()`.
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Cached projection matrix. Valid after `update_matrices()`.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view), from the cache.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// True when a setter has been called since the last successful refresh.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ===== SETTERS — record state, mark the cache dirty =====

    /// Set the local translation.
    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
        self.dirty = true;
    }

    /// Set the local rotation.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
        self.dirty = true;
    }

    /// Set the upstream parent transform.
    ///
    /// The camera does not refresh this matrix itself — callers must pass
    /// an up-to-date parent chain before `update_matrices()`.
    pub fn set_parent_matrix(&mut self, parent_matrix: Mat4) {
        self.parent_matrix = parent_matrix;
        self.dirty = true;
    }

    /// Set the projection.
    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
        self.dirty = true;
    }

    /// Orient the camera (at its current translation) to look at `target`.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let view = Mat4::look_at_rh(self.translation, target, up);
        self.rotation = Quat::from_mat4(&view.inverse());
        self.dirty = true;
    }

    // ===== REFRESH =====

    /// Rebuild the cached world/view/projection matrices.
    ///
    /// This is the single explicit update step: world = parent * local,
    /// view = world⁻¹, projection from the stored parameters. A no-op
    /// when nothing changed since the last successful refresh, so calling
    /// it once per frame (or once per query) costs nothing extra.
    ///
    /// # Errors
    ///
    /// Returns `Error::NonInvertibleTransform` if the composed world
    /// transform is singular (e.g. a zero-scale parent) — the view matrix
    /// cannot be derived. The cache keeps its previous contents and stays
    /// dirty.
    pub fn update_matrices(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let local = Mat4::from_rotation_translation(self.rotation, self.translation);
        let world = self.parent_matrix * local;

        if !world.is_finite() {
            return Err(Error::NonInvertibleTransform(
                "world transform contains non-finite values".to_string(),
            ));
        }

        let det = world.determinant();
        if det.abs() < MIN_WORLD_DETERMINANT {
            return Err(Error::NonInvertibleTransform(format!(
                "world transform is singular (determinant {})",
                det
            )));
        }

        self.world_matrix = world;
        self.view_matrix = world.inverse();
        self.projection_matrix = self.projection.matrix();
        self.dirty = false;

        Ok(())
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
