/// Projection — validated parameters for a camera projection.
///
/// Stores the high-level parameters (FOV, aspect, clip planes or
/// orthographic extents) and builds the 4x4 projection matrix on demand.
/// Constructors validate their inputs so a stored Projection always
/// produces a well-formed matrix.

use crate::error::{Error, Result};
use glam::Mat4;

/// Camera projection parameters.
///
/// Right-handed, zero-to-one clip depth (glam's `*_rh` constructors).
/// Built via the validating constructors [`Projection::perspective`]
/// and [`Projection::orthographic`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection (truncated pyramid frustum)
    Perspective {
        /// Vertical field of view in radians, in (0, PI)
        fov_y: f32,
        /// Viewport width / height, > 0
        aspect: f32,
        /// Near clip plane distance, > 0
        z_near: f32,
        /// Far clip plane distance, > z_near
        z_far: f32,
    },
    /// Orthographic projection (box frustum)
    Orthographic {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    },
}

impl Projection {
    /// Create a validated perspective projection.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProjection` if any parameter is non-finite,
    /// `fov_y` is outside (0, PI), `aspect` is not positive, `z_near` is
    /// not positive, or `z_far` does not exceed `z_near`.
    pub fn perspective(fov_y: f32, aspect: f32, z_near: f32, z_far: f32) -> Result<Self> {
        if !fov_y.is_finite() || !aspect.is_finite() || !z_near.is_finite() || !z_far.is_finite() {
            return Err(Error::InvalidProjection(
                "perspective parameters must be finite".to_string(),
            ));
        }
        if fov_y <= 0.0 || fov_y >= std::f32::consts::PI {
            return Err(Error::InvalidProjection(format!(
                "fov_y must be in (0, PI), got {}",
                fov_y
            )));
        }
        if aspect <= 0.0 {
            return Err(Error::InvalidProjection(format!(
                "aspect must be positive, got {}",
                aspect
            )));
        }
        if z_near <= 0.0 {
            return Err(Error::InvalidProjection(format!(
                "z_near must be positive, got {}",
                z_near
            )));
        }
        if z_far <= z_near {
            return Err(Error::InvalidProjection(format!(
                "z_far ({}) must exceed z_near ({})",
                z_far, z_near
            )));
        }

        Ok(Self::Perspective {
            fov_y,
            aspect,
            z_near,
            z_far,
        })
    }

    /// Create a validated orthographic projection.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProjection` if any parameter is non-finite
    /// or an extent is degenerate (left >= right, bottom >= top,
    /// z_near >= z_far).
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Result<Self> {
        let params = [left, right, bottom, top, z_near, z_far];
        if params.iter().any(|p| !p.is_finite()) {
            return Err(Error::InvalidProjection(
                "orthographic parameters must be finite".to_string(),
            ));
        }
        if left >= right || bottom >= top {
            return Err(Error::InvalidProjection(format!(
                "degenerate orthographic extent: [{}, {}] x [{}, {}]",
                left, right, bottom, top
            )));
        }
        if z_near >= z_far {
            return Err(Error::InvalidProjection(format!(
                "z_far ({}) must exceed z_near ({})",
                z_far, z_near
            )));
        }

        Ok(Self::Orthographic {
            left,
            right,
            bottom,
            top,
            z_near,
            z_far,
        })
    }

    /// Build the projection matrix.
    pub fn matrix(&self) -> Mat4 {
        match *self {
            Self::Perspective {
                fov_y,
                aspect,
                z_near,
                z_far,
            } => Mat4::perspective_rh(fov_y, aspect, z_near, z_far),
            Self::Orthographic {
                left,
                right,
                bottom,
                top,
                z_near,
                z_far,
            } => Mat4::orthographic_rh(left, right, bottom, top, z_near, z_far),
        }
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
