/// Bounding volumes for visibility tests.
///
/// Renderables carry a local-space bounding volume (box or sphere) as a
/// cheap proxy for their true geometry. Volumes are transformed by the
/// world matrix at query time and tested against the camera frustum.

use crate::camera::Frustum;
use crate::error::{Error, Result};
use glam::{Mat4, Vec3};

// ===== AABB =====

/// Axis-Aligned Bounding Box
///
/// Used for frustum culling. Stored in local space and transformed
/// by the world matrix at culling time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Create a validated AABB.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBounds` if a corner is non-finite or
    /// `min` exceeds `max` on any axis.
    pub fn new(min: Vec3, max: Vec3) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidBounds(
                "AABB corners must be finite".to_string(),
            ));
        }
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return Err(Error::InvalidBounds(format!(
                "AABB min {:?} exceeds max {:?}",
                min, max
            )));
        }

        Ok(Self { min, max })
    }

    /// Create an AABB from a center point and half-extents (per-axis radii).
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Result<Self> {
        if !half_extents.is_finite() || half_extents.min_element() < 0.0 {
            return Err(Error::InvalidBounds(format!(
                "half-extents must be finite and non-negative, got {:?}",
                half_extents
            )));
        }
        Self::new(center - half_extents, center + half_extents)
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Per-axis half-extents of the box.
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Transform this local-space AABB by a matrix, returning a new AABB.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the AABB extents
    /// for an exact (tight) result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        AABB {
            min: new_min,
            max: new_max,
        }
    }

    /// Test if this AABB fully contains another AABB.
    ///
    /// Returns `true` if `other` is entirely within `self`.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x
            && self.max.x >= other.max.x
            && self.min.y <= other.min.y
            && self.max.y >= other.max.y
            && self.min.z <= other.min.z
            && self.max.z >= other.max.z
    }

    /// Test if this AABB intersects (overlaps) another AABB.
    ///
    /// Returns `true` if the two AABBs overlap or touch.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

// ===== BOUNDING SPHERE =====

/// Bounding sphere in local space.
///
/// Cheaper than an AABB for roughly isotropic objects: one transform of
/// the center plus a radius scale per query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Sphere center
    pub center: Vec3,
    /// Sphere radius, >= 0
    pub radius: f32,
}

impl BoundingSphere {
    /// Create a validated bounding sphere.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBounds` if the center is non-finite or the
    /// radius is negative or non-finite.
    pub fn new(center: Vec3, radius: f32) -> Result<Self> {
        if !center.is_finite() || !radius.is_finite() {
            return Err(Error::InvalidBounds(
                "sphere center and radius must be finite".to_string(),
            ));
        }
        if radius < 0.0 {
            return Err(Error::InvalidBounds(format!(
                "sphere radius must be non-negative, got {}",
                radius
            )));
        }

        Ok(Self { center, radius })
    }

    /// Transform this local-space sphere by a matrix, returning a new sphere.
    ///
    /// The center goes through the full transform; the radius is scaled by
    /// the largest axis scale, which stays conservative under non-uniform
    /// scale (the result encloses the true transformed volume).
    pub fn transformed(&self, matrix: &Mat4) -> BoundingSphere {
        let center = matrix.transform_point3(self.center);
        let max_scale = matrix
            .col(0)
            .truncate()
            .length()
            .max(matrix.col(1).truncate().length())
            .max(matrix.col(2).truncate().length());

        BoundingSphere {
            center,
            radius: self.radius * max_scale,
        }
    }

    /// The smallest AABB enclosing this sphere.
    pub fn aabb(&self) -> AABB {
        AABB {
            min: self.center - Vec3::splat(self.radius),
            max: self.center + Vec3::splat(self.radius),
        }
    }
}

// ===== BOUNDING VOLUME =====

/// A renderable's bounding proxy: box or sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingVolume {
    /// Axis-aligned bounding box
    Aabb(AABB),
    /// Bounding sphere
    Sphere(BoundingSphere),
}

impl BoundingVolume {
    /// Transform this local-space volume by a matrix.
    pub fn transformed(&self, matrix: &Mat4) -> BoundingVolume {
        match self {
            Self::Aabb(aabb) => Self::Aabb(aabb.transformed(matrix)),
            Self::Sphere(sphere) => Self::Sphere(sphere.transformed(matrix)),
        }
    }

    /// The smallest AABB enclosing this volume (used by spatial indexes).
    pub fn aabb(&self) -> AABB {
        match self {
            Self::Aabb(aabb) => *aabb,
            Self::Sphere(sphere) => sphere.aabb(),
        }
    }

    /// Conservative frustum intersection test for this volume.
    ///
    /// Returns `true` unless the volume is provably outside at least one
    /// frustum plane. A volume exactly touching a plane is included.
    pub fn intersects_frustum(&self, frustum: &Frustum) -> bool {
        match self {
            Self::Aabb(aabb) => frustum.intersects_aabb(aabb),
            Self::Sphere(sphere) => frustum.intersects_sphere(sphere),
        }
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
