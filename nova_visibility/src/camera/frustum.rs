/// Frustum — six clipping planes for visibility culling.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing normal
/// - D is the signed distance
/// - A point P is inside the frustum if dot(plane, P_homogeneous) >= 0 for all planes
///
/// A frustum is an ephemeral value: derived fresh from a view-projection
/// matrix each frame, never cached across transform changes.

use crate::scene::{BoundingSphere, AABB};
use glam::{Mat4, Vec3, Vec4};

/// Result of a 3-way frustum/AABB classification.
///
/// Used by spatial acceleration structures (GridSceneIndex) for
/// efficient culling:
/// - `Outside` → skip the entire cell
/// - `Inside` → collect all objects without further testing
/// - `Partial` → test individual objects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// AABB is entirely outside the frustum
    Outside,
    /// AABB is entirely inside the frustum
    Inside,
    /// AABB partially overlaps the frustum
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes for culling.
///
/// Each plane is (A, B, C, D) where Ax + By + Cz + D = 0.
/// Normal (A, B, C) points inward (toward the visible volume).
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method, adjusted for zero-to-one clip
    /// depth (glam's `*_rh` projections): the near plane is row 2 alone,
    /// not row 3 + row 2. Each plane is normalized so that (A, B, C) is
    /// a unit vector, which makes plane.dot() a true signed distance.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let r0 = vp.row(0);
        let r1 = vp.row(1);
        let r2 = vp.row(2);
        let r3 = vp.row(3);

        let mut planes = [
            r3 + r0, // left
            r3 - r0, // right
            r3 + r1, // bottom
            r3 - r1, // top
            r2,      // near (0..1 depth: z_clip >= 0)
            r3 - r2, // far
        ];

        // Normalize each plane
        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Signed distance from a plane to a point (positive = inside half-space).
    #[inline]
    fn plane_distance(plane: &Vec4, point: Vec3) -> f32 {
        plane.truncate().dot(point) + plane.w
    }

    /// Test if a point is inside the frustum (on-plane counts as inside).
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| Self::plane_distance(plane, point) >= 0.0)
    }

    /// Test if an AABB intersects this frustum.
    ///
    /// Uses the "positive vertex" test: for each plane, find the AABB corner
    /// most in the direction of the plane normal. If that corner is outside,
    /// the AABB is fully outside.
    ///
    /// Returns `true` if the AABB is (potentially) inside or intersecting.
    /// An AABB exactly touching a plane (zero signed distance) is included.
    /// May return false positives (conservative), never false negatives.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        for plane in &self.planes {
            let normal = plane.truncate();

            // Corner of the AABB most aligned with the plane normal
            let p_vertex = Vec3::new(
                if normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
                if normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
                if normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
            );

            if Self::plane_distance(plane, p_vertex) < 0.0 {
                return false;
            }
        }

        true
    }

    /// Test if a bounding sphere intersects this frustum.
    ///
    /// The sphere is outside only when its center is farther than `radius`
    /// behind some plane. A sphere exactly tangent to a plane is included.
    /// Conservative like the AABB test: false positives possible near
    /// frustum corners, never false negatives.
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        for plane in &self.planes {
            if Self::plane_distance(plane, sphere.center) < -sphere.radius {
                return false;
            }
        }

        true
    }

    /// Classify an AABB against the frustum (3-way test).
    ///
    /// Tests both the positive vertex (p-vertex) and negative vertex (n-vertex)
    /// against each plane:
    /// - If the p-vertex is outside any plane → `Outside` (early out)
    /// - If the n-vertex is outside any plane → at least `Partial`
    /// - If all n-vertices are inside all planes → `Inside`
    ///
    /// Used by GridSceneIndex to skip or bulk-accept whole cells.
    pub fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            let normal = plane.truncate();

            let p_vertex = Vec3::new(
                if normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
                if normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
                if normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
            );

            if Self::plane_distance(plane, p_vertex) < 0.0 {
                return FrustumTest::Outside;
            }

            // Corner least aligned with the normal
            let n_vertex = Vec3::new(
                if normal.x >= 0.0 { aabb.min.x } else { aabb.max.x },
                if normal.y >= 0.0 { aabb.min.y } else { aabb.max.y },
                if normal.z >= 0.0 { aabb.min.z } else { aabb.max.z },
            );

            if Self::plane_distance(plane, n_vertex) < 0.0 {
                all_inside = false;
            }
        }

        if all_inside {
            FrustumTest::Inside
        } else {
            FrustumTest::Partial
        }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
