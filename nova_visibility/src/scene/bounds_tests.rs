use super::*;
use crate::camera::Frustum;
use crate::error::Error;
use glam::{Mat4, Quat, Vec3};

// ============================================================================
// AABB validation
// ============================================================================

#[test]
fn test_aabb_new_valid() {
    let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0)).unwrap();
    assert_eq!(aabb.min, Vec3::splat(-1.0));
    assert_eq!(aabb.max, Vec3::splat(1.0));
}

#[test]
fn test_aabb_new_rejects_inverted_corners() {
    let result = AABB::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 1.0, 1.0));
    assert!(matches!(result, Err(Error::InvalidBounds(_))));
}

#[test]
fn test_aabb_new_rejects_non_finite() {
    let result = AABB::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE);
    assert!(matches!(result, Err(Error::InvalidBounds(_))));
}

#[test]
fn test_aabb_from_center_half_extents() {
    let aabb = AABB::from_center_half_extents(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(0.5)).unwrap();
    assert_eq!(aabb.min, Vec3::new(0.5, 1.5, 2.5));
    assert_eq!(aabb.max, Vec3::new(1.5, 2.5, 3.5));

    assert!(AABB::from_center_half_extents(Vec3::ZERO, Vec3::new(-1.0, 0.0, 0.0)).is_err());
}

#[test]
fn test_aabb_center_and_half_extents() {
    let aabb = AABB::new(Vec3::new(0.0, -2.0, 4.0), Vec3::new(2.0, 2.0, 6.0)).unwrap();
    assert_eq!(aabb.center(), Vec3::new(1.0, 0.0, 5.0));
    assert_eq!(aabb.half_extents(), Vec3::new(1.0, 2.0, 1.0));
}

// ============================================================================
// AABB::transformed
// ============================================================================

#[test]
fn test_aabb_transformed_by_translation() {
    let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0)).unwrap();
    let result = aabb.transformed(&Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)));

    assert_eq!(result.min, Vec3::new(9.0, -1.0, -1.0));
    assert_eq!(result.max, Vec3::new(11.0, 1.0, 1.0));
}

#[test]
fn test_aabb_transformed_matches_corner_transform() {
    // The Arvo method must produce the same box as transforming all
    // 8 corners and taking the min/max.
    let aabb = AABB::new(Vec3::new(-1.0, -2.0, -0.5), Vec3::new(2.0, 0.5, 1.0)).unwrap();
    let matrix = Mat4::from_scale_rotation_translation(
        Vec3::new(2.0, 1.0, 0.5),
        Quat::from_euler(glam::EulerRot::XYZ, 0.3, 0.7, -0.2),
        Vec3::new(5.0, -3.0, 1.0),
    );

    let result = aabb.transformed(&matrix);

    let mut expected_min = Vec3::splat(f32::INFINITY);
    let mut expected_max = Vec3::splat(f32::NEG_INFINITY);
    for ix in [aabb.min.x, aabb.max.x] {
        for iy in [aabb.min.y, aabb.max.y] {
            for iz in [aabb.min.z, aabb.max.z] {
                let corner = matrix.transform_point3(Vec3::new(ix, iy, iz));
                expected_min = expected_min.min(corner);
                expected_max = expected_max.max(corner);
            }
        }
    }

    assert!((result.min - expected_min).length() < 1e-4);
    assert!((result.max - expected_max).length() < 1e-4);
}

// ============================================================================
// AABB::contains / intersects
// ============================================================================

#[test]
fn test_aabb_contains() {
    let outer = AABB::new(Vec3::splat(-2.0), Vec3::splat(2.0)).unwrap();
    let inner = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0)).unwrap();

    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));
    // Touching edges still counts as contained
    assert!(outer.contains(&outer));
}

#[test]
fn test_aabb_intersects() {
    let a = AABB::new(Vec3::splat(0.0), Vec3::splat(2.0)).unwrap();
    let b = AABB::new(Vec3::splat(1.0), Vec3::splat(3.0)).unwrap();
    let c = AABB::new(Vec3::splat(5.0), Vec3::splat(6.0)).unwrap();
    let touching = AABB::new(Vec3::splat(2.0), Vec3::splat(3.0)).unwrap();

    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    assert!(!a.intersects(&c));
    assert!(a.intersects(&touching));
}

// ============================================================================
// BoundingSphere
// ============================================================================

#[test]
fn test_sphere_new_valid() {
    let sphere = BoundingSphere::new(Vec3::ONE, 2.0).unwrap();
    assert_eq!(sphere.center, Vec3::ONE);
    assert_eq!(sphere.radius, 2.0);
}

#[test]
fn test_sphere_new_rejects_negative_radius() {
    assert!(matches!(
        BoundingSphere::new(Vec3::ZERO, -1.0),
        Err(Error::InvalidBounds(_))
    ));
}

#[test]
fn test_sphere_new_rejects_non_finite() {
    assert!(BoundingSphere::new(Vec3::new(f32::INFINITY, 0.0, 0.0), 1.0).is_err());
    assert!(BoundingSphere::new(Vec3::ZERO, f32::NAN).is_err());
}

#[test]
fn test_sphere_transformed_by_translation() {
    let sphere = BoundingSphere::new(Vec3::ZERO, 1.0).unwrap();
    let result = sphere.transformed(&Mat4::from_translation(Vec3::new(0.0, 5.0, 0.0)));

    assert_eq!(result.center, Vec3::new(0.0, 5.0, 0.0));
    assert_eq!(result.radius, 1.0);
}

#[test]
fn test_sphere_transformed_scales_radius_by_largest_axis() {
    let sphere = BoundingSphere::new(Vec3::ZERO, 2.0).unwrap();
    let result = sphere.transformed(&Mat4::from_scale(Vec3::new(1.0, 3.0, 2.0)));

    assert!((result.radius - 6.0).abs() < 1e-5);
}

#[test]
fn test_sphere_transformed_rotation_preserves_radius() {
    let sphere = BoundingSphere::new(Vec3::X, 1.5).unwrap();
    let result = sphere.transformed(&Mat4::from_quat(Quat::from_rotation_z(
        std::f32::consts::FRAC_PI_2,
    )));

    assert!((result.radius - 1.5).abs() < 1e-5);
    assert!((result.center - Vec3::Y).length() < 1e-5);
}

#[test]
fn test_sphere_aabb() {
    let sphere = BoundingSphere::new(Vec3::new(1.0, 2.0, 3.0), 2.0).unwrap();
    let aabb = sphere.aabb();

    assert_eq!(aabb.min, Vec3::new(-1.0, 0.0, 1.0));
    assert_eq!(aabb.max, Vec3::new(3.0, 4.0, 5.0));
}

// ============================================================================
// BoundingVolume
// ============================================================================

#[test]
fn test_volume_transformed_dispatch() {
    let matrix = Mat4::from_translation(Vec3::X);

    let aabb_volume = BoundingVolume::Aabb(AABB::new(Vec3::ZERO, Vec3::ONE).unwrap());
    match aabb_volume.transformed(&matrix) {
        BoundingVolume::Aabb(aabb) => assert_eq!(aabb.min, Vec3::X),
        other => panic!("expected Aabb, got {:?}", other),
    }

    let sphere_volume = BoundingVolume::Sphere(BoundingSphere::new(Vec3::ZERO, 1.0).unwrap());
    match sphere_volume.transformed(&matrix) {
        BoundingVolume::Sphere(sphere) => assert_eq!(sphere.center, Vec3::X),
        other => panic!("expected Sphere, got {:?}", other),
    }
}

#[test]
fn test_volume_enclosing_aabb() {
    let sphere_volume = BoundingVolume::Sphere(BoundingSphere::new(Vec3::ZERO, 1.0).unwrap());
    let aabb = sphere_volume.aabb();

    assert_eq!(aabb.min, Vec3::splat(-1.0));
    assert_eq!(aabb.max, Vec3::splat(1.0));
}

#[test]
fn test_volume_intersects_frustum_dispatch() {
    // Identity VP → x,y in [-1, 1], z in [0, 1]
    let frustum = Frustum::from_view_projection(&Mat4::IDENTITY);

    let inside =
        BoundingVolume::Sphere(BoundingSphere::new(Vec3::new(0.0, 0.0, 0.5), 0.1).unwrap());
    let outside = BoundingVolume::Aabb(
        AABB::new(Vec3::new(5.0, 5.0, 0.2), Vec3::new(6.0, 6.0, 0.8)).unwrap(),
    );

    assert!(inside.intersects_frustum(&frustum));
    assert!(!outside.intersects_frustum(&frustum));
}
