use super::*;
use crate::camera::Projection;
use crate::error::Error;
use crate::scene::{BoundingSphere, BoundingVolume, Scene, AABB};
use glam::{Mat4, Quat, Vec3};

/// Camera at the origin looking down -Z: perspective FOV 60°, aspect 1,
/// near 0.1, far 100.
fn reference_camera() -> Camera {
    Camera::new(Projection::perspective(std::f32::consts::FRAC_PI_3, 1.0, 0.1, 100.0).unwrap())
}

fn unit_sphere_at(scene: &mut Scene, position: Vec3) -> crate::scene::RenderableKey {
    let sphere = BoundingVolume::Sphere(BoundingSphere::new(Vec3::ZERO, 1.0).unwrap());
    scene
        .create_renderable(sphere, Mat4::from_translation(position))
        .unwrap()
}

// ============================================================================
// Reference scenario: FOV 60°, aspect 1, near 0.1, far 100
// ============================================================================

#[test]
fn test_sphere_in_front_is_visible() {
    let mut camera = reference_camera();
    let mut scene = Scene::new();
    let key = unit_sphere_at(&mut scene, Vec3::new(0.0, 0.0, -10.0));

    assert!(is_visible(&mut camera, scene.renderable(key).unwrap()).unwrap());
}

#[test]
fn test_sphere_behind_camera_is_not_visible() {
    let mut camera = reference_camera();
    let mut scene = Scene::new();
    let key = unit_sphere_at(&mut scene, Vec3::new(0.0, 0.0, 10.0));

    assert!(!is_visible(&mut camera, scene.renderable(key).unwrap()).unwrap());
}

#[test]
fn test_sphere_beyond_far_plane_is_not_visible() {
    let mut camera = reference_camera();
    let mut scene = Scene::new();
    let key = unit_sphere_at(&mut scene, Vec3::new(0.0, 0.0, -1000.0));

    assert!(!is_visible(&mut camera, scene.renderable(key).unwrap()).unwrap());
}

#[test]
fn test_sphere_before_near_plane_is_not_visible() {
    let mut camera = reference_camera();
    let mut scene = Scene::new();
    // Radius 0.01 sphere between the camera and the near plane at z = -0.1
    let sphere = BoundingVolume::Sphere(BoundingSphere::new(Vec3::ZERO, 0.01).unwrap());
    let key = scene
        .create_renderable(sphere, Mat4::from_translation(Vec3::new(0.0, 0.0, -0.05)))
        .unwrap();

    assert!(!is_visible(&mut camera, scene.renderable(key).unwrap()).unwrap());
}

#[test]
fn test_sphere_outside_side_plane_is_not_visible() {
    let mut camera = reference_camera();
    let mut scene = Scene::new();
    // At z = -10 with 60° FOV the frustum half-width is well under 100
    let key = unit_sphere_at(&mut scene, Vec3::new(100.0, 0.0, -10.0));

    assert!(!is_visible(&mut camera, scene.renderable(key).unwrap()).unwrap());
}

// ============================================================================
// Conservative inclusion
// ============================================================================

#[test]
fn test_box_straddling_side_plane_is_visible() {
    let mut camera = reference_camera();
    let mut scene = Scene::new();

    // Wide box centered on the left frustum plane: partially in, partially out
    let aabb = BoundingVolume::Aabb(
        AABB::new(Vec3::new(-20.0, -1.0, -1.0), Vec3::new(20.0, 1.0, 1.0)).unwrap(),
    );
    let key = scene
        .create_renderable(aabb, Mat4::from_translation(Vec3::new(0.0, 0.0, -10.0)))
        .unwrap();

    assert!(is_visible(&mut camera, scene.renderable(key).unwrap()).unwrap());
}

#[test]
fn test_sphere_tangent_to_plane_is_visible() {
    // Orthographic camera with power-of-two extents keeps the right
    // frustum plane exactly at x = 4
    let mut camera =
        Camera::new(Projection::orthographic(-4.0, 4.0, -4.0, 4.0, 1.0, 17.0).unwrap());
    let mut scene = Scene::new();
    // Center one radius outside the plane: zero effective distance
    let key = unit_sphere_at(&mut scene, Vec3::new(5.0, 0.0, -9.0));

    assert!(is_visible(&mut camera, scene.renderable(key).unwrap()).unwrap());
}

// ============================================================================
// Idempotence and determinism
// ============================================================================

#[test]
fn test_repeated_queries_are_idempotent() {
    let mut camera = reference_camera();
    let mut scene = Scene::new();
    let key = unit_sphere_at(&mut scene, Vec3::new(0.0, 0.0, -10.0));

    let first = is_visible(&mut camera, scene.renderable(key).unwrap()).unwrap();
    let world_after_first = *camera.world_matrix();
    let view_after_first = *camera.view_matrix();

    let second = is_visible(&mut camera, scene.renderable(key).unwrap()).unwrap();

    assert_eq!(first, second);
    assert_eq!(*camera.world_matrix(), world_after_first);
    assert_eq!(*camera.view_matrix(), view_after_first);
}

#[test]
fn test_identical_inputs_are_deterministic() {
    let mut scene = Scene::new();
    let key = unit_sphere_at(&mut scene, Vec3::new(3.0, 2.0, -20.0));

    let mut camera_a = reference_camera();
    camera_a.set_translation(Vec3::new(1.0, 0.0, 0.0));
    camera_a.set_rotation(Quat::from_rotation_y(0.25));

    let mut camera_b = reference_camera();
    camera_b.set_translation(Vec3::new(1.0, 0.0, 0.0));
    camera_b.set_rotation(Quat::from_rotation_y(0.25));

    let a = is_visible(&mut camera_a, scene.renderable(key).unwrap()).unwrap();
    let b = is_visible(&mut camera_b, scene.renderable(key).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_query_tracks_camera_movement() {
    let mut camera = reference_camera();
    let mut scene = Scene::new();
    let key = unit_sphere_at(&mut scene, Vec3::new(0.0, 0.0, -10.0));

    assert!(is_visible(&mut camera, scene.renderable(key).unwrap()).unwrap());

    // Turn the camera around: the object moves behind it
    camera.set_rotation(Quat::from_rotation_y(std::f32::consts::PI));
    assert!(!is_visible(&mut camera, scene.renderable(key).unwrap()).unwrap());
}

// ============================================================================
// Error paths
// ============================================================================

#[test]
fn test_singular_camera_transform_is_an_error() {
    let mut camera = reference_camera();
    camera.set_parent_matrix(Mat4::ZERO);

    let mut scene = Scene::new();
    let key = unit_sphere_at(&mut scene, Vec3::new(0.0, 0.0, -10.0));

    let result = is_visible(&mut camera, scene.renderable(key).unwrap());
    assert!(matches!(result, Err(Error::NonInvertibleTransform(_))));
}

#[test]
fn test_non_finite_renderable_matrix_is_an_error() {
    let mut camera = reference_camera();
    let mut scene = Scene::new();
    let key = unit_sphere_at(&mut scene, Vec3::ZERO);

    // Corrupt the matrix behind the scene's validation
    let mut renderable = *scene.renderable(key).unwrap();
    renderable.set_world_matrix(Mat4::from_translation(Vec3::new(f32::NAN, 0.0, 0.0)));

    let result = is_visible(&mut camera, &renderable);
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

// ============================================================================
// Flags are ignored by the single-object query
// ============================================================================

#[test]
fn test_flags_do_not_affect_geometric_query() {
    let mut camera = reference_camera();
    let mut scene = Scene::new();
    let key = unit_sphere_at(&mut scene, Vec3::new(0.0, 0.0, -10.0));
    scene.set_visible(key, false);

    // Still geometrically visible; flag filtering is the cullers' job
    assert!(is_visible(&mut camera, scene.renderable(key).unwrap()).unwrap());
}
