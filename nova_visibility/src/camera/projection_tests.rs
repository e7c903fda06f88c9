use super::*;
use crate::error::Error;
use glam::Mat4;

// ============================================================================
// Perspective validation
// ============================================================================

#[test]
fn test_perspective_valid() {
    let proj = Projection::perspective(std::f32::consts::FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0);
    assert!(proj.is_ok());
}

#[test]
fn test_perspective_rejects_non_positive_near() {
    assert!(matches!(
        Projection::perspective(1.0, 1.0, 0.0, 100.0),
        Err(Error::InvalidProjection(_))
    ));
    assert!(matches!(
        Projection::perspective(1.0, 1.0, -0.1, 100.0),
        Err(Error::InvalidProjection(_))
    ));
}

#[test]
fn test_perspective_rejects_far_not_beyond_near() {
    assert!(matches!(
        Projection::perspective(1.0, 1.0, 10.0, 10.0),
        Err(Error::InvalidProjection(_))
    ));
    assert!(matches!(
        Projection::perspective(1.0, 1.0, 10.0, 1.0),
        Err(Error::InvalidProjection(_))
    ));
}

#[test]
fn test_perspective_rejects_bad_fov() {
    assert!(matches!(
        Projection::perspective(0.0, 1.0, 0.1, 100.0),
        Err(Error::InvalidProjection(_))
    ));
    assert!(matches!(
        Projection::perspective(std::f32::consts::PI, 1.0, 0.1, 100.0),
        Err(Error::InvalidProjection(_))
    ));
}

#[test]
fn test_perspective_rejects_bad_aspect() {
    assert!(matches!(
        Projection::perspective(1.0, 0.0, 0.1, 100.0),
        Err(Error::InvalidProjection(_))
    ));
    assert!(matches!(
        Projection::perspective(1.0, -1.0, 0.1, 100.0),
        Err(Error::InvalidProjection(_))
    ));
}

#[test]
fn test_perspective_rejects_non_finite() {
    assert!(matches!(
        Projection::perspective(f32::NAN, 1.0, 0.1, 100.0),
        Err(Error::InvalidProjection(_))
    ));
    assert!(matches!(
        Projection::perspective(1.0, 1.0, 0.1, f32::INFINITY),
        Err(Error::InvalidProjection(_))
    ));
}

// ============================================================================
// Orthographic validation
// ============================================================================

#[test]
fn test_orthographic_valid() {
    let proj = Projection::orthographic(-10.0, 10.0, -10.0, 10.0, 0.1, 100.0);
    assert!(proj.is_ok());
}

#[test]
fn test_orthographic_rejects_degenerate_extent() {
    assert!(matches!(
        Projection::orthographic(10.0, -10.0, -10.0, 10.0, 0.1, 100.0),
        Err(Error::InvalidProjection(_))
    ));
    assert!(matches!(
        Projection::orthographic(-10.0, 10.0, 10.0, 10.0, 0.1, 100.0),
        Err(Error::InvalidProjection(_))
    ));
    assert!(matches!(
        Projection::orthographic(-10.0, 10.0, -10.0, 10.0, 100.0, 0.1),
        Err(Error::InvalidProjection(_))
    ));
}

// ============================================================================
// Matrix construction
// ============================================================================

#[test]
fn test_perspective_matrix_matches_glam() {
    let fov_y = std::f32::consts::FRAC_PI_4;
    let proj = Projection::perspective(fov_y, 16.0 / 9.0, 0.1, 100.0).unwrap();

    let expected = Mat4::perspective_rh(fov_y, 16.0 / 9.0, 0.1, 100.0);
    assert_eq!(proj.matrix(), expected);
}

#[test]
fn test_orthographic_matrix_matches_glam() {
    let proj = Projection::orthographic(-5.0, 5.0, -3.0, 3.0, 0.1, 50.0).unwrap();

    let expected = Mat4::orthographic_rh(-5.0, 5.0, -3.0, 3.0, 0.1, 50.0);
    assert_eq!(proj.matrix(), expected);
}

#[test]
fn test_projection_copy_and_equality() {
    let a = Projection::perspective(1.0, 1.0, 0.1, 100.0).unwrap();
    let b = a;
    assert_eq!(a, b);
}
