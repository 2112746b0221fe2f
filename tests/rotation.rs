use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use quatrot::{rotate, rotate_fast, Quaternion, Vec3};

fn points() -> Vec<Vec3> {
    vec![
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-3.0, 0.5, 2.0),
        Vec3::new(0.0, 0.0, 7.25),
        Vec3::new(1e-4, -2e3, 11.0),
    ]
}

fn axes() -> Vec<Vec3> {
    vec![
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(1.0, 2.0, -2.0) / 3.0,
    ]
}

fn assert_close(a: Vec3, b: Vec3, eps: f64) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = eps);
    assert_abs_diff_eq!(a.y, b.y, epsilon = eps);
    assert_abs_diff_eq!(a.z, b.z, epsilon = eps);
}

#[test]
fn rotation_preserves_length() {
    for pos in points() {
        for axis in axes() {
            for theta in [0.3, PI / 3.0, 2.0, -4.5, 10.0] {
                let v = rotate(pos, axis, theta);
                assert_abs_diff_eq!(v.len(), pos.len(), epsilon = 1e-9 * pos.len().max(1.0));
                assert_close(rotate_fast(pos, axis, theta), v, 1e-9 * pos.len().max(1.0));
            }
        }
    }
}

#[test]
fn zero_angle_is_identity() {
    for pos in points() {
        for axis in axes() {
            assert_close(rotate(pos, axis, 0.0), pos, 1e-12);
        }
    }
}

#[test]
fn full_turn_is_identity() {
    for pos in points() {
        for axis in axes() {
            assert_close(rotate(pos, axis, 2.0 * PI), pos, 1e-9 * pos.len().max(1.0));
        }
    }
}

#[test]
fn point_on_axis_is_fixed() {
    let axis = Vec3::new(1.0, 2.0, -2.0) / 3.0;
    assert_close(rotate(axis * 4.0, axis, 1.234), axis * 4.0, 1e-12);
}

#[test]
fn reference_scenarios() {
    let pos = Vec3::new(1.0, 1.0, 1.0);
    let unit = rotate(pos, Vec3::new(0.0, 1.0, 0.0), PI / 3.0);
    let scaled = rotate(pos, Vec3::new(0.0, 10.0, 0.0), PI / 3.0);

    assert_close(unit, Vec3::new(1.3660254037844388, 1.0, -0.3660254037844384), 1e-9);
    assert_close(scaled, Vec3::new(-0.6054270276565286, 0.9999999999999999, -1.2780681179745392), 1e-9);

    // The non-unit axis is used as given: same length, wrong angle.
    assert!((scaled - unit).len() > 1.0);
    assert_abs_diff_eq!(scaled.len(), pos.len(), epsilon = 1e-9);
}

#[test]
fn rotation_is_deterministic() {
    let a = rotate(Vec3::new(0.3, -1.7, 2.2), Vec3::new(0.0, 0.6, 0.8), 0.77);
    let b = rotate(Vec3::new(0.3, -1.7, 2.2), Vec3::new(0.0, 0.6, 0.8), 0.77);
    assert_eq!(<[f64; 3]>::from(a).map(f64::to_bits), <[f64; 3]>::from(b).map(f64::to_bits));
}

#[test]
fn rotate_matches_explicit_sandwich() {
    let pos = Vec3::new(-3.0, 0.5, 2.0);
    let axis = Vec3::new(0.0, 0.6, 0.8);
    let q = Quaternion::from_axis_angle(axis, 1.1);
    let explicit = q * Quaternion::pure(pos) * q.reciprocal();
    assert!(rotate(pos, axis, 1.1) == explicit.vector());
    assert_abs_diff_eq!(explicit.scalar(), 0.0, epsilon = 1e-12);
}
