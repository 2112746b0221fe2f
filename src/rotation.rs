//! Rotating points with the quaternion sandwich product.

use crate::error::{QuatError, QuatResult};
use crate::quaternion::Quaternion;
use crate::vector::Vec3;

/// Rotates `pos` by `theta` radians about `rot_about`.
///
/// `rot_about` must already be a unit vector. It is not normalized here, so a
/// longer or shorter axis changes the half-angle encoded in the rotation
/// quaternion and the point ends up rotated by the wrong angle. Use
/// [`rotate_normalized`] when the axis length is not known.
pub fn rotate(pos: Vec3, rot_about: Vec3, theta: f64) -> Vec3 {
    let posq = Quaternion::pure(pos);
    let cis = Quaternion::from_axis_angle(rot_about, theta);
    posq.conjugation_by(&cis).vector()
}

/// Same map as [`rotate`] without building the two Hamilton products.
///
/// Expands `q p q⁻¹` for a pure `p` and `q = (s, v)`:
/// `((s² - v·v) p + 2 (v·p) v + 2 s (v×p)) / |q|²`.
/// Agrees with [`rotate`] up to rounding, including for non-unit axes.
pub fn rotate_fast(pos: Vec3, rot_about: Vec3, theta: f64) -> Vec3 {
    let cis = Quaternion::from_axis_angle(rot_about, theta);
    let (s, v) = (cis.scalar(), cis.vector());
    let vv = v.dot(v);
    let rotated = pos * (s*s - vv) + v * (2.0 * v.dot(pos)) + v.cross(pos) * (2.0 * s);
    rotated / (s*s + vv)
}

/// Like [`rotate`], but scales `rot_about` to unit length first.
pub fn rotate_normalized(pos: Vec3, rot_about: Vec3, theta: f64) -> QuatResult<Vec3> {
    if rot_about.len_sq() == 0.0 {
        log::warn!("rotation axis {rot_about} has zero length");
        return Err(QuatError::ZeroAxis);
    }
    let axis = rot_about.normalized();
    log::debug!("normalized rotation axis {rot_about} to {axis}");
    Ok(rotate(pos, axis, theta))
}


#[cfg(test)]
use std::f64::consts::PI;

#[cfg(test)]
fn assert_vec_eq(a: Vec3, b: Vec3) {
    approx::assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-9);
}

#[test]
fn rotate_about_y() {
    let v = rotate([1.0, 1.0, 1.0].into(), [0.0, 1.0, 0.0].into(), PI / 3.0);
    assert_vec_eq(v, Vec3::new(1.3660254037844388, 1.0, -0.3660254037844384));
}

#[test]
fn rotate_keeps_non_unit_axis() {
    let v = rotate([1.0, 1.0, 1.0].into(), [0.0, 10.0, 0.0].into(), PI / 3.0);
    assert_vec_eq(v, Vec3::new(-0.6054270276565286, 0.9999999999999999, -1.2780681179745392));
}

#[test]
fn rotate_normalized_fixes_axis() {
    let pos = Vec3::new(1.0, 1.0, 1.0);
    let v = rotate_normalized(pos, Vec3::new(0.0, 10.0, 0.0), PI / 3.0);
    assert_vec_eq(v.unwrap(), rotate(pos, Vec3::new(0.0, 1.0, 0.0), PI / 3.0));
}

#[test]
fn rotate_normalized_rejects_zero_axis() {
    let v = rotate_normalized(Vec3::new(1.0, 2.0, 3.0), Vec3::zero(), 1.0);
    assert_eq!(v, Err(QuatError::ZeroAxis));
}

#[test]
fn rotate_fast_agrees_with_sandwich() {
    let pos = Vec3::new(-3.0, 0.5, 2.0);
    for axis in [Vec3::new(0.0, 0.6, 0.8), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 10.0, 0.0), Vec3::new(2.0, -1.0, 0.5)] {
        for theta in [0.0, 0.4, PI / 3.0, -2.5, 2.0 * PI] {
            assert_vec_eq(rotate_fast(pos, axis, theta), rotate(pos, axis, theta));
        }
    }
}

#[test]
fn rotate_fast_reference_values() {
    let pos = Vec3::new(1.0, 1.0, 1.0);
    assert_vec_eq(
        rotate_fast(pos, Vec3::new(0.0, 1.0, 0.0), PI / 3.0),
        Vec3::new(1.3660254037844388, 1.0, -0.3660254037844384),
    );
    assert_vec_eq(
        rotate_fast(pos, Vec3::new(0.0, 10.0, 0.0), PI / 3.0),
        Vec3::new(-0.6054270276565286, 0.9999999999999999, -1.2780681179745392),
    );
}

#[test]
fn rotate_quarter_turn_about_z() {
    let v = rotate(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0), PI / 2.0);
    assert_vec_eq(v, Vec3::new(0.0, 1.0, 0.0));
}
