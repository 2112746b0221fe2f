use std::ops::Mul;
use std::fmt;

use crate::error::{QuatError, QuatResult};
use crate::vector::Vec3;

/// A quaternion `r + i·î + j·ĵ + k·k̂` in double precision.
///
/// Every operation returns a fresh value; nothing mutates `self`.
#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub struct Quaternion {
    pub r: f64,
    pub i: f64,
    pub j: f64,
    pub k: f64,
}
impl Quaternion {
    pub fn new(r: f64, i: f64, j: f64, k: f64) -> Self {
        Self { r, i, j, k }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Embeds a vector as a quaternion with zero scalar part.
    pub fn pure(v: Vec3) -> Self {
        Self::new(0.0, v.x, v.y, v.z)
    }

    /// Half-angle rotation quaternion `(cos θ/2, sin θ/2 · axis)`.
    ///
    /// The axis is used as given. It is only a unit quaternion when `axis`
    /// has unit length.
    pub fn from_axis_angle(axis: Vec3, theta: f64) -> Self {
        let s = (theta / 2.0).sin();
        Self::new((theta / 2.0).cos(), s * axis.x, s * axis.y, s * axis.z)
    }

    pub fn scalar(&self) -> f64 {
        self.r
    }

    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.i, self.j, self.k)
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.r, -self.i, -self.j, -self.k)
    }

    pub fn norm_sq(&self) -> f64 {
        self.r*self.r + self.i*self.i + self.j*self.j + self.k*self.k
    }

    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Hamilton product `self · other`. Not commutative.
    pub fn multiply(&self, other: &Quaternion) -> Self {
        let (q1, q2) = (self, other);
        let r = q1.r*q2.r - q1.i*q2.i - q1.j*q2.j - q1.k*q2.k;
        let i = q1.r*q2.i + q1.i*q2.r + q1.j*q2.k - q1.k*q2.j;
        let j = q1.r*q2.j - q1.i*q2.k + q1.j*q2.r + q1.k*q2.i;
        let k = q1.r*q2.k + q1.i*q2.j - q1.j*q2.i + q1.k*q2.r;
        Self::new(r, i, j, k)
    }

    /// Scales to norm 1. A zero quaternion yields non-finite components;
    /// see [`Quaternion::try_unit`] for the checked form.
    pub fn unit(&self) -> Self {
        let n = self.norm();
        Self::new(self.r / n, self.i / n, self.j / n, self.k / n)
    }

    /// Multiplicative inverse `q* / |q|²`. A zero quaternion yields
    /// non-finite components; see [`Quaternion::try_reciprocal`].
    pub fn reciprocal(&self) -> Self {
        let c = self.conjugate();
        let nsq = self.norm_sq();
        Self::new(c.r / nsq, c.i / nsq, c.j / nsq, c.k / nsq)
    }

    /// Conjugation of `self` by `q`, i.e. `q · self · q⁻¹`.
    ///
    /// With a unit `q` built by [`Quaternion::from_axis_angle`] this rotates
    /// the vector part of `self` about the axis of `q`.
    pub fn conjugation_by(&self, q: &Quaternion) -> Self {
        let recipq = q.reciprocal();
        q.multiply(self).multiply(&recipq)
    }

    pub fn try_unit(&self) -> QuatResult<Self> {
        if self.norm_sq() == 0.0 {
            log::warn!("refusing to normalize zero-norm quaternion");
            return Err(QuatError::ZeroNorm);
        }
        Ok(self.unit())
    }

    pub fn try_reciprocal(&self) -> QuatResult<Self> {
        if self.norm_sq() == 0.0 {
            log::warn!("refusing to invert zero-norm quaternion");
            return Err(QuatError::ZeroNorm);
        }
        Ok(self.reciprocal())
    }

    pub fn try_conjugation_by(&self, q: &Quaternion) -> QuatResult<Self> {
        let recipq = q.try_reciprocal()?;
        Ok(q.multiply(self).multiply(&recipq))
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.multiply(&other)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(arr: [f64; 4]) -> Quaternion {
        Quaternion::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> [f64; 4] {
        [q.r, q.i, q.j, q.k]
    }
}

impl From<Quaternion> for cgmath::Quaternion<f64> {
    fn from(q: Quaternion) -> cgmath::Quaternion<f64> {
        cgmath::Quaternion::new(q.r, q.i, q.j, q.k)
    }
}

impl From<cgmath::Quaternion<f64>> for Quaternion {
    fn from(q: cgmath::Quaternion<f64>) -> Quaternion {
        Quaternion::new(q.s, q.v.x, q.v.y, q.v.z)
    }
}

/// Components use `{:?}` float form, so exponents print as `1e20` / `1e-5`.
impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}i + {:?}j + {:?}k", self.r, self.i, self.j, self.k)
    }
}


#[cfg(test)]
fn samples() -> Vec<Quaternion> {
    vec![
        Quaternion::new(1.0, 2.0, 3.0, 4.0),
        Quaternion::new(-0.5, 0.25, 7.0, -3.0),
        Quaternion::new(0.0, 0.0, 0.0, 2.0),
        Quaternion::new(1e-3, -1e3, 42.0, 0.1),
    ]
}

#[test]
fn conjugate_is_involution() {
    for q in samples() {
        assert!(q.conjugate().conjugate() == q);
    }
    assert!(Quaternion::new(1.0, 2.0, -3.0, 4.0).conjugate() == Quaternion::new(1.0, -2.0, 3.0, -4.0));
}

#[test]
fn norm_is_non_negative() {
    assert!(Quaternion::default().norm() == 0.0);
    for q in samples() {
        assert!(q.norm() > 0.0);
    }
    assert!(Quaternion::new(1.0, 2.0, 3.0, 4.0).norm() == 30f64.sqrt());
}

#[test]
fn multiply_by_identity() {
    let id = Quaternion::identity();
    for q in samples() {
        assert!(q.multiply(&id) == q);
        assert!(id.multiply(&q) == q);
    }
}

#[test]
fn multiply_is_not_commutative() {
    let q1 = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    let q2 = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    assert!(q1.multiply(&q2) == Quaternion::new(0.0, 0.0, 0.0, 1.0));
    assert!(q2.multiply(&q1) == Quaternion::new(0.0, 0.0, 0.0, -1.0));

    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
    assert!(a * b == Quaternion::new(-60.0, 12.0, 30.0, 24.0));
    assert!(b * a == Quaternion::new(-60.0, 20.0, 14.0, 32.0));
}

#[test]
fn multiply_is_associative() {
    let qs = samples();
    let (a, b, c) = (qs[0], qs[1], qs[3]);
    let lhs = (a * b) * c;
    let rhs = a * (b * c);
    for (l, r) in <[f64; 4]>::from(lhs).iter().zip(<[f64; 4]>::from(rhs).iter()) {
        approx::assert_relative_eq!(*l, *r, max_relative = 1e-12);
    }
}

#[test]
fn multiply_matches_cgmath() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(-5.0, 6.0, 0.5, 8.0);
    let expected = cgmath::Quaternion::from(a) * cgmath::Quaternion::from(b);
    assert!(a * b == Quaternion::from(expected));
}

#[test]
fn unit_has_norm_one() {
    for q in samples() {
        approx::assert_abs_diff_eq!(q.unit().norm(), 1.0, epsilon = 1e-9);
    }
    let u = Quaternion::new(1.0, 2.0, 3.0, 4.0).unit();
    approx::assert_abs_diff_eq!(u.r, 0.18257418583505536, epsilon = 1e-15);
    approx::assert_abs_diff_eq!(u.k, 0.7302967433402214, epsilon = 1e-15);
}

#[test]
fn reciprocal_inverts() {
    for q in samples() {
        for p in [q * q.reciprocal(), q.reciprocal() * q] {
            approx::assert_abs_diff_eq!(p.r, 1.0, epsilon = 1e-9);
            approx::assert_abs_diff_eq!(p.i, 0.0, epsilon = 1e-9);
            approx::assert_abs_diff_eq!(p.j, 0.0, epsilon = 1e-9);
            approx::assert_abs_diff_eq!(p.k, 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn zero_norm_is_not_finite() {
    let zero = Quaternion::default();
    let u = zero.unit();
    let r = zero.reciprocal();
    assert!(u.r.is_nan() && u.i.is_nan());
    assert!(!r.r.is_finite() && !r.k.is_finite());
    assert!(!Quaternion::pure(Vec3::new(1.0, 0.0, 0.0)).conjugation_by(&zero).i.is_finite());
}

#[test]
fn checked_variants_reject_zero_norm() {
    let zero = Quaternion::default();
    assert_eq!(zero.try_unit(), Err(QuatError::ZeroNorm));
    assert_eq!(zero.try_reciprocal(), Err(QuatError::ZeroNorm));
    assert_eq!(Quaternion::identity().try_conjugation_by(&zero), Err(QuatError::ZeroNorm));

    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q.try_unit(), Ok(q.unit()));
    assert_eq!(q.try_reciprocal(), Ok(q.reciprocal()));
}

#[test]
fn conjugation_by_quarter_turn() {
    let q = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), std::f64::consts::FRAC_PI_2);
    let v = Quaternion::pure(Vec3::new(1.0, 0.0, 0.0)).conjugation_by(&q);
    approx::assert_abs_diff_eq!(v.r, 0.0, epsilon = 1e-12);
    approx::assert_abs_diff_eq!(v.i, 0.0, epsilon = 1e-12);
    approx::assert_abs_diff_eq!(v.j, 1.0, epsilon = 1e-12);
    approx::assert_abs_diff_eq!(v.k, 0.0, epsilon = 1e-12);
}

#[test]
fn display_format() {
    let q = Quaternion::new(1.0, -2.5, 0.0, 4.0);
    assert_eq!(q.to_string(), "1.0 + -2.5i + 0.0j + 4.0k");

    let q = Quaternion::new(1e20, 1e-5, -0.0, 2.5e-16);
    assert_eq!(q.to_string(), "1e20 + 1e-5i + -0.0j + 2.5e-16k");
}
