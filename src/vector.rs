use std::ops::{Add, Sub, Mul, Div};
use std::fmt;

#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn len(&self) -> f64 {
        self.len_sq().sqrt()
    }

    pub fn len_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    pub fn dot(&self, vec: Vec3) -> f64 {
        self.x*vec.x + self.y*vec.y + self.z*vec.z
    }

    pub fn cross(&self, vec: Vec3) -> Self {
        Self::new(
            self.y*vec.z - self.z*vec.y,
            self.z*vec.x - self.x*vec.z,
            self.x*vec.y - self.y*vec.x,
        )
    }

    /// Zero vectors come back with non-finite components.
    pub fn normalized(&self) -> Self {
        let len = self.len();
        Self::new(self.x / len, self.y / len, self.z / len)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Self::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Self::new(self.x / other, self.y / other, self.z / other)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(arr: [f64; 3]) -> Vec3 {
        Vec3::new(arr[0], arr[1], arr[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(vec: Vec3) -> [f64; 3] {
        [vec.x, vec.y, vec.z]
    }
}

/// Components use `{:?}` float form, so exponents print as `1e20` / `1e-5`.
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}, {:?}]", self.x, self.y, self.z)
    }
}


#[test]
fn normalized_has_unit_len() {
    let v = Vec3::new(0.0, 10.0, 0.0);
    assert!(v.normalized() == Vec3::new(0.0, 1.0, 0.0));

    let v = Vec3::new(4.0, -3.0, 6.0);
    approx::assert_abs_diff_eq!(v.normalized().len(), 1.0, epsilon = 1e-12);
}

#[test]
fn normalized_zero_is_not_finite() {
    let n = Vec3::zero().normalized();
    assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
}

#[test]
fn display_as_list() {
    let v = Vec3::new(1.0, -0.5, 0.0);
    assert_eq!(v.to_string(), "[1.0, -0.5, 0.0]");
    assert_eq!(Vec3::new(1e20, -1e-5, 2.220446049250313e-16).to_string(), "[1e20, -1e-5, 2.220446049250313e-16]");
}
