use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::error::{reciprocal, MathError};

/// 3D vector with double precision components.
///
/// The components are fixed at construction. Every operation returns a new
/// vector. Equality compares the components exactly, without tolerance; use the
/// [`approx`] traits to compare within a tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3D {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3D {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector along the x axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector along the y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector along the z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new vector from its x, y and z components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a vector from an array `[x, y, z]`.
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert the vector to an array `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Get the x component.
    #[inline]
    pub const fn x(self) -> f64 {
        self.x
    }

    /// Get the y component.
    #[inline]
    pub const fn y(self) -> f64 {
        self.y
    }

    /// Get the z component.
    #[inline]
    pub const fn z(self) -> f64 {
        self.z
    }

    /// Get the component at `index` (0 for x, 1 for y, 2 for z), or `None` if out of range.
    #[inline]
    pub const fn get(self, index: usize) -> Option<f64> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    /// Component-wise negation.
    #[inline]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Difference of two vectors, computed as `self + (-rhs)`.
    #[inline]
    pub fn subtract(self, rhs: Self) -> Self {
        self + rhs.negate()
    }

    /// Multiply every component by the scalar `s`.
    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// Divide the vector by the scalar `s`, computed as `self * (1 / s)`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivideByZero`] if `s` is exactly zero.
    #[inline]
    pub fn divide(self, s: f64) -> Result<Self, MathError> {
        Ok(self.scale(reciprocal(s)?))
    }

    /// Dot product between two vectors.
    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Euclidean length of the vector. Returns `0.0` for the zero vector.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Scale the vector to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivideByZero`] if the vector is the zero vector.
    #[inline]
    pub fn normalize(self) -> Result<Self, MathError> {
        self.divide(self.magnitude())
    }
}

/// Dot product of `a` and `b`: `a.x * b.x + a.y * b.y + a.z * b.z`.
pub fn dot(a: &Vector3D, b: &Vector3D) -> f64 {
    a.dot(*b)
}

/// Euclidean length of `v`.
pub fn magnitude(v: &Vector3D) -> f64 {
    v.magnitude()
}

/// Unit vector with the direction of `v`.
///
/// # Errors
///
/// Returns [`MathError::DivideByZero`] if `v` is the zero vector.
///
/// Example:
///
/// ```
/// use cns_math::{normalize, MathError, Vector3D};
///
/// let v = normalize(&Vector3D::new(0.0, 3.0, 0.0))?;
/// assert_eq!(v, Vector3D::Y);
/// assert_eq!(normalize(&Vector3D::ZERO), Err(MathError::DivideByZero));
/// # Ok::<(), MathError>(())
/// ```
pub fn normalize(v: &Vector3D) -> Result<Vector3D, MathError> {
    v.normalize()
}

impl Index<usize> for Vector3D {
    type Output = f64;

    /// Panics if `index` is not 0, 1 or 2.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!(
                "index out of bounds: Vector3D has 3 components but the index is {}",
                index
            ),
        }
    }
}

// Component-wise sum.
impl Add for Vector3D {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3D {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Neg for Vector3D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Mul<f64> for Vector3D {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    #[inline]
    fn mul(self, rhs: Vector3D) -> Self::Output {
        rhs.scale(self)
    }
}

// Division keeps the zero check, so the operator yields a `Result`.
impl Div<f64> for Vector3D {
    type Output = Result<Self, MathError>;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.divide(rhs)
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Vector3D {
    #[inline]
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vector3D> for [f64; 3] {
    #[inline]
    fn from(v: Vector3D) -> Self {
        v.to_array()
    }
}

// Conversions to and from the glam backend.
impl From<glam::DVec3> for Vector3D {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3D> for glam::DVec3 {
    #[inline]
    fn from(v: Vector3D) -> Self {
        glam::DVec3::new(v.x, v.y, v.z)
    }
}

impl AbsDiffEq for Vector3D {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3D {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3D {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_basic() {
        let v = Vector3D::new(3.0, 1.0, 2.0);
        assert_eq!(v.x(), 3.0);
        assert_eq!(v.y(), 1.0);
        assert_eq!(v.z(), 2.0);

        assert_eq!(v.x(), v[0]);
        assert_eq!(v.y(), v[1]);
        assert_eq!(v.z(), v[2]);
    }

    #[test]
    fn test_vector_get() {
        let v = Vector3D::new(3.0, 1.0, 2.0);
        assert_eq!(v.get(0), Some(3.0));
        assert_eq!(v.get(2), Some(2.0));
        assert_eq!(v.get(3), None);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_vector_index_out_of_bounds() {
        let v = Vector3D::new(3.0, 1.0, 2.0);
        let _ = v[3];
    }

    #[test]
    fn test_vector_array_conversion() {
        let v = Vector3D::from([1.0, 2.0, 3.0]);
        assert_eq!(v, Vector3D::new(1.0, 2.0, 3.0));
        let arr: [f64; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_vector_glam_conversion() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        let glam_v: glam::DVec3 = v.into();
        assert_eq!(glam_v, glam::DVec3::new(1.0, 2.0, 3.0));
        let back: Vector3D = glam_v.into();
        assert_eq!(v, back);
    }

    #[test]
    fn test_vector_scalar_multiplication() {
        let v = Vector3D::new(3.0, 1.0, 2.0);
        assert_eq!(v * 2.0, Vector3D::new(6.0, 2.0, 4.0));
        assert_eq!(3.0 * v, Vector3D::new(9.0, 3.0, 6.0));
        assert_eq!(2.5 * v, v * 2.5);
    }

    #[test]
    fn test_vector_scalar_division() -> Result<(), MathError> {
        let v = Vector3D::new(3.0, 1.0, 2.0);
        assert_eq!((v / 2.0)?, Vector3D::new(1.5, 0.5, 1.0));
        assert_eq!(v.divide(4.0)?, v * 0.25);
        Ok(())
    }

    #[test]
    fn test_vector_division_by_zero() {
        let v = Vector3D::new(3.0, 1.0, 2.0);
        assert_eq!(v / 0.0, Err(MathError::DivideByZero));
        assert_eq!(v / -0.0, Err(MathError::DivideByZero));
        assert_eq!(Vector3D::ZERO.divide(0.0), Err(MathError::DivideByZero));
    }

    #[test]
    fn test_vector_negation() {
        let v = Vector3D::new(3.0, -1.0, 2.0);
        let n = -v;
        assert_eq!(n.x(), -v.x());
        assert_eq!(n.y(), -v.y());
        assert_eq!(n.z(), -v.z());
        assert_eq!(-n, v);
    }

    #[test]
    fn test_vector_addition_and_subtraction() {
        let v1 = Vector3D::new(3.0, 1.0, 2.0);
        let v2 = Vector3D::new(5.0, 2.0, 4.0);

        assert_eq!(v1 + v2, Vector3D::new(8.0, 3.0, 6.0));
        assert_eq!(v1 + v2, v2 + v1);

        assert_eq!(v1 - v2, Vector3D::new(-2.0, -1.0, -2.0));
        assert_ne!(v1 - v2, v2 - v1);
        assert_eq!(v1 - v2, v1 + (-v2));
    }

    #[test]
    fn test_vector_magnitude() {
        let v = Vector3D::new(3.0, 1.0, 2.0);
        assert_eq!(magnitude(&v), 14.0_f64.sqrt());
        assert_eq!(magnitude(&Vector3D::ZERO), 0.0);
    }

    #[test]
    fn test_vector_normalize() -> Result<(), MathError> {
        let v = Vector3D::new(3.0, 1.0, 2.0);
        let n = normalize(&v)?;
        assert_relative_eq!(magnitude(&n), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n * magnitude(&v), v, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_vector_normalize_zero() {
        assert_eq!(normalize(&Vector3D::ZERO), Err(MathError::DivideByZero));
    }

    #[test]
    fn test_vector_dot() {
        let a = Vector3D::new(1.0, 2.0, 4.0);
        let b = Vector3D::new(-3.0, 7.0, -2.0);
        assert_eq!(dot(&a, &b), 3.0);
        assert_eq!(dot(&a, &b), dot(&b, &a));
        assert_eq!(dot(&Vector3D::X, &Vector3D::Y), 0.0);
    }

    #[test]
    fn test_vector_non_finite_passthrough() -> Result<(), MathError> {
        let v = Vector3D::new(f64::INFINITY, f64::NAN, 1.0);
        let scaled = v * 2.0;
        assert_eq!(scaled.x(), f64::INFINITY);
        assert!(scaled.y().is_nan());
        assert!(magnitude(&v).is_nan());
        assert!((v / f64::NAN)?.z().is_nan());
        Ok(())
    }

    #[test]
    fn test_vector_display() {
        let v = Vector3D::new(1.0, -2.5, 3.0);
        assert_eq!(v.to_string(), "(1, -2.5, 3)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_vector_serde() -> Result<(), serde_json::Error> {
        let v = Vector3D::new(1.0, -2.5, 3.0);
        let json = serde_json::to_string(&v)?;
        assert_eq!(json, r#"{"x":1.0,"y":-2.5,"z":3.0}"#);
        assert_eq!(serde_json::from_str::<Vector3D>(&json)?, v);
        Ok(())
    }
}
