use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::error::{reciprocal, MathError};
use crate::vector::Vector3D;

/// 3x3 matrix with double precision entries.
///
/// The matrix is stored as three column vectors. Entries are addressed in
/// column-major order: `entry(row, col)` is `column(col)[row]`.
///
/// ```text
/// [ m(0,0) m(0,1) m(0,2) ]
/// [ m(1,0) m(1,1) m(1,2) ]   with columns  c0 = m[0], c1 = m[1], c2 = m[2]
/// [ m(2,0) m(2,1) m(2,2) ]
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3D {
    cols: [Vector3D; 3],
}

impl Matrix3D {
    /// Matrix with all entries equal to zero.
    pub const ZERO: Self = Self::new(Vector3D::ZERO, Vector3D::ZERO, Vector3D::ZERO);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::new(Vector3D::X, Vector3D::Y, Vector3D::Z);

    /// Create a new matrix from its three column vectors.
    #[inline]
    pub const fn new(col0: Vector3D, col1: Vector3D, col2: Vector3D) -> Self {
        Self {
            cols: [col0, col1, col2],
        }
    }

    /// Create a new matrix from a column-major array.
    #[inline]
    pub const fn from_cols_array(arr: &[f64; 9]) -> Self {
        Self::new(
            Vector3D::new(arr[0], arr[1], arr[2]),
            Vector3D::new(arr[3], arr[4], arr[5]),
            Vector3D::new(arr[6], arr[7], arr[8]),
        )
    }

    /// Convert the matrix to a column-major array.
    pub fn to_cols_array(&self) -> [f64; 9] {
        let [c0, c1, c2] = self.cols;
        [
            c0.x(),
            c0.y(),
            c0.z(),
            c1.x(),
            c1.y(),
            c1.z(),
            c2.x(),
            c2.y(),
            c2.z(),
        ]
    }

    /// Get the column vector at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 2.
    #[inline]
    pub fn column(&self, index: usize) -> Vector3D {
        self[index]
    }

    /// Get the entry at `row` and `col`, equal to `column(col)[row]`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 2.
    #[inline]
    pub fn entry(&self, row: usize, col: usize) -> f64 {
        self[col][row]
    }

    /// Get the entry at `row` and `col`, or `None` if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cols.get(col).and_then(|c| c.get(row))
    }

    /// Apply `f` to every column, producing a new matrix.
    #[inline]
    fn map_cols(&self, f: impl Fn(Vector3D) -> Vector3D) -> Self {
        let [c0, c1, c2] = self.cols;
        Self::new(f(c0), f(c1), f(c2))
    }

    /// Apply `f` to every pair of corresponding columns, producing a new matrix.
    #[inline]
    fn zip_cols(&self, rhs: &Self, f: impl Fn(Vector3D, Vector3D) -> Vector3D) -> Self {
        Self::new(
            f(self.cols[0], rhs.cols[0]),
            f(self.cols[1], rhs.cols[1]),
            f(self.cols[2], rhs.cols[2]),
        )
    }

    /// Column-wise negation.
    pub fn negate(&self) -> Self {
        self.map_cols(Vector3D::negate)
    }

    /// Difference of two matrices, computed as `self + (-rhs)`.
    pub fn subtract(&self, rhs: &Self) -> Self {
        *self + rhs.negate()
    }

    /// Multiply every entry by the scalar `s`.
    pub fn scale(&self, s: f64) -> Self {
        self.map_cols(|c| c.scale(s))
    }

    /// Divide the matrix by the scalar `s`, computed as `self * (1 / s)`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivideByZero`] if `s` is exactly zero.
    pub fn divide(&self, s: f64) -> Result<Self, MathError> {
        Ok(self.scale(reciprocal(s)?))
    }

    /// Matrix-vector product.
    ///
    /// The result is `column(0) * v.x + column(1) * v.y + column(2) * v.z`, i.e. `v`
    /// read as coordinates in the basis formed by the columns.
    pub fn mul_vec(&self, v: Vector3D) -> Vector3D {
        let [c0, c1, c2] = self.cols;
        c0 * v.x() + c1 * v.y() + c2 * v.z()
    }

    /// Matrix-matrix product.
    ///
    /// Column `c` of the result is `self * rhs.column(c)`, so entry `(r, c)` is the sum
    /// over `k` of `self.entry(r, k) * rhs.entry(k, c)`.
    pub fn mul_mat(&self, rhs: &Self) -> Self {
        rhs.map_cols(|c| self.mul_vec(c))
    }

    /// Swap rows and columns: entry `(r, c)` of the result is `self.entry(c, r)`.
    pub fn transpose(&self) -> Self {
        let [c0, c1, c2] = self.cols;
        Self::new(
            Vector3D::new(c0.x(), c1.x(), c2.x()),
            Vector3D::new(c0.y(), c1.y(), c2.y()),
            Vector3D::new(c0.z(), c1.z(), c2.z()),
        )
    }
}

/// Transpose of `m`.
///
/// Example:
///
/// ```
/// use cns_math::{transpose, Matrix3D};
///
/// let m = Matrix3D::from_cols_array(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
/// let t = transpose(&m);
/// assert_eq!(t.entry(0, 1), m.entry(1, 0));
/// assert_eq!(transpose(&t), m);
/// ```
pub fn transpose(m: &Matrix3D) -> Matrix3D {
    m.transpose()
}

impl Index<usize> for Matrix3D {
    type Output = Vector3D;

    /// Panics if `index` is not 0, 1 or 2.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.cols.get(index) {
            Some(col) => col,
            None => panic!(
                "index out of bounds: Matrix3D has 3 columns but the index is {}",
                index
            ),
        }
    }
}

// Column-wise sum.
impl Add for Matrix3D {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_cols(&rhs, Vector3D::add)
    }
}

impl Sub for Matrix3D {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl Neg for Matrix3D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Mul<f64> for Matrix3D {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Matrix3D> for f64 {
    type Output = Matrix3D;

    #[inline]
    fn mul(self, rhs: Matrix3D) -> Self::Output {
        rhs.scale(self)
    }
}

// Matrix-vector multiplication.
impl Mul<Vector3D> for Matrix3D {
    type Output = Vector3D;

    #[inline]
    fn mul(self, rhs: Vector3D) -> Self::Output {
        self.mul_vec(rhs)
    }
}

// Matrix-matrix multiplication.
impl Mul<Matrix3D> for Matrix3D {
    type Output = Matrix3D;

    #[inline]
    fn mul(self, rhs: Matrix3D) -> Self::Output {
        self.mul_mat(&rhs)
    }
}

impl Div<f64> for Matrix3D {
    type Output = Result<Self, MathError>;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.divide(rhs)
    }
}

impl fmt::Display for Matrix3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c0, c1, c2] = self.cols;
        write!(f, "[{c0}, {c1}, {c2}]")
    }
}

impl From<[Vector3D; 3]> for Matrix3D {
    #[inline]
    fn from(cols: [Vector3D; 3]) -> Self {
        Self { cols }
    }
}

impl From<Matrix3D> for [Vector3D; 3] {
    #[inline]
    fn from(m: Matrix3D) -> Self {
        m.cols
    }
}

// Conversions to and from the glam backend, both column-major.
impl From<glam::DMat3> for Matrix3D {
    #[inline]
    fn from(m: glam::DMat3) -> Self {
        Self::new(m.x_axis.into(), m.y_axis.into(), m.z_axis.into())
    }
}

impl From<Matrix3D> for glam::DMat3 {
    #[inline]
    fn from(m: Matrix3D) -> Self {
        let [c0, c1, c2] = m.cols;
        glam::DMat3::from_cols(c0.into(), c1.into(), c2.into())
    }
}

impl AbsDiffEq for Matrix3D {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix3D {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Matrix3D {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
