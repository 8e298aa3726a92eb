//! 4x4 matrix type for transforms.
//!
//! [`Mat4`] holds model, view and projection transforms. The transform
//! constructors (`perspective`, `look_at`, `rotation`, ...) are defined
//! alongside the quaternion conversions in the `transform` module.
//!
//! # Convention
//!
//! Matrices are stored as four **columns** and use **column vectors**.
//! `m[c][r]` is the entry in column `c`, row `r`:
//!
//! ```text
//! | m[0][0] m[1][0] m[2][0] m[3][0] |   | x |
//! | m[0][1] m[1][1] m[2][1] m[3][1] | * | y | = m[0]*x + m[1]*y + m[2]*z + m[3]*w
//! | m[0][2] m[1][2] m[2][2] m[3][2] |   | z |
//! | m[0][3] m[1][3] m[2][3] m[3][3] |   | w |
//! ```
//!
//! Products compose right to left: `(a * b) * v == a * (b * v)`.
//!
//! # Usage
//!
//! ```rust
//! use gmath::{Mat4, Vec3, Vec4};
//!
//! let model = Mat4::translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::scaling(Vec3::splat(2.0));
//! let p = model * Vec4::new(1.0, 1.0, 1.0, 1.0);
//! assert_eq!(p, Vec4::new(3.0, 4.0, 5.0, 1.0));
//! ```

use crate::lanes::{Active, Lanes};
use crate::{Error, Vec4};
use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

/// A column-major 4x4 matrix.
///
/// # Example
///
/// ```rust
/// use gmath::{Mat4, Vec4};
///
/// let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
/// assert_eq!(Mat4::IDENTITY * v, v);
/// assert_eq!(Mat4::IDENTITY[3][3], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Mat4 {
    cols: [Vec4; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self::from_diagonal(0.0);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_diagonal(1.0);

    /// Creates a matrix from four columns.
    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self { cols: [c0, c1, c2, c3] }
    }

    /// Creates a matrix from column arrays, `cols[c][r]`.
    #[inline]
    pub const fn from_cols_array_2d(cols: [[f32; 4]; 4]) -> Self {
        Self::from_cols(
            Vec4::from_array(cols[0]),
            Vec4::from_array(cols[1]),
            Vec4::from_array(cols[2]),
            Vec4::from_array(cols[3]),
        )
    }

    /// Creates a matrix from row arrays, `rows[r][c]`.
    ///
    /// Transposes the input into column storage.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self::from_cols_array_2d([
            [rows[0][0], rows[1][0], rows[2][0], rows[3][0]],
            [rows[0][1], rows[1][1], rows[2][1], rows[3][1]],
            [rows[0][2], rows[1][2], rows[2][2], rows[3][2]],
            [rows[0][3], rows[1][3], rows[2][3], rows[3][3]],
        ])
    }

    /// Creates a matrix from 16 floats in column order.
    ///
    /// # Errors
    ///
    /// [`Error::SliceLength`] unless the slice holds exactly 16 floats.
    pub fn from_cols_slice(s: &[f32]) -> crate::Result<Self> {
        if s.len() != 16 {
            return Err(Error::SliceLength { expected: 16, actual: s.len() });
        }
        let mut cols = [[0.0; 4]; 4];
        for (col, chunk) in cols.iter_mut().zip(s.chunks_exact(4)) {
            col.copy_from_slice(chunk);
        }
        Ok(Self::from_cols_array_2d(cols))
    }

    /// Creates a matrix with `d` on the diagonal and zeros elsewhere.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath::Mat4;
    ///
    /// assert_eq!(Mat4::from_diagonal(1.0), Mat4::IDENTITY);
    /// ```
    #[inline]
    pub const fn from_diagonal(d: f32) -> Self {
        Self::from_cols(
            Vec4::new(d, 0.0, 0.0, 0.0),
            Vec4::new(0.0, d, 0.0, 0.0),
            Vec4::new(0.0, 0.0, d, 0.0),
            Vec4::new(0.0, 0.0, 0.0, d),
        )
    }

    /// Returns column `i`.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        self.cols[i]
    }

    /// Returns row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::new(self.cols[0][i], self.cols[1][i], self.cols[2][i], self.cols[3][i])
    }

    /// Converts to column arrays, `[c][r]`.
    #[inline]
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        [
            self.cols[0].to_array(),
            self.cols[1].to_array(),
            self.cols[2].to_array(),
            self.cols[3].to_array(),
        ]
    }

    /// Flattens to 16 floats in column order, ready for uniform upload.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (chunk, col) in out.chunks_exact_mut(4).zip(self.cols.iter()) {
            chunk.copy_from_slice(col.as_array());
        }
        out
    }

    /// Returns the transpose of this matrix.
    ///
    /// Self-inverse: `m.transpose().transpose() == m`.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    /// Transforms a column vector by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec4) -> Vec4 {
        Vec4::from_array(Active::linear_combine(v.to_array(), &self.to_cols_array_2d()))
    }

    /// Multiplies two matrices: column `i` of the result is `self` applied
    /// to column `i` of `other`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let lhs = self.to_cols_array_2d();
        let combine = |c: &Vec4| Vec4::from_array(Active::linear_combine(c.to_array(), &lhs));
        Self::from_cols(
            combine(&other.cols[0]),
            combine(&other.cols[1]),
            combine(&other.cols[2]),
            combine(&other.cols[3]),
        )
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().all(|c| c.is_finite())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn index(&self, i: usize) -> &Vec4 {
        &self.cols[i]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vec4 {
        &mut self.cols[i]
    }
}

// Mat4 + Mat4
impl Add for Mat4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_cols(
            self.cols[0] + rhs.cols[0],
            self.cols[1] + rhs.cols[1],
            self.cols[2] + rhs.cols[2],
            self.cols[3] + rhs.cols[3],
        )
    }
}

// Mat4 - Mat4
impl Sub for Mat4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(
            self.cols[0] - rhs.cols[0],
            self.cols[1] - rhs.cols[1],
            self.cols[2] - rhs.cols[2],
            self.cols[3] - rhs.cols[3],
        )
    }
}

// Mat4 * f32
impl Mul<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_cols(self.cols[0] * rhs, self.cols[1] * rhs, self.cols[2] * rhs, self.cols[3] * rhs)
    }
}

// f32 * Mat4
impl Mul<Mat4> for f32 {
    type Output = Mat4;

    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        rhs * self
    }
}

// Mat4 / f32
impl Div<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::from_cols(self.cols[0] / rhs, self.cols[1] / rhs, self.cols[2] / rhs, self.cols[3] / rhs)
    }
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    #[inline]
    fn from(cols: [[f32; 4]; 4]) -> Self {
        Self::from_cols_array_2d(cols)
    }
}

impl TryFrom<&[f32]> for Mat4 {
    type Error = Error;

    #[inline]
    fn try_from(s: &[f32]) -> crate::Result<Self> {
        Self::from_cols_slice(s)
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..4 {
            let r = self.row(i);
            writeln!(f, "| {}, {}, {}, {} |", r.x(), r.y(), r.z(), r.w())?;
        }
        Ok(())
    }
}
