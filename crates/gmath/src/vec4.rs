//! 4-lane float vector.
//!
//! [`Vec4`] is the unit every other type in the crate is built from:
//! [`Mat4`](crate::Mat4) is four of them and [`Quat`](crate::Quat) shares
//! the same lane layout. All arithmetic goes through the active
//! [`Lanes`](crate::lanes::Lanes) strategy.
//!
//! # Views
//!
//! The four floats live in one flat array. Named accessors are views into
//! it, never separate storage:
//!
//! ```text
//! [ x | y | z | w ]      x() y() z() w()
//! [ r | g | b | a ]      r() g() b() a()
//! [   xyz     | w ]      xyz(), rgb()
//! [ xy  |  zw     ]      xy(), zw()
//!   [ yz  ]              yz()
//! ```
//!
//! # Normalization
//!
//! Three policies, none of which fail:
//!
//! - [`Vec4::normalize`] - zero vector when the length is exactly zero
//! - [`Vec4::safe_normalize`] - zero vector when the length is below a tolerance
//! - [`Vec4::fast_normalize`] - reciprocal square root estimate, no zero check

use crate::lanes::{Active, Lane4, Lanes};
use crate::{scalar, Error, Vec2, Vec3};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// Default tolerance for [`Vec4::safe_normalize`] and friends.
pub const SAFE_NORMALIZE_TOLERANCE: f32 = 0.001;

/// A 4-component float vector, 16-byte aligned.
///
/// # Example
///
/// ```rust
/// use gmath::{Vec3, Vec4};
///
/// let v = Vec4::from_xyz_w(Vec3::new(1.0, 2.0, 3.0), 1.0);
/// assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(v[3], 1.0);
/// assert_eq!(v * 2.0, Vec4::new(2.0, 4.0, 6.0, 2.0));
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C, align(16))]
pub struct Vec4(Lane4);

impl Vec4 {
    /// (0, 0, 0, 0)
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// (1, 1, 1, 1)
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// +X direction.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// +Y direction.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// -X direction.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0, 0.0);
    /// -Y direction.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0, 0.0);
    /// -Z direction.
    pub const FORWARD: Self = Self::new(0.0, 0.0, -1.0, 0.0);
    /// +Z direction.
    pub const BACKWARD: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// Opaque cyan.
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);
    /// Opaque purple.
    pub const PURPLE: Self = Self::new(1.0, 0.0, 1.0, 1.0);
    /// Transparent black, all zeros.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    /// Creates a vector with all four lanes set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self([v; 4])
    }

    /// Creates from a [`Vec3`] and a `w`.
    #[inline]
    pub const fn from_xyz_w(xyz: Vec3, w: f32) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self(a)
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        self.0
    }

    /// Borrows the flat lane array.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 4] {
        &self.0
    }

    /// X component.
    #[inline]
    pub const fn x(self) -> f32 {
        self.0[0]
    }

    /// Y component.
    #[inline]
    pub const fn y(self) -> f32 {
        self.0[1]
    }

    /// Z component.
    #[inline]
    pub const fn z(self) -> f32 {
        self.0[2]
    }

    /// W component.
    #[inline]
    pub const fn w(self) -> f32 {
        self.0[3]
    }

    /// Red channel, alias of `x`.
    #[inline]
    pub const fn r(self) -> f32 {
        self.0[0]
    }

    /// Green channel, alias of `y`.
    #[inline]
    pub const fn g(self) -> f32 {
        self.0[1]
    }

    /// Blue channel, alias of `z`.
    #[inline]
    pub const fn b(self) -> f32 {
        self.0[2]
    }

    /// Alpha channel, alias of `w`.
    #[inline]
    pub const fn a(self) -> f32 {
        self.0[3]
    }

    /// First three lanes.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.0[0], self.0[1], self.0[2])
    }

    /// First three lanes as a color, alias of [`xyz`](Self::xyz).
    #[inline]
    pub const fn rgb(self) -> Vec3 {
        self.xyz()
    }

    /// Lanes 0 and 1.
    #[inline]
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.0[0], self.0[1])
    }

    /// Lanes 1 and 2.
    #[inline]
    pub const fn yz(self) -> Vec2 {
        Vec2::new(self.0[1], self.0[2])
    }

    /// Lanes 2 and 3.
    #[inline]
    pub const fn zw(self) -> Vec2 {
        Vec2::new(self.0[2], self.0[3])
    }

    /// Overwrites the first three lanes, leaving `w`.
    #[inline]
    pub fn set_xyz(&mut self, xyz: Vec3) {
        self.0[0] = xyz.x;
        self.0[1] = xyz.y;
        self.0[2] = xyz.z;
    }

    /// Overwrites `w`.
    #[inline]
    pub fn set_w(&mut self, w: f32) {
        self.0[3] = w;
    }

    /// Dot product, a horizontal lane reduction on the lane-parallel strategy.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        Active::dot(self.0, other.0)
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length.
    #[inline]
    pub fn length(self) -> f32 {
        scalar::sqrt(self.length_squared())
    }

    /// Unit vector, or [`Vec4::ZERO`] when the length is exactly zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath::Vec4;
    ///
    /// assert_eq!(Vec4::new(0.0, 0.0, 3.0, 4.0).normalize(), Vec4::new(0.0, 0.0, 0.6, 0.8));
    /// assert_eq!(Vec4::ZERO.normalize(), Vec4::ZERO);
    /// ```
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 { Self::ZERO } else { self / len }
    }

    /// Unit vector, or [`Vec4::ZERO`] when the length is below `tolerance`.
    ///
    /// [`SAFE_NORMALIZE_TOLERANCE`] is the customary tolerance.
    #[inline]
    pub fn safe_normalize(self, tolerance: f32) -> Self {
        let len = self.length();
        if len < tolerance { Self::ZERO } else { self / len }
    }

    /// Approximate unit vector: `v * rsqrt(dot(v, v))`.
    ///
    /// For hot paths that tolerate reduced accuracy. There is no zero check;
    /// a zero vector yields non-finite lanes.
    #[inline]
    pub fn fast_normalize(self) -> Self {
        self * scalar::rsqrt(self.dot(self))
    }

    /// Rescales the vector so its length lies in [min, max].
    ///
    /// Vectors already within the range are returned unchanged.
    #[inline]
    pub fn clamp_length(self, min: f32, max: f32) -> Self {
        let len = self.length();
        if len < min || len > max {
            self.normalize() * scalar::clamp(len, min, max)
        } else {
            self
        }
    }

    /// Returns true if all lanes are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.0[i]
    }
}

// Vec4 + Vec4
impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(Active::add(self.0, rhs.0))
    }
}

// Vec4 - Vec4
impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(Active::sub(self.0, rhs.0))
    }
}

// Vec4 * Vec4 (lanewise)
impl Mul for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(Active::mul(self.0, rhs.0))
    }
}

// Vec4 / Vec4 (lanewise)
impl Div for Vec4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(Active::div(self.0, rhs.0))
    }
}

// Vec4 + f32
impl Add<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f32) -> Self {
        Self(Active::add(self.0, [rhs; 4]))
    }
}

// f32 + Vec4
impl Add<Vec4> for f32 {
    type Output = Vec4;

    #[inline]
    fn add(self, rhs: Vec4) -> Vec4 {
        Vec4(Active::add([self; 4], rhs.0))
    }
}

// Vec4 - f32
impl Sub<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f32) -> Self {
        Self(Active::sub(self.0, [rhs; 4]))
    }
}

// f32 - Vec4
impl Sub<Vec4> for f32 {
    type Output = Vec4;

    #[inline]
    fn sub(self, rhs: Vec4) -> Vec4 {
        Vec4(Active::sub([self; 4], rhs.0))
    }
}

// Vec4 * f32
impl Mul<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self(Active::mul(self.0, [rhs; 4]))
    }
}

// f32 * Vec4
impl Mul<Vec4> for f32 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        Vec4(Active::mul([self; 4], rhs.0))
    }
}

// Vec4 / f32
impl Div<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self(Active::div(self.0, [rhs; 4]))
    }
}

// f32 / Vec4
impl Div<Vec4> for f32 {
    type Output = Vec4;

    #[inline]
    fn div(self, rhs: Vec4) -> Vec4 {
        Vec4(Active::div([self; 4], rhs.0))
    }
}

impl Neg for Vec4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(Active::neg(self.0))
    }
}

impl AddAssign for Vec4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl AddAssign<f32> for Vec4 {
    #[inline]
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + rhs;
    }
}

impl SubAssign<f32> for Vec4 {
    #[inline]
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec4 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self(a)
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> [f32; 4] {
        v.0
    }
}

impl TryFrom<&[f32]> for Vec4 {
    type Error = Error;

    fn try_from(s: &[f32]) -> Result<Self, Error> {
        let a: [f32; 4] = s.try_into().map_err(|_| Error::SliceLength {
            expected: 4,
            actual: s.len(),
        })?;
        Ok(Self(a))
    }
}

impl fmt::Debug for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vec4")
            .field(&self.0[0])
            .field(&self.0[1])
            .field(&self.0[2])
            .field(&self.0[3])
            .finish()
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4_views_partition() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.rgb(), v.xyz());
        assert_eq!((v.r(), v.g(), v.b(), v.a()), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.xy(), Vec2::new(1.0, 2.0));
        assert_eq!(v.yz(), Vec2::new(2.0, 3.0));
        assert_eq!(v.zw(), Vec2::new(3.0, 4.0));
        assert_eq!(v.to_array(), [v.x(), v.y(), v.z(), v.w()]);
    }

    #[test]
    fn test_vec4_setters() {
        let mut v = Vec4::ONE;
        v.set_xyz(Vec3::new(5.0, 6.0, 7.0));
        v.set_w(8.0);
        assert_eq!(v, Vec4::new(5.0, 6.0, 7.0, 8.0));
        v[0] = 0.0;
        assert_eq!(v.x(), 0.0);
    }

    #[test]
    fn test_vec4_ops() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(2.0, 4.0, 6.0, 8.0);
        assert_eq!(a + b, Vec4::new(3.0, 6.0, 9.0, 12.0));
        assert_eq!(b - a, a);
        assert_eq!(a * b, Vec4::new(2.0, 8.0, 18.0, 32.0));
        assert_eq!(b / a, Vec4::splat(2.0));
        assert_eq!(-a, Vec4::new(-1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn test_vec4_scalar_broadcast() {
        let a = Vec4::new(1.0, 2.0, 4.0, 8.0);
        assert_eq!(a + 1.0, Vec4::new(2.0, 3.0, 5.0, 9.0));
        assert_eq!(1.0 + a, a + 1.0);
        assert_eq!(a - 1.0, Vec4::new(0.0, 1.0, 3.0, 7.0));
        assert_eq!(1.0 - a, Vec4::new(0.0, -1.0, -3.0, -7.0));
        assert_eq!(a * 0.5, Vec4::new(0.5, 1.0, 2.0, 4.0));
        assert_eq!(0.5 * a, a * 0.5);
        assert_eq!(a / 2.0, Vec4::new(0.5, 1.0, 2.0, 4.0));
        assert_eq!(8.0 / a, Vec4::new(8.0, 4.0, 2.0, 1.0));
    }

    #[test]
    fn test_vec4_compound_assign() {
        let mut v = Vec4::ONE;
        v += Vec4::new(1.0, 2.0, 3.0, 4.0);
        v -= Vec4::ONE;
        v *= 2.0;
        v /= 4.0;
        v += 1.0;
        v -= 0.5;
        assert_eq!(v, Vec4::new(1.0, 1.5, 2.0, 2.5));
    }

    #[test]
    fn test_vec4_dot_length() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a.dot(Vec4::ONE), 10.0);
        assert_eq!(a.length_squared(), 30.0);
        assert_eq!(Vec4::new(2.0, 0.0, 0.0, 0.0).length(), 2.0);
    }

    #[test]
    fn test_vec4_normalize() {
        let n = Vec4::new(1.0, 2.0, 3.0, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert_eq!(Vec4::ZERO.normalize(), Vec4::ZERO);
    }

    #[test]
    fn test_vec4_safe_normalize() {
        let tiny = Vec4::splat(1e-4);
        assert_eq!(tiny.safe_normalize(SAFE_NORMALIZE_TOLERANCE), Vec4::ZERO);
        // Exact-zero policy still normalizes it
        assert!((tiny.normalize().length() - 1.0).abs() < 1e-5);
        let n = Vec4::new(0.0, 5.0, 0.0, 0.0).safe_normalize(SAFE_NORMALIZE_TOLERANCE);
        assert_eq!(n, Vec4::UP);
    }

    #[test]
    fn test_vec4_fast_normalize() {
        let n = Vec4::new(3.0, -1.0, 2.0, 0.5).fast_normalize();
        assert!((n.length() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_vec4_clamp_length() {
        let v = Vec4::new(0.0, 0.0, 0.0, 10.0);
        assert_eq!(v.clamp_length(0.0, 2.0), Vec4::new(0.0, 0.0, 0.0, 2.0));
        assert_eq!(v.clamp_length(20.0, 30.0), Vec4::new(0.0, 0.0, 0.0, 20.0));
        assert_eq!(v.clamp_length(5.0, 15.0), v);
    }

    #[test]
    fn test_vec4_try_from_slice() {
        let data = [1.0_f32, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(Vec4::try_from(&data[..4]).unwrap(), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            Vec4::try_from(&data[..]).unwrap_err(),
            Error::SliceLength { expected: 4, actual: 5 }
        );
    }

    #[test]
    fn test_vec4_alignment() {
        assert_eq!(std::mem::size_of::<Vec4>(), 16);
        assert_eq!(std::mem::align_of::<Vec4>(), 16);
    }

    #[test]
    fn test_vec4_display() {
        assert_eq!(Vec4::new(1.0, 2.5, -3.0, 0.0).to_string(), "(1, 2.5, -3, 0)");
    }
}
