//! Rotation quaternion.
//!
//! [`Quat`] stores `(x, y, z, w)` in the same flat lane layout as
//! [`Vec4`]: `(x, y, z)` is the vector part and `w` the scalar part.
//! Conversions to and from [`Mat4`](crate::Mat4) live in the `transform`
//! module.
//!
//! # Composition
//!
//! `a * b` is the Hamilton product and means "apply `b`, then `a`", the
//! same order as matrix products:
//!
//! ```rust
//! use gmath::{Mat4, Quat, Vec3};
//! use approx::assert_relative_eq;
//!
//! let a = Quat::from_axis_angle(Vec3::UP, 90.0);
//! let b = Quat::from_axis_angle(Vec3::RIGHT, 30.0);
//! assert_relative_eq!(
//!     Mat4::from_quat(a * b),
//!     Mat4::from_quat(a) * Mat4::from_quat(b),
//!     epsilon = 1e-6
//! );
//! ```
//!
//! # Unit norm
//!
//! The type does not keep itself normalized. Addition, scaling and
//! [`Quat::lerp`]'s raw blend all leave the unit sphere, so call
//! [`Quat::normalize`] before using the result as a rotation.

use crate::lanes::{Active, Lane4, Lanes};
use crate::{scalar, Error, Vec3, Vec4};
use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};
use tracing::debug;

/// Above this cosine, [`Quat::slerp`] falls back to a normalized lerp.
const SLERP_LINEAR_THRESHOLD: f32 = 0.9995;

/// A quaternion `(x, y, z, w)`, 16-byte aligned.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C, align(16))]
pub struct Quat(Lane4);

impl Quat {
    /// All components zero. Not a rotation.
    pub const ZERO: Self = Self::from_xyzw(0.0, 0.0, 0.0, 0.0);

    /// No rotation, `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::from_xyzw(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from its four components.
    ///
    /// The result is not normalized.
    #[inline]
    pub const fn from_xyzw(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    /// Creates a quaternion with all components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self([v; 4])
    }

    /// Creates from a vector part and a scalar part.
    #[inline]
    pub const fn from_xyz_w(xyz: Vec3, w: f32) -> Self {
        Self::from_xyzw(xyz.x, xyz.y, xyz.z, w)
    }

    /// Reinterprets a [`Vec4`] as `(x, y, z, w)`.
    #[inline]
    pub const fn from_vec4(v: Vec4) -> Self {
        Self(v.to_array())
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self(a)
    }

    /// Creates a rotation of `degrees` around `axis`.
    ///
    /// The axis is normalized first. A zero axis yields
    /// `(0, 0, 0, cos(angle / 2))`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath::{Quat, Vec3};
    /// use approx::assert_relative_eq;
    ///
    /// let q = Quat::from_axis_angle(Vec3::UP, 90.0);
    /// assert_relative_eq!(q.rotate(Vec3::FORWARD), Vec3::LEFT, epsilon = 1e-6);
    /// ```
    pub fn from_axis_angle(axis: Vec3, degrees: f32) -> Self {
        let half = scalar::radians(degrees) * 0.5;
        let axis = axis.normalize();
        Self::from_xyz_w(axis * scalar::sin(half), scalar::cos(half))
    }

    /// Checked [`Quat::from_axis_angle`].
    ///
    /// # Errors
    ///
    /// [`Error::ZeroAxis`] when `axis` has zero length.
    pub fn try_from_axis_angle(axis: Vec3, degrees: f32) -> crate::Result<Self> {
        if axis.length_squared() == 0.0 {
            debug!(?axis, degrees, "rejected zero rotation axis");
            return Err(Error::ZeroAxis);
        }
        Ok(Self::from_axis_angle(axis, degrees))
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        self.0
    }

    /// Reinterprets as a [`Vec4`].
    #[inline]
    pub const fn to_vec4(self) -> Vec4 {
        Vec4::from_array(self.0)
    }

    /// X component of the vector part.
    #[inline]
    pub const fn x(self) -> f32 {
        self.0[0]
    }

    /// Y component of the vector part.
    #[inline]
    pub const fn y(self) -> f32 {
        self.0[1]
    }

    /// Z component of the vector part.
    #[inline]
    pub const fn z(self) -> f32 {
        self.0[2]
    }

    /// Scalar part.
    #[inline]
    pub const fn w(self) -> f32 {
        self.0[3]
    }

    /// Vector part.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.0[0], self.0[1], self.0[2])
    }

    /// Four-dimensional dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        Active::dot(self.0, other.0)
    }

    /// Squared norm.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Norm.
    #[inline]
    pub fn length(self) -> f32 {
        scalar::sqrt(self.length_squared())
    }

    /// Unit quaternion, or [`Quat::ZERO`] when the norm is exactly zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 { Self::ZERO } else { self / len }
    }

    /// Returns `(-x, -y, -z, w)`.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::from_xyzw(-self.0[0], -self.0[1], -self.0[2], self.0[3])
    }

    /// Multiplicative inverse, `conjugate / dot(q, q)`.
    ///
    /// Valid for any nonzero quaternion. For unit quaternions it equals
    /// [`Quat::conjugate`].
    #[inline]
    pub fn invert(self) -> Self {
        self.conjugate() / self.dot(self)
    }

    /// Normalized linear blend, `alpha` clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, alpha: f32) -> Self {
        let t = scalar::clamp(alpha, 0.0, 1.0);
        Self(Active::blend(self.0, 1.0 - t, other.0, t)).normalize()
    }

    /// Spherical linear interpolation, `alpha` clamped to `[0, 1]`.
    ///
    /// Takes the shortest arc: when `dot(self, other) < 0`, `other` is
    /// negated first, since `q` and `-q` are the same rotation. Nearly
    /// parallel inputs (including `a == b` and `a == -b`) then take the
    /// [`Quat::lerp`] path so the `1 / sin(angle)` factor never blows up.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath::{Quat, Vec3};
    ///
    /// let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 40.0);
    /// let r = q.slerp(-q, 0.5);
    /// assert!((r.length() - 1.0).abs() < 1e-6);
    /// ```
    pub fn slerp(self, mut other: Self, alpha: f32) -> Self {
        let t = scalar::clamp(alpha, 0.0, 1.0);
        let mut dot = self.dot(other);
        if dot < 0.0 {
            other = -other;
            dot = -dot;
        }
        let cos = scalar::clamp(dot, -1.0, 1.0);
        if cos > SLERP_LINEAR_THRESHOLD {
            return self.lerp(other, t);
        }
        let angle = scalar::acos(cos);
        let inv_sin = 1.0 / scalar::sin(angle);
        let wa = scalar::sin((1.0 - t) * angle) * inv_sin;
        let wb = scalar::sin(t * angle) * inv_sin;
        Self(Active::blend(self.0, wa, other.0, wb))
    }

    /// Rotates a vector by this quaternion, which must be unit length.
    ///
    /// Equivalent to the vector part of `q * (v, 0) * q.conjugate()`.
    #[inline]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let u = self.xyz();
        let t = u.cross(v) * 2.0;
        v + t * self.w() + u.cross(t)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for Quat {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl Add for Quat {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(Active::add(self.0, rhs.0))
    }
}

impl Sub for Quat {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(Active::sub(self.0, rhs.0))
    }
}

// Hamilton product: apply rhs, then self
impl Mul for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(Active::quat_mul(self.0, rhs.0))
    }
}

impl Mul<f32> for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self(Active::mul(self.0, [rhs; 4]))
    }
}

impl Mul<Quat> for f32 {
    type Output = Quat;

    #[inline]
    fn mul(self, rhs: Quat) -> Quat {
        Quat(Active::mul([self; 4], rhs.0))
    }
}

impl Div<f32> for Quat {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self(Active::div(self.0, [rhs; 4]))
    }
}

impl Div<Quat> for f32 {
    type Output = Quat;

    #[inline]
    fn div(self, rhs: Quat) -> Quat {
        Quat(Active::div([self; 4], rhs.0))
    }
}

impl Neg for Quat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(Active::neg(self.0))
    }
}

impl From<Vec4> for Quat {
    #[inline]
    fn from(v: Vec4) -> Self {
        Self::from_vec4(v)
    }
}

impl From<Quat> for Vec4 {
    #[inline]
    fn from(q: Quat) -> Self {
        q.to_vec4()
    }
}

impl From<[f32; 4]> for Quat {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self(a)
    }
}

impl From<Quat> for [f32; 4] {
    #[inline]
    fn from(q: Quat) -> Self {
        q.0
    }
}

impl TryFrom<&[f32]> for Quat {
    type Error = Error;

    fn try_from(s: &[f32]) -> Result<Self, Error> {
        let a: [f32; 4] = s
            .try_into()
            .map_err(|_| Error::SliceLength { expected: 4, actual: s.len() })?;
        Ok(Self(a))
    }
}

impl fmt::Debug for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("x", &self.0[0])
            .field("y", &self.0[1])
            .field("z", &self.0[2])
            .field("w", &self.0[3])
            .finish()
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_is_neutral() {
        let q = Quat::from_xyzw(0.1, -0.2, 0.3, 0.9);
        assert_eq!(Quat::IDENTITY * q, q);
        assert_eq!(q * Quat::IDENTITY, q);
        assert_eq!(Quat::default(), Quat::IDENTITY);
    }

    #[test]
    fn test_hamilton_basis() {
        let i = Quat::from_xyzw(1.0, 0.0, 0.0, 0.0);
        let j = Quat::from_xyzw(0.0, 1.0, 0.0, 0.0);
        let k = Quat::from_xyzw(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, -Quat::IDENTITY);
    }

    #[test]
    fn test_hamilton_formula() {
        let a = Quat::from_xyzw(1.0, 2.0, 3.0, 4.0);
        let b = Quat::from_xyzw(5.0, 6.0, 7.0, 8.0);
        // x = ax*bw + ay*bz - az*by + aw*bx, etc.
        assert_eq!(a * b, Quat::from_xyzw(24.0, 48.0, 48.0, -6.0));
    }

    #[test]
    fn test_componentwise_ops() {
        let a = Quat::from_xyzw(1.0, 2.0, 3.0, 4.0);
        let b = Quat::splat(1.0);
        assert_eq!(a + b, Quat::from_xyzw(2.0, 3.0, 4.0, 5.0));
        assert_eq!(a - b, Quat::from_xyzw(0.0, 1.0, 2.0, 3.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!((a * 2.0) / 2.0, a);
        assert_eq!(12.0 / a, Quat::from_xyzw(12.0, 6.0, 4.0, 3.0));
    }

    #[test]
    fn test_normalize() {
        let q = Quat::from_xyzw(0.0, 3.0, 0.0, 4.0).normalize();
        assert_eq!(q, Quat::from_xyzw(0.0, 0.6, 0.0, 0.8));
        assert_eq!(Quat::ZERO.normalize(), Quat::ZERO);
    }

    #[test]
    fn test_invert() {
        let q = Quat::from_xyzw(1.0, 2.0, 3.0, 4.0);
        assert_relative_eq!(q * q.invert(), Quat::IDENTITY, epsilon = 1e-6);
        let unit = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 40.0);
        assert_relative_eq!(unit.invert(), unit.conjugate(), epsilon = 1e-6);
    }

    #[test]
    fn test_from_axis_angle() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 2.0, 0.0), 180.0);
        assert_relative_eq!(q, Quat::from_xyzw(0.0, 1.0, 0.0, 0.0), epsilon = 1e-6);
        assert!((q.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_try_from_axis_angle() {
        assert_eq!(Quat::try_from_axis_angle(Vec3::ZERO, 10.0), Err(Error::ZeroAxis));
        assert!(Quat::try_from_axis_angle(Vec3::UP, 10.0).is_ok());
    }

    #[test]
    fn test_rotate() {
        let q = Quat::from_axis_angle(Vec3::UP, 90.0);
        assert_relative_eq!(q.rotate(Vec3::FORWARD), Vec3::LEFT, epsilon = 1e-6);
        assert_relative_eq!(q.rotate(Vec3::UP), Vec3::UP, epsilon = 1e-6);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Quat::from_axis_angle(Vec3::UP, 10.0);
        let b = Quat::from_axis_angle(Vec3::RIGHT, 70.0);
        assert_relative_eq!(a.lerp(b, 0.0), a, epsilon = 1e-6);
        assert_relative_eq!(a.lerp(b, 1.0), b, epsilon = 1e-6);
        assert_relative_eq!(a.lerp(b, -3.0), a, epsilon = 1e-6);
        assert!((a.lerp(b, 0.3).length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_slerp_same_input() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 33.0);
        for alpha in [0.0, 0.25, 0.5, 1.0] {
            let r = q.slerp(q, alpha);
            assert!(r.is_finite());
            assert_relative_eq!(r, q, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_slerp_halfway() {
        let a = Quat::IDENTITY;
        let b = Quat::from_axis_angle(Vec3::UP, 90.0);
        let mid = a.slerp(b, 0.5);
        assert_relative_eq!(mid, Quat::from_axis_angle(Vec3::UP, 45.0), epsilon = 1e-6);
        assert_relative_eq!(a.slerp(b, 2.0), b, epsilon = 1e-6);
    }

    #[test]
    fn test_slerp_opposite_sign() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 40.0);
        let near_neg = (-q + Quat::from_xyzw(1e-4, 0.0, 0.0, 0.0)).normalize();
        for alpha in [0.0, 0.25, 0.5, 1.0] {
            let r = q.slerp(-q, alpha);
            assert!(r.is_finite());
            assert_relative_eq!(r, q, epsilon = 1e-6);

            let r = q.slerp(near_neg, alpha);
            assert!(r.is_finite());
            assert!((r.length() - 1.0).abs() < 1e-5);
            assert_relative_eq!(r, q, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_slerp_takes_shortest_arc() {
        let a = Quat::IDENTITY;
        let b = Quat::from_axis_angle(Vec3::UP, 90.0);
        assert_relative_eq!(a.slerp(-b, 0.5), Quat::from_axis_angle(Vec3::UP, 45.0), epsilon = 1e-6);
        assert_relative_eq!(a.slerp(-b, 1.0), b, epsilon = 1e-6);
    }

    #[test]
    fn test_vec4_reinterpret() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let q = Quat::from(v);
        assert_eq!(q.xyz(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(q.w(), 4.0);
        assert_eq!(Vec4::from(q), v);
        assert_eq!(Quat::from_xyz_w(v.xyz(), v.w()), q);
    }

    #[test]
    fn test_try_from_slice() {
        let data = [0.0_f32, 0.0, 0.0, 1.0, 9.0];
        assert_eq!(Quat::try_from(&data[..4]).unwrap(), Quat::IDENTITY);
        assert_eq!(
            Quat::try_from(&data[..]).unwrap_err(),
            Error::SliceLength { expected: 4, actual: 5 }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Quat::IDENTITY.to_string(), "(0, 0, 0, 1)");
    }
}
