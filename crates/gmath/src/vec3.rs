//! 3D vector types for positions, directions and colors.
//!
//! [`Vec3`] is the input type of the transform constructors (axes, eye and
//! target positions, scale factors). [`IVec3`] is its integer counterpart.
//!
//! # Usage
//!
//! ```rust
//! use gmath::Vec3;
//!
//! let right = Vec3::FORWARD.cross(Vec3::UP);
//! assert_eq!(right, Vec3::RIGHT);
//! ```

use crate::{scalar, IVec2, Vec2};
use std::fmt;

/// A 3D float vector.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`. The color
/// views [`r`](Vec3::r), [`g`](Vec3::g), [`b`](Vec3::b) alias the same
/// fields.
///
/// # Example
///
/// ```rust
/// use gmath::Vec3;
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(v.x, 1.0);
/// assert_eq!(v[2], 3.0);
/// assert_eq!(v.dot(Vec3::ONE), 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// +X.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// +Y.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// -X.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// -Y.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    /// -Z, the view direction of an untransformed camera.
    pub const FORWARD: Self = Self::new(0.0, 0.0, -1.0);
    /// +Z.
    pub const BACKWARD: Self = Self::new(0.0, 0.0, 1.0);

    /// Red (1, 0, 0).
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    /// Green (0, 1, 0).
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    /// Blue (0, 0, 1).
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    /// Cyan (0, 1, 1).
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0);
    /// Yellow (1, 1, 0).
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0);
    /// Purple (1, 0, 1).
    pub const PURPLE: Self = Self::new(1.0, 0.0, 1.0);
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath::Vec3;
    ///
    /// assert_eq!(Vec3::splat(0.5), Vec3::new(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an `xy` pair and a `z`.
    #[inline]
    pub const fn from_xy_z(xy: Vec2, z: f32) -> Self {
        Self::new(xy.x, xy.y, z)
    }

    /// Creates from an `x` and a `yz` pair.
    #[inline]
    pub const fn from_x_yz(x: f32, yz: Vec2) -> Self {
        Self::new(x, yz.x, yz.y)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Red channel, alias of `x`.
    #[inline]
    pub const fn r(self) -> f32 {
        self.x
    }

    /// Green channel, alias of `y`.
    #[inline]
    pub const fn g(self) -> f32 {
        self.y
    }

    /// Blue channel, alias of `z`.
    #[inline]
    pub const fn b(self) -> f32 {
        self.z
    }

    /// The first two components.
    #[inline]
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// The last two components.
    #[inline]
    pub const fn yz(self) -> Vec2 {
        Vec2::new(self.y, self.z)
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    ///
    /// Right-handed: `X.cross(Y) == Z`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        scalar::sqrt(self.length_squared())
    }

    /// Normalizes the vector to unit length.
    ///
    /// Returns zero vector if length is exactly zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 { Self::ZERO } else { self / len }
    }

    /// Normalizes, returning zero when the length is below `tolerance`.
    #[inline]
    pub fn safe_normalize(self, tolerance: f32) -> Self {
        let len = self.length();
        if len < tolerance { Self::ZERO } else { self / len }
    }

    /// Approximate normalization via reciprocal square root.
    ///
    /// No zero check: a zero vector yields NaN components.
    #[inline]
    pub fn fast_normalize(self) -> Self {
        self * scalar::rsqrt(self.dot(self))
    }

    /// Rescales the vector so its length lies in [min, max].
    #[inline]
    pub fn clamp_length(self, min: f32, max: f32) -> Self {
        let len = self.length();
        if len < min || len > max {
            self.normalize() * scalar::clamp(len, min, max)
        } else {
            self
        }
    }

    /// Linear interpolation with `alpha` clamped to [0, 1].
    #[inline]
    pub fn lerp(self, other: Self, alpha: f32) -> Self {
        Self::new(
            scalar::lerp(self.x, other.x, alpha),
            scalar::lerp(self.y, other.y, alpha),
            scalar::lerp(self.z, other.z, alpha),
        )
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Truncates each component toward zero.
    #[inline]
    pub fn as_ivec3(self) -> IVec3 {
        IVec3::new(self.x as i32, self.y as i32, self.z as i32)
    }
}

impl_elementwise_ops!(Vec3, f32, x, y, z);
impl_field_index!(Vec3, f32, 0 => x, 1 => y, 2 => z);

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A 3D integer vector, also used for extents (width, height, depth).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct IVec3 {
    /// X component
    pub x: i32,
    /// Y component
    pub y: i32,
    /// Z component
    pub z: i32,
}

impl IVec3 {
    /// (0, 0, 0)
    pub const ZERO: Self = Self::new(0, 0, 0);
    /// (1, 1, 1)
    pub const ONE: Self = Self::new(1, 1, 1);
    /// +X.
    pub const RIGHT: Self = Self::new(1, 0, 0);
    /// +Y.
    pub const UP: Self = Self::new(0, 1, 0);
    /// -X.
    pub const LEFT: Self = Self::new(-1, 0, 0);
    /// -Y.
    pub const DOWN: Self = Self::new(0, -1, 0);
    /// -Z.
    pub const FORWARD: Self = Self::new(0, 0, -1);
    /// +Z.
    pub const BACKWARD: Self = Self::new(0, 0, 1);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to `v`.
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an `xy` pair and a `z`.
    #[inline]
    pub const fn from_xy_z(xy: IVec2, z: i32) -> Self {
        Self::new(xy.x, xy.y, z)
    }

    /// Creates from an `x` and a `yz` pair.
    #[inline]
    pub const fn from_x_yz(x: i32, yz: IVec2) -> Self {
        Self::new(x, yz.x, yz.y)
    }

    /// The first two components.
    #[inline]
    pub const fn xy(self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// The last two components.
    #[inline]
    pub const fn yz(self) -> IVec2 {
        IVec2::new(self.y, self.z)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> i32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> i32 {
        self.dot(self)
    }

    /// Widens each component to `f32`.
    #[inline]
    pub fn as_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl_elementwise_ops!(IVec3, i32, x, y, z);
impl_field_index!(IVec3, i32, 0 => x, 1 => y, 2 => z);

impl fmt::Display for IVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
