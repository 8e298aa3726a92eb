//! 2-component float and integer vectors.
//!
//! [`Vec2`] and [`IVec2`] are plain elementwise value types with no lane
//! strategy behind them. Conversions between the two are explicit, see
//! [`IVec2::as_vec2`] and [`Vec2::as_ivec2`].

use crate::scalar;
use std::fmt;

/// A 2D float vector.
///
/// # Example
///
/// ```rust
/// use gmath::Vec2;
///
/// let v = Vec2::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v[1], 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// (0, 0)
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// (1, 1)
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// (1, 0)
    pub const RIGHT: Self = Self::new(1.0, 0.0);
    /// (0, 1)
    pub const UP: Self = Self::new(0.0, 1.0);
    /// (-1, 0)
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    /// (0, -1)
    pub const DOWN: Self = Self::new(0.0, -1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
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

    /// Unit vector, or zero when the length is exactly zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 { Self::ZERO } else { self / len }
    }

    /// Unit vector, or zero when the length is below `tolerance`.
    #[inline]
    pub fn safe_normalize(self, tolerance: f32) -> Self {
        let len = self.length();
        if len < tolerance { Self::ZERO } else { self / len }
    }

    /// Approximate unit vector via reciprocal square root.
    ///
    /// Must not be called on a zero vector.
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

    /// Truncates each component toward zero.
    #[inline]
    pub fn as_ivec2(self) -> IVec2 {
        IVec2::new(self.x as i32, self.y as i32)
    }
}

impl_elementwise_ops!(Vec2, f32, x, y);
impl_field_index!(Vec2, f32, 0 => x, 1 => y);

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> [f32; 2] {
        v.to_array()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A 2D integer vector, also used for sizes (`x` = width, `y` = height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct IVec2 {
    /// X component
    pub x: i32,
    /// Y component
    pub y: i32,
}

impl IVec2 {
    /// (0, 0)
    pub const ZERO: Self = Self::new(0, 0);
    /// (1, 1)
    pub const ONE: Self = Self::new(1, 1);
    /// (1, 0)
    pub const RIGHT: Self = Self::new(1, 0);
    /// (0, 1)
    pub const UP: Self = Self::new(0, 1);
    /// (-1, 0)
    pub const LEFT: Self = Self::new(-1, 0);
    /// (0, -1)
    pub const DOWN: Self = Self::new(0, -1);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v)
    }

    /// Width, the `x` component.
    #[inline]
    pub const fn width(self) -> i32 {
        self.x
    }

    /// Height, the `y` component.
    #[inline]
    pub const fn height(self) -> i32 {
        self.y
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> i32 {
        self.x * other.x + self.y * other.y
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> i32 {
        self.dot(self)
    }

    /// Widens each component to `f32`.
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

impl_elementwise_ops!(IVec2, i32, x, y);
impl_field_index!(IVec2, i32, 0 => x, 1 => y);

impl fmt::Display for IVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
