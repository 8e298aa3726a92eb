//! Clip-space depth range.
//!
//! Projections map view-space depth into one of two clip ranges. The
//! range used by [`Mat4::perspective`](crate::Mat4::perspective) and
//! [`Mat4::orthographic`](crate::Mat4::orthographic) is fixed when the
//! crate is built, via the `depth-zero-to-one` feature. The `*_with_depth`
//! constructors take the range explicitly.

use std::fmt;

/// Target range for clip-space depth after the perspective divide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DepthRange {
    /// `[-1, 1]`, the OpenGL convention.
    NegOneToOne,
    /// `[0, 1]`, the Direct3D, Metal and Vulkan convention.
    ZeroToOne,
}

impl DepthRange {
    /// Range selected at build time.
    #[cfg(not(feature = "depth-zero-to-one"))]
    pub const ACTIVE: Self = Self::NegOneToOne;

    /// Range selected at build time.
    #[cfg(feature = "depth-zero-to-one")]
    pub const ACTIVE: Self = Self::ZeroToOne;

    /// Clip depth the near plane maps to.
    #[inline]
    pub const fn near_value(self) -> f32 {
        match self {
            Self::NegOneToOne => -1.0,
            Self::ZeroToOne => 0.0,
        }
    }

    /// Clip depth the far plane maps to.
    #[inline]
    pub const fn far_value(self) -> f32 {
        1.0
    }
}

impl Default for DepthRange {
    fn default() -> Self {
        Self::ACTIVE
    }
}

impl fmt::Display for DepthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegOneToOne => write!(f, "[-1, 1]"),
            Self::ZeroToOne => write!(f, "[0, 1]"),
        }
    }
}
