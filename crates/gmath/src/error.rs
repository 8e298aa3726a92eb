//! Error types for the checked constructors.
//!
//! Every arithmetic operation in this crate is total: degenerate input
//! produces a degenerate value, never an error. The `try_*` constructors
//! and the slice conversions are the only fallible surface; they validate
//! their input and then delegate to the total versions.
//!
//! # Usage
//!
//! ```rust
//! use gmath::{Error, Mat4};
//!
//! let err = Mat4::try_perspective(180.0, 1.0, 0.1, 100.0).unwrap_err();
//! assert!(matches!(err, Error::InvalidFov(_)));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive macro for the error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by checked constructors and slice conversions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A float slice did not have the length the target type needs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath::{Error, Vec4};
    ///
    /// let err = Vec4::try_from(&[1.0_f32, 2.0][..]).unwrap_err();
    /// assert_eq!(err, Error::SliceLength { expected: 4, actual: 2 });
    /// ```
    #[error("expected {expected} floats, got {actual}")]
    SliceLength {
        /// Number of floats required
        expected: usize,
        /// Number of floats supplied
        actual: usize,
    },

    /// Perspective field of view outside the open range (0, 180) degrees.
    #[error("field of view {0} must be in (0, 180) degrees")]
    InvalidFov(f32),

    /// Perspective aspect ratio is not a finite positive number.
    #[error("aspect ratio {0} must be finite and positive")]
    InvalidAspect(f32),

    /// Clip planes that would make a projection singular.
    ///
    /// Perspective requires `0 < near < far`; orthographic requires
    /// `near != far`.
    #[error("invalid clip planes near={near}, far={far}")]
    InvalidClipPlanes {
        /// Near plane
        near: f32,
        /// Far plane
        far: f32,
    },

    /// Orthographic box with zero width or height.
    #[error("orthographic volume has zero width or height")]
    EmptyVolume,

    /// Look-at with the eye on the target, or looking along the up vector.
    #[error("look-at direction is zero or parallel to the up vector")]
    DegenerateLookAt,

    /// Rotation axis with zero length.
    #[error("rotation axis has zero length")]
    ZeroAxis,
}
