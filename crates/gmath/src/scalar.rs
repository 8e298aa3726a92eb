//! Scalar math functions and utilities.
//!
//! Every transcendental function the crate uses goes through this module,
//! so there is exactly one place that decides where they come from:
//!
//! - default - `f32` methods from std
//! - `libm` feature - the `libm` crate (no CRT dependency)
//!
//! [`sqrt`] and [`rsqrt`] go through the active lane strategy instead, so
//! they use the hardware square-root instructions when `simd` is enabled.
//!
//! # Usage
//!
//! ```rust
//! use gmath::scalar::{clamp, lerp, radians};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(lerp(0.0, 10.0, 2.0), 10.0); // alpha is clamped
//! assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
//! assert!((radians(180.0) - gmath::scalar::PI).abs() < 1e-6);
//! ```

use crate::lanes::{Active, Lanes};

/// Archimedes' constant.
pub const PI: f32 = std::f32::consts::PI;

/// Half of [`PI`].
pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;

/// Twice [`PI`].
pub const TWO_PI: f32 = std::f32::consts::TAU;

/// Euler's number.
pub const E: f32 = std::f32::consts::E;

#[cfg(not(feature = "libm"))]
mod backend {
    #[inline]
    pub fn sin(x: f32) -> f32 {
        x.sin()
    }
    #[inline]
    pub fn cos(x: f32) -> f32 {
        x.cos()
    }
    #[inline]
    pub fn tan(x: f32) -> f32 {
        x.tan()
    }
    #[inline]
    pub fn acos(x: f32) -> f32 {
        x.acos()
    }
    #[inline]
    pub fn atan(x: f32) -> f32 {
        x.atan()
    }
    #[inline]
    pub fn atan2(y: f32, x: f32) -> f32 {
        y.atan2(x)
    }
    #[inline]
    pub fn exp(x: f32) -> f32 {
        x.exp()
    }
    #[inline]
    pub fn log(x: f32) -> f32 {
        x.ln()
    }
}

#[cfg(feature = "libm")]
mod backend {
    pub use libm::{acosf as acos, atan2f as atan2, atanf as atan, cosf as cos, expf as exp};
    pub use libm::{logf as log, sinf as sin, tanf as tan};
}

/// Sine of an angle in radians.
#[inline]
pub fn sin(radians: f32) -> f32 {
    backend::sin(radians)
}

/// Cosine of an angle in radians.
#[inline]
pub fn cos(radians: f32) -> f32 {
    backend::cos(radians)
}

/// Tangent of an angle in radians.
#[inline]
pub fn tan(radians: f32) -> f32 {
    backend::tan(radians)
}

/// Arc cosine in radians. Input outside [-1, 1] yields NaN.
#[inline]
pub fn acos(cos: f32) -> f32 {
    backend::acos(cos)
}

/// Arc tangent in radians.
#[inline]
pub fn atan(tan: f32) -> f32 {
    backend::atan(tan)
}

/// Four-quadrant arc tangent of `y / x` in radians.
#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    backend::atan2(y, x)
}

/// Natural exponential.
#[inline]
pub fn exp(x: f32) -> f32 {
    backend::exp(x)
}

/// Natural logarithm.
#[inline]
pub fn log(x: f32) -> f32 {
    backend::log(x)
}

/// Real power computed as `exp(exponent * log(value))`.
///
/// Only defined for positive `value`.
#[inline]
pub fn pow(value: f32, exponent: f32) -> f32 {
    exp(exponent * log(value))
}

/// Square root.
///
/// Uses the hardware square root on the lane-parallel strategy.
#[inline]
pub fn sqrt(x: f32) -> f32 {
    Active::sqrt(x)
}

/// Reciprocal square root `1 / sqrt(x)`.
///
/// On the lane-parallel strategy this is the approximate hardware
/// estimate (about 12 bits of precision); on the scalar strategy it is
/// exact to single-precision rounding.
#[inline]
pub fn rsqrt(x: f32) -> f32 {
    Active::rsqrt(x)
}

/// Converts degrees to radians.
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn degrees(radians: f32) -> f32 {
    (radians * 180.0) / PI
}

/// Smaller of two values.
#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a > b { b } else { a }
}

/// Larger of two values.
#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a < b { b } else { a }
}

/// Absolute value.
#[inline]
pub fn abs(value: f32) -> f32 {
    if value > 0.0 { value } else { -value }
}

/// Clamps a value to the range [min, max].
///
/// # Example
///
/// ```rust
/// use gmath::scalar::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    self::max(min, self::min(max, value))
}

/// Linear interpolation with `alpha` clamped to [0, 1].
///
/// # Formula
///
/// `(1 - alpha) * a + alpha * b`
#[inline]
pub fn lerp(a: f32, b: f32, alpha: f32) -> f32 {
    let alpha = clamp(alpha, 0.0, 1.0);
    (1.0 - alpha) * a + alpha * b
}

/// Integer modulo, never negative for a positive divisor.
///
/// # Example
///
/// ```rust
/// use gmath::scalar::modulo;
///
/// assert_eq!(modulo(7, 3), 1);
/// assert_eq!(modulo(-1, 3), 2);
/// ```
#[inline]
pub fn modulo(a: i32, b: i32) -> i32 {
    let r = a % b;
    if r >= 0 { r } else { r + b }
}

/// Raises `base` to an integer power by repeated squaring.
///
/// Negative exponents raise the reciprocal of `base`.
pub fn powi(base: f32, exponent: i32) -> f32 {
    let mut result = 1.0;
    let mut mul = if exponent < 0 { 1.0 / base } else { base };
    let mut n = exponent.unsigned_abs();
    while n != 0 {
        if n & 1 == 1 {
            result *= mul;
        }
        mul *= mul;
        n >>= 1;
    }
    result
}
