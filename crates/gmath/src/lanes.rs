//! Execution strategies for 4-lane arithmetic.
//!
//! [`Vec4`](crate::Vec4), [`Mat4`](crate::Mat4) and [`Quat`](crate::Quat)
//! store their components as one flat `[f32; 4]` per lane group and hand
//! them to a [`Lanes`] implementation for every arithmetic operation:
//!
//! - [`Wide`] - lane-parallel, using `wide::f32x4` (`simd` feature)
//! - [`Scalar`] - one component at a time
//!
//! [`Active`] is the strategy the crate was built with. The choice is made
//! by `cfg`, so there is no dispatch at runtime.
//!
//! # Consistency
//!
//! Elementwise operations, [`Lanes::linear_combine`] and
//! [`Lanes::quat_mul`] perform the same IEEE operations in the same order
//! on both strategies and agree bit for bit. [`Lanes::dot`] may differ in
//! the last bits because the horizontal reduction adds lanes in a
//! different order. [`Lanes::rsqrt`] is an estimate on [`Wide`].
//!
//! # Example
//!
//! ```rust
//! use gmath::lanes::{Lanes, Scalar};
//!
//! let d = Scalar::dot([1.0, 2.0, 3.0, 4.0], [1.0, 1.0, 1.0, 1.0]);
//! assert_eq!(d, 10.0);
//! ```

/// Four packed single-precision lanes.
pub type Lane4 = [f32; 4];

/// Arithmetic contract shared by both execution strategies.
pub trait Lanes {
    /// Short name, used in benchmark and log output.
    const NAME: &'static str;

    /// Lanewise `a + b`.
    fn add(a: Lane4, b: Lane4) -> Lane4;

    /// Lanewise `a - b`.
    fn sub(a: Lane4, b: Lane4) -> Lane4;

    /// Lanewise `a * b`.
    fn mul(a: Lane4, b: Lane4) -> Lane4;

    /// Lanewise `a / b`.
    fn div(a: Lane4, b: Lane4) -> Lane4;

    /// Lanewise negation.
    fn neg(a: Lane4) -> Lane4;

    /// Sum of lanewise products.
    fn dot(a: Lane4, b: Lane4) -> f32;

    /// `a * wa + b * wb` with scalar weights broadcast to every lane.
    fn blend(a: Lane4, wa: f32, b: Lane4, wb: f32) -> Lane4;

    /// `cols[0] * v[0] + cols[1] * v[1] + cols[2] * v[2] + cols[3] * v[3]`.
    ///
    /// This is a column-major matrix times a column vector.
    fn linear_combine(v: Lane4, cols: &[Lane4; 4]) -> Lane4;

    /// Hamilton product of two `(x, y, z, w)` quaternions.
    fn quat_mul(a: Lane4, b: Lane4) -> Lane4;

    /// Square root of a single value.
    fn sqrt(x: f32) -> f32;

    /// Reciprocal square root of a single value.
    fn rsqrt(x: f32) -> f32;
}

/// Strategy selected at build time.
#[cfg(feature = "simd")]
pub type Active = Wide;

/// Strategy selected at build time.
#[cfg(not(feature = "simd"))]
pub type Active = Scalar;

/// Scalar strategy: one component at a time.
#[derive(Debug, Clone, Copy)]
pub struct Scalar;

impl Lanes for Scalar {
    const NAME: &'static str = "scalar";

    #[inline]
    fn add(a: Lane4, b: Lane4) -> Lane4 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]
    }

    #[inline]
    fn sub(a: Lane4, b: Lane4) -> Lane4 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]]
    }

    #[inline]
    fn mul(a: Lane4, b: Lane4) -> Lane4 {
        [a[0] * b[0], a[1] * b[1], a[2] * b[2], a[3] * b[3]]
    }

    #[inline]
    fn div(a: Lane4, b: Lane4) -> Lane4 {
        [a[0] / b[0], a[1] / b[1], a[2] / b[2], a[3] / b[3]]
    }

    #[inline]
    fn neg(a: Lane4) -> Lane4 {
        [-a[0], -a[1], -a[2], -a[3]]
    }

    #[inline]
    fn dot(a: Lane4, b: Lane4) -> f32 {
        (a[0] * b[0]) + (a[1] * b[1]) + (a[2] * b[2]) + (a[3] * b[3])
    }

    #[inline]
    fn blend(a: Lane4, wa: f32, b: Lane4, wb: f32) -> Lane4 {
        [
            a[0] * wa + b[0] * wb,
            a[1] * wa + b[1] * wb,
            a[2] * wa + b[2] * wb,
            a[3] * wa + b[3] * wb,
        ]
    }

    #[inline]
    fn linear_combine(v: Lane4, cols: &[Lane4; 4]) -> Lane4 {
        let mut out = [0.0; 4];
        for (row, o) in out.iter_mut().enumerate() {
            *o = cols[0][row] * v[0] + cols[1][row] * v[1] + cols[2][row] * v[2] + cols[3][row] * v[3];
        }
        out
    }

    #[inline]
    fn quat_mul(a: Lane4, b: Lane4) -> Lane4 {
        let [ax, ay, az, aw] = a;
        let [bx, by, bz, bw] = b;
        [
            (ax * bw) + (ay * bz) - (az * by) + (aw * bx),
            (-ax * bz) + (ay * bw) + (az * bx) + (aw * by),
            (ax * by) - (ay * bx) + (az * bw) + (aw * bz),
            (-ax * bx) - (ay * by) - (az * bz) + (aw * bw),
        ]
    }

    #[inline]
    fn sqrt(x: f32) -> f32 {
        #[cfg(feature = "libm")]
        {
            libm::sqrtf(x)
        }
        #[cfg(not(feature = "libm"))]
        {
            x.sqrt()
        }
    }

    #[inline]
    fn rsqrt(x: f32) -> f32 {
        1.0 / Self::sqrt(x)
    }
}

#[cfg(feature = "simd")]
pub use self::wide_lanes::Wide;

#[cfg(feature = "simd")]
mod wide_lanes {
    use super::{Lane4, Lanes};
    use wide::f32x4;

    /// Lane-parallel strategy on `wide::f32x4`.
    ///
    /// Loads and stores between `[f32; 4]` and `f32x4` are exact, so a value
    /// round-trips through the register representation unchanged.
    #[derive(Debug, Clone, Copy)]
    pub struct Wide;

    // Sign patterns for the shuffled Hamilton product terms.
    const SIGN_X: [f32; 4] = [1.0, -1.0, 1.0, -1.0];
    const SIGN_Y: [f32; 4] = [1.0, 1.0, -1.0, -1.0];
    const SIGN_Z: [f32; 4] = [-1.0, 1.0, 1.0, -1.0];

    impl Lanes for Wide {
        const NAME: &'static str = "wide";

        #[inline]
        fn add(a: Lane4, b: Lane4) -> Lane4 {
            (f32x4::from(a) + f32x4::from(b)).to_array()
        }

        #[inline]
        fn sub(a: Lane4, b: Lane4) -> Lane4 {
            (f32x4::from(a) - f32x4::from(b)).to_array()
        }

        #[inline]
        fn mul(a: Lane4, b: Lane4) -> Lane4 {
            (f32x4::from(a) * f32x4::from(b)).to_array()
        }

        #[inline]
        fn div(a: Lane4, b: Lane4) -> Lane4 {
            (f32x4::from(a) / f32x4::from(b)).to_array()
        }

        #[inline]
        fn neg(a: Lane4) -> Lane4 {
            (-f32x4::from(a)).to_array()
        }

        #[inline]
        fn dot(a: Lane4, b: Lane4) -> f32 {
            (f32x4::from(a) * f32x4::from(b)).reduce_add()
        }

        #[inline]
        fn blend(a: Lane4, wa: f32, b: Lane4, wb: f32) -> Lane4 {
            (f32x4::from(a) * f32x4::splat(wa) + f32x4::from(b) * f32x4::splat(wb)).to_array()
        }

        #[inline]
        fn linear_combine(v: Lane4, cols: &[Lane4; 4]) -> Lane4 {
            let mut out = f32x4::splat(v[0]) * f32x4::from(cols[0]);
            out = out + f32x4::splat(v[1]) * f32x4::from(cols[1]);
            out = out + f32x4::splat(v[2]) * f32x4::from(cols[2]);
            out = out + f32x4::splat(v[3]) * f32x4::from(cols[3]);
            out.to_array()
        }

        #[inline]
        fn quat_mul(a: Lane4, b: Lane4) -> Lane4 {
            let [bx, by, bz, bw] = b;
            let mut out = f32x4::splat(a[0]) * (f32x4::from([bw, bz, by, bx]) * f32x4::from(SIGN_X));
            out = out + f32x4::splat(a[1]) * (f32x4::from([bz, bw, bx, by]) * f32x4::from(SIGN_Y));
            out = out + f32x4::splat(a[2]) * (f32x4::from([by, bx, bw, bz]) * f32x4::from(SIGN_Z));
            out = out + f32x4::splat(a[3]) * f32x4::from(b);
            out.to_array()
        }

        #[inline]
        fn sqrt(x: f32) -> f32 {
            f32x4::splat(x).sqrt().to_array()[0]
        }

        #[inline]
        fn rsqrt(x: f32) -> f32 {
            f32x4::splat(x).recip_sqrt().to_array()[0]
        }
    }
}
