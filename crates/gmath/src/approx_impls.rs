//! Tolerance comparisons via the `approx` traits.
//!
//! Every float type compares componentwise: two values are equal when each
//! pair of components is.
//!
//! ```rust
//! use gmath::Vec4;
//! use approx::assert_relative_eq;
//!
//! let a = Vec4::new(0.1, 0.2, 0.3, 0.4) * 3.0;
//! assert_relative_eq!(a, Vec4::new(0.3, 0.6, 0.9, 1.2), epsilon = 1e-6);
//! ```

use crate::{Mat4, Quat, Vec2, Vec3, Vec4};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

macro_rules! impl_approx {
    ($ty:ty, $flat:expr) => {
        impl AbsDiffEq for $ty {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                let (a, b) = ($flat(self), $flat(other));
                a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff_eq(y, epsilon))
            }
        }

        impl RelativeEq for $ty {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                let (a, b) = ($flat(self), $flat(other));
                a.iter().zip(b.iter()).all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
            }
        }

        impl UlpsEq for $ty {
            fn default_max_ulps() -> u32 {
                f32::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                let (a, b) = ($flat(self), $flat(other));
                a.iter().zip(b.iter()).all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
            }
        }
    };
}

impl_approx!(Vec2, |v: &Vec2| v.to_array());
impl_approx!(Vec3, |v: &Vec3| v.to_array());
impl_approx!(Vec4, |v: &Vec4| v.to_array());
impl_approx!(Quat, |q: &Quat| q.to_array());
impl_approx!(Mat4, |m: &Mat4| m.to_cols_array());

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_ne, assert_ulps_eq};

    #[test]
    fn test_vec_tolerance() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = a + 1e-7;
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        assert_relative_ne!(a, a + 0.1);
        assert_ulps_eq!(Vec2::new(0.1 + 0.2, 1.0), Vec2::new(0.3, 1.0));
    }

    #[test]
    fn test_mat4_tolerance_checks_every_entry() {
        let mut m = Mat4::IDENTITY;
        m[3][2] = 1e-3;
        assert!(!Mat4::IDENTITY.abs_diff_eq(&m, 1e-4));
        assert!(Mat4::IDENTITY.abs_diff_eq(&m, 1e-2));
    }

    #[test]
    fn test_quat_tolerance() {
        let q = Quat::from_xyzw(0.0, 0.0, 0.0, 1.0 - 1e-7);
        assert_abs_diff_eq!(q, Quat::IDENTITY, epsilon = 1e-6);
    }
}
