//! # gmath
//!
//! Graphics math for rendering code: vectors, a column-major 4x4 matrix and
//! quaternions, plus the transform constructors a frame needs.
//!
//! - [`Vec4`] - 4-lane float vector with lane-parallel arithmetic
//! - [`Mat4`] - column-major 4x4 matrix built from four [`Vec4`] columns
//! - [`Quat`] - rotation quaternion sharing [`Vec4`]'s lane layout
//! - [`Vec2`], [`Vec3`], [`IVec2`], [`IVec3`] - small elementwise value types
//! - Projection, view, rotation, scale and translation constructors on [`Mat4`]
//!
//! # Design
//!
//! Matrices are stored as four **columns** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! (A * B) * v == A * (B * v)
//! ```
//!
//! The coordinate system is right-handed with [`Vec3::FORWARD`] pointing
//! down `-Z`. Angles passed to rotation constructors are in degrees.
//!
//! # Usage
//!
//! ```rust
//! use gmath::{Mat4, Vec3, Vec4};
//!
//! let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::UP);
//! let proj = Mat4::perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
//! let clip = proj * view * Vec4::new(0.0, 0.0, 0.0, 1.0);
//! assert!(clip.w() > 0.0);
//! ```
//!
//! # Execution strategy
//!
//! Arithmetic on [`Vec4`], [`Mat4`] and [`Quat`] goes through
//! [`lanes::Active`], selected when the crate is built:
//!
//! - `simd` feature (default) - `wide::f32x4` lanes
//! - without it - plain scalar code
//!
//! Both strategies produce the same results up to floating-point
//! summation order.
//!
//! # Feature Flags
//!
//! - `simd` - lane-parallel arithmetic (enabled by default)
//! - `depth-zero-to-one` - projections target clip depth `[0, 1]`
//! - `libm` - route transcendental functions through `libm`
//! - `serde` - serialization for all value types
//! - `bytemuck` - `Pod`/`Zeroable` for uniform upload

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[macro_use]
mod macros;

mod approx_impls;
mod convert;
mod depth;
mod error;
mod mat4;
mod quat;
mod transform;
mod vec2;
mod vec3;
mod vec4;
pub mod lanes;
pub mod scalar;

pub use depth::*;
pub use error::*;
pub use mat4::*;
pub use quat::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

/// Re-export glam types for interop.
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Quat as GlamQuat, Vec2 as GlamVec2, Vec3 as GlamVec3, Vec4 as GlamVec4};
}
