//! Conversions to and from `glam`.
//!
//! All conversions are lossless: both crates store `f32` components in the
//! same order and both store matrices column-major.

use crate::{Mat4, Quat, Vec2, Vec3, Vec4};

impl From<glam::Vec2> for Vec2 {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2> for glam::Vec2 {
    #[inline]
    fn from(v: Vec2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec4> for Vec4 {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_array(v.to_array())
    }
}

impl From<Vec4> for glam::Vec4 {
    #[inline]
    fn from(v: Vec4) -> Self {
        glam::Vec4::from_array(v.to_array())
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_cols_array_2d(m.to_cols_array_2d())
    }
}

impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> Self {
        glam::Mat4::from_cols_array_2d(&m.to_cols_array_2d())
    }
}

impl From<glam::Quat> for Quat {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<Quat> for glam::Quat {
    #[inline]
    fn from(q: Quat) -> Self {
        glam::Quat::from_xyzw(q.x(), q.y(), q.z(), q.w())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_interop() {
        let v = Vec3::new(1.0, -2.0, 3.5);
        let g: glam::Vec3 = v.into();
        assert_eq!(g, glam::Vec3::new(1.0, -2.0, 3.5));
        assert_eq!(Vec3::from(g), v);

        let v4 = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(glam::Vec4::from(v4).w, 4.0);
        assert_eq!(Vec4::from(glam::Vec4::from(v4)), v4);

        assert_eq!(Vec2::from(glam::Vec2::new(5.0, 6.0)), Vec2::new(5.0, 6.0));
    }

    #[test]
    fn test_mat4_interop_keeps_columns() {
        let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        let g: glam::Mat4 = m.into();
        assert_eq!(g.w_axis, glam::Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Mat4::from(g), m);
    }

    #[test]
    fn test_quat_interop() {
        let q = Quat::from_xyzw(0.1, 0.2, 0.3, 0.9);
        let g: glam::Quat = q.into();
        assert_eq!(g.w, 0.9);
        assert_eq!(Quat::from(g), q);
    }
}
