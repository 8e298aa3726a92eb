//! Transform constructors.
//!
//! Projection, view and model matrices built as [`Mat4`] values, plus the
//! two-way conversion between rotation matrices and quaternions.
//!
//! Every constructor here is total: degenerate input (a zero fov, an eye
//! sitting on its target, a box with no width) produces a degenerate but
//! well-typed matrix. The `try_*` variants validate first and return
//! [`Error`] instead.
//!
//! # Depth range
//!
//! [`Mat4::perspective`] and [`Mat4::orthographic`] use
//! [`DepthRange::ACTIVE`]. The `*_with_depth` forms take the range
//! explicitly; only the `[2][2]` and `[3][2]` entries differ between the
//! two.

use crate::{scalar, DepthRange, Error, Mat4, Quat, Result, Vec3, Vec4};
use tracing::debug;

impl Mat4 {
    /// Orthographic projection of the box `[left, right] x [bottom, top] x [near, far]`.
    ///
    /// `near` maps to the near clip depth and `far` to `+1`.
    ///
    /// The box is measured along `+Z` view depth, unlike
    /// [`Mat4::perspective`] and [`Mat4::look_at`], which look down `-Z`.
    /// When composing with a [`Mat4::look_at`] view, pass `-far, -near` as
    /// the depth bounds so points in front of the eye land inside the clip
    /// volume.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath::{Mat4, Vec4};
    ///
    /// let m = Mat4::orthographic(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
    /// assert_eq!(m * Vec4::ONE, Vec4::ONE);
    /// ```
    #[inline]
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self::orthographic_with_depth(left, right, bottom, top, near, far, DepthRange::ACTIVE)
    }

    /// [`Mat4::orthographic`] with an explicit depth range.
    pub fn orthographic_with_depth(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
        depth: DepthRange,
    ) -> Self {
        let rl = 1.0 / (right - left);
        let tb = 1.0 / (top - bottom);
        let fnr = 1.0 / (far - near);
        let (zz, zw) = match depth {
            DepthRange::NegOneToOne => (2.0 * fnr, -(far + near) * fnr),
            DepthRange::ZeroToOne => (fnr, -near * fnr),
        };
        Self::from_cols(
            Vec4::new(2.0 * rl, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * tb, 0.0, 0.0),
            Vec4::new(0.0, 0.0, zz, 0.0),
            Vec4::new(-(right + left) * rl, -(top + bottom) * tb, zw, 1.0),
        )
    }

    /// Orthographic projection of a box centered on the view axis.
    ///
    /// Expands to `(-width/2, width/2, -height/2, height/2, near, near + depth)`.
    #[inline]
    pub fn orthographic_centered(width: f32, height: f32, depth: f32, near: f32) -> Self {
        let hw = width * 0.5;
        let hh = height * 0.5;
        Self::orthographic(-hw, hw, -hh, hh, near, near + depth)
    }

    /// [`Mat4::orthographic_centered`] with the box size given as
    /// `(width, height, depth)`.
    #[inline]
    pub fn orthographic_extent(size: Vec3, near: f32) -> Self {
        Self::orthographic_centered(size.x, size.y, size.z, near)
    }

    /// Checked [`Mat4::orthographic`].
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyVolume`] if `left == right` or `bottom == top`
    /// - [`Error::InvalidClipPlanes`] if `near == far`
    pub fn try_orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Result<Self> {
        if left == right || bottom == top {
            debug!(left, right, bottom, top, "rejected empty orthographic volume");
            return Err(Error::EmptyVolume);
        }
        if near == far {
            debug!(near, far, "rejected orthographic clip planes");
            return Err(Error::InvalidClipPlanes { near, far });
        }
        Ok(Self::orthographic(left, right, bottom, top, near, far))
    }

    /// Right-handed perspective projection looking down `-Z`.
    ///
    /// `fov` is the vertical field of view in degrees, `aspect` is
    /// width / height. Expects `0 < fov < 180` and `0 < near < far`;
    /// other input yields a degenerate matrix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath::Mat4;
    ///
    /// let m = Mat4::perspective(90.0, 1.0, 0.1, 100.0);
    /// assert_eq!(m[2][3], -1.0);
    /// ```
    #[inline]
    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::perspective_with_depth(fov, aspect, near, far, DepthRange::ACTIVE)
    }

    /// [`Mat4::perspective`] with an explicit depth range.
    pub fn perspective_with_depth(fov: f32, aspect: f32, near: f32, far: f32, depth: DepthRange) -> Self {
        let cotan = 1.0 / scalar::tan(fov * scalar::PI / 360.0);
        let nf = 1.0 / (near - far);
        let (zz, zw) = match depth {
            DepthRange::NegOneToOne => ((near + far) * nf, 2.0 * near * far * nf),
            DepthRange::ZeroToOne => (far * nf, near * far * nf),
        };
        Self::from_cols(
            Vec4::new(cotan / aspect, 0.0, 0.0, 0.0),
            Vec4::new(0.0, cotan, 0.0, 0.0),
            Vec4::new(0.0, 0.0, zz, -1.0),
            Vec4::new(0.0, 0.0, zw, 0.0),
        )
    }

    /// Checked [`Mat4::perspective`].
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidFov`] unless `0 < fov < 180`
    /// - [`Error::InvalidAspect`] unless `aspect` is finite and positive
    /// - [`Error::InvalidClipPlanes`] unless `0 < near < far`
    pub fn try_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Result<Self> {
        if !(fov > 0.0 && fov < 180.0) {
            debug!(fov, "rejected perspective fov");
            return Err(Error::InvalidFov(fov));
        }
        if !(aspect.is_finite() && aspect > 0.0) {
            debug!(aspect, "rejected perspective aspect");
            return Err(Error::InvalidAspect(aspect));
        }
        if !(near > 0.0 && near < far) {
            debug!(near, far, "rejected perspective clip planes");
            return Err(Error::InvalidClipPlanes { near, far });
        }
        Ok(Self::perspective(fov, aspect, near, far))
    }

    /// Translation by `offset`.
    #[inline]
    pub fn translation(offset: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m[3] = Vec4::from_xyz_w(offset, 1.0);
        m
    }

    /// Non-uniform scale by `factors`.
    #[inline]
    pub fn scaling(factors: Vec3) -> Self {
        Self::from_cols(
            Vec4::new(factors.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, factors.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, factors.z, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Rotation of `degrees` around `axis`, counter-clockwise when looking
    /// down the axis toward the origin.
    ///
    /// The axis is normalized first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath::{Mat4, Vec3, Vec4};
    /// use approx::assert_relative_eq;
    ///
    /// let m = Mat4::rotation(Vec3::UP, 90.0);
    /// let v = m * Vec4::from_xyz_w(Vec3::FORWARD, 0.0);
    /// assert_relative_eq!(v.xyz(), Vec3::LEFT, epsilon = 1e-6);
    /// ```
    pub fn rotation(axis: Vec3, degrees: f32) -> Self {
        let a = axis.normalize();
        let angle = scalar::radians(degrees);
        let s = scalar::sin(angle);
        let c = scalar::cos(angle);
        let k = 1.0 - c;
        Self::from_cols(
            Vec4::new(a.x * a.x * k + c, a.x * a.y * k + a.z * s, a.x * a.z * k - a.y * s, 0.0),
            Vec4::new(a.y * a.x * k - a.z * s, a.y * a.y * k + c, a.y * a.z * k + a.x * s, 0.0),
            Vec4::new(a.z * a.x * k + a.y * s, a.z * a.y * k - a.x * s, a.z * a.z * k + c, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Checked [`Mat4::rotation`].
    ///
    /// # Errors
    ///
    /// [`Error::ZeroAxis`] when `axis` has zero length.
    pub fn try_rotation(axis: Vec3, degrees: f32) -> Result<Self> {
        if axis.length_squared() == 0.0 {
            debug!(?axis, degrees, "rejected zero rotation axis");
            return Err(Error::ZeroAxis);
        }
        Ok(Self::rotation(axis, degrees))
    }

    /// View matrix for a camera at `eye` looking at `target`.
    ///
    /// The rows of the rotation block are `right`, `up` and `-forward`,
    /// so the camera looks down `-Z` in view space. `up` is
    /// re-orthogonalized and only needs to be roughly upward.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath::{Mat4, Vec3, Vec4};
    ///
    /// let eye = Vec3::new(0.0, 0.0, 5.0);
    /// let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UP);
    /// assert_eq!(view * Vec4::from_xyz_w(eye, 1.0), Vec4::new(0.0, 0.0, 0.0, 1.0));
    /// ```
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalize();
        let r = f.cross(up).normalize();
        let u = r.cross(f);
        Self::from_cols(
            Vec4::new(r.x, u.x, -f.x, 0.0),
            Vec4::new(r.y, u.y, -f.y, 0.0),
            Vec4::new(r.z, u.z, -f.z, 0.0),
            Vec4::new(-r.dot(eye), -u.dot(eye), f.dot(eye), 1.0),
        )
    }

    /// Checked [`Mat4::look_at`].
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateLookAt`] when `eye == target` or the view
    /// direction is parallel to `up`.
    pub fn try_look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Self> {
        let forward = target - eye;
        if forward.length_squared() == 0.0 || forward.cross(up).length_squared() == 0.0 {
            debug!(?eye, ?target, ?up, "rejected degenerate look-at");
            return Err(Error::DegenerateLookAt);
        }
        Ok(Self::look_at(eye, target, up))
    }

    /// Rotation matrix for `q`. The quaternion is normalized first.
    pub fn from_quat(q: Quat) -> Self {
        let q = q.normalize();
        let (x, y, z, w) = (q.x(), q.y(), q.z(), q.w());
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        Self::from_cols(
            Vec4::new(1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy), 0.0),
            Vec4::new(2.0 * (xy - wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + wx), 0.0),
            Vec4::new(2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (xx + yy), 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }
}

impl Quat {
    /// Extracts the rotation of an orthonormal rotation matrix.
    ///
    /// Solves first for the component with the largest magnitude, picked
    /// from the signs of the diagonal, then derives the other three from
    /// off-diagonal sums and differences. The result may be `-q` for a
    /// matrix built from `q`; both describe the same rotation.
    pub fn from_mat4(m: &Mat4) -> Self {
        let (m00, m01, m02) = (m[0][0], m[0][1], m[0][2]);
        let (m10, m11, m12) = (m[1][0], m[1][1], m[1][2]);
        let (m20, m21, m22) = (m[2][0], m[2][1], m[2][2]);

        let (t, q) = if m22 < 0.0 {
            if m00 > m11 {
                let t = 1.0 + m00 - m11 - m22;
                (t, Self::from_xyzw(t, m01 + m10, m20 + m02, m12 - m21))
            } else {
                let t = 1.0 - m00 + m11 - m22;
                (t, Self::from_xyzw(m01 + m10, t, m12 + m21, m20 - m02))
            }
        } else if m00 < -m11 {
            let t = 1.0 - m00 - m11 + m22;
            (t, Self::from_xyzw(m20 + m02, m12 + m21, t, m01 - m10))
        } else {
            let t = 1.0 + m00 + m11 + m22;
            (t, Self::from_xyzw(m12 - m21, m20 - m02, m01 - m10, t))
        };
        q * (0.5 / scalar::sqrt(t))
    }
}

impl From<Quat> for Mat4 {
    #[inline]
    fn from(q: Quat) -> Self {
        Self::from_quat(q)
    }
}
