//! Algebraic properties over a deterministic sample set.

use approx::assert_relative_eq;
use gmath::{DepthRange, Mat4, Quat, Vec3, Vec4};

/// Small xorshift generator so every run sees the same samples.
struct Samples(u32);

impl Samples {
    fn new() -> Self {
        Self(0x9E37_79B9)
    }

    /// Uniform float in [-range, range].
    fn next(&mut self, range: f32) -> f32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        ((self.0 >> 8) as f32 / (1u32 << 24) as f32 * 2.0 - 1.0) * range
    }

    fn vec3(&mut self, range: f32) -> Vec3 {
        Vec3::new(self.next(range), self.next(range), self.next(range))
    }

    fn vec4(&mut self, range: f32) -> Vec4 {
        Vec4::new(self.next(range), self.next(range), self.next(range), self.next(range))
    }

    fn mat4(&mut self, range: f32) -> Mat4 {
        Mat4::from_cols(self.vec4(range), self.vec4(range), self.vec4(range), self.vec4(range))
    }

    fn rotation(&mut self) -> Quat {
        let mut axis = self.vec3(1.0);
        if axis.length() < 0.1 {
            axis = Vec3::UP;
        }
        Quat::from_axis_angle(axis, self.next(180.0))
    }
}

const N: usize = 200;

#[test]
fn test_vec4_add_sub_inverse() {
    let mut s = Samples::new();
    for _ in 0..N {
        let a = s.vec4(100.0);
        let b = s.vec4(100.0);
        assert_relative_eq!(a + b - b, a, epsilon = 1e-4);
    }
}

#[test]
fn test_vec4_scale_inverse() {
    let mut s = Samples::new();
    for _ in 0..N {
        let a = s.vec4(100.0);
        let k = s.next(10.0);
        if k.abs() < 1e-3 {
            continue;
        }
        assert_relative_eq!((a * k) / k, a, epsilon = 1e-4, max_relative = 1e-5);
    }
}

#[test]
fn test_vec4_dot_symmetric() {
    let mut s = Samples::new();
    for _ in 0..N {
        let a = s.vec4(10.0);
        let b = s.vec4(10.0);
        assert_eq!(a.dot(b), b.dot(a));
    }
}

#[test]
fn test_vec4_normalize_unit_length() {
    let mut s = Samples::new();
    for _ in 0..N {
        let v = s.vec4(50.0);
        if v.length() == 0.0 {
            continue;
        }
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(v.fast_normalize().length(), 1.0, epsilon = 1e-3);
    }
    assert_eq!(Vec4::ZERO.normalize(), Vec4::ZERO);
    assert_eq!(Vec4::ZERO.safe_normalize(0.001), Vec4::ZERO);
}

#[test]
fn test_mat4_associative() {
    let mut s = Samples::new();
    for _ in 0..N / 4 {
        let a = s.mat4(2.0);
        let b = s.mat4(2.0);
        let c = s.mat4(2.0);
        assert_relative_eq!((a * b) * c, a * (b * c), epsilon = 1e-4, max_relative = 1e-4);
    }
}

#[test]
fn test_mat4_transpose_and_identity() {
    let mut s = Samples::new();
    for _ in 0..N / 4 {
        let a = s.mat4(100.0);
        assert_eq!(a.transpose().transpose(), a);
        assert_eq!(Mat4::IDENTITY * a, a);
        assert_eq!(a * Mat4::IDENTITY, a);
    }
}

#[test]
fn test_mat4_product_applies_right_first() {
    let mut s = Samples::new();
    for _ in 0..N / 4 {
        let a = s.mat4(2.0);
        let b = s.mat4(2.0);
        let v = s.vec4(2.0);
        assert_relative_eq!((a * b) * v, a * (b * v), epsilon = 1e-4, max_relative = 1e-4);
    }
}

#[test]
fn test_quat_matrix_round_trip() {
    let mut s = Samples::new();
    for _ in 0..N {
        let q = s.rotation();
        let back = Quat::from_mat4(&Mat4::from_quat(q));
        // q and -q are the same rotation
        let back = if back.dot(q) < 0.0 { -back } else { back };
        assert_relative_eq!(back, q, epsilon = 1e-5);
    }
}

#[test]
fn test_matrix_quat_round_trip() {
    let mut s = Samples::new();
    for _ in 0..N {
        let axis = s.vec3(1.0) + Vec3::splat(0.01);
        let m = Mat4::rotation(axis, s.next(360.0));
        let back = Mat4::from_quat(Quat::from_mat4(&m));
        assert_relative_eq!(back, m, epsilon = 1e-5);
    }
}

#[test]
fn test_quat_product_matches_matrix_product() {
    let mut s = Samples::new();
    for _ in 0..N / 4 {
        let a = s.rotation();
        let b = s.rotation();
        assert_relative_eq!(Mat4::from_quat(a * b), Mat4::from_quat(a) * Mat4::from_quat(b), epsilon = 1e-5);
    }
}

#[test]
fn test_quat_rotate_matches_matrix() {
    let mut s = Samples::new();
    for _ in 0..N / 4 {
        let q = s.rotation();
        let v = s.vec3(5.0);
        let by_matrix = (Mat4::from_quat(q) * Vec4::from_xyz_w(v, 0.0)).xyz();
        assert_relative_eq!(q.rotate(v), by_matrix, epsilon = 1e-4);
    }
}

#[test]
fn test_slerp_same_input_is_identity() {
    let mut s = Samples::new();
    for _ in 0..N / 4 {
        let q = s.rotation();
        for alpha in [0.0, 0.1, 0.5, 0.9, 1.0] {
            let r = q.slerp(q, alpha);
            assert!(r.is_finite());
            assert_relative_eq!(r, q, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_slerp_stays_on_unit_sphere() {
    let mut s = Samples::new();
    for _ in 0..N / 4 {
        let a = s.rotation();
        let b = s.rotation();
        for alpha in [0.25, 0.5, 0.75] {
            assert_relative_eq!(a.slerp(b, alpha).length(), 1.0, epsilon = 1e-4);
        }
    }
}

#[test]
fn test_slerp_opposite_sign_stays_on_unit_sphere() {
    let mut s = Samples::new();
    for _ in 0..N / 4 {
        let q = s.rotation();
        let near_neg = (-q + Quat::from_xyzw(1e-4, 0.0, 0.0, 0.0)).normalize();
        for alpha in [0.0, 0.25, 0.5, 0.75, 1.0] {
            for r in [q.slerp(-q, alpha), q.slerp(near_neg, alpha)] {
                assert!(r.is_finite());
                assert_relative_eq!(r.length(), 1.0, epsilon = 1e-4);
            }
        }
    }
}

#[test]
fn test_slerp_sign_of_target_is_irrelevant() {
    let mut s = Samples::new();
    for _ in 0..N / 4 {
        let a = s.rotation();
        let b = s.rotation();
        let r = a.slerp(b, 0.4);
        let r_neg = a.slerp(-b, 0.4);
        assert_relative_eq!(r, r_neg, epsilon = 1e-4);
    }
}

#[test]
fn test_lerp_endpoints() {
    let mut s = Samples::new();
    for _ in 0..N / 4 {
        let a = s.rotation();
        let b = s.rotation();
        assert_relative_eq!(a.lerp(b, 0.0), a.normalize(), epsilon = 1e-6);
        assert_relative_eq!(a.lerp(b, 1.0), b.normalize(), epsilon = 1e-6);
    }
}

// Concrete scenarios

#[test]
fn test_rotate_forward_about_up_gives_left() {
    let m = Mat4::rotation(Vec3::new(0.0, 1.0, 0.0), 90.0);
    let v = m * Vec4::new(0.0, 0.0, -1.0, 0.0);
    assert_relative_eq!(v.xyz(), Vec3::new(-1.0, 0.0, 0.0), epsilon = 1e-6);
}

#[test]
fn test_ortho_box_corner() {
    let corner = Vec4::new(1.0, 1.0, 1.0, 1.0);
    let neg = Mat4::orthographic_with_depth(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0, DepthRange::NegOneToOne);
    assert_eq!(neg * corner, corner);
    let zero = Mat4::orthographic_with_depth(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0, DepthRange::ZeroToOne);
    let clip = zero * corner;
    assert_eq!(clip, corner);
    assert_eq!(clip.z(), 1.0);
    // The build-time policy agrees with one of the two
    assert_eq!(Mat4::orthographic(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0) * corner, corner);
}

#[test]
fn test_look_at_eye_maps_to_origin() {
    let eye = Vec3::new(0.0, 0.0, 5.0);
    let view = Mat4::look_at(eye, Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(view * Vec4::from_xyz_w(eye, 1.0), Vec4::new(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn test_identity_and_zero() {
    assert_eq!(Mat4::IDENTITY * Mat4::IDENTITY, Mat4::IDENTITY);
    assert_eq!(Mat4::ZERO + Mat4::IDENTITY, Mat4::IDENTITY);
}
