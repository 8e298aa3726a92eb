//! Tests for the optional serialization and byte-casting features.

#[cfg(feature = "serde")]
mod serde_tests {
    use gmath::{DepthRange, IVec3, Mat4, Quat, Vec3, Vec4};

    #[test]
    fn test_vec4_as_array() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0,4.0]");
        assert_eq!(serde_json::from_str::<Vec4>(&json).unwrap(), v);
    }

    #[test]
    fn test_round_trips() {
        let m = Mat4::look_at(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::UP);
        let back: Mat4 = serde_json::from_str(&serde_json::to_string(&m).unwrap()).unwrap();
        assert_eq!(back, m);

        let q = Quat::from_axis_angle(Vec3::UP, 30.0);
        let back: Quat = serde_json::from_str(&serde_json::to_string(&q).unwrap()).unwrap();
        assert_eq!(back, q);

        let i = IVec3::new(-1, 0, 7);
        let back: IVec3 = serde_json::from_str(&serde_json::to_string(&i).unwrap()).unwrap();
        assert_eq!(back, i);

        let json = serde_json::to_string(&DepthRange::ZeroToOne).unwrap();
        assert_eq!(json, "\"ZeroToOne\"");
    }
}

#[cfg(feature = "bytemuck")]
mod bytemuck_tests {
    use gmath::{Mat4, Vec3, Vec4};

    #[test]
    fn test_mat4_casts_to_column_floats() {
        let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&m));
        assert_eq!(floats.len(), 16);
        assert_eq!(&floats[12..], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(floats, &m.to_cols_array()[..]);
    }

    #[test]
    fn test_vec4_zeroable() {
        let v: Vec4 = bytemuck::Zeroable::zeroed();
        assert_eq!(v, Vec4::ZERO);
    }
}
