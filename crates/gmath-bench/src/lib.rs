//! Shared input data for the gmath benchmarks.

use gmath::lanes::Lane4;
use gmath::{Mat4, Vec4};

/// `count` lane groups spread over a small range, `w` fixed at 1.
pub fn lane_samples(count: usize) -> Vec<Lane4> {
    (0..count)
        .map(|i| {
            let t = i as f32 * 0.001;
            [t, 1.0 - t, t * 0.5, 1.0]
        })
        .collect()
}

/// [`lane_samples`] as homogeneous points.
pub fn point_samples(count: usize) -> Vec<Vec4> {
    lane_samples(count).into_iter().map(Vec4::from_array).collect()
}

/// A typical projection matrix.
pub fn projection() -> Mat4 {
    Mat4::perspective(60.0, 1.5, 0.1, 100.0)
}
