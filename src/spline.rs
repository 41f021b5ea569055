//! Sampling whole catmull rom splines through arbitrarily many control points.
//!
//! A spline through `n` control points consists of `n - 1` cubic spans, each
//! running between two consecutive control points. The first and last control
//! point are duplicated internally so the curve starts and ends exactly on
//! them.

use nalgebra::{RealField, Vector2};
use smallvec::SmallVec;

use crate::catmull_rom::CatmullRomSegment;

/// Number of samples generated per span when the caller has no own preference.
pub const DEFAULT_SAMPLES_PER_SPAN: usize = 20;

/// Samples a catmull rom spline through `control_points` into a polyline.
///
/// Each of the `n - 1` spans contributes `samples_per_span` points at the
/// parameters `t = 0, 1/s, ..., (s-1)/s`; after the last span the final
/// control point is appended exactly once. The result therefore holds
/// `(n - 1) * samples_per_span + 1` points in control point order.
///
/// Returns `None` if there are fewer than two control points, since a single
/// point spans no curve. The caller's slice is only read, never touched.
///
/// This function assumes `samples_per_span` to be at least 1 but doesn't check it.
pub fn sample_spline<T: RealField>(
    control_points: &[Vector2<T>],
    samples_per_span: usize,
) -> Option<Vec<Vector2<T>>> {
    let n = control_points.len();
    if n < 2 {
        return None;
    }

    // Duplicate both endpoints into a fresh buffer so every real control
    // point sits inside a full four point window.
    let mut extended: SmallVec<[Vector2<T>; 16]> = SmallVec::with_capacity(n + 2);
    extended.push(control_points[0].clone());
    extended.extend(control_points.iter().cloned());
    extended.push(control_points[n - 1].clone());

    let delta_t = {
        let mut samples = T::zero();
        for _ in 0..samples_per_span {
            samples += T::one();
        }
        T::one() / samples
    };

    let mut spline = Vec::with_capacity((n - 1) * samples_per_span + 1);
    for window in extended.windows(4) {
        let segment = CatmullRomSegment::from_points(
            window[0].clone(),
            window[1].clone(),
            window[2].clone(),
            window[3].clone(),
        );
        let mut step = T::zero();
        for _ in 0..samples_per_span {
            spline.push(segment.evaluate(delta_t.clone() * step.clone()));
            step += T::one();
        }
    }
    spline.push(control_points[n - 1].clone());

    Some(spline)
}

/// Sums the euclidean distances between consecutive points of a polyline.
///
/// Zero for polylines of fewer than two points.
pub fn polyline_length<T: RealField>(points: &[Vector2<T>]) -> T {
    let mut length = T::zero();
    for window in points.windows(2) {
        length += (&window[1] - &window[0]).norm();
    }
    length
}
