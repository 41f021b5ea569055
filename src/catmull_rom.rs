//! A wrapper around [`nalgebra::Matrix2x4`] interpreting it as a single catmull rom span.

use nalgebra::{Matrix2x4, Matrix4, RealField, Vector2, Vector4};

/// Wrapper around [`nalgebra::Matrix2x4`] interpreting it as a single catmull rom span.
///
/// The four control points are stored as the matrix' columns.
/// The span runs from the second column to the third one;
/// the two outer columns only shape its tangents.
pub struct CatmullRomSegment<T: RealField>(pub Matrix2x4<T>);

impl<T: RealField> CatmullRomSegment<T> {
    /// Constructs a segment from its four control points in order.
    pub fn from_points(
        p1: Vector2<T>,
        p2: Vector2<T>,
        p3: Vector2<T>,
        p4: Vector2<T>,
    ) -> CatmullRomSegment<T> {
        CatmullRomSegment(Matrix2x4::from_columns(&[p1, p2, p3, p4]))
    }

    /// Get the point on the span at position `t`.
    ///
    /// `t = 0` yields the second control point and `t = 1` the third one.
    /// This method assumes `t` to be between 0 and 1 but doesn't check it.
    pub fn evaluate(&self, t: T) -> Vector2<T> {
        let t2 = t.clone() * t.clone();
        let t3 = t2.clone() * t.clone();
        let powers = Vector4::new(T::one(), t, t2, t3);
        &self.0 * (catmull_rom_matrix() * powers)
    }

    /// Computes the span's tangent vector at `t`
    /// by evaluating the basis' derivative.
    ///
    /// *The resulting vector is not normalized!*
    pub fn tangent(&self, t: T) -> Vector2<T> {
        let one = T::one();
        let two = one.clone() + one.clone();
        let three = two.clone() + one.clone();
        let powers = Vector4::new(
            T::zero(),
            one,
            two * t.clone(),
            three * t.clone() * t,
        );
        &self.0 * (catmull_rom_matrix() * powers)
    }

    /// Computes the span's normal vector at `t`
    ///
    /// *The resulting vector is not normalized!*
    pub fn normal(&self, t: T) -> Vector2<T> {
        let tangent = self.tangent(t);
        Vector2::new(T::zero() - tangent.y.clone(), tangent.x.clone())
    }
}

/// Computes the characteristic matrix of the cubic catmull rom basis
///
/// Each row holds one basis polynomial's coefficents in ascending powers of `t`:
///
/// ```text
/// b1 = 0.5 * (  -t^3 + 2t^2 - t    )
/// b2 = 0.5 * ( 3t^3 - 5t^2     + 2 )
/// b3 = 0.5 * (-3t^3 + 4t^2 + t    )
/// b4 = 0.5 * (  t^3 -  t^2        )
/// ```
///
/// Multiplying it with the power vector `(1, t, t^2, t^3)` yields the four
/// blend weights for a control point window.
pub fn catmull_rom_matrix<T: RealField>() -> Matrix4<T> {
    let zero = T::zero();
    let one = T::one();
    let two = one.clone() + one.clone();
    let half = one.clone() / two.clone();

    Matrix4::new(
        zero.clone(), -half.clone(),               one.clone(),           -half.clone(),
        one.clone(),   zero.clone(), -(two.clone() + half.clone()), one.clone() + half.clone(),
        zero.clone(),  half.clone(),               two.clone(),  -(one.clone() + half.clone()),
        zero.clone(),  zero,                      -half.clone(),           half,
    )
}
