//! Axis aligned bounding boxes around point sets.

use nalgebra::{RealField, Vector2};

/// Axis aligned box spanned by a `min` and a `max` corner.
///
/// Useful for callers which have to size a canvas or view box around a
/// sampled curve.
pub struct BoundingBox<T: RealField> {
    /// Corner with the smallest coordinates along both axes
    pub min: Vector2<T>,
    /// Corner with the largest coordinates along both axes
    pub max: Vector2<T>,
}

impl<T: RealField> BoundingBox<T> {
    /// Constructs the smallest box containing every point in `points`.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[Vector2<T>]) -> Option<BoundingBox<T>> {
        let (first, rest) = points.split_first()?;
        let mut min = first.clone();
        let mut max = first.clone();
        for p in rest {
            if p.x < min.x {
                min.x = p.x.clone();
            }
            if p.y < min.y {
                min.y = p.y.clone();
            }
            if p.x > max.x {
                max.x = p.x.clone();
            }
            if p.y > max.y {
                max.y = p.y.clone();
            }
        }
        Some(BoundingBox { min, max })
    }

    /// Checks whether `point` lies inside the box, borders included.
    pub fn contains(&self, point: &Vector2<T>) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }

    /// The box' extent along both axes.
    pub fn size(&self) -> Vector2<T> {
        &self.max - &self.min
    }
}
