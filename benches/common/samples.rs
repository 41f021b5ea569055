use nalgebra::Vector2;
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Vector2::new({(random()-0.5)*i}, {(random()-0.5)*i})")
/// ```
pub static POINTS: Lazy<[Vector2<f64>; 10]> = Lazy::new(|| {
    [
        Vector2::new(0.0, 0.0),
        Vector2::new(-0.29734, 0.44984),
        Vector2::new(-0.52560, 0.42885),
        Vector2::new(1.42777, -0.02652),
        Vector2::new(1.98032, -0.67824),
        Vector2::new(0.44863, -0.91328),
        Vector2::new(-2.51139, -0.79100),
        Vector2::new(-3.10479, -0.59318),
        Vector2::new(-1.16022, -2.95591),
        Vector2::new(-1.07946, 0.78888),
    ]
});

pub static POLYGONS: Lazy<Polygons> = Lazy::new(Polygons::new);
#[allow(non_snake_case)]
pub struct Polygons {
    pub PAIRS: Vec<Vec<Vector2<f64>>>,
    pub SHORT: Vec<Vec<Vector2<f64>>>,
    pub LONG: Vec<Vec<Vector2<f64>>>,
}
impl Polygons {
    pub fn new() -> Polygons {
        let from_indices = |indices: &[usize]| -> Vec<Vector2<f64>> {
            indices.iter().map(|&i| POINTS[i]).collect()
        };
        Polygons {
            PAIRS: vec![
                from_indices(&[0, 1]),
                from_indices(&[2, 3]),
                from_indices(&[4, 5]),
                from_indices(&[6, 7]),
                from_indices(&[8, 9]),
            ],
            SHORT: vec![
                from_indices(&[0, 1, 2, 3]),
                from_indices(&[2, 3, 4, 5]),
                from_indices(&[4, 5, 6, 7]),
                from_indices(&[6, 7, 8, 9]),
                from_indices(&[1, 3, 5, 7]),
            ],
            LONG: vec![
                from_indices(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
                from_indices(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]),
                from_indices(&[0, 2, 4, 6, 8, 1, 3, 5, 7, 9]),
                from_indices(&[5, 0, 6, 1, 7, 2, 8, 3, 9, 4]),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec<Vector2<f64>>> {
        self.PAIRS
            .iter()
            .chain(self.SHORT.iter())
            .chain(self.LONG.iter())
    }
}
