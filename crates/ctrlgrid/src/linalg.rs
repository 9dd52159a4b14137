//! The two vector operations the topology helpers need.

use crate::point::{Coords, Point};

/// Vector pointing from `from` to `to`.
pub fn vector_between(from: &[f64], to: &[f64]) -> Coords {
    debug_assert_eq!(from.len(), to.len(), "vector endpoints differ in dimension");
    from.iter().zip(to).map(|(a, b)| b - a).collect()
}

/// Move `point` by `vector`. Both must have the same length.
pub fn translate(point: &[f64], vector: &[f64]) -> Point {
    Point::new_with_dimension(
        point.len(),
        point
            .iter()
            .zip(vector)
            .map(|(p, v)| p + v)
            .collect::<Coords>(),
    )
}
