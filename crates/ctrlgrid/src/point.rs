//! Fixed-length floating point tuples used for control points.

use std::{ops::Deref, vec::Vec};

use smallvec::SmallVec;

/// Inline storage for point coordinates. Homogeneous 3D points fit without
/// spilling to the heap.
pub type Coords = SmallVec<[f64; 4]>;

/// A control point: an ordered tuple of coordinates.
///
/// The default value has no coordinates and marks a slot that has not been
/// assigned yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point(pub Coords);

impl Point {
    /// Create a new `Point` from a backing vector.
    pub fn new(vec: impl Into<Coords>) -> Self {
        Self(vec.into())
    }

    /// Create a new `Point`, asserting the coordinate count matches `dimension`.
    pub fn new_with_dimension(dimension: usize, vec: impl Into<Coords>) -> Self {
        let coords = vec.into();
        debug_assert_eq!(
            coords.len(),
            dimension,
            "Point dimension mismatch: expected {dimension}, got {}",
            coords.len()
        );
        Self(coords)
    }

    /// Euclidean distance between two points of the same dimension.
    ///
    /// In debug builds a mismatched dimensionality triggers a `debug_assert!`.
    /// In release builds the distance is computed over the shared prefix.
    pub fn distance(&self, p2: &Self) -> f64 {
        debug_assert!(
            self.len() == p2.len(),
            "Point::distance called with differing dimensions: {} vs {}",
            self.len(),
            p2.len()
        );

        self.0
            .iter()
            .zip(p2.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// Return the point's coordinates as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Spatial dimension of the point. Zero for an unassigned slot.
    pub fn dimension(&self) -> usize {
        self.0.len()
    }
}

impl From<&[f64]> for Point {
    fn from(coords: &[f64]) -> Self {
        Self(SmallVec::from_slice(coords))
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self(coords.into())
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(coords: [f64; N]) -> Self {
        Self(coords.iter().copied().collect())
    }
}

impl From<Point> for Vec<f64> {
    fn from(val: Point) -> Self {
        val.0.to_vec()
    }
}

impl AsRef<[f64]> for Point {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl Deref for Point {
    type Target = [f64];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point() {
        let v = Point::new(vec![2.0, 2.0]);
        assert_eq!(v.len(), 2);
        assert_eq!(v.dimension(), 2);
        assert_eq!(Point::default().dimension(), 0);
    }

    #[test]
    fn conversions() {
        let a = Point::from([1.0, 2.0, 3.0]);
        let b = Point::from(&[1.0, 2.0, 3.0][..]);
        let c = Point::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(Vec::from(c), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn distance() {
        let a = Point::from([2.0, 2.0]);
        let b = Point::from([2.0, 1.0]);
        assert_eq!(a.distance(&b), 1.0);

        let a = Point::from([0.0, 0.0]);
        let b = Point::from([3.0, 4.0]);
        assert_eq!(a.distance(&b), 5.0);

        let a = Point::from([0.0, 2.0]);
        assert_eq!(a.distance(&a), 0.0);
    }
}
