//! Axis-aligned bounding boxes.

use crate::{
    error::{Error, Result},
    point::Point,
};

/// Smallest axis-aligned box containing every point, as `(min, max)`.
///
/// The dimension is taken from the first point; every other point must match
/// it.
pub fn evaluate_bounding_box<P: AsRef<[f64]>>(points: &[P]) -> Result<(Point, Point)> {
    let dimension = points.first().ok_or(Error::EmptyInput)?.as_ref().len();

    let mut bbmin = Point::new(vec![f64::INFINITY; dimension]);
    let mut bbmax = Point::new(vec![f64::NEG_INFINITY; dimension]);
    for (index, pt) in points.iter().enumerate() {
        let pt = pt.as_ref();
        if pt.len() != dimension {
            return Err(Error::Dimension {
                index,
                expected: dimension,
                got: pt.len(),
            });
        }
        for (i, &c) in pt.iter().enumerate() {
            if c < bbmin.0[i] {
                bbmin.0[i] = c;
            }
            if c > bbmax.0[i] {
                bbmax.0[i] = c;
            }
        }
    }
    Ok((bbmin, bbmax))
}
