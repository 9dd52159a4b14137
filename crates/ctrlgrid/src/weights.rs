//! Conversion between Cartesian control points plus weights and weighted
//! (homogeneous) control points used by rational geometry.

use crate::{
    error::{Error, Result},
    point::{Coords, Point},
};

/// Multiply every point by its weight and append the weight.
///
/// `(x, y, z)` with weight `w` becomes `(x*w, y*w, z*w, w)`. Passing `None`
/// uses a weight of 1 for every point, which lifts non-rational points into
/// the rational form.
pub fn combine_weights<P: AsRef<[f64]>>(points: &[P], weights: Option<&[f64]>) -> Result<Vec<Point>> {
    if let Some(weights) = weights
        && weights.len() != points.len()
    {
        return Err(Error::Count {
            expected: points.len(),
            got: weights.len(),
        });
    }
    let weight = |idx: usize| weights.map_or(1.0, |w| w[idx]);

    Ok(points
        .iter()
        .enumerate()
        .map(|(idx, pt)| {
            let w = weight(idx);
            let mut coords: Coords = pt.as_ref().iter().map(|c| c * w).collect();
            coords.push(w);
            Point::new(coords)
        })
        .collect())
}

/// Split weighted points into Cartesian points and their weights.
///
/// The last coordinate of each input is the weight; the others are divided
/// by it.
pub fn separate_weights<P: AsRef<[f64]>>(points: &[P]) -> Result<(Vec<Point>, Vec<f64>)> {
    let mut ctrlpts = Vec::with_capacity(points.len());
    let mut weights = Vec::with_capacity(points.len());
    for pt in points {
        let (&w, rest) = pt.as_ref().split_last().ok_or(Error::EmptyPoint)?;
        ctrlpts.push(Point::new(rest.iter().map(|c| c / w).collect::<Coords>()));
        weights.push(w);
    }
    Ok((ctrlpts, weights))
}
