//! Quadtree-like neighbor records for surface control point grids.
//!
//! Despite the name this is not a recursive subdivision: every grid cell gets
//! one record holding its own point followed by its east, north, west and
//! south neighbors. Geometric operations that need a local frame around each
//! control point consume these records.

use smallvec::SmallVec;

use super::reorder::check_grid;
use crate::{
    error::Result,
    linalg::{translate, vector_between},
    point::Point,
};

/// A cell point followed by up to four neighbors.
pub type Neighborhood = SmallVec<[Point; 5]>;

/// Build one [`Neighborhood`] per cell of a `size_u` x `size_v` grid.
///
/// Cell `(u, v)` is `points[v + u * size_v]`, the v-fastest layout that
/// [`make_quad`](super::make_quad) also reads. Pass a manager's u-fastest
/// storage through [`transpose_grid`](super::transpose_grid) first. Records
/// are emitted with `u` varying fastest and list the cell point, then the
/// neighbors at `u + 1`, `v + 1`, `u - 1` and `v - 1`.
///
/// A neighbor outside the grid is omitted unless `extrapolate` is set, in
/// which case it is replaced by the cell point moved by the vector from the
/// opposite neighbor to the cell point. Along a direction with a single cell
/// there is no opposite neighbor and nothing is extrapolated.
pub fn make_quadtree(
    points: &[Point],
    size_u: usize,
    size_v: usize,
    extrapolate: bool,
) -> Result<Vec<Neighborhood>> {
    check_grid(points.len(), size_u, size_v)?;
    let at = move |u: usize, v: usize| &points[v + u * size_v];

    let mut out = Vec::with_capacity(points.len());
    for v in 0..size_v {
        for u in 0..size_u {
            let center = at(u, v);
            let east = (u + 1 < size_u).then(|| at(u + 1, v));
            let north = (v + 1 < size_v).then(|| at(u, v + 1));
            let west = u.checked_sub(1).map(|w| at(w, v));
            let south = v.checked_sub(1).map(|s| at(u, s));

            let mut cell = Neighborhood::new();
            cell.push(center.clone());
            for (side, opposite) in [(east, west), (north, south), (west, east), (south, north)] {
                match (side, opposite) {
                    (Some(p), _) => cell.push(p.clone()),
                    (None, Some(o)) if extrapolate => cell.push(mirror_step(center, o)),
                    (None, _) => {}
                }
            }
            out.push(cell);
        }
    }
    Ok(out)
}

/// Extend the step `opposite -> center` one more time past `center`.
fn mirror_step(center: &Point, opposite: &Point) -> Point {
    let step = vector_between(opposite, center);
    translate(center, &step)
}
