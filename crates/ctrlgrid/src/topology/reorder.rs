//! Reorderings of flat point grids.

use crate::error::{Error, Result};

/// Reorder `points` into a zig-zag (boustrophedon) path.
///
/// The input is split into rows of `row_width`; even rows are kept, odd rows
/// are reversed, so consecutive output elements stay adjacent:
///
/// ```text
///  ------->>-------|
///  |------<<-------|
///  |------>>-------|
///  -------<<-------|
/// ```
///
/// A trailing partial row follows the same alternation.
pub fn make_zigzag<T: Clone>(points: &[T], row_width: usize) -> Result<Vec<T>> {
    if row_width == 0 {
        return Err(Error::RowWidth);
    }
    let mut out = Vec::with_capacity(points.len());
    for (row, chunk) in points.chunks(row_width).enumerate() {
        if row % 2 == 0 {
            out.extend_from_slice(chunk);
        } else {
            out.extend(chunk.iter().rev().cloned());
        }
    }
    Ok(out)
}

/// Reorder a `size_u` x `size_v` grid into a two-pass quad mesh path.
///
/// The first pass is the zig-zag over rows of `size_v`, reversed. The second
/// pass walks the orthogonal direction: for each of the `size_v` rows it
/// collects `points[row + col * size_v]` for every column, alternating
/// forward and reverse starting forward. The result holds both passes, twice
/// the input length.
pub fn make_quad<T: Clone>(points: &[T], size_u: usize, size_v: usize) -> Result<Vec<T>> {
    check_grid(points.len(), size_u, size_v)?;

    let mut out = make_zigzag(points, size_v)?;
    out.reverse();
    out.reserve(points.len());

    for row in 0..size_v {
        let column = (0..size_u).map(|col| points[row + col * size_v].clone());
        if row % 2 == 0 {
            out.extend(column);
        } else {
            let mut column: Vec<T> = column.collect();
            column.reverse();
            out.extend(column);
        }
    }
    Ok(out)
}

/// Swap the parametric directions of a u-fastest `size_u` x `size_v` grid.
///
/// Element `(u, v)` of the input becomes element `(v, u)` of a
/// `size_v` x `size_u` grid.
pub fn transpose_grid<T: Clone>(points: &[T], size_u: usize, size_v: usize) -> Result<Vec<T>> {
    check_grid(points.len(), size_u, size_v)?;
    let mut out = Vec::with_capacity(points.len());
    for u in 0..size_u {
        for v in 0..size_v {
            out.push(points[u + v * size_u].clone());
        }
    }
    Ok(out)
}

/// Ensure `len` matches a `size_u` x `size_v` grid with no empty direction.
pub(super) fn check_grid(len: usize, size_u: usize, size_v: usize) -> Result<()> {
    if let Some(axis) = [size_u, size_v].iter().position(|&s| s == 0) {
        return Err(Error::InvalidSize { axis, size: 0 });
    }
    let expected = size_u.checked_mul(size_v).ok_or_else(|| Error::Overflow {
        sizes: vec![size_u, size_v],
    })?;
    if len != expected {
        return Err(Error::Count { expected, got: len });
    }
    Ok(())
}
