//! Mapping between n-dimensional parametric positions and flat storage offsets.
//!
//! The default scheme is a mixed-radix encoding where the first axis varies
//! fastest: the multiplier for axis `i` is the product of the sizes of all
//! lower axes. For sizes `(6, 7, 11)` the position `(2, 1, 5)` maps to
//! `2 + 1 * 6 + 5 * 6 * 7`.

use smallvec::{SmallVec, smallvec};

/// Strategy turning a parametric position into a storage offset.
///
/// Any `Fn(&[usize], &[usize]) -> usize` is a mapper, so a plain function can
/// be handed to [`ManagerBuilder::mapper`](crate::ManagerBuilder::mapper).
/// Implementations must be bijections between the coordinate box defined by
/// `size` and `0..product(size)`.
pub trait IndexMapper {
    /// Storage offset of `coords` in a grid with the given `size`.
    fn index(&self, size: &[usize], coords: &[usize]) -> usize;
}

/// The default mixed-radix mapper. See [`find_index`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MixedRadix;

impl IndexMapper for MixedRadix {
    fn index(&self, size: &[usize], coords: &[usize]) -> usize {
        find_index(size, coords)
    }
}

impl<F> IndexMapper for F
where
    F: Fn(&[usize], &[usize]) -> usize,
{
    fn index(&self, size: &[usize], coords: &[usize]) -> usize {
        self(size, coords)
    }
}

/// Flat index of `coords` in a grid of `size`, first axis fastest.
///
/// No bounds checking happens here. Coordinates beyond `size.len()` use the
/// full product of `size` as their multiplier. The arithmetic saturates, so
/// a position outside the grid never wraps back to an offset inside it.
pub fn find_index(size: &[usize], coords: &[usize]) -> usize {
    let mut idx: usize = 0;
    let mut stride: usize = 1;
    for (axis, &c) in coords.iter().enumerate() {
        idx = idx.saturating_add(c.saturating_mul(stride));
        stride = stride.saturating_mul(size.get(axis).copied().unwrap_or(1));
    }
    idx
}

/// Inverse of [`find_index`]: parametric position of flat `index`.
///
/// Indices past the end of the grid wrap on the last axis, mirroring the
/// unchecked forward mapping.
pub fn unravel_index(size: &[usize], index: usize) -> SmallVec<[usize; 4]> {
    let mut coords = smallvec![0; size.len()];
    let mut rest = index;
    for (axis, &s) in size.iter().enumerate() {
        if axis + 1 == size.len() || s == 0 {
            coords[axis] = rest;
            break;
        }
        coords[axis] = rest % s;
        rest /= s;
    }
    coords
}
