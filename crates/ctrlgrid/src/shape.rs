//! Parametric grid shape: per-axis sizes and the total point count.

use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Validated sizes of a control point grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    /// Number of points along each parametric axis.
    sizes: SmallVec<[usize; 4]>,
    /// Product of `sizes`, computed once with checked math.
    count: usize,
}

impl Shape {
    /// Attribute names resolving to the size along axes 0, 1 and 2.
    pub const AXIS_NAMES: [&'static str; 3] = ["size_u", "size_v", "size_w"];

    /// Build a shape from one or more positive sizes.
    pub fn new(sizes: &[usize]) -> Result<Self> {
        if sizes.is_empty() {
            return Err(Error::EmptyShape);
        }
        if let Some((axis, &size)) = sizes.iter().enumerate().find(|(_, s)| **s == 0) {
            return Err(Error::InvalidSize { axis, size });
        }
        let count = sizes
            .iter()
            .try_fold(1usize, |acc, &s| acc.checked_mul(s))
            .ok_or_else(|| Error::Overflow {
                sizes: sizes.to_vec(),
            })?;
        Ok(Self {
            sizes: SmallVec::from_slice(sizes),
            count,
        })
    }

    /// Sizes along every parametric axis.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Total number of points.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of parametric dimensions.
    pub fn pdimension(&self) -> usize {
        self.sizes.len()
    }

    /// Size along `axis`, if the shape has that many axes.
    pub fn size(&self, axis: usize) -> Option<usize> {
        self.sizes.get(axis).copied()
    }

    /// Size along the u direction.
    pub fn size_u(&self) -> Option<usize> {
        self.size(0)
    }

    /// Size along the v direction.
    pub fn size_v(&self) -> Option<usize> {
        self.size(1)
    }

    /// Size along the w direction.
    pub fn size_w(&self) -> Option<usize> {
        self.size(2)
    }

    /// Resolve a named size such as `"size_v"` through [`Self::AXIS_NAMES`].
    pub fn axis_size(&self, name: &str) -> Result<usize> {
        let axis = Self::AXIS_NAMES
            .iter()
            .position(|n| *n == name)
            .ok_or_else(|| Error::UnknownAttribute(name.to_string()))?;
        self.size(axis).ok_or_else(|| Error::MissingAxis {
            name: name.to_string(),
            pdimension: self.pdimension(),
        })
    }
}
