//! Storage backends for control points and their attached data.
//!
//! A backend supplies three operations: allocating the containers, filling
//! them from a full point list, and writing a single point. Every operation
//! has a default body, so a custom backend overrides only the parts it needs.

use std::collections::BTreeMap;

use smallvec::{SmallVec, smallvec};

use crate::{
    error::{Error, Result},
    point::Point,
};

/// Declared attributes: name to number of values per point.
pub type Attributes = BTreeMap<String, usize>;

/// Attached data for every declared attribute.
pub type DataStore = BTreeMap<String, DataArray>;

/// Per-point data for one attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum DataArray {
    /// One value per point.
    Scalar(Vec<f64>),
    /// A fixed-length vector per point.
    Vector {
        /// Values per point.
        arity: usize,
        /// One vector per point, each of length `arity`.
        values: Vec<SmallVec<[f64; 4]>>,
    },
}

impl DataArray {
    /// Zero-initialised array for `count` points. Arity 0 and 1 both store
    /// scalars.
    pub fn zeroed(count: usize, arity: usize) -> Self {
        if arity > 1 {
            Self::Vector {
                arity,
                values: vec![smallvec![0.0; arity]; count],
            }
        } else {
            Self::Scalar(vec![0.0; count])
        }
    }

    /// Number of points covered.
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(values) => values.len(),
            Self::Vector { values, .. } => values.len(),
        }
    }

    /// True if the array covers no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values per point.
    pub fn arity(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Vector { arity, .. } => *arity,
        }
    }

    /// Value stored for point `idx`.
    pub fn get(&self, idx: usize) -> Option<DataValue> {
        match self {
            Self::Scalar(values) => values.get(idx).copied().map(DataValue::Scalar),
            Self::Vector { values, .. } => values.get(idx).cloned().map(DataValue::Vector),
        }
    }
}

/// A single attached datum.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// Scalar datum, e.g. a weight.
    Scalar(f64),
    /// Vector datum, e.g. a normal.
    Vector(SmallVec<[f64; 4]>),
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<&[f64]> for DataValue {
    fn from(values: &[f64]) -> Self {
        Self::Vector(SmallVec::from_slice(values))
    }
}

impl From<Vec<f64>> for DataValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Vector(values.into())
    }
}

impl<const N: usize> From<[f64; N]> for DataValue {
    fn from(values: [f64; N]) -> Self {
        Self::Vector(values.iter().copied().collect())
    }
}

/// Allocation and assignment strategy used by
/// [`CpManager`](crate::CpManager).
pub trait StorageBackend {
    /// Allocate `count` empty point slots and zeroed data for every attribute.
    ///
    /// Every returned container must cover exactly `count` points; the
    /// manager rejects anything else on build and on reset.
    fn init(&self, count: usize, attrs: &Attributes) -> (Vec<Point>, DataStore) {
        let points = vec![Point::default(); count];
        let data = attrs
            .iter()
            .map(|(name, &arity)| (name.clone(), DataArray::zeroed(count, arity)))
            .collect();
        (points, data)
    }

    /// Write `points_in` into `out` position by position.
    ///
    /// Every element must have exactly `dim` coordinates. Validation stops at
    /// the first offending element; elements before it stay written.
    fn bulk_set(&self, points_in: &[&[f64]], dim: usize, out: &mut [Point]) -> Result<()> {
        for (idx, cpt) in points_in.iter().enumerate() {
            if cpt.len() != dim {
                return Err(Error::Dimension {
                    index: idx,
                    expected: dim,
                    got: cpt.len(),
                });
            }
            self.single_set(out, idx, cpt);
        }
        Ok(())
    }

    /// Store a copy of `point` at `idx`.
    fn single_set(&self, out: &mut [Point], idx: usize, point: &[f64]) {
        out[idx] = Point::from(point);
    }
}

/// Array-backed storage using every default operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultStorage;

impl StorageBackend for DefaultStorage {}
