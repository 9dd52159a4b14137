//! Control point management for spline curves, surfaces and volumes.
//!
//! [`CpManager`] stores control points in a flat array addressed by
//! parametric position, with optional per-point attributes such as weights or
//! normals. The index mapping and the storage operations are strategies that
//! can be replaced through [`ManagerBuilder`].
//!
//! The [`topology`] helpers turn flat or grid-shaped point lists into the
//! orderings and neighbor records consumed by geometric algorithms:
//!
//! - zig-zag and quad reorderings
//! - quadtree-like neighbor records with boundary extrapolation
//! - bounding boxes
//! - step size and sample count conversions
//!
//! ```
//! use ctrlgrid::{CpManager, extract_2d};
//!
//! # fn main() -> ctrlgrid::error::Result<()> {
//! let mut cm = CpManager::new(&[2, 2])?;
//! cm.set_points(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]])?;
//! assert_eq!(cm.pt(&[1, 1])?.as_slice(), &[1.0, 1.0]);
//!
//! extract_2d(&mut cm)?;
//! assert_eq!(cm.points_u().map(<[_]>::len), Some(4));
//! # Ok(())
//! # }
//! ```

/// Per-direction point lists derived from a manager.
pub mod axes;
/// Error types used across the crate.
pub mod error;
/// Parametric position to storage offset mapping.
pub mod index;
/// Vector helpers used for boundary extrapolation.
pub mod linalg;
/// The control point manager and its builder.
pub mod manager;
/// Control point type.
pub mod point;
/// Grid shape validation and named axis lookup.
pub mod shape;
/// Storage backends and attached data containers.
pub mod storage;
/// Grid reorderings, neighbor records and sampling helpers.
pub mod topology;
/// Rational weight packing.
pub mod weights;

pub use crate::{
    axes::{axis_points, extract_2d, extract_3d},
    error::{Error, Result},
    index::{IndexMapper, MixedRadix, find_index},
    manager::{CpManager, ManagerBuilder},
    point::Point,
    shape::Shape,
    storage::{DataArray, DataValue, DefaultStorage, StorageBackend},
};
