//! Stateless helpers deriving orderings and neighbor structures from point
//! grids.

/// Axis-aligned bounding boxes.
pub mod bounds;
/// Neighbor records for surface grids.
pub mod quadtree;
/// Zig-zag, quad and transpose reorderings.
pub mod reorder;
/// Step size and sample count conversions.
pub mod sampling;

pub use bounds::evaluate_bounding_box;
pub use quadtree::{Neighborhood, make_quadtree};
pub use reorder::{make_quad, make_zigzag, transpose_grid};
pub use sampling::{compute_delta_from_sample_size, compute_sample_size_from_delta};
