//! Error type shared by the manager, the storage backends and the topology
//! helpers.

use std::result;

use thiserror::Error;

/// Errors raised by control point management and grid utilities.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A manager needs at least one parametric dimension.
    #[error("at least one parametric dimension is required")]
    EmptyShape,
    /// A parametric size was zero.
    #[error("size along parametric axis {axis} must be positive, got {size}")]
    InvalidSize {
        /// Offending axis.
        axis: usize,
        /// Offending size.
        size: usize,
    },
    /// The product of the parametric sizes does not fit in `usize`.
    #[error("total number of points overflows for sizes {sizes:?}")]
    Overflow {
        /// Requested sizes.
        sizes: Vec<usize>,
    },
    /// The n-dimensional index length differs from the number of parametric
    /// dimensions.
    #[error("the n-dimensional indices must be equal to number of parametric dimensions ({expected}), got {got}")]
    Arity {
        /// Number of parametric dimensions.
        expected: usize,
        /// Number of indices supplied.
        got: usize,
    },
    /// A resolved storage index is outside the container.
    #[error("index {index} is out of range for {count} points")]
    OutOfRange {
        /// Resolved linear index.
        index: usize,
        /// Number of stored points.
        count: usize,
    },
    /// A point sequence has the wrong number of elements.
    #[error("number of points must be {expected}, got {got}")]
    Count {
        /// Required number of elements.
        expected: usize,
        /// Supplied number of elements.
        got: usize,
    },
    /// A point does not match the established spatial dimension.
    #[error("input[{index}] not valid: must be a {expected}-dimensional point, got {got} coordinates")]
    Dimension {
        /// Position of the offending point.
        index: usize,
        /// Established spatial dimension.
        expected: usize,
        /// Length of the offending point.
        got: usize,
    },
    /// A point without coordinates cannot establish a spatial dimension.
    #[error("points must have at least one coordinate")]
    EmptyPoint,
    /// Attached data was set for a key that was never declared.
    #[error("invalid key: {0}")]
    UnknownKey(String),
    /// A scalar was written to a vector attribute or the other way around.
    #[error("attribute '{key}' expects {expected} values per point")]
    DataKind {
        /// Attribute name.
        key: String,
        /// Declared arity of the attribute.
        expected: usize,
    },
    /// A vector value is longer than the attribute arity.
    #[error("attribute '{key}' holds {expected} values per point, got {got}")]
    DataLength {
        /// Attribute name.
        key: String,
        /// Declared arity of the attribute.
        expected: usize,
        /// Supplied vector length.
        got: usize,
    },
    /// A named parametric size lookup used a name outside the axis table.
    #[error("no parametric attribute named '{0}'")]
    UnknownAttribute(String),
    /// A named parametric size lookup refers to an axis this shape lacks.
    #[error("'{name}' is not available for {pdimension} parametric dimension(s)")]
    MissingAxis {
        /// Requested attribute name.
        name: String,
        /// Number of parametric dimensions of the shape.
        pdimension: usize,
    },
    /// An operation that derives its dimension from the input got nothing.
    #[error("input point set is empty")]
    EmptyInput,
    /// A reordering row width of zero.
    #[error("row width must be positive")]
    RowWidth,
    /// A sample size too small to define a step.
    #[error("sample size must be at least 2, got {0}")]
    SampleSize(usize),
    /// A step that is not a positive finite number.
    #[error("delta must be positive and finite, got {0}")]
    Delta(f64),
}

/// Result alias using the crate error.
pub type Result<T> = result::Result<T, Error>;
