//! Conversions between evaluation step size and sample count.
//!
//! The two functions are only approximate inverses: the sample count is
//! rounded down.

use crate::error::{Error, Result};

/// Step between `sample_size` evenly spaced samples of `domain`, relative to
/// a parametric range of `domain_range`.
pub fn compute_delta_from_sample_size(
    sample_size: usize,
    domain: (f64, f64),
    domain_range: f64,
) -> Result<f64> {
    if sample_size < 2 {
        return Err(Error::SampleSize(sample_size));
    }
    Ok((domain.1 - domain.0) / (domain_range * (sample_size - 1) as f64))
}

/// Number of samples produced by stepping a unit range by `delta`.
pub fn compute_sample_size_from_delta(delta: f64) -> Result<usize> {
    if !delta.is_finite() || delta <= 0.0 {
        return Err(Error::Delta(delta));
    }
    Ok((1.0 / delta).floor() as usize + 1)
}
