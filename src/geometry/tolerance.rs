//! Tolerance constants shared by every stage.
//!
//! These are part of the contract, not tuning knobs: the Slicer, Collapser,
//! Smoother and Structurer must all agree on what "on a grid plane" means.

/// Tolerance used by [`crate::geometry::grid_tools::approx_dir`] to decide
/// whether a relative coordinate component coincides with a grid plane.
pub const APPROX_DIR_TOLERANCE: f64 = 1e-12;

/// Tolerance used when comparing triangle normals for coplanarity /
/// near-collinearity checks.
pub const COPLANARITY_TOLERANCE: f64 = 1e-9;

/// Tolerance below which a vector's norm is treated as zero.
pub const NORM_TOLERANCE: f64 = 1e-13;

/// Returns true if `a` and `b` are equal within [`APPROX_DIR_TOLERANCE`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
  (a - b).abs() < APPROX_DIR_TOLERANCE
}
