//! Geometry and grid primitives: tolerances, cell/coordinate conversion,
//! and the triangle predicates the rest of the pipeline builds on.

pub mod coordinate;
pub mod grid;
pub mod grid_tools;
pub mod predicates;
pub mod tolerance;

pub use coordinate::{Coordinate, QuantizedKey};
pub use grid::{build_cartesian_grid, linspace, Axis, Cell, Grid, Surfel};
