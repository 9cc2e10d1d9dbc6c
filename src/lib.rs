//! Grid-conforming mesh generation for FDTD electromagnetic simulation.
//!
//! Turns an arbitrary triangle/line soup into a mesh whose every element
//! respects a rectilinear FDTD grid: sliced to one cell each, collapsed to
//! remove degenerate/duplicate geometry, and either smoothed/snapped for an
//! off-grid mesh or staircased onto exact grid corners for a fully
//! structured one. See [`driver`] for the two public entry points.

pub mod collapser;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod slicer;
pub mod smoother;
pub mod snapper;
pub mod structurer;

pub use driver::{build_offgrid_mesh, build_structured_mesh, Driver, OffgridDriver, OffgridOptions, StructuredDriver};
pub use error::{MeshError, MeshResult};
pub use geometry::{build_cartesian_grid, Axis, Cell, Coordinate, Grid, Surfel};
pub use mesh::{Element, ElementKind, Group, GroupId, Mesh, VertexId};
pub use smoother::SmootherOptions;
pub use snapper::SnapperOptions;
