//! Builds the "enlarged slicing grid" both drivers run the Slicer against,
//! and maps a mesh bound to it back down to the caller's original grid.

use crate::error::MeshResult;
use crate::geometry::Grid;
use crate::mesh::Mesh;

/// The extended dual of `grid`: every primal plane plus its midpoints and a
/// half-step margin outside each boundary. Gives the Slicer room to clip
/// triangles that straddle the caller's outermost cells without ever
/// producing a vertex outside the caller's domain once reduced back.
pub fn enlarged_grid(grid: &Grid) -> Grid {
  grid.extended_dual_grid()
}

/// Rebinds `mesh`'s coordinates, which are relative to `from`, so they
/// become relative to `to`, by converting through absolute space. `mesh.grid`
/// is replaced with `to` on return.
pub fn rebind_grid(mut mesh: Mesh, from: &Grid, to: &Grid) -> MeshResult<Mesh> {
  mesh.coordinates = mesh
    .coordinates
    .iter()
    .map(|&relative| {
      let absolute = from.relative_to_absolute(relative)?;
      to.absolute_to_relative(absolute)
    })
    .collect::<MeshResult<Vec<_>>>()?;
  mesh.grid = to.clone();
  Ok(mesh)
}

/// Rebinds `mesh`'s coordinates from `enlarged` (relative to that grid) down
/// to `original`, by converting through absolute space. `mesh.grid` is
/// replaced with `original` on return.
pub fn reduce_to_original_grid(mesh: Mesh, enlarged: &Grid, original: &Grid) -> MeshResult<Mesh> {
  rebind_grid(mesh, enlarged, original)
}
