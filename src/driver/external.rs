//! Non-core collaborators the drivers delegate to. This crate ships no
//! concrete implementation of any of these beyond the Slicer's
//! `FanTriangulator`; callers supply a Reader/Writer/Repairer/Manifolder
//! that fits their file formats and geometry kernel.

use crate::error::MeshResult;
use crate::mesh::Mesh;

pub use crate::slicer::{ConstrainedTriangulator, FanTriangulator};

/// Produces a `Mesh` with a bound `Grid` and at least one `Group` of
/// triangles.
pub trait MeshReader {
  fn read(&self) -> MeshResult<Mesh>;
}

/// Consumes a `Mesh` whose coordinates are absolute.
pub trait MeshWriter {
  fn write(&self, mesh: &Mesh) -> MeshResult<()>;
}

/// Fills holes, stitches, and resolves non-manifold edges in a volume mesh
/// before it is handed to the core pipeline; fails if the mesh
/// self-intersects.
pub trait Repairer {
  fn repair(&self, mesh: Mesh) -> MeshResult<Mesh>;
}

/// Given a volume mesh, returns the closed surface mesh of its boundary.
pub trait Manifolder {
  fn extract_surface(&self, volume_mesh: &Mesh) -> MeshResult<Mesh>;
}
