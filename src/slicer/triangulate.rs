//! The Slicer's retriangulation collaborator. A real constrained-Delaunay
//! implementation is expected to be supplied by callers that need to
//! retriangulate non-convex patches; this crate ships only the fan
//! triangulator the Slicer itself needs, since every polygon it produces by
//! clipping a triangle against axis-aligned half-spaces is convex.

use crate::error::{MeshError, MeshResult};
use crate::geometry::{predicates, Coordinate};

/// External retriangulation collaborator, given a polygon boundary and an
/// optional set of constraint edges (index pairs into `polygon`).
pub trait ConstrainedTriangulator {
  fn triangulate(
    &self,
    polygon: &[Coordinate],
    constraint_edges: &[(usize, usize)],
  ) -> MeshResult<Vec<[usize; 3]>>;
}

/// Triangulates a convex polygon by fanning out from vertex 0. Ignores
/// `constraint_edges`: a convex polygon's boundary already satisfies any
/// edge constraint a caller could sensibly add.
#[derive(Default, Debug, Clone, Copy)]
pub struct FanTriangulator;

impl ConstrainedTriangulator for FanTriangulator {
  fn triangulate(
    &self,
    polygon: &[Coordinate],
    _constraint_edges: &[(usize, usize)],
  ) -> MeshResult<Vec<[usize; 3]>> {
    if polygon.len() < 3 {
      return Err(MeshError::NonManifoldInput {
        group: crate::mesh::GroupId(0),
        message: format!("cannot triangulate a polygon with {} vertices", polygon.len()),
      });
    }
    if predicates::are_collinear(polygon) {
      return Err(MeshError::NonManifoldInput {
        group: crate::mesh::GroupId(0),
        message: "polygon boundary is degenerate (collinear)".to_string(),
      });
    }

    let mut triangles = Vec::with_capacity(polygon.len() - 2);
    for i in 1..polygon.len() - 1 {
      triangles.push([0, i, i + 1]);
    }
    Ok(triangles)
  }
}

#[cfg(test)]
#[path = "triangulate_test.rs"]
mod triangulate_test;
