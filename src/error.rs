//! Error taxonomy for the meshing core.
//!
//! Every stage returns `Result<Mesh, MeshError>` rather than panicking on bad
//! data; panics are reserved for invariants the type system already proves.

use thiserror::Error;

use crate::mesh::GroupId;

/// Errors produced by the meshing pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
  /// Malformed grid, dangling vertex reference, or an empty group that still
  /// has active elements.
  #[error("invalid input: {0}")]
  InvalidInput(String),

  /// The Slicer could not triangulate a sliced polygon because its boundary
  /// self-intersects. Callers should run an external repairer first.
  #[error("non-manifold input in group {group:?}: {message}")]
  NonManifoldInput { group: GroupId, message: String },

  /// Triangles below the area threshold survived the Collapser's bounded
  /// collapse loop.
  #[error("degenerate triangle persisted after collapse in group {group:?}, element {element}")]
  DegenerateAfterCollapse { group: GroupId, element: usize },

  /// Post-smoothing check found a triangle crossing a grid plane.
  #[error("smoothing broke the no-crossed-cells invariant in group {group:?}, element {element}")]
  SmoothingBrokeInvariant { group: GroupId, element: usize },

  /// A coordinate fell outside the grid's enlarged bounding box.
  #[error("coordinate outside grid domain: {0:?}")]
  DomainError([f64; 3]),
}

/// Convenience alias used throughout the crate.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_carries_group_and_element() {
    let err = MeshError::DegenerateAfterCollapse {
      group: GroupId(3),
      element: 7,
    };
    let msg = err.to_string();
    assert!(msg.contains('3'));
    assert!(msg.contains('7'));
  }
}
