//! Core data model: `Element`, `Group`, `Mesh`.
//!
//! Elements reference coordinates by index into the mesh's coordinate
//! vector, not by pointer — an arena-style ownership model that survives
//! reallocation, the same convention the teacher crate uses for its
//! `OctreeNode`/`TaskId` value handles and its flat `Vec<Vertex>` +
//! `Vec<u32>` index buffers.

use smallvec::SmallVec;

/// Index into a mesh's coordinate vector.
pub type VertexId = usize;

/// Identifies the material/group an element belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u32);

/// The dimensionality of an element, independent of vertex count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
  Node,
  Line,
  Surface,
  Volume,
}

/// A mesh primitive: an ordered vertex-id list plus its kind. `Surface`
/// distinguishes triangle (3 vertices) from quad (4) by cardinality;
/// `Volume` elements in this crate are always tetrahedra (4 vertices).
/// Vertex order is significant for orientation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
  pub vertices: SmallVec<[VertexId; 4]>,
  pub kind: ElementKind,
}

impl Element {
  pub fn node(v: VertexId) -> Self {
    Self {
      vertices: SmallVec::from_slice(&[v]),
      kind: ElementKind::Node,
    }
  }

  pub fn line(a: VertexId, b: VertexId) -> Self {
    Self {
      vertices: SmallVec::from_slice(&[a, b]),
      kind: ElementKind::Line,
    }
  }

  pub fn triangle(a: VertexId, b: VertexId, c: VertexId) -> Self {
    Self {
      vertices: SmallVec::from_slice(&[a, b, c]),
      kind: ElementKind::Surface,
    }
  }

  pub fn quad(a: VertexId, b: VertexId, c: VertexId, d: VertexId) -> Self {
    Self {
      vertices: SmallVec::from_slice(&[a, b, c, d]),
      kind: ElementKind::Surface,
    }
  }

  pub fn tetrahedron(a: VertexId, b: VertexId, c: VertexId, d: VertexId) -> Self {
    Self {
      vertices: SmallVec::from_slice(&[a, b, c, d]),
      kind: ElementKind::Volume,
    }
  }

  pub fn is_triangle(&self) -> bool {
    self.kind == ElementKind::Surface && self.vertices.len() == 3
  }

  pub fn is_quad(&self) -> bool {
    self.kind == ElementKind::Surface && self.vertices.len() == 4
  }

  pub fn is_line(&self) -> bool {
    self.kind == ElementKind::Line
  }

  pub fn is_node(&self) -> bool {
    self.kind == ElementKind::Node
  }

  /// Vertex ids sorted ascending. Two elements covering the same vertex set
  /// compare equal under this key regardless of orientation.
  pub fn sorted_vertices(&self) -> SmallVec<[VertexId; 4]> {
    let mut v = self.vertices.clone();
    v.sort_unstable();
    v
  }
}

/// An ordered sequence of elements sharing a material/group id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
  pub id: GroupId,
  pub elements: Vec<Element>,
}

impl Group {
  pub fn new(id: GroupId) -> Self {
    Self {
      id,
      elements: Vec::new(),
    }
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
