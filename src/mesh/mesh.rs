//! The top-level `Mesh`: a grid, a coordinate arena, and the groups of
//! elements indexing into it.

use crate::error::{MeshError, MeshResult};
use crate::geometry::{Coordinate, Grid};
use crate::mesh::types::{Group, GroupId, VertexId};

/// `Mesh = (Grid, Coordinates, Groups)`. Coordinates are stored once and
/// referenced by index from every element in every group; nothing in a
/// `Mesh` holds a coordinate by value after construction.
#[derive(Clone, Debug)]
pub struct Mesh {
  pub grid: Grid,
  pub coordinates: Vec<Coordinate>,
  pub groups: Vec<Group>,
}

impl Mesh {
  pub fn new(grid: Grid) -> Self {
    Self {
      grid,
      coordinates: Vec::new(),
      groups: Vec::new(),
    }
  }

  /// Appends a coordinate to the arena, returning its id.
  pub fn push_coordinate(&mut self, c: Coordinate) -> VertexId {
    self.coordinates.push(c);
    self.coordinates.len() - 1
  }

  pub fn group(&self, id: GroupId) -> Option<&Group> {
    self.groups.iter().find(|g| g.id == id)
  }

  pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
    self.groups.iter_mut().find(|g| g.id == id)
  }

  /// Returns the group with `id`, inserting an empty one at the end if
  /// absent.
  pub fn group_or_insert(&mut self, id: GroupId) -> &mut Group {
    if self.groups.iter().position(|g| g.id == id).is_none() {
      self.groups.push(Group::new(id));
    }
    let idx = self.groups.iter().position(|g| g.id == id).unwrap();
    &mut self.groups[idx]
  }

  pub fn element_count(&self) -> usize {
    self.groups.iter().map(|g| g.elements.len()).sum()
  }

  /// Checks every element's vertex ids are in range for the coordinate
  /// arena. Does not check geometric validity; see the Collapser's
  /// postcondition checks for that.
  pub fn validate(&self) -> MeshResult<()> {
    for group in &self.groups {
      for element in &group.elements {
        for &v in &element.vertices {
          if v >= self.coordinates.len() {
            return Err(MeshError::InvalidInput(format!(
              "group {} references vertex {v} but the mesh has {} coordinates",
              group.id.0,
              self.coordinates.len()
            )));
          }
        }
      }
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "mesh_test.rs"]
mod mesh_test;
