//! Partitions a mesh's elements by the cell they occupy.
//!
//! Requires, as a precondition, that every element lies entirely within one
//! cell — true of any mesh that has passed through the Slicer, which splits
//! elements at cell boundaries.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::geometry::grid_tools::to_cell;
use crate::geometry::predicates::centroid;
use crate::geometry::{Cell, Coordinate, Grid};
use crate::mesh::types::{Element, VertexId};

/// Maps each grid cell to the indices of the elements (into some flat
/// element slice) that lie inside it.
pub struct CellElementMap {
  by_cell: HashMap<Cell, Vec<usize>>,
}

impl CellElementMap {
  /// Builds the map from an element slice, keying each element by the cell
  /// containing its vertex centroid.
  pub fn build(grid: &Grid, coordinates: &[Coordinate], elements: &[Element]) -> Self {
    let mut by_cell: HashMap<Cell, Vec<usize>> = HashMap::new();
    for (index, element) in elements.iter().enumerate() {
      let cell = element_cell(grid, coordinates, element);
      by_cell.entry(cell).or_default().push(index);
    }
    Self { by_cell }
  }

  pub fn elements_in(&self, cell: Cell) -> &[usize] {
    self.by_cell.get(&cell).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn cells(&self) -> impl Iterator<Item = &Cell> {
    self.by_cell.keys()
  }

  pub fn cell_count(&self) -> usize {
    self.by_cell.len()
  }
}

fn element_cell(grid: &Grid, coordinates: &[Coordinate], element: &Element) -> Cell {
  let points: SmallVec<[Coordinate; 4]> = element
    .vertices
    .iter()
    .map(|&v: &VertexId| coordinates[v])
    .collect();
  to_cell(grid, centroid(&points))
}

#[cfg(test)]
#[path = "cell_map_test.rs"]
mod cell_map_test;
