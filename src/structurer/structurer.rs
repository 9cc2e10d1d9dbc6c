//! Maps a sliced, collapsed mesh to purely grid-aligned quads, lines and
//! nodes.

use std::collections::HashSet;

use smallvec::SmallVec;

use crate::collapser::redundancy::{
  clean_coords, fuse_coords, remove_overlapped_dimension_one_and_lower_elements_and_equivalent_surfaces,
};
use crate::error::{MeshError, MeshResult};
use crate::geometry::grid_tools::{get_touching_cells, to_cell};
use crate::geometry::predicates::centroid;
use crate::geometry::{Cell, Coordinate, Grid};
use crate::mesh::{Element, ElementKind, Group, Mesh, VertexId};
use crate::structurer::staircase::{corner_coordinate, staircase_corners};
use crate::structurer::triangle::staircase_triangle;

/// Staircases every line and triangle of `input` onto the grid.
pub fn structure(input: &Mesh) -> MeshResult<Mesh> {
  check_single_cell_precondition(input)?;

  let mut mesh = Mesh::new(input.grid.clone());
  for group in &input.groups {
    let mut out_group = Group::new(group.id);
    for element in &group.elements {
      structure_element(input, &mut mesh, &mut out_group, element);
    }
    mesh.groups.push(out_group);
  }

  fuse_coords(&mut mesh);
  clean_coords(&mut mesh);
  remove_overlapped_dimension_one_and_lower_elements_and_equivalent_surfaces(&mut mesh);
  Ok(mesh)
}

/// Staircases only the elements whose cell is in `cell_set`; elements
/// outside it are kept as-is, except that any of their vertices touching a
/// staircased cell is itself snapped onto that cell's nearest corner so the
/// two regions still share coordinates exactly.
///
/// Gap-filling when `cell_set`'s boundary is not closed along grid lines is
/// undefined in the source this crate is modeled on; rather than guess a
/// filler, such inputs are rejected: if a boundary vertex snaps onto a
/// corner the selected side never actually emits, that corner is a hole in
/// the seam between the two regions.
pub fn get_selective_mesh(input: &Mesh, cell_set: &HashSet<Cell>) -> MeshResult<Mesh> {
  check_single_cell_precondition(input)?;

  let mut mesh = Mesh::new(input.grid.clone());
  for group in &input.groups {
    let mut out_group = Group::new(group.id);

    for element in &group.elements {
      if cell_set.contains(&element_cell(&input.grid, &input.coordinates, element)) {
        structure_element(input, &mut mesh, &mut out_group, element);
      }
    }

    let selected_keys: HashSet<(u64, u64, u64)> = out_group
      .elements
      .iter()
      .flat_map(|e| e.vertices.iter().map(|&v| mesh.coordinates[v].exact_key()))
      .collect();

    for element in &group.elements {
      if cell_set.contains(&element_cell(&input.grid, &input.coordinates, element)) {
        continue;
      }
      let mut gap_at = None;
      let ids: SmallVec<[VertexId; 4]> = element
        .vertices
        .iter()
        .map(|&v| {
          let c = input.coordinates[v];
          let touches_selected = get_touching_cells(&input.grid, c).into_iter().any(|cell| cell_set.contains(&cell));
          if !touches_selected {
            return mesh.push_coordinate(c);
          }
          let corner = corner_coordinate(crate::structurer::staircase::nearest_corner(&input.grid, c));
          if !selected_keys.contains(&corner.exact_key()) {
            gap_at = Some(corner);
          }
          mesh.push_coordinate(corner)
        })
        .collect();
      if let Some(corner) = gap_at {
        return Err(MeshError::InvalidInput(format!(
          "group {} selective cell set has an unclosed boundary at corner {:?}",
          group.id.0, corner
        )));
      }
      out_group.elements.push(Element {
        vertices: ids,
        kind: element.kind,
      });
    }

    mesh.groups.push(out_group);
  }

  fuse_coords(&mut mesh);
  clean_coords(&mut mesh);
  remove_overlapped_dimension_one_and_lower_elements_and_equivalent_surfaces(&mut mesh);
  Ok(mesh)
}

fn structure_element(input: &Mesh, mesh: &mut Mesh, out_group: &mut Group, element: &Element) {
  match element.kind {
    ElementKind::Node => {
      let c = input.coordinates[element.vertices[0]];
      let id = mesh.push_coordinate(c);
      out_group.elements.push(Element::node(id));
    }
    ElementKind::Line => {
      let s = input.coordinates[element.vertices[0]];
      let e = input.coordinates[element.vertices[1]];
      push_path(mesh, out_group, &staircase_corners(&input.grid, s, e));
    }
    ElementKind::Surface if element.is_triangle() => {
      let vs = [
        input.coordinates[element.vertices[0]],
        input.coordinates[element.vertices[1]],
        input.coordinates[element.vertices[2]],
      ];
      let result = staircase_triangle(&input.grid, vs);

      if let Some(corner) = result.single_node {
        let id = mesh.push_coordinate(corner_coordinate(corner));
        out_group.elements.push(Element::node(id));
      }
      for quad in &result.quads {
        let ids: Vec<VertexId> = quad.iter().map(|&c| mesh.push_coordinate(corner_coordinate(c))).collect();
        out_group.elements.push(Element::quad(ids[0], ids[1], ids[2], ids[3]));
      }
      for &(a, b) in &result.lines {
        let ia = mesh.push_coordinate(corner_coordinate(a));
        let ib = mesh.push_coordinate(corner_coordinate(b));
        out_group.elements.push(Element::line(ia, ib));
      }
    }
    _ => {
      let ids: SmallVec<[VertexId; 4]> = element
        .vertices
        .iter()
        .map(|&v| mesh.push_coordinate(input.coordinates[v]))
        .collect();
      out_group.elements.push(Element {
        vertices: ids,
        kind: element.kind,
      });
    }
  }
}

fn push_path(mesh: &mut Mesh, group: &mut Group, path: &[[i64; 3]]) {
  if path.len() == 1 {
    let id = mesh.push_coordinate(corner_coordinate(path[0]));
    group.elements.push(Element::node(id));
    return;
  }
  for pair in path.windows(2) {
    let a = mesh.push_coordinate(corner_coordinate(pair[0]));
    let b = mesh.push_coordinate(corner_coordinate(pair[1]));
    group.elements.push(Element::line(a, b));
  }
}

fn element_cell(grid: &Grid, coordinates: &[Coordinate], element: &Element) -> Cell {
  let points: SmallVec<[Coordinate; 4]> = element.vertices.iter().map(|&v| coordinates[v]).collect();
  to_cell(grid, centroid(&points))
}

/// Every element with 2+ vertices must have a cell touching all of them;
/// otherwise the input was never sliced down to one cell per element.
fn check_single_cell_precondition(mesh: &Mesh) -> MeshResult<()> {
  for group in &mesh.groups {
    for (ei, element) in group.elements.iter().enumerate() {
      if element.vertices.len() < 2 {
        continue;
      }
      let mut common: Option<HashSet<Cell>> = None;
      for &v in &element.vertices {
        let touching: HashSet<Cell> = get_touching_cells(&mesh.grid, mesh.coordinates[v]).into_iter().collect();
        common = Some(match common {
          None => touching,
          Some(prev) => prev.intersection(&touching).copied().collect(),
        });
      }
      if common.map(|s| s.is_empty()).unwrap_or(true) {
        return Err(MeshError::InvalidInput(format!(
          "group {} element {ei} spans more than one cell; Structurer requires sliced input",
          group.id.0
        )));
      }
    }
  }
  Ok(())
}

#[cfg(test)]
#[path = "structurer_test.rs"]
mod structurer_test;
