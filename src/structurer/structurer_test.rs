use std::collections::HashSet;

use super::*;
use crate::geometry::{build_cartesian_grid, Cell, Coordinate};
use crate::mesh::GroupId;

#[test]
fn diagonal_line_staircases_into_three_lines() {
  let grid = build_cartesian_grid(0.0, 2.0, 3).unwrap();
  let mut mesh = Mesh::new(grid);
  let a = mesh.push_coordinate(Coordinate::new(0.1, 0.1, 0.1));
  let b = mesh.push_coordinate(Coordinate::new(0.9, 0.9, 0.9));
  mesh.group_or_insert(GroupId(0)).elements.push(Element::line(a, b));

  let out = structure(&mesh).unwrap();
  assert_eq!(out.element_count(), 3);
  assert!(out.groups[0].elements.iter().all(Element::is_line));
}

#[test]
fn flat_triangle_staircases_into_one_quad() {
  let grid = build_cartesian_grid(0.0, 2.0, 3).unwrap();
  let mut mesh = Mesh::new(grid);
  let a = mesh.push_coordinate(Coordinate::new(0.4, 0.2, 0.0));
  let b = mesh.push_coordinate(Coordinate::new(0.9, 0.9, 0.0));
  let c = mesh.push_coordinate(Coordinate::new(0.2, 0.6, 0.0));
  mesh.group_or_insert(GroupId(0)).elements.push(Element::triangle(a, b, c));

  let out = structure(&mesh).unwrap();
  assert_eq!(out.element_count(), 1);
  assert!(out.groups[0].elements[0].is_quad());
}

#[test]
fn rejects_a_triangle_spanning_more_than_one_cell() {
  let grid = build_cartesian_grid(0.0, 3.0, 4).unwrap();
  let mut mesh = Mesh::new(grid);
  let a = mesh.push_coordinate(Coordinate::new(0.2, 0.2, 0.2));
  let b = mesh.push_coordinate(Coordinate::new(1.8, 0.2, 0.2));
  let c = mesh.push_coordinate(Coordinate::new(0.2, 0.8, 0.2));
  mesh.group_or_insert(GroupId(0)).elements.push(Element::triangle(a, b, c));

  let err = structure(&mesh).unwrap_err();
  assert!(matches!(err, MeshError::InvalidInput(_)));
}

#[test]
fn selective_mode_only_staircases_the_selected_cell() {
  let grid = build_cartesian_grid(0.0, 3.0, 4).unwrap();
  let mut mesh = Mesh::new(grid);
  let a = mesh.push_coordinate(Coordinate::new(0.2, 0.2, 0.0));
  let b = mesh.push_coordinate(Coordinate::new(0.8, 0.2, 0.0));
  let c = mesh.push_coordinate(Coordinate::new(0.2, 0.8, 0.0));
  let d = mesh.push_coordinate(Coordinate::new(2.2, 2.2, 2.2));
  let e = mesh.push_coordinate(Coordinate::new(2.8, 2.2, 2.2));
  let f = mesh.push_coordinate(Coordinate::new(2.2, 2.8, 2.2));
  let group = mesh.group_or_insert(GroupId(0));
  group.elements.push(Element::triangle(a, b, c));
  group.elements.push(Element::triangle(d, e, f));

  let mut cell_set = HashSet::new();
  cell_set.insert(Cell::new(0, 0, 0));

  let out = get_selective_mesh(&mesh, &cell_set).unwrap();
  assert_eq!(out.groups[0].elements.iter().filter(|el| el.is_quad()).count(), 1);
  assert_eq!(out.groups[0].elements.iter().filter(|el| el.is_triangle()).count(), 1);
}

#[test]
fn selective_mode_rejects_an_unclosed_boundary() {
  let grid = build_cartesian_grid(0.0, 3.0, 4).unwrap();
  let mut mesh = Mesh::new(grid);
  // Sits exactly on the shared plane between cell (0,0,0) and cell (1,0,0).
  let a = mesh.push_coordinate(Coordinate::new(1.0, 0.5, 0.5));
  let b = mesh.push_coordinate(Coordinate::new(1.5, 0.5, 0.5));
  mesh.group_or_insert(GroupId(0)).elements.push(Element::line(a, b));

  let mut cell_set = HashSet::new();
  cell_set.insert(Cell::new(0, 0, 0));

  let err = get_selective_mesh(&mesh, &cell_set).unwrap_err();
  assert!(matches!(err, MeshError::InvalidInput(_)));
}
