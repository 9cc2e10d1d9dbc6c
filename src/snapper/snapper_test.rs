use super::*;
use crate::geometry::{build_cartesian_grid, Coordinate};
use crate::mesh::GroupId;

#[test]
fn coordinate_within_forbidden_length_snaps_to_plane() {
  let grid = build_cartesian_grid(0.0, 3.0, 4).unwrap();
  let mut mesh = Mesh::new(grid);
  let a = mesh.push_coordinate(Coordinate::new(0.99, 0.5, 0.5));
  let b = mesh.push_coordinate(Coordinate::new(0.2, 0.5, 0.5));
  mesh.group_or_insert(GroupId(0)).elements.push(Element::line(a, b));

  let opts = SnapperOptions::default().with_forbidden_length(0.05);
  let out = snap(&mesh, &opts).unwrap();
  assert_eq!(out.coordinates[a].x(), 1.0);
}

#[test]
fn triangle_downgrades_to_line_when_two_vertices_coincide() {
  let grid = build_cartesian_grid(0.0, 3.0, 4).unwrap();
  let mut mesh = Mesh::new(grid);
  let a = mesh.push_coordinate(Coordinate::new(1.0, 0.0, 0.0));
  let b = mesh.push_coordinate(Coordinate::new(1.5, 0.5, 0.0));
  mesh.group_or_insert(GroupId(0)).elements.push(Element::triangle(a, a, b));

  let out = snap(&mesh, &SnapperOptions::default()).unwrap();
  assert_eq!(out.groups[0].elements.len(), 1);
  assert!(out.groups[0].elements[0].is_line());
}

#[test]
fn triangle_downgrades_to_node_when_all_vertices_coincide() {
  let grid = build_cartesian_grid(0.0, 3.0, 4).unwrap();
  let mut mesh = Mesh::new(grid);
  let a = mesh.push_coordinate(Coordinate::new(1.0, 0.0, 0.0));
  mesh.group_or_insert(GroupId(0)).elements.push(Element::triangle(a, a, a));

  let out = snap(&mesh, &SnapperOptions::default()).unwrap();
  assert!(out.groups[0].elements[0].is_node());
}

#[test]
fn coordinate_near_an_interior_edge_point_snaps_there_instead_of_the_plane() {
  let grid = build_cartesian_grid(0.0, 3.0, 4).unwrap();
  let mut mesh = Mesh::new(grid);
  // With 3 interior sample points per cell edge (quarters at 0.25/0.5/0.75),
  // 0.74 is much closer to the 0.75 sample than to either bounding plane.
  let a = mesh.push_coordinate(Coordinate::new(0.74, 0.5, 0.5));
  mesh.group_or_insert(GroupId(0)).elements.push(Element::node(a));

  let opts = SnapperOptions::default().with_forbidden_length(0.05).with_edge_points(3);
  let out = snap(&mesh, &opts).unwrap();
  assert_eq!(out.coordinates[a].x(), 0.75);
}

#[test]
fn zero_forbidden_length_disables_snapping() {
  let grid = build_cartesian_grid(0.0, 3.0, 4).unwrap();
  let mut mesh = Mesh::new(grid);
  let a = mesh.push_coordinate(Coordinate::new(0.99, 0.5, 0.5));
  mesh.group_or_insert(GroupId(0)).elements.push(Element::node(a));

  let out = snap(&mesh, &SnapperOptions::default()).unwrap();
  assert_eq!(out.coordinates[a].x(), 0.99);
}
