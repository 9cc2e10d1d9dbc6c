use super::*;
use crate::geometry::build_cartesian_grid;
use crate::mesh::GroupId;

#[test]
fn flat_triangle_round_trips_to_a_surface_on_the_original_grid() {
  let grid = build_cartesian_grid(0.0, 2.0, 3).unwrap();
  let mut mesh = Mesh::new(grid);
  let a = mesh.push_coordinate(crate::geometry::Coordinate::new(0.1, 0.1, 0.0));
  let b = mesh.push_coordinate(crate::geometry::Coordinate::new(1.8, 0.1, 0.0));
  let c = mesh.push_coordinate(crate::geometry::Coordinate::new(0.1, 1.8, 0.0));
  mesh.group_or_insert(GroupId(0)).elements.push(crate::mesh::Element::triangle(a, b, c));

  let out = build_offgrid_mesh(&mesh, &OffgridOptions::default()).unwrap();
  assert!(out.element_count() >= 1);
  assert_eq!(out.grid.plane_count(crate::geometry::Axis::X), 3);
  for c in &out.coordinates {
    assert!(c.x() >= -1e-9 && c.x() <= 2.0 + 1e-9);
  }
}

#[test]
fn disabling_smoother_and_snapper_still_produces_a_valid_mesh() {
  let grid = build_cartesian_grid(0.0, 2.0, 3).unwrap();
  let mut mesh = Mesh::new(grid);
  let a = mesh.push_coordinate(crate::geometry::Coordinate::new(0.1, 0.1, 0.0));
  let b = mesh.push_coordinate(crate::geometry::Coordinate::new(1.8, 0.1, 0.0));
  let c = mesh.push_coordinate(crate::geometry::Coordinate::new(0.1, 1.8, 0.0));
  mesh.group_or_insert(GroupId(0)).elements.push(crate::mesh::Element::triangle(a, b, c));

  let opts = OffgridOptions::default().with_collapse_internal_points(false).with_snap(false);
  let out = build_offgrid_mesh(&mesh, &opts).unwrap();
  out.validate().unwrap();
}
