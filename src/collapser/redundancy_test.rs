use super::*;
use crate::geometry::{build_cartesian_grid, Coordinate};
use crate::mesh::{GroupId, Mesh};

fn mesh_with(coords: Vec<Coordinate>, elements: Vec<Element>) -> Mesh {
  let grid = build_cartesian_grid(-10.0, 10.0, 2).unwrap();
  let mut mesh = Mesh::new(grid);
  mesh.coordinates = coords;
  mesh.group_or_insert(GroupId(0)).elements = elements;
  mesh
}

#[test]
fn fuse_coords_merges_duplicate_positions_to_smallest_id() {
  let coords = vec![
    Coordinate::new(0.0, 0.0, 0.0),
    Coordinate::new(1.0, 0.0, 0.0),
    Coordinate::new(0.0, 0.0, 0.0), // duplicate of 0
  ];
  let mut mesh = mesh_with(coords, vec![Element::line(1, 2)]);
  fuse_coords(&mut mesh);
  assert_eq!(mesh.groups[0].elements[0].vertices.as_slice(), &[1, 0]);
}

#[test]
fn fuse_coords_drops_elements_that_collapse_to_repeated_vertices() {
  let coords = vec![Coordinate::new(0.0, 0.0, 0.0), Coordinate::new(0.0, 0.0, 0.0)];
  let mut mesh = mesh_with(coords, vec![Element::line(0, 1)]);
  fuse_coords(&mut mesh);
  assert!(mesh.groups[0].elements.is_empty());
}

#[test]
fn clean_coords_drops_unused_and_renumbers_densely() {
  let coords = vec![
    Coordinate::new(0.0, 0.0, 0.0),
    Coordinate::new(1.0, 0.0, 0.0), // unused
    Coordinate::new(2.0, 0.0, 0.0),
  ];
  let mut mesh = mesh_with(coords, vec![Element::line(0, 2)]);
  clean_coords(&mut mesh);
  assert_eq!(mesh.coordinates.len(), 2);
  assert_eq!(mesh.groups[0].elements[0].vertices.as_slice(), &[0, 1]);
}

#[test]
fn remove_repeated_elements_ignores_triangle_rotation() {
  let coords = vec![
    Coordinate::new(0.0, 0.0, 0.0),
    Coordinate::new(1.0, 0.0, 0.0),
    Coordinate::new(0.0, 1.0, 0.0),
  ];
  let mut mesh = mesh_with(
    coords,
    vec![Element::triangle(0, 1, 2), Element::triangle(1, 2, 0)],
  );
  remove_repeated_elements(&mut mesh);
  assert_eq!(mesh.groups[0].elements.len(), 1);
}

#[test]
fn remove_repeated_elements_keeps_distinct_orientation_for_lines() {
  let coords = vec![Coordinate::new(0.0, 0.0, 0.0), Coordinate::new(1.0, 0.0, 0.0)];
  let mut mesh = mesh_with(coords, vec![Element::line(0, 1), Element::line(1, 0)]);
  remove_repeated_elements(&mut mesh);
  assert_eq!(mesh.groups[0].elements.len(), 2);
  remove_repeated_elements_ignoring_orientation(&mut mesh);
  assert_eq!(mesh.groups[0].elements.len(), 1);
}

#[test]
fn collapse_degenerate_triangle_snaps_mid_vertex_onto_nearer_endpoint() {
  // Nearly collinear: b sits almost on the segment a-c.
  let coords = vec![
    Coordinate::new(0.0, 0.0, 0.0),
    Coordinate::new(1.0, 1e-9, 0.0),
    Coordinate::new(2.0, 0.0, 0.0),
  ];
  let mut mesh = mesh_with(coords, vec![Element::triangle(0, 1, 2)]);
  let result = collapse_coords_in_line_degenerate_triangles(&mut mesh, 1e-6);
  assert!(result.is_ok());
  // the degenerate triangle should have been cleaned away entirely
  assert!(mesh.groups[0].elements.is_empty() || mesh.groups[0].elements.iter().all(|e| !e.is_triangle()));
}

#[test]
fn overlapped_quad_absorbs_its_boundary_line() {
  let coords = vec![
    Coordinate::new(0.0, 0.0, 0.0),
    Coordinate::new(1.0, 0.0, 0.0),
    Coordinate::new(1.0, 1.0, 0.0),
    Coordinate::new(0.0, 1.0, 0.0),
  ];
  let mut mesh = mesh_with(
    coords,
    vec![Element::quad(0, 1, 2, 3), Element::line(0, 1)],
  );
  remove_overlapped_dimension_one_and_lower_elements_and_equivalent_surfaces(&mut mesh);
  assert_eq!(mesh.groups[0].elements.len(), 1);
  assert!(mesh.groups[0].elements[0].is_quad());
}

#[test]
fn overlapped_duplicate_lines_keep_lexicographically_smaller_direction_sum() {
  let coords = vec![Coordinate::new(0.0, 0.0, 0.0), Coordinate::new(1.0, 1.0, 1.0)];
  let mut mesh = mesh_with(coords, vec![Element::line(0, 1), Element::line(1, 0)]);
  remove_overlapped_dimension_one_and_lower_elements_and_equivalent_surfaces(&mut mesh);
  assert_eq!(mesh.groups[0].elements.len(), 1);
}
