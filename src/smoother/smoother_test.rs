use super::*;
use crate::geometry::{build_cartesian_grid, Coordinate};
use crate::mesh::{Element, GroupId};

#[test]
fn triangle_far_from_any_plane_converges_without_crossing_cells() {
  // A large single cell so any snap axis still keeps all vertices within
  // its closure.
  let grid = build_cartesian_grid(0.0, 10.0, 2).unwrap();
  let mut mesh = Mesh::new(grid);
  let a = mesh.push_coordinate(Coordinate::new(0.2, 0.2, 0.2));
  let b = mesh.push_coordinate(Coordinate::new(0.8, 0.2, 0.2));
  let c = mesh.push_coordinate(Coordinate::new(0.2, 0.8, 0.2));
  mesh.group_or_insert(GroupId(0)).elements.push(Element::triangle(a, b, c));

  let out = smooth(&mesh, &SmootherOptions::default());
  assert!(out.is_ok());
}

#[test]
fn singular_vertices_never_move() {
  let grid = build_cartesian_grid(0.0, 10.0, 2).unwrap();
  let mut mesh = Mesh::new(grid);
  let a = mesh.push_coordinate(Coordinate::new(0.0, 0.0, 0.0));
  let b = mesh.push_coordinate(Coordinate::new(5.0, 0.0, 0.0));
  let c = mesh.push_coordinate(Coordinate::new(0.0, 5.0, 0.0));
  let d = mesh.push_coordinate(Coordinate::new(0.0, 0.0, 5.0));
  // Two triangles meeting at vertex `a` with a sharp dihedral fold: `a` is
  // singular and must be pinned by every migration pass.
  mesh
    .group_or_insert(GroupId(0))
    .elements
    .push(Element::triangle(a, b, c));
  mesh.groups[0].elements.push(Element::triangle(a, c, d));

  let before = mesh.coordinates[a];
  if let Ok(out) = smooth(&mesh, &SmootherOptions::default()) {
    // `a` survives fusing (nothing else shares its position), so its
    // coordinate id is stable across clean_coords renumbering only in the
    // trivial case where no earlier ids were dropped; check by value
    // instead.
    assert!(out.coordinates.contains(&before));
  }
}
