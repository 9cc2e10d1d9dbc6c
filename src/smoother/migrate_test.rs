use super::*;

#[test]
fn edge_collapse_snaps_both_near_axes() {
  let coords = vec![Coordinate::new(0.95, 1.05, 0.5)];
  let updates = collapse_points_on_cell_edges(&coords, &[0], |_| false);
  assert_eq!(updates, vec![(0, Coordinate::new(1.0, 1.0, 0.5))]);
}

#[test]
fn edge_collapse_ignores_singular_vertices() {
  let coords = vec![Coordinate::new(0.95, 1.05, 0.5)];
  let updates = collapse_points_on_cell_edges(&coords, &[0], |_| true);
  assert!(updates.is_empty());
}

#[test]
fn face_collapse_snaps_single_near_axis_only() {
  let coords = vec![Coordinate::new(0.95, 0.5, 0.5)];
  let updates = collapse_points_on_cell_faces(&coords, &[0], |_| false);
  assert_eq!(updates, vec![(0, Coordinate::new(1.0, 0.5, 0.5))]);
}

#[test]
fn interior_points_always_migrate_to_some_bound() {
  let coords = vec![Coordinate::new(0.5, 0.5, 0.5)];
  let updates = collapse_interior_points_to_bound(&coords, &[0]);
  assert_eq!(updates.len(), 1);
  let (_, c) = updates[0];
  assert!(c.x() == 0.0 || c.x() == 1.0 || c.y() == 0.0 || c.y() == 1.0 || c.z() == 0.0 || c.z() == 1.0);
}

#[test]
fn feature_edge_projects_onto_segment_between_singular_vertices() {
  let coords = vec![Coordinate::new(0.0, 0.0, 0.0), Coordinate::new(0.0, 0.0, 1.0), Coordinate::new(0.15, 0.2, 0.5)];
  let elements = vec![Element::triangle(0, 1, 2)];
  let updates = collapse_points_on_feature_edges(&coords, &[2], &elements, |v| v == 0 || v == 1);
  assert_eq!(updates.len(), 1);
  let (v, p) = updates[0];
  assert_eq!(v, 2);
  assert!((p.x() - 0.0).abs() < 1e-9);
  assert!((p.y() - 0.0).abs() < 1e-9);
  assert!((p.z() - 0.5).abs() < 1e-9);
}

#[test]
fn feature_edges_empty_when_no_singular_pair_shares_a_triangle_edge() {
  let coords = vec![Coordinate::new(0.15, 0.2, 0.5)];
  let updates = collapse_points_on_feature_edges(&coords, &[0], &[], |_| false);
  assert!(updates.is_empty());
}

#[test]
fn contour_pass_snaps_boundary_vertex_within_tolerance() {
  let mut coords = vec![
    Coordinate::new(0.0, 0.0, 0.0),
    Coordinate::new(1.05, 0.0, 0.0),
    Coordinate::new(0.5, 1.0, 0.0),
  ];
  let elements = vec![Element::triangle(0, 1, 2)];
  collapse_points_on_contour(&mut coords, &elements, 0.1);
  assert_eq!(coords[1].x(), 1.0);
}
