use super::*;

#[test]
fn quad_and_tetrahedron_share_cardinality_but_not_kind() {
  let quad = Element::quad(0, 1, 2, 3);
  let tet = Element::tetrahedron(0, 1, 2, 3);
  assert_eq!(quad.vertices.len(), tet.vertices.len());
  assert!(quad.is_quad());
  assert!(!tet.is_quad());
  assert_eq!(tet.kind, ElementKind::Volume);
}

#[test]
fn triangle_is_not_a_quad() {
  let tri = Element::triangle(0, 1, 2);
  assert!(tri.is_triangle());
  assert!(!tri.is_quad());
}

#[test]
fn sorted_vertices_ignores_orientation() {
  let a = Element::triangle(2, 0, 1);
  let b = Element::triangle(0, 1, 2);
  assert_eq!(a.sorted_vertices(), b.sorted_vertices());
}

#[test]
fn group_starts_empty() {
  let g = Group::new(GroupId(3));
  assert_eq!(g.id, GroupId(3));
  assert!(g.elements.is_empty());
}
