//! Patch boundary resampling: the precondition the per-patch migration
//! steps assume is that every grid-plane crossing along a patch's boundary
//! already has its own vertex. A freshly sliced-and-collapsed mesh already
//! satisfies this (every triangle was cut to one cell), but a patch handed
//! to the Smoother directly may not, so this runs unconditionally rather
//! than being skipped when the precondition looks already met.

use std::collections::HashMap;

use crate::geometry::{Axis, Coordinate};
use crate::mesh::{Element, Mesh, VertexId};

/// Repeatedly finds a boundary edge of `patch` that straddles an
/// axis-aligned integer plane and splits its owning triangle at the
/// crossing, until no boundary edge of the patch crosses a plane. `patch`
/// (indices into `mesh.groups[group_index].elements`) is extended in place
/// with the index of every new triangle created.
pub fn remesh_boundary(mesh: &mut Mesh, group_index: usize, patch: &mut Vec<usize>) {
  loop {
    let elements = &mesh.groups[group_index].elements;
    let crossing = boundary_edges(elements, patch).into_iter().find_map(|(element_idx, a, b)| {
      find_crossing(mesh.coordinates[a], mesh.coordinates[b]).map(|(axis, plane)| (element_idx, a, b, axis, plane))
    });
    let Some((element_idx, a, b, axis, plane)) = crossing else {
      return;
    };
    split_triangle_at_plane(mesh, group_index, patch, element_idx, a, b, axis, plane);
  }
}

/// Edges used by exactly one triangle of `patch`, paired with the owning
/// triangle's index into the group's element list.
fn boundary_edges(elements: &[Element], patch: &[usize]) -> Vec<(usize, VertexId, VertexId)> {
  let mut owners: HashMap<(VertexId, VertexId), Vec<usize>> = HashMap::new();
  for &idx in patch {
    let e = &elements[idx];
    if !e.is_triangle() {
      continue;
    }
    for i in 0..3 {
      let a = e.vertices[i];
      let b = e.vertices[(i + 1) % 3];
      let key = (a.min(b), a.max(b));
      owners.entry(key).or_default().push(idx);
    }
  }
  owners
    .into_iter()
    .filter(|(_, idxs)| idxs.len() == 1)
    .map(|((a, b), idxs)| (idxs[0], a, b))
    .collect()
}

/// The first axis-aligned integer plane strictly between `a` and `b`, if any.
fn find_crossing(a: Coordinate, b: Coordinate) -> Option<(Axis, f64)> {
  for axis in Axis::ALL {
    let (lo, hi) = (a.component(axis.index()), b.component(axis.index()));
    if (hi - lo).abs() < f64::EPSILON {
      continue;
    }
    let (min, max) = (lo.min(hi), lo.max(hi));
    let plane = min.ceil();
    if plane > min + 1e-9 && plane < max - 1e-9 {
      return Some((axis, plane));
    }
  }
  None
}

/// Replaces the triangle at `element_idx` that owns edge `(a, b)` with two
/// triangles meeting at the inserted crossing point, preserving the
/// original winding.
fn split_triangle_at_plane(
  mesh: &mut Mesh,
  group_index: usize,
  patch: &mut Vec<usize>,
  element_idx: usize,
  a: VertexId,
  b: VertexId,
  axis: Axis,
  plane: f64,
) {
  let ca = mesh.coordinates[a];
  let cb = mesh.coordinates[b];
  let t = (plane - ca.component(axis.index())) / (cb.component(axis.index()) - ca.component(axis.index()));
  let p = mesh.push_coordinate(ca.lerp(&cb, t));

  let element = mesh.groups[group_index].elements[element_idx].clone();
  let verts = &element.vertices;
  let pos_a = verts.iter().position(|&v| v == a).unwrap();
  let pos_b = verts.iter().position(|&v| v == b).unwrap();
  let third = (0..3).find(|&i| i != pos_a && i != pos_b).unwrap();
  let c = verts[third];

  // (x0, x1) is the edge in its original winding direction, so the split
  // keeps the same orientation instead of assuming `a` always comes first.
  let (x0, x1) = if pos_b == (pos_a + 1) % 3 { (a, b) } else { (b, a) };

  mesh.groups[group_index].elements[element_idx] = Element::triangle(x0, p, c);
  let new_idx = mesh.groups[group_index].elements.len();
  mesh.groups[group_index].elements.push(Element::triangle(p, x1, c));
  patch.push(new_idx);
}

#[cfg(test)]
#[path = "remesh_test.rs"]
mod remesh_test;
