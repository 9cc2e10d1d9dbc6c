//! Mesh cleanup primitives shared by the Collapser, Smoother and Structurer:
//! coordinate fusing/compaction and duplicate/overlapped element removal.

use std::collections::{BTreeSet, HashMap};

use crate::geometry::predicates::{area, is_degenerate};
use crate::mesh::{Element, ElementKind, Mesh, VertexId};

/// Replaces every vertex id with the smallest id among all vertices that
/// currently share its coordinate, then drops elements that degenerated
/// into repeated vertices (e.g. a line whose two ends fused together).
pub fn fuse_coords(mesh: &mut Mesh) {
  let mut by_position: HashMap<(u64, u64, u64), VertexId> = HashMap::new();
  let mut canonical: Vec<VertexId> = (0..mesh.coordinates.len()).collect();
  for (id, coord) in mesh.coordinates.iter().enumerate() {
    let key = coord.exact_key();
    match by_position.get(&key) {
      Some(&existing) => canonical[id] = existing.min(canonical[existing]),
      None => {
        by_position.insert(key, id);
      }
    }
  }

  for group in &mut mesh.groups {
    for element in &mut group.elements {
      for v in element.vertices.iter_mut() {
        *v = canonical[*v];
      }
    }
  }

  remove_elements_with_condition(mesh, |e| has_repeated_vertices(e));
}

fn has_repeated_vertices(e: &Element) -> bool {
  let unique: BTreeSet<VertexId> = e.vertices.iter().copied().collect();
  unique.len() != e.vertices.len()
}

/// Removes coordinates no element references and renumbers remaining ids
/// densely, preserving relative order.
pub fn clean_coords(mesh: &mut Mesh) {
  let mut used = vec![false; mesh.coordinates.len()];
  for group in &mesh.groups {
    for element in &group.elements {
      for &v in &element.vertices {
        used[v] = true;
      }
    }
  }

  let mut remap = vec![usize::MAX; mesh.coordinates.len()];
  let mut compacted = Vec::with_capacity(mesh.coordinates.len());
  for (old_id, &is_used) in used.iter().enumerate() {
    if is_used {
      remap[old_id] = compacted.len();
      compacted.push(mesh.coordinates[old_id]);
    }
  }
  mesh.coordinates = compacted;

  for group in &mut mesh.groups {
    for element in &mut group.elements {
      for v in element.vertices.iter_mut() {
        *v = remap[*v];
      }
    }
  }
}

/// Removes every element in every group for which `condition` returns true.
pub fn remove_elements_with_condition(mesh: &mut Mesh, condition: impl Fn(&Element) -> bool) {
  for group in &mut mesh.groups {
    group.elements.retain(|e| !condition(e));
  }
}

/// Two triangles/quads are repeated iff their vertex-id sets match
/// regardless of rotation; two lines/nodes are repeated only if their
/// vertex lists match exactly (orientation preserved).
pub fn remove_repeated_elements(mesh: &mut Mesh) {
  remove_repeated_elements_impl(mesh, false)
}

/// As [`remove_repeated_elements`], but also ignores line orientation.
pub fn remove_repeated_elements_ignoring_orientation(mesh: &mut Mesh) {
  remove_repeated_elements_impl(mesh, true)
}

fn remove_repeated_elements_impl(mesh: &mut Mesh, ignore_orientation: bool) {
  for group in &mut mesh.groups {
    let mut seen: HashMap<Vec<VertexId>, usize> = HashMap::new();
    let mut keep = vec![true; group.elements.len()];
    for (idx, element) in group.elements.iter().enumerate() {
      let key = repeated_key(element, ignore_orientation);
      if seen.contains_key(&key) {
        keep[idx] = false;
      } else {
        seen.insert(key, idx);
      }
    }
    let mut it = keep.iter();
    group.elements.retain(|_| *it.next().unwrap());
  }
}

fn repeated_key(e: &Element, ignore_orientation: bool) -> Vec<VertexId> {
  if ignore_orientation {
    let mut v: Vec<VertexId> = e.vertices.iter().copied().collect();
    v.sort_unstable();
    return v;
  }
  let mut v: Vec<VertexId> = e.vertices.iter().copied().collect();
  if v.len() > 2 {
    let min_pos = v
      .iter()
      .enumerate()
      .min_by_key(|(_, &val)| val)
      .map(|(i, _)| i)
      .unwrap_or(0);
    v.rotate_left(min_pos);
  }
  v
}

/// Finds, in each triangle's vertex triple, the pair of vertices separated
/// by the smallest combined distance to the third vertex, and snaps the
/// third ("mid") vertex onto the nearer of the two. Iterates (fuse, clean)
/// between passes up to a bounded maximum while any triangle remains below
/// `area_threshold`.
///
/// Returns `Err` with the (group index, element index) of the first
/// triangle still below threshold once the iteration cap is hit.
pub fn collapse_coords_in_line_degenerate_triangles(
  mesh: &mut Mesh,
  area_threshold: f64,
) -> Result<(), (usize, usize)> {
  const MAX_ITERATIONS: usize = 1000;

  for _ in 0..MAX_ITERATIONS {
    let mut found = false;
    for group in &mut mesh.groups {
      for element in &mut group.elements {
        if !element.is_triangle() {
          continue;
        }
        let v = &element.vertices;
        let (a, b, c) = (mesh.coordinates[v[0]], mesh.coordinates[v[1]], mesh.coordinates[v[2]]);
        if !is_degenerate(a, b, c, area_threshold) {
          continue;
        }
        found = true;

        let pts = [a, b, c];
        let mut sum_of_distances = [0.0; 3];
        for d in 0..3 {
          for dd in [1usize, 2] {
            sum_of_distances[d] += (pts[d] - pts[(d + dd) % 3]).norm();
          }
        }
        let mid = sum_of_distances
          .iter()
          .enumerate()
          .min_by(|a, b| a.1.partial_cmp(b.1).unwrap())
          .map(|(i, _)| i)
          .unwrap();
        let ext1 = (mid + 1) % 3;
        let ext2 = (mid + 2) % 3;
        let target = if (pts[mid] - pts[ext1]).norm() < (pts[mid] - pts[ext2]).norm() {
          v[ext1]
        } else {
          v[ext2]
        };
        mesh.coordinates[v[mid]] = mesh.coordinates[target];
      }
    }

    fuse_coords(mesh);
    clean_coords(mesh);

    if !found {
      break;
    }
  }

  for (gi, group) in mesh.groups.iter().enumerate() {
    for (ei, element) in group.elements.iter().enumerate() {
      if element.is_node() || element.is_line() {
        continue;
      }
      let v = &element.vertices;
      let a = area(mesh.coordinates[v[0]], mesh.coordinates[v[1]], mesh.coordinates[v[2]]);
      if element.is_triangle() && a < area_threshold {
        return Err((gi, ei));
      }
    }
  }
  Ok(())
}

/// Drops redundant dimension-1-and-lower elements: an edge/node already
/// covered by a surface element in the same group is removed; between two
/// coincident lines, the one with the lexicographically larger
/// per-axis-direction-sum is dropped (deterministic tie-break).
pub fn remove_overlapped_dimension_one_and_lower_elements_and_equivalent_surfaces(mesh: &mut Mesh) {
  for group in &mut mesh.groups {
    let mut used_coordinates: BTreeSet<VertexId> = BTreeSet::new();
    let mut used_surfaces: BTreeSet<Vec<VertexId>> = BTreeSet::new();
    let mut used_pairs_from_surface: BTreeSet<(VertexId, VertexId)> = BTreeSet::new();
    let mut used_pairs_from_line: HashMap<Vec<VertexId>, (usize, f64)> = HashMap::new();

    let mut keep = vec![true; group.elements.len()];
    let mut lines: Vec<usize> = Vec::new();
    let mut nodes: Vec<usize> = Vec::new();

    for (idx, element) in group.elements.iter().enumerate() {
      let mut v_ids: Vec<VertexId> = element.vertices.iter().copied().collect();
      if v_ids.len() >= 2 {
        let min_pos = v_ids
          .iter()
          .enumerate()
          .min_by_key(|(_, &val)| val)
          .map(|(i, _)| i)
          .unwrap();
        v_ids.rotate_left(min_pos);
        used_coordinates.extend(v_ids.iter().copied());
      }

      match element.kind {
        ElementKind::Surface => {
          if used_surfaces.contains(&v_ids) {
            keep[idx] = false;
          } else {
            used_surfaces.insert(v_ids.clone());
            for i in 0..v_ids.len() {
              let a = v_ids[i];
              let b = v_ids[(i + 1) % v_ids.len()];
              used_pairs_from_surface.insert((a.min(b), a.max(b)));
            }
          }
        }
        ElementKind::Line => lines.push(idx),
        ElementKind::Node => nodes.push(idx),
        ElementKind::Volume => {}
      }
    }

    for &idx in &lines {
      let element = &group.elements[idx];
      let mut v_ids: Vec<VertexId> = element.vertices.iter().copied().collect();
      let min_pos = v_ids
        .iter()
        .enumerate()
        .min_by_key(|(_, &val)| val)
        .map(|(i, _)| i)
        .unwrap();
      v_ids.rotate_left(min_pos);

      let pair = (v_ids[0].min(v_ids[1]), v_ids[0].max(v_ids[1]));
      if used_pairs_from_surface.contains(&pair) {
        keep[idx] = false;
        continue;
      }

      let direction: f64 = (0..3)
        .map(|axis| {
          mesh.coordinates[element.vertices[1]].component(axis)
            - mesh.coordinates[element.vertices[0]].component(axis)
        })
        .sum();

      match used_pairs_from_line.get(&v_ids) {
        None => {
          used_pairs_from_line.insert(v_ids, (idx, direction));
        }
        Some(&(original_idx, original_direction)) => {
          if direction > original_direction {
            keep[original_idx] = false;
            used_pairs_from_line.insert(v_ids, (idx, direction));
          } else {
            keep[idx] = false;
          }
        }
      }
    }

    for &idx in &nodes {
      let v = group.elements[idx].vertices[0];
      if used_coordinates.contains(&v) {
        keep[idx] = false;
      } else {
        used_coordinates.insert(v);
      }
    }

    let mut it = keep.iter();
    group.elements.retain(|_| *it.next().unwrap());
  }
}

#[cfg(test)]
#[path = "redundancy_test.rs"]
mod redundancy_test;
