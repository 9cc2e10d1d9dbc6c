//! Disjoint smooth sets: connected groups of triangles whose normals stay
//! mutually aligned within a feature-detection angle, and the singular
//! (pinned) vertices that sit on the boundary between two such sets.

use std::collections::{HashMap, HashSet};

use crate::geometry::predicates::approximately_oriented_aligned;
use crate::geometry::Coordinate;
use crate::mesh::{Element, VertexId};

/// Splits `element_indices` (all triangles, indexing into `elements`) into
/// maximal connected groups whose adjacent triangles are aligned within
/// `angle`. Two triangles are adjacent if they share an edge.
pub fn build_disjoint_smooth_sets(
  element_indices: &[usize],
  elements: &[Element],
  coordinates: &[Coordinate],
  angle: f64,
) -> Vec<Vec<usize>> {
  let mut edge_to_triangles: HashMap<(VertexId, VertexId), Vec<usize>> = HashMap::new();
  for &idx in element_indices {
    let e = &elements[idx];
    if !e.is_triangle() {
      continue;
    }
    for i in 0..3 {
      let a = e.vertices[i];
      let b = e.vertices[(i + 1) % 3];
      let key = (a.min(b), a.max(b));
      edge_to_triangles.entry(key).or_default().push(idx);
    }
  }

  let mut visited: HashSet<usize> = HashSet::new();
  let mut sets = Vec::new();

  for &seed in element_indices {
    if !elements[seed].is_triangle() || visited.contains(&seed) {
      continue;
    }
    let mut patch = Vec::new();
    let mut stack = vec![seed];
    visited.insert(seed);
    while let Some(current) = stack.pop() {
      patch.push(current);
      let e = &elements[current];
      for i in 0..3 {
        let a = e.vertices[i];
        let b = e.vertices[(i + 1) % 3];
        let key = (a.min(b), a.max(b));
        for &neighbor in edge_to_triangles.get(&key).into_iter().flatten() {
          if neighbor == current || visited.contains(&neighbor) {
            continue;
          }
          if triangles_aligned(&elements[current], &elements[neighbor], coordinates, angle) {
            visited.insert(neighbor);
            stack.push(neighbor);
          }
        }
      }
    }
    sets.push(patch);
  }

  sets
}

fn triangles_aligned(a: &Element, b: &Element, coordinates: &[Coordinate], angle: f64) -> bool {
  let pa = [
    coordinates[a.vertices[0]],
    coordinates[a.vertices[1]],
    coordinates[a.vertices[2]],
  ];
  let pb = [
    coordinates[b.vertices[0]],
    coordinates[b.vertices[1]],
    coordinates[b.vertices[2]],
  ];
  approximately_oriented_aligned(pa[0], pa[1], pa[2], pb[0], pb[1], pb[2], angle)
}

/// Vertices where triangles meeting at that vertex are not all mutually
/// aligned within `angle`: feature edges/corners that must not move.
pub fn build_singular_ids(elements: &[Element], coordinates: &[Coordinate], angle: f64) -> HashSet<VertexId> {
  let mut by_vertex: HashMap<VertexId, Vec<usize>> = HashMap::new();
  for (idx, e) in elements.iter().enumerate() {
    if !e.is_triangle() {
      continue;
    }
    for &v in &e.vertices {
      by_vertex.entry(v).or_default().push(idx);
    }
  }

  let mut singular = HashSet::new();
  for (vertex, incident) in by_vertex {
    if incident.len() < 2 {
      continue;
    }
    let reference = &elements[incident[0]];
    let misaligned = incident
      .iter()
      .skip(1)
      .any(|&idx| !triangles_aligned(reference, &elements[idx], coordinates, angle));
    if misaligned {
      singular.insert(vertex);
    }
  }
  singular
}

#[cfg(test)]
#[path = "patches_test.rs"]
mod patches_test;
