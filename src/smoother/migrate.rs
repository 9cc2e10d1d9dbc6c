//! Per-vertex migration rules: the actual "snap toward a grid feature"
//! steps the Smoother runs over each disjoint patch. Classification of how
//! close a vertex already is to a cell face/edge reuses the same relative
//! distance-to-integer test the Structurer later uses for exact alignment.
//!
//! Each rule reads from an immutable coordinate snapshot and returns the
//! `(vertex, new position)` updates it wants to make, rather than mutating
//! in place: patches run these concurrently via `rayon`, and collecting
//! updates first (then applying them serially) keeps the parallel region
//! free of shared mutable state instead of relying on unsafe aliasing.

use std::collections::{HashMap, HashSet};

use crate::geometry::{Axis, Coordinate};
use crate::mesh::{Element, VertexId};

/// How close (in relative units) a component must be to an integer before
/// a migration step treats it as already aligned with that plane.
const ALIGNMENT_DISTANCE: f64 = 0.12;

fn axes_near_plane(c: Coordinate) -> Vec<Axis> {
  Axis::ALL
    .into_iter()
    .filter(|&axis| {
      let v = c.component(axis.index());
      (v - v.round()).abs() < ALIGNMENT_DISTANCE
    })
    .collect()
}

/// Vertices within [`ALIGNMENT_DISTANCE`] of exactly two grid planes (near
/// a cell edge) snap onto that edge: both near-plane axes round to their
/// nearest integer.
pub fn collapse_points_on_cell_edges(
  coordinates: &[Coordinate],
  patch: &[VertexId],
  is_singular: impl Fn(VertexId) -> bool,
) -> Vec<(VertexId, Coordinate)> {
  patch
    .iter()
    .filter(|&&v| !is_singular(v))
    .filter_map(|&v| {
      let c = coordinates[v];
      let near = axes_near_plane(c);
      if near.len() != 2 {
        return None;
      }
      let mut out = c;
      for axis in near {
        out = out.with_component(axis.index(), out.component(axis.index()).round());
      }
      Some((v, out))
    })
    .collect()
}

/// Vertices within [`ALIGNMENT_DISTANCE`] of exactly one grid plane (near a
/// cell face) snap onto that face.
pub fn collapse_points_on_cell_faces(
  coordinates: &[Coordinate],
  patch: &[VertexId],
  is_singular: impl Fn(VertexId) -> bool,
) -> Vec<(VertexId, Coordinate)> {
  patch
    .iter()
    .filter(|&&v| !is_singular(v))
    .filter_map(|&v| {
      let c = coordinates[v];
      let near = axes_near_plane(c);
      if near.len() != 1 {
        return None;
      }
      let axis = near[0];
      Some((v, c.with_component(axis.index(), c.component(axis.index()).round())))
    })
    .collect()
}

/// How close (in relative units) a vertex must be to a detected feature
/// edge segment before it snaps onto it.
const FEATURE_EDGE_DISTANCE: f64 = 0.3;

/// Refinement pass after faces/edges: vertices still more than
/// [`ALIGNMENT_DISTANCE`] from every plane, but within [`FEATURE_EDGE_DISTANCE`]
/// of an actual detected feature edge (a triangle edge whose both endpoints
/// are singular), project onto that edge instead of onto an axis plane —
/// the edge itself may run diagonally across cells.
pub fn collapse_points_on_feature_edges(
  coordinates: &[Coordinate],
  patch: &[VertexId],
  patch_elements: &[Element],
  is_singular: impl Fn(VertexId) -> bool,
) -> Vec<(VertexId, Coordinate)> {
  let feature_edges = feature_edge_segments(patch_elements, coordinates, &is_singular);
  if feature_edges.is_empty() {
    return Vec::new();
  }
  patch
    .iter()
    .filter(|&&v| !is_singular(v))
    .filter_map(|&v| {
      let c = coordinates[v];
      if !axes_near_plane(c).is_empty() {
        return None; // already handled by the face/edge passes
      }
      let (projection, distance) = closest_point_on_feature_edges(c, &feature_edges)?;
      if distance < FEATURE_EDGE_DISTANCE {
        Some((v, projection))
      } else {
        None
      }
    })
    .collect()
}

/// Triangle edges of `patch_elements` whose both endpoints are singular
/// (pinned by the feature-detection pass): the sharp edges the mesh must
/// not smooth away.
fn feature_edge_segments(
  patch_elements: &[Element],
  coordinates: &[Coordinate],
  is_singular: &impl Fn(VertexId) -> bool,
) -> Vec<(Coordinate, Coordinate)> {
  let mut seen: HashSet<(VertexId, VertexId)> = HashSet::new();
  let mut segments = Vec::new();
  for e in patch_elements {
    if !e.is_triangle() {
      continue;
    }
    for i in 0..3 {
      let a = e.vertices[i];
      let b = e.vertices[(i + 1) % 3];
      if !is_singular(a) || !is_singular(b) {
        continue;
      }
      let key = (a.min(b), a.max(b));
      if seen.insert(key) {
        segments.push((coordinates[a], coordinates[b]));
      }
    }
  }
  segments
}

/// The closest point on any of `segments` to `c`, clamped to each segment,
/// paired with its distance.
fn closest_point_on_feature_edges(c: Coordinate, segments: &[(Coordinate, Coordinate)]) -> Option<(Coordinate, f64)> {
  segments
    .iter()
    .map(|&(a, b)| {
      let ab = b - a;
      let len2 = ab.dot(&ab);
      let t = if len2 > 1e-18 { ((c - a).dot(&ab) / len2).clamp(0.0, 1.0) } else { 0.0 };
      let projection = a.lerp(&b, t);
      (projection, (c - projection).norm())
    })
    .min_by(|x, y| x.1.partial_cmp(&y.1).unwrap())
}

/// Remaining interior vertices (none of the above passes moved them)
/// migrate to whichever grid plane is nearest, guaranteeing the patch
/// eventually touches the cell boundary somewhere.
pub fn collapse_interior_points_to_bound(coordinates: &[Coordinate], patch: &[VertexId]) -> Vec<(VertexId, Coordinate)> {
  patch
    .iter()
    .filter_map(|&v| {
      let c = coordinates[v];
      if !axes_near_plane(c).is_empty() {
        return None;
      }
      let (axis, _) = closest_axis(c);
      Some((v, c.with_component(axis.index(), c.component(axis.index()).round())))
    })
    .collect()
}

fn closest_axis(c: Coordinate) -> (Axis, f64) {
  Axis::ALL
    .into_iter()
    .map(|axis| {
      let v = c.component(axis.index());
      (axis, (v - v.round()).abs())
    })
    .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
    .unwrap()
}

/// Final whole-group alignment pass, run once per group after its patches
/// have been re-fused into a single coordinate list: vertices on the
/// group's outer contour (boundary edges used by exactly one triangle in
/// the *whole* group, not just one patch) that are still within
/// `alignment_distance` of a grid plane snap onto it. Catches boundary
/// vertices two neighbouring patches left slightly off because they
/// disagreed on exactly where to put their shared edge.
pub fn collapse_points_on_contour(coordinates: &mut [Coordinate], elements: &[Element], alignment_distance: f64) {
  for v in contour_vertices(elements) {
    let c = coordinates[v];
    let mut out = c;
    for axis in Axis::ALL {
      let value = out.component(axis.index());
      if (value - value.round()).abs() < alignment_distance {
        out = out.with_component(axis.index(), value.round());
      }
    }
    coordinates[v] = out;
  }
}

/// Vertices touched by a boundary edge (used by exactly one triangle) of
/// `elements`.
fn contour_vertices(elements: &[Element]) -> HashSet<VertexId> {
  let mut count: HashMap<(VertexId, VertexId), u32> = HashMap::new();
  for e in elements {
    if !e.is_triangle() {
      continue;
    }
    for i in 0..3 {
      let a = e.vertices[i];
      let b = e.vertices[(i + 1) % 3];
      let key = (a.min(b), a.max(b));
      *count.entry(key).or_insert(0) += 1;
    }
  }
  count.into_iter().filter(|&(_, n)| n == 1).flat_map(|((a, b), _)| [a, b]).collect()
}

#[cfg(test)]
#[path = "migrate_test.rs"]
mod migrate_test;
