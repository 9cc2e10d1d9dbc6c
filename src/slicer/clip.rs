//! Convex-polygon half-space clipping against a single axis-aligned plane.
//! The Slicer applies this once per grid plane per axis to cut a triangle
//! into the convex fragments that each lie inside one cell.

use crate::geometry::{Axis, Coordinate};

/// Returns the polygon clipped to the half-space where `component(axis) <=
/// value` (if `keep_less`) or `>= value` (otherwise), via a single-plane
/// Sutherland-Hodgman pass. New vertices are linearly interpolated at the
/// plane crossing; the input polygon is assumed convex (true of anything
/// produced by this function itself, and of the triangles the Slicer starts
/// from).
pub fn clip_halfspace(polygon: &[Coordinate], axis: Axis, value: f64, keep_less: bool) -> Vec<Coordinate> {
  if polygon.is_empty() {
    return Vec::new();
  }

  let inside = |p: &Coordinate| -> bool {
    let c = p.component(axis.index());
    if keep_less {
      c <= value
    } else {
      c >= value
    }
  };

  let mut out = Vec::with_capacity(polygon.len() + 1);
  for i in 0..polygon.len() {
    let current = polygon[i];
    let next = polygon[(i + 1) % polygon.len()];
    let current_in = inside(&current);
    let next_in = inside(&next);

    if current_in {
      out.push(current);
    }
    if current_in != next_in {
      out.push(intersect(current, next, axis, value));
    }
  }
  out
}

fn intersect(a: Coordinate, b: Coordinate, axis: Axis, value: f64) -> Coordinate {
  let ca = a.component(axis.index());
  let cb = b.component(axis.index());
  let t = if (cb - ca).abs() < f64::EPSILON {
    0.0
  } else {
    (value - ca) / (cb - ca)
  };
  a.lerp(&b, t)
}

#[cfg(test)]
#[path = "clip_test.rs"]
mod clip_test;
