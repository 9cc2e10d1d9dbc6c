//! Triangle/line predicates used by the Collapser, Smoother and Structurer:
//! area, degeneracy, normals, coplanarity and alignment angles.

use crate::geometry::coordinate::Coordinate;
use crate::geometry::tolerance::NORM_TOLERANCE;

/// Twice the signed area vector of the triangle `(a, b, c)`: `(b-a) x (c-a)`.
#[inline]
pub fn normal_unnormalized(a: Coordinate, b: Coordinate, c: Coordinate) -> Coordinate {
  (b - a).cross(&(c - a))
}

/// Unit normal of the triangle `(a, b, c)`. Returns `Coordinate::ZERO` for a
/// degenerate (zero-area) triangle.
pub fn normal(a: Coordinate, b: Coordinate, c: Coordinate) -> Coordinate {
  let n = normal_unnormalized(a, b, c);
  if n.norm() < NORM_TOLERANCE {
    Coordinate::ZERO
  } else {
    n.normalized()
  }
}

/// Area of the triangle `(a, b, c)`.
#[inline]
pub fn area(a: Coordinate, b: Coordinate, c: Coordinate) -> f64 {
  normal_unnormalized(a, b, c).norm() / 2.0
}

/// True if the triangle's area is below `area_tolerance`.
pub fn is_degenerate(a: Coordinate, b: Coordinate, c: Coordinate, area_tolerance: f64) -> bool {
  area(a, b, c) < area_tolerance
}

/// Angle in radians between two unit normals, clamped to a valid `acos`
/// domain to absorb floating-point overshoot.
pub fn angle_between_normals(a: Coordinate, b: Coordinate) -> f64 {
  a.dot(&b).clamp(-1.0, 1.0).acos()
}

/// True if triangles `(a0,a1,a2)` and `(b0,b1,b2)` are aligned within
/// `angle` radians of each other, regardless of which way their normals
/// point (i.e. compares `|cos|`, not `cos`).
pub fn approximately_aligned(
  a0: Coordinate,
  a1: Coordinate,
  a2: Coordinate,
  b0: Coordinate,
  b1: Coordinate,
  b2: Coordinate,
  angle: f64,
) -> bool {
  let na = normal(a0, a1, a2);
  let nb = normal(b0, b1, b2);
  if na == Coordinate::ZERO || nb == Coordinate::ZERO {
    return true;
  }
  let cos = na.dot(&nb).clamp(-1.0, 1.0).abs();
  cos.acos() <= angle
}

/// True if triangles `(a0,a1,a2)` and `(b0,b1,b2)` are aligned within `angle`
/// radians and share the same orientation (their normals point the same
/// way, not opposite).
pub fn approximately_oriented_aligned(
  a0: Coordinate,
  a1: Coordinate,
  a2: Coordinate,
  b0: Coordinate,
  b1: Coordinate,
  b2: Coordinate,
  angle: f64,
) -> bool {
  let na = normal(a0, a1, a2);
  let nb = normal(b0, b1, b2);
  if na == Coordinate::ZERO || nb == Coordinate::ZERO {
    return true;
  }
  angle_between_normals(na, nb) <= angle
}

/// Centroid of a set of coordinates. Panics on an empty slice.
pub fn centroid(points: &[Coordinate]) -> Coordinate {
  assert!(!points.is_empty(), "centroid of an empty point set");
  let sum = points
    .iter()
    .fold(Coordinate::ZERO, |acc, &p| acc + p);
  sum * (1.0 / points.len() as f64)
}

/// True if all points are collinear within [`NORM_TOLERANCE`] — i.e. every
/// triangle formed by three of them has near-zero area.
pub fn are_collinear(points: &[Coordinate]) -> bool {
  if points.len() < 3 {
    return true;
  }
  let a = points[0];
  let b = points[1];
  points[2..]
    .iter()
    .all(|&c| is_degenerate(a, b, c, NORM_TOLERANCE))
}

#[cfg(test)]
#[path = "predicates_test.rs"]
mod predicates_test;
