//! Rounds a relative coordinate to its nearest cell corner and builds the
//! staircase path of corners between two such roundings.

use smallvec::SmallVec;

use crate::geometry::{Axis, Coordinate, Grid};

/// Rounds `relative` to the nearest cell corner, ties rounding up (fractional
/// part `>= 0.5` advances to the next plane), clamped to the grid's range.
pub fn nearest_corner(grid: &Grid, relative: Coordinate) -> [i64; 3] {
  let mut out = [0i64; 3];
  for axis in Axis::ALL {
    let c = relative.component(axis.index());
    let base = c.floor();
    let rounded = if c - base >= 0.5 { base + 1.0 } else { base };
    let max_plane = (grid.plane_count(axis) - 1) as i64;
    out[axis.index()] = (rounded as i64).clamp(0, max_plane);
  }
  out
}

pub fn corner_coordinate(corner: [i64; 3]) -> Coordinate {
  Coordinate::new(corner[0] as f64, corner[1] as f64, corner[2] as f64)
}

/// Builds the path of corners a staircased line visits between `start` and
/// `end` (each assumed to lie inside a single cell). Differing axes are
/// advanced one grid step at a time, axis order chosen by which grid plane
/// the original segment crosses first (its parametric midpoint between the
/// two corners); ties break by ascending axis index.
pub fn staircase_corners(grid: &Grid, start: Coordinate, end: Coordinate) -> Vec<[i64; 3]> {
  let start_corner = nearest_corner(grid, start);
  let end_corner = nearest_corner(grid, end);

  let mut axes: SmallVec<[(f64, usize); 3]> = SmallVec::new();
  for axis in Axis::ALL {
    let i = axis.index();
    if start_corner[i] == end_corner[i] {
      continue;
    }
    let s = start.component(i);
    let e = end.component(i);
    let mid = (start_corner[i] + end_corner[i]) as f64 / 2.0;
    let t = if (e - s).abs() > f64::EPSILON { (mid - s) / (e - s) } else { 0.5 };
    axes.push((t, i));
  }
  axes.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap().then(a.1.cmp(&b.1)));

  let mut path = vec![start_corner];
  let mut current = start_corner;
  for &(_, axis) in axes.iter() {
    let step = if end_corner[axis] > current[axis] { 1 } else { -1 };
    while current[axis] != end_corner[axis] {
      current[axis] += step;
      path.push(current);
    }
  }
  path
}

#[cfg(test)]
#[path = "staircase_test.rs"]
mod staircase_test;
