//! Staircases a single triangle, already known to sit inside one cell, into
//! axis-aligned face-quads, edges and nodes.

use std::collections::HashSet;

use crate::geometry::Coordinate;
use crate::geometry::Grid;
use crate::structurer::staircase::{corner_coordinate, nearest_corner, staircase_corners};

/// Output of staircasing a single triangle.
#[derive(Debug, Default)]
pub struct TriangleStaircase {
  pub quads: Vec<[[i64; 3]; 4]>,
  pub lines: Vec<([i64; 3], [i64; 3])>,
  pub single_node: Option<[i64; 3]>,
}

pub fn staircase_triangle(grid: &Grid, vertices: [Coordinate; 3]) -> TriangleStaircase {
  let edges = [
    (vertices[0], vertices[1]),
    (vertices[1], vertices[2]),
    (vertices[2], vertices[0]),
  ];

  let pure_diagonal_index = edges.iter().position(|&(s, e)| is_pure_diagonal(grid, s, e));

  let mut paths: Vec<Vec<[i64; 3]>> = Vec::new();
  for (i, &(s, e)) in edges.iter().enumerate() {
    if Some(i) == pure_diagonal_index {
      continue;
    }
    paths.push(staircase_corners(grid, s, e));
  }

  let mut distinct: Vec<[i64; 3]> = Vec::new();
  for path in &paths {
    for &c in path {
      if !distinct.contains(&c) {
        distinct.push(c);
      }
    }
  }

  if distinct.len() == 1 {
    return TriangleStaircase {
      single_node: Some(distinct[0]),
      ..Default::default()
    };
  }

  let base = cell_base(&distinct);
  let mut quads = find_quads(&distinct, base);

  if quads.is_empty() && pure_diagonal_index.is_some() && distinct.len() == 6 {
    let missing = synthesize_missing_corner(&distinct, base, vertices);
    distinct.push(missing);
    quads = find_quads(&distinct, base);
  }

  // A pure diagonal edge contributes no staircase path of its own; the face
  // it cuts through usually ends up with exactly 3 of its 4 corners visited
  // by the other two edges, with the 4th forced by the diagonal itself.
  if quads.is_empty() && pure_diagonal_index.is_some() {
    if let Some((face, missing)) = find_partial_quad(&distinct, base) {
      quads.push(face);
      distinct.push(missing);
    }
  }

  let mut lines = Vec::new();
  let mut seen: HashSet<([i64; 3], [i64; 3])> = HashSet::new();
  for path in &paths {
    for pair in path.windows(2) {
      let (a, b) = (pair[0], pair[1]);
      if a == b {
        continue;
      }
      if quads.iter().any(|q| q.contains(&a) && q.contains(&b)) {
        continue;
      }
      let key = if a <= b { (a, b) } else { (b, a) };
      if seen.insert(key) {
        lines.push((a, b));
      }
    }
  }

  TriangleStaircase {
    quads,
    lines,
    single_node: None,
  }
}

/// An edge is a pure (space) diagonal if its rounded endpoints differ along
/// all three axes: it cuts straight through a cell from corner to opposite
/// corner with no axis-aligned component to anchor a staircase direction.
fn is_pure_diagonal(grid: &Grid, start: Coordinate, end: Coordinate) -> bool {
  let sc = nearest_corner(grid, start);
  let ec = nearest_corner(grid, end);
  (0..3).filter(|&a| sc[a] != ec[a]).count() == 3
}

fn cell_base(corners: &[[i64; 3]]) -> [i64; 3] {
  let mut base = corners[0];
  for c in corners {
    for a in 0..3 {
      base[a] = base[a].min(c[a]);
    }
  }
  base
}

/// The 4 corners of cell `base`'s face fixed at `axis = base[axis]` (low) or
/// `base[axis] + 1` (high), ordered so consecutive entries differ in
/// exactly one of the other two axes.
fn face_corners(base: [i64; 3], axis: usize, high: bool) -> [[i64; 3]; 4] {
  let other: Vec<usize> = (0..3).filter(|&a| a != axis).collect();
  let fixed = if high { base[axis] + 1 } else { base[axis] };
  let offsets = [(0, 0), (1, 0), (1, 1), (0, 1)];
  let mut out = [[0i64; 3]; 4];
  for (i, &(o0, o1)) in offsets.iter().enumerate() {
    let mut c = base;
    c[axis] = fixed;
    c[other[0]] += o0;
    c[other[1]] += o1;
    out[i] = c;
  }
  out
}

fn find_quads(distinct: &[[i64; 3]], base: [i64; 3]) -> Vec<[[i64; 3]; 4]> {
  let mut quads = Vec::new();
  for axis in 0..3 {
    for &high in &[false, true] {
      let face = face_corners(base, axis, high);
      if face.iter().all(|c| distinct.contains(c)) {
        quads.push(face);
      }
    }
  }
  quads
}

/// Looks for a face with exactly 3 of its 4 corners present, returning that
/// face (in cyclic order) and its missing corner. The first such face found
/// in fixed axis/side order is used, giving a deterministic tie-break.
fn find_partial_quad(distinct: &[[i64; 3]], base: [i64; 3]) -> Option<([[i64; 3]; 4], [i64; 3])> {
  for axis in 0..3 {
    for &high in &[false, true] {
      let face = face_corners(base, axis, high);
      let present = face.iter().filter(|c| distinct.contains(c)).count();
      if present == 3 {
        let missing = *face.iter().find(|c| !distinct.contains(c)).unwrap();
        return Some((face, missing));
      }
    }
  }
  None
}

/// When a pure diagonal leaves only 6 of the cell's 8 corners visited, one of
/// the 2 remaining corners completes a face; pick whichever is closer to the
/// triangle's barycentre.
fn synthesize_missing_corner(distinct: &[[i64; 3]], base: [i64; 3], vertices: [Coordinate; 3]) -> [i64; 3] {
  let barycentre = Coordinate::new(
    (vertices[0].x() + vertices[1].x() + vertices[2].x()) / 3.0,
    (vertices[0].y() + vertices[1].y() + vertices[2].y()) / 3.0,
    (vertices[0].z() + vertices[1].z() + vertices[2].z()) / 3.0,
  );

  let mut missing: Vec<[i64; 3]> = Vec::new();
  for bit in 0..8i64 {
    let c = [base[0] + (bit & 1), base[1] + ((bit >> 1) & 1), base[2] + ((bit >> 2) & 1)];
    if !distinct.contains(&c) {
      missing.push(c);
    }
  }

  missing
    .into_iter()
    .min_by(|a, b| {
      let da = (corner_coordinate(*a) - barycentre).norm();
      let db = (corner_coordinate(*b) - barycentre).norm();
      da.partial_cmp(&db).unwrap()
    })
    .expect("exactly 2 corners remain missing when distinct.len() == 6")
}

#[cfg(test)]
#[path = "triangle_test.rs"]
mod triangle_test;
