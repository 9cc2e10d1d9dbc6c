//! Cuts every input triangle and line by the grid's axis-aligned planes so
//! that every output element lies inside the closure of exactly one cell.

use crate::error::{MeshError, MeshResult};
use crate::geometry::grid_tools::to_cell;
use crate::geometry::predicates::{area, are_collinear};
use crate::geometry::{Axis, Coordinate, Grid};
use crate::mesh::{Element, Group, GroupId, Mesh};
use crate::slicer::clip::clip_halfspace;
use crate::slicer::triangulate::ConstrainedTriangulator;

const AREA_TOLERANCE: f64 = 1e-12;

/// Slices every element of `input` against `input.grid`'s planes, using
/// `triangulator` to retriangulate the convex fragments a sliced triangle
/// splits into. `input`'s coordinates must already be in relative space.
pub fn slice(input: &Mesh, triangulator: &dyn ConstrainedTriangulator) -> MeshResult<Mesh> {
  let grid = input.grid.clone();
  let mut output = Mesh::new(grid.clone());

  for group in &input.groups {
    let mut out_group = Group::new(group.id);
    for element in &group.elements {
      match element.kind {
        crate::mesh::ElementKind::Surface if element.is_triangle() => {
          slice_triangle(&grid, input, element, group.id, triangulator, &mut output, &mut out_group)?;
        }
        crate::mesh::ElementKind::Line => {
          slice_line(&grid, input, element, &mut output, &mut out_group);
        }
        _ => {
          // Nodes (and any already grid-aligned element) pass through: a
          // single point cannot cross a plane.
          let verts: Vec<usize> = element
            .vertices
            .iter()
            .map(|&v| output.push_coordinate(input.coordinates[v]))
            .collect();
          out_group.elements.push(Element {
            vertices: verts.into_iter().collect(),
            kind: element.kind,
          });
        }
      }
    }
    output.groups.push(out_group);
  }

  Ok(output)
}

fn slice_triangle(
  grid: &Grid,
  input: &Mesh,
  element: &Element,
  group_id: GroupId,
  triangulator: &dyn ConstrainedTriangulator,
  output: &mut Mesh,
  out_group: &mut Group,
) -> MeshResult<()> {
  let tri: Vec<Coordinate> = element.vertices.iter().map(|&v| input.coordinates[v]).collect();

  let mut pieces = vec![tri];
  for axis in Axis::ALL {
    let max_cell = grid.cell_count(axis) as i64;
    let mut next = Vec::new();
    for piece in pieces {
      next.extend(slice_piece_by_axis(&piece, axis, max_cell));
    }
    pieces = next;
  }

  for piece in pieces {
    if piece.len() < 3 {
      continue;
    }
    if area_of_polygon(&piece) < AREA_TOLERANCE {
      continue;
    }
    let triangles = triangulator.triangulate(&piece, &[]).map_err(|e| match e {
      MeshError::NonManifoldInput { message, .. } => MeshError::NonManifoldInput {
        group: group_id,
        message,
      },
      other => other,
    })?;
    for tri_idx in triangles {
      let ids: Vec<usize> = tri_idx.iter().map(|&i| output.push_coordinate(piece[i])).collect();
      if are_collinear(&[piece[tri_idx[0]], piece[tri_idx[1]], piece[tri_idx[2]]]) {
        continue;
      }
      out_group.elements.push(Element::triangle(ids[0], ids[1], ids[2]));
    }
  }
  Ok(())
}

/// Approximate area of a (possibly non-triangular but convex and roughly
/// planar) polygon via a fan from vertex 0.
fn area_of_polygon(poly: &[Coordinate]) -> f64 {
  if poly.len() < 3 {
    return 0.0;
  }
  (1..poly.len() - 1)
    .map(|i| area(poly[0], poly[i], poly[i + 1]))
    .sum()
}

/// Splits a convex polygon into the fragments bounded by consecutive
/// integer-valued planes along `axis`, within `[0, max_cell]`.
fn slice_piece_by_axis(piece: &[Coordinate], axis: Axis, max_cell: i64) -> Vec<Vec<Coordinate>> {
  if piece.is_empty() {
    return Vec::new();
  }
  let (min, max) = piece.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
    let c = p.component(axis.index());
    (lo.min(c), hi.max(c))
  });

  let lo_plane = (min.ceil() as i64).max(0);
  let hi_plane = (max.floor() as i64).min(max_cell);

  let mut planes: Vec<i64> = (lo_plane..=hi_plane).collect();
  planes.retain(|&p| (p as f64) > min + 1e-12 && (p as f64) < max - 1e-12);

  let mut current = piece.to_vec();
  let mut result = Vec::new();
  for plane in planes {
    let below = clip_halfspace(&current, axis, plane as f64, true);
    let above = clip_halfspace(&current, axis, plane as f64, false);
    if below.len() >= 3 {
      result.push(below);
    }
    current = above;
  }
  if current.len() >= 3 {
    result.push(current);
  }
  result
}

fn slice_line(grid: &Grid, input: &Mesh, element: &Element, output: &mut Mesh, out_group: &mut Group) {
  let a = input.coordinates[element.vertices[0]];
  let b = input.coordinates[element.vertices[1]];

  let mut ts: Vec<f64> = vec![0.0, 1.0];
  for axis in Axis::ALL {
    let (lo, hi) = (a.component(axis.index()), b.component(axis.index()));
    if (hi - lo).abs() < f64::EPSILON {
      continue;
    }
    let (min, max) = (lo.min(hi), lo.max(hi));
    let lo_plane = min.ceil() as i64;
    let hi_plane = max.floor() as i64;
    for plane in lo_plane..=hi_plane {
      let value = plane as f64;
      if value > min + 1e-12 && value < max - 1e-12 {
        let t = (value - lo) / (hi - lo);
        ts.push(t);
      }
    }
  }
  ts.sort_by(|x, y| x.partial_cmp(y).unwrap());
  ts.dedup_by(|x, y| (*x - *y).abs() < 1e-12);

  if ts.len() <= 2 {
    let id_a = output.push_coordinate(a);
    let id_b = output.push_coordinate(b);
    out_group.elements.push(Element::line(id_a, id_b));
    return;
  }

  for w in ts.windows(2) {
    let (t0, t1) = (w[0], w[1]);
    let p0 = a.lerp(&b, t0);
    let p1 = a.lerp(&b, t1);
    if (p1 - p0).norm() < 1e-12 {
      let id = output.push_coordinate(p0);
      out_group.elements.push(Element::node(id));
      continue;
    }
    // Sanity: the midpoint of this sub-segment must lie in exactly one
    // cell; this always holds by construction since `ts` only contains
    // crossings at integer planes.
    let _ = to_cell(grid, a.lerp(&b, (t0 + t1) / 2.0));
    let id0 = output.push_coordinate(p0);
    let id1 = output.push_coordinate(p1);
    out_group.elements.push(Element::line(id0, id1));
  }
}

#[cfg(test)]
#[path = "slicer_test.rs"]
mod slicer_test;
