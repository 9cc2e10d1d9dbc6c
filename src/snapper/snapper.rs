//! Snaps coordinates near a grid plane, or near one of a configurable
//! number of interior "sticky" points along a cell edge, onto that target.
//! Downgrades any element whose vertices collapse together as a result.

use std::collections::HashSet;

use crate::collapser::redundancy::remove_repeated_elements;
use crate::error::MeshResult;
use crate::geometry::Axis;
use crate::mesh::{Element, ElementKind, Mesh, VertexId};
use crate::snapper::options::SnapperOptions;

/// Runs the Snapper over an already-collapsed mesh.
pub fn snap(input: &Mesh, opts: &SnapperOptions) -> MeshResult<Mesh> {
  let mut mesh = input.clone();

  if opts.forbidden_length > 0.0 {
    for coord in &mut mesh.coordinates {
      for axis in Axis::ALL {
        let v = coord.component(axis.index());
        if let Some(target) = nearest_sticky_target(v, opts) {
          *coord = coord.with_component(axis.index(), target);
        }
      }
    }
  }

  for group in &mut mesh.groups {
    for element in &mut group.elements {
      *element = downgrade(element);
    }
  }

  remove_repeated_elements(&mut mesh);
  Ok(mesh)
}

/// The nearest "sticky" snap target for a single coordinate component: the
/// enclosing cell's two bounding planes, plus `edge_points` evenly spaced
/// interior samples along that cell edge. Returns `None` if the closest
/// sticky target is farther than `forbidden_length`.
fn nearest_sticky_target(v: f64, opts: &SnapperOptions) -> Option<f64> {
  let mut best = v.round();
  let mut best_distance = (v - best).abs();

  if opts.edge_points > 0 {
    let cell_floor = v.floor();
    let divisions = opts.edge_points as f64 + 1.0;
    for k in 1..=opts.edge_points {
      let sample = cell_floor + k as f64 / divisions;
      let distance = (v - sample).abs();
      if distance < best_distance {
        best = sample;
        best_distance = distance;
      }
    }
  }

  (best_distance < opts.forbidden_length).then_some(best)
}

/// Collapses an element whose vertices are no longer distinct into the
/// lower-dimensional primitive they now describe: a triangle with 2
/// distinct vertices becomes a line, with 1 becomes a node; a line with 1
/// distinct vertex becomes a node.
fn downgrade(element: &Element) -> Element {
  let distinct: Vec<VertexId> = {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for &v in &element.vertices {
      if seen.insert(v) {
        out.push(v);
      }
    }
    out
  };

  match element.kind {
    ElementKind::Surface if distinct.len() == 1 => Element::node(distinct[0]),
    ElementKind::Surface if distinct.len() == 2 => Element::line(distinct[0], distinct[1]),
    ElementKind::Line if distinct.len() == 1 => Element::node(distinct[0]),
    _ => element.clone(),
  }
}

#[cfg(test)]
#[path = "snapper_test.rs"]
mod snapper_test;
