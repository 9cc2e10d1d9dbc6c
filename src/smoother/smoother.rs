//! Migrates off-grid vertices toward grid corners/edges while preserving
//! sharp features, per disjoint smooth-set patch.

use rayon::prelude::*;

use crate::collapser::redundancy::{clean_coords, fuse_coords, remove_elements_with_condition};
use crate::error::{MeshError, MeshResult};
use crate::mesh::{Element, ElementKind, Mesh};
use crate::smoother::migrate::{
  collapse_interior_points_to_bound, collapse_points_on_cell_edges, collapse_points_on_cell_faces,
  collapse_points_on_contour, collapse_points_on_feature_edges,
};
use crate::smoother::options::SmootherOptions;
use crate::smoother::patches::{build_disjoint_smooth_sets, build_singular_ids};
use crate::smoother::prepare::{
  duplicate_coordinates_shared_by_single_triangle_islands, duplicate_coordinates_used_by_different_groups,
};
use crate::smoother::remesh::remesh_boundary;

/// Runs the full Smoother pipeline against a sliced-and-collapsed mesh.
pub fn smooth(input: &Mesh, opts: &SmootherOptions) -> MeshResult<Mesh> {
  let mut mesh = input.clone();
  duplicate_coordinates_used_by_different_groups(&mut mesh);
  duplicate_coordinates_shared_by_single_triangle_islands(&mut mesh, opts.feature_detection_angle);

  for gi in 0..mesh.groups.len() {
    let elements = mesh.groups[gi].elements.clone();
    let element_indices: Vec<usize> = (0..elements.len()).collect();
    let singular = build_singular_ids(&elements, &mesh.coordinates, opts.feature_detection_angle);
    let mut patches = build_disjoint_smooth_sets(&element_indices, &elements, &mesh.coordinates, opts.feature_detection_angle);

    for patch in &mut patches {
      remesh_boundary(&mut mesh, gi, patch);
    }

    let patch_vertices: Vec<Vec<usize>> = patches
      .iter()
      .map(|patch| {
        let elements = &mesh.groups[gi].elements;
        let mut vs: Vec<usize> = patch.iter().flat_map(|&e| elements[e].vertices.iter().copied()).collect();
        vs.sort_unstable();
        vs.dedup();
        vs
      })
      .collect();
    let patch_elements: Vec<Vec<Element>> = patches
      .iter()
      .map(|patch| patch.iter().map(|&e| mesh.groups[gi].elements[e].clone()).collect())
      .collect();

    for vs in &patch_vertices {
      for (v, c) in collapse_points_on_cell_edges(&mesh.coordinates, vs, |v| singular.contains(&v)) {
        mesh.coordinates[v] = c;
      }
    }

    // Steps 4-6 are independent across patches: vertex sets are disjoint by
    // construction (the preparation pass duplicated every shared vertex),
    // so each patch's updates can be computed in parallel and merged back
    // without any two closures ever writing the same index.
    apply_parallel(&mut mesh.coordinates, &patch_vertices, |coords, vs| {
      collapse_points_on_cell_faces(coords, vs, |v| singular.contains(&v))
    });
    apply_parallel_with_elements(&mut mesh.coordinates, &patch_vertices, &patch_elements, |coords, vs, els| {
      collapse_points_on_feature_edges(coords, vs, els, |v| singular.contains(&v))
    });
    apply_parallel(&mut mesh.coordinates, &patch_vertices, |coords, vs| {
      collapse_interior_points_to_bound(coords, vs)
    });
  }

  fuse_coords(&mut mesh);
  remove_elements_with_condition(&mut mesh, |e| !e.is_triangle());
  clean_coords(&mut mesh);

  for gi in 0..mesh.groups.len() {
    let elements = mesh.groups[gi].elements.clone();
    collapse_points_on_contour(&mut mesh.coordinates, &elements, opts.contour_alignment_angle);
  }
  fuse_coords(&mut mesh);

  check_no_cells_are_crossed(&mesh)?;
  Ok(mesh)
}

fn apply_parallel(
  coordinates: &mut [crate::geometry::Coordinate],
  patch_vertices: &[Vec<usize>],
  step: impl Fn(&[crate::geometry::Coordinate], &[usize]) -> Vec<(usize, crate::geometry::Coordinate)> + Sync,
) {
  let updates: Vec<(usize, crate::geometry::Coordinate)> = patch_vertices
    .par_iter()
    .flat_map(|vs| step(coordinates, vs))
    .collect();
  for (v, c) in updates {
    coordinates[v] = c;
  }
}

fn apply_parallel_with_elements(
  coordinates: &mut [crate::geometry::Coordinate],
  patch_vertices: &[Vec<usize>],
  patch_elements: &[Vec<Element>],
  step: impl Fn(&[crate::geometry::Coordinate], &[usize], &[Element]) -> Vec<(usize, crate::geometry::Coordinate)> + Sync,
) {
  let updates: Vec<(usize, crate::geometry::Coordinate)> = patch_vertices
    .par_iter()
    .zip(patch_elements.par_iter())
    .flat_map(|(vs, els)| step(coordinates, vs, els))
    .collect();
  for (v, c) in updates {
    coordinates[v] = c;
  }
}

/// A triangle "crosses a cell" unless there is at least one cell whose
/// closure simultaneously touches every one of its vertices — not simply
/// whether they floor to the same cell, since a vertex sitting exactly on
/// a shared face is allowed to belong to either neighbour.
fn check_no_cells_are_crossed(mesh: &Mesh) -> MeshResult<()> {
  use std::collections::HashSet;

  use crate::geometry::grid_tools::get_touching_cells;
  use crate::geometry::Cell;

  for group in &mesh.groups {
    for (ei, element) in group.elements.iter().enumerate() {
      if element.kind != ElementKind::Surface {
        continue;
      }
      let mut common: Option<HashSet<Cell>> = None;
      for &v in &element.vertices {
        let touching: HashSet<Cell> = get_touching_cells(&mesh.grid, mesh.coordinates[v]).into_iter().collect();
        common = Some(match common {
          None => touching,
          Some(prev) => prev.intersection(&touching).copied().collect(),
        });
      }
      if common.map(|s| s.is_empty()).unwrap_or(true) {
        return Err(MeshError::SmoothingBrokeInvariant {
          group: group.id,
          element: ei,
        });
      }
    }
  }
  Ok(())
}

#[cfg(test)]
#[path = "smoother_test.rs"]
mod smoother_test;
