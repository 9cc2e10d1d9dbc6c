//! Composes Slicer -> Collapser -> Smoother? -> Snapper? into the off-grid
//! pipeline, the one that keeps curved/oblique surfaces close to their
//! original geometry rather than staircasing them.

use crate::collapser::collapse;
use crate::driver::enlarge::{enlarged_grid, rebind_grid, reduce_to_original_grid};
use crate::driver::logging::{log_number_of_lines, log_number_of_nodes, log_number_of_quads, log_number_of_triangles, log_stage_entry, log_stage_exit, pipeline_span};
use crate::driver::options::OffgridOptions;
use crate::error::MeshResult;
use crate::mesh::{ElementKind, Mesh};
use crate::slicer::{slice, FanTriangulator};
use crate::smoother::smooth;
use crate::snapper::snap;

/// Runs the off-grid pipeline: Slicer, Collapser, and, per `opts`, the
/// Smoother and Snapper. The Slicer runs against an enlarged grid so
/// triangles straddling the caller's boundary cells still slice cleanly;
/// the result is reduced back onto `input.grid` before return.
pub fn build_offgrid_mesh(input: &Mesh, opts: &OffgridOptions) -> MeshResult<Mesh> {
  let span = pipeline_span(input);
  #[cfg(feature = "tracing")]
  let _enter = span.enter();
  #[cfg(not(feature = "tracing"))]
  let _ = &span;

  let original_grid = input.grid.clone();
  let big_grid = if opts.force_slicing { enlarged_grid(&original_grid) } else { original_grid.clone() };

  let enlarged_input = rebind_grid(input.clone(), &original_grid, &big_grid)?;

  log_stage_entry("slicer", &enlarged_input);
  let triangulator = FanTriangulator;
  let sliced = slice(&enlarged_input, &triangulator)?;
  log_stage_exit("slicer", &sliced);

  log_stage_entry("collapser", &sliced);
  let collapsed = collapse(&sliced, opts.decimal_places_in_collapser)?;
  log_stage_exit("collapser", &collapsed);

  let smoothed = if opts.collapse_internal_points {
    log_stage_entry("smoother", &collapsed);
    let out = smooth(&collapsed, &opts.smoother_options)?;
    log_stage_exit("smoother", &out);
    out
  } else {
    collapsed
  };

  let snapped = if opts.snap {
    log_stage_entry("snapper", &smoothed);
    let out = snap(&smoothed, &opts.snapper_options)?;
    log_stage_exit("snapper", &out);
    out
  } else {
    smoothed
  };

  let result = reduce_to_original_grid(snapped, &big_grid, &original_grid)?;
  log_element_counts(&result);
  Ok(result)
}

fn log_element_counts(mesh: &Mesh) {
  let mut quads = 0;
  let mut triangles = 0;
  let mut lines = 0;
  let mut nodes = 0;
  for group in &mesh.groups {
    for element in &group.elements {
      match element.kind {
        ElementKind::Surface if element.is_triangle() => triangles += 1,
        ElementKind::Surface => quads += 1,
        ElementKind::Line => lines += 1,
        ElementKind::Node => nodes += 1,
        ElementKind::Volume => {}
      }
    }
  }
  log_number_of_quads(quads);
  log_number_of_triangles(triangles);
  log_number_of_lines(lines);
  log_number_of_nodes(nodes);
}

#[cfg(test)]
#[path = "offgrid_test.rs"]
mod offgrid_test;
