//! Composes Slicer -> Collapser -> Structurer into the staircased pipeline.

use crate::collapser::collapse;
use crate::driver::enlarge::{enlarged_grid, rebind_grid, reduce_to_original_grid};
use crate::driver::logging::{log_number_of_lines, log_number_of_nodes, log_number_of_quads, log_number_of_triangles, log_stage_entry, log_stage_exit, pipeline_span};
use crate::error::MeshResult;
use crate::mesh::{ElementKind, Mesh};
use crate::slicer::{slice, FanTriangulator};
use crate::structurer::structure;

/// Runs the structured (staircasing) pipeline: Slicer, Collapser, Structurer.
/// Like `build_offgrid_mesh`, the Slicer runs against an enlarged grid and
/// the result is reduced back onto `input.grid` before return.
pub fn build_structured_mesh(input: &Mesh, decimal_places: i32) -> MeshResult<Mesh> {
  let span = pipeline_span(input);
  #[cfg(feature = "tracing")]
  let _enter = span.enter();
  #[cfg(not(feature = "tracing"))]
  let _ = &span;

  let original_grid = input.grid.clone();
  let big_grid = enlarged_grid(&original_grid);
  let enlarged_input = rebind_grid(input.clone(), &original_grid, &big_grid)?;

  log_stage_entry("slicer", &enlarged_input);
  let triangulator = FanTriangulator;
  let sliced = slice(&enlarged_input, &triangulator)?;
  log_stage_exit("slicer", &sliced);

  log_stage_entry("collapser", &sliced);
  let collapsed = collapse(&sliced, decimal_places)?;
  log_stage_exit("collapser", &collapsed);

  log_stage_entry("structurer", &collapsed);
  let structured = structure(&collapsed)?;
  log_stage_exit("structurer", &structured);

  let result = reduce_to_original_grid(structured, &big_grid, &original_grid)?;
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
#[path = "structured_test.rs"]
mod structured_test;
