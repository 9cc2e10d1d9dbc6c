//! `tracing` helpers for the drivers, mirroring the teacher's
//! `voxel_plugin::metrics` module generalized from atomic counters to
//! structured spans/events. A no-op when the `tracing` feature is off.

#[cfg(feature = "tracing")]
use crate::geometry::Axis;
use crate::geometry::Grid;
use crate::mesh::Mesh;

/// Opens the span covering one driver call: group count, input element
/// count, and the grid's per-axis plane counts.
#[cfg(feature = "tracing")]
pub fn pipeline_span(input: &Mesh) -> tracing::Span {
  tracing::info_span!(
    "mesh_pipeline",
    groups = input.groups.len(),
    elements = input.element_count(),
    planes_x = input.grid.plane_count(Axis::X),
    planes_y = input.grid.plane_count(Axis::Y),
    planes_z = input.grid.plane_count(Axis::Z),
  )
}

#[cfg(not(feature = "tracing"))]
pub fn pipeline_span(_input: &Mesh) {}

pub fn log_stage_entry(stage: &str, mesh: &Mesh) {
  #[cfg(feature = "tracing")]
  tracing::debug!(stage, elements = mesh.element_count(), coordinates = mesh.coordinates.len(), "stage entry");
  #[cfg(not(feature = "tracing"))]
  let _ = (stage, mesh);
}

pub fn log_stage_exit(stage: &str, mesh: &Mesh) {
  #[cfg(feature = "tracing")]
  tracing::info!(stage, elements = mesh.element_count(), coordinates = mesh.coordinates.len(), "stage exit");
  #[cfg(not(feature = "tracing"))]
  let _ = (stage, mesh);
}

pub fn log_number_of_quads(n: usize) {
  #[cfg(feature = "tracing")]
  tracing::info!(quads = n, "quad count");
  #[cfg(not(feature = "tracing"))]
  let _ = n;
}

pub fn log_number_of_triangles(n: usize) {
  #[cfg(feature = "tracing")]
  tracing::info!(triangles = n, "triangle count");
  #[cfg(not(feature = "tracing"))]
  let _ = n;
}

pub fn log_number_of_lines(n: usize) {
  #[cfg(feature = "tracing")]
  tracing::info!(lines = n, "line count");
  #[cfg(not(feature = "tracing"))]
  let _ = n;
}

pub fn log_number_of_nodes(n: usize) {
  #[cfg(feature = "tracing")]
  tracing::info!(nodes = n, "node count");
  #[cfg(not(feature = "tracing"))]
  let _ = n;
}

pub fn log_grid_size(grid: &Grid) {
  #[cfg(feature = "tracing")]
  tracing::info!(
    x = grid.plane_count(Axis::X),
    y = grid.plane_count(Axis::Y),
    z = grid.plane_count(Axis::Z),
    "grid size"
  );
  #[cfg(not(feature = "tracing"))]
  let _ = grid;
}

/// Warns about an observation that does not affect the `Result` returned to
/// the caller (e.g. "N triangles collapsed").
pub fn warn_observation(message: &str) {
  #[cfg(feature = "tracing")]
  tracing::warn!("{message}");
  #[cfg(not(feature = "tracing"))]
  let _ = message;
}
