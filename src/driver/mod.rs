//! Composes the stage pipelines with options, handles the non-core boundary
//! (external reader/writer/repairer/manifolder), and expands/reduces the
//! grid around the Slicer so callers never see an "enlarged slicing grid".

mod enlarge;
pub mod external;
mod offgrid;
pub mod logging;
pub mod options;
mod structured;

pub use external::{ConstrainedTriangulator, Manifolder, MeshReader, MeshWriter, Repairer};
pub use offgrid::build_offgrid_mesh;
pub use options::OffgridOptions;
pub use structured::build_structured_mesh;

use crate::error::MeshResult;
use crate::mesh::Mesh;

/// Common capability set a driver exposes: advance its pipeline, emit its
/// own progress logs. Concrete drivers override `process`; the `log_*`
/// helpers are shared so neither driver re-derives the `tracing` call sites.
pub trait Driver {
  fn log_stage_entry(&self, stage: &str, mesh: &Mesh) {
    logging::log_stage_entry(stage, mesh);
  }

  fn log_stage_exit(&self, stage: &str, mesh: &Mesh) {
    logging::log_stage_exit(stage, mesh);
  }

  fn process(&self, input: &Mesh) -> MeshResult<Mesh>;
}

/// `Driver` wrapper around [`build_offgrid_mesh`], for callers that want the
/// trait object rather than the free function.
#[derive(Clone, Debug, Default)]
pub struct OffgridDriver {
  pub options: OffgridOptions,
}

impl Driver for OffgridDriver {
  fn process(&self, input: &Mesh) -> MeshResult<Mesh> {
    build_offgrid_mesh(input, &self.options)
  }
}

/// `Driver` wrapper around [`build_structured_mesh`].
#[derive(Clone, Copy, Debug)]
pub struct StructuredDriver {
  pub decimal_places: i32,
}

impl Default for StructuredDriver {
  fn default() -> Self {
    Self { decimal_places: 4 }
  }
}

impl Driver for StructuredDriver {
  fn process(&self, input: &Mesh) -> MeshResult<Mesh> {
    build_structured_mesh(input, self.decimal_places)
  }
}
