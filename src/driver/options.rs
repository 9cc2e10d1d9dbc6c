//! Driver-level tunables, following the same `with_*`/`Default` builder
//! convention as `SmootherOptions`/`SnapperOptions`.

use std::collections::HashSet;

use crate::mesh::GroupId;
use crate::smoother::SmootherOptions;
use crate::snapper::SnapperOptions;

/// Options for `build_offgrid_mesh`.
#[derive(Clone, Debug, PartialEq)]
pub struct OffgridOptions {
  /// If false, the non-slicing enlarged grid is used directly and only the
  /// post-slicing mesh carries the slicing grid.
  pub force_slicing: bool,
  /// Enables the Smoother.
  pub collapse_internal_points: bool,
  /// Enables the Snapper.
  pub snap: bool,
  pub decimal_places_in_collapser: i32,
  pub snapper_options: SnapperOptions,
  pub smoother_options: SmootherOptions,
  /// Groups whose elements are treated as solid bodies and routed through
  /// the external repairer before meshing.
  pub volume_groups: HashSet<GroupId>,
}

impl Default for OffgridOptions {
  fn default() -> Self {
    Self {
      force_slicing: true,
      collapse_internal_points: true,
      snap: true,
      decimal_places_in_collapser: 4,
      snapper_options: SnapperOptions::default(),
      smoother_options: SmootherOptions::default(),
      volume_groups: HashSet::new(),
    }
  }
}

impl OffgridOptions {
  pub fn with_force_slicing(mut self, force_slicing: bool) -> Self {
    self.force_slicing = force_slicing;
    self
  }

  pub fn with_collapse_internal_points(mut self, collapse: bool) -> Self {
    self.collapse_internal_points = collapse;
    self
  }

  pub fn with_snap(mut self, snap: bool) -> Self {
    self.snap = snap;
    self
  }

  pub fn with_decimal_places_in_collapser(mut self, places: i32) -> Self {
    self.decimal_places_in_collapser = places;
    self
  }

  pub fn with_snapper_options(mut self, opts: SnapperOptions) -> Self {
    self.snapper_options = opts;
    self
  }

  pub fn with_smoother_options(mut self, opts: SmootherOptions) -> Self {
    self.smoother_options = opts;
    self
  }

  pub fn with_volume_groups(mut self, groups: HashSet<GroupId>) -> Self {
    self.volume_groups = groups;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_enable_smoothing_and_snapping() {
    let opts = OffgridOptions::default();
    assert!(opts.force_slicing);
    assert!(opts.collapse_internal_points);
    assert!(opts.snap);
    assert_eq!(opts.decimal_places_in_collapser, 4);
  }

  #[test]
  fn builder_overrides_defaults() {
    let opts = OffgridOptions::default().with_force_slicing(false).with_snap(false);
    assert!(!opts.force_slicing);
    assert!(!opts.snap);
  }
}
